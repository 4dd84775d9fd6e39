//! Seams to the external collaborators: persistence and qualitative feedback.

mod gateway;
mod store;

pub use gateway::IFeedbackGateway;
pub use store::IMasteryStore;
