use crate::errors::GatewayError;
use crate::models::Critique;

/// Opaque qualitative-feedback service for produced sentences.
///
/// Never consulted for pass/fail decisions.
pub trait IFeedbackGateway: Send + Sync {
    fn critique(&self, sentence: &str, target_form: &str) -> Result<Critique, GatewayError>;
}
