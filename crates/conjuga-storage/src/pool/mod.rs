//! Connection handling. One connection serves reads and writes.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
