//! System orchestration, startup, and shutdown logic.

pub mod hotel_system;
pub mod tracing;

pub use self::hotel_system::*;
pub use self::tracing::*;
