use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),
    #[error("Room validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(RoomError);
