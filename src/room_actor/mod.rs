//! Room store: room records and their rate validation.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
