#[macro_use]
mod macros;

pub mod admin_client;
pub mod booking_client;
pub mod room_client;
pub mod user_client;

pub use admin_client::*;
pub use booking_client::*;
pub use room_client::*;
pub use user_client::*;
