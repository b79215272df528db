use std::cmp::Ordering;

pub mod booking;
pub mod room;
pub mod user;

pub use booking::*;
pub use room::*;
pub use user::*;

/// Orders store-assigned ids (`prefix_N`) by their sequence number, so that
/// `booking_9` comes before `booking_10`.
pub fn cmp_sequential_ids(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
