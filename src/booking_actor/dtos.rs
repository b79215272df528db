use serde::Deserialize;

use crate::domain::BookingRequest;
use crate::pricing::PricingResult;

/// A request that has already been priced against its room.
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub request: BookingRequest,
    pub pricing: PricingResult,
}

/// Editable booking details. Dates, prices and status cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub special_requests: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}
