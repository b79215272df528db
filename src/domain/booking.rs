use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::room::RoomCategory;

/// Where a booking stands in its lifecycle.
///
/// See [`crate::lifecycle`] for the permitted transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    #[allow(dead_code)]
    pub const ALL: [BookingStatus; 6] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
        }
    }

    /// Bookings in these states contribute to revenue figures.
    pub fn counts_as_revenue(&self) -> bool {
        matches!(
            self,
            BookingStatus::Confirmed
                | BookingStatus::Completed
                | BookingStatus::CheckedIn
                | BookingStatus::CheckedOut
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    Gcash,
    Paypal,
}

fn default_guests() -> u32 {
    1
}

/// What a customer submits when asking for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub customer_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "contact number is required"))]
    pub contact_number: String,
    #[validate(length(min = 1, message = "room id is required"))]
    pub room_id: String,
    pub room_category: Option<RoomCategory>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_guests")]
    #[validate(range(min = 1, message = "at least one guest is required"))]
    pub number_of_guests: u32,
    pub special_requests: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Registered user placing the booking, if any.
    pub user_id: Option<String>,
}

impl BookingRequest {
    pub fn new(
        customer_name: impl Into<String>,
        email: impl Into<String>,
        contact_number: impl Into<String>,
        room_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            email: email.into(),
            contact_number: contact_number.into(),
            room_id: room_id.into(),
            room_category: None,
            check_in,
            check_out,
            number_of_guests: default_guests(),
            special_requests: None,
            payment_method: PaymentMethod::default(),
            user_id: None,
        }
    }

    pub fn with_category(mut self, category: RoomCategory) -> Self {
        self.room_category = Some(category);
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.number_of_guests = guests;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }
}

/// A priced, persisted booking.
///
/// Dates and price fields are fixed at creation; only `status` and the
/// contact details in [`crate::booking_actor::BookingPatch`] change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: Option<String>,
    pub customer_name: String,
    pub email: String,
    pub contact_number: String,
    pub room_id: String,
    pub room_category: Option<RoomCategory>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    pub special_requests: Option<String>,
    pub payment_method: PaymentMethod,
    pub nights: u32,
    pub nightly_rate: f64,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        for status in BookingStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_request_defaults_when_deserialized() {
        let json = r#"{
            "customerName": "Maria Santos",
            "email": "maria@example.com",
            "contactNumber": "09171234567",
            "roomId": "room_1",
            "roomCategory": "double",
            "checkIn": "2024-06-01",
            "checkOut": "2024-06-03"
        }"#;
        let request: BookingRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.number_of_guests, 1);
        assert_eq!(request.payment_method, PaymentMethod::Cash);
        assert_eq!(request.room_category, Some(RoomCategory::Double));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation_rejects_bad_contact_details() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let request = BookingRequest::new("", "not-an-email", "0917", "room_1", date, date)
            .with_guests(0);

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("customer_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("number_of_guests"));
        assert!(!fields.contains_key("contact_number"));
    }
}
