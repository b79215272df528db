mod actor_framework;
mod app_system;
mod booking_actor;
mod clients;
mod config;
mod domain;
mod lifecycle;
mod pricing;
mod room_actor;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use chrono::NaiveDate;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, HotelSystem};
use crate::config::HotelConfig;
use crate::booking_actor::BookingPatch;
use crate::domain::{
    BookingRequest, BookingStatus, PaymentMethod, RoomCategory, RoomRates, UserCreate, UserPatch,
};
use crate::room_actor::RoomCreate;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| format!("invalid date {year}-{month}-{day}"))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = HotelConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!("Starting application with hotel booking system");

    let system = HotelSystem::new(&config);

    let admin = system
        .user_client
        .create_user(UserCreate::admin("Front Desk", "frontdesk@hotel.example"))
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("room_setup");
    let (deluxe, twin) = async {
        info!("Creating rooms");
        let deluxe = system
            .admin_client
            .create_room(&admin.id, RoomCreate::new("Deluxe King", RoomRates::flat(2500.0)))
            .await?;
        let twin = system
            .admin_client
            .create_room(
                &admin.id,
                RoomCreate::new(
                    "Garden Twin",
                    RoomRates::by_category([(RoomCategory::Single, 1800.0), (RoomCategory::Double, 2500.0)]),
                )
                .with_max_guests(3),
            )
            .await?;
        Ok::<_, crate::clients::AdminError>((deluxe, twin))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let customer = system
        .user_client
        .create_user(UserCreate::customer("Maria Santos", "maria@example.com"))
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("booking_processing");
    let booking = async {
        info!("Booking the deluxe room for three nights");
        let request = BookingRequest::new(
            customer.name.clone(),
            customer.email.clone(),
            "09171234567",
            deluxe.id.clone(),
            date(2024, 6, 1)?,
            date(2024, 6, 4)?,
        )
        .with_user(customer.id.clone())
        .with_payment_method(PaymentMethod::Gcash);
        system
            .booking_client
            .create_booking(request)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(booking_id = %booking.id, total_price = booking.total_price, "Booking created");

    // A per-category room without a category cannot be priced
    let unpriced = BookingRequest::new(
        customer.name.clone(),
        customer.email.clone(),
        "09171234567",
        twin.id.clone(),
        date(2024, 6, 10)?,
        date(2024, 6, 12)?,
    );
    match system.booking_client.quote(unpriced).await {
        Ok(quote) => info!(total_price = quote.total_price(), "Unexpected quote"),
        Err(e) => error!(error = %e, "Quote rejected (expected - no room category requested)"),
    }

    let span = tracing::info_span!("family_booking");
    let family = async {
        let available = system.room_client.list_available_rooms().await.map_err(|e| e.to_string())?;
        let fits = system.room_client.search_rooms(Some(3)).await.map_err(|e| e.to_string())?;
        info!(available = available.len(), fitting = fits.len(), "Searched rooms for a party of three");

        let room = fits
            .first()
            .ok_or_else(|| "no room fits a party of three".to_string())?;
        let request = BookingRequest::new(
            customer.name.clone(),
            customer.email.clone(),
            "09171234567",
            room.id.clone(),
            date(2024, 7, 20)?,
            date(2024, 7, 22)?,
        )
        .with_category(RoomCategory::Double)
        .with_guests(3)
        .with_user(customer.id.clone());
        let booking = system
            .booking_client
            .create_booking(request)
            .await
            .map_err(|e| e.to_string())?;

        system
            .booking_client
            .update_booking(
                booking.id,
                BookingPatch {
                    special_requests: Some("Extra bed for a child".to_string()),
                    ..BookingPatch::default()
                },
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(booking_id = %family.id, total_price = family.total_price, "Family booking created");

    system
        .user_client
        .update_user(
            customer.id.clone(),
            UserPatch {
                contact_number: Some("09171234567".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;

    let confirmed = system
        .admin_client
        .update_booking_status(&admin.id, booking.id.clone(), BookingStatus::Confirmed)
        .await
        .map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&confirmed).map_err(|e| e.to_string())?;
    info!(booking = %json, "Booking confirmed");

    let stats = system
        .admin_client
        .dashboard(&admin.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        rooms = stats.total_rooms,
        bookings = stats.total_bookings,
        revenue = stats.total_revenue,
        "Dashboard"
    );

    let recent = system
        .admin_client
        .recent_bookings(&admin.id, 5)
        .await
        .map_err(|e| e.to_string())?;
    for booking in &recent {
        info!(booking_id = %booking.id, status = %booking.status, "Recent booking");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
