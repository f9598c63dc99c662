use crate::domain::models::{
    booking::NewBooking,
    property::NewProperty,
    task::NewTask,
    user::NewUser,
};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::OsRng;
use tracing::info;

/// Demo password for every seeded account.
const SEED_PASSWORD: &str = "password";

/// Populates the store with demo users, properties, bookings, and tasks the
/// first time the service starts against an empty database. No-op otherwise.
pub async fn seed_if_empty(state: &AppState) -> Result<(), AppError> {
    if state.user_repo.count().await? > 0 {
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(SEED_PASSWORD.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let users = [
        ("Admin User", "admin@example.com", "admin"),
        ("Property Manager", "manager@example.com", "staff"),
        ("John Owner", "owner@example.com", "owner"),
    ];
    for (name, email, role) in users {
        state
            .user_repo
            .create(&NewUser {
                name: name.into(),
                email: email.into(),
                password_hash: password_hash.clone(),
                role: role.into(),
            })
            .await?;
    }

    let properties = [
        ("Luxury Downtown Apartment", "123 Main St, Downtown", "apartment", 2, 2, 4, 150.00),
        ("Cozy Beach House", "456 Ocean Ave, Beachfront", "house", 3, 2, 6, 250.00),
        ("Modern Studio Loft", "789 Art District, Creative Quarter", "studio", 1, 1, 2, 85.00),
    ];
    for (name, address, kind, bedrooms, bathrooms, max_guests, price) in properties {
        state
            .property_repo
            .create(&NewProperty {
                name: name.into(),
                address: address.into(),
                property_type: kind.into(),
                bedrooms,
                bathrooms,
                max_guests,
                price_per_night: price,
                owner_id: Some(3),
            })
            .await?;
    }

    let bookings = [
        (1, "Alice Johnson", "alice@example.com", "+1234567890", "2024-02-15", "2024-02-18", 2, 450.00, "confirmed", "airbnb"),
        (2, "Bob Smith", "bob@example.com", "+1234567891", "2024-02-20", "2024-02-25", 4, 1250.00, "pending", "booking.com"),
        (3, "Carol Davis", "carol@example.com", "+1234567892", "2024-02-10", "2024-02-12", 1, 170.00, "completed", "direct"),
    ];
    for (property_id, name, email, phone, check_in, check_out, guests, amount, status, channel) in bookings {
        let booking = NewBooking {
            property_id,
            guest_name: name.into(),
            guest_email: email.into(),
            guest_phone: Some(phone.into()),
            check_in: parse_date(check_in),
            check_out: parse_date(check_out),
            guests,
            total_amount: amount,
            status: status.into(),
            channel: channel.into(),
        };
        booking.validate()?;
        state.booking_repo.create(&booking).await?;
    }

    let tasks = [
        (1, 1, "Pre-arrival cleaning", "Deep clean apartment before guest arrival", "cleaning", "completed", "2024-02-14 10:00:00"),
        (2, 2, "Check-in preparation", "Prepare welcome package and keys", "checkin", "pending", "2024-02-20 14:00:00"),
        (3, 3, "Post-checkout inspection", "Inspect property after guest departure", "checkout", "completed", "2024-02-12 12:00:00"),
    ];
    for (property_id, booking_id, title, description, kind, status, due) in tasks {
        let id = state
            .task_repo
            .create(&NewTask {
                property_id: Some(property_id),
                booking_id: Some(booking_id),
                title: title.into(),
                description: Some(description.into()),
                task_type: kind.into(),
                assigned_to: Some(2),
                due_date: Some(parse_datetime(due)),
            })
            .await?;
        if status != "pending" {
            state.task_repo.update_status(id, status).await?;
        }
    }

    info!("Database seeded successfully");
    Ok(())
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("invalid seed date")
}

fn parse_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("invalid seed datetime")
}
