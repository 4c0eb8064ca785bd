pub mod use_booking_calendar;
pub mod use_listings;
