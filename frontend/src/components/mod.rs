pub mod agreement_modal;
pub mod booking_calendar;
pub mod filter_bar;
pub mod listing_grid;
pub mod rental_summary;
