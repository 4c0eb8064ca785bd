//! Booking calendar engine for the agrorent rental marketplace client.
//!
//! This crate owns the date-selection and availability logic behind the
//! renting page: classifying days from server-reported availability,
//! driving the date-range selection state machine, validating ranges
//! against confirmed bookings, pricing the resulting rental, and running
//! the submission flow against the backend boundaries. The UI layer only
//! handles presentation; every calendar computation and business rule
//! lives here.

pub mod availability;
pub mod booking;
pub mod date;
pub mod filters;
pub mod grid;
pub mod labels;
pub mod pricing;
pub mod providers;
pub mod selection;

pub use availability::{
    classify, scan_range, validate_range, AvailabilitySnapshot, AvailabilityWindow, DayStatus,
    RangeConflict,
};
pub use booking::{BookingCalendar, BookingDraft, DraftError, RentalQuote, SubmitOutcome};
pub use date::CalendarDate;
pub use filters::{ListingQuery, SortOrder};
pub use grid::{render_calendar, CalendarView, DayCell, MonthView, RangePosition};
pub use labels::CalendarLabels;
pub use pricing::{compute_total, format_inr, rental_days};
pub use providers::{AvailabilityProvider, ProviderError, RentalGateway};
pub use selection::{DateSelector, SelectionConfig, SelectionSignal, SelectionState};
