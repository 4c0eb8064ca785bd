//! The per-listing booking flow.
//!
//! `BookingCalendar` owns everything one open listing view needs: the
//! listing's pricing attributes and availability window, the last fetched
//! availability snapshot, and the selection machine. It is created when the
//! details view opens and dropped when it closes; opening a different
//! listing starts from a fresh instance, so selection state can never leak
//! across listings.

use crate::availability::{
    classify, scan_range, validate_range, AvailabilitySnapshot, AvailabilityWindow, RangeConflict,
};
use crate::date::CalendarDate;
use crate::grid::{render_calendar, CalendarView};
use crate::pricing::{compute_total, rental_days};
use crate::providers::{AvailabilityProvider, ProviderError, RentalGateway};
use crate::selection::{DateSelector, SelectionConfig, SelectionSignal, SelectionState};
use shared::{Listing, SubmitRentalRequest};
use thiserror::Error;

/// Price summary for the currently selected range.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuote {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: u32,
    pub total_amount: f64,
    /// Set when the range overlaps a pending request; submission is still
    /// allowed, the owner reviews competing requests
    pub pending_overlap: Option<CalendarDate>,
}

/// A finalized booking ready for submission, discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub listing_id: i64,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: u32,
    pub total_amount: f64,
    pub renter_address: String,
    pub location_of_use: String,
}

impl BookingDraft {
    pub fn to_request(&self) -> SubmitRentalRequest {
        SubmitRentalRequest {
            listing_id: self.listing_id,
            start_date: self.start.to_string(),
            days: self.days,
            renter_address: self.renter_address.clone(),
            location_of_use: self.location_of_use.clone(),
        }
    }
}

/// Why a draft could not be produced. All of these are recovered locally:
/// the message is shown inline and the selection stays put.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("select a start and end date on the calendar first")]
    IncompleteSelection,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("selected dates are already booked")]
    RangeUnavailable,
}

/// Result of a submission the server actually answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted; selection has been cleared
    Accepted {
        rental_id: Option<i64>,
        message: Option<String>,
    },
    /// Rejected because another rental was confirmed over these dates since
    /// the last fetch; selection has been cleared and availability refetched
    BookedConflict { message: Option<String> },
    /// Rejected for any other reason; selection left intact for a retry
    Rejected { message: String },
}

pub struct BookingCalendar {
    listing: Listing,
    window: AvailabilityWindow,
    snapshot: AvailabilitySnapshot,
    selector: DateSelector,
}

impl BookingCalendar {
    /// Open the calendar for one listing. The snapshot starts empty;
    /// `refresh` must run before the first render that depends on it.
    pub fn open(listing: Listing, today: CalendarDate, config: SelectionConfig) -> Self {
        let window = AvailabilityWindow::for_listing(&listing, today);
        log::debug!("📅 opening booking calendar for listing {}", listing.id);
        Self {
            listing,
            window,
            snapshot: AvailabilitySnapshot::empty(),
            selector: DateSelector::new(config),
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn window(&self) -> &AvailabilityWindow {
        &self.window
    }

    pub fn snapshot(&self) -> &AvailabilitySnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> SelectionState {
        self.selector.selection()
    }

    pub fn clear_selection(&mut self) {
        self.selector.reset();
    }

    /// Replace the snapshot with a freshly fetched payload. Split out from
    /// `refresh` so event-loop callers can fetch without holding a borrow on
    /// the calendar across the await.
    pub fn apply_availability(&mut self, response: &shared::AvailabilityResponse) {
        self.snapshot = AvailabilitySnapshot::from_response(response);
        log::debug!(
            "📅 availability refreshed for listing {}: {} pending, {} confirmed",
            self.listing.id,
            self.snapshot.pending_count(),
            self.snapshot.confirmed_count()
        );
    }

    /// Refetch the availability sets. Always a full refetch; the snapshot is
    /// never reused across renders that need fresh data.
    pub async fn refresh<P: AvailabilityProvider>(
        &mut self,
        provider: &P,
    ) -> Result<(), ProviderError> {
        let response = provider.availability(self.listing.id).await?;
        self.apply_availability(&response);
        Ok(())
    }

    /// Route one day click through the selection machine, classifying the
    /// day against the current snapshot first.
    pub fn handle_click(
        &mut self,
        date: CalendarDate,
        now_ms: u64,
        today: CalendarDate,
    ) -> SelectionSignal {
        let status = classify(date, today, &self.window, &self.snapshot);
        let signal = self.selector.click(date, now_ms, status, &self.snapshot);
        if signal == SelectionSignal::RangeRejected {
            log::debug!("selection over {} rejected, range contains booked dates", date);
        }
        signal
    }

    /// Render the three-month grid from held state. Pure; two calls with the
    /// same inputs yield the same view.
    pub fn view(&self, today: CalendarDate) -> CalendarView {
        render_calendar(today, &self.window, &self.snapshot, &self.selector.selection())
    }

    /// Price summary for the current complete range, if any.
    pub fn quote(&self) -> Option<RentalQuote> {
        let (start, end) = self.selector.selection().range()?;
        let days = rental_days(start, end);
        let pending_overlap = match scan_range(start, end, &self.snapshot) {
            RangeConflict::Pending(date) => Some(date),
            _ => None,
        };
        Some(RentalQuote {
            start,
            end,
            days,
            total_amount: compute_total(
                self.listing.price,
                self.listing.pricing_unit,
                days,
                self.listing.transport_included,
                self.listing.transport_charge,
            ),
            pending_overlap,
        })
    }

    /// Build the submission draft, re-validating the range against the
    /// current snapshot and requiring the agreement fields.
    pub fn draft(
        &self,
        renter_address: &str,
        location_of_use: &str,
    ) -> Result<BookingDraft, DraftError> {
        let quote = self.quote().ok_or(DraftError::IncompleteSelection)?;
        if !validate_range(quote.start, quote.end, &self.snapshot) {
            return Err(DraftError::RangeUnavailable);
        }
        let renter_address = renter_address.trim();
        if renter_address.is_empty() {
            return Err(DraftError::MissingField("renter address"));
        }
        let location_of_use = location_of_use.trim();
        if location_of_use.is_empty() {
            return Err(DraftError::MissingField("location of use"));
        }
        Ok(BookingDraft {
            listing_id: self.listing.id,
            start: quote.start,
            end: quote.end,
            days: quote.days,
            total_amount: quote.total_amount,
            renter_address: renter_address.to_string(),
            location_of_use: location_of_use.to_string(),
        })
    }

    /// Apply the server's verdict on a submitted draft. Acceptance and
    /// booked conflicts both drop the selection; after a booked conflict the
    /// caller must refetch availability before the next render, since the
    /// local snapshot is known stale.
    pub fn note_submission(
        &mut self,
        draft: &BookingDraft,
        response: &shared::SubmitRentalResponse,
    ) -> SubmitOutcome {
        if response.success {
            self.selector.reset();
            log::info!(
                "📅 rental request for listing {} accepted (rental {:?})",
                draft.listing_id,
                response.rental_id
            );
            return SubmitOutcome::Accepted {
                rental_id: response.rental_id,
                message: response.message.clone(),
            };
        }

        if response.is_booked_conflict() {
            self.selector.reset();
            return SubmitOutcome::BookedConflict {
                message: response.message.clone(),
            };
        }

        SubmitOutcome::Rejected {
            message: response
                .message
                .clone()
                .unwrap_or_else(|| "Failed to submit rental request".to_string()),
        }
    }

    /// Submit a draft. The server is the sole arbiter of conflicts: a
    /// `booked` rejection means the local snapshot went stale between
    /// validation and submission, so the selection is dropped and the
    /// snapshot refetched before the caller re-renders. A transport error
    /// leaves everything untouched for a manual retry.
    pub async fn submit<G, P>(
        &mut self,
        gateway: &G,
        provider: &P,
        draft: &BookingDraft,
    ) -> Result<SubmitOutcome, ProviderError>
    where
        G: RentalGateway,
        P: AvailabilityProvider,
    {
        let response = gateway.submit_rental(&draft.to_request()).await?;
        let outcome = self.note_submission(draft, &response);

        if matches!(outcome, SubmitOutcome::BookedConflict { .. }) {
            if let Err(err) = self.refresh(provider).await {
                log::warn!("availability refetch after booked conflict failed: {}", err);
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{AvailabilityResponse, SubmitRentalResponse};
    use std::cell::{Cell, RefCell};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn today() -> CalendarDate {
        date("2025-06-01")
    }

    fn listing_per_day() -> Listing {
        serde_json::from_str(
            r#"{
                "id": 7,
                "title": "John Deere 5050D",
                "category": "Tractor",
                "equipment_name": "Tractor",
                "brand": "John Deere",
                "condition": "Good",
                "price": 100.0,
                "pricing_type": "Per day",
                "state": "Maharashtra",
                "district": "Pune",
                "village_city": "Baramati",
                "transport_included": "No",
                "transport_charge": 50.0,
                "available_from": "2025-06-01",
                "available_till": "2025-12-31"
            }"#,
        )
        .unwrap()
    }

    /// Test double for both collaborator boundaries.
    struct FakeApi {
        availability: RefCell<AvailabilityResponse>,
        availability_fetches: Cell<usize>,
        submit_response: RefCell<Result<SubmitRentalResponse, ProviderError>>,
    }

    impl FakeApi {
        fn new(pending: &[&str], confirmed: &[&str]) -> Self {
            Self {
                availability: RefCell::new(AvailabilityResponse {
                    pending_dates: pending.iter().map(|s| s.to_string()).collect(),
                    confirmed_dates: confirmed.iter().map(|s| s.to_string()).collect(),
                }),
                availability_fetches: Cell::new(0),
                submit_response: RefCell::new(Ok(SubmitRentalResponse {
                    success: true,
                    rental_id: Some(41),
                    message: Some("Rental request submitted successfully!".to_string()),
                    booked: None,
                })),
            }
        }

        fn set_confirmed(&self, confirmed: &[&str]) {
            self.availability.borrow_mut().confirmed_dates =
                confirmed.iter().map(|s| s.to_string()).collect();
        }

        fn set_submit_response(&self, response: Result<SubmitRentalResponse, ProviderError>) {
            *self.submit_response.borrow_mut() = response;
        }
    }

    #[async_trait(?Send)]
    impl AvailabilityProvider for FakeApi {
        async fn availability(
            &self,
            _listing_id: i64,
        ) -> Result<AvailabilityResponse, ProviderError> {
            self.availability_fetches
                .set(self.availability_fetches.get() + 1);
            Ok(self.availability.borrow().clone())
        }
    }

    #[async_trait(?Send)]
    impl RentalGateway for FakeApi {
        async fn submit_rental(
            &self,
            _request: &SubmitRentalRequest,
        ) -> Result<SubmitRentalResponse, ProviderError> {
            self.submit_response.borrow().clone()
        }
    }

    fn open_calendar() -> BookingCalendar {
        BookingCalendar::open(listing_per_day(), today(), SelectionConfig::default())
    }

    fn select_range(calendar: &mut BookingCalendar, start: &str, end: &str) {
        calendar.handle_click(date(start), 0, today());
        calendar.handle_click(date(end), 10_000, today());
    }

    #[tokio::test]
    async fn test_refresh_populates_snapshot() {
        let api = FakeApi::new(&["2025-06-15"], &["2025-06-20"]);
        let mut calendar = open_calendar();

        calendar.refresh(&api).await.unwrap();

        assert!(calendar.snapshot().is_pending(date("2025-06-15")));
        assert!(calendar.snapshot().is_confirmed(date("2025-06-20")));
        assert_eq!(api.availability_fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_quote_prices_the_selected_range() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();

        select_range(&mut calendar, "2025-06-08", "2025-06-10");

        let quote = calendar.quote().unwrap();
        assert_eq!(quote.days, 3);
        // 3 days at 100 plus the flat 50 transport charge.
        assert_eq!(quote.total_amount, 350.0);
        assert_eq!(quote.pending_overlap, None);
    }

    #[tokio::test]
    async fn test_quote_flags_pending_overlap() {
        let api = FakeApi::new(&["2025-06-09"], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();

        select_range(&mut calendar, "2025-06-08", "2025-06-10");

        let quote = calendar.quote().unwrap();
        assert_eq!(quote.pending_overlap, Some(date("2025-06-09")));
    }

    #[tokio::test]
    async fn test_range_over_confirmed_date_resets_selection() {
        let api = FakeApi::new(&[], &["2025-06-10"]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();

        calendar.handle_click(date("2025-06-08"), 0, today());
        let signal = calendar.handle_click(date("2025-06-12"), 10_000, today());

        assert_eq!(signal, SelectionSignal::RangeRejected);
        assert!(calendar.selection().is_empty());
        assert!(calendar.quote().is_none());
    }

    #[tokio::test]
    async fn test_clicks_on_booked_days_are_ignored() {
        let api = FakeApi::new(&[], &["2025-06-10"]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();

        let signal = calendar.handle_click(date("2025-06-10"), 0, today());
        assert_eq!(signal, SelectionSignal::Ignored);

        let signal = calendar.handle_click(date("2025-05-20"), 1_000, today());
        assert_eq!(signal, SelectionSignal::Ignored);

        assert!(calendar.selection().is_empty());
    }

    #[tokio::test]
    async fn test_draft_requires_range_and_agreement_fields() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();

        assert_eq!(
            calendar.draft("addr", "field").unwrap_err(),
            DraftError::IncompleteSelection
        );

        select_range(&mut calendar, "2025-06-08", "2025-06-10");

        assert_eq!(
            calendar.draft("  ", "field").unwrap_err(),
            DraftError::MissingField("renter address")
        );
        assert_eq!(
            calendar.draft("12 Farm Lane", "").unwrap_err(),
            DraftError::MissingField("location of use")
        );

        let draft = calendar.draft("12 Farm Lane", "North field").unwrap();
        assert_eq!(draft.listing_id, 7);
        assert_eq!(draft.days, 3);
        assert_eq!(draft.total_amount, 350.0);
        assert_eq!(draft.to_request().start_date, "2025-06-08");
    }

    #[tokio::test]
    async fn test_draft_rechecks_range_against_snapshot() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");

        // Another booking lands before the draft is built.
        api.set_confirmed(&["2025-06-09"]);
        calendar.refresh(&api).await.unwrap();

        assert_eq!(
            calendar.draft("addr", "field").unwrap_err(),
            DraftError::RangeUnavailable
        );
        // The selection itself is kept; the view will re-render it against
        // the new snapshot.
        assert!(!calendar.selection().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_clears_selection() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");
        let draft = calendar.draft("addr", "field").unwrap();

        let outcome = calendar.submit(&api, &api, &draft).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                rental_id: Some(41),
                message: Some("Rental request submitted successfully!".to_string()),
            }
        );
        assert!(calendar.selection().is_empty());
    }

    #[tokio::test]
    async fn test_submit_booked_conflict_clears_and_refetches() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");
        let draft = calendar.draft("addr", "field").unwrap();

        // The server confirmed a competing rental in the meantime.
        api.set_confirmed(&["2025-06-09"]);
        api.set_submit_response(Ok(SubmitRentalResponse {
            success: false,
            rental_id: None,
            message: Some("These dates are already booked".to_string()),
            booked: Some(true),
        }));
        let fetches_before = api.availability_fetches.get();

        let outcome = calendar.submit(&api, &api, &draft).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::BookedConflict {
                message: Some("These dates are already booked".to_string()),
            }
        );
        assert!(calendar.selection().is_empty());
        // Availability was refetched and the stale snapshot replaced.
        assert_eq!(api.availability_fetches.get(), fetches_before + 1);
        assert!(calendar.snapshot().is_confirmed(date("2025-06-09")));
    }

    #[tokio::test]
    async fn test_submit_plain_rejection_keeps_selection() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");
        let draft = calendar.draft("addr", "field").unwrap();

        api.set_submit_response(Ok(SubmitRentalResponse {
            success: false,
            rental_id: None,
            message: Some("Owner has paused this listing".to_string()),
            booked: None,
        }));

        let outcome = calendar.submit(&api, &api, &draft).await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Owner has paused this listing".to_string(),
            }
        );
        assert!(!calendar.selection().is_empty());
    }

    #[tokio::test]
    async fn test_submit_network_error_keeps_selection() {
        let api = FakeApi::new(&[], &[]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");
        let draft = calendar.draft("addr", "field").unwrap();

        api.set_submit_response(Err(ProviderError::Network("connection reset".to_string())));

        let err = calendar.submit(&api, &api, &draft).await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
        assert!(!calendar.selection().is_empty());
    }

    #[tokio::test]
    async fn test_view_renders_from_held_state() {
        let api = FakeApi::new(&[], &["2025-06-20"]);
        let mut calendar = open_calendar();
        calendar.refresh(&api).await.unwrap();
        select_range(&mut calendar, "2025-06-08", "2025-06-10");

        let view = calendar.view(today());
        assert_eq!(view.months.len(), 3);
        let first = view.months.first().unwrap();
        assert_eq!((first.year, first.month), (2025, 6));

        let again = calendar.view(today());
        assert_eq!(view, again);
    }
}
