//! Availability snapshots and day classification.
//!
//! A snapshot holds the two server-reported date sets for one listing:
//! dates covered by rental requests still awaiting approval, and dates
//! covered by confirmed rentals. Snapshots are always rebuilt from a fresh
//! fetch before a render that depends on them; nothing here is cached.

use crate::date::{range_inclusive, CalendarDate};
use serde::{Deserialize, Serialize};
use shared::{AvailabilityResponse, Listing};
use std::collections::BTreeSet;

/// The pending/confirmed date sets for one listing, as of the last fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilitySnapshot {
    pending: BTreeSet<CalendarDate>,
    confirmed: BTreeSet<CalendarDate>,
}

impl AvailabilitySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from the wire payload. Unparseable date strings are
    /// dropped rather than failing the whole payload.
    pub fn from_response(response: &AvailabilityResponse) -> Self {
        let parse_all = |dates: &[String]| {
            dates
                .iter()
                .filter_map(|raw| match CalendarDate::parse(raw) {
                    Ok(date) => Some(date),
                    Err(err) => {
                        log::warn!("dropping malformed availability date {:?}: {}", raw, err);
                        None
                    }
                })
                .collect::<BTreeSet<_>>()
        };
        Self {
            pending: parse_all(&response.pending_dates),
            confirmed: parse_all(&response.confirmed_dates),
        }
    }

    #[cfg(test)]
    pub fn from_dates(pending: &[&str], confirmed: &[&str]) -> Self {
        let collect = |dates: &[&str]| {
            dates
                .iter()
                .map(|d| CalendarDate::parse(d).unwrap())
                .collect::<BTreeSet<_>>()
        };
        Self {
            pending: collect(pending),
            confirmed: collect(confirmed),
        }
    }

    pub fn is_pending(&self, date: CalendarDate) -> bool {
        self.pending.contains(&date)
    }

    pub fn is_confirmed(&self, date: CalendarDate) -> bool {
        self.confirmed.contains(&date)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }
}

/// The listing's open availability window. The lower bound is always
/// concrete: when a listing carries no `available_from`, today stands in,
/// matching how the details view treats such listings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityWindow {
    pub from: CalendarDate,
    pub till: Option<CalendarDate>,
}

impl AvailabilityWindow {
    pub fn new(from: CalendarDate, till: Option<CalendarDate>) -> Self {
        Self { from, till }
    }

    /// Window for a listing record; unparseable bounds degrade the same way
    /// absent ones do.
    pub fn for_listing(listing: &Listing, today: CalendarDate) -> Self {
        let from = listing
            .available_from
            .as_deref()
            .and_then(|raw| CalendarDate::parse(raw).ok())
            .unwrap_or(today);
        let till = listing
            .available_till
            .as_deref()
            .and_then(|raw| CalendarDate::parse(raw).ok());
        Self { from, till }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.from && self.till.map_or(true, |till| date <= till)
    }
}

/// Classification of one calendar day, derived per render and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    /// Open for selection
    Available,
    /// Requested by someone, awaiting owner approval; blocked from selection
    /// here, though only the server arbitrates pending conflicts at
    /// submission time
    Pending,
    /// Covered by an approved rental; never selectable
    Confirmed,
    /// Outside the listing's availability window
    OutOfWindow,
    /// Before today
    Past,
}

impl DayStatus {
    pub fn is_selectable(&self) -> bool {
        matches!(self, DayStatus::Available)
    }
}

/// Classify one day against today, the listing window, and the snapshot.
pub fn classify(
    date: CalendarDate,
    today: CalendarDate,
    window: &AvailabilityWindow,
    snapshot: &AvailabilitySnapshot,
) -> DayStatus {
    if date < today {
        DayStatus::Past
    } else if !window.contains(date) {
        DayStatus::OutOfWindow
    } else if snapshot.is_confirmed(date) {
        DayStatus::Confirmed
    } else if snapshot.is_pending(date) {
        DayStatus::Pending
    } else {
        DayStatus::Available
    }
}

/// First conflict found in a closed date interval. Confirmed conflicts are
/// reported ahead of pending ones regardless of position: a confirmed date
/// anywhere in the range blocks it, while a pending overlap is only a
/// warning the renter may choose to submit through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeConflict {
    Clear,
    Pending(CalendarDate),
    Confirmed(CalendarDate),
}

pub fn scan_range(
    start: CalendarDate,
    end: CalendarDate,
    snapshot: &AvailabilitySnapshot,
) -> RangeConflict {
    for date in range_inclusive(start, end) {
        if snapshot.is_confirmed(date) {
            return RangeConflict::Confirmed(date);
        }
    }
    for date in range_inclusive(start, end) {
        if snapshot.is_pending(date) {
            return RangeConflict::Pending(date);
        }
    }
    RangeConflict::Clear
}

/// True iff no confirmed date lies inside `[start, end]`. Pending overlap
/// does not fail validation.
pub fn validate_range(
    start: CalendarDate,
    end: CalendarDate,
    snapshot: &AvailabilitySnapshot,
) -> bool {
    !matches!(scan_range(start, end, snapshot), RangeConflict::Confirmed(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn window(from: &str, till: Option<&str>) -> AvailabilityWindow {
        AvailabilityWindow::new(date(from), till.map(date))
    }

    #[test]
    fn test_snapshot_drops_malformed_dates() {
        let response = AvailabilityResponse {
            pending_dates: vec!["2025-06-10".to_string(), "not-a-date".to_string()],
            confirmed_dates: vec!["2025-06-20".to_string()],
        };
        let snapshot = AvailabilitySnapshot::from_response(&response);
        assert!(snapshot.is_pending(date("2025-06-10")));
        assert!(snapshot.is_confirmed(date("2025-06-20")));
        assert_eq!(snapshot.pending_count(), 1);
    }

    #[test]
    fn test_classify_precedence() {
        let today = date("2025-06-05");
        let w = window("2025-06-01", Some("2025-08-31"));
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-10"], &["2025-06-12"]);

        assert_eq!(classify(date("2025-06-04"), today, &w, &snapshot), DayStatus::Past);
        assert_eq!(
            classify(date("2025-09-01"), today, &w, &snapshot),
            DayStatus::OutOfWindow
        );
        assert_eq!(
            classify(date("2025-06-12"), today, &w, &snapshot),
            DayStatus::Confirmed
        );
        assert_eq!(
            classify(date("2025-06-10"), today, &w, &snapshot),
            DayStatus::Pending
        );
        assert_eq!(
            classify(date("2025-06-11"), today, &w, &snapshot),
            DayStatus::Available
        );
    }

    #[test]
    fn test_classify_past_wins_over_booked() {
        // A confirmed date behind today still renders as past.
        let today = date("2025-06-15");
        let w = window("2025-06-01", None);
        let snapshot = AvailabilitySnapshot::from_dates(&[], &["2025-06-10"]);
        assert_eq!(classify(date("2025-06-10"), today, &w, &snapshot), DayStatus::Past);
    }

    #[test]
    fn test_classify_before_window_start() {
        let today = date("2025-06-05");
        let w = window("2025-07-01", None);
        let snapshot = AvailabilitySnapshot::empty();
        assert_eq!(
            classify(date("2025-06-20"), today, &w, &snapshot),
            DayStatus::OutOfWindow
        );
        assert_eq!(
            classify(date("2025-07-01"), today, &w, &snapshot),
            DayStatus::Available
        );
    }

    #[test]
    fn test_window_for_listing_defaults_to_today() {
        let mut listing = test_listing();
        listing.available_from = None;
        listing.available_till = None;
        let today = date("2025-06-05");
        let w = AvailabilityWindow::for_listing(&listing, today);
        assert_eq!(w.from, today);
        assert_eq!(w.till, None);
    }

    #[test]
    fn test_validate_range_blocks_only_confirmed() {
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-09"], &["2025-06-10"]);

        // Confirmed date inside the closed interval fails it.
        assert!(!validate_range(date("2025-06-08"), date("2025-06-12"), &snapshot));
        assert!(!validate_range(date("2025-06-10"), date("2025-06-10"), &snapshot));

        // Pending overlap alone passes.
        assert!(validate_range(date("2025-06-08"), date("2025-06-09"), &snapshot));

        // Clean range passes.
        assert!(validate_range(date("2025-06-11"), date("2025-06-20"), &snapshot));
    }

    #[test]
    fn test_scan_range_reports_confirmed_before_pending() {
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-08"], &["2025-06-11"]);
        assert_eq!(
            scan_range(date("2025-06-07"), date("2025-06-12"), &snapshot),
            RangeConflict::Confirmed(date("2025-06-11"))
        );
        assert_eq!(
            scan_range(date("2025-06-07"), date("2025-06-09"), &snapshot),
            RangeConflict::Pending(date("2025-06-08"))
        );
        assert_eq!(
            scan_range(date("2025-06-12"), date("2025-06-14"), &snapshot),
            RangeConflict::Clear
        );
    }

    fn test_listing() -> Listing {
        serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Test",
                "category": "Tractor",
                "equipment_name": "Tractor",
                "brand": "Test",
                "condition": "Good",
                "price": 100.0,
                "pricing_type": "Per day",
                "state": "S",
                "district": "D",
                "village_city": "V",
                "transport_included": "Yes"
            }"#,
        )
        .unwrap()
    }
}
