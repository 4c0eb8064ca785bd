//! Calendar grid generation.
//!
//! Renders the rolling three-month availability view for one listing:
//! current month plus the next two. The render is a pure function of
//! (today, window, snapshot, selection); identical inputs produce an
//! identical view.

use crate::availability::{classify, AvailabilitySnapshot, AvailabilityWindow, DayStatus};
use crate::date::{days_in_month, month_name, month_offset, CalendarDate};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// Number of months shown per render: the current one and the next two.
pub const MONTHS_SHOWN: u32 = 3;

/// Where a day sits in the selected range, independent of its availability
/// status. Only previously-available days ever make it into a range, but
/// the tag is computed for every cell so the highlight survives re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePosition {
    Outside,
    Start,
    End,
    Within,
}

impl RangePosition {
    pub fn is_selected(&self) -> bool {
        !matches!(self, RangePosition::Outside)
    }
}

/// One day cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month, 1-based
    pub day: u32,
    pub date: CalendarDate,
    pub status: DayStatus,
    pub range_position: RangePosition,
}

/// One month of the grid. `first_weekday` (0 = Sunday) tells the renderer
/// how many leading placeholder cells to emit before day 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub first_weekday: u32,
    pub days: Vec<DayCell>,
}

impl MonthView {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// The full three-month view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarView {
    pub months: Vec<MonthView>,
}

/// Render the three-month availability calendar.
pub fn render_calendar(
    today: CalendarDate,
    window: &AvailabilityWindow,
    snapshot: &AvailabilitySnapshot,
    selection: &SelectionState,
) -> CalendarView {
    let months = (0..MONTHS_SHOWN)
        .map(|offset| {
            let (year, month) = month_offset(today.year(), today.month(), offset);
            render_month(year, month, today, window, snapshot, selection)
        })
        .collect();
    CalendarView { months }
}

fn render_month(
    year: i32,
    month: u32,
    today: CalendarDate,
    window: &AvailabilityWindow,
    snapshot: &AvailabilitySnapshot,
    selection: &SelectionState,
) -> MonthView {
    let first_weekday = CalendarDate::from_ymd(year, month, 1)
        .map(|d| d.weekday_from_sunday())
        .unwrap_or(0);

    let days = (1..=days_in_month(year, month))
        .filter_map(|day| CalendarDate::from_ymd(year, month, day))
        .map(|date| DayCell {
            day: date.day(),
            date,
            status: classify(date, today, window, snapshot),
            range_position: range_position(date, selection),
        })
        .collect();

    MonthView {
        year,
        month,
        first_weekday,
        days,
    }
}

fn range_position(date: CalendarDate, selection: &SelectionState) -> RangePosition {
    match (selection.start(), selection.end()) {
        (Some(start), Some(end)) => {
            if date == start {
                RangePosition::Start
            } else if date == end {
                RangePosition::End
            } else if date > start && date < end {
                RangePosition::Within
            } else {
                RangePosition::Outside
            }
        }
        (Some(start), None) if date == start => RangePosition::Start,
        _ => RangePosition::Outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{DateSelector, SelectionConfig};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn cell<'a>(view: &'a CalendarView, s: &str) -> &'a DayCell {
        let target = date(s);
        view.months
            .iter()
            .flat_map(|m| m.days.iter())
            .find(|c| c.date == target)
            .expect("date not in view")
    }

    fn open_window() -> AvailabilityWindow {
        AvailabilityWindow::new(date("2025-01-01"), None)
    }

    #[test]
    fn test_view_spans_three_months() {
        let view = render_calendar(
            date("2025-11-15"),
            &open_window(),
            &AvailabilitySnapshot::empty(),
            &SelectionState::default(),
        );
        let labels: Vec<(i32, u32)> = view.months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, vec![(2025, 11), (2025, 12), (2026, 1)]);
        assert_eq!(view.months[0].days.len(), 30);
        assert_eq!(view.months[1].days.len(), 31);
        assert_eq!(view.months[2].days.len(), 31);
    }

    #[test]
    fn test_month_grid_alignment() {
        let view = render_calendar(
            date("2025-06-10"),
            &open_window(),
            &AvailabilitySnapshot::empty(),
            &SelectionState::default(),
        );
        // June 2025 starts on a Sunday, July on a Tuesday.
        assert_eq!(view.months[0].first_weekday, 0);
        assert_eq!(view.months[1].first_weekday, 2);
        assert_eq!(view.months[0].title(), "June 2025");
    }

    #[test]
    fn test_day_statuses_in_view() {
        let window = AvailabilityWindow::new(date("2025-06-05"), Some(date("2025-07-20")));
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-15"], &["2025-06-20"]);
        let view = render_calendar(
            date("2025-06-10"),
            &window,
            &snapshot,
            &SelectionState::default(),
        );

        assert_eq!(cell(&view, "2025-06-01").status, DayStatus::Past);
        assert_eq!(cell(&view, "2025-06-12").status, DayStatus::Available);
        assert_eq!(cell(&view, "2025-06-15").status, DayStatus::Pending);
        assert_eq!(cell(&view, "2025-06-20").status, DayStatus::Confirmed);
        assert_eq!(cell(&view, "2025-07-21").status, DayStatus::OutOfWindow);
        assert_eq!(cell(&view, "2025-08-01").status, DayStatus::OutOfWindow);
    }

    #[test]
    fn test_selection_tags_survive_underlying_status() {
        // A pending day inside the selected span still gets the range tag;
        // the highlight is independent of the availability class.
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-10"], &[]);
        let mut selector = DateSelector::new(SelectionConfig::default());
        selector.click(date("2025-06-08"), 0, DayStatus::Available, &snapshot);
        selector.click(date("2025-06-12"), 1_000, DayStatus::Available, &snapshot);

        let view = render_calendar(
            date("2025-06-05"),
            &open_window(),
            &snapshot,
            &selector.selection(),
        );

        assert_eq!(cell(&view, "2025-06-08").range_position, RangePosition::Start);
        assert_eq!(cell(&view, "2025-06-12").range_position, RangePosition::End);
        assert_eq!(cell(&view, "2025-06-10").range_position, RangePosition::Within);
        assert_eq!(cell(&view, "2025-06-10").status, DayStatus::Pending);
        assert_eq!(
            cell(&view, "2025-06-13").range_position,
            RangePosition::Outside
        );
    }

    #[test]
    fn test_lone_start_is_tagged() {
        let snapshot = AvailabilitySnapshot::empty();
        let mut selector = DateSelector::new(SelectionConfig::default());
        selector.click(date("2025-06-08"), 0, DayStatus::Available, &snapshot);

        let view = render_calendar(
            date("2025-06-05"),
            &open_window(),
            &snapshot,
            &selector.selection(),
        );
        assert_eq!(cell(&view, "2025-06-08").range_position, RangePosition::Start);
        assert_eq!(cell(&view, "2025-06-09").range_position, RangePosition::Outside);
    }

    #[test]
    fn test_render_is_idempotent() {
        let window = AvailabilityWindow::new(date("2025-06-01"), Some(date("2025-08-15")));
        let snapshot = AvailabilitySnapshot::from_dates(&["2025-06-15"], &["2025-06-20"]);
        let mut selector = DateSelector::new(SelectionConfig::default());
        selector.click(date("2025-06-08"), 0, DayStatus::Available, &snapshot);
        selector.click(date("2025-06-12"), 1_000, DayStatus::Available, &snapshot);

        let today = date("2025-06-05");
        let first = render_calendar(today, &window, &snapshot, &selector.selection());
        let second = render_calendar(today, &window, &snapshot, &selector.selection());
        assert_eq!(first, second);
    }
}
