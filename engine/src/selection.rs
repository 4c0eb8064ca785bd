//! The date-range selection state machine.
//!
//! One `DateSelector` exists per open calendar view. All transitions take
//! the clicked date, the click timestamp, and the day's current
//! classification, and return a signal describing what changed; there is no
//! ambient global state. The double-tap deselection memory lives inside the
//! machine as explicit state.

use crate::availability::{validate_range, AvailabilitySnapshot, DayStatus};
use crate::date::{range_inclusive, CalendarDate};
use serde::{Deserialize, Serialize};

/// Timing knobs for the selection machine.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    /// Two taps on the same date within this window count as a deselect.
    pub double_tap_window_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: 300,
        }
    }
}

/// The currently selected range.
///
/// Invariant: `end` is only ever set when `start` is, and `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl SelectionState {
    pub fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// The complete closed range, once both endpoints are chosen.
    pub fn range(&self) -> Option<(CalendarDate, CalendarDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Inclusive day count of the complete range.
    pub fn days(&self) -> Option<u32> {
        self.range()
            .map(|(start, end)| range_inclusive(start, end).count() as u32)
    }

    fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// What a click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSignal {
    /// A new start date was set (first click, or a restart over a complete
    /// range)
    Started,
    /// The end date was set and the range is free of confirmed dates
    RangeSet,
    /// The attempted range contained a confirmed date; the whole selection
    /// was reset
    RangeRejected,
    /// A double-tap cleared the selection
    Cleared,
    /// A double-tap on the end date cleared just the end
    EndCleared,
    /// The click hit a non-selectable day, or a double-tap matched nothing;
    /// selection unchanged
    Ignored,
}

/// Selection machine for one open calendar view.
#[derive(Debug, Clone, Default)]
pub struct DateSelector {
    config: SelectionConfig,
    selection: SelectionState,
    last_tap: Option<(CalendarDate, u64)>,
}

impl DateSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            selection: SelectionState::default(),
            last_tap: None,
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Reset everything, including the double-tap memory. Used when the view
    /// closes or switches listings.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.last_tap = None;
    }

    /// Drive the machine with one click.
    ///
    /// `status` is the clicked day's classification against the *current*
    /// snapshot; `now_ms` is the click's monotonic-enough timestamp used
    /// only for double-tap detection.
    pub fn click(
        &mut self,
        clicked: CalendarDate,
        now_ms: u64,
        status: DayStatus,
        snapshot: &AvailabilitySnapshot,
    ) -> SelectionSignal {
        if !status.is_selectable() {
            return SelectionSignal::Ignored;
        }

        if let Some((last_date, last_ms)) = self.last_tap {
            if last_date == clicked && now_ms.saturating_sub(last_ms) < self.config.double_tap_window_ms
            {
                self.last_tap = None;
                return self.deselect(clicked);
            }
        }
        self.last_tap = Some((clicked, now_ms));

        match (self.selection.start, self.selection.end) {
            (None, _) => {
                self.selection.start = Some(clicked);
                self.selection.end = None;
                SelectionSignal::Started
            }
            (Some(start), None) => {
                // Auto-swap so start <= end always holds.
                let (start, end) = if clicked < start {
                    (clicked, start)
                } else {
                    (start, clicked)
                };
                if validate_range(start, end, snapshot) {
                    self.selection.start = Some(start);
                    self.selection.end = Some(end);
                    SelectionSignal::RangeSet
                } else {
                    self.selection.clear();
                    SelectionSignal::RangeRejected
                }
            }
            (Some(_), Some(_)) => {
                // A complete range is already held; start over from here.
                self.selection.start = Some(clicked);
                self.selection.end = None;
                SelectionSignal::Started
            }
        }
    }

    /// Double-tap handling: dropping the start drops the whole range,
    /// dropping the end keeps the start, and a tap strictly inside a
    /// complete range resets both since either endpoint could be meant.
    fn deselect(&mut self, clicked: CalendarDate) -> SelectionSignal {
        if self.selection.start == Some(clicked) {
            self.selection.clear();
            return SelectionSignal::Cleared;
        }
        if self.selection.end == Some(clicked) {
            self.selection.end = None;
            return SelectionSignal::EndCleared;
        }
        if let Some((start, end)) = self.selection.range() {
            if clicked > start && clicked < end {
                self.selection.clear();
                return SelectionSignal::Cleared;
            }
        }
        SelectionSignal::Ignored
    }
}
