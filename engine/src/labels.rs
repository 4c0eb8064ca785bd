//! Display strings for calendar statuses and prompts.
//!
//! Injected as configuration instead of being read out of markup, so the
//! host page can swap languages without touching the engine.

use crate::availability::DayStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarLabels {
    pub available: String,
    pub pending: String,
    pub confirmed: String,
    pub unavailable: String,
    /// Shown before any date is picked
    pub prompt_pick_start: String,
    pub prompt_pick_start_hint: String,
    /// Shown while the end date is still open
    pub prompt_pick_end: String,
    pub conflict_in_range: String,
    /// Soft warning when the chosen range overlaps a pending request
    pub pending_overlap_warning: String,
}

impl Default for CalendarLabels {
    fn default() -> Self {
        Self {
            available: "Available - Click to select".to_string(),
            pending: "Pending Approval".to_string(),
            confirmed: "Confirmed/Booked".to_string(),
            unavailable: "Not Available".to_string(),
            prompt_pick_start: "Select dates on calendar".to_string(),
            prompt_pick_start_hint: "Click start date, then end date".to_string(),
            prompt_pick_end: "Select end date".to_string(),
            conflict_in_range: "Selected date range includes booked dates. Please select a different range.".to_string(),
            pending_overlap_warning: "Selected dates overlap with a pending request. You can still submit, but the owner will review all requests.".to_string(),
        }
    }
}

impl CalendarLabels {
    /// Tooltip text for one day cell.
    pub fn status_label(&self, status: DayStatus) -> &str {
        match status {
            DayStatus::Available => &self.available,
            DayStatus::Pending => &self.pending,
            DayStatus::Confirmed => &self.confirmed,
            DayStatus::Past | DayStatus::OutOfWindow => &self.unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        let labels = CalendarLabels::default();
        assert_eq!(labels.status_label(DayStatus::Available), "Available - Click to select");
        assert_eq!(labels.status_label(DayStatus::Pending), "Pending Approval");
        assert_eq!(labels.status_label(DayStatus::Confirmed), "Confirmed/Booked");
        assert_eq!(labels.status_label(DayStatus::Past), "Not Available");
        assert_eq!(labels.status_label(DayStatus::OutOfWindow), "Not Available");
    }
}
