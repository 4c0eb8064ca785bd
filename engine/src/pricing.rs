//! Rental total computation and amount display.

use crate::date::{range_inclusive, CalendarDate};
use shared::{PricingUnit, TransportIncluded};

/// Hourly listings are charged per working day of this many hours. A fixed
/// business rule, not configurable.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Inclusive day count of a rental range: start and end day both count.
pub fn rental_days(start: CalendarDate, end: CalendarDate) -> u32 {
    range_inclusive(start, end).count() as u32
}

/// Compute the rental total for one range.
///
/// Per-acre listings use the day count as the acreage stand-in, the same
/// formula as per-day; seasonal listings are flat regardless of duration.
/// A transport charge is added once, never multiplied by days.
pub fn compute_total(
    price: f64,
    unit: PricingUnit,
    days: u32,
    transport_included: TransportIncluded,
    transport_charge: Option<f64>,
) -> f64 {
    let base = match unit {
        PricingUnit::PerDay => price * days as f64,
        PricingUnit::PerHour => price * days as f64 * HOURS_PER_DAY,
        PricingUnit::PerAcre => price * days as f64,
        PricingUnit::PerSeason => price,
    };

    let transport = match (transport_included, transport_charge) {
        (TransportIncluded::No, Some(charge)) if charge > 0.0 => charge,
        _ => 0.0,
    };

    base + transport
}

/// Format an amount the way the listing pages show it: rupee sign, Indian
/// digit grouping, decimals only when the amount has them.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let whole = amount.trunc() as u64;
    let fraction = amount - amount.trunc();

    let digits = whole.to_string();
    let mut grouped = String::new();
    if digits.len() > 3 {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_bytes = head.as_bytes();
        let lead = head_bytes.len() % 2;
        if lead == 1 {
            grouped.push(head_bytes[0] as char);
        }
        for (i, chunk) in head_bytes[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                grouped.push(',');
            }
            grouped.push(chunk[0] as char);
            grouped.push(chunk[1] as char);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped = digits;
    }

    let sign = if negative { "-" } else { "" };
    if fraction > f64::EPSILON {
        format!("{}₹{}.{:02}", sign, grouped, (fraction * 100.0).round() as u64)
    } else {
        format!("{}₹{}", sign, grouped)
    }
}
