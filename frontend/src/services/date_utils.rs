use agrorent_engine::CalendarDate;

/// Current wall-clock time in milliseconds, used for double-tap detection
/// on calendar day clicks.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Short display form, e.g. "Jun 8, 2025".
pub fn format_short_date(date: &CalendarDate) -> String {
    format!(
        "{} {}, {}",
        short_month_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Long display form, e.g. "June 8, 2025".
pub fn format_long_date(date: &CalendarDate) -> String {
    format!(
        "{} {}, {}",
        agrorent_engine::date::month_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Format a raw YYYY-MM-DD wire string for display, falling back to the raw
/// string when it does not parse.
pub fn format_wire_date(raw: &str) -> String {
    match CalendarDate::parse(raw) {
        Ok(date) => format_long_date(&date),
        Err(_) => raw.to_string(),
    }
}

fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Jan",
    }
}
