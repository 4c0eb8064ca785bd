use agrorent_engine::{format_inr, CalendarDate, CalendarLabels, RentalQuote};
use yew::prelude::*;

use crate::services::date_utils::format_short_date;

#[derive(Properties, PartialEq)]
pub struct RentalSummaryProps {
    pub quote: Option<RentalQuote>,
    pub pending_start: Option<CalendarDate>,
    pub labels: CalendarLabels,
    pub on_clear: Callback<()>,
    pub on_rent: Callback<()>,
}

/// Summary bar under the calendar: prompts while picking, dates + total +
/// actions once the range is complete.
#[function_component(RentalSummary)]
pub fn rental_summary(props: &RentalSummaryProps) -> Html {
    if let Some(quote) = &props.quote {
        let on_clear = props.on_clear.clone();
        let on_rent = props.on_rent.clone();
        let days_label = if quote.days == 1 { "day" } else { "days" };

        return html! {
            <div class="selected-dates-summary">
                <div class="selected-dates-info">
                    <div>
                        <div class="dates-range">
                            {format!("{} - {}", format_short_date(&quote.start), format_short_date(&quote.end))}
                        </div>
                        <div class="days-count">
                            {format!("{} {} · {}", quote.days, days_label, format_inr(quote.total_amount))}
                        </div>
                    </div>
                </div>
                <div class="selected-dates-actions">
                    <button
                        class="btn-clear-selection"
                        title="Clear selection"
                        onclick={Callback::from(move |_: MouseEvent| on_clear.emit(()))}
                    >
                        {"✕"}
                    </button>
                    <button
                        class="btn-rent-calendar"
                        onclick={Callback::from(move |_: MouseEvent| on_rent.emit(()))}
                    >
                        {"Rent Now"}
                    </button>
                </div>
            </div>
        };
    }

    if let Some(start) = &props.pending_start {
        return html! {
            <div class="selected-dates-summary">
                <div class="selected-dates-info">
                    <div>
                        <div class="dates-range">{&props.labels.prompt_pick_end}</div>
                        <div class="days-count">{format!("Start: {}", format_short_date(start))}</div>
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class="selected-dates-summary">
            <div class="selected-dates-info">
                <div>
                    <div class="dates-range">{&props.labels.prompt_pick_start}</div>
                    <div class="days-count">{&props.labels.prompt_pick_start_hint}</div>
                </div>
            </div>
        </div>
    }
}
