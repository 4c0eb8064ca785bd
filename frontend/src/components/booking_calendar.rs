use agrorent_engine::{CalendarDate, CalendarLabels, CalendarView, DayStatus, RangePosition};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub view: CalendarView,
    pub labels: CalendarLabels,
    pub on_day_click: Callback<CalendarDate>,
}

/// The interactive three-month availability calendar.
#[function_component(BookingCalendarView)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    let months = props.view.months.iter().map(|month| {
        // Leading placeholders so day 1 lands on its weekday column.
        let mut day_cells = Vec::new();
        for _ in 0..month.first_weekday {
            day_cells.push(html! {
                <div class="calendar-day empty"></div>
            });
        }

        for cell in &month.days {
            let mut day_class = String::from("calendar-day");
            day_class.push(' ');
            day_class.push_str(match cell.status {
                DayStatus::Available => "available",
                DayStatus::Pending => "pending",
                DayStatus::Confirmed => "confirmed",
                DayStatus::Past | DayStatus::OutOfWindow => "disabled",
            });
            if cell.range_position.is_selected() {
                day_class.push_str(" selected-range");
                match cell.range_position {
                    RangePosition::Start => day_class.push_str(" selected-start"),
                    RangePosition::End => day_class.push_str(" selected-end"),
                    _ => {}
                }
            }

            let title = props.labels.status_label(cell.status).to_string();
            let onclick = cell.status.is_selectable().then(|| {
                let on_day_click = props.on_day_click.clone();
                let date = cell.date;
                Callback::from(move |_: MouseEvent| on_day_click.emit(date))
            });

            day_cells.push(html! {
                <div class={day_class} data-date={cell.date.to_string()} title={title} onclick={onclick}>
                    {cell.day}
                </div>
            });
        }

        html! {
            <div class="calendar-month">
                <div class="calendar-month-header">
                    <h4>{month.title()}</h4>
                </div>
                <div class="calendar-weekdays">
                    <div class="calendar-weekday">{"Sun"}</div>
                    <div class="calendar-weekday">{"Mon"}</div>
                    <div class="calendar-weekday">{"Tue"}</div>
                    <div class="calendar-weekday">{"Wed"}</div>
                    <div class="calendar-weekday">{"Thu"}</div>
                    <div class="calendar-weekday">{"Fri"}</div>
                    <div class="calendar-weekday">{"Sat"}</div>
                </div>
                <div class="calendar-days">
                    {for day_cells}
                </div>
            </div>
        }
    });

    html! {
        <div class="calendar-container">
            {for months}
            <div class="calendar-legend">
                <div class="legend-item">
                    <span class="legend-available"></span>
                    <span>{"Available"}</span>
                </div>
                <div class="legend-item">
                    <span class="legend-pending"></span>
                    <span>{"Pending Approval"}</span>
                </div>
                <div class="legend-item">
                    <span class="legend-confirmed"></span>
                    <span>{"Confirmed/Booked"}</span>
                </div>
            </div>
        </div>
    }
}
