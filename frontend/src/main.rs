mod components;
mod hooks;
mod services;

use agrorent_engine::{format_inr, CalendarLabels};
use yew::prelude::*;

use components::agreement_modal::AgreementModal;
use components::booking_calendar::BookingCalendarView;
use components::filter_bar::FilterBar;
use components::listing_grid::ListingGrid;
use components::rental_summary::RentalSummary;
use hooks::use_booking_calendar::use_booking_calendar;
use hooks::use_listings::use_listings;
use services::api::ApiClient;
use services::date_utils::format_wire_date;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let labels = use_memo((), |_| CalendarLabels::default());

    let listings = use_listings(&api_client);
    let booking = use_booking_calendar(&api_client, &labels);

    // Reload the grid after an accepted submission so reopened calendars
    // show the new pending dates.
    {
        let reload = listings.actions.reload.clone();
        use_effect_with(booking.state.confirmation.clone(), move |confirmation| {
            if confirmation.is_some() {
                reload.emit(());
            }
            || ()
        });
    }

    let close_details = {
        let close = booking.actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div class="renting-page">
            <header class="page-header">
                <h1>{"AgroRent"}</h1>
                <p class="page-subtitle">{"Rent farm equipment from owners near you"}</p>
            </header>

            {if let Some(confirmation) = &booking.state.confirmation {
                html! { <div class="success-banner">{confirmation}</div> }
            } else {
                html! {}
            }}

            <FilterBar
                query={listings.state.query.clone()}
                on_change={listings.actions.set_query.clone()}
                on_reset={listings.actions.reset_query.clone()}
            />

            {if listings.state.loading {
                html! { <div id="loading-state" class="loading-state">{"Loading listings..."}</div> }
            } else if let Some(error) = &listings.state.error {
                html! { <div class="error-state">{format!("Error loading listings: {}", error)}</div> }
            } else if listings.state.listings.is_empty() {
                html! { <div id="empty-state" class="empty-state">{"No equipment matches your filters."}</div> }
            } else {
                html! {
                    <ListingGrid
                        listings={listings.state.listings.clone()}
                        on_view_details={booking.actions.open.clone()}
                    />
                }
            }}

            {if let Some(listing) = &booking.state.listing {
                let transport = if listing.transport_included.is_included() {
                    "Included".to_string()
                } else {
                    match listing.transport_charge {
                        Some(charge) => format!("Not Included ({})", format_inr(charge)),
                        None => "Not Included".to_string(),
                    }
                };

                html! {
                    <div class="details-modal show" id="details-modal">
                        <div class="modal-overlay"></div>
                        <div class="modal-content">
                            <button class="close-modal" id="close-modal" onclick={close_details.clone()}>{"✕"}</button>
                            <h2 class="modal-title">{&listing.title}</h2>
                            <div class="modal-info-grid">
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Equipment"}</div>
                                    <div class="modal-info-value">{&listing.equipment_name}</div>
                                </div>
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Brand"}</div>
                                    <div class="modal-info-value">{&listing.brand}</div>
                                </div>
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Condition"}</div>
                                    <div class="modal-info-value">{&listing.condition}</div>
                                </div>
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Price"}</div>
                                    <div class="modal-info-value">
                                        {format!("{} / {}", format_inr(listing.price), listing.pricing_unit.label())}
                                    </div>
                                </div>
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Location"}</div>
                                    <div class="modal-info-value">{listing.location_summary()}</div>
                                </div>
                                <div class="modal-info-item">
                                    <div class="modal-info-label">{"Transport"}</div>
                                    <div class="modal-info-value">{transport}</div>
                                </div>
                                {if let Some(available_from) = &listing.available_from {
                                    html! {
                                        <div class="modal-info-item">
                                            <div class="modal-info-label">{"Available From"}</div>
                                            <div class="modal-info-value">{format_wire_date(available_from)}</div>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                                {if let Some(available_till) = &listing.available_till {
                                    html! {
                                        <div class="modal-info-item">
                                            <div class="modal-info-label">{"Available Till"}</div>
                                            <div class="modal-info-value">{format_wire_date(available_till)}</div>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>

                            <div class="modal-availability-calendar">
                                <h3>{"Select Rental Dates"}</h3>
                                <p class="calendar-instruction">
                                    {"Click on available dates to select your rental period"}
                                </p>
                                {if let Some(view) = &booking.state.view {
                                    html! {
                                        <BookingCalendarView
                                            view={view.clone()}
                                            labels={(*labels).clone()}
                                            on_day_click={booking.actions.day_click.clone()}
                                        />
                                    }
                                } else {
                                    html! { <div class="loading-state">{"Loading availability..."}</div> }
                                }}
                                {if booking.state.agreement.is_none() {
                                    if let Some(notice) = &booking.state.notice {
                                        html! { <div class="conflict-warning warning">{notice}</div> }
                                    } else {
                                        html! {}
                                    }
                                } else {
                                    html! {}
                                }}
                                <div class="rent-button-container">
                                    <RentalSummary
                                        quote={booking.state.quote.clone()}
                                        pending_start={booking.state.pending_start}
                                        labels={(*labels).clone()}
                                        on_clear={booking.actions.clear_selection.clone()}
                                        on_rent={booking.actions.request_agreement.clone()}
                                    />
                                </div>
                            </div>

                            {if let Some(description) = &listing.description {
                                html! {
                                    <div class="modal-description">
                                        <h3>{"Description"}</h3>
                                        <p>{description}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                            {if let Some(rules) = &listing.rules {
                                html! {
                                    <div class="modal-rules">
                                        <h3>{"Rules & Terms"}</h3>
                                        <p>{rules}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            {if let Some(preview) = &booking.state.agreement {
                html! {
                    <AgreementModal
                        preview={preview.clone()}
                        submitting={booking.state.submitting}
                        notice={booking.state.notice.clone()}
                        on_cancel={booking.actions.cancel_agreement.clone()}
                        on_submit={booking.actions.submit.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
