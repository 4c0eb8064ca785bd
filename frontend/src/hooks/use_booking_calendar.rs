use agrorent_engine::{
    AvailabilityProvider, BookingCalendar, CalendarDate, CalendarLabels, CalendarView,
    RentalGateway, RentalQuote, SelectionConfig, SelectionSignal, SubmitOutcome,
};
use shared::{ContractPreview, Listing};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

/// Everything the details modal renders, derived from the engine state
/// after each transition.
#[derive(Clone, PartialEq, Default)]
pub struct BookingViewState {
    /// The listing whose calendar is open, if any
    pub listing: Option<Listing>,
    pub view: Option<CalendarView>,
    pub quote: Option<RentalQuote>,
    /// Start date picked while the range is not complete yet
    pub pending_start: Option<CalendarDate>,
    /// Agreement preview, once the renter moved to the submission step
    pub agreement: Option<ContractPreview>,
    /// Inline warning or error
    pub notice: Option<String>,
    /// Success message after an accepted submission
    pub confirmation: Option<String>,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct UseBookingCalendarActions {
    /// Open the calendar for a listing id (fetches details + availability)
    pub open: Callback<i64>,
    pub close: Callback<()>,
    pub day_click: Callback<CalendarDate>,
    pub clear_selection: Callback<()>,
    /// Move to the agreement step for the current range
    pub request_agreement: Callback<()>,
    pub cancel_agreement: Callback<()>,
    /// Submit with (renter_address, location_of_use)
    pub submit: Callback<(String, String)>,
}

pub struct UseBookingCalendarResult {
    pub state: BookingViewState,
    pub actions: UseBookingCalendarActions,
}

fn derived(calendar: &BookingCalendar) -> (CalendarView, Option<RentalQuote>, Option<CalendarDate>) {
    let today = CalendarDate::today();
    let selection = calendar.selection();
    let pending_start = match (selection.start(), selection.end()) {
        (Some(start), None) => Some(start),
        _ => None,
    };
    (calendar.view(today), calendar.quote(), pending_start)
}

/// Owns the engine's `BookingCalendar` for the currently open listing and
/// exposes its transitions as callbacks. One calendar exists at a time;
/// opening another listing replaces it wholesale, selection included.
#[hook]
pub fn use_booking_calendar(
    api_client: &ApiClient,
    labels: &CalendarLabels,
) -> UseBookingCalendarResult {
    let calendar: Rc<RefCell<Option<BookingCalendar>>> = use_mut_ref(|| None);
    let state = use_state(BookingViewState::default);

    let open = {
        let api_client = api_client.clone();
        let calendar = calendar.clone();
        let state = state.clone();

        Callback::from(move |listing_id: i64| {
            let api_client = api_client.clone();
            let calendar = calendar.clone();
            let state = state.clone();

            spawn_local(async move {
                let listing = match api_client.get_listing(listing_id).await {
                    Ok(listing) => listing,
                    Err(e) => {
                        gloo::console::error!("Failed to load listing details:", e.clone());
                        state.set(BookingViewState {
                            notice: Some(e),
                            ..(*state).clone()
                        });
                        return;
                    }
                };

                let availability = api_client.availability(listing_id).await;

                let (view, quote, pending_start) = {
                    let mut opened = BookingCalendar::open(
                        listing.clone(),
                        CalendarDate::today(),
                        SelectionConfig::default(),
                    );
                    if let Ok(response) = &availability {
                        opened.apply_availability(response);
                    }
                    let snapshot = derived(&opened);
                    *calendar.borrow_mut() = Some(opened);
                    snapshot
                };

                let notice = availability
                    .err()
                    .map(|e| format!("Could not load availability: {}", e));
                state.set(BookingViewState {
                    listing: Some(listing),
                    view: Some(view),
                    quote,
                    pending_start,
                    agreement: None,
                    notice,
                    confirmation: None,
                    submitting: false,
                });
            });
        })
    };

    let close = {
        let calendar = calendar.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            *calendar.borrow_mut() = None;
            state.set(BookingViewState {
                confirmation: (*state).confirmation.clone(),
                ..BookingViewState::default()
            });
        })
    };

    let day_click = {
        let api_client = api_client.clone();
        let calendar = calendar.clone();
        let state = state.clone();
        let labels = labels.clone();

        Callback::from(move |date: CalendarDate| {
            let (signal, listing_id) = match calendar.borrow_mut().as_mut() {
                Some(cal) => (
                    cal.handle_click(date, date_utils::now_ms(), CalendarDate::today()),
                    cal.listing().id,
                ),
                None => return,
            };

            let api_client = api_client.clone();
            let calendar = calendar.clone();
            let state = state.clone();
            let labels = labels.clone();

            spawn_local(async move {
                // Re-fetch availability around every click so the rendered
                // classes track the server, as the page always did.
                let availability = api_client.availability(listing_id).await;

                let (view, quote, pending_start) = {
                    let mut slot = calendar.borrow_mut();
                    let cal = match slot.as_mut() {
                        Some(cal) => cal,
                        None => return,
                    };
                    if let Ok(response) = &availability {
                        cal.apply_availability(response);
                    }
                    derived(cal)
                };

                let notice = match signal {
                    SelectionSignal::RangeRejected => Some(labels.conflict_in_range.clone()),
                    SelectionSignal::RangeSet => quote
                        .as_ref()
                        .and_then(|q| q.pending_overlap)
                        .map(|_| labels.pending_overlap_warning.clone()),
                    _ => None,
                };

                state.set(BookingViewState {
                    view: Some(view),
                    quote,
                    pending_start,
                    notice,
                    ..(*state).clone()
                });
            });
        })
    };

    let clear_selection = {
        let calendar = calendar.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut slot = calendar.borrow_mut();
            let cal = match slot.as_mut() {
                Some(cal) => cal,
                None => return,
            };
            cal.clear_selection();
            let (view, quote, pending_start) = derived(cal);
            state.set(BookingViewState {
                view: Some(view),
                quote,
                pending_start,
                notice: None,
                ..(*state).clone()
            });
        })
    };

    let request_agreement = {
        let api_client = api_client.clone();
        let state = state.clone();
        let calendar = calendar.clone();

        Callback::from(move |_: ()| {
            let quote = match calendar.borrow().as_ref().and_then(|cal| cal.quote()) {
                Some(quote) => quote,
                None => {
                    state.set(BookingViewState {
                        notice: Some("Please select a date range on the calendar".to_string()),
                        ..(*state).clone()
                    });
                    return;
                }
            };
            let listing_id = match calendar.borrow().as_ref() {
                Some(cal) => cal.listing().id,
                None => return,
            };

            let api_client = api_client.clone();
            let state = state.clone();
            spawn_local(async move {
                let result = api_client
                    .get_contract_preview(
                        listing_id,
                        &quote.start.to_string(),
                        &quote.end.to_string(),
                        quote.days,
                        quote.total_amount,
                    )
                    .await;
                match result {
                    Ok(response) if response.success => {
                        state.set(BookingViewState {
                            agreement: response.data,
                            notice: None,
                            ..(*state).clone()
                        });
                    }
                    Ok(response) => {
                        state.set(BookingViewState {
                            notice: Some(
                                response
                                    .message
                                    .unwrap_or_else(|| "Error loading agreement preview".to_string()),
                            ),
                            ..(*state).clone()
                        });
                    }
                    Err(e) => {
                        state.set(BookingViewState {
                            notice: Some(format!("Error loading agreement preview: {}", e)),
                            ..(*state).clone()
                        });
                    }
                }
            });
        })
    };

    let cancel_agreement = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.set(BookingViewState {
                agreement: None,
                ..(*state).clone()
            });
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let calendar = calendar.clone();
        let state = state.clone();

        Callback::from(move |(renter_address, location_of_use): (String, String)| {
            let draft = {
                let slot = calendar.borrow();
                let cal = match slot.as_ref() {
                    Some(cal) => cal,
                    None => return,
                };
                match cal.draft(&renter_address, &location_of_use) {
                    Ok(draft) => draft,
                    Err(e) => {
                        state.set(BookingViewState {
                            notice: Some(e.to_string()),
                            ..(*state).clone()
                        });
                        return;
                    }
                }
            };

            state.set(BookingViewState {
                submitting: true,
                notice: None,
                ..(*state).clone()
            });

            let api_client = api_client.clone();
            let calendar = calendar.clone();
            let state = state.clone();

            spawn_local(async move {
                let response = match api_client.submit_rental(&draft.to_request()).await {
                    Ok(response) => response,
                    Err(e) => {
                        gloo::console::error!("Error submitting rental:", e.to_string());
                        state.set(BookingViewState {
                            submitting: false,
                            notice: Some("An error occurred. Please try again.".to_string()),
                            ..(*state).clone()
                        });
                        return;
                    }
                };

                let outcome = {
                    let mut slot = calendar.borrow_mut();
                    match slot.as_mut() {
                        Some(cal) => cal.note_submission(&draft, &response),
                        None => return,
                    }
                };

                match outcome {
                    SubmitOutcome::Accepted { message, .. } => {
                        *calendar.borrow_mut() = None;
                        state.set(BookingViewState {
                            confirmation: Some(message.unwrap_or_else(|| {
                                "Rental request submitted successfully! The owner will review and approve your request.".to_string()
                            })),
                            ..BookingViewState::default()
                        });
                    }
                    SubmitOutcome::BookedConflict { message } => {
                        // The snapshot is stale; refetch before re-rendering.
                        let listing_id = draft.listing_id;
                        let availability = api_client.availability(listing_id).await;
                        let refreshed = {
                            let mut slot = calendar.borrow_mut();
                            slot.as_mut().map(|cal| {
                                if let Ok(response) = &availability {
                                    cal.apply_availability(response);
                                }
                                derived(cal)
                            })
                        };
                        if let Some((view, quote, pending_start)) = refreshed {
                            state.set(BookingViewState {
                                view: Some(view),
                                quote,
                                pending_start,
                                agreement: None,
                                submitting: false,
                                notice: Some(message.unwrap_or_else(|| {
                                    "These dates are already booked. Please choose different dates.".to_string()
                                })),
                                ..(*state).clone()
                            });
                        }
                    }
                    SubmitOutcome::Rejected { message } => {
                        state.set(BookingViewState {
                            submitting: false,
                            notice: Some(message),
                            ..(*state).clone()
                        });
                    }
                }
            });
        })
    };

    UseBookingCalendarResult {
        state: (*state).clone(),
        actions: UseBookingCalendarActions {
            open,
            close,
            day_click,
            clear_selection,
            request_agreement,
            cancel_agreement,
            submit,
        },
    }
}
