use agrorent_engine::format_inr;
use shared::ContractPreview;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::date_utils::format_wire_date;

#[derive(Properties, PartialEq)]
pub struct AgreementModalProps {
    pub preview: ContractPreview,
    pub submitting: bool,
    pub notice: Option<String>,
    pub on_cancel: Callback<()>,
    /// (renter_address, location_of_use)
    pub on_submit: Callback<(String, String)>,
}

/// Rental agreement preview shown before submission. The renter fills in
/// their address and the location of use; both are required.
#[function_component(AgreementModal)]
pub fn agreement_modal(props: &AgreementModalProps) -> Html {
    let address_ref = use_node_ref();
    let location_ref = use_node_ref();
    let preview = &props.preview;

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let address_ref = address_ref.clone();
        let location_ref = location_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let address = address_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            let location = location_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            on_submit.emit((address, location));
        })
    };

    html! {
        <div class="agreement-modal show" id="agreement-modal">
            <div class="agreement-modal-content">
                <div class="agreement-modal-header">
                    <h2>{"Rental Agreement Preview"}</h2>
                    <button class="close-agreement-modal" onclick={on_cancel.clone()}>{"✕"}</button>
                </div>
                <div class="agreement-preview-container">
                    <div class="agreement-preview">
                        <div class="agreement-section">
                            <h3>{"Owner/Lessor Details"}</h3>
                            <p><strong>{"Name: "}</strong>{&preview.owner_name}</p>
                            <p><strong>{"Address: "}</strong>{&preview.owner_address}</p>
                        </div>
                        <div class="agreement-section">
                            <h3>{"Renter/Lessee Details"}</h3>
                            <p><strong>{"Name: "}</strong>{&preview.renter_name}</p>
                            <div class="form-group">
                                <label for="renter-address">
                                    {"Your Address "}<span class="required">{"*"}</span>
                                </label>
                                <textarea
                                    id="renter-address"
                                    ref={address_ref}
                                    placeholder="Enter your complete address"
                                    required={true}
                                />
                            </div>
                        </div>
                        <div class="agreement-section">
                            <h3>{"Machinery Details"}</h3>
                            <p><strong>{"Machine Name: "}</strong>{&preview.machine_name}</p>
                            <p>
                                <strong>{"Brand/Model: "}</strong>
                                {preview.brand.clone().or(preview.machine_model.clone()).unwrap_or_default()}
                            </p>
                        </div>
                        <div class="agreement-section">
                            <h3>{"Rental Terms"}</h3>
                            <p><strong>{"Rental Amount: "}</strong>{format_inr(preview.total_amount)}</p>
                            <p>
                                <strong>{"Rental Period: "}</strong>
                                {format!("{} to {}", format_wire_date(&preview.start_date), format_wire_date(&preview.end_date))}
                            </p>
                            <p><strong>{"Number of Days: "}</strong>{preview.days}</p>
                            <div class="form-group">
                                <label for="location-of-use">
                                    {"Location of Use "}<span class="required">{"*"}</span>
                                </label>
                                <input
                                    type="text"
                                    id="location-of-use"
                                    ref={location_ref}
                                    placeholder="Where will you use this equipment?"
                                    required={true}
                                />
                            </div>
                        </div>
                        <div class="agreement-section">
                            <h3>{"Terms & Conditions"}</h3>
                            <ul class="terms-list">
                                <li>{"Payment is due on or before the rental start date"}</li>
                                <li>{"You are responsible for any damage due to misuse or negligence"}</li>
                                <li>{"Late return will incur a 10% daily fee"}</li>
                                <li>{"Equipment must be returned in the same condition"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
                {if let Some(notice) = &props.notice {
                    html! { <div class="conflict-warning error">{notice}</div> }
                } else {
                    html! {}
                }}
                <div class="agreement-modal-actions">
                    <button class="btn-cancel" onclick={on_cancel}>{"Cancel"}</button>
                    <button
                        class="btn-submit-rental"
                        disabled={props.submitting}
                        onclick={on_submit}
                    >
                        {if props.submitting { "Processing..." } else { "Submit Rental Request" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
