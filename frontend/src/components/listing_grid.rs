use agrorent_engine::format_inr;
use shared::Listing;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListingGridProps {
    pub listings: Vec<Listing>,
    pub on_view_details: Callback<i64>,
}

#[function_component(ListingGrid)]
pub fn listing_grid(props: &ListingGridProps) -> Html {
    let cards = props.listings.iter().map(|listing| {
        let on_view_details = props.on_view_details.clone();
        let listing_id = listing.id;
        let image_url = listing
            .main_image
            .as_ref()
            .map(|image| format!("/static/{}", image))
            .unwrap_or_else(|| "/assets/carousel1.jpg".to_string());

        html! {
            <div class="listing-card" key={listing.id}>
                <img src={image_url} alt={listing.title.clone()} class="card-image" />
                <div class="card-body">
                    <div class="card-category">{&listing.category}</div>
                    <h3 class="card-title">{&listing.title}</h3>
                    <div class="card-details">
                        <div class="card-detail">
                            <span>{&listing.equipment_name}</span>
                        </div>
                        <div class="card-detail">
                            <span>{&listing.brand}</span>
                        </div>
                        {if let Some(power_spec) = &listing.power_spec {
                            html! {
                                <div class="card-detail">
                                    <span>{power_spec}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                        <div class="card-detail">
                            <span>{&listing.condition}</span>
                        </div>
                    </div>
                    <div class="card-price">
                        {format_inr(listing.price)}
                        <span class="card-price-type">{format!("/{}", listing.pricing_unit.label())}</span>
                    </div>
                    <div class="card-location">
                        <span>{listing.location_summary()}</span>
                    </div>
                </div>
                <div class="card-footer">
                    <button
                        class="btn-view-details"
                        onclick={Callback::from(move |_: MouseEvent| on_view_details.emit(listing_id))}
                    >
                        {"View More Details"}
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <div class="listings-grid" id="listings-grid">
            {for cards}
        </div>
    }
}
