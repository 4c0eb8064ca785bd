use agrorent_engine::{ListingQuery, SortOrder};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub query: ListingQuery,
    pub on_change: Callback<ListingQuery>,
    pub on_reset: Callback<()>,
}

const CATEGORIES: [&str; 6] = [
    "Tractor",
    "Harvester",
    "Rotavator",
    "Seeder",
    "Sprayer",
    "Trailer",
];

fn sort_value(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Recommended => "recommended",
        SortOrder::PriceAsc => "price-asc",
        SortOrder::PriceDesc => "price-desc",
        SortOrder::Newest => "newest",
    }
}

fn sort_from_value(value: &str) -> SortOrder {
    match value {
        "price-asc" => SortOrder::PriceAsc,
        "price-desc" => SortOrder::PriceDesc,
        "newest" => SortOrder::Newest,
        _ => SortOrder::Recommended,
    }
}

/// Search/filter/sort controls above the listings grid. Every change
/// re-applies the query to the already-loaded listing set.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let query = props.query.clone();

    let on_search = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ListingQuery {
                search: value,
                ..query.clone()
            });
        })
    };

    let on_location = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ListingQuery {
                location: value,
                ..query.clone()
            });
        })
    };

    let on_category = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(ListingQuery {
                category: value,
                ..query.clone()
            });
        })
    };

    let on_price_min = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ListingQuery {
                price_min: value.parse::<f64>().ok(),
                ..query.clone()
            });
        })
    };

    let on_price_max = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ListingQuery {
                price_max: value.parse::<f64>().ok(),
                ..query.clone()
            });
        })
    };

    let on_sort = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(ListingQuery {
                sort: sort_from_value(&value),
                ..query.clone()
            });
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="filters-bar">
            <input
                type="text"
                id="search-filter"
                placeholder="Search equipment, brand..."
                value={props.query.search.clone()}
                oninput={on_search}
            />
            <select id="category-filter" onchange={on_category}>
                <option value="" selected={props.query.category.is_empty()}>{"All Categories"}</option>
                {for CATEGORIES.iter().map(|category| html! {
                    <option
                        value={*category}
                        selected={props.query.category == *category}
                    >
                        {*category}
                    </option>
                })}
            </select>
            <input
                type="text"
                id="location-filter"
                placeholder="State, district or village"
                value={props.query.location.clone()}
                oninput={on_location}
            />
            <input
                type="number"
                id="price-min"
                placeholder="Min price"
                oninput={on_price_min}
            />
            <input
                type="number"
                id="price-max"
                placeholder="Max price"
                oninput={on_price_max}
            />
            <select id="sort-order" onchange={on_sort}>
                <option value="recommended" selected={sort_value(props.query.sort) == "recommended"}>{"Recommended"}</option>
                <option value="price-asc" selected={sort_value(props.query.sort) == "price-asc"}>{"Price: Low to High"}</option>
                <option value="price-desc" selected={sort_value(props.query.sort) == "price-desc"}>{"Price: High to Low"}</option>
                <option value="newest" selected={sort_value(props.query.sort) == "newest"}>{"Newest First"}</option>
            </select>
            <button id="clear-filters" class="btn-clear-filters" onclick={on_reset}>
                {"Reset"}
            </button>
        </div>
    }
}
