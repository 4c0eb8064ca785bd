use agrorent_engine::ListingQuery;
use shared::Listing;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ListingsState {
    /// Listings after the current query is applied
    pub listings: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: ListingQuery,
}

pub struct UseListingsResult {
    pub state: ListingsState,
    pub actions: UseListingsActions,
}

#[derive(Clone)]
pub struct UseListingsActions {
    pub reload: Callback<()>,
    pub set_query: Callback<ListingQuery>,
    pub reset_query: Callback<()>,
}

/// Loads the listing set once and re-filters it locally whenever the query
/// changes.
#[hook]
pub fn use_listings(api_client: &ApiClient) -> UseListingsResult {
    let all_listings = use_state(Vec::<Listing>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let query = use_state(ListingQuery::default);

    let reload = {
        let api_client = api_client.clone();
        let all_listings = all_listings.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let all_listings = all_listings.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.get_listings().await {
                    Ok(listings) => {
                        all_listings.set(listings);
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to load listings:", e.clone());
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let set_query = {
        let query = query.clone();
        Callback::from(move |next: ListingQuery| {
            query.set(next);
        })
    };

    let reset_query = {
        let query = query.clone();
        Callback::from(move |_: ()| {
            query.set(ListingQuery::default());
        })
    };

    // Initial load on mount.
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let state = ListingsState {
        listings: query.apply(&all_listings),
        loading: *loading,
        error: (*error).clone(),
        query: (*query).clone(),
    };

    let actions = UseListingsActions {
        reload,
        set_query,
        reset_query,
    };

    UseListingsResult { state, actions }
}
