use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::fetch_json;

#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if the request has not settled yet
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches `url` once per mount (or URL change) and decodes it as JSON.
///
/// A response that arrives after unmount, or after the URL changed, is
/// dropped instead of being written into state.
#[hook]
pub fn use_fetch<T>(url: String) -> UseStateHandle<FetchState<T>>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();

        use_effect_with(url, move |url| {
            let url = url.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(FetchState::Loading);

            spawn_local(async move {
                gloo::console::debug!(format!("Fetching {url}"));

                match fetch_json::<T>(&url).await {
                    Ok(data) if !aborted_check.get() => {
                        state.set(FetchState::Loaded(Rc::new(data)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(format!("Request to {url} failed: {e}"));
                        state.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Stale response, ignore result
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
