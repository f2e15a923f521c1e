use crate::hooks::use_fetch::FetchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    /// `None` while loading
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Placeholder shown while a chart's request is pending or after it failed.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.error {
        None => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        Some(msg) => html! {
            <div class="status error">
                <p>{"Error: "}{msg.clone()}</p>
            </div>
        },
    }
}

/// Renders the placeholder for a pending or failed request, or `None` once
/// data is available.
pub fn placeholder<T>(state: &FetchState<T>) -> Option<Html> {
    match state {
        FetchState::Loading => Some(html! { <Status /> }),
        FetchState::Error(msg) => Some(html! { <Status error={AttrValue::from(msg.clone())} /> }),
        FetchState::Loaded(_) => None,
    }
}
