use yew::prelude::*;

use crate::charts::HoverState;
use crate::models::stats::ChartDataset;

/// Hover state for one chart instance, cleared whenever `data` changes so an
/// index recorded against the previous dataset never highlights a new one.
#[hook]
pub fn use_chart_hover(data: &ChartDataset) -> UseStateHandle<HoverState> {
    let hover = use_state_eq(HoverState::default);

    {
        let hover = hover.clone();
        use_effect_with(data.clone(), move |_| {
            hover.set(HoverState::none());
            || ()
        });
    }

    hover
}
