use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LegendToggleProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
}

/// Checkbox controlling the pie chart legend
#[function_component(LegendToggle)]
pub fn legend_toggle(props: &LegendToggleProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.checked());
        })
    };

    html! {
        <label class="legend-toggle">
            <input type="checkbox" checked={props.checked} onchange={on_change} />
            {" Show legend"}
        </label>
    }
}
