use yew::prelude::*;

use crate::charts::HoverState;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Properties, PartialEq)]
pub struct PieLegendProps {
    pub entries: Vec<LegendEntry>,
    pub hover: HoverState,
    pub on_hover: Callback<HoverState>,
}

/// Side list for a pie chart. Shares its hover state with the chart so the
/// slice and the entry highlight together.
#[function_component(PieLegend)]
pub fn pie_legend(props: &PieLegendProps) -> Html {
    let on_leave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(HoverState::none()))
    };

    html! {
        <ul class="pie-legend">
            {
                props.entries.iter().enumerate().map(|(i, entry)| {
                    let on_enter = {
                        let on_hover = props.on_hover.clone();
                        Callback::from(move |_: MouseEvent| on_hover.emit(HoverState::at(i)))
                    };
                    let class = classes!(
                        "pie-legend-entry",
                        props.hover.is_hovered(i).then_some("highlighted")
                    );
                    html! {
                        <li key={i} {class} onmouseenter={on_enter} onmouseleave={on_leave.clone()}>
                            <span
                                class="pie-legend-swatch"
                                style={format!("background-color: {};", entry.color)}
                            />
                            <span class="pie-legend-label">{entry.label.clone()}</span>
                        </li>
                    }
                }).collect::<Html>()
            }
        </ul>
    }
}
