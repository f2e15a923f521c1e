use yew::prelude::*;

use super::legend::{LegendEntry, PieLegend};
use crate::charts::palette::default_palette;
use crate::charts::pie::{
    DEFAULT_HOVER_GROWTH, DEFAULT_OTHER_LABEL, DEFAULT_PIE_MARGIN, DEFAULT_TINY_THRESHOLD,
    PieChartConfig, PieChartModel,
};
use crate::charts::{HoverState, Margin, MarginOverrides};
use crate::hooks::use_chart_hover::use_chart_hover;
use crate::models::stats::ChartDataset;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub data: ChartDataset,

    #[prop_or(400.0)]
    pub width: f64,

    #[prop_or(400.0)]
    pub height: f64,

    #[prop_or_else(default_palette)]
    pub colors: Vec<String>,

    #[prop_or(false)]
    pub show_legend: bool,

    /// Share of the total, in percent, below which slices merge into "Other"
    #[prop_or(DEFAULT_TINY_THRESHOLD)]
    pub tiny_threshold: f64,

    #[prop_or_else(|| DEFAULT_OTHER_LABEL.to_string())]
    pub other_label: String,

    #[prop_or(DEFAULT_HOVER_GROWTH)]
    pub hover_growth: f64,

    #[prop_or_default]
    pub margin: MarginOverrides,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let hover_state = use_chart_hover(&props.data);

    let config = PieChartConfig {
        width: props.width,
        height: props.height,
        margin: props.margin.resolve(Margin::uniform(DEFAULT_PIE_MARGIN)),
        palette: props.colors.clone(),
        tiny_threshold: props.tiny_threshold,
        other_label: props.other_label.clone(),
        hover_growth: props.hover_growth,
    };

    let model = use_memo((props.data.clone(), config), |(data, config)| {
        PieChartModel::build(data, config)
    });

    let hover = hover_state.within(model.slices.len());

    let set_hover = {
        let hover_state = hover_state.clone();
        Callback::from(move |next: HoverState| hover_state.set(next))
    };

    let (cx, cy) = model.center;
    let grown = format!("scale({})", model.hover_scale());

    let slices = model
        .paint_order(&hover)
        .into_iter()
        .map(|i| {
            let slice = &model.slices[i];
            let hovered = hover.is_hovered(i);
            let style = format!(
                "transform: {}; transition: transform 200ms ease-out;",
                if hovered { grown.as_str() } else { "scale(1)" }
            );
            let on_enter = {
                let set_hover = set_hover.clone();
                Callback::from(move |_: MouseEvent| set_hover.emit(HoverState::at(i)))
            };
            let on_leave = {
                let set_hover = set_hover.clone();
                Callback::from(move |_: MouseEvent| set_hover.emit(HoverState::none()))
            };

            html! {
                <path
                    key={i}
                    class={classes!("pie-slice", hovered.then_some("highlighted"))}
                    d={slice.path.clone()}
                    fill={slice.color.clone()}
                    stroke="white"
                    stroke-width="2"
                    {style}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                />
            }
        })
        .collect::<Html>();

    let tooltip = model.tooltip(&hover).map(|tooltip| {
        html! {
            <div
                class="pie-tooltip"
                style={format!(
                    "position: absolute; left: {}px; top: {}px; transform: translate(-50%, -50%); pointer-events: none;",
                    tooltip.x, tooltip.y
                )}
            >
                {tooltip.text}
            </div>
        }
    });

    let legend = props.show_legend.then(|| {
        let entries: Vec<LegendEntry> = model
            .slices
            .iter()
            .map(|slice| LegendEntry {
                label: slice.label(),
                color: slice.color.clone(),
            })
            .collect();
        html! { <PieLegend {entries} {hover} on_hover={set_hover.clone()} /> }
    });

    html! {
        <div class="pie-chart">
            <div
                class="pie-plot"
                style={format!("position: relative; width: {}px; height: {}px;", props.width, props.height)}
            >
                <svg width={props.width.to_string()} height={props.height.to_string()}>
                    if !model.is_empty() {
                        <g transform={format!("translate({cx}, {cy})")}>{slices}</g>
                    }
                </svg>
                {tooltip}
            </div>
            {legend}
        </div>
    }
}
