use yew::prelude::*;

use crate::charts::bar::{BarChartConfig, BarChartModel, DEFAULT_BAR_COLOR, DEFAULT_HIGHLIGHT_COLOR};
use crate::charts::{HoverState, Margin, MarginOverrides};
use crate::hooks::use_chart_hover::use_chart_hover;
use crate::hooks::use_container_width::use_container_width;
use crate::models::stats::ChartDataset;

const DEFAULT_WIDTH: f64 = 500.0;
const DEFAULT_HEIGHT: f64 = 300.0;

#[derive(Properties, PartialEq)]
pub struct HistogramProps {
    pub data: ChartDataset,

    /// Fixed width in pixels; follows the container when unset
    #[prop_or_default]
    pub width: Option<f64>,

    #[prop_or(DEFAULT_HEIGHT)]
    pub height: f64,

    #[prop_or_else(|| "Key".to_string())]
    pub x_label: String,

    #[prop_or_else(|| "Value".to_string())]
    pub y_label: String,

    #[prop_or_else(|| DEFAULT_BAR_COLOR.to_string())]
    pub bar_color: String,

    #[prop_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string())]
    pub highlight_color: String,

    #[prop_or_default]
    pub margin: MarginOverrides,
}

#[function_component(Histogram)]
pub fn histogram(props: &HistogramProps) -> Html {
    let container_ref = use_node_ref();
    let measured_width = use_container_width(container_ref.clone());
    let hover_state = use_chart_hover(&props.data);

    let width = props.width.or(measured_width).unwrap_or(DEFAULT_WIDTH);
    let height = props.height;

    let config = BarChartConfig {
        width,
        height,
        margin: props.margin.resolve(Margin::proportional(width, height)),
        bar_color: props.bar_color.clone(),
        highlight_color: props.highlight_color.clone(),
        x_label: props.x_label.clone(),
        y_label: props.y_label.clone(),
    };

    let model = use_memo((props.data.clone(), config), |(data, config)| {
        BarChartModel::build(data, config)
    });

    let Some(model) = &*model else {
        return html! { <div class="histogram" ref={container_ref} /> };
    };

    let hover = hover_state.within(model.bars.len());

    let on_leave = {
        let hover_state = hover_state.clone();
        Callback::from(move |_: MouseEvent| hover_state.set(HoverState::none()))
    };

    let bars = model
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let on_enter = {
                let hover_state = hover_state.clone();
                Callback::from(move |_: MouseEvent| hover_state.set(HoverState::at(i)))
            };
            html! {
                <rect
                    key={i}
                    class="histogram-bar"
                    x={bar.x.to_string()}
                    y={bar.y.to_string()}
                    width={bar.width.to_string()}
                    height={bar.height.to_string()}
                    fill={model.bar_fill(i, &hover).to_string()}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave.clone()}
                />
            }
        })
        .collect::<Html>();

    let ruler = model.ruler(&hover).map(|ruler| {
        html! {
            <g class="histogram-tooltip" pointer-events="none">
                <line
                    x1={ruler.x1.to_string()}
                    x2={ruler.x2.to_string()}
                    y1={ruler.y.to_string()}
                    y2={ruler.y.to_string()}
                    stroke="gray"
                    stroke-width="1"
                    stroke-dasharray="4 4"
                />
                <text
                    x={ruler.x2.to_string()}
                    y={(ruler.y - 4.0).to_string()}
                    text-anchor="end"
                    class="histogram-ruler-label"
                >
                    {ruler.label}
                </text>
            </g>
        }
    });

    let (plot_left, plot_right) = model.plot_x;
    let (plot_top, _) = model.plot_y;
    let baseline = model.baseline;

    let x_axis = html! {
        <g class="axis axis-x">
            <line
                x1={plot_left.to_string()}
                x2={plot_right.to_string()}
                y1={baseline.to_string()}
                y2={baseline.to_string()}
                stroke="currentColor"
            />
            {
                model.x_ticks.iter().enumerate().map(|(i, tick)| html! {
                    <g key={i} transform={format!("translate({},{})", tick.position, baseline)}>
                        <line y2="6" stroke="currentColor" />
                        <text y="9" dy="0.71em" text-anchor="middle" fill="currentColor">
                            {tick.label.clone()}
                        </text>
                    </g>
                }).collect::<Html>()
            }
        </g>
    };

    let y_axis = html! {
        <g class="axis axis-y">
            <line
                x1={plot_left.to_string()}
                x2={plot_left.to_string()}
                y1={plot_top.to_string()}
                y2={baseline.to_string()}
                stroke="currentColor"
            />
            {
                model.y_ticks.iter().enumerate().map(|(i, tick)| html! {
                    <g key={i} transform={format!("translate({},{})", plot_left, tick.position)}>
                        <line x2="-6" stroke="currentColor" />
                        <text x="-9" dy="0.32em" text-anchor="end" fill="currentColor">
                            {tick.label.clone()}
                        </text>
                    </g>
                }).collect::<Html>()
            }
        </g>
    };

    let (x_label_x, x_label_y) = model.x_label_position();

    html! {
        <div class="histogram" ref={container_ref}>
            <svg width={width.to_string()} height={height.to_string()}>
                <g class="histogram-bars">{bars}</g>
                {x_axis}
                {y_axis}
                <text
                    class="axis-label"
                    text-anchor="middle"
                    x={x_label_x.to_string()}
                    y={x_label_y.to_string()}
                >
                    {model.config.x_label.clone()}
                </text>
                <text
                    class="axis-label"
                    text-anchor="middle"
                    transform={model.y_label_transform()}
                >
                    {model.config.y_label.clone()}
                </text>
                {ruler}
            </svg>
        </div>
    }
}
