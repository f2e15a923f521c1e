//! Chart components bound to the per-room statistics endpoint.
//!
//! Each one fetches on its own, so a failing chart never takes its siblings
//! down with it.

use yew::prelude::*;

use super::histogram::Histogram;
use super::pie_chart::PieChart;
use super::status::placeholder;
use crate::hooks::use_room_stats::use_room_stats;
use crate::models::aggregate::{to_average_price_by_room, to_percentage_distribution};

#[function_component(RoomDistributionHistogram)]
pub fn room_distribution_histogram() -> Html {
    let state = use_room_stats();
    let dataset = use_memo((*state).clone(), |state| {
        state
            .data()
            .map(|records| to_percentage_distribution(records))
            .unwrap_or_default()
    });

    if let Some(view) = placeholder(&*state) {
        return view;
    }

    html! {
        <Histogram
            data={(*dataset).clone()}
            x_label="Rooms"
            y_label="Number of Properties [%]"
            bar_color="steelblue"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomDistributionPieChartProps {
    #[prop_or(false)]
    pub show_legend: bool,
}

#[function_component(RoomDistributionPieChart)]
pub fn room_distribution_pie_chart(props: &RoomDistributionPieChartProps) -> Html {
    let state = use_room_stats();
    let dataset = use_memo((*state).clone(), |state| {
        state
            .data()
            .map(|records| to_percentage_distribution(records))
            .unwrap_or_default()
    });

    if let Some(view) = placeholder(&*state) {
        return view;
    }

    html! {
        <PieChart
            data={(*dataset).clone()}
            width={400.0}
            height={400.0}
            show_legend={props.show_legend}
        />
    }
}

#[function_component(RoomPriceHistogram)]
pub fn room_price_histogram() -> Html {
    let state = use_room_stats();
    let dataset = use_memo((*state).clone(), |state| {
        state
            .data()
            .map(|records| to_average_price_by_room(records))
            .unwrap_or_default()
    });

    if let Some(view) = placeholder(&*state) {
        return view;
    }

    html! {
        <Histogram
            data={(*dataset).clone()}
            x_label="Rooms"
            y_label="Average Price [USD]"
            bar_color="steelblue"
        />
    }
}
