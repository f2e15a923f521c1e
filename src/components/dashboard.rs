use yew::prelude::*;

use super::legend_toggle::LegendToggle;
use super::property_list::PropertyList;
use super::room_charts::{RoomDistributionHistogram, RoomDistributionPieChart, RoomPriceHistogram};
use crate::hooks::use_legend::use_legend_preference;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let legend = use_legend_preference();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Rental Market Dashboard"}</h1>
            </header>

            <main class="app-main">
                <section class="chart-section">
                    <h2>{"Properties by Room Count"}</h2>
                    <RoomDistributionHistogram />
                </section>

                <section class="chart-section">
                    <div class="section-header">
                        <h2>{"Room Count Share"}</h2>
                        <LegendToggle
                            checked={legend.show_legend}
                            on_change={legend.set_show_legend.clone()}
                        />
                    </div>
                    <RoomDistributionPieChart show_legend={legend.show_legend} />
                </section>

                <section class="chart-section">
                    <h2>{"Average Price by Room Count"}</h2>
                    <RoomPriceHistogram />
                </section>

                <section class="listing-section">
                    <h2>{"Latest Listings"}</h2>
                    <PropertyList />
                </section>
            </main>

            <style>
                {include_str!("../style.css")}
            </style>
        </div>
    }
}
