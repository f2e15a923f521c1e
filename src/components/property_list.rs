use yew::prelude::*;

use super::status::placeholder;
use crate::config::Config;
use crate::hooks::use_room_stats::use_properties;
use crate::models::property::Property;

const MISSING: &str = "—";

fn or_missing<T>(value: Option<T>, format: impl Fn(T) -> String) -> String {
    value.map_or_else(|| MISSING.to_string(), format)
}

#[function_component(PropertyList)]
pub fn property_list() -> Html {
    let state = use_properties();

    if let Some(view) = placeholder(&*state) {
        return view;
    }

    let rows = state
        .data()
        .map(|properties| {
            properties
                .iter()
                .take(Config::LISTING_LIMIT)
                .map(property_row)
                .collect::<Html>()
        })
        .unwrap_or_default();

    html! {
        <table class="property-list">
            <thead>
                <tr>
                    <th>{"Address"}</th>
                    <th>{"Rooms"}</th>
                    <th>{"Area"}</th>
                    <th>{"Rent"}</th>
                    <th>{"Rent + expenses"}</th>
                    <th>{"Rent / m²"}</th>
                    <th>{"Scraped"}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// Cell text for one listing, in column order.
fn row_cells(property: &Property) -> [String; 7] {
    [
        property.display_address().to_string(),
        or_missing(property.rooms, |r| r.to_string()),
        or_missing(property.square_meters_area, |a| format!("{a} m²")),
        or_missing(property.monthly_rent(), |r| format!("${r:.0}")),
        or_missing(property.total_monthly_cost(), |c| format!("${c:.0}")),
        or_missing(property.rent_per_square_meter(), |p| format!("${p:.2}")),
        or_missing(property.scraped_at, |d| d.format("%Y-%m-%d").to_string()),
    ]
}

fn property_row(property: &Property) -> Html {
    html! {
        <tr key={property.id.clone()}>
            { for row_cells(property).into_iter().map(|cell| html! { <td>{cell}</td> }) }
        </tr>
    }
}
