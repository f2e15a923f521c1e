use yew::prelude::*;

use super::use_fetch::{FetchState, use_fetch};
use crate::models::{property::Property, stats::StatRecord};
use crate::services::api::ApiConfig;

pub type RoomStatsState = FetchState<Vec<StatRecord>>;
pub type PropertiesState = FetchState<Vec<Property>>;

/// Per-room statistics for one chart. Every caller issues its own request.
#[hook]
pub fn use_room_stats() -> UseStateHandle<RoomStatsState> {
    let url = use_memo((), |_| ApiConfig::default().room_stats_url());
    use_fetch((*url).clone())
}

/// Latest listings for the table.
#[hook]
pub fn use_properties() -> UseStateHandle<PropertiesState> {
    let url = use_memo((), |_| ApiConfig::default().properties_url());
    use_fetch((*url).clone())
}
