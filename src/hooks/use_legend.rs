use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;

/// Handle returned by `use_legend_preference` hook
#[derive(Clone, PartialEq)]
pub struct LegendHandle {
    pub show_legend: bool,
    pub set_show_legend: Callback<bool>,
}

/// Pie legend visibility with localStorage persistence
#[hook]
pub fn use_legend_preference() -> LegendHandle {
    let show_legend =
        use_state(|| load_legend_preference().unwrap_or(Config::SHOW_LEGEND_DEFAULT));

    {
        let value = *show_legend;
        use_effect_with(value, move |value| {
            save_legend_preference(*value);
            || ()
        });
    }

    let set_show_legend = {
        let show_legend = show_legend.clone();
        Callback::from(move |value| show_legend.set(value))
    };

    LegendHandle {
        show_legend: *show_legend,
        set_show_legend,
    }
}

fn load_legend_preference() -> Option<bool> {
    gloo_storage::LocalStorage::get(Config::LEGEND_STORAGE_KEY).ok()
}

fn save_legend_preference(show: bool) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::LEGEND_STORAGE_KEY, show) {
        gloo::console::warn!(format!("Failed to save legend preference: {e:?}"));
    }
}
