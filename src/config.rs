/// Configuration constants for the application
pub struct Config;

impl Config {
    /// API root, taken from `PROPERTIES_API_URL` at build time
    pub const API_BASE_URL: &'static str = match option_env!("PROPERTIES_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Maximum number of rows shown in the listings table
    pub const LISTING_LIMIT: usize = 20;

    /// Delay before re-measuring chart containers after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Whether the pie chart legend is shown before the user picks
    pub const SHOW_LEGEND_DEFAULT: bool = true;

    /// `localStorage` key for the legend preference
    pub const LEGEND_STORAGE_KEY: &'static str = "show-legend";
}
