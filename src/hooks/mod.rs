pub mod use_chart_hover;
pub mod use_container_width;
pub mod use_fetch;
pub mod use_legend;
pub mod use_room_stats;
