pub mod dashboard;
pub mod histogram;
pub mod legend;
pub mod legend_toggle;
pub mod pie_chart;
pub mod property_list;
pub mod room_charts;
pub mod status;

pub use dashboard::Dashboard;
pub use histogram::Histogram;
pub use pie_chart::PieChart;
