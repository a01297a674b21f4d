//! Reusable Dioxus RSX components for tide chart apps.

mod chart_panel;
mod date_range_picker;
mod page_header;
mod station_selector;

pub use chart_panel::ChartPanel;
pub use date_range_picker::DateRangePicker;
pub use page_header::PageHeader;
pub use station_selector::{StationSelector, PLACEHOLDER_LABEL};
