pub mod chart_panel;
pub mod handlers;
pub mod header;
pub mod metar_panel;
pub mod results;
pub mod theme_toggle;
pub mod tool_tabs;
pub mod utils;
