// Render module - HTML pages and SVG charts for the dashboard

pub mod charts;
pub mod html;
pub mod pages;

pub use pages::{
    DashboardPage, PageContext, comparison_page, concepts_page, executive_summary_page, layout,
    mapping_page, not_found_page,
};
