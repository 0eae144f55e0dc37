//! Exporters for scenes, fields and the standalone demo page.

pub mod csv;
pub mod figure;
pub mod page;

pub use csv::write_field_csv;
pub use figure::{figure_json, write_figure_json};
pub use page::{write_html_page, Frame, Page};
