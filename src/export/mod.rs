//! Presentation of query results: JSON, HTML page, CSV download.

mod csv_sink;
mod html;
mod json;

pub use csv_sink::{CSV_FILENAME, CSV_HEADER, CsvSink, csv_row, render_csv};
pub use html::{EXPORT_TEMPLATE, Templates};
pub use json::records_to_json;
