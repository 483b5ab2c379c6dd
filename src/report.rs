mod csv_report_writer;
mod url_list_reader;

pub use csv_report_writer::write_report;
pub use url_list_reader::read_urls;
