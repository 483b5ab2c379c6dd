use std::path::Path;

pub trait ProgressReporter {
    fn begin(&self, num_urls: usize);
    fn url_started(&self, index: usize, url: &str);
    fn url_skipped(&self, url: &str, reason: &str);
    fn url_finished(&self, url: &str);
    fn end(&self, num_records: usize, num_skipped: usize, interrupted: bool);
    fn report_saved(&self, path: &Path);
    fn message(&self, message: &str);
}
