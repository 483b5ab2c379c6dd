use crate::progress_reporter::ProgressReporter;
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use std::io::{Write, stdout};
use std::path::Path;

/// Prints audit progress to stdout, one line per event. Console failures are
/// ignored; they must never abort the audit.
#[derive(Clone, Default)]
pub struct ConsoleProgressReporter {}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self {}
    }

    fn print_line(&self, label: Option<crossterm::style::StyledContent<&str>>, text: &str) {
        let mut stdout = stdout();
        let _ = match label {
            Some(label) => queue!(stdout, PrintStyledContent(label), Print(" ")),
            None => Ok(()),
        };
        let _ = queue!(stdout, Print(text), Print("\n"));
        let _ = stdout.flush();
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn begin(&self, num_urls: usize) {
        self.print_line(Some("Auditing".cyan()), &format!("{} URLs", num_urls));
    }

    fn url_started(&self, _index: usize, url: &str) {
        self.print_line(None, &format!("Analyzing {}...", url));
    }

    fn url_skipped(&self, url: &str, reason: &str) {
        self.print_line(Some("Skipped".yellow()), &format!("{} ({})", url, reason));
    }

    fn url_finished(&self, _url: &str) {}

    fn end(&self, num_records: usize, num_skipped: usize, interrupted: bool) {
        let label = if interrupted {
            "Interrupted".red()
        } else {
            "Done".green()
        };
        self.print_line(
            Some(label),
            &format!("{} pages analyzed, {} skipped", num_records, num_skipped),
        );
    }

    fn report_saved(&self, path: &Path) {
        self.print_line(None, &format!("SEO report saved to {}", path.display()));
    }

    fn message(&self, message: &str) {
        self.print_line(None, message);
    }
}
