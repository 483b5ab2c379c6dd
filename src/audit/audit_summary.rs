use crate::audit::record::SeoRecord;

#[derive(Debug, Clone, Default)]
pub struct AuditSummary {
    records: Vec<SeoRecord>,
    skipped_urls: Vec<String>,
    interrupted: bool,
}

impl AuditSummary {
    pub fn records(&self) -> &[SeoRecord] {
        &self.records
    }

    pub fn skipped_urls(&self) -> &[String] {
        &self.skipped_urls
    }

    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn add_record(&mut self, record: SeoRecord) {
        self.records.push(record);
    }

    pub fn add_skipped_url(&mut self, url: &str) {
        self.skipped_urls.push(url.to_owned());
    }

    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }
}
