use crate::audit::audit_config::AuditConfig;
use crate::audit::audit_error::AuditError;
use crate::audit::audit_summary::AuditSummary;
use crate::audit::duplicate_tracker::DuplicateTracker;
use crate::audit::page_auditor::{PageAuditOutput, PageAuditor};
use crate::progress_reporter::ProgressReporter;
use futures::StreamExt;
use std::sync::Arc;
use tokio::select;
use tracing::{info, warn};

/// Audits a list of URLs. Records come back in input order no matter how
/// many pages are in flight at once.
pub struct BatchAuditor<TP: ProgressReporter> {
    shutdown_notify: Arc<tokio::sync::Notify>,
    config: AuditConfig,
    page_auditor: PageAuditor,
    progress_reporter: TP,
}

impl<TP: ProgressReporter> BatchAuditor<TP> {
    pub fn new(
        shutdown_notify: Arc<tokio::sync::Notify>,
        config: AuditConfig,
        progress_reporter: TP,
    ) -> Result<Self, AuditError> {
        let page_auditor = PageAuditor::new(&config)?;
        Ok(Self {
            shutdown_notify,
            config,
            page_auditor,
            progress_reporter,
        })
    }

    pub fn progress_reporter(&self) -> &TP {
        &self.progress_reporter
    }

    pub async fn run(&self, urls: &[String]) -> AuditSummary {
        let mut summary = AuditSummary::default();
        let mut duplicate_tracker = self
            .config
            .track_duplicates()
            .then(DuplicateTracker::new);

        self.progress_reporter.begin(urls.len());

        let mut outputs = futures::stream::iter(urls.iter().enumerate())
            .map(|(index, url)| async move {
                self.progress_reporter.url_started(index, url);
                self.page_auditor.audit(url).await
            })
            .buffered(self.config.concurrency());

        loop {
            select! {
                biased;
                _ = self.shutdown_notify.notified() => {
                    info!("Shutdown requested, keeping {} finished records", summary.records().len());
                    summary.mark_interrupted();
                    break;
                }
                output = outputs.next() => {
                    match output {
                        Some(PageAuditOutput::Success(mut record)) => {
                            if let Some(tracker) = duplicate_tracker.as_mut() {
                                tracker.observe(&mut record);
                            }
                            self.progress_reporter.url_finished(record.url());
                            summary.add_record(record);
                        }
                        Some(PageAuditOutput::FetchFailed(url, e)) => {
                            warn!("Error fetching {}: {}", url, e);
                            self.progress_reporter.url_skipped(&url, &e.to_string());
                            summary.add_skipped_url(&url);
                        }
                        None => break,
                    }
                }
            }
        }

        self.progress_reporter.end(
            summary.records().len(),
            summary.skipped_urls().len(),
            summary.interrupted(),
        );
        summary
    }
}
