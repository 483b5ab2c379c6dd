use crate::audit::audit_config::AuditConfig;
use crate::audit::audit_error::AuditError;
use crate::audit::page::{FetchedPage, PageDocument, PageFetcher};
use crate::audit::probe::SiteProber;
use crate::audit::record::{FieldValue, SeoRecord};
use crate::audit::signals::{PageContext, SignalExtractor, default_extractors};
use reqwest::Client;
use reqwest::redirect::Policy;
use tracing::{debug, trace};

pub enum PageAuditOutput {
    Success(SeoRecord),
    FetchFailed(String, AuditError),
}

/// Fetches one page and turns it into a fully populated record.
pub struct PageAuditor {
    fetcher: PageFetcher,
    prober: SiteProber,
    extractors: Vec<Box<dyn SignalExtractor>>,
    keywords: Vec<String>,
}

impl PageAuditor {
    pub fn new(config: &AuditConfig) -> Result<Self, AuditError> {
        let client = Client::builder().user_agent(config.user_agent()).build()?;
        let head_client = Client::builder()
            .user_agent(config.user_agent())
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            fetcher: PageFetcher::new(client.clone(), config.page_timeout()),
            prober: SiteProber::new(
                client,
                head_client,
                config.probe_timeout(),
                config.link_concurrency(),
            ),
            extractors: default_extractors(),
            keywords: config.keywords().to_vec(),
        })
    }

    pub async fn audit(&self, url: &str) -> PageAuditOutput {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => return PageAuditOutput::FetchFailed(url.to_owned(), e),
        };

        // The parsed tree is gone before the probes start.
        let (mut record, hrefs) = self.extract_signals(&page);

        let probes = self.prober.probe(url, &hrefs).await;
        probes.record_into(&mut record);

        debug!("Audited {} ({} fields)", url, record.len());
        PageAuditOutput::Success(record)
    }

    fn extract_signals(&self, page: &FetchedPage) -> (SeoRecord, Vec<String>) {
        let document = PageDocument::parse(page.html());
        let context = PageContext {
            url: page.url(),
            markup: page.html(),
            document: &document,
            keywords: &self.keywords,
        };

        let mut record = SeoRecord::new(page.url());
        for extractor in &self.extractors {
            trace!("Running {} extractor on {}", extractor.name(), page.url());
            extractor.extract(&context, &mut record);
        }
        record.set("page_load_time", page.load_time().as_secs_f64());
        record.set(
            "content_type",
            FieldValue::text_or_not_found(page.content_type().map(|m| m.essence_str())),
        );

        (record, document.link_hrefs())
    }
}
