use crate::audit::audit_error::AuditError;
use crate::audit::probe::link_checker::LinkChecker;
use crate::audit::probe::probe_results::ProbeResults;
use crate::audit::probe::sitemap_parser::count_sitemap_urls;
use crate::audit::record::{ERROR, FieldValue, NOT_FOUND, Presence, UNKNOWN, YesNo};
use crate::audit::robots_txt::RobotsTxtSource;
use reqwest::header::{
    ACCEPT_ENCODING, CACHE_CONTROL, CONTENT_ENCODING, CONTENT_SECURITY_POLICY, HeaderMap,
    HeaderName,
};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Product token matched against robots.txt sections.
pub const ROBOTS_AGENT: &str = "rusty-seo";

/// Runs the auxiliary HTTP probes for a page. None of them fail the page.
///
/// HEAD probes go through `head_client`, which must not follow redirects:
/// they report the status of the exact URL asked for.
#[derive(Clone)]
pub struct SiteProber {
    client: Client,
    head_client: Client,
    timeout: Duration,
    link_checker: LinkChecker,
}

impl SiteProber {
    pub fn new(
        client: Client,
        head_client: Client,
        timeout: Duration,
        link_concurrency: usize,
    ) -> Self {
        let link_checker = LinkChecker::new(head_client.clone(), timeout, link_concurrency);
        Self {
            client,
            head_client,
            timeout,
            link_checker,
        }
    }

    pub async fn probe(&self, url: &str, hrefs: &[String]) -> ProbeResults {
        let site_root = url.trim_end_matches('/');
        let sitemap_url = format!("{}/sitemap.xml", site_root);
        let robots_txt_url = format!("{}/robots.txt", site_root);

        let broken_links = self.link_checker.count_broken(url, hrefs).await;
        let sitemap = self.resource_presence(&sitemap_url).await;
        let robots_txt = self.resource_presence(&robots_txt_url).await;
        let sitemap_url_count = self.sitemap_url_count(&sitemap_url).await;
        let (http_status_code, cache_control, content_security_policy) =
            self.page_headers(url).await;
        let gzip_compression = self.gzip_compression(url).await;
        let robots_txt_allows_page = self.robots_txt_allows(url, &robots_txt_url).await;

        ProbeResults {
            broken_links,
            sitemap,
            robots_txt,
            sitemap_url_count,
            http_status_code,
            cache_control,
            content_security_policy,
            gzip_compression,
            robots_txt_allows_page,
        }
    }

    async fn head(&self, url: &str) -> Result<Response, AuditError> {
        Ok(self.head_client.head(url).timeout(self.timeout).send().await?)
    }

    /// "Found" only for a plain 200.
    async fn resource_presence(&self, url: &str) -> Presence {
        match self.head(url).await {
            Ok(response) => Presence::from(response.status() == StatusCode::OK),
            Err(e) => {
                debug!("Presence probe failed for {}: {}", url, e);
                Presence::NotFound
            }
        }
    }

    async fn sitemap_url_count(&self, sitemap_url: &str) -> FieldValue {
        match self.fetch_sitemap_url_count(sitemap_url).await {
            Ok(count) => FieldValue::Count(count),
            Err(e) => {
                debug!("Sitemap count failed for {}: {}", sitemap_url, e);
                FieldValue::from(ERROR)
            }
        }
    }

    /// Anything but a 200 counts as an empty sitemap.
    async fn fetch_sitemap_url_count(&self, sitemap_url: &str) -> Result<usize, AuditError> {
        let response = self
            .client
            .get(sitemap_url)
            .timeout(self.timeout)
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Ok(0);
        }
        let xml = response.text().await?;
        Ok(count_sitemap_urls(&xml))
    }

    /// Status code plus caching and CSP headers from one HEAD of the page.
    async fn page_headers(&self, url: &str) -> (FieldValue, FieldValue, FieldValue) {
        match self.head(url).await {
            Ok(response) => {
                let headers = response.headers();
                (
                    FieldValue::Status(response.status().as_u16()),
                    header_or_not_found(headers, CACHE_CONTROL),
                    header_or_not_found(headers, CONTENT_SECURITY_POLICY),
                )
            }
            Err(e) => {
                debug!("Header probe failed for {}: {}", url, e);
                (
                    FieldValue::from(UNKNOWN),
                    FieldValue::from(ERROR),
                    FieldValue::from(ERROR),
                )
            }
        }
    }

    async fn gzip_compression(&self, url: &str) -> FieldValue {
        let response = self
            .client
            .get(url)
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .timeout(self.timeout)
            .send()
            .await;
        match response {
            Ok(response) => {
                let gzip = response
                    .headers()
                    .get(CONTENT_ENCODING)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|encoding| encoding.contains("gzip"));
                FieldValue::from(YesNo::from(gzip))
            }
            Err(e) => {
                debug!("Compression probe failed for {}: {}", url, e);
                FieldValue::from(ERROR)
            }
        }
    }

    async fn robots_txt_allows(&self, url: &str, robots_txt_url: &str) -> FieldValue {
        let path = Url::parse(url)
            .map(|parsed| parsed.path().to_owned())
            .unwrap_or_else(|_| "/".to_string());
        match RobotsTxtSource::load(&self.client, robots_txt_url, ROBOTS_AGENT, self.timeout).await
        {
            Ok(source) => FieldValue::from(YesNo::from(source.allows(&path))),
            Err(e) => {
                debug!("Robots.txt probe failed for {}: {}", robots_txt_url, e);
                FieldValue::from(UNKNOWN)
            }
        }
    }
}

fn header_or_not_found(headers: &HeaderMap, name: HeaderName) -> FieldValue {
    let value = headers.get(&name).and_then(|v| v.to_str().ok());
    FieldValue::from(value.unwrap_or(NOT_FOUND))
}
