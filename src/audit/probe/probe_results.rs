use crate::audit::record::{FieldValue, Presence, SeoRecord};

/// Outcome of the network probes for one page. Failed probes already hold
/// their sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResults {
    pub broken_links: usize,
    pub sitemap: Presence,
    pub robots_txt: Presence,
    pub sitemap_url_count: FieldValue,
    pub http_status_code: FieldValue,
    pub cache_control: FieldValue,
    pub content_security_policy: FieldValue,
    pub gzip_compression: FieldValue,
    pub robots_txt_allows_page: FieldValue,
}

impl ProbeResults {
    pub fn record_into(self, record: &mut SeoRecord) {
        record.set("broken_links", self.broken_links);
        record.set("sitemap", self.sitemap);
        record.set("robots_txt", self.robots_txt);
        record.set("sitemap_url_count", self.sitemap_url_count);
        record.set("http_status_code", self.http_status_code);
        record.set("cache_control", self.cache_control);
        record.set("content_security_policy", self.content_security_policy);
        record.set("gzip_compression", self.gzip_compression);
        record.set("robots_txt_allows_page", self.robots_txt_allows_page);
    }
}
