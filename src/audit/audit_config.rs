use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_KEYWORDS: [&str; 3] = ["SEO", "optimization", "content"];

#[derive(Debug, Clone)]
pub struct AuditConfig {
    input: PathBuf,
    output: PathBuf,
    keywords: Vec<String>,
    page_timeout: Duration,
    probe_timeout: Duration,
    concurrency: usize,
    link_concurrency: usize,
    track_duplicates: bool,
    user_agent: String,
}

impl AuditConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            page_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(5),
            concurrency: 1,
            link_concurrency: 8,
            track_duplicates: false,
            user_agent: format!("rusty-seo/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// An empty list keeps the default keywords. Repeated keywords are dropped.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                if !unique.contains(&keyword) {
                    unique.push(keyword);
                }
            }
            self.keywords = unique;
        }
        self
    }

    pub fn with_timeouts(mut self, page_timeout: Duration, probe_timeout: Duration) -> Self {
        self.page_timeout = page_timeout;
        self.probe_timeout = probe_timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize, link_concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self.link_concurrency = link_concurrency.max(1);
        self
    }

    pub fn with_duplicate_tracking(mut self, track_duplicates: bool) -> Self {
        self.track_duplicates = track_duplicates;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        if let Some(user_agent) = user_agent {
            self.user_agent = user_agent;
        }
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn page_timeout(&self) -> Duration {
        self.page_timeout
    }

    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn link_concurrency(&self) -> usize {
        self.link_concurrency
    }

    pub fn track_duplicates(&self) -> bool {
        self.track_duplicates
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keyword_list_keeps_defaults() {
        let config = AuditConfig::new("in.csv".into(), "out.csv".into()).with_keywords(Vec::new());
        assert_eq!(config.keywords(), ["SEO", "optimization", "content"]);
    }

    #[test]
    fn concurrency_never_drops_to_zero() {
        let config = AuditConfig::new("in.csv".into(), "out.csv".into()).with_concurrency(0, 0);
        assert_eq!(config.concurrency(), 1);
        assert_eq!(config.link_concurrency(), 1);
    }
}
