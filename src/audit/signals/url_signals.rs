use crate::audit::record::{Quality, SeoRecord, YesNo};
use crate::audit::signals::{PageContext, SignalExtractor};
use regex::Regex;
use std::sync::LazyLock;

const MAX_GOOD_URL_LENGTH: usize = 100;

static URL_STRUCTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-/]+$").expect("url structure regex is valid"));

pub struct UrlSignals;

impl SignalExtractor for UrlSignals {
    fn name(&self) -> &'static str {
        "url"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let url = page.url;
        let length = url.chars().count();

        record.set("https", YesNo::from(url.starts_with("https")));
        record.set("url_length", length);
        record.set("url_structure_quality", url_structure_quality(url, length));
    }
}

/// Only letters, digits, hyphens and slashes, and short. The whole string is
/// matched, so any `scheme://` prefix fails the pattern.
fn url_structure_quality(url: &str, length: usize) -> Quality {
    if URL_STRUCTURE.is_match(url) && length <= MAX_GOOD_URL_LENGTH {
        Quality::Good
    } else {
        Quality::NeedsImprovement
    }
}
