use crate::audit::record::{SeoRecord, keyword_density_column};
use crate::audit::signals::{PageContext, SignalExtractor};

pub struct KeywordSignals;

impl SignalExtractor for KeywordSignals {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let keywords: Vec<String> = page.keywords.iter().map(|k| k.to_lowercase()).collect();
        let title = page.document.title().unwrap_or_default().to_lowercase();
        let description = page.document.description().unwrap_or_default().to_lowercase();

        record.set("keywords_in_title", keyword_hits(&title, &keywords));
        record.set("keywords_in_description", keyword_hits(&description, &keywords));

        let text = page.document.visible_text().to_lowercase();
        let word_count = page.document.word_count();
        for (keyword, lowered) in page.keywords.iter().zip(&keywords) {
            record.set(
                keyword_density_column(keyword),
                keyword_density(&text, lowered, word_count),
            );
        }
    }
}

/// How many keywords appear at least once in `haystack`.
fn keyword_hits(haystack: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count()
}

/// Occurrences per hundred words; zero for an empty page.
fn keyword_density(text: &str, keyword: &str, word_count: usize) -> f64 {
    if word_count == 0 || keyword.is_empty() {
        return 0.0;
    }
    let occurrences = text.matches(keyword).count();
    occurrences as f64 * 100.0 / word_count as f64
}
