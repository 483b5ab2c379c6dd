use crate::audit::record::SeoRecord;
use crate::audit::signals::{PageContext, SignalExtractor};
use std::collections::HashMap;

pub struct ContentSignals;

impl SignalExtractor for ContentSignals {
    fn name(&self) -> &'static str {
        "content"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let text = page.document.visible_text();

        record.set("word_count", page.document.word_count());
        record.set("text_to_html_ratio", text_to_html_ratio(text, page.markup));
        record.set("duplicate_phrases_count", duplicate_phrase_count(text));
    }
}

fn text_to_html_ratio(text: &str, markup: &str) -> f64 {
    let markup_length = markup.chars().count();
    if markup_length == 0 {
        return 0.0;
    }
    text.chars().count() as f64 * 100.0 / markup_length as f64
}

/// Phrases are the pieces between full stops. Every occurrence of a phrase
/// that appears more than once is counted.
fn duplicate_phrase_count(text: &str) -> usize {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for phrase in text.split('.') {
        *occurrences.entry(phrase).or_insert(0) += 1;
    }
    occurrences.values().filter(|&&count| count > 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::record::FieldValue;
    use crate::audit::signals::extract_with;

    #[test]
    fn counts_repeated_phrases() {
        assert_eq!(duplicate_phrase_count("Buy now. Read more. Buy now. Buy now"), 2);
        assert_eq!(duplicate_phrase_count("Buy now.Read more.Buy now.Buy now"), 3);
        assert_eq!(duplicate_phrase_count("One sentence only"), 0);
    }

    #[test]
    fn ratio_of_text_to_markup() {
        assert_eq!(text_to_html_ratio("abcd", "12345678"), 50.0);
        assert_eq!(text_to_html_ratio("", ""), 0.0);
    }

    #[test]
    fn word_count_uses_visible_text() {
        let markup = "<html><body><p>one two  three</p><script>four five</script></body></html>";
        let record = extract_with(&ContentSignals, "https://example.com", markup, &[]);
        assert_eq!(record.get("word_count"), Some(&FieldValue::Count(3)));
    }
}
