use crate::audit::record::{FieldValue, SeoRecord, YesNo};
use std::collections::HashSet;

/// Batch-wide memory of titles and descriptions. Records must be observed in
/// report order so the first occurrence stays "No".
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    titles: HashSet<String>,
    descriptions: HashSet<String>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &mut SeoRecord) {
        if let Some(title) = present_text(record, "title", "title_length") {
            let repeated = !self.titles.insert(title);
            record.set("duplicate_title", YesNo::from(repeated));
        }
        if let Some(description) =
            present_text(record, "meta_description", "meta_description_length")
        {
            let repeated = !self.descriptions.insert(description);
            record.set("duplicate_meta_description", YesNo::from(repeated));
        }
    }
}

/// The text of `field`, unless the page lacked it. A zero length marks the
/// sentinel rather than a literal "missing" title.
fn present_text(record: &SeoRecord, field: &str, length_field: &str) -> Option<String> {
    if matches!(record.get(length_field), None | Some(FieldValue::Count(0))) {
        return None;
    }
    record.get(field)?.as_text().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::record::MISSING;

    fn record(url: &str, title: Option<&str>) -> SeoRecord {
        let mut record = SeoRecord::new(url);
        record.set("title", title.unwrap_or(MISSING));
        record.set("title_length", title.map(|t| t.chars().count()).unwrap_or(0));
        record.set("duplicate_title", YesNo::No);
        record
    }

    #[test]
    fn second_identical_title_is_a_duplicate() {
        let mut tracker = DuplicateTracker::new();
        let mut first = record("https://a.example", Some("Home"));
        let mut second = record("https://b.example", Some("Home"));
        let mut third = record("https://c.example", Some("About"));
        tracker.observe(&mut first);
        tracker.observe(&mut second);
        tracker.observe(&mut third);

        assert_eq!(first.get("duplicate_title"), Some(&FieldValue::from(YesNo::No)));
        assert_eq!(second.get("duplicate_title"), Some(&FieldValue::from(YesNo::Yes)));
        assert_eq!(third.get("duplicate_title"), Some(&FieldValue::from(YesNo::No)));
    }

    #[test]
    fn missing_titles_never_collide() {
        let mut tracker = DuplicateTracker::new();
        let mut first = record("https://a.example", None);
        let mut second = record("https://b.example", None);
        tracker.observe(&mut first);
        tracker.observe(&mut second);
        assert_eq!(second.get("duplicate_title"), Some(&FieldValue::from(YesNo::No)));
    }
}
