use crate::audit::signals::{PageContext, SignalExtractor};
use crate::audit::record::SeoRecord;

pub struct ImageSignals;

impl SignalExtractor for ImageSignals {
    fn name(&self) -> &'static str {
        "images"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let images = page.document.images();
        let with_alt = images
            .iter()
            .filter(|image| image.alt.as_deref().is_some_and(|alt| !alt.is_empty()))
            .count();
        // "large" in the file name stands in for an unoptimized asset.
        let large = images
            .iter()
            .filter(|image| {
                image
                    .src
                    .as_deref()
                    .is_some_and(|src| src.to_lowercase().contains("large"))
            })
            .count();
        let lazy = images
            .iter()
            .filter(|image| image.loading.as_deref() == Some("lazy"))
            .count();

        record.set("image_count", images.len());
        record.set("images_with_alt", with_alt);
        record.set("images_without_alt", images.len() - with_alt);
        record.set("large_images_count", large);
        record.set("lazy_loaded_images", lazy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::record::FieldValue;
    use crate::audit::signals::extract_with;

    #[test]
    fn page_without_images_counts_zero() {
        let record = extract_with(&ImageSignals, "https://example.com", "<p>text</p>", &[]);
        for field in ["image_count", "images_with_alt", "images_without_alt", "large_images_count"] {
            assert_eq!(record.get(field), Some(&FieldValue::Count(0)), "{}", field);
        }
    }

    #[test]
    fn classifies_alt_size_and_loading() {
        let markup = r#"
            <img src="/img/hero-LARGE.jpg" alt="Hero" loading="lazy">
            <img src="/img/icon.png" alt="">
            <img src="/img/large_banner.png">
            <img alt="No source" loading="eager">"#;
        let record = extract_with(&ImageSignals, "https://example.com", markup, &[]);
        assert_eq!(record.get("image_count"), Some(&FieldValue::Count(4)));
        assert_eq!(record.get("images_with_alt"), Some(&FieldValue::Count(2)));
        assert_eq!(record.get("images_without_alt"), Some(&FieldValue::Count(2)));
        assert_eq!(record.get("large_images_count"), Some(&FieldValue::Count(2)));
        assert_eq!(record.get("lazy_loaded_images"), Some(&FieldValue::Count(1)));
    }
}
