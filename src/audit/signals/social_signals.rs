use crate::audit::page::PageDocument;
use crate::audit::record::{FieldValue, SeoRecord};
use crate::audit::signals::{PageContext, SignalExtractor};

const OPEN_GRAPH_REQUIRED: [&str; 4] = ["og:title", "og:description", "og:image", "og:url"];
const TWITTER_REQUIRED: [&str; 4] = [
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

pub struct SocialSignals;

impl SignalExtractor for SocialSignals {
    fn name(&self) -> &'static str {
        "social"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let document = page.document;
        let og_properties = meta_keys_with_prefix(document, "property", "og:");
        let twitter_names = meta_keys_with_prefix(document, "name", "twitter:");

        record.set("og_tags_count", og_properties.len());
        record.set("twitter_tags_count", twitter_names.len());
        record.set(
            "og_tags_present",
            OPEN_GRAPH_REQUIRED
                .iter()
                .all(|tag| og_properties.contains(tag)),
        );
        record.set(
            "twitter_tags_present",
            TWITTER_REQUIRED
                .iter()
                .all(|tag| twitter_names.contains(tag)),
        );
        record.set(
            "og_image",
            FieldValue::text_or_not_found(
                document
                    .first_attr(r#"meta[property="og:image"]"#, "content")
                    .as_deref(),
            ),
        );
        record.set(
            "twitter_image",
            FieldValue::text_or_not_found(
                document
                    .first_attr(r#"meta[name="twitter:image"]"#, "content")
                    .as_deref(),
            ),
        );
    }
}

/// Values of `attribute` on `<meta>` tags that start with `prefix`.
fn meta_keys_with_prefix<'a>(
    document: &'a PageDocument,
    attribute: &str,
    prefix: &str,
) -> Vec<&'a str> {
    document
        .select("meta")
        .into_iter()
        .filter_map(|element| element.value().attr(attribute))
        .filter(|key| key.starts_with(prefix))
        .collect()
}
