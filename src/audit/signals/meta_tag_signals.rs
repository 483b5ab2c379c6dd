use crate::audit::record::{FieldValue, NOT_FOUND, NOT_SPECIFIED, SeoRecord, YesNo};
use crate::audit::signals::{PageContext, SignalExtractor};

pub struct MetaTagSignals;

impl SignalExtractor for MetaTagSignals {
    fn name(&self) -> &'static str {
        "meta_tags"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let document = page.document;
        let attr_or_not_found = |css: &str, attr: &str| {
            FieldValue::text_or_not_found(document.first_attr(css, attr).as_deref())
        };

        record.set(
            "robots_meta",
            attr_or_not_found(r#"meta[name="robots"]"#, "content"),
        );
        record.set(
            "canonical_link",
            attr_or_not_found(r#"link[rel~="canonical"]"#, "href"),
        );
        record.set(
            "mobile_friendly",
            YesNo::from(document.exists(r#"meta[name="viewport"]"#)),
        );
        record.set("favicon", attr_or_not_found(r#"link[rel~="icon"]"#, "href"));

        let lang = document.first_attr("html", "lang");
        record.set("language", FieldValue::text_or_not_found(lang.as_deref()));
        record.set(
            "lang_attribute",
            match (document.exists("html"), lang) {
                (_, Some(lang)) => lang,
                (true, None) => NOT_SPECIFIED.to_string(),
                (false, None) => NOT_FOUND.to_string(),
            },
        );
        record.set("charset", attr_or_not_found("meta[charset]", "charset"));

        // Article times are published under `name` or, per Open Graph, `property`.
        record.set(
            "publish_date",
            attr_or_not_found(
                r#"meta[name="article:published_time"], meta[property="article:published_time"]"#,
                "content",
            ),
        );
        record.set(
            "last_modified_date",
            attr_or_not_found(
                r#"meta[name="article:modified_time"], meta[property="article:modified_time"]"#,
                "content",
            ),
        );
    }
}
