use crate::audit::page::PageDocument;
use crate::audit::record::{FieldValue, Presence, SeoRecord, YesNo};
use crate::audit::signals::{PageContext, SignalExtractor};

const COOKIE_BANNER_IDS: [&str; 3] = ["cookie-banner", "cookie-consent", "cookie-notice"];

pub struct PageFeatureSignals;

impl SignalExtractor for PageFeatureSignals {
    fn name(&self) -> &'static str {
        "page_features"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let document = page.document;
        let href_or_not_found =
            |css: &str| FieldValue::text_or_not_found(document.first_attr(css, "href").as_deref());

        record.set(
            "breadcrumbs",
            Presence::from(document.exists(r#"nav[aria-label="breadcrumb"]"#)),
        );
        record.set("pagination_next", href_or_not_found(r#"link[rel~="next"]"#));
        record.set("pagination_prev", href_or_not_found(r#"link[rel~="prev"]"#));
        record.set(
            "hreflang_count",
            document.count(r#"link[rel~="alternate"][hreflang]"#),
        );
        record.set("amp", YesNo::from(document.exists("html[amp]")));
        record.set("inline_script_count", inline_script_count(document));
        record.set("external_script_count", document.count("script[src]"));
        record.set("aria_role_count", document.count("[role]"));
        record.set("cookie_banner", YesNo::from(has_cookie_banner(document)));
        record.set("social_proof_count", social_proof_count(document));
        record.set("video_count", document.count("video"));
        record.set("audio_count", document.count("audio"));
        record.set("custom_fonts_count", document.count(r#"link[href*="fonts"]"#));
    }
}

/// Scripts with a body instead of a `src`, excluding data blocks like JSON-LD.
fn inline_script_count(document: &PageDocument) -> usize {
    document
        .select("script:not([src])")
        .iter()
        .filter(|script| {
            match script.value().attr("type").map(|t| t.trim().to_ascii_lowercase()) {
                None => true,
                Some(script_type) => {
                    script_type.is_empty()
                        || script_type == "module"
                        || script_type.contains("javascript")
                }
            }
        })
        .count()
}

fn has_cookie_banner(document: &PageDocument) -> bool {
    COOKIE_BANNER_IDS
        .iter()
        .any(|id| document.exists(&format!(r#"[id="{}"]"#, id)))
        || document.visible_text().to_lowercase().contains("cookie")
}

/// Rating widgets first, star spans only when there are none.
fn social_proof_count(document: &PageDocument) -> usize {
    match document.count("div.rating") {
        0 => document.count("span.stars"),
        ratings => ratings,
    }
}
