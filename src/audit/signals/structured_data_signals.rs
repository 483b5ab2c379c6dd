use crate::audit::record::{NONE, SeoRecord};
use crate::audit::signals::{PageContext, SignalExtractor};
use serde_json::Value;
use tracing::debug;

pub struct StructuredDataSignals;

impl SignalExtractor for StructuredDataSignals {
    fn name(&self) -> &'static str {
        "structured_data"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let blocks = page.document.json_ld_blocks();
        let schema_types: Vec<String> = blocks.iter().filter_map(|block| schema_type(block)).collect();

        record.set("structured_data_count", blocks.len());
        record.set(
            "schema_types",
            if schema_types.is_empty() {
                NONE.to_string()
            } else {
                schema_types.join(", ")
            },
        );
    }
}

/// `@type` of a JSON-LD block whose top level is an object. Blocks that fail
/// to parse contribute nothing.
fn schema_type(block: &str) -> Option<String> {
    let value: Value = match serde_json::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring unparsable JSON-LD block: {}", e);
            return None;
        }
    };
    match value.as_object()?.get("@type")? {
        Value::String(schema_type) => Some(schema_type.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::record::FieldValue;
    use crate::audit::signals::extract_with;

    #[test]
    fn collects_types_from_object_blocks() {
        let markup = r#"
            <script type="application/ld+json">{"@context": "https://schema.org", "@type": "Article"}</script>
            <script type="application/ld+json">{"@type": ["Product", "Thing"]}</script>
            <script type="application/ld+json">[{"@type": "Ignored"}]</script>
            <script type="application/ld+json">{ not json</script>"#;
        let record = extract_with(&StructuredDataSignals, "https://example.com", markup, &[]);
        assert_eq!(record.get("structured_data_count"), Some(&FieldValue::Count(4)));
        assert_eq!(
            record.get("schema_types"),
            Some(&FieldValue::from(r#"Article, ["Product","Thing"]"#))
        );
    }

    #[test]
    fn no_usable_types_yields_none() {
        let markup = r#"<script type="application/ld+json">{"name": "x"}</script>"#;
        let record = extract_with(&StructuredDataSignals, "https://example.com", markup, &[]);
        assert_eq!(record.get("structured_data_count"), Some(&FieldValue::Count(1)));
        assert_eq!(record.get("schema_types"), Some(&FieldValue::from("None")));
    }
}
