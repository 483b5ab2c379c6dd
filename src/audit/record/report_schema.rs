const LEADING_COLUMNS: &[&str] = &[
    "url",
    "title",
    "title_length",
    "title_quality",
    "meta_description",
    "meta_description_length",
    "meta_description_quality",
    "keywords_in_title",
    "keywords_in_description",
    "h1_count",
    "h2_count",
    "image_count",
    "images_with_alt",
    "images_without_alt",
    "link_count",
    "internal_links",
    "external_links",
    "structured_data_count",
    "robots_meta",
    "canonical_link",
    "page_load_time",
    "mobile_friendly",
    "favicon",
    "og_tags_count",
    "twitter_tags_count",
    "https",
    "broken_links",
    "word_count",
];

const TRAILING_COLUMNS: &[&str] = &[
    "language",
    "charset",
    "sitemap",
    "robots_txt",
    "header_tag_hierarchy",
    "duplicate_title",
    "text_to_html_ratio",
    "breadcrumbs",
    "pagination_next",
    "pagination_prev",
    "hreflang_count",
    "amp",
    "publish_date",
    "last_modified_date",
    "schema_types",
    "og_image",
    "twitter_image",
    "anchor_texts",
    "inline_script_count",
    "external_script_count",
    "http_status_code",
    "duplicate_phrases_count",
    "sitemap_url_count",
    "aria_role_count",
    "og_tags_present",
    "twitter_tags_present",
    "lang_attribute",
    "duplicate_meta_description",
    "large_images_count",
    "cache_control",
    "content_security_policy",
    "url_length",
    "url_structure_quality",
    "heading_hierarchy",
    "lazy_loaded_images",
    "gzip_compression",
    "cookie_banner",
    "social_proof_count",
    "video_count",
    "audio_count",
    "affiliate_links_count",
    "custom_fonts_count",
    "robots_txt_allows_page",
    "content_type",
];

pub fn keyword_density_column(keyword: &str) -> String {
    format!("keyword_density_{}", keyword)
}

/// Ordered column list of the report. Only the keyword density columns vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSchema {
    columns: Vec<String>,
}

impl ReportSchema {
    pub fn new(keywords: &[String]) -> Self {
        let columns = LEADING_COLUMNS
            .iter()
            .map(|column| column.to_string())
            .chain(keywords.iter().map(|keyword| keyword_density_column(keyword)))
            .chain(TRAILING_COLUMNS.iter().map(|column| column.to_string()))
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_columns_sit_after_word_count() {
        let schema = ReportSchema::new(&["SEO".to_string(), "rust".to_string()]);
        let columns = schema.columns();
        let word_count = columns.iter().position(|c| c == "word_count").unwrap();
        assert_eq!(columns[word_count + 1], "keyword_density_SEO");
        assert_eq!(columns[word_count + 2], "keyword_density_rust");
        assert_eq!(columns[word_count + 3], "language");
        assert_eq!(columns[0], "url");
    }

    #[test]
    fn columns_are_unique() {
        let schema = ReportSchema::new(&["SEO".to_string()]);
        let mut columns = schema.columns().to_vec();
        columns.sort();
        columns.dedup();
        assert_eq!(columns.len(), schema.len());
    }
}
