use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

/// Number of `<url>` entries in a sitemap document. Parsing is lenient: end
/// tags are not matched against start tags, and a syntax error stops the
/// count without failing it, so an HTML error page served as the sitemap
/// counts 0.
pub fn count_sitemap_urls(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"url" => {
                count += 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(
                    "Sitemap parse stopped at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
        }
        buf.clear();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_url_entries() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc></url>
  <url><loc>https://example.com/about</loc><lastmod>2024-01-01</lastmod></url>
  <url/>
</urlset>"#;
        assert_eq!(count_sitemap_urls(xml), 3);
    }

    #[test]
    fn sitemap_index_has_no_url_entries() {
        let xml = r#"<sitemapindex><sitemap><loc>https://example.com/a.xml</loc></sitemap></sitemapindex>"#;
        assert_eq!(count_sitemap_urls(xml), 0);
    }

    #[test]
    fn html_error_page_counts_zero() {
        let html = "<!DOCTYPE html><html><body><p>Page not found<br></p></body></html>";
        assert_eq!(count_sitemap_urls(html), 0);
    }

    #[test]
    fn mismatched_tags_keep_counting() {
        assert_eq!(count_sitemap_urls("<urlset><url><loc>a</url></urlset>"), 1);
    }

    #[test]
    fn syntax_error_keeps_the_count_so_far() {
        assert_eq!(count_sitemap_urls("<urlset><url/><url/><!-- broken"), 2);
    }
}
