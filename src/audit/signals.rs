//! Signal extractors: each one reads the parsed page and writes a fixed group
//! of report fields. They never touch the network.

mod content_signals;
mod description_signals;
mod heading_signals;
mod image_signals;
mod keyword_signals;
mod link_signals;
mod meta_tag_signals;
mod page_feature_signals;
mod social_signals;
mod structured_data_signals;
mod title_signals;
mod url_signals;

pub use content_signals::ContentSignals;
pub use description_signals::DescriptionSignals;
pub use heading_signals::HeadingSignals;
pub use image_signals::ImageSignals;
pub use keyword_signals::KeywordSignals;
pub use link_signals::LinkSignals;
pub use meta_tag_signals::MetaTagSignals;
pub use page_feature_signals::PageFeatureSignals;
pub use social_signals::SocialSignals;
pub use structured_data_signals::StructuredDataSignals;
pub use title_signals::TitleSignals;
pub use url_signals::UrlSignals;

use crate::audit::page::PageDocument;
use crate::audit::record::SeoRecord;

/// Everything an extractor may look at for one page.
pub struct PageContext<'a> {
    pub url: &'a str,
    pub markup: &'a str,
    pub document: &'a PageDocument,
    pub keywords: &'a [String],
}

pub trait SignalExtractor {
    fn name(&self) -> &'static str;
    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord);
}

/// The extractors in the order they run.
pub fn default_extractors() -> Vec<Box<dyn SignalExtractor>> {
    vec![
        Box::new(TitleSignals),
        Box::new(DescriptionSignals),
        Box::new(KeywordSignals),
        Box::new(HeadingSignals),
        Box::new(ImageSignals),
        Box::new(LinkSignals),
        Box::new(StructuredDataSignals),
        Box::new(MetaTagSignals),
        Box::new(SocialSignals),
        Box::new(UrlSignals),
        Box::new(ContentSignals),
        Box::new(PageFeatureSignals),
    ]
}

/// Runs `extractor` over `markup` served from `url`, for the extractor tests.
#[cfg(test)]
pub(crate) fn extract_with(
    extractor: &dyn SignalExtractor,
    url: &str,
    markup: &str,
    keywords: &[String],
) -> SeoRecord {
    let document = PageDocument::parse(markup);
    let page = PageContext {
        url,
        markup,
        document: &document,
        keywords,
    };
    let mut record = SeoRecord::new(url);
    extractor.extract(&page, &mut record);
    record
}
