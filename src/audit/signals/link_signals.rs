use crate::audit::record::SeoRecord;
use crate::audit::signals::{PageContext, SignalExtractor};

const ANCHOR_TEXT_LIMIT: usize = 10;
const AFFILIATE_MARKERS: [&str; 2] = ["ref=", "/affiliate/"];

pub struct LinkSignals;

impl SignalExtractor for LinkSignals {
    fn name(&self) -> &'static str {
        "links"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let anchors = page.document.anchors();
        // Substring match on the page URL, not a same-origin comparison.
        let internal = anchors
            .iter()
            .filter(|anchor| anchor.href.contains(page.url))
            .count();
        let affiliate = anchors
            .iter()
            .filter(|anchor| {
                AFFILIATE_MARKERS
                    .iter()
                    .any(|marker| anchor.href.contains(marker))
            })
            .count();
        let anchor_texts = anchors
            .iter()
            .map(|anchor| anchor.text.trim())
            .filter(|text| !text.is_empty())
            .take(ANCHOR_TEXT_LIMIT)
            .collect::<Vec<&str>>()
            .join(", ");

        record.set("link_count", anchors.len());
        record.set("internal_links", internal);
        record.set("external_links", anchors.len() - internal);
        record.set("affiliate_links_count", affiliate);
        record.set("anchor_texts", anchor_texts);
    }
}
