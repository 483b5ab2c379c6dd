use crate::audit::record::{Quality, SeoRecord, Validity};
use crate::audit::signals::{PageContext, SignalExtractor};

pub struct HeadingSignals;

impl SignalExtractor for HeadingSignals {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let levels = page.document.heading_levels();
        let h1_count = levels.iter().filter(|&&level| level == 1).count();
        let h2_count = levels.iter().filter(|&&level| level == 2).count();
        let ordered = is_sorted_by_level(levels);

        record.set("h1_count", h1_count);
        record.set("h2_count", h2_count);
        record.set("header_tag_hierarchy", Validity::from(ordered));
        record.set(
            "heading_hierarchy",
            if ordered {
                Quality::Good
            } else {
                Quality::NeedsImprovement
            },
        );
    }
}

/// True when the levels already equal their own sorted order. This is not a
/// nesting check: h1, h2, h1, h2 nests fine but fails here.
fn is_sorted_by_level(levels: &[u8]) -> bool {
    levels.windows(2).all(|pair| pair[0] <= pair[1])
}
