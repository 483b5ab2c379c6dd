use crate::audit::record::{MISSING, Quality, SeoRecord, YesNo};
use crate::audit::signals::{PageContext, SignalExtractor};

pub struct TitleSignals;

impl SignalExtractor for TitleSignals {
    fn name(&self) -> &'static str {
        "title"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let title = page.document.title();
        let length = title.map(|t| t.chars().count()).unwrap_or(0);
        let quality = match title {
            Some(_) => Quality::within(length, 50..=60),
            None => Quality::NeedsImprovement,
        };

        record.set("title", title.unwrap_or(MISSING));
        record.set("title_length", length);
        record.set("title_quality", quality);
        // A single page cannot repeat its own title; batch tracking may override.
        record.set("duplicate_title", YesNo::No);
    }
}
