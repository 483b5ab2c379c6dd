use crate::audit::record::{MISSING, Quality, SeoRecord, YesNo};
use crate::audit::signals::{PageContext, SignalExtractor};

pub struct DescriptionSignals;

impl SignalExtractor for DescriptionSignals {
    fn name(&self) -> &'static str {
        "meta_description"
    }

    fn extract(&self, page: &PageContext<'_>, record: &mut SeoRecord) {
        let description = page.document.description();
        let length = description.map(|d| d.chars().count()).unwrap_or(0);
        let quality = match description {
            Some(_) => Quality::within(length, 120..=160),
            None => Quality::NeedsImprovement,
        };

        record.set("meta_description", description.unwrap_or(MISSING));
        record.set("meta_description_length", length);
        record.set("meta_description_quality", quality);
        record.set("duplicate_meta_description", YesNo::No);
    }
}
