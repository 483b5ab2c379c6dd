mod field_value;
mod report_schema;
mod seo_record;

pub use field_value::*;
pub use report_schema::{ReportSchema, keyword_density_column};
pub use seo_record::SeoRecord;
