use crate::audit::AuditError;
use crate::audit::record::{ReportSchema, SeoRecord};
use std::path::Path;
use tracing::info;

/// Writes the schema header, then one row per record in the order given.
pub fn write_report(
    path: &Path,
    schema: &ReportSchema,
    records: &[SeoRecord],
) -> Result<(), AuditError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(schema.columns())?;
    for record in records {
        writer.write_record(record.to_row(schema)?)?;
    }
    writer.flush()?;
    info!(
        "Wrote {} rows of {} columns to {}",
        records.len(),
        schema.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_record(url: &str, schema: &ReportSchema) -> SeoRecord {
        let mut record = SeoRecord::new(url);
        for column in schema.columns() {
            if column != "url" {
                record.set(column.as_str(), format!("{column} value"));
            }
        }
        record
    }

    #[test]
    fn written_rows_read_back_unchanged() {
        let schema = ReportSchema::new(&["SEO".to_owned()]);
        let mut record = full_record("https://example.com", &schema);
        record.set("title", "Commas, \"quotes\" and\nnewlines");
        record.set("title_length", 31usize);
        record.set("page_load_time", 0.25);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report(&path, &schema, &[record]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, schema.columns());

        let rows: Vec<HashMap<String, String>> = reader
            .deserialize::<HashMap<String, String>>()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["url"], "https://example.com");
        assert_eq!(rows[0]["title"], "Commas, \"quotes\" and\nnewlines");
        assert_eq!(rows[0]["title_length"], "31");
        assert_eq!(rows[0]["page_load_time"], "0.25");
        assert_eq!(rows[0]["keyword_density_SEO"], "keyword_density_SEO value");
    }

    #[test]
    fn incomplete_record_is_rejected() {
        let schema = ReportSchema::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let result = write_report(&path, &schema, &[SeoRecord::new("https://example.com")]);
        assert!(matches!(result, Err(AuditError::MissingField { .. })));
    }
}
