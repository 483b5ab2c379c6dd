use crate::audit::audit_error::AuditError;
use crate::audit::record::field_value::FieldValue;
use crate::audit::record::report_schema::ReportSchema;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SeoRecord {
    url: String,
    fields: HashMap<String, FieldValue>,
}

impl SeoRecord {
    pub fn new(url: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert("url".to_string(), FieldValue::from(url));
        Self {
            url: url.to_owned(),
            fields,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Renders the record in schema order. Every schema column must be present.
    pub fn to_row(&self, schema: &ReportSchema) -> Result<Vec<String>, AuditError> {
        schema
            .columns()
            .iter()
            .map(|column| {
                self.fields
                    .get(column)
                    .map(|value| value.to_string())
                    .ok_or_else(|| AuditError::MissingField {
                        url: self.url.clone(),
                        field: column.clone(),
                    })
            })
            .collect()
    }
}
