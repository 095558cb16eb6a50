use std::collections::BTreeSet;

use periop_core::errors::SchemaError;
use periop_core::models::Record;
use periop_core::tracing::events;

use crate::schema::FeatureSchema;

/// Reject `columns` unless it covers every schema feature.
/// Missing features are reported in schema order.
pub fn check_columns<'a, I>(schema: &FeatureSchema, columns: I) -> Result<(), SchemaError>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing = schema.missing_from(columns);
    if missing.is_empty() {
        Ok(())
    } else {
        events::schema_rejected(&missing);
        Err(SchemaError::MissingColumns { columns: missing })
    }
}

/// Column check for a materialized batch: the union of all record keys
/// must cover the schema.
pub fn check_records(schema: &FeatureSchema, records: &[Record]) -> Result<(), SchemaError> {
    let union: BTreeSet<&str> = records.iter().flat_map(Record::keys).collect();
    check_columns(schema, union)
}
