use crate::record::Record;
use serde_json::Value;

/// JSON array of records in relaxed Extended JSON; `_id` becomes `{"$oid": ..}`.
#[must_use]
pub fn records_to_json(records: &[Record]) -> Value {
    Value::Array(records.iter().map(Record::to_json).collect())
}
