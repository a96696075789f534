use serde::Deserialize;

/// One row of the viral-load observation file.
///
/// The value column must be an integer; coercion happens at load time so a
/// bad cell is reported before any network activity. The datetime is kept
/// as the raw string from the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObservationRecord {
    pub patient_identifier: String,
    pub datetime: String,
    pub value: i64,
}
