use serde::Deserialize;

/// One row of the patient demographics file.
///
/// All fields are carried verbatim; the remote API is the source of truth
/// for acceptable gender and birthdate formats. The identifier is the
/// external business key used to correlate observation rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientRecord {
    pub identifier: String,
    pub given_name: String,
    pub family_name: String,
    pub gender: String,
    pub birthdate: String,
}
