use serde_json::{json, Value};

use crate::config;
use crate::models::{ObservationRecord, PatientRecord};

/// Build the person creation payload for one patient row. Gender and
/// birthdate are passed through verbatim; the server validates them.
pub fn person_payload(record: &PatientRecord) -> Value {
    json!({
        "names": [{
            "givenName": record.given_name,
            "familyName": record.family_name,
        }],
        "gender": record.gender,
        "birthdate": record.birthdate,
    })
}

/// Build the patient creation payload wrapping a created person. The
/// original record identifier becomes the single preferred identifier.
pub fn patient_payload(person_uuid: &str, identifier: &str) -> Value {
    json!({
        "person": person_uuid,
        "identifiers": [{
            "identifier": identifier,
            "identifierType": config::IDENTIFIER_TYPE_UUID,
            "location": config::LOCATION_UUID,
            "preferred": true,
        }],
    })
}

/// Build the encounter creation payload with one obs entry per matched
/// observation row, in file order.
pub fn encounter_payload(
    patient_uuid: &str,
    encounter_datetime: &str,
    observations: &[&ObservationRecord],
) -> Value {
    let obs: Vec<Value> = observations
        .iter()
        .map(|o| {
            json!({
                "concept": config::VIRAL_LOAD_CONCEPT_UUID,
                "value": o.value,
                "obsDatetime": o.datetime,
            })
        })
        .collect();

    json!({
        "patient": patient_uuid,
        "encounterDatetime": encounter_datetime,
        "location": config::LOCATION_UUID,
        "encounterType": config::ENCOUNTER_TYPE_UUID,
        "obs": obs,
    })
}
