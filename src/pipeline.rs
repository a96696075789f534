use crate::client::OpenMrsClient;
use crate::error::{ImportError, Result};
use crate::models::{ObservationRecord, PatientRecord};
use crate::payload::{encounter_payload, patient_payload, person_payload};

/// Run the full import: for every patient row in file order, create its
/// person, patient, and encounter, each step consuming the uuid returned
/// by the previous one. The first failure aborts all remaining rows.
pub async fn run(
    client: &OpenMrsClient,
    patients: &[PatientRecord],
    observations: &[ObservationRecord],
) -> Result<()> {
    for patient in patients {
        import_patient(client, patient, observations).await?;
    }

    tracing::info!(patients = patients.len(), "Import complete");
    Ok(())
}

async fn import_patient(
    client: &OpenMrsClient,
    patient: &PatientRecord,
    observations: &[ObservationRecord],
) -> Result<()> {
    let person_uuid = client.create_person(&person_payload(patient)).await?;
    tracing::info!(identifier = %patient.identifier, person = %person_uuid, "Person saved");

    let patient_uuid = client
        .create_patient(&patient_payload(&person_uuid, &patient.identifier))
        .await?;
    tracing::info!(identifier = %patient.identifier, patient = %patient_uuid, "Patient saved");

    let matched: Vec<&ObservationRecord> = observations
        .iter()
        .filter(|obs| obs.patient_identifier == patient.identifier)
        .collect();

    // The encounter datetime is taken from the first row of the whole
    // observation file, not from the matched patient's own rows.
    let encounter_datetime = &observations
        .first()
        .ok_or(ImportError::NoObservations)?
        .datetime;

    client
        .create_encounter(&encounter_payload(&patient_uuid, encounter_datetime, &matched))
        .await?;
    tracing::info!(
        identifier = %patient.identifier,
        obs = matched.len(),
        "Encounter saved"
    );

    Ok(())
}
