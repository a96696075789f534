use std::env;

/// Identifier type assigned to every imported patient identifier.
pub const IDENTIFIER_TYPE_UUID: &str = "05a29f94-c0ed-11e2-94be-8c13b969e334";

/// Location recorded on patient identifiers and encounters.
pub const LOCATION_UUID: &str = "58c57d25-8d39-41ab-8422-108a0c277d98";

/// Encounter type for imported viral-load encounters.
pub const ENCOUNTER_TYPE_UUID: &str = "d7151f82-c1f3-4152-a605-2f9ea7414a79";

/// Concept coding the viral-load measurement on each obs.
pub const VIRAL_LOAD_CONCEPT_UUID: &str = "856AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var("OPENMRS_BASE_URL")
            .unwrap_or_else(|_| "https://openmrs-spa.org/openmrs/ws/rest/v1".to_string());

        let username = env::var("OPENMRS_USERNAME").unwrap_or_else(|_| "admin".to_string());

        let password = env::var("OPENMRS_PASSWORD").unwrap_or_else(|_| "Admin123".to_string());

        Config {
            base_url,
            username,
            password,
        }
    }
}
