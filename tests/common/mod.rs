use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use openmrs_import::client::OpenMrsClient;
use openmrs_import::config::Config;

/// In-memory stand-in for the OpenMRS REST API. Records every payload it
/// receives and assigns sequential uuids per resource ("person-1",
/// "person-2", ...). Setting `fail_resource` makes the named endpoint
/// answer with HTTP 500.
#[derive(Default)]
pub struct MockOpenMrs {
    pub persons: Mutex<Vec<Value>>,
    pub patients: Mutex<Vec<Value>>,
    pub encounters: Mutex<Vec<Value>>,
    pub fail_resource: Mutex<Option<String>>,
}

impl MockOpenMrs {
    fn create(&self, resource: &str, payload: Value) -> (StatusCode, Json<Value>) {
        if self.fail_resource.lock().unwrap().as_deref() == Some(resource) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"message": "Internal server error"}})),
            );
        }

        let store = match resource {
            "person" => &self.persons,
            "patient" => &self.patients,
            _ => &self.encounters,
        };

        let mut store = store.lock().unwrap();
        store.push(payload);
        let uuid = format!("{}-{}", resource, store.len());

        (StatusCode::CREATED, Json(json!({ "uuid": uuid })))
    }
}

async fn post_person(
    State(state): State<Arc<MockOpenMrs>>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.create("person", payload)
}

async fn post_patient(
    State(state): State<Arc<MockOpenMrs>>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.create("patient", payload)
}

async fn post_encounter(
    State(state): State<Arc<MockOpenMrs>>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.create("encounter", payload)
}

/// Start the mock server on an ephemeral port and return its base URL.
pub async fn spawn_mock_openmrs(state: Arc<MockOpenMrs>) -> String {
    let app = Router::new()
        .route("/person", post(post_person))
        .route("/patient", post(post_patient))
        .route("/encounter", post(post_encounter))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener
        .local_addr()
        .expect("Failed to read mock server address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    format!("http://{}", addr)
}

/// Build a client pointed at the mock server.
pub fn test_client(base_url: &str) -> OpenMrsClient {
    OpenMrsClient::new(&Config {
        base_url: base_url.to_string(),
        username: "admin".to_string(),
        password: "Admin123".to_string(),
    })
}
