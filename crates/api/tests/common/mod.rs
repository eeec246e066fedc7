use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_graphql::{EmptyMutation, EmptySubscription, Request, Schema, Variables};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use api::gql::{build_schema, QueryRoot};
use api::AppState;
use upstream::UpstreamClient;

pub type TestSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the Euroleague API: serves canned JSON bodies per
/// path and records every request it sees. Unconfigured paths return 404,
/// which the client's fail-soft contract turns into absent data.
pub struct MockUpstream {
    addr: SocketAddr,
    state: MockState,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(serve_canned)
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock upstream should bind");
        let addr = listener.local_addr().expect("mock upstream addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock upstream");
        });
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve `body` for `GET /{endpoint}`.
    #[allow(dead_code)]
    pub fn respond_with(&self, endpoint: &str, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(format!("/{endpoint}"), body);
    }

    #[allow(dead_code)]
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn serve_canned(State(state): State<MockState>, uri: Uri) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    });
    let body = state.responses.lock().unwrap().get(uri.path()).cloned();
    match body {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Build a schema whose resolvers talk to the given mock upstream.
pub fn schema_for(mock: &MockUpstream) -> TestSchema {
    build_schema(AppState::new(UpstreamClient::new(mock.url())))
}

/// Helper function to execute GraphQL queries
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &TestSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}
