use upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    pub fn from_env() -> Self {
        Self::new(UpstreamClient::from_env())
    }
}
