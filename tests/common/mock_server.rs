//! Stand-in for the Pinterest v5 API.

use serde_json::Value;
use wiremock::{
    matchers::{bearer_token, method, path, query_param},
    Mock, MockBuilder, MockServer, ResponseTemplate,
};

pub const SEARCH_PATH: &str = "/v5/search/pins";

pub fn board_path(board_id: &str) -> String {
    format!("/v5/boards/{board_id}/pins")
}

/// wiremock server answering Pinterest routes
pub struct MockPinterest {
    pub server: MockServer,
}

impl MockPinterest {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to put in `PinterestConfig::base_url`
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Requests that reached the mock so far
    pub async fn hits(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Pins for any search carrying `Authorization: Bearer {token}`
    pub async fn pins_for_token(&self, token: &str, pins: Value) {
        Self::get(SEARCH_PATH)
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200).set_body_json(pins))
            .mount(&self.server)
            .await;
    }

    /// Pins for a request at `endpoint` whose query string contains `params`
    pub async fn pins_for_params(&self, endpoint: &str, params: &[(&str, &str)], pins: Value) {
        let mut mock = Self::get(endpoint);
        for (name, value) in params {
            mock = mock.and(query_param(*name, *value));
        }
        mock.respond_with(ResponseTemplate::new(200).set_body_json(pins))
            .mount(&self.server)
            .await;
    }

    /// Pinterest-style JSON error (`{"code": .., "message": ..}`)
    pub async fn fail_json(&self, endpoint: &str, status: u16, body: Value) {
        Self::get(endpoint)
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Bare text error, as a proxy in front of Pinterest might return
    pub async fn fail_text(&self, endpoint: &str, status: u16, text: &str) {
        Self::get(endpoint)
            .respond_with(ResponseTemplate::new(status).set_body_string(text))
            .mount(&self.server)
            .await;
    }

    fn get(endpoint: &str) -> MockBuilder {
        Mock::given(method("GET")).and(path(endpoint))
    }
}
