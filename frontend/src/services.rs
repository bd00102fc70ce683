// HTTP service layer for the client detail endpoint
use clientdesk_shared::{ClientDetail, LoadError};
use gloo_net::http::Request;

pub type LoadResult<T> = Result<T, LoadError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    /// Single GET with no retry; the session cookie rides along same-origin.
    async fn get_text(url: &str) -> LoadResult<String> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Server {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Parse(e.to_string()))
    }
}

// ============================================
// CLIENT DETAIL SERVICE
// ============================================

pub mod clients {
    use super::*;

    pub async fn fetch_client_detail(url: &str) -> LoadResult<ClientDetail> {
        let body = ApiClient::get_text(url).await?;
        ClientDetail::from_json(&body)
    }
}
