use once_cell::unsync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Error, Method, Response, StatusCode};
use shared::models::{JobSummary, LoginRequest, LoginResponse};

use crate::nav;
use crate::session::SessionStore;

const DEFAULT_BASE_URL: &str = "/api";
const LOGIN_REDIRECT: &str = "/login";

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// Lightweight API client for CampusHire web interactions. Requests carry a
/// JSON content type and, when a token is stored, a bearer authorization
/// header; a 401 response terminates the session globally.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a request with the default header set merged under any
    /// caller-supplied headers (caller headers win).
    ///
    /// Returns `Ok(None)` when the response status is exactly 401: the stored
    /// session has been cleared and the browser redirected to the login page,
    /// so there is no response for the caller to use. Transport failures are
    /// logged and re-raised unchanged.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<Response>, Error> {
        let store = SessionStore::new();
        let merged = merge_headers(store.token().as_deref(), &headers);

        let mut builder = self.client.request(method, self.api_url(path)).headers(merged);
        if let Some(json) = body {
            builder = builder.body(json.to_string());
        }

        match builder.send().await {
            Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                let outcome = terminate_session(&store);
                nav::redirect(LOGIN_REDIRECT);
                Ok(outcome)
            }
            Ok(response) => Ok(Some(response)),
            Err(err) => {
                web_sys::console::error_1(&format!("API request failed: {err}").into());
                Err(err)
            }
        }
    }

    /// GET without extra headers or body.
    pub async fn get(&self, path: &str) -> Result<Option<Response>, Error> {
        self.request(Method::GET, path, HeaderMap::new(), None).await
    }

    /// Authenticate with email/password credentials. Issued without the
    /// wrapper: a 401 here means bad credentials, not an expired session.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, Error> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// List active job postings.
    pub async fn list_jobs(&self) -> Result<Option<Vec<JobSummary>>, Error> {
        match self.get("jobs").await? {
            Some(response) => Ok(Some(response.error_for_status()?.json().await?)),
            None => Ok(None),
        }
    }

    /// List the recruiter's own job postings.
    pub async fn list_recruiter_jobs(&self) -> Result<Option<Vec<JobSummary>>, Error> {
        match self.get("recruiter/jobs").await? {
            Some(response) => Ok(Some(response.error_for_status()?.json().await?)),
            None => Ok(None),
        }
    }
}

/// Unauthorized outcome shared by every wrapped request: drop the stored
/// session so the next read sees a logged-out browser, leaving nothing for
/// the caller to act on.
pub(crate) fn terminate_session(store: &SessionStore) -> Option<Response> {
    store.clear();
    None
}

/// Build the outgoing header set: JSON content type, bearer authorization
/// when a token exists, then caller overrides on top.
pub(crate) fn merge_headers(token: Option<&str>, overrides: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            headers.insert(AUTHORIZATION, value);
        }
    }

    for (name, value) in overrides {
        headers.insert(name.clone(), value.clone());
    }

    headers
}
