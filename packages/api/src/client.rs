//! # HTTP client for the Taskify REST API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] together with the API base URL
//! and, once logged in, the bearer [`Credential`]. Every method issues one
//! request and maps the outcome through the same rules:
//!
//! - 2xx → the decoded payload (or `()` where no body is required)
//! - 401 → [`ApiError::Unauthorized`]
//! - other statuses → [`ApiError::Status`] carrying the body's `message`
//! - transport failure → [`ApiError::Network`]
//!
//! Nothing is retried and no timeout is applied.
//!
//! ## Endpoints
//!
//! | Method | Request |
//! |--------|---------|
//! | [`login`](ApiClient::login) | `POST /login/` |
//! | [`signup`](ApiClient::signup) | `POST /signup/` |
//! | [`profile`](ApiClient::profile) | `GET /profile/` |
//! | [`list_projects`](ApiClient::list_projects) | `GET /projects/?search_q=` |
//! | [`create_project`](ApiClient::create_project) | `POST /projects/` |
//! | [`update_project`](ApiClient::update_project) | `PUT /projects/{id}` |
//! | [`delete_project`](ApiClient::delete_project) | `DELETE /projects/{id}` |
//! | [`list_tasks`](ApiClient::list_tasks) | `GET /tasks/?search_q=&status=` |
//! | [`create_task`](ApiClient::create_task) | `POST /tasks/` |
//! | [`update_task`](ApiClient::update_task) | `PUT /tasks/{id}` |
//! | [`delete_task`](ApiClient::delete_task) | `DELETE /tasks/{id}` |

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{Credential, TaskifyConfig};

use crate::error::{error_for, ApiError};
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, NewProject, NewTask, Project, ProjectUpdate,
    SignupRequest, Task, TaskStatus, TaskUpdate, UserProfile,
};

/// Client for the remote API. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<Credential>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.credential == other.credential
    }
}

impl ApiClient {
    pub fn new(config: &TaskifyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            credential: None,
        }
    }

    /// Attach the bearer credential sent with every later request.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        match &self.credential {
            Some(c) => builder.header(AUTHORIZATION, c.bearer()),
            None => builder,
        }
    }

    /// Send and return the status plus raw body text.
    async fn exchange(&self, builder: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("request failed before a response: {e}");
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?;
        tracing::debug!("{url} -> {status}");
        Ok((status, body))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let (status, body) = self.exchange(builder).await?;
        if let Some(err) = error_for(status, &body) {
            tracing::warn!("api error: {err}");
            return Err(err);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// For writes whose success body is optional.
    async fn fetch_message(&self, builder: RequestBuilder) -> Result<Option<String>, ApiError> {
        let (status, body) = self.exchange(builder).await?;
        if let Some(err) = error_for(status, &body) {
            tracing::warn!("api error: {err}");
            return Err(err);
        }
        Ok(serde_json::from_str::<MessageResponse>(&body)
            .ok()
            .and_then(|m| m.message))
    }

    fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder, ApiError> {
        Ok(builder.body(serde_json::to_string(body)?))
    }

    /// Exchange email and password for a bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let builder = Self::with_body(self.request(Method::POST, "login/"), request)?;
        let response: LoginResponse = self.fetch_json(builder).await?;
        Ok(response.jwt_token)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        let builder = Self::with_body(self.request(Method::POST, "signup/"), request)?;
        self.fetch_message(builder).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.fetch_json(self.request(Method::GET, "profile/")).await
    }

    pub async fn list_projects(&self, search: &str) -> Result<Vec<Project>, ApiError> {
        let builder = self
            .request(Method::GET, "projects/")
            .query(&[("search_q", search)]);
        self.fetch_json(builder).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Option<String>, ApiError> {
        let builder = Self::with_body(self.request(Method::POST, "projects/"), project)?;
        self.fetch_message(builder).await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> Result<Option<String>, ApiError> {
        let path = format!("projects/{project_id}");
        let builder = Self::with_body(self.request(Method::PUT, &path), update)?;
        self.fetch_message(builder).await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        let path = format!("projects/{project_id}");
        self.fetch_message(self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    /// `status: None` lists every status.
    pub async fn list_tasks(
        &self,
        search: &str,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, ApiError> {
        let status = status.map(|s| s.as_str()).unwrap_or_default();
        let builder = self
            .request(Method::GET, "tasks/")
            .query(&[("search_q", search), ("status", status)]);
        self.fetch_json(builder).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Option<String>, ApiError> {
        let builder = Self::with_body(self.request(Method::POST, "tasks/"), task)?;
        self.fetch_message(builder).await
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<Option<String>, ApiError> {
        let path = format!("tasks/{task_id}");
        let builder = Self::with_body(self.request(Method::PUT, &path), update)?;
        self.fetch_message(builder).await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let path = format!("tasks/{task_id}");
        self.fetch_message(self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new(&TaskifyConfig::default().with_base_url("http://host/"));
        assert_eq!(client.url("projects/"), "http://host/projects/");
        assert_eq!(client.url("/tasks/7"), "http://host/tasks/7");
    }

    #[test]
    fn test_clients_compare_by_base_url_and_credential() {
        let config = TaskifyConfig::default();
        let anon = ApiClient::new(&config);
        let authed = ApiClient::new(&config).with_credential(Credential::new("t"));
        assert_eq!(anon, ApiClient::new(&config));
        assert_ne!(anon, authed);
        assert_eq!(authed.credential().map(|c| c.token.as_str()), Some("t"));
    }

    #[test]
    fn test_requests_carry_json_and_bearer_headers() {
        let client = ApiClient::new(&TaskifyConfig::default().with_base_url("http://host"))
            .with_credential(Credential::new("abc"));
        let request = client
            .request(Method::GET, "projects/")
            .query(&[("search_q", "a b")])
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://host/projects/?search_q=a+b");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_anonymous_requests_have_no_authorization() {
        let client = ApiClient::new(&TaskifyConfig::default());
        let request = client.request(Method::POST, "login/").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
