//! Typed client for the five points endpoints.
//!
//! Writes and reads fail differently on purpose:
//! - a POST answered with a non-2xx status becomes a fixed message per endpoint,
//!   the server body is not looked at;
//! - a GET is not gated on status; its body is decoded into the endpoint's
//!   envelope, and a decode failure reports the parse error (or the backend's
//!   `error` text when the body is its error shape).

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use ustr::Ustr;

use crate::BusinessConfig;
use crate::http::{Method, RequestBuilder, Response};
use crate::models::{
    ApiErrorBody, ConfigurePointsRequest, GrantPointsRequest, PointConfig, PointsListResponse,
    PointsLogEntry, PointsLogQuery, PointsLogResponse, User, UsersListResponse,
};

/// Shown when `/configurePoints` answers with a non-2xx status.
pub const CONFIGURE_POINTS_FAILED: &str = "保存失败";

/// Shown when `/adminGrantPoints` answers with a non-2xx status.
pub const GRANT_POINTS_FAILED: &str = "积分操作失败";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("{0}")]
    Transport(String),
    /// A write came back with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: &'static str },
    /// A read came back with the backend's error body.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the endpoint's schema.
    #[error("{0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("{0}")]
    Serialize(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct PointsApi {
    client: reqwest::Client,
    api_url: Ustr,
}

impl PointsApi {
    pub fn new(config: &BusinessConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &BusinessConfig) -> Self {
        Self {
            client,
            api_url: config.api_url(),
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{endpoint}", self.api_url);
        RequestBuilder::new(self.client.clone(), method, url)
    }

    /// POST `/configurePoints`
    pub async fn configure_points(&self, body: &ConfigurePointsRequest) -> ApiResult<()> {
        self.post("configurePoints", body, CONFIGURE_POINTS_FAILED)
            .await
    }

    /// POST `/adminGrantPoints`
    pub async fn grant_points(&self, body: &GrantPointsRequest) -> ApiResult<()> {
        self.post("adminGrantPoints", body, GRANT_POINTS_FAILED)
            .await
    }

    /// GET `/getUsersList`
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let response = self.get(self.request(Method::Get, "getUsersList")).await?;
        decode::<UsersListResponse>(&response).map(|envelope| envelope.users)
    }

    /// GET `/getPointsList`
    pub async fn list_point_configs(&self) -> ApiResult<Vec<PointConfig>> {
        let response = self.get(self.request(Method::Get, "getPointsList")).await?;
        decode::<PointsListResponse>(&response).map(|envelope| envelope.data)
    }

    /// GET `/getPointsLog`, optionally filtered by user and capped in length.
    pub async fn list_points_log(&self, query: &PointsLogQuery) -> ApiResult<Vec<PointsLogEntry>> {
        let mut request = self.request(Method::Get, "getPointsLog");
        if let Some(username) = &query.username {
            request = request.query("username", username.as_str());
        }
        if let Some(limit) = query.limit {
            request = request.query("limit", limit.to_string());
        }

        let response = self.get(request).await?;
        decode::<PointsLogResponse>(&response).map(|envelope| envelope.logs)
    }

    async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        failure: &'static str,
    ) -> ApiResult<()> {
        let request = self
            .request(Method::Post, endpoint)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.message))?;

        if !response.is_success() {
            log::warn!(
                "{endpoint} rejected with status {}: {}",
                response.status,
                response.text_lossy()
            );
            return Err(ApiError::Rejected {
                status: response.status,
                message: failure,
            });
        }

        // The body is not used, but it must still be JSON.
        response
            .json::<IgnoredAny>()
            .map_err(|e| {
                log::warn!("{endpoint} answered with a non-JSON body: {e}");
                ApiError::Parse(e.to_string())
            })?;

        log::info!("{endpoint} succeeded");
        Ok(())
    }

    async fn get(&self, request: RequestBuilder) -> ApiResult<Response> {
        request.send().await.map_err(|e| ApiError::Transport(e.message))
    }
}

fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    match response.json::<T>() {
        Ok(envelope) => Ok(envelope),
        Err(parse_err) => {
            if let Ok(body) = response.json::<ApiErrorBody>() {
                log::warn!(
                    "list request failed with status {} (code {:?}): {}",
                    response.status,
                    body.code,
                    body.error
                );
                return Err(ApiError::Server {
                    status: response.status,
                    message: body.error,
                });
            }
            log::warn!("failed to parse list response: {parse_err}");
            Err(ApiError::Parse(parse_err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_decode_envelope() {
        let users = decode::<UsersListResponse>(&response(200, r#"{"users": []}"#)).unwrap();
        assert!(users.users.is_empty());
    }

    #[test]
    fn test_decode_prefers_backend_error_text() {
        let err = decode::<UsersListResponse>(&response(
            500,
            r#"{"error": "获取用户列表失败", "code": 500}"#,
        ))
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "获取用户列表失败".to_owned()
            }
        );
        assert_eq!(err.to_string(), "获取用户列表失败");
    }

    #[test]
    fn test_decode_reports_parse_error() {
        let err = decode::<PointsLogResponse>(&response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_rejected_displays_fixed_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: GRANT_POINTS_FAILED,
        };
        assert_eq!(err.to_string(), "积分操作失败");
    }

    #[test]
    fn test_api_url_from_config() {
        let api = PointsApi::new(&BusinessConfig::new("http://localhost:9000"));
        assert_eq!(api.api_url(), "http://localhost:9000/api");
    }
}
