//! xgodo 上游客户端
//!
//! 负责向上游发起请求并注入 `Authorization: Bearer` 头。
//! 上游应答 (包括 4xx/5xx) 一律原样透传; 只有传输层失败
//! 才会产生本进程自己的错误，见 [`ProxyError`]。

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::config::XgodoConfig;
use crate::proxy::error::ProxyError;

/// 领取任务
pub const APPLY_PATH: &str = "/api/v2/tasks/apply";
/// 提交任务凭证
pub const SUBMIT_PATH: &str = "/api/v2/tasks/submit";
/// 查询任务详情
pub const DETAILS_PATH: &str = "/api/v2/tasks/details";

/// 上游应答: 状态码与响应体不做任何改写
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut resp = Response::new(Body::from(self.body));
        *resp.status_mut() = self.status;
        if let Some(ct) = self.content_type {
            resp.headers_mut().insert(header::CONTENT_TYPE, ct);
        }
        resp
    }
}

/// xgodo HTTP 客户端，整个进程共享一个连接池
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl UpstreamClient {
    pub fn new(config: &XgodoConfig) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// GET 转发
    pub async fn get(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<UpstreamResponse, ProxyError> {
        // 上游要求 GET 请求也携带 application/json 的 Content-Type
        let req = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(req, token).await
    }

    /// POST 转发，请求体为 JSON
    pub async fn post(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<UpstreamResponse, ProxyError> {
        let req = self.http.post(self.endpoint(path)).query(query).json(body);
        self.execute(req, token).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
        token: &str,
    ) -> Result<UpstreamResponse, ProxyError> {
        let response = req
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ProxyError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::from_reqwest(e, self.timeout_secs))?;

        tracing::debug!("Upstream responded: status {}, {} bytes", status, body.len());

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
