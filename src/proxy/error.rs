use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::common::ApiResponse;

/// 代理自身的错误分类 (上游返回的错误状态码不属于这里，它们原样转发)
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// 缺少必填查询参数，未发起上游请求
    #[error("Missing required query parameter: {0}")]
    MissingParam(&'static str),
    /// 未配置 XGODO_TOKEN，转发被拒绝
    #[error("Server misconfigured: XGODO_TOKEN is not set")]
    MissingToken,
    /// 上游调用超出 HTTP_TIMEOUT
    #[error("Upstream request timed out after {0} seconds")]
    Timeout(u64),
    /// 连接失败等传输层错误
    #[error("Upstream request failed: {0}")]
    Unreachable(String),
}

impl ProxyError {
    /// reqwest 传输错误归类: 超时 → 504，其余 → 502
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParam(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Proxy error");
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }

        (status, ApiResponse::err(self.to_string())).into_response()
    }
}
