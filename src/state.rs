use crate::config::XgodoConfig;
use crate::proxy::error::ProxyError;
use crate::proxy::upstream::UpstreamClient;

/// Web 应用状态
///
/// 启动时创建一次，之后只读共享，不含任何可变字段。
pub struct AppState {
    pub config: XgodoConfig,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: XgodoConfig) -> Result<Self, String> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self { config, upstream })
    }

    /// 转发前取 token; 未配置时拒绝转发，不触达上游
    pub fn bearer_token(&self) -> Result<&str, ProxyError> {
        self.config.token.as_deref().ok_or(ProxyError::MissingToken)
    }
}
