//! 运行配置模型
//!
//! 所有配置项来自环境变量，启动时读取一次，之后只读。

use std::fmt;

/// 上游默认地址
pub const DEFAULT_BASE_URL: &str = "https://xgodo.com";
/// 上游请求默认超时 (秒)
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// 运行配置
///
/// `token` 缺失不阻止进程启动: 静态页面与 /health 仍然可用，
/// 只有转发端点会被拒绝。
#[derive(Clone)]
pub struct XgodoConfig {
    /// XGODO_TOKEN，已去除首尾空白; 空串视同未设置
    pub token: Option<String>,
    /// XGODO_BASE_URL，已去除末尾斜杠，且 scheme 限定 http(s)
    pub base_url: String,
    /// HTTP_TIMEOUT，整秒
    pub timeout_secs: u64,
}

impl XgodoConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_values(
            std::env::var("XGODO_TOKEN").ok(),
            std::env::var("XGODO_BASE_URL").ok(),
            std::env::var("HTTP_TIMEOUT").ok(),
        )
    }

    pub fn from_values(
        token: Option<String>,
        base_url: Option<String>,
        timeout: Option<String>,
    ) -> Result<Self, String> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let base_url = base_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| format!("Invalid XGODO_BASE_URL '{}': {}", base_url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid XGODO_BASE_URL '{}': scheme must be http or https",
                base_url
            ));
        }

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid HTTP_TIMEOUT '{}': {}", raw, e))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            token,
            base_url,
            timeout_secs,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

// token 不能进入任何日志输出，Debug 只暴露是否已配置
impl fmt::Debug for XgodoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XgodoConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = XgodoConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.token, None);
        assert_eq!(config.base_url, "https://xgodo.com");
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn test_token_is_trimmed() {
        let config =
            XgodoConfig::from_values(Some("  secret-token \n".to_string()), None, None).unwrap();
        assert_eq!(config.token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn test_blank_token_counts_as_unset() {
        let config = XgodoConfig::from_values(Some("   ".to_string()), None, None).unwrap();
        assert!(!config.has_token());
    }

    #[test]
    fn test_base_url_trailing_slashes_are_trimmed() {
        let config =
            XgodoConfig::from_values(None, Some("https://staging.xgodo.com///".to_string()), None)
                .unwrap();
        assert_eq!(config.base_url, "https://staging.xgodo.com");
    }

    #[test]
    fn test_empty_base_url_falls_back_to_default() {
        let config = XgodoConfig::from_values(None, Some("".to_string()), None).unwrap();
        assert_eq!(config.base_url, "https://xgodo.com");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = XgodoConfig::from_values(None, Some("not a url".to_string()), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("XGODO_BASE_URL"));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let result = XgodoConfig::from_values(None, Some("ftp://xgodo.com".to_string()), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("scheme must be http"));
    }

    #[test]
    fn test_timeout_is_parsed() {
        let config = XgodoConfig::from_values(None, None, Some("45".to_string())).unwrap();
        assert_eq!(config.timeout_secs, 45);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = XgodoConfig::from_values(None, None, Some("twenty".to_string()));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("HTTP_TIMEOUT"));
    }

    #[test]
    fn test_debug_output_never_contains_token() {
        let config = XgodoConfig::from_values(Some("super-secret-value".to_string()), None, None)
            .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
    }
}
