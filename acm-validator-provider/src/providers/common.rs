//! Provider 公共工具函数

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::{Client, Url};
use sha2::{Digest, Sha256};

use crate::error::{ProviderError, Result};

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// 解析 API 端点 URL
pub fn parse_endpoint(endpoint: &str, provider: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| ProviderError::InvalidParameter {
        provider: provider.to_string(),
        param: "endpoint".to_string(),
        detail: format!("{endpoint}: {e}"),
    })
}

/// 签名用的 Host 头（非默认端口时带端口）
pub fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（SigV4 签名密钥派生）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// SHA-256 十六进制摘要
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

// ============ 资源 ID 处理 ============

/// 去掉 Route 53 资源 ID 的路径前缀
/// 如: "/hostedzone/Z123" -> "Z123"
/// 如: "/change/C456" -> "C456"
pub fn strip_resource_prefix(id: &str) -> String {
    id.rsplit('/').next().unwrap_or(id).to_string()
}
