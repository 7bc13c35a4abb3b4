//! Route 53 HTTP 请求方法（REST/XML）

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::host_header;
use crate::providers::sigv4::{SigningScope, amz_date, base_headers, sign};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::ErrorResponse;
use super::{ROUTE53_SERVICE, ROUTE53_SIGNING_REGION, Route53Provider};

const SIGNING_SCOPE: SigningScope<'static> = SigningScope {
    service: ROUTE53_SERVICE,
    region: ROUTE53_SIGNING_REGION,
};

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // 尝试解析结构化错误
        if let Some((code, message)) = quick_xml::de::from_str::<ErrorResponse>(response_text)
            .ok()
            .and_then(ErrorResponse::into_code_and_message)
        {
            return Err(self.map_error(RawApiError::with_code(code, message), ctx));
        }

        // 回退到通用错误
        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }

    /// 签名并发送请求
    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self
            .endpoint
            .join(path)
            .map_err(|e| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "path".to_string(),
                detail: format!("{path}: {e}"),
            })?;

        let payload = body.unwrap_or_default();
        if !payload.is_empty() {
            log::debug!("Request Body: {payload}");
        }

        let timestamp = amz_date(Utc::now());
        let host = host_header(&self.endpoint);

        let mut headers = base_headers(&host, &timestamp, &self.credentials);
        if !payload.is_empty() {
            headers.push(("Content-Type".to_string(), "application/xml".to_string()));
        }

        let authorization = sign(
            &self.credentials,
            SIGNING_SCOPE,
            method,
            url.path(),
            "",
            &headers,
            &payload,
            &timestamp,
        );

        let mut request = match method {
            "GET" => self.client.get(url.clone()),
            "POST" => self.client.post(url.clone()),
            _ => {
                return Err(ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "method".to_string(),
                    detail: method.to_string(),
                });
            }
        };
        for (name, value) in &headers {
            // reqwest 自己写 Host
            if name != "Host" {
                request = request.header(name.as_str(), value.as_str());
            }
        }
        request = request.header("Authorization", authorization);
        if !payload.is_empty() {
            request = request.body(payload);
        }

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), method, url.as_str())
                .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, ctx: ErrorContext) -> Result<T> {
        self.send("GET", path, None, ctx).await
    }

    /// 执行 POST 请求（XML body）
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: String,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.send("POST", path, Some(body), ctx).await
    }
}
