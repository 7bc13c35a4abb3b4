//! ACM HTTP 请求方法（AWS JSON 1.1 协议）

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::host_header;
use crate::providers::sigv4::{SigningScope, amz_date, base_headers, sign};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::ErrorResponse;
use super::{ACM_CONTENT_TYPE, ACM_SERVICE, ACM_TARGET_PREFIX, AcmProvider};

impl AcmProvider {
    /// 统一处理 ACM 响应错误
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
        if let Ok(error) = serde_json::from_str::<ErrorResponse>(response_text)
            && let Some(code) = error.code()
        {
            return Err(self.map_error(
                RawApiError::with_code(code, error.message.clone().unwrap_or_default()),
                ctx,
            ));
        }

        // 回退到通用错误
        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }

    /// 调用一个 ACM action：`POST /`，`X-Amz-Target: CertificateManager.{action}`
    pub(crate) async fn call<T, B>(&self, action: &str, body: &B, ctx: ErrorContext) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {payload}");

        let timestamp = amz_date(Utc::now());
        let target = format!("{ACM_TARGET_PREFIX}.{action}");
        let host = host_header(&self.endpoint);

        let mut headers = base_headers(&host, &timestamp, &self.credentials);
        headers.push(("Content-Type".to_string(), ACM_CONTENT_TYPE.to_string()));
        headers.push(("X-Amz-Target".to_string(), target));

        let authorization = sign(
            &self.credentials,
            SigningScope {
                service: ACM_SERVICE,
                region: &self.region,
            },
            "POST",
            "/",
            "",
            &headers,
            &payload,
            &timestamp,
        );

        let mut request = self.client.post(self.endpoint.clone());
        for (name, value) in &headers {
            // reqwest 自己写 Host
            if name != "Host" {
                request = request.header(name.as_str(), value.as_str());
            }
        }
        let request = request.header("Authorization", authorization).body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", action).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}
