//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use acm_validator_provider::{AcmProvider, AwsCredentials, Route53Provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试用固定凭证（mock 服务器不校验签名）
pub fn mock_credentials() -> AwsCredentials {
    AwsCredentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name(zone_name: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{}", &uuid.to_string()[..8], zone_name)
}

/// 测试上下文 - 封装真实 AWS 的 ACM / Route 53 adapter
pub struct TestContext {
    pub acm: AcmProvider,
    pub route53: Route53Provider,
    pub test_zone: Option<String>,
}

impl TestContext {
    /// 从 `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_REGION` 创建
    pub fn from_env() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        let mut credentials = AwsCredentials::new(access_key_id, secret_access_key);
        if let Ok(token) = env::var("AWS_SESSION_TOKEN") {
            credentials = credentials.with_session_token(token);
        }

        Some(Self {
            acm: AcmProvider::new(credentials.clone(), region).ok()?,
            route53: Route53Provider::new(credentials).ok()?,
            test_zone: env::var("TEST_HOSTED_ZONE").ok(),
        })
    }
}
