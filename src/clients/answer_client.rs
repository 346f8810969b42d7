/// 问答服务客户端
///
/// 封装对外部 RAG 问答服务 `/ask` 接口的调用
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::AskError;
use crate::logger::truncate_text;

/// 与 `encodeURIComponent` 一致：除字母数字和 `-_.!~*'()` 外全部转义，空格为 `%20`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 答案来源
///
/// `QueryController` 只依赖这个能力，测试中可以替换为假实现
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// 提交一个问题，返回答案文本
    async fn ask(&self, query: &str) -> Result<String, AskError>;
}

#[async_trait]
impl<T: AnswerSource + ?Sized> AnswerSource for &T {
    async fn ask(&self, query: &str) -> Result<String, AskError> {
        (**self).ask(query).await
    }
}

/// 问答服务 HTTP 客户端
pub struct AnswerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnswerClient {
    /// 创建新的问答客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.ask_url())
    }

    /// 使用指定的接口地址创建
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// 接口地址
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerSource for AnswerClient {
    /// 发送 `GET {endpoint}?query=...`
    ///
    /// 问题原样（不做 trim）编码进 `query` 参数；不重试，不设超时
    async fn ask(&self, query: &str) -> Result<String, AskError> {
        debug!("正在请求问答服务: {}", self.endpoint);
        debug!("问题: {}", truncate_text(query, 80));

        let response = self
            .http
            .get(request_url(&self.endpoint, query))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| AskError::transport(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskError::status(&self.endpoint, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AskError::transport(&self.endpoint, e))?;

        let data: Value =
            serde_json::from_slice(&body).map_err(|e| AskError::Decode { source: e })?;

        debug!("问答服务响应成功，状态码: {}", status);

        extract_answer(&data)
    }
}

/// 拼接请求地址，`query` 参数按 URI 组件规则做百分号编码
pub fn request_url(endpoint: &str, query: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{}{}query={}",
        endpoint,
        separator,
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

/// 从响应 JSON 中提取 `answer` 字段，其它字段忽略
pub fn extract_answer(data: &Value) -> Result<String, AskError> {
    data.get("answer")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(AskError::MissingAnswer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_answer_ignores_other_fields() {
        let data = json!({
            "query": "What is time complexity?",
            "answer": "O(1) is constant..."
        });
        assert_eq!(extract_answer(&data).unwrap(), "O(1) is constant...");
    }

    #[test]
    fn test_extract_answer_missing_field() {
        let data = json!({ "query": "x" });
        assert!(matches!(extract_answer(&data), Err(AskError::MissingAnswer)));
    }

    #[test]
    fn test_extract_answer_wrong_type() {
        let data = json!({ "answer": 42 });
        assert!(matches!(extract_answer(&data), Err(AskError::MissingAnswer)));

        let data = json!(["answer"]);
        assert!(matches!(extract_answer(&data), Err(AskError::MissingAnswer)));
    }

    #[test]
    fn test_request_url_uses_percent_encoding() {
        assert_eq!(
            request_url("http://127.0.0.1:8000/ask", "What is time complexity?"),
            "http://127.0.0.1:8000/ask?query=What%20is%20time%20complexity%3F"
        );
        assert_eq!(
            request_url("http://h/ask", "a+b&c=d/é (x)!"),
            "http://h/ask?query=a%2Bb%26c%3Dd%2F%C3%A9%20(x)!"
        );
        assert_eq!(request_url("http://h/ask?v=1", "q"), "http://h/ask?v=1&query=q");
    }

    #[test]
    fn test_endpoint_from_config() {
        let client = AnswerClient::new(&Config::default());
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/ask");
    }
}
