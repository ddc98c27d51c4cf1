//! 面向 API 服务的 HTTP 客户端
//!
//! 每次请求前从令牌槽取令牌并附加 `Authorization: Bearer <token>`。
//! 服务端响应统一包在 `{ code, message, data }` 信封里，这里负责拆封。

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::token::TokenStore;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("api error {code}: {message}")]
    Api { code: i32, message: String },
    #[error("response missing data field")]
    MissingData,
}

/// 服务端统一响应信封
#[derive(Debug, serde::Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn attach_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.get_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            // 错误响应也可能带信封，取其中的业务信息
            let message = match response.json::<Envelope<serde_json::Value>>().await {
                Ok(envelope) => {
                    return Err(ClientError::Api {
                        code: envelope.code,
                        message: envelope.message,
                    });
                }
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Status { status, message });
        }

        let envelope = response.json::<Envelope<T>>().await?;
        envelope.data.ok_or(ClientError::MissingData)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.attach_auth(self.http.get(self.url(path))).send().await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .attach_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self
            .attach_auth(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self
            .attach_auth(self.http.patch(self.url(path)).json(body))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self
            .attach_auth(self.http.delete(self.url(path)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    // 只关心成败、不取数据的请求
    async fn expect_success(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match response.json::<Envelope<serde_json::Value>>().await {
            Ok(envelope) => Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            }),
            Err(_) => Err(ClientError::Status {
                status,
                message: status.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/", TokenStore::new());
        assert_eq!(
            client.url("/api/courses"),
            "http://localhost:8080/api/courses"
        );
        assert_eq!(
            client.url("api/courses"),
            "http://localhost:8080/api/courses"
        );
    }

    #[test]
    fn test_envelope_deserializes_missing_data() {
        let envelope: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"code":40400,"message":"not found"}"#).unwrap();
        assert_eq!(envelope.code, 40400);
        assert!(envelope.data.is_none());
    }
}
