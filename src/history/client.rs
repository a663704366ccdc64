use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthProvider, UserId};
use crate::chat::RawMessage;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct HistoryResponse {
    // Missing rows are treated the same as an empty page
    #[serde(default)]
    pub rows: Vec<RawMessage>,
    #[serde(default)]
    pub total: Option<u64>,
    // Status reported in the body. The backend can answer HTTP 200 with
    // a non-200 code here, e.g. when the token has expired.
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Source of a session's message history.
#[async_trait]
pub trait HistoryFetcher: Send + Sync {
    async fn fetch_history(&self, req: &HistoryRequest) -> Result<HistoryResponse, Error>;
}

pub type BoxedHistoryFetcher = Arc<dyn HistoryFetcher>;

/// Fetches history from the chat backend's message list endpoint.
pub struct HttpHistoryClient {
    api_hostname: String,
    timeout: Duration,
    auth: Arc<dyn AuthProvider>,
}

impl HttpHistoryClient {
    pub fn new(api_hostname: &str, timeout: Duration, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            timeout,
            auth,
        }
    }
}

#[async_trait]
impl HistoryFetcher for HttpHistoryClient {
    async fn fetch_history(&self, req: &HistoryRequest) -> Result<HistoryResponse, Error> {
        let mut url = reqwest::Url::parse(&format!(
            "{}/chat/message/list",
            self.api_hostname.trim_end_matches('/')
        ))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("sessionId", &req.session_id);
            if let Some(user_id) = req.user_id {
                query.append_pair("userId", &user_id.to_string());
            }
        }

        let mut request = reqwest::Client::new()
            .get(url.as_str())
            .header("Content-Type", "application/json")
            .timeout(self.timeout);
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?.error_for_status()?;
        let history: HistoryResponse = resp.json().await?;

        if let Some(code) = history.code.filter(|c| *c != 200) {
            bail!(
                "History service returned code {} for session {}: {}",
                code,
                req.session_id,
                history.msg.as_deref().unwrap_or("no message")
            );
        }

        tracing::debug!(
            "Fetched {} history rows for session {}",
            history.rows.len(),
            req.session_id
        );

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{UserInfo, UserSession};
    use mockito::Matcher;

    fn client(url: &str) -> HttpHistoryClient {
        let auth = UserSession::logged_in(
            "secret-token",
            UserInfo {
                user_id: 42,
                avatar: None,
            },
        );
        HttpHistoryClient::new(url, Duration::from_secs(5), Arc::new(auth))
    }

    #[tokio::test]
    async fn it_fetches_history_rows() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/chat/message/list")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sessionId".into(), "s-1".into()),
                Matcher::UrlEncoded("userId".into(), "42".into()),
            ]))
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "code": 200,
                    "msg": "ok",
                    "total": 2,
                    "rows": [
                        {"id": 1, "role": "user", "content": "hi"},
                        {"id": 2, "role": "assistant", "content": "<think>greet</think>hello"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let req = HistoryRequest {
            session_id: "s-1".to_string(),
            user_id: Some(42),
        };
        let resp = client(&server.url()).fetch_history(&req).await?;

        mock.assert_async().await;
        assert_eq!(resp.total, Some(2));
        assert_eq!(resp.rows.len(), 2);
        assert_eq!(resp.rows[0].id, "1");
        assert_eq!(resp.rows[1].role, "assistant");

        Ok(())
    }

    #[tokio::test]
    async fn it_treats_missing_rows_as_empty() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/chat/message/list")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": 200, "msg": "ok"}"#)
            .create_async()
            .await;

        let req = HistoryRequest {
            session_id: "s-1".to_string(),
            user_id: None,
        };
        let resp = client(&server.url()).fetch_history(&req).await?;
        assert!(resp.rows.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn it_errors_on_body_error_code() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/chat/message/list")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": 401, "msg": "token expired"}"#)
            .create_async()
            .await;

        let req = HistoryRequest {
            session_id: "s-1".to_string(),
            user_id: Some(42),
        };
        let err = client(&server.url())
            .fetch_history(&req)
            .await
            .expect_err("code 401 should fail the fetch");
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("token expired"));
    }

    #[tokio::test]
    async fn it_errors_on_server_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/chat/message/list")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let req = HistoryRequest {
            session_id: "s-1".to_string(),
            user_id: Some(42),
        };
        let result = client(&server.url()).fetch_history(&req).await;
        assert!(result.is_err());
    }
}
