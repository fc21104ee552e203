use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::infrastructure::credentials::GitHubToken;
use joke_errors::AppError;
use reqwest::StatusCode;
use std::time::Duration;

pub const GITHUB_MODELS_API_BASE: &str = "https://models.github.ai";
const INFERENCE_PATH: &str = "/inference/chat/completions";
const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct GitHubModelsClient {
    http_client: reqwest::Client,
    token: GitHubToken,
    api_base: String,
}

impl GitHubModelsClient {
    pub fn new(token: GitHubToken) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token,
            api_base: GITHUB_MODELS_API_BASE.to_string(),
        }
    }

    /// Point the client at another host serving the same API.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), INFERENCE_PATH)
    }

    /// Sends one chat completion and returns `choices[0].message.content`.
    /// Never retries.
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .timeout(REQUEST_TIMEOUT)
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token.expose()))
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let message = error_chain(&e);
                tracing::error!("GitHub Models request failed: {}", message);
                AppError::RequestFailed(message)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read response body: {}", error_chain(&e)));
            tracing::error!("GitHub Models error: {} - {}", status, body);
            return Err(AppError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            let message = error_chain(&e);
            tracing::error!("Failed to parse GitHub Models response: {}", message);
            AppError::RequestFailed(message)
        })?;

        completion
            .first_content()
            .ok_or_else(|| AppError::RequestFailed("response contained no choices".to_string()))
    }
}

/// Joins an error with all of its sources, e.g.
/// `error sending request for url (..): client error (Connect): tcp connect error: Connection refused`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelId;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GitHubModelsClient {
        GitHubModelsClient::new(GitHubToken::new("test-token")).with_api_base(server.uri())
    }

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::explain_joke(ModelId::default(), "I used to be a banker, but I lost interest.")
    }

    #[test]
    fn test_default_endpoint() {
        let client = GitHubModelsClient::new(GitHubToken::new("t"));
        assert_eq!(
            client.endpoint(),
            "https://models.github.ai/inference/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_sends_github_headers_and_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inference/chat/completions"))
            .and(header("Accept", "application/vnd.github+json"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "X"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = client_for(&server).complete(&request()).await.unwrap();
        assert_eq!(content, "X");
    }

    #[tokio::test]
    async fn test_non_200_returns_status_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::ApiError {
                status: 404,
                body: "not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_other_2xx_is_not_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "choices": [{"message": {"content": "X"}}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::ApiError { status: 201, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::RequestFailed("response contained no choices".to_string())
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_failure() {
        let client =
            GitHubModelsClient::new(GitHubToken::new("t")).with_api_base("http://127.0.0.1:1");

        match client.complete(&request()).await {
            Err(err @ AppError::RequestFailed(_)) => {
                let message = err.user_message().to_lowercase();
                assert!(message.contains("refused"), "missing cause in: {}", message);
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    /// Answers one request with a 502 whose body is cut short.
    async fn serve_truncated_error_body() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                let Some(end) = received.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let headers = String::from_utf8_lossy(&received[..end]).to_lowercase();
                let body_len = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if received.len() >= end + 4 + body_len {
                    break;
                }
            }
            socket
                .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_unreadable_error_body_reports_read_failure() {
        let base = serve_truncated_error_body().await;
        let client = GitHubModelsClient::new(GitHubToken::new("t")).with_api_base(base);

        match client.complete(&request()).await {
            Err(AppError::ApiError { status, body }) => {
                assert_eq!(status, 502);
                assert!(body.starts_with("failed to read response body: "), "got: {}", body);
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[derive(Debug)]
    struct Wrapped(std::io::Error);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("tcp connect error")
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Wrapped(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }
}
