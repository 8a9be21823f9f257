//! OpenAI Chat Completions judge adapter
//!
//! Implements the `AnswerJudge` port by sending one chat completion request
//! per assessment and parsing the model's JSON verdict.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::{FileJudgeConfig, JudgeConfigError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use trivia_application::{AnswerJudge, JudgeError, JudgeQuery};
use trivia_domain::core::string::preview;
use trivia_domain::{JudgePromptTemplate, JudgeVerdict, parse_judge_response};

/// Longest error body kept in a `JudgeError::Http`
const MAX_ERROR_BODY: usize = 200;

pub struct OpenAiJudge {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiJudge {
    /// Create a judge with an explicit key.
    ///
    /// The HTTP client is built with the configured timeout so the request
    /// is abandoned at the transport level too.
    pub fn new(api_key: impl Into<String>, config: &FileJudgeConfig) -> Result<Self, JudgeError> {
        let client = Self::client_builder(config)
            .build()
            .map_err(|e| JudgeError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, api_key, config))
    }

    /// Create a judge around an existing HTTP client
    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        config: &FileJudgeConfig,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: format!(
                "{}/v1/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// HTTP client settings derived from the judge configuration
    pub fn client_builder(config: &FileJudgeConfig) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout().min(Duration::from_secs(10)))
    }

    /// Build a judge from configuration.
    ///
    /// Returns `Ok(None)` when no credential is available: the caller then
    /// runs the verifier in exact-match mode.
    pub fn from_config(config: &FileJudgeConfig) -> Result<Option<Self>, JudgeConfigError> {
        let Some(api_key) = config.resolve_api_key()? else {
            info!("No API key configured, AI judge unavailable");
            return Ok(None);
        };

        match Self::new(api_key, config) {
            Ok(judge) => {
                info!(model = %judge.model, endpoint = %judge.endpoint, "AI judge initialized");
                Ok(Some(judge))
            }
            Err(e) => {
                warn!("AI judge not available: {}", e);
                Ok(None)
            }
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_completion(&self, prompt: &str) -> Result<String, JudgeError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(JudgePromptTemplate::judge_system()),
                ChatMessage::user(prompt),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!("Making judge request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!("Judge response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JudgeError::Http {
                status: status.as_u16(),
                body: preview(&body, MAX_ERROR_BODY),
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(map_transport_error)?;

        completion
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| JudgeError::MalformedResponse("response has no message content".to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> JudgeError {
    if e.is_timeout() {
        JudgeError::Timeout
    } else if e.is_connect() {
        JudgeError::Connection(e.to_string())
    } else if e.is_decode() {
        JudgeError::MalformedResponse(e.to_string())
    } else {
        JudgeError::Other(e.to_string())
    }
}

#[async_trait]
impl AnswerJudge for OpenAiJudge {
    async fn assess(&self, query: &JudgeQuery<'_>) -> Result<JudgeVerdict, JudgeError> {
        let prompt = JudgePromptTemplate::judge_query(
            query.prompt_text,
            query.expected_answer,
            query.user_answer,
            query.category,
        );
        debug!("Judge prompt: {}", prompt);

        let content = self.request_completion(&prompt).await?;
        debug!("Judge response content: {}", content);

        Ok(parse_judge_response(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use trivia_application::{VerifierParams, VerifyAnswerInput, VerifyAnswerUseCase};
    use trivia_domain::{JudgedBy, Question};

    use crate::catalog::InMemoryQuestionCatalog;

    /// Serve exactly one HTTP request with a canned response, handing the
    /// raw request text back to the test.
    async fn serve_once(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(request);
        });

        (base_url, rx)
    }

    /// Read headers, then as many body bytes as Content-Length announces
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Accept connections and never answer them
    async fn stalled_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        base_url
    }

    /// Address nothing is listening on
    async fn closed_port() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    fn judge_for(base_url: &str, timeout_secs: f64) -> OpenAiJudge {
        let config = FileJudgeConfig {
            base_url: base_url.to_string(),
            timeout_secs,
            ..Default::default()
        };
        // Local test servers must not be routed through an ambient proxy.
        let client = OpenAiJudge::client_builder(&config)
            .no_proxy()
            .build()
            .unwrap();
        OpenAiJudge::with_client(client, "sk-test", &config)
    }

    fn copernicus() -> Question {
        Question::new(4680, "He put the Sun at the center", "Copernicus").with_category("ASTRONOMERS")
    }

    #[test]
    fn test_endpoint_from_base_url() {
        let config = FileJudgeConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let judge = OpenAiJudge::new("sk-test", &config).unwrap();
        assert_eq!(judge.endpoint(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(judge.model(), "gpt-4");
    }

    #[test]
    fn test_from_config_without_key_is_none() {
        let config = FileJudgeConfig {
            api_key_env: String::new(),
            ..Default::default()
        };
        assert!(OpenAiJudge::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_from_config_with_key() {
        let config = FileJudgeConfig {
            api_key: Some("sk-direct".to_string()),
            ..Default::default()
        };
        assert!(OpenAiJudge::from_config(&config).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_assess_success() {
        let (base_url, request_rx) = serve_once(
            "200 OK",
            completion_body(r#"{"is_correct": true, "explanation": "Nicolaus Copernicus is the same person."}"#),
        )
        .await;
        let judge = judge_for(&base_url, 5.0);
        let question = copernicus();

        let verdict = judge
            .assess(&JudgeQuery::for_question(&question, "Nicolaus Copernicus"))
            .await
            .unwrap();
        assert!(verdict.verdict);
        assert_eq!(verdict.remark, "Nicolaus Copernicus is the same person.");

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains("\"model\":\"gpt-4\""));
        assert!(request.contains("Nicolaus Copernicus"));
        assert!(request.contains("ASTRONOMERS"));
    }

    #[tokio::test]
    async fn test_assess_http_error() {
        let (base_url, _rx) = serve_once(
            "500 Internal Server Error",
            r#"{"error": {"message": "overloaded"}}"#.to_string(),
        )
        .await;
        let judge = judge_for(&base_url, 5.0);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Copernicus"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_assess_malformed_payload() {
        let (base_url, _rx) = serve_once("200 OK", "not json at all".to_string()).await;
        let judge = judge_for(&base_url, 5.0);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Copernicus"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_assess_no_choices() {
        let (base_url, _rx) = serve_once("200 OK", r#"{"choices": []}"#.to_string()).await;
        let judge = judge_for(&base_url, 5.0);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Copernicus"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_assess_ambiguous_content() {
        let (base_url, _rx) = serve_once(
            "200 OK",
            completion_body(r#"{"is_correct": "partially", "explanation": "close"}"#),
        )
        .await;
        let judge = judge_for(&base_url, 5.0);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Kopernik"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::AmbiguousVerdict(_)));
    }

    #[tokio::test]
    async fn test_assess_connection_refused() {
        let judge = judge_for(&closed_port().await, 5.0);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Copernicus"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::Connection(_)));
    }

    #[tokio::test]
    async fn test_assess_timeout() {
        let judge = judge_for(&stalled_server().await, 0.2);
        let question = copernicus();

        let err = judge
            .assess(&JudgeQuery::for_question(&question, "Copernicus"))
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::Timeout));
    }

    // ==================== Through the verifier ====================

    fn verifier(judge: OpenAiJudge) -> VerifyAnswerUseCase<InMemoryQuestionCatalog> {
        let catalog = InMemoryQuestionCatalog::new(vec![copernicus()]).unwrap();
        VerifyAnswerUseCase::new(Arc::new(catalog), Some(Arc::new(judge)))
            .with_params(VerifierParams::default().with_judge_timeout(Duration::from_secs(5)))
    }

    #[tokio::test]
    async fn test_verifier_uses_judge_verdict() {
        let (base_url, _rx) = serve_once(
            "200 OK",
            completion_body(r#"{"is_correct": false, "explanation": "Galileo is a different astronomer."}"#),
        )
        .await;

        let result = verifier(judge_for(&base_url, 5.0))
            .execute(VerifyAnswerInput::new(4680, "Galileo"))
            .await
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.judged_by, JudgedBy::Ai);
        assert_eq!(
            result.judge_remark.as_deref(),
            Some("Galileo is a different astronomer.")
        );
    }

    #[tokio::test]
    async fn test_verifier_falls_back_when_connection_refused() {
        let result = verifier(judge_for(&closed_port().await, 5.0))
            .execute(VerifyAnswerInput::new(4680, "copernicus  "))
            .await
            .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.judged_by, JudgedBy::ExactMatch);
    }

    #[tokio::test]
    async fn test_verifier_falls_back_on_stalled_judge() {
        let result = verifier(judge_for(&stalled_server().await, 0.2))
            .execute(VerifyAnswerInput::new(4680, "Galileo"))
            .await
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.judged_by, JudgedBy::ExactMatch);
    }

    #[tokio::test]
    async fn test_verifier_falls_back_on_malformed_payload() {
        let (base_url, _rx) = serve_once("200 OK", completion_body("I think so, yes.")).await;

        let result = verifier(judge_for(&base_url, 5.0))
            .execute(VerifyAnswerInput::new(4680, "Copernicus"))
            .await
            .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.judged_by, JudgedBy::ExactMatch);
        assert!(result.judge_remark.is_none());
    }
}
