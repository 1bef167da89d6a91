//! HTTP client for posting bookings to the form collector
//!
//! Sends the payload as `application/x-www-form-urlencoded`, which is what
//! hosted form backends accept on their response endpoint.

use super::payload::FormPayload;
use super::traits::CollectorTransport;
use crate::error::SubmissionError;
use async_trait::async_trait;
use url::Url;

/// Collector reached over HTTP
pub struct HttpCollector {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpCollector {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl CollectorTransport for HttpCollector {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmissionError> {
        if payload.is_empty() {
            tracing::warn!("Posting a booking with no mapped fields to {}", self.endpoint);
        }
        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&payload.pairs)
            .send()
            .await?;

        // A readable status is available here, so a rejection is not
        // reported as success.
        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("http collector at {}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with the given status line, returning the raw request
    async fn one_shot_server(status_line: &'static str) -> (Url, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = String::new();
            // Read until the body (after the blank line) has arrived
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.push_str(&String::from_utf8_lossy(&buf[..n]));
                if let Some((head, body)) = request.split_once("\r\n\r\n") {
                    let len = head
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if body.len() >= len {
                        break;
                    }
                }
            }
            let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            request
        });
        let url = Url::parse(&format!("http://{addr}/formResponse")).unwrap();
        (url, handle)
    }

    fn payload() -> FormPayload {
        FormPayload {
            pairs: vec![
                ("entry.1".to_string(), "Asha Rao".to_string()),
                ("entry.2".to_string(), "9876543210".to_string()),
            ],
        }
    }

    #[tokio::test]
    async fn test_posts_form_encoded_body() {
        let (url, server) = one_shot_server("HTTP/1.1 200 OK").await;
        let collector = HttpCollector::new(url);

        collector.submit(payload()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /formResponse"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.contains("entry.1=Asha+Rao&entry.2=9876543210"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error").await;
        let collector = HttpCollector::new(url);

        let err = collector.submit(payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let collector = HttpCollector::new(Url::parse(&format!("http://{addr}/")).unwrap());
        let err = collector.submit(payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[test]
    fn test_describe_mentions_endpoint() {
        let collector = HttpCollector::new(Url::parse("https://forms.example/submit").unwrap());
        assert!(collector.describe().contains("forms.example"));
    }
}
