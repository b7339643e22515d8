use std::time::Duration;

use reqwest::Url;
use vashantor_config::source::SourceConfig;

use crate::{DatasetSource, SourceError};

/// Fetches dialect files over HTTP
#[derive(Clone)]
pub struct HttpSource {
    base_url: Url,
    file_suffix: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(&config.base).map_err(|e| SourceError::InvalidUrl {
            url: config.base.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl {
                url: config.base.clone(),
                reason: "cannot be a base".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url,
            file_suffix: config.file_suffix.clone(),
            client: builder.build()?,
        })
    }

    /// Base URL with the file name appended as one encoded segment
    pub fn url(&self, dialect: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&format!("{dialect}{}", self.file_suffix));
        }
        url
    }
}

#[async_trait::async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, dialect: &str) -> Result<String, SourceError> {
        let url = self.url(dialect);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn location(&self, dialect: &str) -> String {
        self.url(dialect).to_string()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    fn config(base: &str) -> SourceConfig {
        SourceConfig {
            base: base.to_string(),
            ..SourceConfig::default()
        }
    }

    /// Answers a single request with `status` and `body`, yields the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/Test"), handle)
    }

    #[test]
    fn url_without_trailing_slash() {
        let source = HttpSource::new(&config("http://localhost:8000/Test")).unwrap();
        assert_eq!(
            source.url("Chittagong").as_str(),
            "http://localhost:8000/Test/Chittagong%20Test%20Translation.csv"
        );
    }

    #[test]
    fn url_with_trailing_slash() {
        let source = HttpSource::new(&config("http://localhost:8000/Test/")).unwrap();
        assert_eq!(
            source.url("Mymensingh").as_str(),
            "http://localhost:8000/Test/Mymensingh%20Test%20Translation.csv"
        );
    }

    #[test]
    fn rejects_garbage_base() {
        assert!(matches!(
            HttpSource::new(&config("http://")),
            Err(SourceError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let (base, server) = serve_once("404 Not Found", "missing").await;
        let source = HttpSource::new(&config(&base)).unwrap();

        let err = source.fetch("Sylhet").await.unwrap_err();
        assert!(matches!(err, SourceError::Status(404)), "got {err:?}");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /Test/Sylhet%20Test%20Translation.csv HTTP/1.1"));
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let (base, server) = serve_once("200 OK", "h\na,b,c\n").await;
        let source = HttpSource::new(&config(&base)).unwrap();

        let text = source.fetch("Noakhali").await.unwrap();
        assert_eq!(text, "h\na,b,c\n");
        server.await.unwrap();
    }
}
