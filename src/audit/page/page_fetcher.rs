use crate::audit::audit_error::AuditError;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct FetchedPage {
    url: String,
    html: String,
    load_time: Duration,
    content_type: Option<mime::Mime>,
}

impl FetchedPage {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn load_time(&self) -> Duration {
        self.load_time
    }

    pub fn content_type(&self) -> Option<&mime::Mime> {
        self.content_type.as_ref()
    }
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// One GET, no retries. Anything outside 2xx/3xx is an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, AuditError> {
        let started = Instant::now();

        let response = self.client.get(url).timeout(self.timeout).send().await?;
        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(AuditError::HttpError(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<mime::Mime>().ok());
        match content_type.as_ref().map(|m| (m.type_(), m.subtype())) {
            Some((mime::TEXT, mime::HTML)) | None => {}
            Some(_) => {
                warn!("Analyzing non-HTML content type {:?} at {}", content_type, url);
            }
        }

        let html = response.text().await?;
        let load_time = started.elapsed();
        debug!("Fetched {} ({} bytes) in {:?}", url, html.len(), load_time);

        Ok(FetchedPage {
            url: url.to_owned(),
            html,
            load_time,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher() -> PageFetcher {
        PageFetcher::new(Client::new(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn fetch_returns_markup_and_content_type() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><title>Hi</title></html>")
            .expect(1)
            .create_async()
            .await;

        let page = fetcher().fetch(&server.url()).await.unwrap();
        assert_eq!(page.html(), "<html><title>Hi</title></html>");
        assert_eq!(page.url(), server.url());
        assert_eq!(page.content_type().map(|m| m.essence_str()), Some("text/html"));

        m.assert_async().await;
    }

    #[tokio::test]
    async fn client_error_status_fails_the_fetch() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/missing", server.url());
        match fetcher().fetch(&url).await {
            Err(AuditError::HttpError(status)) => assert_eq!(status, 404),
            other => panic!("unexpected result: {:?}", other.map(|p| p.url().to_owned())),
        }
    }

    #[tokio::test]
    async fn unreachable_host_fails_the_fetch() {
        let result = fetcher().fetch("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(AuditError::ReqwestError(_))));
    }
}
