use futures::StreamExt;
use futures::future::ready;
use futures::stream;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

enum LinkTarget {
    Http(Url),
    Unresolvable(String),
}

/// HEADs every link of a page and counts the ones that fail.
#[derive(Clone)]
pub struct LinkChecker {
    client: Client,
    timeout: Duration,
    concurrency: usize,
}

impl LinkChecker {
    pub fn new(client: Client, timeout: Duration, concurrency: usize) -> Self {
        Self {
            client,
            timeout,
            concurrency: concurrency.max(1),
        }
    }

    /// A link is broken when the HEAD answers 400 or above, when the request
    /// fails, or when the href cannot be requested over HTTP at all
    /// (`mailto:`, `tel:`, `javascript:` and unparsable hrefs).
    pub async fn count_broken(&self, page_url: &str, hrefs: &[String]) -> usize {
        let base = Url::parse(page_url).ok();
        let targets: Vec<LinkTarget> = hrefs
            .iter()
            .map(|href| resolve(base.as_ref(), href))
            .collect();

        stream::iter(targets)
            .map(|target| async move {
                match target {
                    LinkTarget::Http(url) => self.is_broken(url).await,
                    LinkTarget::Unresolvable(href) => {
                        debug!("Unresolvable link {:?} on {}", href, page_url);
                        true
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .filter(|broken| ready(*broken))
            .count()
            .await
    }

    async fn is_broken(&self, url: Url) -> bool {
        match self.client.head(url.clone()).timeout(self.timeout).send().await {
            Ok(response) => response.status().as_u16() >= 400,
            Err(e) => {
                debug!("Link check failed for {}: {}", url, e);
                true
            }
        }
    }
}

fn resolve(base: Option<&Url>, href: &str) -> LinkTarget {
    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };
    match resolved {
        Ok(url) if matches!(url.scheme(), "http" | "https") => LinkTarget::Http(url),
        _ => LinkTarget::Unresolvable(href.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn counts_error_statuses_and_failures() {
        let mut server = Server::new_async().await;
        server.mock("HEAD", "/ok").with_status(200).create_async().await;
        server.mock("HEAD", "/gone").with_status(404).create_async().await;
        server.mock("HEAD", "/boom").with_status(500).create_async().await;

        let hrefs = vec![
            "/ok".to_string(),
            "/gone".to_string(),
            format!("{}/boom", server.url()),
            "mailto:someone@example.com".to_string(),
            "tel:+100".to_string(),
            "http://127.0.0.1:9/unreachable".to_string(),
        ];
        let checker = LinkChecker::new(Client::new(), Duration::from_secs(5), 4);
        let broken = checker.count_broken(&server.url(), &hrefs).await;
        assert_eq!(broken, 5);
    }

    #[tokio::test]
    async fn no_links_means_nothing_broken() {
        let checker = LinkChecker::new(Client::new(), Duration::from_secs(5), 4);
        assert_eq!(checker.count_broken("https://example.com", &[]).await, 0);
    }

    #[tokio::test]
    async fn non_http_links_count_as_broken() {
        let hrefs = vec![
            "mailto:a@b.c".to_string(),
            "javascript:void(0)".to_string(),
            "tel:+1".to_string(),
        ];
        let checker = LinkChecker::new(Client::new(), Duration::from_secs(5), 4);
        assert_eq!(checker.count_broken("https://example.com", &hrefs).await, 3);
    }

    #[test]
    fn relative_links_need_a_base() {
        assert!(matches!(resolve(None, "/about"), LinkTarget::Unresolvable(_)));
        let base = Url::parse("https://example.com/blog/").unwrap();
        assert!(matches!(
            resolve(Some(&base), "post"),
            LinkTarget::Http(url) if url.as_str() == "https://example.com/blog/post"
        ));
    }
}
