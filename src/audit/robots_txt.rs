use crate::audit::audit_error::AuditError;
use reqwest::{Client, StatusCode};
use robots_txt::Robots;
use robots_txt::matcher::SimpleMatcher;
use std::time::Duration;

#[derive(Clone)]
pub struct RobotsTxtSource {
    content: String,
    agent: String,
}

impl RobotsTxtSource {
    pub fn new(content: String, agent: &str) -> Self {
        Self {
            content,
            agent: agent.to_owned(),
        }
    }

    /// A missing robots.txt allows everything; any other failure is an error.
    pub async fn load(
        client: &Client,
        robots_txt_url: &str,
        agent: &str,
        timeout: Duration,
    ) -> Result<Self, AuditError> {
        let robots_response = client.get(robots_txt_url).timeout(timeout).send().await?;
        if !robots_response.status().is_success() {
            if robots_response.status() == StatusCode::NOT_FOUND {
                return Ok(Self::new(String::new(), agent));
            }
            return Err(AuditError::HttpError(robots_response.status().as_u16()));
        }
        let content = robots_response.text().await?;
        Ok(Self::new(content, agent))
    }

    /// Checks `path` against the section chosen for our agent, falling back
    /// to the `*` section.
    pub fn allows(&self, path: &str) -> bool {
        let robots = Robots::from_str_lossy(self.content.as_str());
        let section = robots.choose_section(self.agent.as_str());
        SimpleMatcher::new(&section.rules).check_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const ROBOTS: &str = "User-agent: *\nDisallow: /private/\n\nUser-agent: rusty-seo\nDisallow: /drafts/\n";

    #[test]
    fn matches_the_agent_section() {
        let source = RobotsTxtSource::new(ROBOTS.to_string(), "rusty-seo");
        assert!(source.allows("/blog/post"));
        assert!(!source.allows("/drafts/new"));

        let other = RobotsTxtSource::new(ROBOTS.to_string(), "somebot");
        assert!(!other.allows("/private/area"));
    }

    #[tokio::test]
    async fn missing_robots_txt_allows_everything() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/robots.txt")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/robots.txt", server.url());
        let source = RobotsTxtSource::load(&Client::new(), &url, "rusty-seo", Duration::from_secs(5))
            .await
            .unwrap();
        assert!(source.allows("/anything"));
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/robots.txt")
            .with_status(503)
            .create_async()
            .await;

        let url = format!("{}/robots.txt", server.url());
        let result =
            RobotsTxtSource::load(&Client::new(), &url, "rusty-seo", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(AuditError::HttpError(503))));
    }
}
