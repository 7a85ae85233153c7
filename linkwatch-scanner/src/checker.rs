use crate::error::Result;
use crate::extract;
use crate::result::{LinkRecord, LinkStatus};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Per-document cap on simultaneous link probes. Fan-out across documents is
/// bounded separately by the scheduler.
const DEFAULT_PROBE_CONCURRENCY: usize = 8;

/// Reachability checker for the links of one document.
///
/// Every extracted destination is resolved against the document's base URL:
/// `file:` resolutions (relative links in a local document) probe the
/// filesystem, `http(s)` resolutions get a HEAD request through a shared
/// client. A destination that cannot be resolved, or whose probe fails in any
/// way, is Dead; per-link failures never abort the check.
pub struct LinkChecker {
    client: Client,
    concurrency: usize,
}

impl LinkChecker {
    pub fn new() -> Result<Self> {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent("linkwatch/0.1 (https://github.com/trapdoorsec/linkwatch)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            concurrency: DEFAULT_PROBE_CONCURRENCY,
        })
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Check every link in `content`, resolving relative destinations against
    /// `base_url`. Returns one record per extracted link; completion order is
    /// unspecified.
    pub async fn check(&self, content: &str, base_url: &Url) -> Result<Vec<LinkRecord>> {
        let links = extract::extract_links(content);
        debug!("Checking {} links against base {}", links.len(), base_url);

        let records = stream::iter(links)
            .map(|raw| self.check_one(base_url, raw))
            .buffer_unordered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        Ok(records)
    }

    async fn check_one(&self, base_url: &Url, raw: String) -> LinkRecord {
        let status = match base_url.join(&raw) {
            Ok(resolved) => self.probe(resolved).await,
            Err(e) => {
                debug!("Unresolvable link {}: {}", raw, e);
                LinkStatus::Dead
            }
        };

        LinkRecord::new(raw, status)
    }

    async fn probe(&self, target: Url) -> LinkStatus {
        match target.scheme() {
            "file" => match target.to_file_path() {
                Ok(path) => {
                    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                        LinkStatus::Alive
                    } else {
                        LinkStatus::Dead
                    }
                }
                Err(()) => LinkStatus::Dead,
            },
            "http" | "https" => match self.client.head(target.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!("Probed {} -> {}", target, status);
                    if status.is_success() || status.is_redirection() {
                        LinkStatus::Alive
                    } else {
                        LinkStatus::Dead
                    }
                }
                Err(e) => {
                    debug!("Probe failed for {}: {}", target, e);
                    LinkStatus::Dead
                }
            },
            _ => LinkStatus::Dead,
        }
    }
}
