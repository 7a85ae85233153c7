use crate::allowlist::AllowList;
use crate::model::DeadLink;
use futures::stream::{self, StreamExt};
use linkwatch_scanner::checker::LinkChecker;
use linkwatch_scanner::error::{Result as ScanResult, ScanError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Default cap on documents scanned concurrently. Bounds outbound connection
/// fan-out against the probed hosts, not filesystem parallelism.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Callback fired once per completed document scan.
pub type ScanProgressCallback = Arc<dyn Fn(&Path) + Send + Sync>;

/// Scans a single document: read, probe every link, keep the dead ones, tag
/// each with its allow-list membership.
pub struct FileScanner {
    checker: LinkChecker,
    allowlist: Arc<AllowList>,
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl Into<PathBuf>, allowlist: Arc<AllowList>) -> ScanResult<Self> {
        // Base URLs for relative-link resolution need an absolute root.
        let root = std::fs::canonicalize(root.into())?;

        Ok(Self {
            checker: LinkChecker::new()?,
            allowlist,
            root,
        })
    }

    pub fn with_checker(mut self, checker: LinkChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Scan one document, given relative to the scan root.
    ///
    /// Never fails: a read or probe error is logged and yields an empty
    /// contribution, so one bad document cannot abort the run or disturb the
    /// other documents' scans.
    pub async fn scan(&self, document: &Path) -> Vec<DeadLink> {
        match self.scan_inner(document).await {
            Ok(dead) => dead,
            Err(e) => {
                warn!("Scan error for {}: {}", document.display(), e);
                Vec::new()
            }
        }
    }

    async fn scan_inner(&self, document: &Path) -> Result<Vec<DeadLink>, ScanError> {
        let absolute = self.root.join(document);
        let parent = absolute.parent().ok_or_else(|| {
            ScanError::InvalidUrl(format!("{} has no parent directory", absolute.display()))
        })?;
        let base_url = Url::from_directory_path(parent).map_err(|()| {
            ScanError::InvalidUrl(format!("{} is not an absolute directory", parent.display()))
        })?;

        let content = tokio::fs::read_to_string(&absolute).await?;
        let records = self.checker.check(&content, &base_url).await?;

        let dead: Vec<DeadLink> = records
            .into_iter()
            .filter(|record| record.is_dead())
            .map(|record| {
                let whitelisted = self.allowlist.contains(&record.link);
                DeadLink::new(document.to_path_buf(), record.link, whitelisted)
            })
            .collect();

        debug!("{}: {} dead links", document.display(), dead.len());
        Ok(dead)
    }
}

/// Run the scanner over every document with at most `limit` scans in flight.
///
/// Queued scans start as slots free; the call returns only once every document
/// has resolved, so a dead link found early never short-circuits the rest of
/// the set. Completion order is unspecified and the flattened output order
/// carries no meaning; only the set of records matters downstream.
pub async fn scan_documents(
    scanner: &FileScanner,
    documents: &[PathBuf],
    limit: usize,
    progress: Option<ScanProgressCallback>,
) -> Vec<DeadLink> {
    let limit = limit.max(1);
    info!(
        "Scanning {} documents with at most {} in flight",
        documents.len(),
        limit
    );

    stream::iter(documents)
        .map(|document| {
            let progress = progress.clone();
            async move {
                let dead = scanner.scan(document).await;
                if let Some(ref callback) = progress {
                    callback(document);
                }
                dead
            }
        })
        .buffer_unordered(limit)
        .concat()
        .await
}
