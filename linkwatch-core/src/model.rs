use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One unreachable link found during the scan.
///
/// `whitelisted` is computed once, at record creation, against the allow-list
/// loaded at startup. Classification later only reads this flag; it never
/// re-queries the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadLink {
    /// Path of the source document, relative to the scan root.
    pub file: PathBuf,
    /// Destination text exactly as written in the document.
    pub link: String,
    pub whitelisted: bool,
}

impl DeadLink {
    pub fn new(file: PathBuf, link: String, whitelisted: bool) -> Self {
        Self {
            file,
            link,
            whitelisted,
        }
    }
}

/// The classified result of a full run, consumed exactly once by a reporter.
///
/// Both sequences preserve the relative order of the classifier's input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    pub whitelisted: Vec<DeadLink>,
    pub flagged: Vec<DeadLink>,
}

impl RunOutcome {
    /// A run is clean when nothing blocks the build; whitelisted dead links
    /// are informational only.
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    pub fn total(&self) -> usize {
        self.whitelisted.len() + self.flagged.len()
    }
}
