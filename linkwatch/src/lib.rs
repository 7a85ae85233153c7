// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{changed_documents, load_allowlist, markdown_paths};

// Re-export the pipeline pieces from linkwatch-core
pub use linkwatch_core::{
    AllowList, DeadLink, ExitSignal, Reporter, ReporterKind, RunOutcome, classify,
    scan_documents,
};
