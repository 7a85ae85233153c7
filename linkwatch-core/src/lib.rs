pub mod allowlist;
pub mod classify;
pub mod locate;
pub mod model;
pub mod report;
pub mod scan;

pub use allowlist::{AllowList, ConfigError};
pub use classify::classify;
pub use model::{DeadLink, RunOutcome};
pub use report::{ExitSignal, Reporter, ReporterKind};
pub use scan::{DEFAULT_CONCURRENCY, FileScanner, scan_documents};
