pub mod checker;
pub mod error;
pub mod extract;
pub mod result;

pub use checker::LinkChecker;
pub use error::ScanError;
pub use result::{LinkRecord, LinkStatus};
