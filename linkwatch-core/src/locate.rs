use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File-name infix marking generated interface documents; never audited.
const RESERVED_INFIX: &str = "icd";

/// Vendored dependency tree; never traversed.
const VENDOR_DIR: &str = "node_modules";

/// Enumerate the markdown documents under `root`, returned relative to `root`
/// in sorted order. Exclusions: any file whose name contains the reserved
/// infix, and everything under the vendor directory.
pub fn discover(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != VENDOR_DIR);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(RESERVED_INFIX) {
            debug!("Skipping reserved document {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        documents.push(relative.to_path_buf());
    }

    documents.sort();
    Ok(documents)
}
