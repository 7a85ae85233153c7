use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use linkwatch_core::allowlist::{AllowList, ConfigError};
use linkwatch_core::report::ReporterKind;
use linkwatch_core::scan::{FileScanner, ScanProgressCallback, scan_documents};
use linkwatch_core::{classify, locate};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Run the scan subcommand end to end; returns the process exit code.
///
/// 0 = clean, 1 = dead links outside the allow-list, 2 = the run could not be
/// set up (bad allow-list, unreadable root, missing git ref).
pub async fn handle_scan(args: &ArgMatches) -> i32 {
    // Initialize tracing for logging. Logs go to stderr: stdout belongs to
    // the reporter, and the TeamCity stream must carry service messages only.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run_scan(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            2
        }
    }
}

async fn run_scan(args: &ArgMatches) -> Result<i32> {
    let root = args.get_one::<PathBuf>("root").expect("root has a default");
    let concurrency = *args
        .get_one::<usize>("concurrency")
        .expect("concurrency has a default");
    let reporter_name = args
        .get_one::<String>("reporter")
        .expect("reporter has a default");

    let kind = ReporterKind::from_str(reporter_name)
        .with_context(|| format!("Unknown reporter '{}'", reporter_name))?;

    let allowlist = load_allowlist(args.get_one::<String>("allowlist").map(String::as_str))?;

    let documents = match args.get_one::<String>("changed-since") {
        Some(base) => changed_documents(root, base)?,
        None => locate::discover(root)
            .with_context(|| format!("Failed to enumerate documents under {}", root.display()))?,
    };
    info!("Located {} documents under {}", documents.len(), root.display());

    let scanner = FileScanner::new(root, Arc::new(allowlist))
        .with_context(|| format!("Failed to set up the scanner for {}", root.display()))?;

    // Spinner on stderr in console mode only; the TeamCity stream must stay
    // free of anything but service messages.
    let (progress, spinner) = scan_progress(kind, documents.len());

    let records = scan_documents(&scanner, &documents, concurrency, progress).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcome = classify(records);
    let reporter = kind.build();
    Ok(reporter.report(&outcome).code())
}

fn scan_progress(
    kind: ReporterKind,
    total: usize,
) -> (Option<ScanProgressCallback>, Option<ProgressBar>) {
    if kind != ReporterKind::Console {
        return (None, None);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Scanning 0/{} documents", total));

    let completed = Arc::new(AtomicUsize::new(0));
    let pb_clone = pb.clone();
    let callback: ScanProgressCallback = Arc::new(move |_document: &Path| {
        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        pb_clone.set_message(format!("Scanning {}/{} documents", done, total));
    });

    (Some(callback), Some(pb))
}

/// Resolve the optional allow-list argument: tilde-expand and load when given,
/// fall open to the empty list when not.
pub fn load_allowlist(path: Option<&str>) -> Result<AllowList, ConfigError> {
    match path {
        Some(raw) => {
            let expanded = shellexpand::tilde(raw);
            AllowList::load(Path::new(expanded.as_ref()))
        }
        None => Ok(AllowList::empty()),
    }
}

/// Change-scoped discovery: markdown files that differ from `base` according
/// to git, instead of the full tree.
pub fn changed_documents(root: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let output = Command::new("git")
        .args(["diff", "--name-only", base])
        .current_dir(root)
        .output()
        .context("Failed to run git diff")?;

    if !output.status.success() {
        bail!(
            "git diff --name-only {} failed: {}",
            base,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(markdown_paths(&String::from_utf8_lossy(&output.stdout)))
}

/// One path per line from `git diff --name-only`; keep only markdown files.
pub fn markdown_paths(diff_output: &str) -> Vec<PathBuf> {
    diff_output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.ends_with(".md"))
        .map(PathBuf::from)
        .collect()
}
