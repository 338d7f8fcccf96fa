//! Main analysis orchestration.
//!
//! Walks the target directory for stylesheet and markup files, runs the two
//! extraction pipelines in parallel, reconciles the resulting sets, and
//! prints the report.

use crate::cli::Args;
use crate::output::Formatter;
use camino::{Utf8Path, Utf8PathBuf};
use class_usage::{reconcile, AnalysisReport, ClassSet};
use globset::{Glob, GlobSet, GlobSetBuilder};
use jsx_extractor::MarkupKind;
use rayon::prelude::*;
use std::fs;
use std::time::Instant;
use thiserror::Error;
use walkdir::WalkDir;

/// Stylesheet files define classes.
const STYLESHEET_EXTENSIONS: &[&str] = &["scss"];
/// Markup files reference classes.
const MARKUP_EXTENSIONS: &[&str] = &["jsx", "tsx"];

/// Paths never worth scanning in a React project.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/node_modules/**", "**/dist/**", "**/build/**"];

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Directory traversal failed (missing root, unreadable entry).
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to read a collected file.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid glob pattern.
    #[error("invalid ignore pattern: {0}")]
    InvalidGlob(String),

    /// A stylesheet failed to compile.
    #[error("{path}: {source}")]
    Compile {
        path: Utf8PathBuf,
        #[source]
        source: scss_extractor::CompileError,
    },

    /// A markup file failed to parse.
    #[error("{path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: jsx_extractor::ParseError,
    },

    /// Watch error.
    #[error("watch error: {0}")]
    WatchFailed(String),
}

/// Runs the analysis described by the CLI arguments.
pub fn run(args: Args) -> Result<AnalysisReport, AnalyzeError> {
    let workspace = if args.directory.is_relative() {
        std::env::current_dir()
            .map(|p| Utf8PathBuf::try_from(p).unwrap_or_default())
            .unwrap_or_default()
            .join(&args.directory)
    } else {
        args.directory.clone()
    };

    if args.watch {
        run_watch_mode(&args, &workspace)
    } else {
        run_single_analysis(&args, &workspace)
    }
}

/// Runs one full analysis pass and prints the report.
fn run_single_analysis(args: &Args, workspace: &Utf8Path) -> Result<AnalysisReport, AnalyzeError> {
    let total_start = Instant::now();

    let ignore_set = build_ignore_set(&args.ignore)?;

    let scan_start = Instant::now();
    let scss_files = collect_files(workspace, STYLESHEET_EXTENSIONS, &ignore_set)?;
    let react_files = collect_files(workspace, MARKUP_EXTENSIONS, &ignore_set)?;
    let scan_time = scan_start.elapsed();

    let extract_start = Instant::now();
    let report = analyze(&scss_files, &react_files)?;
    let extract_time = extract_start.elapsed();

    let formatter = Formatter::new(args.output);
    println!("{}", formatter.format(&report));

    if args.timings {
        eprintln!("=== scss-usage-rs timings ===");
        eprintln!(
            "file scan: {:?} ({} scss, {} react)",
            scan_time,
            scss_files.len(),
            react_files.len()
        );
        eprintln!("extraction: {:?}", extract_time);
        eprintln!("total: {:?}", total_start.elapsed());
    }

    Ok(report)
}

/// Extracts both class sets and reconciles them into a report.
///
/// The two pipelines run concurrently and each processes its files in
/// parallel. Per-file results are folded in collection order, so the
/// failure surfaced to the caller does not depend on scheduling.
fn analyze(
    scss_files: &[Utf8PathBuf],
    react_files: &[Utf8PathBuf],
) -> Result<AnalysisReport, AnalyzeError> {
    let (defined, used) = rayon::join(
        || extract_defined(scss_files),
        || extract_used(react_files),
    );
    let defined = defined?;
    let used = used?;

    Ok(reconcile(&defined, &used, scss_files.len(), react_files.len()))
}

/// Unions the class selectors defined by every stylesheet.
fn extract_defined(files: &[Utf8PathBuf]) -> Result<ClassSet, AnalyzeError> {
    let per_file: Vec<Result<ClassSet, AnalyzeError>> = files
        .par_iter()
        .map(|path| {
            let source = read_source(path)?;
            scss_extractor::extract_classes(&source).map_err(|source| AnalyzeError::Compile {
                path: path.clone(),
                source,
            })
        })
        .collect();

    merge_sets(per_file)
}

/// Unions the class names referenced by every markup file.
fn extract_used(files: &[Utf8PathBuf]) -> Result<ClassSet, AnalyzeError> {
    let per_file: Vec<Result<ClassSet, AnalyzeError>> = files
        .par_iter()
        .map(|path| {
            let kind = markup_kind(path);
            let source = read_source(path)?;
            jsx_extractor::extract_class_names(&source, kind).map_err(|source| {
                AnalyzeError::Parse {
                    path: path.clone(),
                    source,
                }
            })
        })
        .collect();

    merge_sets(per_file)
}

/// Folds per-file sets in file order, surfacing the first failure.
fn merge_sets(per_file: Vec<Result<ClassSet, AnalyzeError>>) -> Result<ClassSet, AnalyzeError> {
    let mut merged = ClassSet::default();
    for result in per_file {
        merged.extend(result?);
    }
    Ok(merged)
}

fn markup_kind(path: &Utf8Path) -> MarkupKind {
    path.extension()
        .and_then(MarkupKind::from_extension)
        .unwrap_or(MarkupKind::Jsx)
}

fn read_source(path: &Utf8Path) -> Result<String, AnalyzeError> {
    fs::read_to_string(path).map_err(|source| AnalyzeError::ReadFailed {
        path: path.to_owned(),
        source,
    })
}

/// Builds the ignore set from user patterns plus the defaults.
fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, AnalyzeError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| AnalyzeError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }

    for pattern in DEFAULT_IGNORE_PATTERNS {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }

    builder
        .build()
        .map_err(|e| AnalyzeError::InvalidGlob(e.to_string()))
}

/// Walks `root` collecting files whose extension is in `extensions`.
///
/// Traversal failures propagate: a missing or unreadable root aborts the
/// analysis rather than being skipped.
fn collect_files(
    root: &Utf8Path,
    extensions: &[&str],
    ignore_set: &GlobSet,
) -> Result<Vec<Utf8PathBuf>, AnalyzeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(path) = Utf8PathBuf::try_from(entry.into_path()) else {
            continue;
        };
        if !extensions.iter().any(|ext| path.extension() == Some(*ext)) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if ignore_set.is_match(relative.as_str()) {
            continue;
        }
        files.push(path);
    }

    Ok(files)
}

fn is_watched_extension(extension: &str) -> bool {
    STYLESHEET_EXTENSIONS.contains(&extension) || MARKUP_EXTENSIONS.contains(&extension)
}

/// Runs in watch mode: analyze once, then re-run on every relevant change.
fn run_watch_mode(args: &Args, workspace: &Utf8Path) -> Result<AnalysisReport, AnalyzeError> {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::sync::mpsc;
    use std::time::Duration;

    println!("Starting watch mode...\n");

    let _report = run_single_analysis(args, workspace)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .map_err(|e| AnalyzeError::WatchFailed(e.to_string()))?;

    watcher
        .watch(workspace.as_std_path(), RecursiveMode::Recursive)
        .map_err(|e| AnalyzeError::WatchFailed(e.to_string()))?;

    println!("Watching for changes... (Ctrl+C to stop)\n");

    while let Ok(event) = rx.recv() {
        let relevant = event.paths.iter().any(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(is_watched_extension)
                .unwrap_or(false)
        });
        if !relevant {
            continue;
        }

        if !args.preserve_watch_output {
            // Clear screen and move cursor to top
            print!("\x1B[2J\x1B[1;1H");
        }
        println!("Change detected, re-analyzing...\n");

        // Keep watching through failed runs; a half-saved file should not
        // kill the session.
        if let Err(e) = run_single_analysis(args, workspace) {
            eprintln!("Error: {}", e);
        }
    }

    Err(AnalyzeError::WatchFailed(
        "watch channel closed unexpectedly".to_string(),
    ))
}
