//! Audit orchestration
//!
//! Coordinates two nested levels of bounded fan-out: an outer pool over
//! project paths and an independent per-project pool over discovered
//! files. The file-level bound applies per project, so total file-level
//! concurrency may reach max_projects * max_files. Workers append
//! records to an unbounded channel drained once all pools finish; no
//! other mutable state is shared.

use crate::audit::record::{build_record, AuditRecord};
use crate::cancel::CancellationToken;
use crate::config::AuditRequest;
use crate::discovery::{self, FileFilter};
use crate::error::{DisguiseToolError, Result};
use crate::probe::{FfprobeProber, MediaProber};
use crossbeam_channel::{unbounded, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Audit run summary
#[derive(Debug)]
pub struct AuditOutcome {
    /// One record per file that passed filtering and was successfully
    /// read. Order between records is unspecified.
    pub records: Vec<AuditRecord>,
    /// True when the run was cancelled; records reflect only the work
    /// completed before cancellation.
    pub cancelled: bool,
    pub files_audited: usize,
    pub files_failed: usize,
    pub projects_skipped: usize,
}

/// Shared run counters
#[derive(Default)]
struct RunCounters {
    audited: AtomicUsize,
    failed: AtomicUsize,
    projects_skipped: AtomicUsize,
}

/// Run the audit described by the request.
///
/// Builds the ffprobe prober when media info was requested; use
/// [`run_with_prober`] to substitute a different backend.
pub fn run(request: &AuditRequest, cancel: &CancellationToken) -> Result<AuditOutcome> {
    let prober: Option<Arc<dyn MediaProber>> = if request.media_info {
        Some(Arc::new(FfprobeProber::new(request.ffprobe_path.clone())))
    } else {
        None
    };
    run_with_prober(request, prober, cancel)
}

/// Run the audit with an explicit media prober backend.
pub fn run_with_prober(
    request: &AuditRequest,
    prober: Option<Arc<dyn MediaProber>>,
    cancel: &CancellationToken,
) -> Result<AuditOutcome> {
    // Fatal validation happens before any I/O
    request.validate()?;

    if let Some(prober) = &prober {
        info!("Media probing enabled using {}", prober.name());
    }

    let outer_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(request.max_projects.min(request.projects.len()))
        .build()
        .map_err(|e| {
            DisguiseToolError::Config(format!("failed to build project worker pool: {e}"))
        })?;

    let progress_bar = if request.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Some(pb)
    } else {
        None
    };

    let counters = RunCounters::default();
    let (record_tx, record_rx) = unbounded::<AuditRecord>();
    let prober_ref = prober.as_deref();

    outer_pool.install(|| {
        request.projects.par_iter().for_each(|project| {
            if cancel.is_cancelled() {
                return;
            }
            if let Err(e) = audit_project(
                project,
                request,
                prober_ref,
                cancel,
                &record_tx,
                &counters,
                progress_bar.as_ref(),
            ) {
                warn!("Skipping project {}: {}", project.display(), e);
                counters.projects_skipped.fetch_add(1, Ordering::Relaxed);
            }
        });
    });

    // All sends happened on the pool threads above; dropping our sender
    // lets the drain below terminate.
    drop(record_tx);
    let records: Vec<AuditRecord> = record_rx.into_iter().collect();

    let cancelled = cancel.is_cancelled();
    if let Some(pb) = progress_bar {
        pb.finish_with_message(if cancelled {
            "Audit cancelled"
        } else {
            "Audit complete"
        });
    }

    let outcome = AuditOutcome {
        records,
        cancelled,
        files_audited: counters.audited.load(Ordering::Relaxed),
        files_failed: counters.failed.load(Ordering::Relaxed),
        projects_skipped: counters.projects_skipped.load(Ordering::Relaxed),
    };

    info!(
        "Audited {} files ({} failed, {} projects skipped)",
        outcome.files_audited, outcome.files_failed, outcome.projects_skipped
    );

    Ok(outcome)
}

/// Audit one project: resolve its scan root and fan out over its files
/// on a pool of its own.
#[allow(clippy::too_many_arguments)]
fn audit_project(
    project: &Path,
    request: &AuditRequest,
    prober: Option<&dyn MediaProber>,
    cancel: &CancellationToken,
    record_tx: &Sender<AuditRecord>,
    counters: &RunCounters,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    let scan_root = discovery::resolve_scan_root(project, request.raw_mode)?;
    debug!("Scanning {}", scan_root.display());

    let filter = FileFilter::new(&request.include, &request.exclude, &request.search);
    let file_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(request.max_files)
        .build()
        .map_err(|e| DisguiseToolError::Config(format!("failed to build file worker pool: {e}")))?;

    let project_path = project.to_string_lossy();

    file_pool.install(|| {
        discovery::walk_files(&scan_root)
            .take_while(|_| !cancel.is_cancelled())
            .par_bridge()
            .for_each(|file_path| {
                process_file(
                    &scan_root,
                    &project_path,
                    &file_path,
                    &filter,
                    prober,
                    cancel,
                    record_tx,
                    counters,
                    progress_bar,
                )
            });
    });

    Ok(())
}

/// Process one discovered file. Every failure is contained here: the
/// file is logged and skipped, sibling work is never affected.
#[allow(clippy::too_many_arguments)]
fn process_file(
    scan_root: &Path,
    project_path: &str,
    file_path: &Path,
    filter: &FileFilter,
    prober: Option<&dyn MediaProber>,
    cancel: &CancellationToken,
    record_tx: &Sender<AuditRecord>,
    counters: &RunCounters,
    progress_bar: Option<&ProgressBar>,
) {
    if cancel.is_cancelled() {
        return;
    }
    if !filter.matches(file_path) {
        return;
    }

    match build_record(scan_root, project_path, file_path) {
        Ok(record) => {
            // On probe success the bare record is replaced wholesale, so
            // no partially enriched record is ever visible downstream.
            let record = match prober.and_then(|p| p.probe(file_path, cancel)) {
                Some(info) => record.with_media(info),
                None => record,
            };
            if cancel.is_cancelled() {
                return;
            }
            let _ = record_tx.send(record);
            counters.audited.fetch_add(1, Ordering::Relaxed);
            if let Some(pb) = progress_bar {
                pb.inc(1);
                pb.set_message(
                    file_path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
        Err(e) => {
            warn!("Skipping {}: {}", file_path.display(), e);
            counters.failed.fetch_add(1, Ordering::Relaxed);
            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }
    }
}
