use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::Arguments,
    config::load_config,
    core::{
        commit::commit_plan,
        explode::{FilePlan, Target, plan_file},
        file_scanner::scan_files,
        naming::Layout,
    },
    error::ExplodeError,
};

/// Result of processing one source file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source path relative to the input directory.
    pub source: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    /// Definitions were extracted into `files` output files.
    Exploded { definitions: usize, files: usize },
    /// No definitions; the file was copied unchanged.
    Copied,
    Failed(ExplodeError),
}

/// Outcomes of a whole run, in discovery order.
#[derive(Debug)]
pub struct BatchReport {
    pub output: PathBuf,
    pub layout: Layout,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn exploded_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Exploded { .. }))
            .count()
    }

    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Copied))
            .count()
    }

    pub fn definitions_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Exploded { definitions, .. } => definitions,
                _ => 0,
            })
            .sum()
    }

    /// Files written to the output tree, artifacts and remainders included.
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Exploded { files, .. } => files,
                FileStatus::Copied => 1,
                FileStatus::Failed(_) => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ExplodeError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Failed(err) => Some((o.source.as_path(), err)),
            _ => None,
        })
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// A source file together with its in-memory plan (or the reason it has none).
pub struct PlannedSource {
    pub path: PathBuf,
    pub plan: Result<FilePlan, ExplodeError>,
}

/// Batch runner for one invocation.
///
/// Construction validates paths, loads the config and discovers files, so any
/// configuration problem surfaces before a single output is written. The run
/// itself has two phases:
///
/// 1. `plan_all`: read, parse and render every file on a worker pool
/// 2. `commit_all`: write the plans one file at a time, in discovery order
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--method`, `--jobs`)
/// 2. `.pyxplodrc.json` config file
/// 3. Built-in defaults
pub struct ExplodeContext {
    // ============================================================
    // Resolved settings
    // ============================================================
    /// Canonical input directory.
    pub input: PathBuf,

    /// Output root; created on first commit if missing.
    pub output: PathBuf,

    pub layout: Layout,

    /// Worker threads (0 = one per core).
    pub jobs: usize,

    // ============================================================
    // Discovery
    // ============================================================
    /// Python sources to process, sorted lexically.
    pub files: Vec<PathBuf>,

    /// Sibling source file names per input directory.
    siblings: HashMap<PathBuf, Vec<String>>,
}

impl ExplodeContext {
    /// Create a new `ExplodeContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The input path is missing or not a directory
    /// - The output path exists and is not a directory
    /// - The config file is invalid
    pub fn new(args: &Arguments) -> Result<Self> {
        let input = validate_paths(&args.input, &args.output)?;
        let output = args.output.clone();

        let config_result = load_config(&input)?;
        match &config_result.path {
            Some(path) => tracing::debug!(config = %path.display(), "loaded config file"),
            None => tracing::debug!("no config file found, using defaults"),
        }
        let config = config_result.config;

        let layout = args.method.or(config.method).unwrap_or_default();
        let jobs = args.jobs.or(config.jobs).unwrap_or(0);

        let scan_result = scan_files(&input, &config.ignores, Some(&output));
        if scan_result.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        let mut siblings: HashMap<PathBuf, Vec<String>> = HashMap::new();
        for file in &scan_result.files {
            if let (Some(parent), Some(name)) =
                (file.parent(), file.file_name().and_then(|n| n.to_str()))
            {
                siblings
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(name.to_string());
            }
        }

        Ok(Self {
            input,
            output,
            layout,
            jobs,
            files: scan_result.files,
            siblings,
        })
    }

    /// Path of `file` relative to the input directory.
    pub fn relative<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.input).unwrap_or(file)
    }

    /// Output directory mirroring the directory of `file`.
    fn target_dir(&self, file: &Path) -> PathBuf {
        match self.relative(file).parent() {
            Some(parent) => self.output.join(parent),
            None => self.output.clone(),
        }
    }

    /// Read, parse and render every discovered file in parallel.
    ///
    /// `on_file_done` is called once per file as soon as its plan is ready,
    /// from whichever worker thread produced it. Plans come back in discovery
    /// order.
    pub fn plan_all(&self, on_file_done: &(dyn Fn(&Path) + Sync)) -> Result<Vec<PlannedSource>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .context("Failed to start worker pool")?;

        let no_siblings = Vec::new();
        let planned = pool.install(|| {
            self.files
                .par_iter()
                .map(|path| {
                    let dir = self.target_dir(path);
                    let siblings = path
                        .parent()
                        .and_then(|p| self.siblings.get(p))
                        .unwrap_or(&no_siblings);
                    let target = Target {
                        dir: &dir,
                        layout: self.layout,
                        siblings,
                    };
                    let plan = plan_file(path, &target);
                    on_file_done(path);
                    PlannedSource {
                        path: path.clone(),
                        plan,
                    }
                })
                .collect()
        });

        Ok(planned)
    }

    /// Write every successful plan and collect per-file outcomes.
    ///
    /// Plans are committed one at a time in discovery order, so when two
    /// source files claim the same output path the result is still
    /// deterministic: the later file wins, and a warning is logged.
    pub fn commit_all(&self, planned: Vec<PlannedSource>) -> Result<BatchReport> {
        fs::create_dir_all(&self.output).with_context(|| {
            format!("Failed to create output directory: {}", self.output.display())
        })?;

        self.warn_on_shared_outputs(&planned);

        let outcomes = planned
            .into_iter()
            .map(|PlannedSource { path, plan }| {
                let source = self.relative(&path).to_path_buf();
                let status = match plan.and_then(|plan| commit_plan(&plan).map(|()| plan)) {
                    Ok(plan) if plan.is_copy() => FileStatus::Copied,
                    Ok(plan) => {
                        tracing::debug!(
                            file = %source.display(),
                            method = %plan.layout,
                            definitions = plan.extracted.len(),
                            "exploded"
                        );
                        FileStatus::Exploded {
                            definitions: plan.extracted.len(),
                            files: plan.files.len(),
                        }
                    }
                    Err(err) => {
                        tracing::error!("Failed to process {}: {}", source.display(), err);
                        FileStatus::Failed(err)
                    }
                };
                FileOutcome { source, status }
            })
            .collect();

        Ok(BatchReport {
            output: self.output.clone(),
            layout: self.layout,
            outcomes,
        })
    }

    fn warn_on_shared_outputs(&self, planned: &[PlannedSource]) {
        let mut owners: HashMap<&Path, &Path> = HashMap::new();
        for source in planned {
            let Ok(plan) = &source.plan else { continue };
            for file in &plan.files {
                match owners.entry(file.path.as_path()) {
                    Entry::Vacant(entry) => {
                        entry.insert(source.path.as_path());
                    }
                    Entry::Occupied(entry) => tracing::warn!(
                        "{} is produced by both {} and {}; keeping the output of {}",
                        self.relative_output(&file.path).display(),
                        self.relative(entry.get()).display(),
                        self.relative(&source.path).display(),
                        self.relative(&source.path).display(),
                    ),
                }
            }
        }
    }

    fn relative_output<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.output).unwrap_or(file)
    }
}

/// Check the input and output directories, returning the canonical input.
fn validate_paths(input: &Path, output: &Path) -> Result<PathBuf> {
    if !input.exists() {
        bail!("Input path does not exist: {}", input.display());
    }
    if !input.is_dir() {
        bail!("Input path is not a directory: {}", input.display());
    }
    if output.exists() && !output.is_dir() {
        bail!(
            "Output path exists but is not a directory: {}",
            output.display()
        );
    }
    input
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))
}
