use anyhow::Result;

use super::{
    ExitStatus,
    args::Arguments,
    progress::ProgressConfig,
    report::{print_no_files, print_summary},
};
use crate::core::context::ExplodeContext;

/// Run one explosion: discover, plan in parallel, commit, summarize.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` once every file has been attempted, even if
///   some of them failed
/// - `Err` if the run could not start (bad paths, invalid config)
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let ctx = ExplodeContext::new(&args)?;

    if ctx.files.is_empty() {
        print_no_files(&args.input);
        return Ok(ExitStatus::Success);
    }

    tracing::info!("Found {} Python files to process", ctx.files.len());
    tracing::debug!(
        method = %ctx.layout,
        jobs = ctx.jobs,
        output = %ctx.output.display(),
        "starting run"
    );

    let progress = ProgressConfig::from_env(args.quiet);
    let bar = progress.create_bar(ctx.files.len() as u64);
    let planned = ctx.plan_all(&|_| bar.inc(1))?;
    bar.finish_and_clear();

    let report = ctx.commit_all(planned)?;
    tracing::debug!(written = report.written_count(), "commit finished");
    print_summary(&report);

    Ok(ExitStatus::Success)
}
