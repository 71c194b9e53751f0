//! Batch driver: one independent unit of work per applet.
//!
//! Units share only read-only inputs and each writes its own page, so they run
//! on a worker pool without coordination. A failing applet is recorded in the
//! report and never stops the others.
use crate::capture::HelpSource;
use crate::fragments::load_fragments;
use crate::output::write_page;
use crate::render::{render_man_page, PageContext, RenderSummary};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Read-only inputs shared by every unit of work.
pub struct BatchJob<'a> {
    /// Applets to generate; also the cross-reference set for SEE ALSO.
    pub applets: &'a [String],
    pub include_dir: &'a Path,
    pub out_dir: &'a Path,
    pub date: &'a str,
    pub jobs: Option<usize>,
}

pub struct AppletOutcome {
    pub applet: String,
    pub output: PathBuf,
    pub result: Result<RenderSummary>,
}

pub struct BatchReport {
    /// Outcomes in the order of [`BatchJob::applets`].
    pub outcomes: Vec<AppletOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &AppletOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

pub fn run_batch(job: &BatchJob<'_>, source: &dyn HelpSource) -> Result<BatchReport> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(job.jobs.unwrap_or(0))
        .thread_name(|index| format!("mkman-{index}"))
        .build()
        .context("build worker pool")?;
    let context = PageContext {
        date: job.date,
        known_applets: job.applets,
    };
    let outcomes = pool.install(|| {
        job.applets
            .par_iter()
            .map(|applet| {
                let output = job.out_dir.join(format!("{applet}.1"));
                let result = generate_page(job, &context, source, applet, &output);
                if let Err(err) = &result {
                    tracing::error!(applet = %applet, "{err:#}");
                }
                AppletOutcome {
                    applet: applet.clone(),
                    output,
                    result,
                }
            })
            .collect::<Vec<_>>()
    });
    Ok(BatchReport { outcomes })
}

fn generate_page(
    job: &BatchJob<'_>,
    context: &PageContext<'_>,
    source: &dyn HelpSource,
    applet: &str,
    output: &Path,
) -> Result<RenderSummary> {
    println!("{applet:<10}: generating {}", output.display());
    let help_text = source.help_text(applet)?;
    let fragments = load_fragments(job.include_dir, applet)?;
    let rendered = render_man_page(applet, &help_text, &fragments, context)?;
    write_page(output, &rendered.man_page)?;
    tracing::info!(
        applet,
        options = rendered.summary.options_entries,
        sub_applets = rendered.summary.sub_applets,
        includes = rendered.summary.include_fragments,
        see_also = rendered.summary.see_also_entries,
        "wrote {}",
        output.display()
    );
    Ok(rendered.summary)
}
