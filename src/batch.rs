//! Sequential driver over a fixed list of input/output pairs.
//!
//! Every job gets its own error scope: a failed job is logged and recorded,
//! and the remaining jobs still run.

use std::path::Path;

use crate::error::Result;
use crate::remover::{Remover, Summary};

/// One input/output pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

/// The pairs processed when the binary runs.
pub const DEFAULT_JOBS: [Job<'static>; 2] = [
    Job {
        input: "public/sigi_s.png",
        output: "public/sigi_s_transparent.png",
    },
    Job {
        input: "public/sigi_margafull.png.jpg",
        output: "public/sigi_margafull_transparent.png",
    },
];

/// Per-job outcomes, in job order.
#[derive(Debug, Default)]
pub struct Report<'a> {
    pub outcomes: Vec<(Job<'a>, Result<Summary>)>,
}

impl Report<'_> {
    /// Number of jobs that produced an output file.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    /// Number of jobs that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Run `jobs` one after another, relative to the current directory.
pub fn run_jobs<'a>(remover: &Remover, jobs: &[Job<'a>]) -> Report<'a> {
    run_jobs_in(remover, Path::new(""), jobs)
}

/// Run `jobs` one after another with paths resolved against `root`.
pub fn run_jobs_in<'a>(remover: &Remover, root: &Path, jobs: &[Job<'a>]) -> Report<'a> {
    let mut report = Report::default();

    for &job in jobs {
        let input = root.join(job.input);
        let output = root.join(job.output);

        tracing::info!("Processing {}...", input.display());

        let outcome = remover.process(&input, &output);
        match &outcome {
            Ok(summary) => tracing::info!(
                "Saved to {} ({}x{}, {} pixels cleared)",
                output.display(),
                summary.width,
                summary.height,
                summary.cleared
            ),
            Err(err) => tracing::error!("Error: {}", error_chain(err)),
        }

        report.outcomes.push((job, outcome));
    }

    report
}

/// Render an error with all of its sources, outermost first.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !out.contains(&cause_text) {
            out.push_str(": ");
            out.push_str(&cause_text);
        }
        source = cause.source();
    }
    out
}
