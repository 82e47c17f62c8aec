use log::{debug, warn};
use std::time::{Duration, Instant};

use crate::error::LoadError;
use crate::model::Manifest;
use crate::seed::dispatch::dispatch;
use crate::transport::RestClient;

/// What happened to one manifest entry
#[derive(Debug)]
pub enum InstructionOutcome {
    Skipped,
    Completed { elapsed: Duration, requests: usize },
    /// The error was logged and the run moved on
    Failed { elapsed: Duration, error: LoadError },
}

/// Outcomes of a manifest run, one per entry in manifest order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<InstructionOutcome>,
}

impl RunSummary {
    pub fn completed(&self) -> usize {
        self.count(|o| matches!(o, InstructionOutcome::Completed { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, InstructionOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, InstructionOutcome::Skipped))
    }

    /// Total requests sent by completed instructions
    pub fn requests(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                InstructionOutcome::Completed { requests, .. } => *requests,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, predicate: impl Fn(&InstructionOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

/// Run every instruction of the manifest in order, one at a time.
///
/// Missing source files and failed requests are printed and the run continues
/// with the next instruction. Any other error stops the run.
pub async fn run_manifest<C>(client: &C, manifest: &Manifest) -> Result<RunSummary, LoadError>
where
    C: RestClient + ?Sized,
{
    let mut summary = RunSummary::default();

    for instruction in manifest {
        if instruction.disabled {
            debug!("{} is disabled", instruction.api);
            summary.outcomes.push(InstructionOutcome::Skipped);
            continue;
        }

        let start = Instant::now();
        let result = dispatch(client, instruction).await;
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(requests) => InstructionOutcome::Completed { elapsed, requests },
            Err(error) if error.is_recoverable() => {
                println!("{}", error);
                warn!("{} {} abandoned: {}", instruction.verb, instruction.api, error);
                InstructionOutcome::Failed { elapsed, error }
            }
            Err(error) => return Err(error),
        };

        println!("{}", report_line(&instruction.message, elapsed));
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}

/// The progress line printed after each instruction
pub fn report_line(message: &str, elapsed: Duration) -> String {
    format!("{}: {:.3} seconds.", message, elapsed.as_secs_f64())
}
