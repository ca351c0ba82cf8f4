use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::controllers::interactive::{
    ControllerError, ControllerOptions, NoDelayPacer, Pacer, SortPresenterPort, SortingController,
    ThreadSleepPacer,
};
use crate::core::algorithms::info::complexity;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::config::session_config::SessionConfig;
use crate::core::metrics::tracker::MetricsSnapshot;
use crate::input::cli::args::RunArgs;
use crate::presenters::terminal::TerminalPresenter;

/// Upper bound on a single CLI run; the slowest preset on the largest array
/// stays well inside it.
const RUN_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error("sorting run did not settle within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub size: usize,
    pub sorted: bool,
    pub values: Vec<u32>,
    pub metrics: MetricsSnapshot,
}

pub fn run_sort(args: &RunArgs) -> Result<RunSummary, CliError> {
    let config = SessionConfig {
        array_size: args.size,
        speed: args.speed,
        sound_enabled: !args.no_sound,
        algorithm: args.algorithm,
        visual_mode: args.mode,
    };
    let pacer: Arc<dyn Pacer> = if args.frames {
        Arc::new(ThreadSleepPacer)
    } else {
        Arc::new(NoDelayPacer)
    };
    let presenter = Arc::new(TerminalPresenter::new(io::stdout(), args.frames));

    let mut controller = SortingController::new(
        Arc::clone(&presenter) as Arc<dyn SortPresenterPort>,
        ControllerOptions {
            config,
            seed: args.seed,
            pacer,
        },
    )?;

    if let Some(values) = &args.values {
        controller.set_custom_text(values)?;
    }

    let token = controller.start()?;
    if !controller.wait_until_settled(token, RUN_TIMEOUT) {
        controller.reset()?;
        return Err(CliError::Timeout(RUN_TIMEOUT));
    }

    let array = controller.array();
    let summary = RunSummary {
        size: array.len(),
        sorted: array.is_sorted(),
        values: array.values(),
        metrics: controller.metrics(),
    };
    controller.shutdown();

    info!(
        algorithm = %summary.metrics.algorithm,
        size = summary.size,
        comparisons = summary.metrics.comparisons,
        exchanges = summary.metrics.exchanges,
        "run complete"
    );
    Ok(summary)
}

#[must_use]
pub fn format_summary(summary: &RunSummary) -> String {
    let metrics = &summary.metrics;
    format!(
        "{name}: {size} elements, {comparisons} comparisons, {exchanges} {label}, {elapsed} ms{status}",
        name = metrics.algorithm.display_name(),
        size = summary.size,
        comparisons = metrics.comparisons,
        exchanges = metrics.exchanges,
        label = metrics.exchange_label.as_str().to_lowercase(),
        elapsed = metrics.elapsed.as_millis(),
        status = if summary.sorted { "" } else { " (not sorted)" },
    )
}

#[must_use]
pub fn algorithm_table() -> String {
    let mut table = format!("{:<12} {:<16} {:<12} {}\n", "KEY", "NAME", "TIME", "SPACE");
    for &kind in AlgorithmKind::ALL {
        let info = complexity(kind);
        table.push_str(&format!(
            "{:<12} {:<16} {:<12} {}\n",
            kind.key(),
            kind.display_name(),
            info.time,
            info.space
        ));
    }
    table
}
