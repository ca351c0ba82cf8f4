use std::io::{self, IsTerminal};

use clap::Parser;
use sorting_visualizer::input::cli::args::{Cli, Command, LogFormatArg};
use sorting_visualizer::input::cli::commands::{algorithm_table, format_summary, run_sort};
use sorting_visualizer::logging::{LogConfig, LogFormat, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
    };
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(format)
            .with_ansi(io::stderr().is_terminal()),
    );

    match cli.command {
        Command::Run(args) => {
            let summary = run_sort(&args)?;
            println!("{}", format_summary(&summary));
        }
        Command::Algorithms => print!("{}", algorithm_table()),
    }

    Ok(())
}
