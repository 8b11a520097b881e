use clap::Parser;
use std::process;

use flowdeck::cli;
use flowdeck::cli::commands::{Cli, Commands};
use flowdeck::logging;

fn main() {
    let _logger = logging::init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Dashboard => cli::dashboard::run(json_output),
        Commands::Task(cmd) => cli::task::run(cmd, json_output),
        Commands::Timer(cmd) => cli::timer::run(cmd, json_output),
        Commands::Event(cmd) => cli::event::run(cmd, json_output),
        Commands::Calendar { month } => cli::calendar::run(month.as_deref(), json_output),
        Commands::Note(cmd) => cli::note::run(cmd, json_output),
        Commands::Achievements => cli::achievements::run(json_output),
    };

    process::exit(exit_code);
}
