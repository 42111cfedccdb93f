use clap::ArgMatches;
use tracing::error;

use contactbook_core::events;

pub mod helpers;

mod completions;
mod run;
mod shell;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("shell", sub_matches)) => shell::handle_shell_command(sub_matches),
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    events::log_app_shutdown();

    result
}
