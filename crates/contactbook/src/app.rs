use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("contactbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep a list of contacts for the length of a terminal session")
        .long_about("contactbook holds a list of name/email contacts in memory. Add, edit and delete entries interactively with 'shell', or replay a file of the same commands with 'run'. Nothing is written to disk: every session starts with an empty list.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("shell")
                .about("Manage contacts interactively, one command per line on stdin")
        )
        .subcommand(
            Command::new("run")
                .about("Run a script of shell commands and print the resulting list")
                .arg(
                    Arg::new("script")
                        .help("File with one command per line ('#' starts a comment)")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the final state as JSON instead of a table")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("keep-going")
                        .long("keep-going")
                        .short('k')
                        .help("Report failing lines and continue instead of stopping at the first one")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                        .index(1)
                )
        )
}
