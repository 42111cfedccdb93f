use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use clap::ArgMatches;
use tracing::info;

use super::helpers::load_config_with_warning;
use crate::session::{Reply, Session};

pub(crate) fn handle_run_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<PathBuf>("script")
        .ok_or("Script argument is required")?;
    let json_output = matches.get_flag("json");
    let keep_going = matches.get_flag("keep-going");

    let script = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script '{}': {}", path.display(), e))?;

    let mut session = Session::new(load_config_with_warning());

    let mutations = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&mutations);
    session
        .store_mut()
        .subscribe(move |_, _| counter.set(counter.get() + 1));

    let mut failures = 0;
    for (number, line) in script.lines().enumerate() {
        match session.execute_line(line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Message(text)) => {
                if !json_output {
                    println!("{}", text);
                }
            }
            Ok(Reply::Changed | Reply::Silent) => {}
            Err(e) => {
                session.log_rejected(line, &e);
                let message = format!("line {}: {}", number + 1, e);
                if !keep_going {
                    return Err(message.into());
                }
                eprintln!("Error: {}", message);
                failures += 1;
            }
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&session.store().snapshot())?);
    } else {
        println!("{}", session.render());
    }

    info!(
        event = "cli.run.completed",
        script = %path.display(),
        mutations = mutations.get(),
        failures = failures
    );

    Ok(())
}
