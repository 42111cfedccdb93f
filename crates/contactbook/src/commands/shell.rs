use std::io::{self, BufRead, IsTerminal, Write};

use clap::ArgMatches;
use tracing::info;

use super::helpers::load_config_with_warning;
use crate::session::{Reply, Session, render_form, render_screen};

pub(crate) fn handle_shell_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(load_config_with_warning());

    // Re-render after every committed mutation
    let display = session.display_config().clone();
    let subscription = session.store_mut().subscribe(move |snapshot, _events| {
        println!("{}", render_screen(snapshot, &display));
    });

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(event = "cli.shell.started", interactive = interactive);

    println!("{}", session.render());
    if interactive {
        println!("Type 'help' for commands.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match session.execute_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Message(text)) => println!("{}", text),
            // The list was already re-rendered by the subscription
            Ok(Reply::Changed) => {
                if session.form().is_visible() {
                    println!("{}", render_form(session.form()));
                }
            }
            Ok(Reply::Silent) => {}
            Err(e) => {
                session.log_rejected(&line, &e);
                eprintln!("Error: {}", e);
            }
        }
    }

    session.store_mut().unsubscribe(subscription);
    info!(
        event = "cli.shell.completed",
        contact_count = session.store().contacts().len()
    );

    Ok(())
}
