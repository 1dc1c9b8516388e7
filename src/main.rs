//! Sigungu -- browse Korean administrative divisions from the terminal.
//!
//! This binary loads the dataset once, then reads commands from stdin and
//! writes responses to stdout. A dataset that fails validation stops the
//! process before any division is shown.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use sigungu::config::Config;
use sigungu::dataset::load_dataset;
use sigungu::logging::init_logging;
use sigungu::protocol::{parse_command, Command};
use sigungu::session::{write_summary, Session};

fn main() -> ExitCode {
    init_logging();
    let config = Config::parse();

    let dataset = match load_dataset(&config.data) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("refusing to start: {}", e);
            println!("error {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if config.validate {
        write_summary(&dataset, &mut out).and_then(|_| out.flush())
    } else {
        run(Session::new(&dataset, config.seed), &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("output failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the command loop until `quit` or end of input.
fn run<W: Write>(mut session: Session<'_>, out: &mut W) -> io::Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => session.handle_isready(out)?,
            Command::List => session.handle_list(out)?,
            Command::Select { text } => session.handle_select(&text, out)?,
            Command::Clear => session.handle_clear(out)?,
            Command::Random => session.handle_random(out)?,
            Command::Suggest { text } => session.handle_suggest(&text, out)?,
            Command::Map => session.handle_map(out)?,
            Command::Status => session.handle_status(out)?,
            Command::Summary => session.handle_summary(out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
