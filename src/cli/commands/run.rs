use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::console::{Command, Console, ConsoleSettings, Flow};
use crate::core::display::readout;
use crate::core::journal::Journal;
use crate::core::store::SessionStore;
use crate::core::ticker::Ticker;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_readout};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Handle the `run` command: an interactive session fed from stdin.
pub fn handle(cmd: &Commands, cfg: &Config, journal: &Journal) -> AppResult<()> {
    if let Commands::Run { activity, live } = cmd {
        let settings = ConsoleSettings::from_config(cfg)?;
        let mut store = SessionStore::new().with_fallback(&cfg.fallback_activity);

        let stdout = io::stdout();
        let mut console = Console::new(&mut store, settings, journal, stdout.lock());

        console.greet()?;
        if let Some(label) = activity {
            console.apply(Command::Activity(Some(label.clone())))?;
        }

        if *live {
            run_live(&mut console, Duration::from_millis(cfg.refresh_ms))?;
        } else {
            run_lines(&mut console)?;
        }
    }
    Ok(())
}

fn run_lines<C: Clock, W: Write>(console: &mut Console<'_, C, W>) -> AppResult<()> {
    for line in io::stdin().lock().lines() {
        if console.execute(&line?)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Same as `run_lines`, plus a readout on stderr refreshed every `interval`.
/// A reader thread forwards stdin lines; commands still run on this thread.
fn run_live<C: Clock, W: Write>(
    console: &mut Console<'_, C, W>,
    interval: Duration,
) -> AppResult<()> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut ticker = Ticker::new(interval);
    let mut err = io::stderr();

    loop {
        match rx.recv_timeout(ticker.until_next()) {
            Ok(line) => {
                write!(err, "\r\x1b[2K")?;
                if console.execute(&line)? == Flow::Quit {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if ticker.poll() {
                    let store = console.store();
                    write!(
                        err,
                        "\r{}{}{}",
                        color_for_readout(store.is_running()),
                        readout(store),
                        RESET
                    )?;
                    err.flush()?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    writeln!(err)?;
    Ok(())
}
