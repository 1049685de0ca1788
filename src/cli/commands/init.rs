use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::journal::Journal;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the sessions directory
pub fn handle(cli: &Cli, cfg: &Config, journal: &Journal) -> AppResult<()> {
    println!("⚙️  Initializing rTimeRecorder…");

    let sessions = cfg.init_all(cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("📂 Sessions    : {}", sessions.display());

    journal.note(
        "init",
        &sessions.display().to_string(),
        "Configuration initialized",
    );

    println!("🎉 rTimeRecorder initialization completed!");
    Ok(())
}
