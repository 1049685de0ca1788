use crate::cli::parser::Commands;
use crate::core::journal::Journal;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, journal: &Journal) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        journal.print()?;
    }
    Ok(())
}
