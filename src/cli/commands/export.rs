use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::journal::Journal;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, journal: &Journal) -> AppResult<()> {
    if let Commands::Export {
        file,
        out,
        format,
        summary,
        force,
    } = cmd
    {
        let offset = cfg.offset()?;
        let rows = ExportLogic::export(
            Path::new(file),
            Path::new(out),
            *format,
            *summary,
            *force,
            &offset,
        )?;

        if rows > 0 {
            journal.note(
                "export",
                out,
                &format!("{} rows exported as {}", rows, format.as_str()),
            );
        }
    }
    Ok(())
}
