use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display::store_lines;
use crate::core::store::SessionStore;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { file } = cmd {
        let offset = cfg.offset()?;
        let mut store = SessionStore::new();
        store.load_from_path(Path::new(file))?;

        let lines = store_lines(&store, &offset);
        if lines.is_empty() {
            println!("No sessions in {}", file);
        }
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
