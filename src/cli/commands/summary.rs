use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::PieChart;
use crate::core::store::{read_sessions, totals_of};
use crate::errors::AppResult;
use crate::utils::formatting::{format_hms, human_duration};
use crate::utils::table::{Column, Table};
use std::collections::HashMap;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { file, chart } = cmd {
        let sessions = read_sessions(Path::new(file))?;
        let totals = totals_of(&sessions);

        if totals.is_empty() {
            println!("No sessions in {}", file);
            return Ok(());
        }

        if *chart {
            let by_activity: HashMap<String, f64> = totals
                .iter()
                .map(|t| (t.activity.clone(), t.seconds))
                .collect();
            println!("{}", PieChart::from_totals(&by_activity).render(true));
            return Ok(());
        }

        let label_w = totals
            .iter()
            .map(|t| unicode_width::UnicodeWidthStr::width(t.activity.as_str()))
            .max()
            .unwrap_or(0)
            .max("Activity".len());

        let mut table = Table::new(vec![
            Column::new("Activity", label_w),
            Column::new("Sessions", 8),
            Column::new("Elapsed", 16),
            Column::new("Duration", 14),
        ]);

        for t in &totals {
            table.add_row(vec![
                t.activity.clone(),
                t.sessions.to_string(),
                format_hms(t.seconds as i64),
                human_duration(t.seconds),
            ]);
        }

        print!("{}", table.render());
        let grand: f64 = totals.iter().map(|t| t.seconds).sum();
        println!("Total: {}", human_duration(grand));
    }
    Ok(())
}
