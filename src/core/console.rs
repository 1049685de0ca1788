//! Line-oriented front end for the session store.
//!
//! Each input line is one action (start, stop, save, ...). Load and save
//! failures are reported as warnings and never end the session.

use crate::config::Config;
use crate::core::chart::PieChart;
use crate::core::clock::Clock;
use crate::core::display::{readout, store_lines};
use crate::core::journal::Journal;
use crate::core::store::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::{Level, header, render};
use crate::utils::formatting::format_hms;
use crate::utils::path::has_json_extension;
use crate::utils::time::today;
use chrono::FixedOffset;
use std::io::Write;
use std::path::{Path, PathBuf};

const HELP: &str = "\
Commands:
  activity [<label>|<n>|-]  show the label, set it, pick preset n, or clear it
  activities                list preset labels
  start                     start timing (ignored while running)
  stop                      stop timing and record a session
  status                    show the running time
  list                      show recorded sessions, most recent first
  chart                     show time per activity
  save                      save sessions to the sessions directory
  load <path>               replace sessions with a saved file
  clear                     drop all sessions and the running timer
  help                      show this help
  quit | exit               leave (a running timer is discarded)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Activity(Option<String>),
    Activities,
    Start,
    Stop,
    Status,
    List,
    Chart,
    Save,
    Load(String),
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((v, a)) => (v, a.trim()),
            None => (line, ""),
        };

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "activity" | "a" => Command::Activity((!arg.is_empty()).then(|| arg.to_string())),
            "activities" => Command::Activities,
            "start" => Command::Start,
            "stop" => Command::Stop,
            "status" => Command::Status,
            "list" | "ls" => Command::List,
            "chart" | "graph" => Command::Chart,
            "save" => Command::Save,
            "load" => {
                if arg.is_empty() {
                    return Err("load needs a file path".to_string());
                }
                Command::Load(arg.to_string())
            }
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("Unknown command '{}' (try 'help')", other)),
        };

        Ok(Some(cmd))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Values the console needs from the configuration.
#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    pub presets: Vec<String>,
    pub sessions_dir: PathBuf,
    pub offset: FixedOffset,
    pub color: bool,
}

impl ConsoleSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            presets: cfg.activities.clone(),
            sessions_dir: cfg.sessions_path(),
            offset: cfg.offset()?,
            color: true,
        })
    }
}

pub struct Console<'a, C: Clock, W: Write> {
    store: &'a mut SessionStore<C>,
    settings: ConsoleSettings,
    journal: &'a Journal,
    out: W,
    activity: String,
}

impl<'a, C: Clock, W: Write> Console<'a, C, W> {
    pub fn new(
        store: &'a mut SessionStore<C>,
        settings: ConsoleSettings,
        journal: &'a Journal,
        out: W,
    ) -> Self {
        Self {
            store,
            settings,
            journal,
            out,
            activity: String::new(),
        }
    }

    pub fn set_activity(&mut self, label: &str) {
        self.activity = label.trim().to_string();
    }

    pub fn store(&self) -> &SessionStore<C> {
        &*self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Opening banner: title, date and the presets.
    pub fn greet(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", header("Time Recorder"))?;
        writeln!(self.out, "Today's Date: {}", today(&self.settings.offset))?;
        writeln!(self.out, "Activities: {}", self.settings.presets.join(", "))?;
        writeln!(self.out, "Type 'help' for commands.")?;
        Ok(())
    }

    /// Run one input line.
    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        match Command::parse(line) {
            Ok(Some(cmd)) => self.apply(cmd),
            Ok(None) => Ok(Flow::Continue),
            Err(msg) => {
                self.notice(Level::Warning, msg)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn apply(&mut self, cmd: Command) -> AppResult<Flow> {
        match cmd {
            Command::Activity(arg) => self.choose_activity(arg)?,
            Command::Activities => {
                for (i, p) in self.settings.presets.iter().enumerate() {
                    writeln!(self.out, "  {}. {}", i + 1, p)?;
                }
            }
            Command::Start => {
                if self.store.is_running() {
                    self.notice(Level::Info, "Timer already running")?;
                } else {
                    self.store.start();
                    self.notice(Level::Info, "Timer started")?;
                }
            }
            Command::Stop => self.stop()?,
            Command::Status => {
                let line = readout(&*self.store);
                writeln!(self.out, "{}", line)?;
            }
            Command::List => self.print_list()?,
            Command::Chart => {
                let chart = PieChart::from_totals(&self.store.aggregate_by_activity());
                writeln!(self.out, "{}", chart.render(self.settings.color))?;
            }
            Command::Save => self.save()?,
            Command::Load(path) => self.load(Path::new(&path))?,
            Command::Clear => {
                self.store.clear();
                self.journal.note("clear", "", "Sessions cleared");
                self.notice(Level::Success, "All sessions cleared")?;
                self.print_list()?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => {
                if self.store.is_running() {
                    self.notice(Level::Warning, "Running timer discarded")?;
                }
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn choose_activity(&mut self, arg: Option<String>) -> AppResult<()> {
        match arg {
            None => {
                let shown = if self.activity.is_empty() {
                    format!("(none, '{}' will be used)", self.store.fallback())
                } else {
                    self.activity.clone()
                };
                writeln!(self.out, "Activity: {}", shown)?;
            }
            Some(a) if a == "-" => {
                self.activity.clear();
                self.notice(Level::Info, "Activity cleared")?;
            }
            Some(a) => {
                let picked = a
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.settings.presets.get(i).cloned())
                    .unwrap_or(a);
                self.set_activity(&picked);
                self.notice(Level::Info, format!("Activity set to '{}'", self.activity))?;
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> AppResult<()> {
        let recorded = self
            .store
            .stop(&self.activity)
            .map(|s| (s.activity.clone(), s.whole_secs()));

        match recorded {
            Some((activity, secs)) => {
                self.notice(
                    Level::Success,
                    format!("Recorded {} ({})", activity, format_hms(secs)),
                )?;
                self.print_list()
            }
            None => self.notice(Level::Info, "Timer is not running"),
        }
    }

    fn save(&mut self) -> AppResult<()> {
        if self.store.is_running() {
            self.notice(
                Level::Warning,
                "Timer still running: the current interval is not included",
            )?;
        }

        match self
            .store
            .save_to_dir(&self.settings.sessions_dir, &self.settings.offset)
        {
            Ok(path) => {
                let target = path.display().to_string();
                self.journal.note(
                    "save",
                    &target,
                    &format!("{} sessions saved", self.store.sessions().len()),
                );
                self.notice(Level::Success, format!("Sessions saved as '{}'", target))
            }
            Err(e) => self.notice(Level::Warning, format!("Save failed: {}", e)),
        }
    }

    fn load(&mut self, path: &Path) -> AppResult<()> {
        if !has_json_extension(path) {
            self.notice(Level::Info, "Not a .json file, trying anyway")?;
        }

        match self.store.load_from_path(path) {
            Ok(n) => {
                let target = path.display().to_string();
                self.journal
                    .note("load", &target, &format!("{} sessions loaded", n));
                self.notice(Level::Success, format!("Loaded {} sessions", n))?;
                self.print_list()
            }
            Err(e) if e.is_unreadable() => {
                self.notice(Level::Warning, format!("No sessions found to load: {}", e))
            }
            Err(e) => self.notice(Level::Warning, format!("Invalid session file: {}", e)),
        }
    }

    fn print_list(&mut self) -> AppResult<()> {
        let lines = store_lines(&*self.store, &self.settings.offset);
        if lines.is_empty() {
            writeln!(self.out, "(no sessions)")?;
        }
        for l in lines {
            writeln!(self.out, "{}", l)?;
        }
        Ok(())
    }

    fn notice<T: std::fmt::Display>(&mut self, level: Level, msg: T) -> AppResult<()> {
        writeln!(self.out, "{}", render(level, msg))?;
        Ok(())
    }
}
