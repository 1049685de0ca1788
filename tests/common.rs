#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtimerecorder")
}

/// Three sessions on 1970-01-01 (+09:00 shows them from 09:00 on):
/// Study 09:00~10:30, Reading 10:40~11:10, Study 11:30~11:45.
pub const SAMPLE: &str = r#"[
  { "activity": "Study", "start": 0, "end": 5400 },
  { "activity": "Reading", "start": 6000, "end": 7800 },
  { "activity": "Study", "start": 9000, "end": 9900 }
]"#;

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

pub fn sample_file(dir: &Path) -> PathBuf {
    write_file(dir, "sample.json", SAMPLE)
}

/// All `.json` files directly inside `dir`.
pub fn json_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
        .collect()
}
