#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecast")
}

/// Create a unique temp file path and remove any leftover file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecast.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `json` into a fresh entries file and return its path
pub fn write_entries(name: &str, json: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, json).expect("write entries file");
    path
}

/// Config path that does not exist: the binary falls back to defaults
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

/// One closed work session on `date`, as the front-end stores it
pub fn work_day(id: &str, date: &str, clock_in: &str, clock_out: &str, brk: Option<(&str, &str)>) -> String {
    let (bs, be) = match brk {
        Some((s, e)) => (format!("\"{s}\""), format!("\"{e}\"")),
        None => ("null".to_string(), "null".to_string()),
    };
    format!(
        r#"{{"id":"{id}","date":"{date}","type":"work","notes":"",
            "sessions":[{{"id":"{id}-s","clockIn":"{clock_in}","clockOut":"{clock_out}","breakStart":{bs},"breakEnd":{be}}}]}}"#
    )
}

pub fn json_array(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}
