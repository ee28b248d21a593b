#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use spawnboard::models::schedule::{ScheduleRow, WeekdayMarker};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Thursday. Weekday index 4: 「四」 in zh, 「木」 in ja.
pub const THURSDAY: &str = "2026-10-15";

/// Binary under test, with its config dir pinned inside the temp dir so no
/// test ever reads or writes the real home directory.
pub fn sb() -> Command {
    let mut cmd = cargo_bin_cmd!("spawnboard");
    let mut home = env::temp_dir();
    home.push("spawnboard_test_home");
    cmd.env("SPAWNBOARD_HOME", home);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_spawnboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a schedule CSV into the temp dir and return its path
pub fn write_schedule(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedule.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write schedule");
    p
}

/// Path in the temp dir that is guaranteed not to exist
pub fn missing_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_does_not_exist.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small week: Thursday has gishiki rows at 14:00, 15:00, 16:00, 18:00,
/// a mizuki row at 14:02, nothing for shirao. Wednesday has one row per type.
pub const SAMPLE_CSV: &str = "\
Week-zh,Week-jp,gishiki-time,gishiki-zh,gishiki-jp,mizuki-time,mizuki-zh,mizuki-jp,shirao-time,shirao-zh,shirao-jp
四,木,14:00,南方神殿,南の神殿,14:02,水月湖畔,水月の湖畔,,,
四,木,15:00,北方森林,北の森,,,,,,
四,木,16:00,東方港口,東の港,,,,,,
四,木,18:00,西方沙漠,西の砂漠,,,,,,
三,水,14:00,週三儀式,水曜儀式,14:00,週三水月,水曜水月,14:00,週三白青,水曜白青
";

/// Build a row for `task` on `weekday` (0 = Sunday), marked in both locales.
pub fn row(weekday: u32, task: &str, time: &str) -> ScheduleRow {
    ScheduleRow {
        weekday: WeekdayMarker {
            zh: Some(weekday),
            ja: Some(weekday),
        },
        task: task.to_string(),
        time: time.to_string(),
        label_zh: format!("{task} {time} zh"),
        label_ja: format!("{task} {time} ja"),
    }
}

pub fn at(s: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}
