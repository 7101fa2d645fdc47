use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("job_board_settings_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_point_at_local_payload() {
    let settings = Settings::default();
    assert_eq!(settings.data_source, "./upwork_jobs.json");
    assert_eq!(settings.window_title, "Job Board");
}

#[test]
fn settings_file_overrides_defaults() {
    let path = temp_settings_file(
        "data_source = \"https://jobs.example.com/upwork_jobs.json\"\nunknown_key = 3\n",
    );

    let mut settings = Settings::default();
    load_settings_file(&path)
        .expect("parse")
        .expect("present")
        .apply(&mut settings);

    assert_eq!(
        settings.data_source,
        "https://jobs.example.com/upwork_jobs.json"
    );
    assert_eq!(settings.window_title, "Job Board");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let path = env::temp_dir().join("job_board_settings_does_not_exist.toml");
    assert!(load_settings_file(&path).expect("missing is fine").is_none());
}

#[test]
fn unparsable_settings_file_is_an_error() {
    let path = temp_settings_file("data_source = [");
    let err = load_settings_file(&path).expect_err("broken toml");
    assert!(format!("{err:#}").contains("failed to parse"));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn environment_wins_over_file_and_ignores_blank_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("JOB_BOARD_DATA_SOURCE", "/srv/jobs.json"),
        ("APP__DATA_SOURCE", "  "),
        ("JOB_BOARD_WINDOW_TITLE", "Upwork Jobs"),
    ]);

    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));

    assert_eq!(settings.data_source, "/srv/jobs.json");
    assert_eq!(settings.window_title, "Upwork Jobs");
}

#[test]
fn prefixed_variable_takes_precedence() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("JOB_BOARD_DATA_SOURCE", "/srv/jobs.json"),
        ("APP__DATA_SOURCE", "http://127.0.0.1:8000/upwork_jobs.json"),
    ]);

    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));

    assert_eq!(
        settings.data_source,
        "http://127.0.0.1:8000/upwork_jobs.json"
    );
}
