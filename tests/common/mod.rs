use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated `HOME` whose config writes charts into a temp dir and never opens a viewer.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub charts: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(extra_top_level: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let charts = tmp.path().join("charts");
        let config_dir = home.join(".config/syracuse");
        fs::create_dir_all(&config_dir).expect("create config dir");

        let config = format!(
            "{}\n[chart]\nshow = false\noutput_dir = {:?}\n",
            extra_top_level,
            charts.to_str().expect("charts path utf8")
        );
        fs::write(config_dir.join("config.toml"), config).expect("write config");

        Self {
            _tmp: tmp,
            home,
            charts,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("syracuse");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
