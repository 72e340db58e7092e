use assert_cmd::Command;

fn nowplaying(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nowplaying"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("APPDATA", config_home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_show_prints_defaults() {
    let home = tempfile::tempdir().unwrap();
    let output = nowplaying(home.path())
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[logging]"));
    assert!(stdout.contains(r#"filter = "info""#));
}

#[test]
fn rejects_zero_window_handle() {
    let home = tempfile::tempdir().unwrap();
    nowplaying(home.path())
        .args(["publish", "--title", "x", "--window", "0"])
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_writes_file_once() {
    let home = tempfile::tempdir().unwrap();
    nowplaying(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(
        home.path()
            .join("now-playing-bridge")
            .join("config.toml")
            .exists()
    );

    let output = nowplaying(home.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert!(String::from_utf8(output.stdout).unwrap().contains("already exists"));
}

#[cfg(target_os = "linux")]
#[test]
fn broken_config_still_allows_config_commands() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("now-playing-bridge");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[logging\n").unwrap();

    let output = nowplaying(home.path())
        .args(["config", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("config.toml"));

    let output = nowplaying(home.path())
        .args(["config", "show"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid config"));
    assert!(stderr.contains("parse"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn publish_fails_without_transport_controls() {
    let home = tempfile::tempdir().unwrap();
    let output = nowplaying(home.path())
        .args(["publish", "--title", "Strange Fruit", "--artist", "Billie Holiday"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Media platform unavailable"));
}
