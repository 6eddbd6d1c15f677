use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use seabattle::{Settings, DEFAULT_BOARD_SIZE};

fn settings_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabattle-bin-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    let _ = fs::remove_file(&path);
    path
}

fn seabattle(settings: &PathBuf, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .arg("--settings")
        .arg(settings)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run seabattle binary")
}

#[test]
fn play_size_does_not_change_saved_default() {
    let path = settings_path("play");
    let args = ["play", "--size", "12", "--auto", "--seed", "3", "--pause-ms", "0"];
    let output = seabattle(&path, &args);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // stdin is empty, so the game is abandoned at the first prompt
    assert!(stdout.contains("Game abandoned."));
    assert!(stdout.contains("    A B C D E F G H I J K L\n"));
    assert_eq!(Settings::load(&path).board_size, DEFAULT_BOARD_SIZE);
}

#[test]
fn settings_size_is_saved() {
    let path = settings_path("settings");
    let output = seabattle(&path, &["settings", "--size", "12"]);
    assert!(output.status.success());
    assert_eq!(Settings::load(&path).board_size, 12);

    let output = seabattle(&path, &["settings"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Board size: 12"));
}

#[test]
fn play_rejects_out_of_range_size() {
    let path = settings_path("range");
    let output = seabattle(&path, &["play", "--size", "20"]);
    assert!(!output.status.success());
}
