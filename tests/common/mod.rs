#![allow(dead_code)]

use std::path::PathBuf;
use std::rc::Rc;

use assert_cmd::Command;
use cents_core::{alerts::BufferedSink, config::Config, core::Session};
use tempfile::TempDir;

/// A session whose alerts are captured instead of printed.
pub fn buffered_session() -> (Session, Rc<BufferedSink>) {
    let sink = Rc::new(BufferedSink::new());
    let session = Session::new(&Config::default(), sink.clone()).expect("default config is valid");
    (session, sink)
}

/// The shell binary in script mode, with settings isolated under `home`.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cents_cli").expect("binary is built");
    cmd.env("CENTS_CLI_SCRIPT", "1")
        .env("CENTS_CONFIG", config_path(home))
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

pub fn config_path(home: &TempDir) -> PathBuf {
    home.path().join("config.json")
}
