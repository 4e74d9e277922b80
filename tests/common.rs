#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn rpg() -> Command {
    cargo_bin_cmd!("rpegel")
}
