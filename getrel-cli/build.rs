//! Build script for getrel-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("get-relative-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Given a path, print it relative to the current working directory (or a specified path)")
        .long_about(
            "Print PATH relative to the current working directory or to --relative-to. \
             Path segments are compared case-sensitively or case-insensitively; by default \
             the choice is guessed by checking whether the filesystem resolves a \
             differently-cased spelling of the paths to the same entry.",
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Path to express relatively")
                .required(true),
        )
        .arg(
            Arg::new("relative-to")
                .long("relative-to")
                .value_name("PATH")
                .help("Path to use as the root of the relative path (default: current directory)")
                .env("GETREL_RELATIVE_TO"),
        )
        .arg(
            Arg::new("case-sensitive")
                .long("case-sensitive")
                .value_name("WHEN")
                .help("Compare path segments case-sensitively, or guess from the filesystem")
                .value_parser(["true", "false", "guess"])
                .default_value("guess")
                .env("GETREL_CASE_SENSITIVE"),
        )
        .arg(
            Arg::new("always-start-with-dot")
                .long("always-start-with-dot")
                .help("Prefix results that begin with a directory name with ./")
                .action(ArgAction::SetTrue)
                .env("GETREL_ALWAYS_START_WITH_DOT"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("get-relative-path.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
