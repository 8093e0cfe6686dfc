// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Graft - splice a resource overlay into a multi-resource YAML manifest
//!
//! Entry point for the graft CLI.

use clap::Parser;

use graft::cli::Cli;
use graft::commands;

fn main() {
    let cli = Cli::parse();

    // Default to warnings only. `-v` enables crate diagnostics without
    // requiring users to know target names up front; `RUST_LOG` still takes
    // precedence. Logs go to stderr since stdout carries the manifest.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if cli.verbose > 0 {
        if let Ok(directive) = "graft=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::run(&cli) {
        eprintln!("graft: {}", err);
        std::process::exit(1);
    }
}
