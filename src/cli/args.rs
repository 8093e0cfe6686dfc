// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

/// Graft - splice a resource overlay into a multi-resource YAML manifest
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(
    version,
    about = "Splice a resource overlay into a multi-resource YAML manifest"
)]
pub struct Cli {
    /// Path to the base manifest
    pub base: PathBuf,

    /// Path to the overlay document
    pub overlay: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
