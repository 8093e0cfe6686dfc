// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Merge command orchestration
//!
//! Reads the base and overlay documents from disk, runs the merge, and
//! writes the result to stdout. The merged manifest is fully rendered
//! before the first byte is written, so a failing invocation produces no
//! partial output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::error::{GraftError, Result};
use crate::merge::{self, Merged};

/// Execute the merge described by the CLI arguments, writing the merged
/// manifest to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let merged = render(cli)?;

    let mut stdout = io::stdout();
    stdout.write_all(merged.text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Read both documents and produce the merged manifest.
pub fn render(cli: &Cli) -> Result<Merged> {
    let base = read_document(&cli.base)?;
    let overlay = read_document(&cli.overlay)?;
    merge::merge_manifest(&base, &overlay)
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GraftError::Read {
        path: path.to_path_buf(),
        source,
    })
}
