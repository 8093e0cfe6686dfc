// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Overlay descriptor construction
//!
//! Parses an overlay document into the searchable descriptor used to locate
//! the patch site in a base manifest: the top-level key to look for, the
//! metadata identity that must match at that key, and the payload that
//! replaces the matched node.

use std::str::FromStr;

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::{GraftError, Result};

/// The metadata triple that disambiguates which node to patch.
///
/// Fields missing from the overlay's metadata (or carrying non-string
/// values) are stored as empty strings, so an overlay without metadata
/// matches only base nodes whose own triple is likewise empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub generate_name: String,
    pub namespace: String,
}

impl Identity {
    /// Extract the triple from a metadata value, keeping only plain string
    /// fields. Non-string values read as absent rather than failing the
    /// overlay.
    fn from_metadata(metadata: &Value) -> Self {
        Identity {
            name: string_field(metadata, "name"),
            generate_name: string_field(metadata, "generateName"),
            namespace: string_field(metadata, "namespace"),
        }
    }
}

fn string_field(metadata: &Value, field: &str) -> String {
    metadata
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A parsed overlay document.
#[derive(Debug, Clone)]
pub struct Overlay {
    target_key: String,
    identity: Identity,
    payload: Value,
}

impl Overlay {
    /// The top-level key of the overlay, matched against base mapping keys.
    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    /// The metadata triple a base candidate must carry.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The value spliced into the base on a match.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

impl FromStr for Overlay {
    type Err = GraftError;

    fn from_str(text: &str) -> Result<Self> {
        let root: Mapping = serde_yaml::from_str(text).map_err(|source| GraftError::Parse {
            what: "overlay document",
            source,
        })?;

        if root.len() > 1 {
            warn!(
                keys = root.len(),
                "overlay has multiple top-level keys; using the first"
            );
        }

        let (key, payload) = root
            .iter()
            .next()
            .ok_or_else(|| GraftError::MalformedOverlay("document has no top-level key".into()))?;

        let target_key = key
            .as_str()
            .ok_or_else(|| GraftError::MalformedOverlay("top-level key must be a string".into()))?
            .to_string();

        if !payload.is_mapping() {
            return Err(GraftError::MalformedOverlay(format!(
                "value under `{}` must be a mapping carrying object metadata",
                target_key
            )));
        }

        // A missing metadata entry (or one that is not a mapping) is not an
        // error; the identity is simply empty.
        let identity = payload
            .get("metadata")
            .map(Identity::from_metadata)
            .unwrap_or_default();

        debug!(target_key = %target_key, identity = ?identity, "built overlay descriptor");

        Ok(Overlay {
            target_key,
            identity,
            payload: payload.clone(),
        })
    }
}
