// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tree matching and merging
//!
//! Walks a base manifest depth-first looking for the single node whose key
//! and metadata identity match an [`Overlay`] descriptor, and splices the
//! overlay payload over that node. The first match in top-to-bottom,
//! left-to-right order wins; nothing else in the tree is touched.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::{GraftError, Result};
use crate::overlay::{Identity, Overlay};

/// Result of merging an overlay into a base manifest.
#[derive(Debug, Clone)]
pub struct Merged {
    /// The serialized manifest.
    pub text: String,
    /// Whether any node was replaced. A false value is not an error; the
    /// manifest passed through unchanged.
    pub matched: bool,
}

/// Merge an overlay document into a base manifest, both given as YAML text.
///
/// The base must deserialize to a mapping at its root. Returns the
/// serialized result together with whether a node was actually replaced.
pub fn merge_manifest(base_yaml: &str, overlay_yaml: &str) -> Result<Merged> {
    let base: Mapping = serde_yaml::from_str(base_yaml).map_err(|source| GraftError::Parse {
        what: "base document",
        source,
    })?;
    let overlay: Overlay = overlay_yaml.parse()?;

    let mut doc = Value::Mapping(base);
    let matched = apply_overlay(&mut doc, &overlay);
    if !matched {
        warn!(
            target_key = %overlay.target_key(),
            "no resource matched the overlay; manifest unchanged"
        );
    }

    let text = serde_yaml::to_string(&doc).map_err(GraftError::Serialize)?;
    Ok(Merged { text, matched })
}

/// Depth-first search for the overlay's target, replacing the first matching
/// node's value with the overlay payload.
///
/// Returns true as soon as a node has been replaced; callers thread that
/// result upward, which is what stops traversal everywhere after the first
/// match. The match predicate is evaluated on each mapping entry before
/// descending into it, so the children of a matched node are never visited.
pub fn apply_overlay(doc: &mut Value, overlay: &Overlay) -> bool {
    match doc {
        Value::Sequence(items) => items.iter_mut().any(|item| apply_overlay(item, overlay)),
        Value::Mapping(map) => {
            for (key, value) in map.iter_mut() {
                if is_match(key, value, overlay) {
                    debug!(key = %overlay.target_key(), "matched resource, splicing payload");
                    *value = overlay.payload().clone();
                    return true;
                }
                if apply_overlay(value, overlay) {
                    return true;
                }
            }
            false
        }
        Value::Tagged(tagged) => apply_overlay(&mut tagged.value, overlay),
        _ => false,
    }
}

/// Whether a base mapping entry is the node the overlay describes: the key
/// equals the target key, the value is a mapping with a `metadata` entry
/// whose pairs are all plain strings, and the identity triple agrees.
fn is_match(key: &Value, value: &Value, overlay: &Overlay) -> bool {
    if key.as_str() != Some(overlay.target_key()) {
        return false;
    }
    let metadata = match value.get("metadata") {
        Some(metadata) => metadata,
        None => return false,
    };
    // All-or-nothing: one non-string pair disqualifies the candidate,
    // unlike the overlay side which skips bad fields.
    let base_meta = match string_metadata(metadata) {
        Some(base_meta) => base_meta,
        None => return false,
    };
    identity_matches(&base_meta, overlay.identity())
}

fn string_metadata(metadata: &Value) -> Option<BTreeMap<String, String>> {
    serde_yaml::from_value(metadata.clone()).ok()
}

fn identity_matches(base_meta: &BTreeMap<String, String>, identity: &Identity) -> bool {
    let field = |name: &str| base_meta.get(name).map(String::as_str).unwrap_or("");
    field("name") == identity.name
        && field("generateName") == identity.generate_name
        && field("namespace") == identity.namespace
}
