// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delta preprocessing: what the codec actually compresses.
//!
//! Document-ID lists are sorted, so consecutive IDs cluster. Storing gaps
//! instead of absolutes keeps values small: `[100, 102, 105, 110]` becomes
//! `[100, 2, 3, 5]`, and small values are exactly what a trained dictionary
//! is full of. Frequency lists are already small and unsorted, so they pass
//! through verbatim.
//!
//! Which transform applies is decided once per list by the collection's file
//! extension (`.docs` vs `.freqs`), never per integer. The *universe*, the
//! sum of the transformed values, is computed alongside and recorded in the
//! list header.

use std::path::Path;

use crate::error::{Error, Result};

/// What kind of integers a collection holds, and therefore which transform
/// its lists get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Sorted document IDs; compressed as d-gaps.
    Docs,
    /// Term frequencies; compressed verbatim.
    Freqs,
}

impl ListKind {
    /// Derive the kind from a collection path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("docs") => Ok(ListKind::Docs),
            Some("freqs") => Ok(ListKind::Freqs),
            _ => Err(Error::Format(format!(
                "unsupported collection file extension: {} (expected .docs or .freqs)",
                path.display()
            ))),
        }
    }

    /// True when this kind skips a leading sentinel list (the `.docs`
    /// collection starts with a singleton holding the document count).
    pub fn has_sentinel(self) -> bool {
        matches!(self, ListKind::Docs)
    }
}

/// Transform `input` into `out` (cleared first) and return the universe.
///
/// For [`ListKind::Docs`]: `out[i] = input[i] - prev` with `prev` starting at
/// 0 and tracking `input[i]`, classic d-gap encoding. For
/// [`ListKind::Freqs`]: identity copy. Either way the universe is the sum of
/// the output values.
///
/// A docs list that is not non-decreasing, or a list whose transformed sum
/// overflows u32, is rejected as [`Error::Format`].
pub fn delta_encode(kind: ListKind, input: &[u32], out: &mut Vec<u32>) -> Result<u32> {
    out.clear();
    out.reserve(input.len());

    let mut prev = 0u32;
    let mut universe = 0u64;

    for (i, &value) in input.iter().enumerate() {
        let transformed = match kind {
            ListKind::Docs => {
                let gap = value.checked_sub(prev).ok_or_else(|| {
                    Error::Format(format!(
                        "document list not sorted at position {}: {} after {}",
                        i, value, prev
                    ))
                })?;
                prev = value;
                gap
            }
            ListKind::Freqs => value,
        };
        out.push(transformed);
        universe += u64::from(transformed);
    }

    u32::try_from(universe).map_err(|_| {
        Error::Format(format!(
            "list universe {} overflows u32 ({} values)",
            universe,
            input.len()
        ))
    })
}

/// Compute just the universe of a list, without materializing the
/// transformed buffer. Same validation as [`delta_encode`].
///
/// For docs the gaps telescope, so the universe is simply the last document
/// ID once sortedness is checked.
pub fn universe(kind: ListKind, input: &[u32]) -> Result<u32> {
    match kind {
        ListKind::Docs => {
            for (i, pair) in input.windows(2).enumerate() {
                if pair[1] < pair[0] {
                    return Err(Error::Format(format!(
                        "document list not sorted at position {}: {} after {}",
                        i + 1,
                        pair[1],
                        pair[0]
                    )));
                }
            }
            Ok(input.last().copied().unwrap_or(0))
        }
        ListKind::Freqs => {
            let sum: u64 = input.iter().map(|&v| u64::from(v)).sum();
            u32::try_from(sum).map_err(|_| {
                Error::Format(format!(
                    "list universe {} overflows u32 ({} values)",
                    sum,
                    input.len()
                ))
            })
        }
    }
}

/// Invert [`delta_encode`] in place: prefix sum for docs, no-op for freqs.
pub fn delta_decode(kind: ListKind, buf: &mut [u32]) {
    if kind == ListKind::Freqs {
        return;
    }
    let mut prev = 0u32;
    for value in buf.iter_mut() {
        prev = prev.wrapping_add(*value);
        *value = prev;
    }
}
