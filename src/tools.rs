// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The encode driver: collection in, concatenated codeword streams out.
//!
//! Walks every list in a collection through the delta transform and the
//! chosen codec, prefixing each with its 8-byte header. A `.docs` collection
//! starts with a sentinel singleton carrying the document count; the driver
//! skips it, and [`crate::verify`] skips it the same way, so the two sides
//! always agree on which lists exist. Lists at or under
//! [`MIN_LIST_LEN`](crate::collection::MIN_LIST_LEN) are skipped on both
//! sides too.

use crate::codec::Codec;
use crate::collection::{Collection, MIN_LIST_LEN};
use crate::dict::Dictionary;
use crate::error::Result;
use crate::header::Header;
use crate::logger::Reporter;
use crate::transform::{delta_encode, ListKind};

/// How often the driver emits a progress line, in lists.
const PROGRESS_INTERVAL: u64 = 1000;

/// Counters accumulated over one encoding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// Lists encoded (sentinel and skipped lists excluded).
    pub lists: u64,
    /// Integers encoded across all lists.
    pub ints: u64,
    /// Stream bytes produced, headers included.
    pub bytes: u64,
}

/// Encode every eligible list of `collection` into `out`.
///
/// Output is `[header][codewords]` per list, back to back, in collection
/// order. Returns the run's counters; the caller owns writing `out` to disk.
pub fn encode_collection(
    codec: &dyn Codec,
    dict: &Dictionary,
    collection: &Collection,
    kind: ListKind,
    reporter: &dyn Reporter,
    out: &mut Vec<u8>,
) -> Result<EncodeStats> {
    let mut stats = EncodeStats::default();
    let mut transformed = Vec::new();

    for (sequence, list) in collection.iter().enumerate() {
        let list = list?;
        if sequence == 0 && kind.has_sentinel() {
            continue;
        }
        if list.len() <= MIN_LIST_LEN {
            continue;
        }

        let universe = delta_encode(kind, list, &mut transformed)?;
        let n = transformed.len() as u32;

        let before = out.len();
        Header { n, universe }.write(out);
        codec.encode(dict, &transformed, n, out)?;

        stats.lists += 1;
        stats.ints += u64::from(n);
        stats.bytes += (out.len() - before) as u64;

        if stats.lists % PROGRESS_INTERVAL == 0 {
            reporter.progress(stats.lists, stats.ints, stats.bytes);
        }
    }

    reporter.progress(stats.lists, stats.ints, stats.bytes);
    Ok(stats)
}
