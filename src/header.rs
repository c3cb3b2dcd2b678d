// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-list framing: a fixed 8-byte header in front of each codeword stream.
//!
//! Two little-endian u32s: `n`, the number of integers in the list after the
//! delta transform, and `universe`, the sum of the transformed values. The
//! decoder needs `n` to know when to stop; consumers use `universe` to size
//! buffers and as a cheap corruption check. No varints, no optional fields;
//! lists are concatenated back to back and the header is the only framing.

use crate::error::{Error, Result};

/// Fixed-size record written before every encoded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Count of integers in the transformed list.
    pub n: u32,
    /// Sum of the transformed values (d-gaps or frequencies).
    pub universe: u32,
}

impl Header {
    /// 4 bytes `n` + 4 bytes `universe`.
    pub const SIZE: usize = 8;

    /// Append the 8-byte record to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.n.to_le_bytes());
        out.extend_from_slice(&self.universe.to_le_bytes());
    }

    /// Consume exactly 8 bytes from the front of `bytes` and return the
    /// header plus the remaining suffix.
    pub fn read(bytes: &[u8]) -> Result<(Self, &[u8])> {
        if bytes.len() < Self::SIZE {
            return Err(Error::CorruptStream(format!(
                "stream too short for list header: {} bytes (need {})",
                bytes.len(),
                Self::SIZE
            )));
        }

        let n = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let universe = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

        Ok((Self { n, universe }, &bytes[Self::SIZE..]))
    }
}
