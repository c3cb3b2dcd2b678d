// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy parse: buffer in, codeword stream out.
//!
//! The encoder walks the transformed buffer left to right. At each position
//! it asks the dictionary for the longest block matching the remaining
//! suffix (16, 8, 4, 2, 1, in that order). A hit emits one 16-bit codeword
//! and advances by the block length; a miss emits the escape codeword
//! followed by the raw u32 and advances by one. Greedy is not optimal
//! (taking a size-8 block now can forfeit a size-16 block one position
//! later) but it is a single pass with no backtracking and the loss is small
//! on trained data.

use crate::dict::{Dictionary, ESCAPE, MAX_ENTRY_SIZE};
use crate::error::{Error, Result};

/// Guard shared by the codecs: the buffer must hold exactly `n` values.
pub(super) fn check_length(buf: &[u32], n: u32) -> Result<()> {
    if buf.len() != n as usize {
        return Err(Error::InternalInvariant(format!(
            "encode buffer holds {} values but header says {}",
            buf.len(),
            n
        )));
    }
    Ok(())
}

/// Append the greedy codeword stream for `buf` to `out`.
///
/// Requires a dictionary with its encode index built; callers go through
/// [`Dictionary::prepare_for_encoding`] once at startup.
pub fn encode(dict: &Dictionary, buf: &[u32], n: u32, out: &mut Vec<u8>) -> Result<()> {
    check_length(buf, n)?;
    if !dict.encode_ready() {
        return Err(Error::InternalInvariant(
            "dictionary encode index not built".to_string(),
        ));
    }

    let mut pos = 0;
    while pos < buf.len() {
        let max_len = (buf.len() - pos).min(MAX_ENTRY_SIZE);
        match dict.encode_lookup(&buf[pos..], max_len) {
            Some((codeword, len)) => {
                out.extend_from_slice(&codeword.to_le_bytes());
                pos += len;
            }
            None => {
                out.extend_from_slice(&ESCAPE.to_le_bytes());
                out.extend_from_slice(&buf[pos].to_le_bytes());
                pos += 1;
            }
        }
    }
    Ok(())
}
