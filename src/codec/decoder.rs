// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Codeword stream decoding, scalar path plus the vectorized dispatch.
//!
//! The scalar loop is a two-state machine: read a u16 codeword; if it is the
//! escape, the next four bytes are a raw literal, otherwise the dictionary
//! payload is copied out. On trained posting data most codewords resolve to
//! singleton blocks, so before falling back to the scalar loop the decoder
//! peeks at the next eight codewords: if all eight are singletons, the whole
//! window is resolved with one gather through the dictionary's dense
//! singleton table (see [`super::simd`]). Eight singletons write eight
//! contiguous outputs, so the fast path needs no scatter.
//!
//! Every structural violation (stream ending mid-codeword, mid-literal, a
//! codeword the dictionary does not know, a block overrunning the declared
//! list length) is [`Error::CorruptStream`]. The decoder never reads past
//! the bytes it reports consumed.

use crate::dict::Dictionary;
use crate::error::{Error, Result};

use super::simd;

/// Decode `n` values from the front of `bytes` into `out[..n]`.
///
/// Returns the number of stream bytes consumed so the caller can advance to
/// the next concatenated list. `out` must hold at least `n` slots.
pub fn decode(dict: &Dictionary, bytes: &[u8], n: u32, out: &mut [u32]) -> Result<usize> {
    let n = n as usize;
    if out.len() < n {
        return Err(Error::InternalInvariant(format!(
            "decode output buffer holds {} slots, list needs {}",
            out.len(),
            n
        )));
    }

    let mut pos = 0;
    let mut filled = 0;

    while filled < n {
        // Fast path: a full window of singleton codewords decodes in one
        // gather. Windows containing escapes or multi-value blocks fall
        // through to the scalar arm below.
        if n - filled >= simd::LANES {
            if let Some(window) = singleton_window(dict, &bytes[pos..]) {
                let lanes: &mut [u32; simd::LANES] = (&mut out[filled..filled + simd::LANES])
                    .try_into()
                    .expect("window slice is exactly LANES wide");
                simd::gather_singletons(dict.singles(), &window, lanes);
                pos += simd::LANES * 2;
                filled += simd::LANES;
                continue;
            }
        }

        let codeword = read_codeword(bytes, pos, filled)?;
        pos += 2;

        if codeword == crate::dict::ESCAPE {
            if pos + 4 > bytes.len() {
                return Err(Error::CorruptStream(format!(
                    "stream ends inside a literal after {} of {} values",
                    filled, n
                )));
            }
            out[filled] = u32::from_le_bytes([
                bytes[pos],
                bytes[pos + 1],
                bytes[pos + 2],
                bytes[pos + 3],
            ]);
            pos += 4;
            filled += 1;
        } else {
            let block = dict.decode_lookup(codeword)?;
            if filled + block.len() > n {
                return Err(Error::CorruptStream(format!(
                    "codeword {} decodes {} values but only {} remain in the list",
                    codeword,
                    block.len(),
                    n - filled
                )));
            }
            out[filled..filled + block.len()].copy_from_slice(block);
            filled += block.len();
        }
    }

    Ok(pos)
}

/// Read the codeword at `pos`, or report a stream truncated mid-list.
#[inline]
fn read_codeword(bytes: &[u8], pos: usize, filled: usize) -> Result<u16> {
    if pos + 2 > bytes.len() {
        return Err(Error::CorruptStream(format!(
            "stream ends inside a codeword after {} values",
            filled
        )));
    }
    Ok(u16::from_le_bytes([bytes[pos], bytes[pos + 1]]))
}

/// Peek the next [`simd::LANES`] codewords; `Some` only if every one of them
/// resolves to a singleton block.
#[inline]
fn singleton_window(dict: &Dictionary, bytes: &[u8]) -> Option<[u16; simd::LANES]> {
    if bytes.len() < simd::LANES * 2 {
        return None;
    }
    let mut window = [0u16; simd::LANES];
    for (lane, slot) in window.iter_mut().enumerate() {
        let codeword = u16::from_le_bytes([bytes[lane * 2], bytes[lane * 2 + 1]]);
        if !dict.is_singleton(codeword) {
            return None;
        }
        *slot = codeword;
    }
    Some(window)
}
