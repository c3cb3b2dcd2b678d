// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The codec layer: greedy dictionary encoding and its decoders.
//!
//! A codec turns a transformed integer buffer into a codeword byte stream and
//! back. The interesting one is [`GreedyDict`], which parses the buffer
//! left-to-right against the dictionary, always taking the largest matching
//! block. [`Literal`] is the degenerate baseline where every value becomes an
//! escape, useful for measuring what the dictionary buys and for running the
//! pipeline without a trained dictionary at all.
//!
//! Codecs are object-safe so the registry can hand them out by name at
//! runtime.

mod decoder;
mod encoder;
pub mod simd;

pub use decoder::decode;
pub use encoder::encode;

use crate::dict::{Dictionary, ESCAPE};
use crate::error::Result;

/// An encoder/decoder pair over transformed integer buffers.
///
/// `encode` appends the codeword stream for one list to `out`; `decode`
/// fills `out[..n]` and returns the number of stream bytes consumed, so
/// concatenated lists can be walked without any inter-list framing.
pub trait Codec: Send + Sync {
    /// Registry name of this codec.
    fn name(&self) -> &'static str;

    /// Whether a trained dictionary file is required to use this codec.
    fn needs_dictionary(&self) -> bool {
        true
    }

    /// Encode the `n`-element buffer into `out`.
    fn encode(&self, dict: &Dictionary, buf: &[u32], n: u32, out: &mut Vec<u8>) -> Result<()>;

    /// Decode `n` values from the front of `bytes` into `out[..n]`,
    /// returning the number of bytes consumed.
    fn decode(&self, dict: &Dictionary, bytes: &[u8], n: u32, out: &mut [u32]) -> Result<usize>;
}

/// Greedy longest-match-first dictionary codec.
#[derive(Debug, Default)]
pub struct GreedyDict;

impl Codec for GreedyDict {
    fn name(&self) -> &'static str {
        "dint"
    }

    fn encode(&self, dict: &Dictionary, buf: &[u32], n: u32, out: &mut Vec<u8>) -> Result<()> {
        encoder::encode(dict, buf, n, out)
    }

    fn decode(&self, dict: &Dictionary, bytes: &[u8], n: u32, out: &mut [u32]) -> Result<usize> {
        decoder::decode(dict, bytes, n, out)
    }
}

/// Escape-only baseline: every integer is stored as a literal.
#[derive(Debug, Default)]
pub struct Literal;

impl Codec for Literal {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn needs_dictionary(&self) -> bool {
        false
    }

    fn encode(&self, _dict: &Dictionary, buf: &[u32], n: u32, out: &mut Vec<u8>) -> Result<()> {
        encoder::check_length(buf, n)?;
        for &value in buf {
            out.extend_from_slice(&ESCAPE.to_le_bytes());
            out.extend_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    fn decode(&self, dict: &Dictionary, bytes: &[u8], n: u32, out: &mut [u32]) -> Result<usize> {
        // An escape-only stream exercises just the literal arm of the shared
        // state machine.
        decoder::decode(dict, bytes, n, out)
    }
}
