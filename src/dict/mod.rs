// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The runtime dictionary: trained integer blocks addressable both ways.
//!
//! A trained dictionary maps fixed-length blocks of u32s (lengths 16, 8, 4,
//! 2, 1) to 16-bit codewords. The decoder asks "what block is codeword c?"
//! millions of times per list, so the decode index is a dense array: sizes in
//! one slab, payloads in another with a fixed 16-slot stride per codeword.
//! One bounds check, two loads, no pointer chasing.
//!
//! The encoder asks the opposite question, "is this block in the dictionary?"
//! That's a hash lookup keyed by exact payload content, one map per block-size
//! class, built once by [`Dictionary::prepare_for_encoding`] and immutable
//! afterwards. Same Vec-plus-reverse-map shape as any dictionary table, just
//! keyed by integer blocks instead of strings.
//!
//! Codeword `0` is reserved as the **literal escape**: it never resolves to a
//! block and instead means "the next raw u32 in the stream is a verbatim
//! value". The loader rejects trained entries that collide with the reserved
//! range, so no assumption about the trainer's codeword layout is needed.

pub mod format;

use std::collections::HashMap;

pub use format::RawEntry;

use crate::error::{Error, Result};

/// Largest block a dictionary entry may hold.
pub const MAX_ENTRY_SIZE: usize = 16;

/// Legal block sizes, in the (descending) order the encoder probes them.
pub const BLOCK_SIZES: [usize; 5] = [16, 8, 4, 2, 1];

/// The literal-escape codeword: next u32 in the stream is a raw value.
pub const ESCAPE: u16 = 0;

/// Codewords below this value are reserved for escapes, never for blocks.
pub const RESERVED_CODEWORDS: u16 = 1;

/// Index of a block size within [`BLOCK_SIZES`].
fn size_class(block_size: usize) -> Option<usize> {
    BLOCK_SIZES.iter().position(|&s| s == block_size)
}

/// Static table mapping integer blocks to codewords, immutable once built.
#[derive(Debug, Default)]
pub struct Dictionary {
    /// Block size per codeword; 0 marks an unassigned codeword.
    sizes: Vec<u8>,
    /// Payload slab, `MAX_ENTRY_SIZE` u32 slots per codeword.
    payloads: Vec<u32>,
    /// First payload word per codeword; the gather fast path indexes this
    /// directly for singleton codewords.
    singles: Vec<u32>,
    /// Payload → codeword, one map per block-size class. Empty until
    /// `prepare_for_encoding`.
    encode_index: Vec<HashMap<Box<[u32]>, u16>>,
    encode_ready: bool,
}

impl Dictionary {
    /// Parse a serialized dictionary file and build the decode index.
    pub fn build(bytes: &[u8]) -> Result<Self> {
        Self::from_entries(format::parse(bytes)?)
    }

    /// Build the decode index from in-memory entries.
    ///
    /// Fails with [`Error::Format`] on a block size outside
    /// {1, 2, 4, 8, 16}, a duplicate codeword, or a codeword inside the
    /// reserved escape range.
    pub fn from_entries(entries: Vec<RawEntry>) -> Result<Self> {
        let num_codewords = entries
            .iter()
            .map(|e| e.codeword as usize + 1)
            .max()
            .unwrap_or(RESERVED_CODEWORDS as usize)
            .max(RESERVED_CODEWORDS as usize);

        let mut sizes = vec![0u8; num_codewords];
        let mut payloads = vec![0u32; num_codewords * MAX_ENTRY_SIZE];
        let mut singles = vec![0u32; num_codewords];

        for entry in &entries {
            let block_size = entry.payload.len();
            if size_class(block_size).is_none() {
                return Err(Error::Format(format!(
                    "dictionary entry for codeword {} has illegal block size {}",
                    entry.codeword, block_size
                )));
            }
            if entry.codeword < RESERVED_CODEWORDS {
                return Err(Error::Format(format!(
                    "codeword {} collides with the reserved escape range 0..{}",
                    entry.codeword, RESERVED_CODEWORDS
                )));
            }
            let slot = entry.codeword as usize;
            if sizes[slot] != 0 {
                return Err(Error::Format(format!(
                    "duplicate codeword {} in dictionary",
                    entry.codeword
                )));
            }

            sizes[slot] = block_size as u8;
            payloads[slot * MAX_ENTRY_SIZE..slot * MAX_ENTRY_SIZE + block_size]
                .copy_from_slice(&entry.payload);
            singles[slot] = entry.payload[0];
        }

        Ok(Self {
            sizes,
            payloads,
            singles,
            encode_index: Vec::new(),
            encode_ready: false,
        })
    }

    /// A dictionary with no trained entries, only the escape codeword.
    /// Every value encodes as a literal; decoding still works.
    pub fn empty() -> Self {
        Self::from_entries(Vec::new()).expect("empty dictionary is always valid")
    }

    /// Build the payload → codeword index from the decode index.
    ///
    /// Idempotent; must be called before [`Dictionary::encode_lookup`].
    pub fn prepare_for_encoding(&mut self) {
        if self.encode_ready {
            return;
        }

        let mut index: Vec<HashMap<Box<[u32]>, u16>> =
            (0..BLOCK_SIZES.len()).map(|_| HashMap::new()).collect();

        for (slot, &size) in self.sizes.iter().enumerate() {
            if size == 0 {
                continue;
            }
            let class = size_class(size as usize).expect("decode index holds only legal sizes");
            let payload = &self.payloads[slot * MAX_ENTRY_SIZE..slot * MAX_ENTRY_SIZE + size as usize];
            index[class].insert(payload.into(), slot as u16);
        }

        self.encode_index = index;
        self.encode_ready = true;
    }

    /// True once `prepare_for_encoding` has run.
    pub fn encode_ready(&self) -> bool {
        self.encode_ready
    }

    /// Number of trained (non-reserved) entries.
    pub fn num_entries(&self) -> usize {
        self.sizes.iter().filter(|&&s| s != 0).count()
    }

    /// Resolve a codeword to its payload block. O(1).
    ///
    /// The escape codeword and unassigned codewords are not blocks; hitting
    /// one here means the stream is corrupt.
    #[inline]
    pub fn decode_lookup(&self, codeword: u16) -> Result<&[u32]> {
        let slot = codeword as usize;
        match self.sizes.get(slot) {
            Some(&size) if size != 0 => {
                Ok(&self.payloads[slot * MAX_ENTRY_SIZE..slot * MAX_ENTRY_SIZE + size as usize])
            }
            _ => Err(Error::CorruptStream(format!(
                "codeword {} not in dictionary",
                codeword
            ))),
        }
    }

    /// Find the longest dictionary block matching a prefix of `values`.
    ///
    /// Probes block sizes in descending order, bounded by `max_len`; returns
    /// the codeword and matched length of the first (largest) exact hit, or
    /// `None` if no size matches and the caller must emit a literal escape.
    #[inline]
    pub fn encode_lookup(&self, values: &[u32], max_len: usize) -> Option<(u16, usize)> {
        debug_assert!(self.encode_ready, "prepare_for_encoding not called");

        for (class, &block_size) in BLOCK_SIZES.iter().enumerate() {
            if block_size > max_len {
                continue;
            }
            if let Some(&codeword) = self.encode_index[class].get(&values[..block_size]) {
                return Some((codeword, block_size));
            }
        }
        None
    }

    /// True if `codeword` resolves to a single-value block.
    #[inline]
    pub fn is_singleton(&self, codeword: u16) -> bool {
        self.sizes.get(codeword as usize) == Some(&1)
    }

    /// Dense first-payload-word table, indexed by codeword. For any codeword
    /// that passes [`Dictionary::is_singleton`], `singles()[codeword]` is the
    /// decoded value.
    #[inline]
    pub fn singles(&self) -> &[u32] {
        &self.singles
    }
}
