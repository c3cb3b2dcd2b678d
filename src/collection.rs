// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input collections: flat files of length-prefixed u32 sequences.
//!
//! The on-disk layout is the standard inverted-index interchange format:
//! every 32-bit word is little-endian, and each list is `[len][len values]`
//! with no other framing, lists packed back to back until the file ends. The
//! whole file is read into memory once and iterated as borrowed slices; at
//! posting-list scale the working set is the file, so there is nothing to
//! stream.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Lists shorter than or equal to this are skipped by the drivers.
pub const MIN_LIST_LEN: usize = 0;

/// An in-memory collection of u32 lists, parsed lazily during iteration.
#[derive(Debug)]
pub struct Collection {
    words: Vec<u32>,
}

impl Collection {
    /// Read a collection file into memory.
    ///
    /// Only the coarsest shape is validated here (the byte length must be a
    /// multiple of 4); list framing is checked as [`Collection::iter`] walks
    /// the words.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        if bytes.len() % 4 != 0 {
            return Err(Error::Format(format!(
                "collection {} is {} bytes, not a multiple of 4",
                path.display(),
                bytes.len()
            )));
        }

        let words = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { words })
    }

    /// Build a collection from raw words, framing included. Test seam.
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Iterate the lists in file order.
    pub fn iter(&self) -> Lists<'_> {
        Lists {
            words: &self.words,
            sequence: 0,
        }
    }

    /// Total number of 32-bit words, framing included.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }
}

/// Iterator over the lists of a [`Collection`].
///
/// Yields `Err` once and then stops if a length prefix claims more words
/// than the file has left.
#[derive(Debug)]
pub struct Lists<'a> {
    words: &'a [u32],
    sequence: usize,
}

impl<'a> Iterator for Lists<'a> {
    type Item = Result<&'a [u32]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.words.is_empty() {
            return None;
        }

        let n = self.words[0] as usize;
        if 1 + n > self.words.len() {
            let err = Error::Format(format!(
                "list {} claims {} values but only {} words remain",
                self.sequence,
                n,
                self.words.len() - 1
            ));
            self.words = &[];
            return Some(Err(err));
        }

        let list = &self.words[1..1 + n];
        self.words = &self.words[1 + n..];
        self.sequence += 1;
        Some(Ok(list))
    }
}

/// Frame lists into collection bytes. The inverse of [`Collection::open`],
/// used by tests and fixtures.
pub fn serialize_lists(lists: &[Vec<u32>]) -> Vec<u8> {
    let mut out = Vec::new();
    for list in lists {
        out.extend_from_slice(&(list.len() as u32).to_le_bytes());
        for &value in list {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
    out
}
