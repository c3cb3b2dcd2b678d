// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serialized dictionary file: parsing and writing.
//!
//! The dictionary is produced offline by a training tool and consumed here at
//! process start, so the format favors trivial validation over cleverness.
//! Fixed header, flat entry list, CRC32 footer. If the footer is wrong,
//! something got corrupted or truncated. Don't trust the data.
//!
//! # Wire Format (v1)
//!
//! ```text
//! magic:    "DINT" (4 bytes)
//! version:  u8 = 1
//! reserved: u8 = 0
//! count:    u32 LE (number of entries)
//! entries:  count ×
//!   codeword:   u16 LE
//!   block_size: u8  (one of 1, 2, 4, 8, 16)
//!   payload:    block_size × u32 LE
//! footer:   crc32 u32 LE over everything above, then "TNID"
//! ```
//!
//! Structural framing (magic, truncation, CRC) is checked here; semantic
//! validation of the entries (duplicate codewords, reserved-range collisions,
//! legal block sizes) happens in [`Dictionary::from_entries`] so that
//! dictionaries built in memory go through the same checks.
//!
//! [`Dictionary::from_entries`]: super::Dictionary::from_entries

use crc32fast::Hasher as Crc32Hasher;

use crate::error::{Error, Result};

/// Magic bytes at the start of a dictionary file.
pub const MAGIC: [u8; 4] = *b"DINT";

/// Footer magic (header magic reversed, marks a complete file).
pub const FOOTER_MAGIC: [u8; 4] = *b"TNID";

/// Current dictionary file version.
pub const VERSION: u8 = 1;

/// magic + version + reserved + count
const HEADER_SIZE: usize = 4 + 1 + 1 + 4;

/// crc32 + footer magic
const FOOTER_SIZE: usize = 4 + 4;

/// One `(codeword, block)` pair as stored in the file, before any semantic
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub codeword: u16,
    pub payload: Vec<u32>,
}

/// Serialize entries into the v1 file format, footer included.
///
/// The exact inverse of [`parse`]; used by tests and by training tools that
/// link this crate to emit dictionaries.
pub fn serialize(entries: &[RawEntry]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + entries.len() * 16 + FOOTER_SIZE);

    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);
    buf.push(0); // reserved
    buf.extend_from_slice(&(entries.len() as u32).to_le_bytes());

    for entry in entries {
        buf.extend_from_slice(&entry.codeword.to_le_bytes());
        buf.push(entry.payload.len() as u8);
        for &value in &entry.payload {
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }

    let crc32 = compute_crc32(&buf);
    buf.extend_from_slice(&crc32.to_le_bytes());
    buf.extend_from_slice(&FOOTER_MAGIC);
    buf
}

/// Parse a dictionary file into raw entries.
///
/// Validates framing only: magic, version, CRC32, and that every entry is
/// complete. Returns [`Error::Format`] on any violation.
pub fn parse(bytes: &[u8]) -> Result<Vec<RawEntry>> {
    if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
        return Err(Error::Format(format!(
            "dictionary file too small: {} bytes (minimum {})",
            bytes.len(),
            HEADER_SIZE + FOOTER_SIZE
        )));
    }

    // Footer first: a bad CRC makes every other field suspect.
    let footer_start = bytes.len() - FOOTER_SIZE;
    if bytes[footer_start + 4..] != FOOTER_MAGIC {
        return Err(Error::Format(
            "dictionary file missing footer magic (truncated?)".to_string(),
        ));
    }
    let stored_crc32 = u32::from_le_bytes([
        bytes[footer_start],
        bytes[footer_start + 1],
        bytes[footer_start + 2],
        bytes[footer_start + 3],
    ]);
    let computed_crc32 = compute_crc32(&bytes[..footer_start]);
    if stored_crc32 != computed_crc32 {
        return Err(Error::Format(format!(
            "dictionary CRC32 mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc32, computed_crc32
        )));
    }

    if bytes[0..4] != MAGIC {
        return Err(Error::Format(format!(
            "invalid dictionary magic: expected DINT, got {:?}",
            &bytes[0..4]
        )));
    }
    let version = bytes[4];
    if version != VERSION {
        return Err(Error::Format(format!(
            "unsupported dictionary version: {} (expected {})",
            version, VERSION
        )));
    }

    let count = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) as usize;
    if count > u16::MAX as usize + 1 {
        return Err(Error::Format(format!(
            "dictionary claims {} entries, more than the codeword space holds",
            count
        )));
    }

    let content = &bytes[..footer_start];
    let mut pos = HEADER_SIZE;
    let mut entries = Vec::with_capacity(count);

    for i in 0..count {
        // codeword (2) + block_size (1)
        if pos + 3 > content.len() {
            return Err(Error::Format(format!("truncated dictionary entry {}", i)));
        }
        let codeword = u16::from_le_bytes([content[pos], content[pos + 1]]);
        let block_size = content[pos + 2] as usize;
        pos += 3;

        let payload_bytes = block_size * 4;
        if pos + payload_bytes > content.len() {
            return Err(Error::Format(format!(
                "truncated payload for dictionary entry {} (codeword {})",
                i, codeword
            )));
        }

        let mut payload = Vec::with_capacity(block_size);
        for w in 0..block_size {
            let at = pos + w * 4;
            payload.push(u32::from_le_bytes([
                content[at],
                content[at + 1],
                content[at + 2],
                content[at + 3],
            ]));
        }
        pos += payload_bytes;

        entries.push(RawEntry { codeword, payload });
    }

    if pos != content.len() {
        return Err(Error::Format(format!(
            "{} trailing bytes after {} dictionary entries",
            content.len() - pos,
            count
        )));
    }

    Ok(entries)
}

fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
