// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary-based compression for inverted index posting lists.
//!
//! This crate compresses sorted document-ID lists and their frequency lists
//! with a trained dictionary: frequent fixed-length blocks of integers (16,
//! 8, 4, 2 or 1 wide) map to 16-bit codewords, values outside the dictionary
//! fall back to a literal escape. A greedy longest-match encoder produces
//! the stream; decoding is one table lookup per codeword, with an AVX2
//! gather fast path for runs of singleton codewords.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ collection.rs│────▶│ transform.rs │────▶│   codec/     │
//! │ ([len][vals] │     │ (d-gaps for  │     │ (greedy enc, │
//! │   framing)   │     │  .docs)      │     │  gather dec) │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!        ┌──────────────┐     ┌──────────────┐     │
//!        │   dict/      │◀────│  registry.rs │◀────┘
//!        │ (codeword ⇄  │     │ (name → dyn  │
//!        │  block maps) │     │    Codec)    │
//!        └──────────────┘     └──────────────┘
//!
//! tools.rs drives encoding end to end; verify.rs decodes everything back
//! and diffs it against the source, value by value.
//! ```
//!
//! # Stream layout
//!
//! Each encoded list is an 8-byte [`header::Header`] (`n`, `universe`,
//! little-endian u32s) followed by its codeword stream; lists are
//! concatenated with no other framing. Codeword `0` escapes to a raw
//! little-endian u32.
//!
//! # Usage
//!
//! ```ignore
//! use dint::codec::GreedyDict;
//! use dint::dict::Dictionary;
//!
//! let mut dict = Dictionary::build(&std::fs::read("trained.dict")?)?;
//! dict.prepare_for_encoding();
//!
//! let mut stream = Vec::new();
//! dint::codec::encode(&dict, &gaps, gaps.len() as u32, &mut stream)?;
//! ```

pub mod codec;
pub mod collection;
pub mod dict;
pub mod error;
pub mod header;
pub mod logger;
pub mod registry;
pub mod tools;
pub mod transform;
pub mod verify;

pub use codec::{Codec, GreedyDict, Literal};
pub use dict::Dictionary;
pub use error::{Error, Result};
pub use header::Header;
pub use registry::CodecRegistry;
