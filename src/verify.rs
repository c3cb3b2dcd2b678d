// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-fidelity verification of an encoded stream against its source.
//!
//! Walks the original collection and the encoded stream in lock step: for
//! every eligible source list, read a header, decode, invert the delta
//! transform, and compare value by value. Disagreements in list length,
//! universe, or individual values are *defects*: they are collected and
//! reported, and the walk continues, because a verifier that stops at the
//! first bad value cannot tell one flipped bit from a truncated file.
//! Structural damage (a header or codeword stream that cannot be walked at
//! all) makes resync impossible, so the walk stops there, but everything
//! found up to that point survives in the report alongside the abort reason.
//!
//! The decode buffer is reused across lists and zeroed past the list length
//! before each decode, so a decoder that under-fills its output cannot be
//! masked by values left over from the previous list.

use crate::codec::Codec;
use crate::collection::{Collection, MIN_LIST_LEN};
use crate::dict::{Dictionary, MAX_ENTRY_SIZE};
use crate::error::Result;
use crate::header::Header;
use crate::logger::Reporter;
use crate::transform::{delta_decode, universe, ListKind};

/// Upper bound on a plausible header list length. Anything larger means the
/// stream and the walk have lost sync.
pub const MAX_LIST_LEN: u32 = 50_000_000;

/// Defects stop being recorded (but keep being counted) past this many.
const MAX_RECORDED_DEFECTS: usize = 100;

/// One disagreement between the source collection and the decoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// Header `n` does not match the source list length.
    Length {
        sequence: u64,
        expected: u32,
        got: u32,
    },
    /// Header universe does not match the transformed source sum.
    Universe {
        sequence: u64,
        expected: u32,
        got: u32,
    },
    /// A decoded value differs from the source.
    Value {
        sequence: u64,
        position: u32,
        expected: u32,
        got: u32,
    },
}

/// Outcome of one verification run.
#[derive(Debug, Default)]
pub struct VerifyReport {
    /// Lists checked.
    pub lists: u64,
    /// Integers compared.
    pub ints: u64,
    /// Total defects found (may exceed `defects.len()` when capped).
    pub num_defects: u64,
    /// The first [`MAX_RECORDED_DEFECTS`] defects, in stream order.
    pub defects: Vec<Defect>,
    /// Why the walk stopped early, if the stream structure broke down.
    /// Lists after the abort point were not checked.
    pub aborted: Option<String>,
}

impl VerifyReport {
    /// True when the stream decoded back to the source exactly.
    pub fn is_clean(&self) -> bool {
        self.num_defects == 0 && self.aborted.is_none()
    }

    fn record(&mut self, defect: Defect) {
        self.num_defects += 1;
        if self.defects.len() < MAX_RECORDED_DEFECTS {
            self.defects.push(defect);
        }
    }
}

/// Check `encoded` against `collection`, list by list.
///
/// Eligibility mirrors the encode driver exactly: the `.docs` sentinel and
/// lists at or under the minimum length are skipped. Always returns the
/// report; if the stream structure breaks mid-walk, the report carries the
/// abort reason plus every defect found before it.
pub fn verify_collection(
    codec: &dyn Codec,
    dict: &Dictionary,
    collection: &Collection,
    kind: ListKind,
    encoded: &[u8],
    reporter: &dyn Reporter,
) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    let mut stream = encoded;
    let mut decoded: Vec<u32> = Vec::new();

    for (sequence, list) in collection.iter().enumerate() {
        let list = list?;
        if sequence == 0 && kind.has_sentinel() {
            continue;
        }
        if list.len() <= MIN_LIST_LEN {
            continue;
        }

        let (header, rest) = match Header::read(stream) {
            Ok(parsed) => parsed,
            Err(e) => {
                report.aborted = Some(e.to_string());
                break;
            }
        };
        if header.n > MAX_LIST_LEN {
            report.aborted = Some(format!(
                "header for list {} claims {} values, beyond the {} sanity cap",
                report.lists, header.n, MAX_LIST_LEN
            ));
            break;
        }

        let expected_universe = universe(kind, list)?;
        if header.n != list.len() as u32 {
            report.record(Defect::Length {
                sequence: report.lists,
                expected: list.len() as u32,
                got: header.n,
            });
        }
        if header.universe != expected_universe {
            report.record(Defect::Universe {
                sequence: report.lists,
                expected: expected_universe,
                got: header.universe,
            });
        }

        // Zero past the list length too, so stale words from a longer
        // previous list cannot satisfy the comparison.
        let slack = header.n as usize + MAX_ENTRY_SIZE;
        if decoded.len() < slack {
            decoded.resize(slack, 0);
        }
        decoded[..slack].fill(0);

        // A stream that cannot be walked past this point loses framing for
        // good, so stop here but keep what the walk already found.
        let consumed = match codec.decode(dict, rest, header.n, &mut decoded) {
            Ok(consumed) => consumed,
            Err(e) if e.is_corrupt_stream() => {
                report.aborted = Some(e.to_string());
                break;
            }
            Err(e) => return Err(e),
        };
        stream = &rest[consumed..];

        delta_decode(kind, &mut decoded[..header.n as usize]);

        let compared = (header.n as usize).min(list.len());
        for position in 0..compared {
            if decoded[position] != list[position] {
                report.record(Defect::Value {
                    sequence: report.lists,
                    position: position as u32,
                    expected: list[position],
                    got: decoded[position],
                });
            }
        }

        report.lists += 1;
        report.ints += u64::from(header.n);
    }

    if report.aborted.is_none() && !stream.is_empty() {
        report.aborted = Some(format!(
            "{} trailing bytes after the final list",
            stream.len()
        ));
    }

    reporter.progress(report.lists, report.ints, encoded.len() as u64);
    Ok(report)
}
