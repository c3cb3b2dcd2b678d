// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vectorized singleton decoding via AVX2 gather.
//!
//! When eight consecutive codewords all resolve to single-value blocks, the
//! eight outputs are exactly eight reads from the dictionary's dense
//! singleton table at the codeword offsets. That is the shape `vpgatherdd`
//! was built for: widen the eight u16 codewords to epi32 lanes, gather
//! through the table base with scale 4, store 32 contiguous output bytes.
//!
//! Feature detection happens per call with `is_x86_feature_detected!`; the
//! check is a cached atomic load and the window already amortizes it over
//! eight values. Everything else in the crate is `unsafe`-free, so the
//! intrinsics are quarantined here behind a scalar fallback that the tests
//! compare against.
#![allow(unsafe_code)]

/// Width of the fast-path window, in codewords.
pub const LANES: usize = 8;

/// Resolve eight singleton codewords against the dense table in one step.
///
/// The fixed-width `out` makes a short destination unrepresentable; codewords
/// are bounds-checked against the table here, so the function is safe to call
/// with any inputs. Panics if a codeword is out of range (the decoder only
/// forms windows from codewords its dictionary resolves).
#[inline]
pub fn gather_singletons(table: &[u32], window: &[u16; LANES], out: &mut [u32; LANES]) {
    assert!(
        window.iter().all(|&cw| (cw as usize) < table.len()),
        "codeword out of range for singleton table"
    );

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            // Safety: AVX2 is present, every index is < table.len(), and the
            // output is exactly 32 bytes by type.
            unsafe { gather_singletons_avx2(table, window, out) };
            return;
        }
    }
    gather_singletons_scalar(table, window, out);
}

/// Portable fallback, also the reference the vector path is tested against.
#[inline]
pub fn gather_singletons_scalar(table: &[u32], window: &[u16; LANES], out: &mut [u32; LANES]) {
    for (slot, &codeword) in out.iter_mut().zip(window.iter()) {
        *slot = table[codeword as usize];
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn gather_singletons_avx2(table: &[u32], window: &[u16; LANES], out: &mut [u32; LANES]) {
    use std::arch::x86_64::{
        __m128i, _mm256_cvtepu16_epi32, _mm256_i32gather_epi32, _mm256_storeu_si256,
        _mm_loadu_si128, __m256i,
    };

    // eight u16 codewords -> eight epi32 gather indices
    let codewords = _mm_loadu_si128(window.as_ptr().cast::<__m128i>());
    let indices = _mm256_cvtepu16_epi32(codewords);
    // scale 4: indices are u32 offsets from the table base
    let gathered = _mm256_i32gather_epi32::<4>(table.as_ptr().cast::<i32>(), indices);
    _mm256_storeu_si256(out.as_mut_ptr().cast::<__m256i>(), gathered);
}
