//! Codec property tests.
//!
//! Invariants checked here:
//! - Encode then decode reproduces the buffer exactly, for any dictionary
//! - The decoder consumes exactly the bytes the encoder produced
//! - The vectorized gather agrees with the scalar table walk
//! - The dictionary file format is reversible

use proptest::prelude::*;

use dint::codec::{self, simd};
use dint::dict::{format, Dictionary, RawEntry, RESERVED_CODEWORDS};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small values so random buffers actually hit random dictionary entries.
fn value_strategy() -> impl Strategy<Value = u32> {
    0u32..16
}

/// A legal block: one of the five allowed sizes, small values.
fn block_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::sample::select(vec![1usize, 2, 4, 8, 16])
        .prop_flat_map(|size| prop::collection::vec(value_strategy(), size))
}

/// A valid dictionary: up to 40 entries at distinct non-reserved codewords.
fn dictionary_strategy() -> impl Strategy<Value = Dictionary> {
    prop::collection::btree_map(
        RESERVED_CODEWORDS..200u16,
        block_strategy(),
        0..40,
    )
    .prop_map(|entries| {
        let mut dict = Dictionary::from_entries(
            entries
                .into_iter()
                .map(|(codeword, payload)| RawEntry { codeword, payload })
                .collect(),
        )
        .expect("strategy only yields legal entries");
        dict.prepare_for_encoding();
        dict
    })
}

fn buffer_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(value_strategy(), 0..300)
}

// ============================================================================
// ROUNDTRIP PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: any buffer survives encode → decode under any dictionary.
    #[test]
    fn prop_codec_roundtrip(dict in dictionary_strategy(), buf in buffer_strategy()) {
        let mut stream = Vec::new();
        codec::encode(&dict, &buf, buf.len() as u32, &mut stream).unwrap();

        let mut out = vec![0u32; buf.len()];
        let consumed = codec::decode(&dict, &stream, buf.len() as u32, &mut out).unwrap();

        prop_assert_eq!(consumed, stream.len());
        prop_assert_eq!(out, buf);
    }

    /// Property: decoding stops at the list boundary even with trailing
    /// garbage appended, and reports the same consumed length.
    #[test]
    fn prop_decode_ignores_trailing_bytes(
        dict in dictionary_strategy(),
        buf in buffer_strategy(),
        garbage in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut stream = Vec::new();
        codec::encode(&dict, &buf, buf.len() as u32, &mut stream).unwrap();
        let clean_len = stream.len();
        stream.extend_from_slice(&garbage);

        let mut out = vec![0u32; buf.len()];
        let consumed = codec::decode(&dict, &stream, buf.len() as u32, &mut out).unwrap();

        prop_assert_eq!(consumed, clean_len);
        prop_assert_eq!(out, buf);
    }

    /// Property: the stream never beats 6 bytes per value (the all-escape
    /// worst case) and never goes below 2 bytes per 16 values.
    #[test]
    fn prop_stream_size_bounds(dict in dictionary_strategy(), buf in buffer_strategy()) {
        let mut stream = Vec::new();
        codec::encode(&dict, &buf, buf.len() as u32, &mut stream).unwrap();

        prop_assert!(stream.len() <= buf.len() * 6);
        if !buf.is_empty() {
            prop_assert!(stream.len() >= buf.len().div_ceil(16) * 2);
        }
    }
}

// ============================================================================
// GATHER EQUIVALENCE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: the dispatched gather (AVX2 where available) matches the
    /// scalar reference for any table and any in-range window.
    #[test]
    fn prop_gather_matches_scalar(
        table in prop::collection::vec(any::<u32>(), simd::LANES..512),
        lanes in prop::collection::vec(any::<u16>(), simd::LANES),
    ) {
        let mut window = [0u16; simd::LANES];
        for (slot, &lane) in window.iter_mut().zip(lanes.iter()) {
            *slot = lane % table.len() as u16;
        }

        let mut scalar = [0u32; simd::LANES];
        let mut dispatched = [0u32; simd::LANES];
        simd::gather_singletons_scalar(&table, &window, &mut scalar);
        simd::gather_singletons(&table, &window, &mut dispatched);

        prop_assert_eq!(scalar, dispatched);
    }
}

// ============================================================================
// DICTIONARY FILE FORMAT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: serialize → parse is the identity on raw entries.
    #[test]
    fn prop_dict_file_roundtrip(
        entries in prop::collection::btree_map(
            RESERVED_CODEWORDS..1000u16,
            block_strategy(),
            0..50,
        )
    ) {
        let entries: Vec<RawEntry> = entries
            .into_iter()
            .map(|(codeword, payload)| RawEntry { codeword, payload })
            .collect();

        let bytes = format::serialize(&entries);
        prop_assert_eq!(format::parse(&bytes).unwrap(), entries);
    }

    /// Property: any single-bit corruption of the body is detected.
    #[test]
    fn prop_dict_file_corruption_detected(
        entries in prop::collection::btree_map(
            RESERVED_CODEWORDS..100u16,
            block_strategy(),
            1..10,
        ),
        flip_bit in 0usize..64,
    ) {
        let entries: Vec<RawEntry> = entries
            .into_iter()
            .map(|(codeword, payload)| RawEntry { codeword, payload })
            .collect();
        let mut bytes = format::serialize(&entries);

        let body_bits = (bytes.len() - 8) * 8;
        let bit = flip_bit % body_bits;
        bytes[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(format::parse(&bytes).is_err());
    }
}
