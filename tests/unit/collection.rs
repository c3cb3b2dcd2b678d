//! Tests for collection framing and the delta transform.

use dint::collection::{serialize_lists, Collection};
use dint::transform::{delta_decode, delta_encode, ListKind};

#[test]
fn test_collection_framing_roundtrip() {
    let lists = vec![vec![1u32, 5, 9], vec![], vec![100]];
    let bytes = serialize_lists(&lists);

    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    let collection = Collection::from_words(words);

    let parsed: Vec<Vec<u32>> = collection.iter().map(|l| l.unwrap().to_vec()).collect();
    assert_eq!(parsed, lists);
}

#[test]
fn test_length_prefix_overrunning_file_is_an_error() {
    let collection = Collection::from_words(vec![3, 1, 2]);
    let results: Vec<_> = collection.iter().collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn test_docs_gap_transform_matches_by_hand() {
    let mut gaps = Vec::new();
    let universe = delta_encode(ListKind::Docs, &[3, 7, 7, 10], &mut gaps).unwrap();

    assert_eq!(gaps, vec![3, 4, 0, 3]);
    assert_eq!(universe, 10);
}

#[test]
fn test_gap_transform_inverts_cleanly() {
    let docs: Vec<u32> = (0..200).map(|i| i * 5 + (i % 3)).collect();
    let mut gaps = Vec::new();
    delta_encode(ListKind::Docs, &docs, &mut gaps).unwrap();

    delta_decode(ListKind::Docs, &mut gaps);
    assert_eq!(gaps, docs);
}

#[test]
fn test_freqs_universe_is_the_plain_sum() {
    let mut out = Vec::new();
    let universe = delta_encode(ListKind::Freqs, &[1, 1, 2, 5], &mut out).unwrap();
    assert_eq!(universe, 9);
    assert_eq!(out, vec![1, 1, 2, 5]);
}
