//! End-to-end pipeline properties: transform, drivers, verification.

use proptest::prelude::*;

use dint::codec::GreedyDict;
use dint::collection::Collection;
use dint::dict::{Dictionary, RawEntry};
use dint::logger::NullReporter;
use dint::tools::encode_collection;
use dint::transform::{delta_decode, delta_encode, ListKind};
use dint::verify::verify_collection;
use dint::Header;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A sorted document-ID list built from positive gaps.
fn docs_list_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..50, 1..100).prop_map(|gaps| {
        let mut docs = Vec::with_capacity(gaps.len());
        let mut prev = 0u32;
        for gap in gaps {
            prev += gap;
            docs.push(prev);
        }
        docs
    })
}

/// A docs collection: sentinel singleton first, then real lists.
fn docs_collection_strategy() -> impl Strategy<Value = Collection> {
    prop::collection::vec(docs_list_strategy(), 1..8).prop_map(|lists| {
        let mut words = vec![1u32, 1_000_000];
        for list in &lists {
            words.push(list.len() as u32);
            words.extend_from_slice(list);
        }
        Collection::from_words(words)
    })
}

fn small_dictionary() -> Dictionary {
    let mut entries = Vec::new();
    // singletons for every small gap plus a few runs
    for value in 0u32..50 {
        entries.push(RawEntry {
            codeword: value as u16 + 1,
            payload: vec![value],
        });
    }
    entries.push(RawEntry {
        codeword: 60,
        payload: vec![1, 1],
    });
    entries.push(RawEntry {
        codeword: 61,
        payload: vec![1, 1, 1, 1],
    });

    let mut dict = Dictionary::from_entries(entries).unwrap();
    dict.prepare_for_encoding();
    dict
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the transform inverts for any sorted docs list, and the
    /// universe equals the final document ID.
    #[test]
    fn prop_gap_transform_inverts(docs in docs_list_strategy()) {
        let mut gaps = Vec::new();
        let universe = delta_encode(ListKind::Docs, &docs, &mut gaps).unwrap();

        prop_assert_eq!(universe, *docs.last().unwrap());

        delta_decode(ListKind::Docs, &mut gaps);
        prop_assert_eq!(gaps, docs);
    }

    /// Property: encode then verify is clean for any docs collection.
    #[test]
    fn prop_encode_verify_clean(collection in docs_collection_strategy()) {
        let dict = small_dictionary();
        let mut stream = Vec::new();
        let stats = encode_collection(
            &GreedyDict,
            &dict,
            &collection,
            ListKind::Docs,
            &NullReporter,
            &mut stream,
        )
        .unwrap();

        let report = verify_collection(
            &GreedyDict,
            &dict,
            &collection,
            ListKind::Docs,
            &stream,
            &NullReporter,
        )
        .unwrap();

        prop_assert!(report.is_clean());
        prop_assert_eq!(report.lists, stats.lists);
        prop_assert_eq!(report.ints, stats.ints);
    }

    /// Property: corrupting any stream byte dirties the report, either as
    /// recorded defects or as an aborted walk. It never verifies clean.
    #[test]
    fn prop_corruption_never_verifies_clean(
        collection in docs_collection_strategy(),
        position in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let dict = small_dictionary();
        let mut stream = Vec::new();
        encode_collection(
            &GreedyDict,
            &dict,
            &collection,
            ListKind::Docs,
            &NullReporter,
            &mut stream,
        )
        .unwrap();
        prop_assume!(!stream.is_empty());

        let at = position.index(stream.len());
        stream[at] ^= mask;

        let report = verify_collection(
            &GreedyDict,
            &dict,
            &collection,
            ListKind::Docs,
            &stream,
            &NullReporter,
        )
        .unwrap();
        prop_assert!(!report.is_clean());
    }

    /// Property: each encoded list's header holds the transformed count and
    /// sum, in that order.
    #[test]
    fn prop_headers_carry_count_and_universe(docs in docs_list_strategy()) {
        let dict = small_dictionary();
        let mut gaps = Vec::new();
        let universe = delta_encode(ListKind::Docs, &docs, &mut gaps).unwrap();

        let mut stream = Vec::new();
        Header { n: gaps.len() as u32, universe }.write(&mut stream);
        dint::codec::encode(&dict, &gaps, gaps.len() as u32, &mut stream).unwrap();

        let (header, _) = Header::read(&stream).unwrap();
        prop_assert_eq!(header.n as usize, docs.len());
        prop_assert_eq!(header.universe, universe);
    }
}
