//! Property-based tests using proptest.
//!
//! These tests verify invariants of the similarity formulas and ranking.

use bildung::config::SimilarityConfig;
use bildung::formulae::{cosine_similarity, pearson_similarity, round_to, Formula};
use bildung::primitives::{pairwise_complete, ConceptVector};
use bildung::recommend::Recommender;
use bildung::BildungError;
use proptest::prelude::*;

// One rounding step at precision 5, plus float noise
const ROUNDING_SLACK: f64 = 1.5e-5;

// Strategy for dense conceptual vectors
fn dense_strategy(len: usize) -> impl Strategy<Value = ConceptVector> {
    proptest::collection::vec(-100.0f64..100.0, len).prop_map(ConceptVector::from)
}

// Strategy for sparse conceptual vectors (roughly a third absent)
fn sparse_strategy(len: usize) -> impl Strategy<Value = ConceptVector> {
    proptest::collection::vec(proptest::option::weighted(0.66, -100.0f64..100.0), len)
        .prop_map(ConceptVector::from_options)
}

fn non_zero(v: &ConceptVector) -> bool {
    v.iter().flatten().any(|x| x.abs() > 1e-3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn cosine_self_similarity_is_one(v in dense_strategy(8)) {
        prop_assume!(non_zero(&v));
        prop_assert_eq!(cosine_similarity(&v, &v, 5).expect("non-zero"), 1.0);
    }

    #[test]
    fn formulas_are_symmetric(a in sparse_strategy(8), b in sparse_strategy(8)) {
        for formula in Formula::ALL {
            let ab = formula.compute(&a, &b, 5);
            let ba = formula.compute(&b, &a, 5);
            match (ab, ba) {
                (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
                (Err(_), Err(_)) => {}
                (x, y) => prop_assert!(false, "asymmetric outcome: {:?} vs {:?}", x, y),
            }
        }
    }

    #[test]
    fn results_stay_in_range(a in sparse_strategy(8), b in sparse_strategy(8), precision in 0u32..20) {
        for formula in Formula::ALL {
            if let Ok(sim) = formula.compute(&a, &b, precision) {
                prop_assert!((-1.0..=1.0).contains(&sim), "{} out of range: {}", formula, sim);
            }
        }
    }

    #[test]
    fn cosine_is_scale_invariant(a in dense_strategy(6), b in dense_strategy(6), k in 0.01f64..100.0) {
        prop_assume!(non_zero(&a) && non_zero(&b));
        let scaled: ConceptVector = b.iter().map(|x| x.map(|x| x * k)).collect();
        let base = cosine_similarity(&a, &b, 5).expect("non-zero");
        let sim = cosine_similarity(&a, &scaled, 5).expect("non-zero");
        prop_assert!((base - sim).abs() <= ROUNDING_SLACK, "{} vs {}", base, sim);
    }

    #[test]
    fn pearson_is_scale_and_shift_invariant(
        a in dense_strategy(6),
        b in dense_strategy(6),
        k in 0.1f64..10.0,
        c in -50.0f64..50.0,
    ) {
        let Ok(base) = pearson_similarity(&a, &b, 5) else {
            return Ok(());
        };
        let moved: ConceptVector = b.iter().map(|x| x.map(|x| k * x + c)).collect();
        let r = pearson_similarity(&a, &moved, 5).expect("affine map keeps variance non-zero");
        prop_assert!((base - r).abs() <= ROUNDING_SLACK, "{} vs {}", base, r);
    }

    #[test]
    fn sparse_matches_reduced_dense(a in sparse_strategy(8), b in sparse_strategy(8)) {
        let (ra, rb) = pairwise_complete(&a, &b).expect("equal lengths");
        let ra = ConceptVector::from(ra);
        let rb = ConceptVector::from(rb);
        for formula in Formula::ALL {
            let sparse = formula.compute(&a, &b, 5).ok();
            let reduced = formula.compute(&ra, &rb, 5).ok();
            prop_assert_eq!(sparse, reduced);
        }
    }

    #[test]
    fn rounding_keeps_at_most_precision_digits(value in -1.0f64..1.0, precision in 0u32..8) {
        let rounded = round_to(value, precision);
        let shifted = rounded * 10f64.powi(precision as i32);
        prop_assert!((shifted - shifted.round()).abs() < 1e-6);
        prop_assert!((rounded - value).abs() <= 0.5 * 10f64.powi(-(precision as i32)) + 1e-12);
    }

    #[test]
    fn mismatched_lengths_always_fail(a in dense_strategy(4), b in dense_strategy(5)) {
        for formula in Formula::ALL {
            let is_mismatch = matches!(
                formula.compute(&a, &b, 5),
                Err(BildungError::DimensionMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn suggestions_are_sorted_and_limited(
        requester in sparse_strategy(6),
        candidates in proptest::collection::vec(sparse_strategy(6), 0..30),
        limit in 0usize..15,
    ) {
        let recommender = Recommender::from_config(SimilarityConfig::new()).expect("default config");
        let suggestions = recommender
            .suggest_with_limit(&requester, &candidates, limit)
            .expect("equal lengths");

        prop_assert!(suggestions.len() <= limit);
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].index < pair[1].index));
        }
        for s in &suggestions {
            prop_assert!(cosine_similarity(&requester, &candidates[s.index], 5).is_ok());
        }
    }
}
