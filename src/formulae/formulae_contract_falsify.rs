//! Similarity formula contract falsification tests
//!
//! Each test tries to break one claim the formulas make:
//!   - cosine self-similarity is 1, symmetric, scale invariant
//!   - pearson is symmetric, scale and shift invariant
//!   - rounding never leaves more than `precision` digits
//!   - undefined results are errors, never 0 or NaN

use crate::error::BildungError;
use crate::formulae::*;
use crate::primitives::ConceptVector;

fn fixtures() -> Vec<(ConceptVector, ConceptVector)> {
    vec![
        (
            ConceptVector::from_dense(&[1.0, 2.0, 3.0]),
            ConceptVector::from_dense(&[4.0, 5.0, 6.0]),
        ),
        (
            ConceptVector::from_dense(&[1.0, 0.5, 0.5]),
            ConceptVector::from_dense(&[1.0, 0.5, 0.25]),
        ),
        (
            ConceptVector::from_dense(&[-3.0, 0.2, 7.5, 1.0]),
            ConceptVector::from_dense(&[2.0, -1.0, 0.0, 4.0]),
        ),
        (
            ConceptVector::from_options(vec![Some(0.9), None, Some(0.1), Some(0.4), Some(0.7)]),
            ConceptVector::from_options(vec![Some(0.3), Some(0.8), Some(0.2), None, Some(0.6)]),
        ),
    ]
}

fn scaled(v: &ConceptVector, k: f64, c: f64) -> ConceptVector {
    v.iter().map(|x| x.map(|x| k * x + c)).collect()
}

// ============================================================================
// FALSIFY-COS-001: Cosine self-similarity
// Contract: cosine_similarity(v, v) = 1.0 for any non-zero vector
// ============================================================================

#[test]
fn falsify_cos_001_self_similarity() {
    for (i, (a, b)) in fixtures().iter().enumerate() {
        for v in [a, b] {
            let sim = cosine_similarity(v, v, 5).expect("non-zero vector");
            assert_eq!(
                sim, 1.0,
                "FALSIFIED COS-001: cosine_similarity(v{i}, v{i}) = {sim}, expected 1.0"
            );
        }
    }
}

// ============================================================================
// FALSIFY-COS-002: Symmetry for both formulas
// ============================================================================

#[test]
fn falsify_cos_002_symmetry() {
    for (i, (a, b)) in fixtures().iter().enumerate() {
        for formula in Formula::ALL {
            let ab = formula.compute(a, b, 5).expect("defined");
            let ba = formula.compute(b, a, 5).expect("defined");
            assert_eq!(ab, ba, "FALSIFIED COS-002: {formula}(a{i}, b{i}) != {formula}(b{i}, a{i})");
        }
    }
}

// ============================================================================
// FALSIFY-COS-003: Scale invariance of cosine, scale+shift of pearson
// ============================================================================

#[test]
fn falsify_cos_003_invariance() {
    for (i, (a, b)) in fixtures().iter().enumerate() {
        let base = cosine_similarity(a, b, 5).expect("defined");
        for k in [0.5, 3.0, 1_000.0] {
            let sim = cosine_similarity(a, &scaled(b, k, 0.0), 5).expect("defined");
            assert!(
                (sim - base).abs() <= 1.5e-5,
                "FALSIFIED COS-003: cosine(a{i}, {k}·b{i}) = {sim}, expected {base}"
            );
        }

        let base = pearson_similarity(a, b, 5).expect("defined");
        for (k, c) in [(2.0, 1.0), (0.1, -5.0), (40.0, 100.0)] {
            let r = pearson_similarity(a, &scaled(b, k, c), 5).expect("defined");
            assert!(
                (r - base).abs() <= 1.5e-5,
                "FALSIFIED COS-003: pearson(a{i}, {k}·b{i}+{c}) = {r}, expected {base}"
            );
        }
    }
}

#[test]
fn falsify_cos_003_pearson_large_shift() {
    let a = ConceptVector::from_dense(&[1.0, 2.0, 3.0, 4.0]);
    let b = ConceptVector::from_dense(&[2.0, 1.0, 4.0, 3.0]);
    assert_eq!(pearson_similarity(&a, &b, 5).expect("defined"), 0.6);

    // shifted weights stay exactly representable, so only the offset changes
    for c in [1e11, 1e12, 1e13, 1e15, -1e13] {
        let r = pearson_similarity(&a, &scaled(&b, 1.0, c), 5).expect("defined");
        assert_eq!(r, 0.6, "FALSIFIED COS-003: pearson(a, b+{c}) = {r}, expected 0.6");
    }
}

// ============================================================================
// FALSIFY-COS-004: Range [-1, 1]
// ============================================================================

#[test]
fn falsify_cos_004_range() {
    for (a, b) in fixtures() {
        for formula in Formula::ALL {
            for precision in [0, 3, 5, 15, 16] {
                let sim = formula.compute(&a, &b, precision).expect("defined");
                assert!(
                    (-1.0..=1.0).contains(&sim),
                    "FALSIFIED COS-004: {formula} = {sim} outside [-1, 1]"
                );
            }
        }
    }
}

// ============================================================================
// FALSIFY-COS-005: Rounding keeps at most `precision` digits
// ============================================================================

#[test]
fn falsify_cos_005_rounding() {
    for (a, b) in fixtures() {
        for formula in Formula::ALL {
            let integral = formula.compute(&a, &b, 0).expect("defined");
            assert_eq!(integral.fract(), 0.0, "FALSIFIED COS-005: precision 0 gave {integral}");

            for precision in 1..=6 {
                let sim = formula.compute(&a, &b, precision).expect("defined");
                let shifted = sim * 10_f64.powi(precision as i32);
                assert!(
                    (shifted - shifted.round()).abs() < 1e-6,
                    "FALSIFIED COS-005: {sim} has more than {precision} digits"
                );
            }
        }
    }
}

// ============================================================================
// FALSIFY-COS-006: Undefined is an error, never a silent number
// ============================================================================

#[test]
fn falsify_cos_006_undefined_is_error() {
    let zero = ConceptVector::from_dense(&[0.0, 0.0, 0.0]);
    let constant = ConceptVector::from_dense(&[2.0, 2.0, 2.0]);
    let other = ConceptVector::from_dense(&[1.0, 2.0, 3.0]);

    assert!(matches!(
        cosine_similarity(&zero, &other, 5),
        Err(BildungError::DivisionUndefined { .. })
    ));
    assert!(matches!(
        pearson_similarity(&constant, &other, 5),
        Err(BildungError::DivisionUndefined { .. })
    ));
    assert!(matches!(
        pearson_similarity(&zero, &other, 5),
        Err(BildungError::DivisionUndefined { .. })
    ));
}

// ============================================================================
// FALSIFY-COS-007: Formulas are not interchangeable
// ============================================================================

#[test]
fn falsify_cos_007_formulas_differ() {
    let a = ConceptVector::from_dense(&[1.0, 0.5, 0.5]);
    let b = ConceptVector::from_dense(&[1.0, 0.5, 0.25]);

    let cos = cosine_similarity(&a, &b, 5).expect("defined");
    let r = pearson_similarity(&a, &b, 5).expect("defined");
    assert!(r < cos, "FALSIFIED COS-007: pearson {r} >= cosine {cos}");
}
