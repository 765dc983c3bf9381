#![no_main]

use bildung::formulae::Formula;
use bildung::primitives::ConceptVector;
use libfuzzer_sys::fuzz_target;

// Each 9-byte chunk is one dimension: a presence flag for each vector
// (bit 0 / bit 1 of the first byte) followed by two f32 weights.
fn decode(data: &[u8]) -> (ConceptVector, ConceptVector) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    for chunk in data.chunks_exact(9) {
        let flags = chunk[0];
        let x = f32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        let y = f32::from_le_bytes([chunk[5], chunk[6], chunk[7], chunk[8]]);
        a.push((flags & 1 != 0).then_some(f64::from(x)));
        b.push((flags & 2 != 0).then_some(f64::from(y)));
    }
    (ConceptVector::from_options(a), ConceptVector::from_options(b))
}

fuzz_target!(|data: &[u8]| {
    let (a, b) = decode(data);
    let precision = u32::from(data.first().copied().unwrap_or(5) % 20);

    for formula in Formula::ALL {
        if let Ok(sim) = formula.compute(&a, &b, precision) {
            assert!((-1.0..=1.0).contains(&sim), "{formula} out of range: {sim}");
        }
    }
});
