//! Fuzz testing of vector identities.

use crate::vector::Vector3;
use approx::abs_diff_eq;
use arbitrary::{Arbitrary, Result, Unstructured};
use std::mem;

const MAX_ABS_COMPONENT: f64 = 1e3;

/// A vector with finite components in `[-1000, 1000]`.
#[derive(Clone, Copy, Debug)]
pub struct ArbitraryVector3(Vector3);

impl ArbitraryVector3 {
    pub fn vector(&self) -> &Vector3 {
        &self.0
    }
}

impl Arbitrary<'_> for ArbitraryVector3 {
    fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
        let x = MAX_ABS_COMPONENT * (2.0 * arbitrary_norm_f64(u)? - 1.0);
        let y = MAX_ABS_COMPONENT * (2.0 * arbitrary_norm_f64(u)? - 1.0);
        let z = MAX_ABS_COMPONENT * (2.0 * arbitrary_norm_f64(u)? - 1.0);
        Ok(Self(Vector3::new(x, y, z)))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        let size = 3 * mem::size_of::<u32>();
        (size, Some(size))
    }
}

pub fn fuzz_test_vector_identities((a, b): (ArbitraryVector3, ArbitraryVector3)) {
    let (a, b) = (a.0, b.0);

    assert_eq!(&a + &b, &b + &a);
    assert!(abs_diff_eq!(&(&a + &b) - &b, a, epsilon = 1e-9));

    let mut in_place = a;
    in_place += &b;
    assert_eq!(in_place, &a + &b);

    let cross = a.cross(&b);
    assert!(abs_diff_eq!(cross, -b.cross(&a), epsilon = 1e-12));

    // Rounding error in the dot products grows with the operand magnitudes
    let tolerance_a = 1e-12 * (a.magnitude_squared() * b.magnitude() + 1.0);
    let tolerance_b = 1e-12 * (b.magnitude_squared() * a.magnitude() + 1.0);
    assert!(abs_diff_eq!(cross.dot(&a), 0.0, epsilon = tolerance_a));
    assert!(abs_diff_eq!(cross.dot(&b), 0.0, epsilon = tolerance_b));

    match a.try_normalized() {
        Ok(normalized) => {
            assert!(abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = 1e-12));
            assert_eq!(normalized, a.normalized());
        }
        Err(_) => assert_eq!(a, Vector3::zeros()),
    }
}

fn arbitrary_norm_f64(u: &mut Unstructured<'_>) -> Result<f64> {
    Ok(f64::from(u.int_in_range(0..=1_000_000_u32)?) / 1_000_000.0)
}
