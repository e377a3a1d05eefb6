use crate::affine::Affine;
use crate::group::{Group, ScalarBits};
use crate::scalarfield::ScalarField;

/// Precomputed table of `i * G` for `i in 0..256`, used for fixed-base
/// windowed scalar multiplication by the generator.
pub(crate) fn affine_table() -> [Affine; 256] {
    let mut table = [Affine::INFINITY; 256];
    let g = Affine::generator();
    table[1] = g;
    for i in 2..256 {
        table[i] = table[i - 1] + g;
    }
    table
}

/// Multiply the fixed generator by `scalar` using an 8-bit windowed table.
///
/// Equivalent to `Affine::generator().scalar_mul(scalar)` but avoids the
/// repeated doublings of the naive double-and-add algorithm by folding them
/// into the table lookup: each window step doubles the accumulator 8 times
/// (scaling every term added so far) before adding the next window's
/// precomputed multiple.
pub fn mul_generator_affine(scalar: &ScalarField) -> Affine {
    let table = affine_table();
    let limbs = scalar.to_u64_limbs();
    let mut result = Affine::INFINITY;

    for limb_idx in (0..4).rev() {
        let limb = limbs[limb_idx];
        for shift in (0..64).step_by(8).rev() {
            for _ in 0..8 {
                result = result.double();
            }

            let window = ((limb >> shift) & 0xFF) as usize;
            if window != 0 {
                result += table[window];
            }
        }
    }

    result
}

impl ScalarBits for ScalarField {
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_u64_vec()
    }
}
