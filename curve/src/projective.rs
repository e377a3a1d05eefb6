use crate::affine::Affine;
use crate::basefield::{from_coeffs, BaseField};
use crate::scalarfield::ScalarField;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use p3_field::{Field, PrimeCharacteristicRing};
use p3_koala_bear::KoalaBear;
use serde::{Deserialize, Serialize};

/// Projective point on the elliptic curve
/// Represents a point in projective coordinates (X:Y:Z) where (x,y) = (X/Z, Y/Z)
/// The point at infinity is represented as (0:1:0)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

impl Projective {
    // Curve parameters: y^2 = x^3 + a*x + b
    // a = 3*u where u is the primitive element of the extension
    // b = 42639

    /// Get the 'a' coefficient: 3*u
    #[inline]
    fn curve_a() -> BaseField {
        // Create 3*u: coefficients [0, 3, 0, 0, 0, 0, 0, 0]
        // The second component (index 1) represents u^1
        let zero = KoalaBear::ZERO;
        let three = KoalaBear::new(3);
        from_coeffs([zero, three, zero, zero, zero, zero, zero, zero])
    }

    /// Get the 'b' coefficient: 42639
    #[inline]
    fn curve_b() -> BaseField {
        // Create constant 42639 in the extension field
        let zero = KoalaBear::ZERO;
        let b = KoalaBear::new(42639);
        from_coeffs([b, zero, zero, zero, zero, zero, zero, zero])
    }

    /// The point at infinity (identity element): (0:1:0)
    pub const INFINITY: Self = Projective {
        x: BaseField::ZERO,
        y: BaseField::ONE,
        z: BaseField::ZERO,
    };

    /// Create a new projective point
    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the point at infinity
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates
    pub fn to_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine::INFINITY;
        }

        let z_inv = self.z.inverse();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        Affine::new(x, y)
    }

    /// Convert from affine coordinates
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::INFINITY;
        }

        Projective::new(point.x, point.y, BaseField::ONE)
    }

    /// Check if a point is on the curve: Y^2*Z = X^3 + a*X*Z^2 + b*Z^3
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let y2 = self.y * self.y;
        let x2 = self.x * self.x;
        let x3 = x2 * self.x;
        let z2 = self.z * self.z;
        let z3 = z2 * self.z;

        let lhs = y2 * self.z;
        let rhs = x3 + Self::curve_a() * self.x * z2 + Self::curve_b() * z3;

        lhs == rhs
    }

    /// Generator point from SSWU on 'ZKM2'
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Alternative generator point from SSWU on 'ZKM2 - Pedersen'
    pub fn generator_pedersen() -> Self {
        Self::from_affine(&Affine::generator_pedersen())
    }

    /// Point doubling: 2*P using projective coordinates
    /// For simplicity and correctness, convert to affine, double, and convert back
    pub fn double(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }

        let affine = self.to_affine();
        let doubled_affine = affine.double();
        Self::from_affine(&doubled_affine)
    }

    /// Negate a point
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Projective::new(self.x, -self.y, self.z)
    }

    /// Scalar multiplication using double-and-add algorithm
    pub fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        let scalar_bytes = scalar.to_canonical_u64_vec();
        let mut result = Self::INFINITY;
        let mut temp = *self;

        // Process each limb
        for &limb in scalar_bytes.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }
}

// Implement addition for projective points
impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        // For simplicity and correctness, convert to affine, add, and convert back
        let affine1 = self.to_affine();
        let affine2 = other.to_affine();
        let result_affine = affine1 + affine2;
        Self::from_affine(&result_affine)
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        self.scalar_mul(&scalar)
    }
}

impl Mul<&ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        self.scalar_mul(scalar)
    }
}

impl Mul<Projective> for ScalarField {
    type Output = Projective;

    fn mul(self, point: Projective) -> Projective {
        point.scalar_mul(&self)
    }
}

impl Mul<&Projective> for ScalarField {
    type Output = Projective;

    fn mul(self, point: &Projective) -> Projective {
        point.scalar_mul(&self)
    }
}

// Conversions
impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl From<&Projective> for Affine {
    fn from(point: &Projective) -> Self {
        point.to_affine()
    }
}
