// E(GF((2130706433)^8)) : y^2 = x^3 + 3u*x + 42639
// E generator point (from SSWU on 'ZKM2'): (1195559694*u^7 + 1368232771*u^6 + 438909494*u^5 + 1825476283*u^4 + 1299273209*u^3 + 2115217807*u^2 + 1763905369*u + 1813646457 : 2077084094*u^7 + 434578416*u^6 + 125328769*u^5 + 1286889583*u^4 + 655051022*u^3 + 1365273355*u^2 + 840779000*u + 376996212 : 1)
// E generator point (from SSWU on 'ZKM2 - Pedersen'): (1741425845*u^7 + 1750752810*u^6 + 7156361*u^5 + 1949220725*u^4 + 543192455*u^3 + 358531926*u^2 + 550988532*u + 1709677626 : 71894712*u^7 + 1876016551*u^6 + 1684498755*u^5 + 598910111*u^4 + 156828552*u^3 + 978667041*u^2 + 1399061592*u + 548133034 : 1)
// Curve prime order: 424804331891979973455971894938199991855800421968298112348210302325367590273 (248 bits)
// Curve prime order (hex): 0xf06e44682c2aa440f5f26a5ae1748ff85ccc2efc3068faf2154ff8a2e94d81
// Curve prime order 2-adicity v2(q-1): 7
// Curve cofactor: 1
// Curve security (Pollard-Rho): 123.78
// Curve embedding degree: 13275135371624374170499121716818749745493763186509316010881571947667737196 (>2^242)
// Twist security (Pollard-Rho): 120.86

use crate::basefield::{from_coeffs, BaseField};
use crate::{double_scalar_mul_basepoint_affine, mul_generator_affine, Group, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use p3_field::{Field, PrimeCharacteristicRing};
use p3_koala_bear::KoalaBear;
use serde::{Deserialize, Serialize};

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point (Fp8 element)
    pub x: BaseField,
    /// The y-coordinate of the point (Fp8 element)
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
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

    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Fixed 64-byte wire encoding: `x || y`, each 32 bytes little-endian.
    ///
    /// The point at infinity has no affine representation and is never
    /// encoded; callers must special-case it above this layer.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&crate::basefield::to_bytes(self.x));
        out[32..].copy_from_slice(&crate::basefield::to_bytes(self.y));
        out
    }

    /// Inverse of [`Affine::to_bytes`]. Does not itself check the curve
    /// equation; callers handling untrusted input should follow up with
    /// [`Affine::is_on_curve`].
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut x_bytes = [0u8; 32];
        let mut y_bytes = [0u8; 32];
        x_bytes.copy_from_slice(&bytes[..32]);
        y_bytes.copy_from_slice(&bytes[32..]);
        Affine {
            x: crate::basefield::from_bytes(x_bytes),
            y: crate::basefield::from_bytes(y_bytes),
            is_infinity: false,
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y * self.y;
        let x2 = self.x * self.x;
        let x3 = x2 * self.x;
        let ax = Self::curve_a() * self.x;
        let rhs = x3 + ax + Self::curve_b();

        y2 == rhs
    }

    /// Generator point from SSWU on 'ZKM2'.
    pub fn generator() -> Self {
        // (1195559694*u^7 + 1368232771*u^6 + 438909494*u^5 + 1825476283*u^4 +
        //  1299273209*u^3 + 2115217807*u^2 + 1763905369*u + 1813646457 :
        //  2077084094*u^7 + 434578416*u^6 + 125328769*u^5 + 1286889583*u^4 +
        //  655051022*u^3 + 1365273355*u^2 + 840779000*u + 376996212 : 1)

        let x = from_coeffs([
            KoalaBear::new(1813646457),
            KoalaBear::new(1763905369),
            KoalaBear::new(2115217807),
            KoalaBear::new(1299273209),
            KoalaBear::new(1825476283),
            KoalaBear::new(438909494),
            KoalaBear::new(1368232771),
            KoalaBear::new(1195559694),
        ]);

        let y = from_coeffs([
            KoalaBear::new(376996212),
            KoalaBear::new(840779000),
            KoalaBear::new(1365273355),
            KoalaBear::new(655051022),
            KoalaBear::new(1286889583),
            KoalaBear::new(125328769),
            KoalaBear::new(434578416),
            KoalaBear::new(2077084094),
        ]);

        Affine::new(x, y)
    }

    /// Alternative generator point from SSWU on 'ZKM2 - Pedersen'.
    pub fn generator_pedersen() -> Self {
        // (1741425845*u^7 + 1750752810*u^6 + 7156361*u^5 + 1949220725*u^4 +
        //  543192455*u^3 + 358531926*u^2 + 550988532*u + 1709677626 :
        //  71894712*u^7 + 1876016551*u^6 + 1684498755*u^5 + 598910111*u^4 +
        //  156828552*u^3 + 978667041*u^2 + 1399061592*u + 548133034 : 1)

        let x = from_coeffs([
            KoalaBear::new(1709677626),
            KoalaBear::new(550988532),
            KoalaBear::new(358531926),
            KoalaBear::new(543192455),
            KoalaBear::new(1949220725),
            KoalaBear::new(7156361),
            KoalaBear::new(1750752810),
            KoalaBear::new(1741425845),
        ]);

        let y = from_coeffs([
            KoalaBear::new(548133034),
            KoalaBear::new(1399061592),
            KoalaBear::new(978667041),
            KoalaBear::new(156828552),
            KoalaBear::new(598910111),
            KoalaBear::new(1684498755),
            KoalaBear::new(1876016551),
            KoalaBear::new(71894712),
        ]);

        Affine::new(x, y)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // Compute slope: λ = (3x^2 + a) / (2y)
        let x2 = self.x * self.x;
        let three_x2 = x2 + x2 + x2;
        let numerator = three_x2 + Self::curve_a();
        let denominator = self.y + self.y;
        let lambda = numerator / denominator;

        // x_r = λ^2 - 2x
        let lambda2 = lambda * lambda;
        let x_r = lambda2 - self.x - self.x;

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }

    /// Multiply the fixed generator using a precomputed table.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        mul_generator_affine(scalar)
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        double_scalar_mul_basepoint_affine(a, b, point)
    }
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Affine::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

// Implement addition for affine points
impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        // Check if points are the same
        if self.x == other.x {
            if self.y == other.y {
                // Point doubling
                return self.double();
            } else {
                // Points are inverses, return infinity
                return Self::INFINITY;
            }
        }

        // Regular point addition
        // λ = (y2 - y1) / (x2 - x1)
        let numerator = other.y - self.y;
        let denominator = other.x - self.x;
        let lambda = numerator / denominator;

        // x_r = λ^2 - x1 - x2
        let lambda2 = lambda * lambda;
        let x_r = lambda2 - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}

impl Mul<&Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: &Affine) -> Affine {
        <Affine as Group>::scalar_mul(point, &self)
    }
}
