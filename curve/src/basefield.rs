use p3_field::extension::BinomialExtensionField;
use p3_field::RawDataSerializable;
use p3_koala_bear::KoalaBear;

/// KoalaBear degree-8 extension field.
pub type BaseField = BinomialExtensionField<KoalaBear, 8>;

/// Helper function to construct a BaseField from its coefficients.
#[inline]
pub fn from_coeffs(coeffs: [KoalaBear; 8]) -> BaseField {
    unsafe { core::mem::transmute(coeffs) }
}

/// Serialize a BaseField element using the Plonky3 raw-data format.
pub fn to_bytes(elem: BaseField) -> [u8; <BaseField as RawDataSerializable>::NUM_BYTES] {
    let bytes: Vec<u8> = elem.into_bytes().into_iter().collect();
    bytes.try_into().expect("basefield byte length")
}

/// Serialize a BaseField element into little-endian u32 words.
pub fn to_u32s(elem: BaseField) -> [u32; <BaseField as RawDataSerializable>::NUM_BYTES / 4] {
    let words: Vec<u32> = BaseField::into_u32_stream([elem]).into_iter().collect();
    words.try_into().expect("basefield u32 length")
}

/// The KoalaBear field modulus, `2^31 - 2^24 + 1`.
const KOALA_BEAR_P: u64 = 2_130_706_433;

/// Reconstruct a BaseField element from its little-endian u32 words (the
/// inverse of [`to_u32s`]). Words are reduced mod the KoalaBear prime so
/// out-of-range wire input cannot panic; callers deserializing untrusted
/// bytes should follow up with `Affine::is_on_curve` to reject invalid
/// points rather than relying on this reduction for validation.
pub fn from_u32s(words: [u32; 8]) -> BaseField {
    from_coeffs(words.map(|w| KoalaBear::new((w as u64 % KOALA_BEAR_P) as u32)))
}

/// Reconstruct a BaseField element from its little-endian byte encoding (the
/// inverse of [`to_bytes`]).
pub fn from_bytes(bytes: [u8; 32]) -> BaseField {
    let mut words = [0u32; 8];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().expect("4-byte chunk"));
    }
    from_u32s(words)
}
