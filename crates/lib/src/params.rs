//! SHA-3 family parameter table.
//!
//! One static row per family: absorption rate in bytes, mandated digest
//! length (0 for the extendable-output families, where the caller picks the
//! length at finish time) and the domain-separation suffix XORed into the
//! state right after the final message byte. Lookup is a `const fn` match;
//! no dynamic dispatch.

/// Width of the Keccak-f[1600] state in bytes.
pub(crate) const STATE_BYTES: usize = 200;

/// Largest rate over all families (SHAKE128 / cSHAKE128), in bytes.
pub(crate) const MAX_RATE: usize = 168;

/// Domain-separation suffix for the fixed-digest SHA3 families.
const SHA3_SUFFIX: u8 = 0x06;
/// Suffix for SHAKE, and for cSHAKE without any framing strings.
const SHAKE_SUFFIX: u8 = 0x1F;
/// Suffix for cSHAKE once a framed name or customization string is absorbed.
pub(crate) const CSHAKE_SUFFIX: u8 = 0x04;

/// SHA-3 family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// SHA3-224 (FIPS 202).
    Sha3_224,
    /// SHA3-256 (FIPS 202).
    Sha3_256,
    /// SHA3-384 (FIPS 202).
    Sha3_384,
    /// SHA3-512 (FIPS 202).
    Sha3_512,
    /// SHAKE128 XOF (FIPS 202).
    Shake128,
    /// SHAKE256 XOF (FIPS 202).
    Shake256,
    /// cSHAKE128 XOF (SP 800-185).
    CShake128,
    /// cSHAKE256 XOF (SP 800-185).
    CShake256,
}

/// Started sponge parameters; one row of the family table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Params {
    pub(crate) id: Family,
    /// Absorption rate r in bytes; positive multiple of 8, at most [`MAX_RATE`].
    pub(crate) rate: usize,
    /// Mandated digest length in bytes; 0 means caller-chosen (XOF).
    pub(crate) digest_len: usize,
    /// Domain-separation byte, XORed before the 0x80 pad bit.
    pub(crate) suffix: u8,
}

impl Family {
    pub(crate) const fn params(self) -> Params {
        let (rate, digest_len, suffix) = match self {
            Family::Sha3_224 => (144, 28, SHA3_SUFFIX),
            Family::Sha3_256 => (136, 32, SHA3_SUFFIX),
            Family::Sha3_384 => (104, 48, SHA3_SUFFIX),
            Family::Sha3_512 => (72, 64, SHA3_SUFFIX),
            // cSHAKE starts out as plain SHAKE; the 0x04 suffix applies only
            // once a non-empty name or customization string is framed.
            Family::Shake128 | Family::CShake128 => (168, 0, SHAKE_SUFFIX),
            Family::Shake256 | Family::CShake256 => (136, 0, SHAKE_SUFFIX),
        };
        Params {
            id: self,
            rate,
            digest_len,
            suffix,
        }
    }

    /// True for the two SP 800-185 customizable families.
    pub(crate) const fn is_cshake(self) -> bool {
        matches!(self, Family::CShake128 | Family::CShake256)
    }
}

const _: () = {
    macro_rules! check_family {
        ($f:expr) => {
            let p = $f.params();
            assert!(p.rate > 0 && p.rate % 8 == 0 && p.rate <= MAX_RATE);
            // Fixed-digest families keep a capacity of twice the digest length.
            assert!(p.digest_len == 0 || p.rate == STATE_BYTES - 2 * p.digest_len);
        };
    }
    check_family!(Family::Sha3_224);
    check_family!(Family::Sha3_256);
    check_family!(Family::Sha3_384);
    check_family!(Family::Sha3_512);
    check_family!(Family::Shake128);
    check_family!(Family::Shake256);
    check_family!(Family::CShake128);
    check_family!(Family::CShake256);
};
