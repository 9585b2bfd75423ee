//! Rotation‑invariant fingerprints of circular sequences.
//!
//! The pipeline is strictly one‑way:
//!
//! ```text
//!   raw bytes ──encode/validate──▶ symbols ──least rotation──▶ canonical
//!             ──hash primitive──▶ Fingerprint
//! ```
//!
//! Because every rotation of a sequence has the same canonical form, every
//! rotation also has the same fingerprint.  The default configuration
//! (IUPAC DNA, SHA‑256) yields `sha256(minimal_rotation(seq))`, rendered as
//! 64 lower‑case hex characters, so digests stored by earlier tools over the
//! same canonical text remain comparable.

use std::fmt;
use std::marker::PhantomData;

use sha2::{Digest, Sha256};

use crate::{
    alphabet::{encode, Alphabet, IupacDna},
    rotation::{least_rotation, rotate},
    Result,
};

/// Digest bytes of one canonical sequence.
///
/// Fixed width for a given hash primitive (32 bytes for SHA‑256).
/// `Display` renders lower‑case hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    /// Raw digest bytes.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest width in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for digests produced by this crate.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower‑case hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Consume and return the digest bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Configured fingerprinting of circular sequences.
///
/// - `A` — the accepted symbol [`Alphabet`] (default [`IupacDna`]).
/// - `H` — the hash primitive, any [`sha2::Digest`] (default [`Sha256`]).
///
/// A `Fingerprinter` holds no state between calls and is `Send + Sync`; one
/// value can serve any number of threads.
///
/// ```
/// use circhash_rs::{alphabet::Dna, Fingerprinter};
///
/// let fp = Fingerprinter::<Dna>::new().fold_case(true);
/// let a = fp.fingerprint(b"gattaca").unwrap();
/// let b = fp.fingerprint(b"TACAGAT").unwrap();
/// assert_eq!(a, b);
/// ```
pub struct Fingerprinter<A: Alphabet = IupacDna, H: Digest = Sha256> {
    fold_case: bool,
    _marker: PhantomData<fn() -> (A, H)>,
}

impl<A: Alphabet, H: Digest> Fingerprinter<A, H> {
    /// Strict fingerprinter: input must already be upper‑case.
    pub fn new() -> Self {
        Fingerprinter {
            fold_case: false,
            _marker: PhantomData,
        }
    }

    /// Upper‑case the input before validating it.
    pub fn fold_case(mut self, yes: bool) -> Self {
        self.fold_case = yes;
        self
    }

    /// Canonical (minimal‑rotation) form of `seq` as encoded bytes.
    ///
    /// # Errors
    ///
    /// `EmptySequence` for empty input, `InvalidSymbol` for a byte outside
    /// the alphabet.
    pub fn canonical(&self, seq: &[u8]) -> Result<Vec<u8>> {
        let bytes = encode::<A>(seq, self.fold_case)?;
        let k = least_rotation(&*bytes)?;
        Ok(rotate(&bytes[..], k))
    }

    /// Rotation‑invariant fingerprint of `seq`.
    ///
    /// All validation happens before the hash primitive is touched; a
    /// failing call produces no digest.
    pub fn fingerprint(&self, seq: &[u8]) -> Result<Fingerprint> {
        let canonical = self.canonical(seq)?;
        Ok(Fingerprint(H::digest(&canonical).to_vec()))
    }
}

impl<A: Alphabet, H: Digest> Default for Fingerprinter<A, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Alphabet, H: Digest> Clone for Fingerprinter<A, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Alphabet, H: Digest> Copy for Fingerprinter<A, H> {}

impl<A: Alphabet, H: Digest> fmt::Debug for Fingerprinter<A, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprinter")
            .field("alphabet", &A::NAME)
            .field("fold_case", &self.fold_case)
            .finish()
    }
}

/// Fingerprint `seq` with the default configuration (strict IUPAC DNA,
/// SHA‑256).
pub fn fingerprint(seq: &[u8]) -> Result<Fingerprint> {
    Fingerprinter::<IupacDna, Sha256>::new().fingerprint(seq)
}

/// [`fingerprint`] rendered as lower‑case hex.
pub fn fingerprint_hex(seq: &[u8]) -> Result<String> {
    fingerprint(seq).map(|fp| fp.to_hex())
}
