//! Symbol alphabets and the byte encoding fed to the hash primitive.
//!
//! Every symbol is a single ASCII letter and is encoded as **its own byte
//! value**, one byte per symbol.  This is exactly the UTF‑8 encoding of the
//! same text, so a digest computed here matches a digest computed over the
//! equivalent string anywhere else.  Changing this mapping changes every
//! fingerprint, so it is fixed:
//!
//! ```text
//!   'A' -> 0x41   'C' -> 0x43   'G' -> 0x47   'T' -> 0x54   ...
//! ```
//!
//! An alphabet is a zero‑sized marker type implementing [`Alphabet`].  Bytes
//! outside the alphabet are rejected with
//! [`CircHashError::InvalidSymbol`]; they are never dropped or replaced.

use std::borrow::Cow;

use crate::{CircHashError, Result};

/// A finite, totally ordered set of single‑byte symbols.
pub trait Alphabet: 'static {
    /// Human‑readable name used in error messages.
    const NAME: &'static str;

    /// The accepted (upper‑case) bytes.
    const VALID_BYTES: &'static [u8];

    /// Is `b` a member of this alphabet?
    #[inline]
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// Unambiguous DNA: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dna;

impl Alphabet for Dna {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";

    #[inline]
    fn is_valid(b: u8) -> bool {
        matches!(b, b'A' | b'C' | b'G' | b'T')
    }
}

/// IUPAC nucleotide codes: `ACGTNRYSWKMBDHV`.
///
/// The default alphabet, since assembled plasmids routinely carry `N`
/// and other ambiguity codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IupacDna;

impl Alphabet for IupacDna {
    const NAME: &'static str = "IUPAC DNA";
    const VALID_BYTES: &'static [u8] = b"ACGTNRYSWKMBDHV";
}

/// Any printable, non‑space ASCII byte (`0x21..=0x7E`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ascii;

impl Alphabet for Ascii {
    const NAME: &'static str = "ASCII";
    const VALID_BYTES: &'static [u8] = b"!\"#$%&'()*+,-./0123456789:;<=>?@\
ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

    #[inline]
    fn is_valid(b: u8) -> bool {
        b.is_ascii_graphic()
    }
}

/// Encode `seq` into the bytes that get hashed.
///
/// With `fold_case`, lower‑case letters are upper‑cased before validation;
/// the input is only copied when folding actually changes something.
///
/// # Errors
///
/// [`CircHashError::InvalidSymbol`] for the first byte not in `A`, with its
/// position in `seq`.
pub fn encode<A: Alphabet>(seq: &[u8], fold_case: bool) -> Result<Cow<'_, [u8]>> {
    let bytes: Cow<'_, [u8]> = if fold_case && seq.iter().any(u8::is_ascii_lowercase) {
        Cow::Owned(seq.to_ascii_uppercase())
    } else {
        Cow::Borrowed(seq)
    };

    if let Some(pos) = bytes.iter().position(|&b| !A::is_valid(b)) {
        return Err(CircHashError::InvalidSymbol {
            symbol: seq[pos],
            pos,
            alphabet: A::NAME,
        });
    }
    Ok(bytes)
}
