//! Exhaustive rotation‑invariance check.
//!
//! Fingerprints **every** rotation of a sequence and counts the distinct
//! digests.  A correct fingerprinter always reports exactly one.  This is
//! O(n²) by construction (n rotations × O(n) each) and is meant for
//! validating inputs or configurations, not for hot paths.

use std::collections::HashSet;

use sha2::Digest;

use crate::{
    alphabet::Alphabet,
    fingerprint::{Fingerprint, Fingerprinter},
    rotation::rotate,
    Result,
};

/// Outcome of [`check_rotation_invariance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvarianceReport {
    /// Number of rotations fingerprinted (the sequence length).
    pub rotations: usize,
    /// Number of distinct digests among them.
    pub distinct: usize,
    /// Fingerprint of the unrotated input.
    pub fingerprint: Fingerprint,
    /// First rotation index whose digest differed from rotation 0.
    pub mismatch: Option<usize>,
}

impl InvarianceReport {
    /// `true` when all rotations produced one single digest.
    #[inline]
    pub fn is_invariant(&self) -> bool {
        self.distinct == 1
    }
}

/// Fingerprint all rotations of `seq` with `fp` and compare the digests.
///
/// # Errors
///
/// Whatever `fp.fingerprint(seq)` fails with; an invalid sequence is
/// rejected before any rotation is built.
///
/// # Examples
///
/// ```
/// use circhash_rs::{check_rotation_invariance, Fingerprinter};
///
/// let fp: Fingerprinter = Fingerprinter::new();
/// let report = check_rotation_invariance(&fp, b"GATTACA").unwrap();
/// assert_eq!(report.rotations, 7);
/// assert!(report.is_invariant());
/// ```
pub fn check_rotation_invariance<A: Alphabet, H: Digest>(
    fp: &Fingerprinter<A, H>,
    seq: &[u8],
) -> Result<InvarianceReport> {
    let reference = fp.fingerprint(seq)?;
    let mut seen = HashSet::with_capacity(1);
    seen.insert(reference.clone());
    let mut mismatch = None;

    for i in 1..seq.len() {
        let digest = fp.fingerprint(&rotate(seq, i))?;
        if mismatch.is_none() && digest != reference {
            mismatch = Some(i);
        }
        seen.insert(digest);
    }

    Ok(InvarianceReport {
        rotations: seq.len(),
        distinct: seen.len(),
        fingerprint: reference,
        mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet::Dna, CircHashError};

    #[test]
    fn single_base() {
        let fp: Fingerprinter = Fingerprinter::new();
        let report = check_rotation_invariance(&fp, b"G").unwrap();
        assert_eq!(report.rotations, 1);
        assert_eq!(report.distinct, 1);
        assert_eq!(report.mismatch, None);
        assert!(report.is_invariant());
    }

    #[test]
    fn reference_matches_direct_fingerprint() {
        let fp = Fingerprinter::<Dna>::new();
        let report = check_rotation_invariance(&fp, b"TTGAGATCC").unwrap();
        assert_eq!(report.fingerprint, fp.fingerprint(b"TTGAGATCC").unwrap());
        assert_eq!(report.rotations, 9);
        assert!(report.is_invariant());
    }

    #[test]
    fn invalid_input_is_rejected_up_front() {
        let fp = Fingerprinter::<Dna>::new();
        assert_eq!(
            check_rotation_invariance(&fp, b""),
            Err(CircHashError::EmptySequence)
        );
        assert!(matches!(
            check_rotation_invariance(&fp, b"ACXT"),
            Err(CircHashError::InvalidSymbol { pos: 2, .. })
        ));
    }
}
