//! Least lexicographic rotation of a circular sequence (Booth's algorithm).
//!
//! A circular sequence has no natural start, so every one of its `n`
//! rotations is an equally valid spelling.  The *canonical form* picks the
//! lexicographically smallest one, which is what gets hashed.
//!
//! Materialising all rotations and taking the minimum costs **O(n²)** time
//! and memory.  [`least_rotation`] instead runs Booth's failure‑function
//! scan over the sequence doubled end‑to‑end, in **O(n)** time with a
//! single scratch table of `2n` entries.  The doubling is virtual: position
//! `j` of the doubled sequence is read as `seq[j % n]`.
//!
//! The functions are generic over any `T: Ord`, so they work on raw bytes,
//! `char`s, or any other totally ordered symbol type.

use crate::{CircHashError, Result};

/// Start index of a lexicographically minimal rotation of `seq`.
///
/// The returned `k` satisfies `k < seq.len()` and
/// `seq[k..] ++ seq[..k] <= seq[i..] ++ seq[..i]` for every `i`.  For
/// periodic inputs several indices qualify; which one is returned is
/// unspecified, but the rotation they spell is the same.
///
/// # Errors
///
/// [`CircHashError::EmptySequence`] if `seq` is empty.
///
/// # Examples
///
/// ```
/// use circhash_rs::least_rotation;
///
/// assert_eq!(least_rotation(b"CAB").unwrap(), 1);
/// assert_eq!(least_rotation(&[7]).unwrap(), 0);
/// ```
pub fn least_rotation<T: Ord>(seq: &[T]) -> Result<usize> {
    let n = seq.len();
    match n {
        0 => return Err(CircHashError::EmptySequence),
        1 => return Ok(0),
        _ => {}
    }

    // fail[x] = length of the longest proper border of the candidate
    // prefix of length x+1, i.e. the classic failure function shifted by
    // one so that 0 means "no match" instead of -1.
    let mut fail = vec![0usize; 2 * n];
    let mut k = 0usize;

    for j in 1..2 * n {
        let sj = &seq[j % n];
        let mut m = fail[j - k - 1];

        while m > 0 && *sj != seq[(k + m) % n] {
            if *sj < seq[(k + m) % n] {
                // a rotation starting at j-m beats the current candidate
                k = j - m;
            }
            m = fail[m - 1];
        }

        if *sj != seq[(k + m) % n] {
            // m == 0 here
            if *sj < seq[k % n] {
                k = j;
            }
            fail[j - k] = 0;
        } else {
            fail[j - k] = m + 1;
        }
    }

    Ok(k % n)
}

/// The lexicographically minimal rotation of `seq`.
///
/// Only the winning rotation is allocated.
///
/// # Errors
///
/// [`CircHashError::EmptySequence`] if `seq` is empty.
///
/// # Examples
///
/// ```
/// use circhash_rs::minimal_rotation;
///
/// assert_eq!(minimal_rotation(b"GATTACA").unwrap(), b"ACAGATT");
/// ```
pub fn minimal_rotation<T: Ord + Clone>(seq: &[T]) -> Result<Vec<T>> {
    let k = least_rotation(seq)?;
    Ok(rotate(seq, k))
}

/// Rotate `seq` left by `i` positions (taken modulo its length).
///
/// `rotate(s, 0) == s`; an empty input yields an empty vector.
#[inline]
pub fn rotate<T: Clone>(seq: &[T], i: usize) -> Vec<T> {
    if seq.is_empty() {
        return Vec::new();
    }
    let i = i % seq.len();
    let mut out = Vec::with_capacity(seq.len());
    out.extend_from_slice(&seq[i..]);
    out.extend_from_slice(&seq[..i]);
    out
}

/// Are `a` and `b` rotations of one another?
///
/// Two equal‑length sequences are cyclic shifts of each other exactly when
/// their minimal rotations coincide.  Runs in O(n) without allocating the
/// rotations.
pub fn is_rotation_of<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let (ka, kb) = match (least_rotation(a), least_rotation(b)) {
        (Ok(ka), Ok(kb)) => (ka, kb),
        // both empty
        _ => return true,
    };
    let n = a.len();
    (0..n).all(|i| a[(ka + i) % n] == b[(kb + i) % n])
}
