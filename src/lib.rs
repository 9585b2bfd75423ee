//! # circhash‑rs
//!
//! Rotation‑invariant fingerprints for **circular sequences** such as
//! plasmids and circular genomes.
//!
//! A circular sequence can be written starting at any position, so the same
//! molecule has `n` different linear spellings.  This crate maps all of them
//! to one digest:
//!
//! - [`rotation::least_rotation`] / [`rotation::minimal_rotation`]: the
//!   lexicographically smallest rotation (the *canonical form*) in **O(n)**
//!   using Booth's algorithm.
//! - [`fingerprint::Fingerprinter`]: validates the input against an
//!   [`alphabet::Alphabet`], canonicalizes it and feeds the canonical bytes
//!   to a hash primitive (SHA‑256 by default).
//! - [`verify::check_rotation_invariance`]: fingerprints every rotation and
//!   confirms they all agree.
//!
//! All functions are pure: no I/O, no global state, safe to call from any
//! number of threads at once.
//!
//! ## Example
//!
//! ```rust
//! use circhash_rs::{fingerprint, minimal_rotation, rotate, Result};
//!
//! fn main() -> Result<()> {
//!     let seq = b"GATTACA";
//!
//!     // Canonical form is independent of the starting point
//!     assert_eq!(minimal_rotation(seq)?, b"ACAGATT");
//!
//!     // ... and so is the fingerprint
//!     let fp = fingerprint(seq)?;
//!     for i in 0..seq.len() {
//!         assert_eq!(fingerprint(&rotate(seq, i))?, fp);
//!     }
//!     println!("GATTACA: {}", fp);
//!     Ok(())
//! }
//! ```

pub mod alphabet;
/// Booth's least‑rotation search and rotation helpers.
pub mod rotation;
pub mod fingerprint;
pub mod verify;

// ──────────────────────────────────────────────────────────────
// Re‑exports: public API surface
// --------------------------------------------------------------------------

pub use alphabet::{Alphabet, Ascii, Dna, IupacDna};

/// Start index of the least rotation.
pub use rotation::least_rotation;
/// Materialized least rotation (the canonical form).
pub use rotation::minimal_rotation;
pub use rotation::{is_rotation_of, rotate};

pub use fingerprint::{fingerprint, fingerprint_hex, Fingerprint, Fingerprinter};

pub use verify::{check_rotation_invariance, InvarianceReport};

// ──────────────────────────────────────────────────────────────
// Crate‑wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate’s operations.
pub type Result<T, E = CircHashError> = std::result::Result<T, E>;

/// Errors raised before any digest is computed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CircHashError {
    /// The sequence had no symbols, so it has no rotation.
    #[error("sequence is empty")]
    EmptySequence,

    /// A byte outside the configured alphabet.
    #[error("invalid {alphabet} symbol 0x{symbol:02X} at position {pos}")]
    InvalidSymbol {
        symbol: u8,
        pos: usize,
        alphabet: &'static str,
    },
}
