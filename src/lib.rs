#![warn(missing_docs)]
//! SHA-1 with counter-cryptanalytic collision detection.
//!
//! Every compressed block is checked against the disturbance vectors of the
//! known SHA-1 collision attacks. A block that passes the unavoidable bit
//! conditions of a vector is recompressed along with the companion block the
//! attack would pair it with; if both reach the same chaining value, the
//! message is flagged. Ordinary inputs hash to their plain SHA-1 digest.
//!
//! Two APIs are offered: [`Sha1CD`], a streaming context that keeps
//! accepting data after a sum, and [`Sha1CDHasher`], which plugs into the
//! `digest` traits.
//!
//! # Example
//! ```
//! use sha1cd::Sha1CD;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = Sha1CD::new();
//!   let bytes_written = h.write("hello world".as_bytes());
//!   println!("Bytes written: {}", bytes_written);
//!   let output = h.checked_sum()?;
//!   println!("Result: {}", hex::encode(&output));
//!
//!   Ok(())
//! }
//! ```

/// `compress` is the SHA-1 compression function, with state recording and recompression.
pub mod compress;
/// `detector` checks compressed blocks for collision attacks.
pub mod detector;
/// `dvs` holds the disturbance vectors of the known attacks.
pub mod dvs;
/// `error` is the error returned when an attack is detected.
pub mod error;
/// `sha1cd` is a streaming SHA-1 context with collision detection.
pub mod sha1cd;
/// `sha1cdcore` adapts the detector to the `digest` traits.
pub mod sha1cdcore;
/// `ubc` holds the unavoidable bit conditions used to filter candidates.
pub mod ubc;

pub use detector::{CollisionBlock, Config};
pub use error::{Error, Result};
pub use sha1cd::Sha1CD;
pub use sha1cdcore::{checked_finalize, Sha1CDCore, Sha1CDHasher};

#[cfg(test)]
pub(crate) fn test_input(label: &str, len: usize) -> Vec<u8> {
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    let mut shake = sha3::Shake256::default();
    shake.update(label.as_bytes());
    let mut out = vec![0u8; len];
    shake.finalize_xof().read(&mut out);
    out
}

#[cfg(test)]
pub(crate) fn test_block(label: &str) -> compress::Block {
    let mut block = [0u8; 64];
    block.copy_from_slice(&test_input(label, 64));
    block
}

// A table whose only vector has no difference: every block verifies against it.
#[cfg(test)]
pub(crate) static ZERO_DV: [dvs::DisturbanceVector; 1] = [dvs::DisturbanceVector {
    kind: dvs::DvKind::I,
    k: 0,
    b: 0,
    test: dvs::TestStep::Step58,
    mask_bit: 0,
    dm: [0; 80],
}];

#[cfg(test)]
pub(crate) static ZERO_TABLE: once_cell::sync::Lazy<ubc::DisturbanceVectorTable> =
    once_cell::sync::Lazy::new(|| ubc::DisturbanceVectorTable::new(&ZERO_DV, &[]));
