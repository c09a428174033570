use thiserror::Error;

use crate::detector::CollisionBlock;
use crate::dvs::DvKind;

/// Error is returned by the checked finalizers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A block of the message is part of a known collision attack.
    #[error("SHA-1 collision attack detected in block at offset {offset} (disturbance vector {kind}({k},{b}))")]
    Collision {
        /// Byte offset of the attack block.
        offset: u64,
        /// Family of the disturbance vector.
        kind: DvKind,
        /// K of the disturbance vector.
        k: u8,
        /// b of the disturbance vector.
        b: u8,
    },
}

impl From<&CollisionBlock> for Error {
    fn from(c: &CollisionBlock) -> Self {
        Error::Collision {
            offset: c.offset,
            kind: c.kind,
            k: c.k,
            b: c.b,
        }
    }
}

/// Result is the result type of the checked finalizers.
pub type Result<T> = std::result::Result<T, Error>;
