use byteorder::{BigEndian, ByteOrder};
use tracing::{trace, warn};

use crate::compress::{self, Block, ChainingState, Schedule, States};
use crate::dvs::{DisturbanceVector, DvKind};
use crate::ubc::{DisturbanceVectorTable, SHA1_TABLE};

/// Config selects how blocks are checked for collision attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Check blocks at all. With detection off the context is plain SHA-1.
    pub detect_collisions: bool,
    /// Filter candidates with the unavoidable bit conditions before
    /// recompressing. Turning it off recompresses every vector on every block.
    pub use_ubc: bool,
    /// Compress a block found to be part of an attack two more times, so the
    /// digest of an attacked message differs from its plain SHA-1 digest.
    pub safe_hash: bool,
    /// Also report blocks whose reconstructed input chaining value matches the
    /// real one, which is what collisions of reduced-round SHA-1 look like.
    pub detect_reduced_round: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detect_collisions: true,
            use_ubc: true,
            safe_hash: false,
            detect_reduced_round: false,
        }
    }
}

impl Config {
    /// detect_collisions sets `detect_collisions`.
    pub fn detect_collisions(mut self, v: bool) -> Self {
        self.detect_collisions = v;
        self
    }

    /// use_ubc sets `use_ubc`.
    pub fn use_ubc(mut self, v: bool) -> Self {
        self.use_ubc = v;
        self
    }

    /// safe_hash sets `safe_hash`.
    pub fn safe_hash(mut self, v: bool) -> Self {
        self.safe_hash = v;
        self
    }

    /// detect_reduced_round sets `detect_reduced_round`.
    pub fn detect_reduced_round(mut self, v: bool) -> Self {
        self.detect_reduced_round = v;
        self
    }
}

/// CollisionBlock describes a block confirmed to be the second block of a
/// near-collision attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionBlock {
    /// Byte offset of the block in the hashed stream.
    pub offset: u64,
    /// Family of the disturbance vector the attack follows.
    pub kind: DvKind,
    /// K of the disturbance vector.
    pub k: u8,
    /// b of the disturbance vector.
    pub b: u8,
    /// Chaining value the block was compressed from.
    pub ihv1: ChainingState,
    /// Chaining value the companion block must start from to collide.
    pub ihv2: ChainingState,
    /// The block as hashed.
    pub m1: [u32; 16],
    /// The companion block of the attack.
    pub m2: [u32; 16],
}

impl CollisionBlock {
    /// block returns the offending block as bytes.
    pub fn block(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        BigEndian::write_u32_into(&self.m1, &mut out);
        out
    }

    /// companion_block returns the colliding companion block as bytes.
    pub fn companion_block(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        BigEndian::write_u32_into(&self.m2, &mut out);
        out
    }
}

/// DetectorState is the per-context progress of the detector.
#[derive(Clone, Debug, Default)]
pub struct DetectorState {
    blocks: u64,
    candidates: u32,
    collision: Option<CollisionBlock>,
}

impl DetectorState {
    /// blocks is the number of blocks processed since the last reset.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// candidates is the mask of vectors that passed the bit conditions on the
    /// last processed block.
    pub fn candidates(&self) -> u32 {
        self.candidates
    }

    /// collision is the first confirmed attack block, if any.
    pub fn collision(&self) -> Option<&CollisionBlock> {
        self.collision.as_ref()
    }
}

/// Detector compresses blocks while checking each one against a table of
/// disturbance vectors.
#[derive(Clone)]
pub struct Detector {
    config: Config,
    table: &'static DisturbanceVectorTable,
    state: DetectorState,
}

impl Detector {
    /// new returns a detector for the known SHA-1 attacks.
    pub fn new(config: Config) -> Self {
        Self::with_table(config, &SHA1_TABLE)
    }

    /// with_table returns a detector checking blocks against `table`.
    pub fn with_table(config: Config, table: &'static DisturbanceVectorTable) -> Self {
        Self {
            config,
            table,
            state: DetectorState::default(),
        }
    }

    /// config returns the configuration the detector was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// state returns the progress since the last reset.
    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// collision_detected reports whether an attack block was processed.
    pub fn collision_detected(&self) -> bool {
        self.state.collision.is_some()
    }

    /// reset forgets every processed block and any detection.
    pub fn reset(&mut self) {
        self.state = DetectorState::default();
    }

    /// adopt_outcome copies a detection made by `other`, a copy of this
    /// detector that went on processing blocks, without taking its progress.
    pub(crate) fn adopt_outcome(&mut self, other: &Detector) {
        if self.state.collision.is_none() {
            self.state.collision = other.state.collision.clone();
        }
    }

    /// process compresses one block into `ihv`.
    pub fn process(&mut self, ihv: &mut ChainingState, block: &Block) {
        let offset = self.state.blocks * 64;
        self.state.blocks += 1;

        let w = compress::expand(block);
        if !self.config.detect_collisions {
            self.state.candidates = 0;
            compress::compress(ihv, &w);
            return;
        }

        let ihv1 = *ihv;
        let mut states = [[0u32; 5]; 80];
        compress::compress_with_states(ihv, &w, &mut states);

        let mask = if self.config.use_ubc {
            self.table.check(&w)
        } else {
            self.table.families()
        };
        self.state.candidates = mask;
        if mask == 0 {
            return;
        }

        if let Some(found) = self.verify(mask, &ihv1, ihv, &w, &states, offset) {
            warn!(
                offset,
                kind = %found.kind,
                k = found.k,
                b = found.b,
                "SHA-1 collision attack detected"
            );
            if self.config.safe_hash {
                compress::compress(ihv, &w);
                compress::compress(ihv, &w);
            }
            if self.state.collision.is_none() {
                self.state.collision = Some(found);
            }
        }
    }

    // verify recompresses the companion block of every candidate vector and
    // returns the first one that ends in the same chaining value.
    fn verify(
        &self,
        mask: u32,
        ihv1: &ChainingState,
        ihv: &ChainingState,
        w: &Schedule,
        states: &States,
        offset: u64,
    ) -> Option<CollisionBlock> {
        let mut m2 = [0u32; 80];
        for dv in self.table.vectors().iter().filter(|dv| mask & dv.mask() != 0) {
            companion(w, dv, &mut m2);
            let (ihv2, out2) = compress::recompress(dv.test, &m2, states);

            if out2 == *ihv || (self.config.detect_reduced_round && ihv2 == *ihv1) {
                let mut found = CollisionBlock {
                    offset,
                    kind: dv.kind,
                    k: dv.k,
                    b: dv.b,
                    ihv1: *ihv1,
                    ihv2,
                    m1: [0; 16],
                    m2: [0; 16],
                };
                found.m1.copy_from_slice(&w[..16]);
                found.m2.copy_from_slice(&m2[..16]);
                return Some(found);
            }

            trace!(
                offset,
                kind = %dv.kind,
                k = dv.k,
                b = dv.b,
                "candidate rejected by recompression"
            );
        }
        None
    }
}

// companion writes into m2 the schedule an attack along dv pairs with w.
fn companion(w: &Schedule, dv: &DisturbanceVector, m2: &mut Schedule) {
    m2.iter_mut()
        .zip(w.iter().zip(dv.dm.iter()))
        .for_each(|(m2, (m1, dm))| *m2 = m1 ^ dm);
}
