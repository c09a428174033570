use digest::{
    block_buffer::Eager,
    core_api::{Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U20, U64},
    HashMarker, Output, OutputSizeUser, Reset,
};

use byteorder::{BigEndian, ByteOrder};

use crate::compress::{self, ChainingState, IV};
use crate::detector::{CollisionBlock, Config, Detector};
use crate::error::{Error, Result};

/// Sha1CDHasher is the `digest::Digest` implementation built on Sha1CDCore.
pub type Sha1CDHasher = CoreWrapper<Sha1CDCore>;

/// Sha1CDCore is a core implementation of SHA-1 with collision detection.
///
/// `digest::Digest::finalize` has no way to report a detection, so the default
/// core runs in safe-hash mode: attacked messages get a digest different from
/// their SHA-1 digest. Use `checked_finalize` to observe the detection itself.
#[derive(Clone)]
pub struct Sha1CDCore {
    h: ChainingState, // hash chain (from last compression, or IV)
    len: u64,
    detector: Detector,
}

impl Default for Sha1CDCore {
    fn default() -> Self {
        Self::with_config(Config::default().safe_hash(true))
    }
}

impl Sha1CDCore {
    /// with_config returns a core checking blocks as `config` selects.
    pub fn with_config(config: Config) -> Self {
        Self::with_detector(Detector::new(config))
    }

    pub(crate) fn with_detector(detector: Detector) -> Self {
        Self {
            h: IV,
            len: 0,
            detector,
        }
    }

    /// collision_detected reports whether an attack block was compressed.
    pub fn collision_detected(&self) -> bool {
        self.detector.collision_detected()
    }

    /// collision describes the first attack block, if any.
    pub fn collision(&self) -> Option<&CollisionBlock> {
        self.detector.state().collision()
    }

    fn compress_block(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);
        for block in compress::blocks(data) {
            self.detector.process(&mut self.h, block);
        }
    }
}

impl Reset for Sha1CDCore {
    fn reset(&mut self) {
        self.h = IV;
        self.len = 0;
        self.detector.reset();
    }
}

impl HashMarker for Sha1CDCore {}

impl BlockSizeUser for Sha1CDCore {
    type BlockSize = U64;
}

impl BufferKindUser for Sha1CDCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha1CDCore {
    type OutputSize = U20;
}

impl FixedOutputCore for Sha1CDCore {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bitlen = self.len.wrapping_add(buffer.get_pos() as u64) << 3; // number of input bits written
        let mut tmp = [0; 8];
        BigEndian::write_u64(&mut tmp, bitlen);
        buffer.digest_pad(0x80, &tmp, |a| self.compress_block(a));

        out.copy_from_slice(&compress::to_bytes(&self.h));
    }
}

impl UpdateCore for Sha1CDCore {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for b in blocks {
            self.compress_block(b)
        }
    }
}

/// checked_finalize finalizes `hasher`, failing if any block, including the
/// padding, was found to be part of a collision attack.
pub fn checked_finalize(hasher: Sha1CDHasher) -> Result<Output<Sha1CDCore>> {
    let (mut core, mut buffer) = hasher.decompose();
    let mut out = Output::<Sha1CDCore>::default();
    core.finalize_fixed_core(&mut buffer, &mut out);

    match core.collision() {
        Some(c) => Err(Error::from(c)),
        None => Ok(out),
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::sha1cd::test::{SHAMBLES_1, SHAMBLES_2};
    use crate::{test_input, ZERO_TABLE};
    use digest::FixedOutput;
    use sha1::{Digest, Sha1};

    struct TestElement {
        input: &'static str,
        output: &'static str,
    }

    static TEST_VECTOR: &[TestElement] = &[
        TestElement {
            input: "",
            output: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        TestElement {
            input: "a",
            output: "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8",
        },
        TestElement {
            input: "abc",
            output: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        TestElement {
            input: "message digest",
            output: "c12252ceda8be8994d5fa0290a47231c1d16aae3",
        },
        TestElement {
            input: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            output: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        },
    ];

    #[test]
    fn test_vector() {
        TEST_VECTOR.iter().enumerate().for_each(|(i, element)| {
            let mut h = Sha1CDHasher::default();

            h.update(element.input.as_bytes());

            let sum = hex::encode(h.finalize_fixed());
            assert_eq!(
                element.output, sum,
                "test vector element mismatched on index {} failed! got {}, want {}",
                i, sum, element.output
            );
        })
    }

    #[test]
    fn sha1cd() {
        let input = test_input("sha1cd input", 6000);

        let mut h = Sha1CDHasher::default();
        h.update(&input);
        let sum = h.finalize_fixed();

        assert_eq!(sum.to_vec(), Sha1::digest(&input).to_vec());
    }

    #[test]
    fn works_as_digest() {
        let input = test_input("digest", 777);
        let sum = <Sha1CDHasher as Digest>::digest(&input);
        assert_eq!(sum.to_vec(), Sha1::digest(&input).to_vec());
    }

    #[test]
    fn sha1cd_reset() {
        let input = test_input("sha1cd", 6000);

        let mut h = Sha1CDHasher::default();
        h.update(&input);
        h.update(&input);

        let input = test_input("sha1cd input", 6000);
        Reset::reset(&mut h);
        h.update(&input);

        let sum = h.finalize_fixed();
        assert_eq!(sum.to_vec(), Sha1::digest(&input).to_vec());
    }

    #[test]
    fn checked_finalize_of_ordinary_input() -> anyhow::Result<()> {
        let input = test_input("checked", 1000);
        let mut h = Sha1CDHasher::default();
        h.update(&input);
        let sum = checked_finalize(h)?;
        assert_eq!(sum.to_vec(), Sha1::digest(&input).to_vec());
        Ok(())
    }

    #[test]
    fn detection_through_the_core() {
        let input = test_input("core detection", 100);
        let detector = || Detector::with_table(Config::default().safe_hash(true), &ZERO_TABLE);

        let mut h = CoreWrapper::from_core(Sha1CDCore::with_detector(detector()));
        h.update(&input);
        let err = checked_finalize(h).unwrap_err();
        assert!(matches!(err, Error::Collision { offset: 0, .. }));

        // Plain finalization cannot report it, but safe hashing shows in the digest.
        let mut h = CoreWrapper::from_core(Sha1CDCore::with_detector(detector()));
        h.update(&input);
        assert_ne!(h.finalize_fixed().to_vec(), Sha1::digest(&input).to_vec());
    }

    #[test]
    fn shambles_through_the_core() {
        let cases = [
            (SHAMBLES_1, "4f3d9be4a472c4dae83c6314aa6c36a064c1fd14"),
            (SHAMBLES_2, "9ed5d77a4f48be1dbf3e9e15650733eb850897f2"),
        ];
        for (input, safe) in cases {
            let mut h = Sha1CDHasher::default();
            h.update(input);
            assert_eq!(hex::encode(h.finalize_fixed()), safe);

            let mut h = Sha1CDHasher::default();
            h.update(input);
            let err = checked_finalize(h).unwrap_err();
            assert!(matches!(err, Error::Collision { offset: 576, k: 52, .. }));

            let mut h = CoreWrapper::from_core(Sha1CDCore::with_config(Config::default()));
            h.update(input);
            assert_eq!(
                hex::encode(h.finalize_fixed()),
                "8ac60ba76f1999a1ab70223f225aefdc78d4ddc0"
            );
        }
    }
}
