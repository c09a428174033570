use byteorder::{BigEndian, ByteOrder};

use crate::dvs::TestStep;

/// ChainingState is the five-word SHA-1 state carried from one block to the next.
pub type ChainingState = [u32; 5];

/// Schedule is the fully expanded message of one block, one word per step.
pub type Schedule = [u32; 80];

/// States holds the working registers (a, b, c, d, e) as they are before each step.
pub type States = [[u32; 5]; 80];

/// IV is the SHA-1 initial chaining value.
pub const IV: ChainingState = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[inline(always)]
fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => d ^ (b & (c ^ d)),
        40..=59 => (b & c) | (d & (b | c)),
        _ => b ^ c ^ d,
    }
}

#[inline(always)]
fn step(t: usize, s: &mut [u32; 5], w: u32) {
    let [a, b, c, d, e] = *s;
    let tmp = a
        .rotate_left(5)
        .wrapping_add(f(t, b, c, d))
        .wrapping_add(e)
        .wrapping_add(K[t / 20])
        .wrapping_add(w);
    *s = [tmp, a, b.rotate_left(30), c, d];
}

// step_back undoes step t: s holds the registers after the step and ends up
// holding the registers before it.
#[inline(always)]
fn step_back(t: usize, s: &mut [u32; 5], w: u32) {
    let [a, b, c, d, e] = *s;
    let (pa, pb, pc, pd) = (b, c.rotate_right(30), d, e);
    let pe = a.wrapping_sub(
        pa.rotate_left(5)
            .wrapping_add(f(t, pb, pc, pd))
            .wrapping_add(K[t / 20])
            .wrapping_add(w),
    );
    *s = [pa, pb, pc, pd, pe];
}

#[inline(always)]
fn feed_forward(ihv: &ChainingState, s: &[u32; 5]) -> ChainingState {
    let mut out = *ihv;
    out.iter_mut().zip(s.iter()).for_each(|(h, x)| *h = h.wrapping_add(*x));
    out
}

/// Block is one 64-byte SHA-1 message block.
pub type Block = [u8; 64];

/// expand reads a block as 16 big-endian words and extends it to the 80-word
/// schedule: `w[t] = rotl1(w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16])`.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; 80];
    BigEndian::read_u32_into(block, &mut w[..16]);
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// compress advances `ihv` by one block whose schedule is `w`.
pub fn compress(ihv: &mut ChainingState, w: &Schedule) {
    let mut s = *ihv;
    for (t, wt) in w.iter().enumerate() {
        step(t, &mut s, *wt);
    }
    *ihv = feed_forward(ihv, &s);
}

/// compress_with_states is `compress`, additionally recording in `states` the
/// working registers before every step.
pub fn compress_with_states(ihv: &mut ChainingState, w: &Schedule, states: &mut States) {
    let mut s = *ihv;
    for (t, wt) in w.iter().enumerate() {
        states[t] = s;
        step(t, &mut s, *wt);
    }
    *ihv = feed_forward(ihv, &s);
}

/// recompress reconstructs the compression of schedule `w` from the registers
/// recorded before `step` in `states`.
///
/// The steps before `step` are inverted to recover the input chaining value and
/// the remaining steps are run to obtain the output chaining value. Returns
/// `(ihv_in, ihv_out)`. Nothing outside the arguments is read or written, so the
/// real and the companion block can be recompressed independently.
pub fn recompress(step: TestStep, w: &Schedule, states: &States) -> (ChainingState, ChainingState) {
    let at = step.index();
    recompress_from(at, w, &states[at])
}

// recompress_from is recompress starting from the registers before step `at`,
// which must be below 80.
fn recompress_from(at: usize, w: &Schedule, state: &[u32; 5]) -> (ChainingState, ChainingState) {
    let mut s = *state;
    for t in (0..at).rev() {
        step_back(t, &mut s, w[t]);
    }
    let ihv_in = s;

    let mut s = *state;
    for t in at..80 {
        step(t, &mut s, w[t]);
    }
    (ihv_in, feed_forward(&ihv_in, &s))
}

/// to_bytes serializes a chaining value as the 20-byte big-endian digest.
pub fn to_bytes(ihv: &ChainingState) -> [u8; 20] {
    let mut out = [0u8; 20];
    BigEndian::write_u32_into(ihv, &mut out);
    out
}

/// blocks yields the complete blocks of `data`, ignoring a trailing partial block.
pub fn blocks(data: &[u8]) -> impl Iterator<Item = &Block> {
    data.chunks_exact(64).filter_map(|b| <&Block>::try_from(b).ok())
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::test_input;

    fn padded_abc() -> [u8; 64] {
        let mut block = [0u8; 64];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn schedule_keeps_the_block_words() {
        let w = expand(&padded_abc());
        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 0x00000018);
        assert_eq!(w[16], (w[13] ^ w[8] ^ w[2] ^ w[0]).rotate_left(1));
    }

    #[test]
    fn partial_blocks_are_skipped() {
        let input = test_input("blocks", 64 * 3 + 10);
        let all: Vec<&Block> = blocks(&input).collect();
        assert_eq!(all.len(), 3);
        assert_eq!(&all[2][..], &input[128..192]);
        assert_eq!(blocks(&input[..63]).count(), 0);
    }

    #[test]
    fn compression_of_single_block() {
        let mut ihv = IV;
        compress(&mut ihv, &expand(&padded_abc()));
        assert_eq!(
            hex::encode(to_bytes(&ihv)),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn recorded_states_do_not_change_the_result() {
        let input = test_input("compress states", 64 * 100);
        let mut h1 = IV;
        let mut h2 = IV;
        let mut states = [[0u32; 5]; 80];

        blocks(&input).for_each(|block| {
            let w = expand(block);
            compress(&mut h1, &w);
            compress_with_states(&mut h2, &w, &mut states);
            assert_eq!(h1, h2, "compress and compress_with_states differ");
        });
    }

    #[test]
    fn recompression_reproduces_both_chaining_values() {
        let input = test_input("recompression", 64 * 20);
        let mut ihv = [0x01234567, 0x89abcdef, 0xfedcba98, 0x76543210, 0xf0e1d2c3];
        let mut states = [[0u32; 5]; 80];

        blocks(&input).for_each(|block| {
            let w = expand(block);
            let ihv_in = ihv;
            compress_with_states(&mut ihv, &w, &mut states);

            for at in [0, 1, 19, 20, 40, 58, 60, 65, 79] {
                let (rin, rout) = recompress_from(at, &w, &states[at]);
                assert_eq!(rin, ihv_in, "input chaining value at step {}", at);
                assert_eq!(rout, ihv, "output chaining value at step {}", at);
            }
            for step in [TestStep::Step58, TestStep::Step65] {
                assert_eq!(recompress(step, &w, &states), (ihv_in, ihv));
            }
        });
    }
}
