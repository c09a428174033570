/// Family of a disturbance vector, following Manuel's classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DvKind {
    /// Type I(K, b).
    I,
    /// Type II(K, b).
    II,
}

impl std::fmt::Display for DvKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DvKind::I => f.write_str("I"),
            DvKind::II => f.write_str("II"),
        }
    }
}

/// Step at which a candidate block is recompressed.
///
/// The verifier starts from the recorded state before this step, walks back
/// to the input chaining value and forward to the output chaining value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStep {
    /// Vectors with K below 50.
    Step58,
    /// Vectors with K of 50 and above.
    Step65,
}

impl TestStep {
    /// index returns the step number in `0..80`.
    pub fn index(self) -> usize {
        match self {
            TestStep::Step58 => 58,
            TestStep::Step65 => 65,
        }
    }
}

/// A disturbance vector together with the message block difference an
/// attack following it would introduce.
#[derive(Clone, Debug)]
pub struct DisturbanceVector {
    /// Family of the vector.
    pub kind: DvKind,
    /// Step K at which the local collisions start.
    pub k: u8,
    /// Rotation of the vector.
    pub b: u8,
    /// Step the companion block is recompressed from.
    pub test: TestStep,
    /// Bit of the UBC mask tracking this vector.
    pub mask_bit: u8,
    /// Expanded message difference, one word per step.
    pub dm: [u32; 80],
}

impl DisturbanceVector {
    /// mask returns the single-bit UBC mask of this vector.
    pub fn mask(&self) -> u32 {
        1 << self.mask_bit
    }
}

// UBC mask bits, one per vector of SHA1_DVS.
/// Mask bit of I(43,0).
pub const DV_I_43_0: u32 = 1 << 0;
/// Mask bit of I(44,0).
pub const DV_I_44_0: u32 = 1 << 1;
/// Mask bit of I(45,0).
pub const DV_I_45_0: u32 = 1 << 2;
/// Mask bit of I(46,0).
pub const DV_I_46_0: u32 = 1 << 3;
/// Mask bit of I(46,2).
pub const DV_I_46_2: u32 = 1 << 4;
/// Mask bit of I(47,0).
pub const DV_I_47_0: u32 = 1 << 5;
/// Mask bit of I(47,2).
pub const DV_I_47_2: u32 = 1 << 6;
/// Mask bit of I(48,0).
pub const DV_I_48_0: u32 = 1 << 7;
/// Mask bit of I(48,2).
pub const DV_I_48_2: u32 = 1 << 8;
/// Mask bit of I(49,0).
pub const DV_I_49_0: u32 = 1 << 9;
/// Mask bit of I(49,2).
pub const DV_I_49_2: u32 = 1 << 10;
/// Mask bit of I(50,0).
pub const DV_I_50_0: u32 = 1 << 11;
/// Mask bit of I(50,2).
pub const DV_I_50_2: u32 = 1 << 12;
/// Mask bit of I(51,0).
pub const DV_I_51_0: u32 = 1 << 13;
/// Mask bit of I(51,2).
pub const DV_I_51_2: u32 = 1 << 14;
/// Mask bit of I(52,0).
pub const DV_I_52_0: u32 = 1 << 15;
/// Mask bit of II(45,0).
pub const DV_II_45_0: u32 = 1 << 16;
/// Mask bit of II(46,0).
pub const DV_II_46_0: u32 = 1 << 17;
/// Mask bit of II(46,2).
pub const DV_II_46_2: u32 = 1 << 18;
/// Mask bit of II(47,0).
pub const DV_II_47_0: u32 = 1 << 19;
/// Mask bit of II(48,0).
pub const DV_II_48_0: u32 = 1 << 20;
/// Mask bit of II(49,0).
pub const DV_II_49_0: u32 = 1 << 21;
/// Mask bit of II(49,2).
pub const DV_II_49_2: u32 = 1 << 22;
/// Mask bit of II(50,0).
pub const DV_II_50_0: u32 = 1 << 23;
/// Mask bit of II(50,2).
pub const DV_II_50_2: u32 = 1 << 24;
/// Mask bit of II(51,0).
pub const DV_II_51_0: u32 = 1 << 25;
/// Mask bit of II(51,2).
pub const DV_II_51_2: u32 = 1 << 26;
/// Mask bit of II(52,0).
pub const DV_II_52_0: u32 = 1 << 27;
/// Mask bit of II(53,0).
pub const DV_II_53_0: u32 = 1 << 28;
/// Mask bit of II(54,0).
pub const DV_II_54_0: u32 = 1 << 29;
/// Mask bit of II(55,0).
pub const DV_II_55_0: u32 = 1 << 30;
/// Mask bit of II(56,0).
pub const DV_II_56_0: u32 = 1 << 31;

/// Disturbance vectors used by the known SHA-1 collision attacks, with their
/// message differences. These are correctness-critical constants: a wrong word
/// silently disables detection for that vector.
pub static SHA1_DVS: [DisturbanceVector; 32] = [
    DisturbanceVector {
        kind: DvKind::I,
        k: 43,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 0,
        dm: [
            0x08000000, 0x9800000c, 0xd8000010, 0x08000010, 0xb8000010, 0x98000000,
            0x60000000, 0x00000008, 0xc0000000, 0x90000014, 0x10000010, 0xb8000014,
            0x28000000, 0x20000010, 0x48000000, 0x08000018, 0x60000000, 0x90000010,
            0xf0000010, 0x90000008, 0xc0000000, 0x90000010, 0xf0000010, 0xb0000008,
            0x40000000, 0x90000000, 0xf0000010, 0x90000018, 0x60000000, 0x90000010,
            0x90000010, 0x90000000, 0x80000000, 0x00000010, 0xa0000000, 0x20000000,
            0xa0000000, 0x20000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010,
            0x20000000, 0x00000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020,
            0x00000001, 0x40000002, 0x40000040, 0x40000002, 0x80000004, 0x80000080,
            0x80000006, 0x00000049, 0x00000103, 0x80000009, 0x80000012, 0x80000202,
            0x00000018, 0x00000164, 0x00000408, 0x800000e6, 0x8000004c, 0x00000803,
            0x80000161, 0x80000599,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 44,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 1,
        dm: [
            0xb4000008, 0x08000000, 0x9800000c, 0xd8000010, 0x08000010, 0xb8000010,
            0x98000000, 0x60000000, 0x00000008, 0xc0000000, 0x90000014, 0x10000010,
            0xb8000014, 0x28000000, 0x20000010, 0x48000000, 0x08000018, 0x60000000,
            0x90000010, 0xf0000010, 0x90000008, 0xc0000000, 0x90000010, 0xf0000010,
            0xb0000008, 0x40000000, 0x90000000, 0xf0000010, 0x90000018, 0x60000000,
            0x90000010, 0x90000010, 0x90000000, 0x80000000, 0x00000010, 0xa0000000,
            0x20000000, 0xa0000000, 0x20000010, 0x00000000, 0x20000010, 0x20000000,
            0x00000010, 0x20000000, 0x00000010, 0xa0000000, 0x00000000, 0x20000000,
            0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
            0x00000020, 0x00000001, 0x40000002, 0x40000040, 0x40000002, 0x80000004,
            0x80000080, 0x80000006, 0x00000049, 0x00000103, 0x80000009, 0x80000012,
            0x80000202, 0x00000018, 0x00000164, 0x00000408, 0x800000e6, 0x8000004c,
            0x00000803, 0x80000161,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 45,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 2,
        dm: [
            0xf4000014, 0xb4000008, 0x08000000, 0x9800000c, 0xd8000010, 0x08000010,
            0xb8000010, 0x98000000, 0x60000000, 0x00000008, 0xc0000000, 0x90000014,
            0x10000010, 0xb8000014, 0x28000000, 0x20000010, 0x48000000, 0x08000018,
            0x60000000, 0x90000010, 0xf0000010, 0x90000008, 0xc0000000, 0x90000010,
            0xf0000010, 0xb0000008, 0x40000000, 0x90000000, 0xf0000010, 0x90000018,
            0x60000000, 0x90000010, 0x90000010, 0x90000000, 0x80000000, 0x00000010,
            0xa0000000, 0x20000000, 0xa0000000, 0x20000010, 0x00000000, 0x20000010,
            0x20000000, 0x00000010, 0x20000000, 0x00000010, 0xa0000000, 0x00000000,
            0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000040, 0x40000002,
            0x80000004, 0x80000080, 0x80000006, 0x00000049, 0x00000103, 0x80000009,
            0x80000012, 0x80000202, 0x00000018, 0x00000164, 0x00000408, 0x800000e6,
            0x8000004c, 0x00000803,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 46,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 3,
        dm: [
            0x2c000010, 0xf4000014, 0xb4000008, 0x08000000, 0x9800000c, 0xd8000010,
            0x08000010, 0xb8000010, 0x98000000, 0x60000000, 0x00000008, 0xc0000000,
            0x90000014, 0x10000010, 0xb8000014, 0x28000000, 0x20000010, 0x48000000,
            0x08000018, 0x60000000, 0x90000010, 0xf0000010, 0x90000008, 0xc0000000,
            0x90000010, 0xf0000010, 0xb0000008, 0x40000000, 0x90000000, 0xf0000010,
            0x90000018, 0x60000000, 0x90000010, 0x90000010, 0x90000000, 0x80000000,
            0x00000010, 0xa0000000, 0x20000000, 0xa0000000, 0x20000010, 0x00000000,
            0x20000010, 0x20000000, 0x00000010, 0x20000000, 0x00000010, 0xa0000000,
            0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000040,
            0x40000002, 0x80000004, 0x80000080, 0x80000006, 0x00000049, 0x00000103,
            0x80000009, 0x80000012, 0x80000202, 0x00000018, 0x00000164, 0x00000408,
            0x800000e6, 0x8000004c,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 46,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 4,
        dm: [
            0xb0000040, 0xd0000053, 0xd0000022, 0x20000000, 0x60000032, 0x60000043,
            0x20000040, 0xe0000042, 0x60000002, 0x80000001, 0x00000020, 0x00000003,
            0x40000052, 0x40000040, 0xe0000052, 0xa0000000, 0x80000040, 0x20000001,
            0x20000060, 0x80000001, 0x40000042, 0xc0000043, 0x40000022, 0x00000003,
            0x40000042, 0xc0000043, 0xc0000022, 0x00000001, 0x40000002, 0xc0000043,
            0x40000062, 0x80000001, 0x40000042, 0x40000042, 0x40000002, 0x00000002,
            0x00000040, 0x80000002, 0x80000000, 0x80000002, 0x80000040, 0x00000000,
            0x80000040, 0x80000000, 0x00000040, 0x80000000, 0x00000040, 0x80000002,
            0x00000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000004, 0x00000080, 0x00000004, 0x00000009, 0x00000101,
            0x00000009, 0x00000012, 0x00000202, 0x0000001a, 0x00000124, 0x0000040c,
            0x00000026, 0x0000004a, 0x0000080a, 0x00000060, 0x00000590, 0x00001020,
            0x0000039a, 0x00000132,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 47,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 5,
        dm: [
            0xc8000010, 0x2c000010, 0xf4000014, 0xb4000008, 0x08000000, 0x9800000c,
            0xd8000010, 0x08000010, 0xb8000010, 0x98000000, 0x60000000, 0x00000008,
            0xc0000000, 0x90000014, 0x10000010, 0xb8000014, 0x28000000, 0x20000010,
            0x48000000, 0x08000018, 0x60000000, 0x90000010, 0xf0000010, 0x90000008,
            0xc0000000, 0x90000010, 0xf0000010, 0xb0000008, 0x40000000, 0x90000000,
            0xf0000010, 0x90000018, 0x60000000, 0x90000010, 0x90000010, 0x90000000,
            0x80000000, 0x00000010, 0xa0000000, 0x20000000, 0xa0000000, 0x20000010,
            0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x20000000, 0x00000010,
            0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002,
            0x40000040, 0x40000002, 0x80000004, 0x80000080, 0x80000006, 0x00000049,
            0x00000103, 0x80000009, 0x80000012, 0x80000202, 0x00000018, 0x00000164,
            0x00000408, 0x800000e6,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 47,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 6,
        dm: [
            0x20000043, 0xb0000040, 0xd0000053, 0xd0000022, 0x20000000, 0x60000032,
            0x60000043, 0x20000040, 0xe0000042, 0x60000002, 0x80000001, 0x00000020,
            0x00000003, 0x40000052, 0x40000040, 0xe0000052, 0xa0000000, 0x80000040,
            0x20000001, 0x20000060, 0x80000001, 0x40000042, 0xc0000043, 0x40000022,
            0x00000003, 0x40000042, 0xc0000043, 0xc0000022, 0x00000001, 0x40000002,
            0xc0000043, 0x40000062, 0x80000001, 0x40000042, 0x40000042, 0x40000002,
            0x00000002, 0x00000040, 0x80000002, 0x80000000, 0x80000002, 0x80000040,
            0x00000000, 0x80000040, 0x80000000, 0x00000040, 0x80000000, 0x00000040,
            0x80000002, 0x00000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000004, 0x00000080, 0x00000004, 0x00000009,
            0x00000101, 0x00000009, 0x00000012, 0x00000202, 0x0000001a, 0x00000124,
            0x0000040c, 0x00000026, 0x0000004a, 0x0000080a, 0x00000060, 0x00000590,
            0x00001020, 0x0000039a,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 48,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 7,
        dm: [
            0xb800000a, 0xc8000010, 0x2c000010, 0xf4000014, 0xb4000008, 0x08000000,
            0x9800000c, 0xd8000010, 0x08000010, 0xb8000010, 0x98000000, 0x60000000,
            0x00000008, 0xc0000000, 0x90000014, 0x10000010, 0xb8000014, 0x28000000,
            0x20000010, 0x48000000, 0x08000018, 0x60000000, 0x90000010, 0xf0000010,
            0x90000008, 0xc0000000, 0x90000010, 0xf0000010, 0xb0000008, 0x40000000,
            0x90000000, 0xf0000010, 0x90000018, 0x60000000, 0x90000010, 0x90000010,
            0x90000000, 0x80000000, 0x00000010, 0xa0000000, 0x20000000, 0xa0000000,
            0x20000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x20000000,
            0x00000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001,
            0x40000002, 0x40000040, 0x40000002, 0x80000004, 0x80000080, 0x80000006,
            0x00000049, 0x00000103, 0x80000009, 0x80000012, 0x80000202, 0x00000018,
            0x00000164, 0x00000408,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 48,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 8,
        dm: [
            0xe000002a, 0x20000043, 0xb0000040, 0xd0000053, 0xd0000022, 0x20000000,
            0x60000032, 0x60000043, 0x20000040, 0xe0000042, 0x60000002, 0x80000001,
            0x00000020, 0x00000003, 0x40000052, 0x40000040, 0xe0000052, 0xa0000000,
            0x80000040, 0x20000001, 0x20000060, 0x80000001, 0x40000042, 0xc0000043,
            0x40000022, 0x00000003, 0x40000042, 0xc0000043, 0xc0000022, 0x00000001,
            0x40000002, 0xc0000043, 0x40000062, 0x80000001, 0x40000042, 0x40000042,
            0x40000002, 0x00000002, 0x00000040, 0x80000002, 0x80000000, 0x80000002,
            0x80000040, 0x00000000, 0x80000040, 0x80000000, 0x00000040, 0x80000000,
            0x00000040, 0x80000002, 0x00000000, 0x80000000, 0x80000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000004, 0x00000080, 0x00000004,
            0x00000009, 0x00000101, 0x00000009, 0x00000012, 0x00000202, 0x0000001a,
            0x00000124, 0x0000040c, 0x00000026, 0x0000004a, 0x0000080a, 0x00000060,
            0x00000590, 0x00001020,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 49,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 9,
        dm: [
            0x18000000, 0xb800000a, 0xc8000010, 0x2c000010, 0xf4000014, 0xb4000008,
            0x08000000, 0x9800000c, 0xd8000010, 0x08000010, 0xb8000010, 0x98000000,
            0x60000000, 0x00000008, 0xc0000000, 0x90000014, 0x10000010, 0xb8000014,
            0x28000000, 0x20000010, 0x48000000, 0x08000018, 0x60000000, 0x90000010,
            0xf0000010, 0x90000008, 0xc0000000, 0x90000010, 0xf0000010, 0xb0000008,
            0x40000000, 0x90000000, 0xf0000010, 0x90000018, 0x60000000, 0x90000010,
            0x90000010, 0x90000000, 0x80000000, 0x00000010, 0xa0000000, 0x20000000,
            0xa0000000, 0x20000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010,
            0x20000000, 0x00000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020,
            0x00000001, 0x40000002, 0x40000040, 0x40000002, 0x80000004, 0x80000080,
            0x80000006, 0x00000049, 0x00000103, 0x80000009, 0x80000012, 0x80000202,
            0x00000018, 0x00000164,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 49,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 10,
        dm: [
            0x60000000, 0xe000002a, 0x20000043, 0xb0000040, 0xd0000053, 0xd0000022,
            0x20000000, 0x60000032, 0x60000043, 0x20000040, 0xe0000042, 0x60000002,
            0x80000001, 0x00000020, 0x00000003, 0x40000052, 0x40000040, 0xe0000052,
            0xa0000000, 0x80000040, 0x20000001, 0x20000060, 0x80000001, 0x40000042,
            0xc0000043, 0x40000022, 0x00000003, 0x40000042, 0xc0000043, 0xc0000022,
            0x00000001, 0x40000002, 0xc0000043, 0x40000062, 0x80000001, 0x40000042,
            0x40000042, 0x40000002, 0x00000002, 0x00000040, 0x80000002, 0x80000000,
            0x80000002, 0x80000040, 0x00000000, 0x80000040, 0x80000000, 0x00000040,
            0x80000000, 0x00000040, 0x80000002, 0x00000000, 0x80000000, 0x80000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000004, 0x00000080,
            0x00000004, 0x00000009, 0x00000101, 0x00000009, 0x00000012, 0x00000202,
            0x0000001a, 0x00000124, 0x0000040c, 0x00000026, 0x0000004a, 0x0000080a,
            0x00000060, 0x00000590,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 50,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 11,
        dm: [
            0x0800000c, 0x18000000, 0xb800000a, 0xc8000010, 0x2c000010, 0xf4000014,
            0xb4000008, 0x08000000, 0x9800000c, 0xd8000010, 0x08000010, 0xb8000010,
            0x98000000, 0x60000000, 0x00000008, 0xc0000000, 0x90000014, 0x10000010,
            0xb8000014, 0x28000000, 0x20000010, 0x48000000, 0x08000018, 0x60000000,
            0x90000010, 0xf0000010, 0x90000008, 0xc0000000, 0x90000010, 0xf0000010,
            0xb0000008, 0x40000000, 0x90000000, 0xf0000010, 0x90000018, 0x60000000,
            0x90000010, 0x90000010, 0x90000000, 0x80000000, 0x00000010, 0xa0000000,
            0x20000000, 0xa0000000, 0x20000010, 0x00000000, 0x20000010, 0x20000000,
            0x00000010, 0x20000000, 0x00000010, 0xa0000000, 0x00000000, 0x20000000,
            0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
            0x00000020, 0x00000001, 0x40000002, 0x40000040, 0x40000002, 0x80000004,
            0x80000080, 0x80000006, 0x00000049, 0x00000103, 0x80000009, 0x80000012,
            0x80000202, 0x00000018,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 50,
        b: 2,
        test: TestStep::Step65,
        mask_bit: 12,
        dm: [
            0x20000030, 0x60000000, 0xe000002a, 0x20000043, 0xb0000040, 0xd0000053,
            0xd0000022, 0x20000000, 0x60000032, 0x60000043, 0x20000040, 0xe0000042,
            0x60000002, 0x80000001, 0x00000020, 0x00000003, 0x40000052, 0x40000040,
            0xe0000052, 0xa0000000, 0x80000040, 0x20000001, 0x20000060, 0x80000001,
            0x40000042, 0xc0000043, 0x40000022, 0x00000003, 0x40000042, 0xc0000043,
            0xc0000022, 0x00000001, 0x40000002, 0xc0000043, 0x40000062, 0x80000001,
            0x40000042, 0x40000042, 0x40000002, 0x00000002, 0x00000040, 0x80000002,
            0x80000000, 0x80000002, 0x80000040, 0x00000000, 0x80000040, 0x80000000,
            0x00000040, 0x80000000, 0x00000040, 0x80000002, 0x00000000, 0x80000000,
            0x80000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000004,
            0x00000080, 0x00000004, 0x00000009, 0x00000101, 0x00000009, 0x00000012,
            0x00000202, 0x0000001a, 0x00000124, 0x0000040c, 0x00000026, 0x0000004a,
            0x0000080a, 0x00000060,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 51,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 13,
        dm: [
            0xe8000000, 0x0800000c, 0x18000000, 0xb800000a, 0xc8000010, 0x2c000010,
            0xf4000014, 0xb4000008, 0x08000000, 0x9800000c, 0xd8000010, 0x08000010,
            0xb8000010, 0x98000000, 0x60000000, 0x00000008, 0xc0000000, 0x90000014,
            0x10000010, 0xb8000014, 0x28000000, 0x20000010, 0x48000000, 0x08000018,
            0x60000000, 0x90000010, 0xf0000010, 0x90000008, 0xc0000000, 0x90000010,
            0xf0000010, 0xb0000008, 0x40000000, 0x90000000, 0xf0000010, 0x90000018,
            0x60000000, 0x90000010, 0x90000010, 0x90000000, 0x80000000, 0x00000010,
            0xa0000000, 0x20000000, 0xa0000000, 0x20000010, 0x00000000, 0x20000010,
            0x20000000, 0x00000010, 0x20000000, 0x00000010, 0xa0000000, 0x00000000,
            0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000040, 0x40000002,
            0x80000004, 0x80000080, 0x80000006, 0x00000049, 0x00000103, 0x80000009,
            0x80000012, 0x80000202,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 51,
        b: 2,
        test: TestStep::Step65,
        mask_bit: 14,
        dm: [
            0xa0000003, 0x20000030, 0x60000000, 0xe000002a, 0x20000043, 0xb0000040,
            0xd0000053, 0xd0000022, 0x20000000, 0x60000032, 0x60000043, 0x20000040,
            0xe0000042, 0x60000002, 0x80000001, 0x00000020, 0x00000003, 0x40000052,
            0x40000040, 0xe0000052, 0xa0000000, 0x80000040, 0x20000001, 0x20000060,
            0x80000001, 0x40000042, 0xc0000043, 0x40000022, 0x00000003, 0x40000042,
            0xc0000043, 0xc0000022, 0x00000001, 0x40000002, 0xc0000043, 0x40000062,
            0x80000001, 0x40000042, 0x40000042, 0x40000002, 0x00000002, 0x00000040,
            0x80000002, 0x80000000, 0x80000002, 0x80000040, 0x00000000, 0x80000040,
            0x80000000, 0x00000040, 0x80000000, 0x00000040, 0x80000002, 0x00000000,
            0x80000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000004, 0x00000080, 0x00000004, 0x00000009, 0x00000101, 0x00000009,
            0x00000012, 0x00000202, 0x0000001a, 0x00000124, 0x0000040c, 0x00000026,
            0x0000004a, 0x0000080a,
        ],
    },
    DisturbanceVector {
        kind: DvKind::I,
        k: 52,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 15,
        dm: [
            0x04000010, 0xe8000000, 0x0800000c, 0x18000000, 0xb800000a, 0xc8000010,
            0x2c000010, 0xf4000014, 0xb4000008, 0x08000000, 0x9800000c, 0xd8000010,
            0x08000010, 0xb8000010, 0x98000000, 0x60000000, 0x00000008, 0xc0000000,
            0x90000014, 0x10000010, 0xb8000014, 0x28000000, 0x20000010, 0x48000000,
            0x08000018, 0x60000000, 0x90000010, 0xf0000010, 0x90000008, 0xc0000000,
            0x90000010, 0xf0000010, 0xb0000008, 0x40000000, 0x90000000, 0xf0000010,
            0x90000018, 0x60000000, 0x90000010, 0x90000010, 0x90000000, 0x80000000,
            0x00000010, 0xa0000000, 0x20000000, 0xa0000000, 0x20000010, 0x00000000,
            0x20000010, 0x20000000, 0x00000010, 0x20000000, 0x00000010, 0xa0000000,
            0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000040,
            0x40000002, 0x80000004, 0x80000080, 0x80000006, 0x00000049, 0x00000103,
            0x80000009, 0x80000012,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 45,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 16,
        dm: [
            0xec000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018,
            0xb0000010, 0x0000000c, 0xb8000010, 0x08000018, 0x78000010, 0x08000014,
            0x70000010, 0xb800001c, 0xe8000000, 0xb0000004, 0x58000010, 0xb000000c,
            0x48000000, 0xb0000000, 0xb8000010, 0x98000010, 0xa0000000, 0x00000000,
            0x00000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010,
            0x20000000, 0x00000010, 0x60000000, 0x00000018, 0xe0000000, 0x90000000,
            0x30000010, 0xb0000000, 0x20000000, 0x20000000, 0xa0000000, 0x00000010,
            0x80000000, 0x20000000, 0x20000000, 0x20000000, 0x80000000, 0x00000010,
            0x00000000, 0x20000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000041, 0x40000022,
            0x80000005, 0xc0000082, 0xc0000046, 0x4000004b, 0x80000107, 0x00000089,
            0x00000014, 0x8000024b, 0x0000011b, 0x8000016d, 0x8000041a, 0x000002e4,
            0x80000054, 0x00000967,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 46,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 17,
        dm: [
            0x2400001c, 0xec000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004,
            0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010, 0x08000018, 0x78000010,
            0x08000014, 0x70000010, 0xb800001c, 0xe8000000, 0xb0000004, 0x58000010,
            0xb000000c, 0x48000000, 0xb0000000, 0xb8000010, 0x98000010, 0xa0000000,
            0x00000000, 0x00000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000,
            0x20000010, 0x20000000, 0x00000010, 0x60000000, 0x00000018, 0xe0000000,
            0x90000000, 0x30000010, 0xb0000000, 0x20000000, 0x20000000, 0xa0000000,
            0x00000010, 0x80000000, 0x20000000, 0x20000000, 0x20000000, 0x80000000,
            0x00000010, 0x00000000, 0x20000010, 0xa0000000, 0x00000000, 0x20000000,
            0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000041,
            0x40000022, 0x80000005, 0xc0000082, 0xc0000046, 0x4000004b, 0x80000107,
            0x00000089, 0x00000014, 0x8000024b, 0x0000011b, 0x8000016d, 0x8000041a,
            0x000002e4, 0x80000054,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 46,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 18,
        dm: [
            0x90000070, 0xb0000053, 0x30000008, 0x00000043, 0xd0000072, 0xb0000010,
            0xf0000062, 0xc0000042, 0x00000030, 0xe0000042, 0x20000060, 0xe0000041,
            0x20000050, 0xc0000041, 0xe0000072, 0xa0000003, 0xc0000012, 0x60000041,
            0xc0000032, 0x20000001, 0xc0000002, 0xe0000042, 0x60000042, 0x80000002,
            0x00000000, 0x00000000, 0x80000000, 0x00000002, 0x00000040, 0x00000000,
            0x80000040, 0x80000000, 0x00000040, 0x80000001, 0x00000060, 0x80000003,
            0x40000002, 0xc0000040, 0xc0000002, 0x80000000, 0x80000000, 0x80000002,
            0x00000040, 0x00000002, 0x80000000, 0x80000000, 0x80000000, 0x00000002,
            0x00000040, 0x00000000, 0x80000040, 0x80000002, 0x00000000, 0x80000000,
            0x80000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000004, 0x00000080, 0x00000004, 0x00000009, 0x00000105,
            0x00000089, 0x00000016, 0x0000020b, 0x0000011b, 0x0000012d, 0x0000041e,
            0x00000224, 0x00000050, 0x0000092e, 0x0000046c, 0x000005b6, 0x0000106a,
            0x00000b90, 0x00000152,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 47,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 19,
        dm: [
            0x20000010, 0x2400001c, 0xec000014, 0x0c000002, 0xc0000010, 0xb400001c,
            0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010, 0x08000018,
            0x78000010, 0x08000014, 0x70000010, 0xb800001c, 0xe8000000, 0xb0000004,
            0x58000010, 0xb000000c, 0x48000000, 0xb0000000, 0xb8000010, 0x98000010,
            0xa0000000, 0x00000000, 0x00000000, 0x20000000, 0x80000000, 0x00000010,
            0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x60000000, 0x00000018,
            0xe0000000, 0x90000000, 0x30000010, 0xb0000000, 0x20000000, 0x20000000,
            0xa0000000, 0x00000010, 0x80000000, 0x20000000, 0x20000000, 0x20000000,
            0x80000000, 0x00000010, 0x00000000, 0x20000010, 0xa0000000, 0x00000000,
            0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002,
            0x40000041, 0x40000022, 0x80000005, 0xc0000082, 0xc0000046, 0x4000004b,
            0x80000107, 0x00000089, 0x00000014, 0x8000024b, 0x0000011b, 0x8000016d,
            0x8000041a, 0x000002e4,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 48,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 20,
        dm: [
            0xbc00001a, 0x20000010, 0x2400001c, 0xec000014, 0x0c000002, 0xc0000010,
            0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010,
            0x08000018, 0x78000010, 0x08000014, 0x70000010, 0xb800001c, 0xe8000000,
            0xb0000004, 0x58000010, 0xb000000c, 0x48000000, 0xb0000000, 0xb8000010,
            0x98000010, 0xa0000000, 0x00000000, 0x00000000, 0x20000000, 0x80000000,
            0x00000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x60000000,
            0x00000018, 0xe0000000, 0x90000000, 0x30000010, 0xb0000000, 0x20000000,
            0x20000000, 0xa0000000, 0x00000010, 0x80000000, 0x20000000, 0x20000000,
            0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010, 0xa0000000,
            0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001,
            0x40000002, 0x40000041, 0x40000022, 0x80000005, 0xc0000082, 0xc0000046,
            0x4000004b, 0x80000107, 0x00000089, 0x00000014, 0x8000024b, 0x0000011b,
            0x8000016d, 0x8000041a,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 49,
        b: 0,
        test: TestStep::Step58,
        mask_bit: 21,
        dm: [
            0x3c000004, 0xbc00001a, 0x20000010, 0x2400001c, 0xec000014, 0x0c000002,
            0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c,
            0xb8000010, 0x08000018, 0x78000010, 0x08000014, 0x70000010, 0xb800001c,
            0xe8000000, 0xb0000004, 0x58000010, 0xb000000c, 0x48000000, 0xb0000000,
            0xb8000010, 0x98000010, 0xa0000000, 0x00000000, 0x00000000, 0x20000000,
            0x80000000, 0x00000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010,
            0x60000000, 0x00000018, 0xe0000000, 0x90000000, 0x30000010, 0xb0000000,
            0x20000000, 0x20000000, 0xa0000000, 0x00000010, 0x80000000, 0x20000000,
            0x20000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010,
            0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020,
            0x00000001, 0x40000002, 0x40000041, 0x40000022, 0x80000005, 0xc0000082,
            0xc0000046, 0x4000004b, 0x80000107, 0x00000089, 0x00000014, 0x8000024b,
            0x0000011b, 0x8000016d,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 49,
        b: 2,
        test: TestStep::Step58,
        mask_bit: 22,
        dm: [
            0xf0000010, 0xf000006a, 0x80000040, 0x90000070, 0xb0000053, 0x30000008,
            0x00000043, 0xd0000072, 0xb0000010, 0xf0000062, 0xc0000042, 0x00000030,
            0xe0000042, 0x20000060, 0xe0000041, 0x20000050, 0xc0000041, 0xe0000072,
            0xa0000003, 0xc0000012, 0x60000041, 0xc0000032, 0x20000001, 0xc0000002,
            0xe0000042, 0x60000042, 0x80000002, 0x00000000, 0x00000000, 0x80000000,
            0x00000002, 0x00000040, 0x00000000, 0x80000040, 0x80000000, 0x00000040,
            0x80000001, 0x00000060, 0x80000003, 0x40000002, 0xc0000040, 0xc0000002,
            0x80000000, 0x80000000, 0x80000002, 0x00000040, 0x00000002, 0x80000000,
            0x80000000, 0x80000000, 0x00000002, 0x00000040, 0x00000000, 0x80000040,
            0x80000002, 0x00000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000004, 0x00000080,
            0x00000004, 0x00000009, 0x00000105, 0x00000089, 0x00000016, 0x0000020b,
            0x0000011b, 0x0000012d, 0x0000041e, 0x00000224, 0x00000050, 0x0000092e,
            0x0000046c, 0x000005b6,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 50,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 23,
        dm: [
            0xb400001c, 0x3c000004, 0xbc00001a, 0x20000010, 0x2400001c, 0xec000014,
            0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010,
            0x0000000c, 0xb8000010, 0x08000018, 0x78000010, 0x08000014, 0x70000010,
            0xb800001c, 0xe8000000, 0xb0000004, 0x58000010, 0xb000000c, 0x48000000,
            0xb0000000, 0xb8000010, 0x98000010, 0xa0000000, 0x00000000, 0x00000000,
            0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010, 0x20000000,
            0x00000010, 0x60000000, 0x00000018, 0xe0000000, 0x90000000, 0x30000010,
            0xb0000000, 0x20000000, 0x20000000, 0xa0000000, 0x00000010, 0x80000000,
            0x20000000, 0x20000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000,
            0x20000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
            0x00000020, 0x00000001, 0x40000002, 0x40000041, 0x40000022, 0x80000005,
            0xc0000082, 0xc0000046, 0x4000004b, 0x80000107, 0x00000089, 0x00000014,
            0x8000024b, 0x0000011b,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 50,
        b: 2,
        test: TestStep::Step65,
        mask_bit: 24,
        dm: [
            0xd0000072, 0xf0000010, 0xf000006a, 0x80000040, 0x90000070, 0xb0000053,
            0x30000008, 0x00000043, 0xd0000072, 0xb0000010, 0xf0000062, 0xc0000042,
            0x00000030, 0xe0000042, 0x20000060, 0xe0000041, 0x20000050, 0xc0000041,
            0xe0000072, 0xa0000003, 0xc0000012, 0x60000041, 0xc0000032, 0x20000001,
            0xc0000002, 0xe0000042, 0x60000042, 0x80000002, 0x00000000, 0x00000000,
            0x80000000, 0x00000002, 0x00000040, 0x00000000, 0x80000040, 0x80000000,
            0x00000040, 0x80000001, 0x00000060, 0x80000003, 0x40000002, 0xc0000040,
            0xc0000002, 0x80000000, 0x80000000, 0x80000002, 0x00000040, 0x00000002,
            0x80000000, 0x80000000, 0x80000000, 0x00000002, 0x00000040, 0x00000000,
            0x80000040, 0x80000002, 0x00000000, 0x80000000, 0x80000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000004,
            0x00000080, 0x00000004, 0x00000009, 0x00000105, 0x00000089, 0x00000016,
            0x0000020b, 0x0000011b, 0x0000012d, 0x0000041e, 0x00000224, 0x00000050,
            0x0000092e, 0x0000046c,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 51,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 25,
        dm: [
            0xc0000010, 0xb400001c, 0x3c000004, 0xbc00001a, 0x20000010, 0x2400001c,
            0xec000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018,
            0xb0000010, 0x0000000c, 0xb8000010, 0x08000018, 0x78000010, 0x08000014,
            0x70000010, 0xb800001c, 0xe8000000, 0xb0000004, 0x58000010, 0xb000000c,
            0x48000000, 0xb0000000, 0xb8000010, 0x98000010, 0xa0000000, 0x00000000,
            0x00000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010,
            0x20000000, 0x00000010, 0x60000000, 0x00000018, 0xe0000000, 0x90000000,
            0x30000010, 0xb0000000, 0x20000000, 0x20000000, 0xa0000000, 0x00000010,
            0x80000000, 0x20000000, 0x20000000, 0x20000000, 0x80000000, 0x00000010,
            0x00000000, 0x20000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000041, 0x40000022,
            0x80000005, 0xc0000082, 0xc0000046, 0x4000004b, 0x80000107, 0x00000089,
            0x00000014, 0x8000024b,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 51,
        b: 2,
        test: TestStep::Step65,
        mask_bit: 26,
        dm: [
            0x00000043, 0xd0000072, 0xf0000010, 0xf000006a, 0x80000040, 0x90000070,
            0xb0000053, 0x30000008, 0x00000043, 0xd0000072, 0xb0000010, 0xf0000062,
            0xc0000042, 0x00000030, 0xe0000042, 0x20000060, 0xe0000041, 0x20000050,
            0xc0000041, 0xe0000072, 0xa0000003, 0xc0000012, 0x60000041, 0xc0000032,
            0x20000001, 0xc0000002, 0xe0000042, 0x60000042, 0x80000002, 0x00000000,
            0x00000000, 0x80000000, 0x00000002, 0x00000040, 0x00000000, 0x80000040,
            0x80000000, 0x00000040, 0x80000001, 0x00000060, 0x80000003, 0x40000002,
            0xc0000040, 0xc0000002, 0x80000000, 0x80000000, 0x80000002, 0x00000040,
            0x00000002, 0x80000000, 0x80000000, 0x80000000, 0x00000002, 0x00000040,
            0x00000000, 0x80000040, 0x80000002, 0x00000000, 0x80000000, 0x80000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000004, 0x00000080, 0x00000004, 0x00000009, 0x00000105, 0x00000089,
            0x00000016, 0x0000020b, 0x0000011b, 0x0000012d, 0x0000041e, 0x00000224,
            0x00000050, 0x0000092e,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 52,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 27,
        dm: [
            0x0c000002, 0xc0000010, 0xb400001c, 0x3c000004, 0xbc00001a, 0x20000010,
            0x2400001c, 0xec000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004,
            0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010, 0x08000018, 0x78000010,
            0x08000014, 0x70000010, 0xb800001c, 0xe8000000, 0xb0000004, 0x58000010,
            0xb000000c, 0x48000000, 0xb0000000, 0xb8000010, 0x98000010, 0xa0000000,
            0x00000000, 0x00000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000,
            0x20000010, 0x20000000, 0x00000010, 0x60000000, 0x00000018, 0xe0000000,
            0x90000000, 0x30000010, 0xb0000000, 0x20000000, 0x20000000, 0xa0000000,
            0x00000010, 0x80000000, 0x20000000, 0x20000000, 0x20000000, 0x80000000,
            0x00000010, 0x00000000, 0x20000010, 0xa0000000, 0x00000000, 0x20000000,
            0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002, 0x40000041,
            0x40000022, 0x80000005, 0xc0000082, 0xc0000046, 0x4000004b, 0x80000107,
            0x00000089, 0x00000014,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 53,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 28,
        dm: [
            0xcc000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x3c000004, 0xbc00001a,
            0x20000010, 0x2400001c, 0xec000014, 0x0c000002, 0xc0000010, 0xb400001c,
            0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010, 0x08000018,
            0x78000010, 0x08000014, 0x70000010, 0xb800001c, 0xe8000000, 0xb0000004,
            0x58000010, 0xb000000c, 0x48000000, 0xb0000000, 0xb8000010, 0x98000010,
            0xa0000000, 0x00000000, 0x00000000, 0x20000000, 0x80000000, 0x00000010,
            0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x60000000, 0x00000018,
            0xe0000000, 0x90000000, 0x30000010, 0xb0000000, 0x20000000, 0x20000000,
            0xa0000000, 0x00000010, 0x80000000, 0x20000000, 0x20000000, 0x20000000,
            0x80000000, 0x00000010, 0x00000000, 0x20000010, 0xa0000000, 0x00000000,
            0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001, 0x40000002,
            0x40000041, 0x40000022, 0x80000005, 0xc0000082, 0xc0000046, 0x4000004b,
            0x80000107, 0x00000089,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 54,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 29,
        dm: [
            0x0400001c, 0xcc000014, 0x0c000002, 0xc0000010, 0xb400001c, 0x3c000004,
            0xbc00001a, 0x20000010, 0x2400001c, 0xec000014, 0x0c000002, 0xc0000010,
            0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c, 0xb8000010,
            0x08000018, 0x78000010, 0x08000014, 0x70000010, 0xb800001c, 0xe8000000,
            0xb0000004, 0x58000010, 0xb000000c, 0x48000000, 0xb0000000, 0xb8000010,
            0x98000010, 0xa0000000, 0x00000000, 0x00000000, 0x20000000, 0x80000000,
            0x00000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010, 0x60000000,
            0x00000018, 0xe0000000, 0x90000000, 0x30000010, 0xb0000000, 0x20000000,
            0x20000000, 0xa0000000, 0x00000010, 0x80000000, 0x20000000, 0x20000000,
            0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010, 0xa0000000,
            0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020, 0x00000001,
            0x40000002, 0x40000041, 0x40000022, 0x80000005, 0xc0000082, 0xc0000046,
            0x4000004b, 0x80000107,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 55,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 30,
        dm: [
            0x00000010, 0x0400001c, 0xcc000014, 0x0c000002, 0xc0000010, 0xb400001c,
            0x3c000004, 0xbc00001a, 0x20000010, 0x2400001c, 0xec000014, 0x0c000002,
            0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010, 0x0000000c,
            0xb8000010, 0x08000018, 0x78000010, 0x08000014, 0x70000010, 0xb800001c,
            0xe8000000, 0xb0000004, 0x58000010, 0xb000000c, 0x48000000, 0xb0000000,
            0xb8000010, 0x98000010, 0xa0000000, 0x00000000, 0x00000000, 0x20000000,
            0x80000000, 0x00000010, 0x00000000, 0x20000010, 0x20000000, 0x00000010,
            0x60000000, 0x00000018, 0xe0000000, 0x90000000, 0x30000010, 0xb0000000,
            0x20000000, 0x20000000, 0xa0000000, 0x00000010, 0x80000000, 0x20000000,
            0x20000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010,
            0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000020,
            0x00000001, 0x40000002, 0x40000041, 0x40000022, 0x80000005, 0xc0000082,
            0xc0000046, 0x4000004b,
        ],
    },
    DisturbanceVector {
        kind: DvKind::II,
        k: 56,
        b: 0,
        test: TestStep::Step65,
        mask_bit: 31,
        dm: [
            0x2600001a, 0x00000010, 0x0400001c, 0xcc000014, 0x0c000002, 0xc0000010,
            0xb400001c, 0x3c000004, 0xbc00001a, 0x20000010, 0x2400001c, 0xec000014,
            0x0c000002, 0xc0000010, 0xb400001c, 0x2c000004, 0xbc000018, 0xb0000010,
            0x0000000c, 0xb8000010, 0x08000018, 0x78000010, 0x08000014, 0x70000010,
            0xb800001c, 0xe8000000, 0xb0000004, 0x58000010, 0xb000000c, 0x48000000,
            0xb0000000, 0xb8000010, 0x98000010, 0xa0000000, 0x00000000, 0x00000000,
            0x20000000, 0x80000000, 0x00000010, 0x00000000, 0x20000010, 0x20000000,
            0x00000010, 0x60000000, 0x00000018, 0xe0000000, 0x90000000, 0x30000010,
            0xb0000000, 0x20000000, 0x20000000, 0xa0000000, 0x00000010, 0x80000000,
            0x20000000, 0x20000000, 0x20000000, 0x80000000, 0x00000010, 0x00000000,
            0x20000010, 0xa0000000, 0x00000000, 0x20000000, 0x20000000, 0x00000000,
            0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
            0x00000020, 0x00000001, 0x40000002, 0x40000041, 0x40000022, 0x80000005,
            0xc0000082, 0xc0000046,
        ],
    },
];

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn differences_follow_the_message_expansion() {
        for dv in SHA1_DVS.iter() {
            for t in 16..80 {
                let w = (dv.dm[t - 3] ^ dv.dm[t - 8] ^ dv.dm[t - 14] ^ dv.dm[t - 16]).rotate_left(1);
                assert_eq!(
                    dv.dm[t], w,
                    "DV {}({},{}) breaks the recurrence at step {}",
                    dv.kind, dv.k, dv.b, t
                );
            }
        }
    }

    #[test]
    fn mask_bits_are_unique() {
        let mut seen = 0u32;
        SHA1_DVS.iter().enumerate().for_each(|(i, dv)| {
            assert_eq!(dv.mask_bit as usize, i);
            assert_eq!(seen & dv.mask(), 0);
            seen |= dv.mask();
        });
        assert_eq!(seen, u32::MAX);
    }

    #[test]
    fn late_vectors_are_tested_at_step_65() {
        for dv in SHA1_DVS.iter() {
            let want = if dv.k >= 50 { TestStep::Step65 } else { TestStep::Step58 };
            assert_eq!(dv.test, want, "DV {}({},{})", dv.kind, dv.k, dv.b);
        }
    }
}
