use once_cell::sync::Lazy;

use crate::compress::Schedule;
use crate::dvs::*;

/// Relation required between the two bits of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// The two bits are equal.
    Equal,
    /// The two bits differ.
    Differ,
}

/// BitCondition is an unavoidable bit condition: bit `p` of schedule word `i`
/// must be equal to (or differ from) bit `q` of word `j` for any block that
/// follows one of the disturbance vectors in `families`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitCondition {
    /// Schedule word of the first bit.
    pub i: u8,
    /// Position of the first bit.
    pub p: u8,
    /// Schedule word of the second bit.
    pub j: u8,
    /// Position of the second bit.
    pub q: u8,
    /// Required relation between the bits.
    pub relation: Relation,
    /// Vectors discarded when the condition fails.
    pub families: u32,
}

impl BitCondition {
    /// holds reports whether the condition is met by the schedule `w`.
    #[inline]
    pub fn holds(&self, w: &Schedule) -> bool {
        let x = ((w[self.i as usize] >> self.p) ^ (w[self.j as usize] >> self.q)) & 1;
        match self.relation {
            Relation::Equal => x == 0,
            Relation::Differ => x == 1,
        }
    }

    /// last_step is the latest schedule word the condition reads.
    pub fn last_step(&self) -> usize {
        self.i.max(self.j) as usize
    }
}

const fn cond(i: u8, p: u8, j: u8, q: u8, relation: Relation, families: u32) -> BitCondition {
    BitCondition {
        i,
        p,
        j,
        q,
        relation,
        families,
    }
}

use Relation::{Differ, Equal};

/// Unavoidable bit conditions of SHA1_DVS, ordered by the last step they read.
pub static UBC_CONDITIONS: [BitCondition; 158] = [
    cond(35, 1, 36, 6, Differ, DV_I_46_2 | DV_I_49_2),
    cond(35, 30, 36, 3, Differ, DV_II_48_0),
    cond(36, 0, 37, 5, Differ, DV_II_49_2),
    cond(36, 1, 37, 6, Differ, DV_I_47_2 | DV_I_50_2 | DV_II_46_2),
    cond(36, 30, 37, 3, Differ, DV_II_49_0),
    cond(37, 1, 37, 6, Equal, DV_I_51_2),
    cond(36, 4, 38, 4, Differ, DV_II_52_0 | DV_II_54_0),
    cond(37, 0, 38, 5, Differ, DV_II_50_2),
    cond(37, 1, 38, 6, Differ, DV_I_48_2 | DV_I_51_2),
    cond(37, 30, 38, 3, Differ, DV_II_50_0),
    cond(35, 3, 39, 28, Equal, DV_I_51_0 | DV_II_47_0),
    cond(35, 4, 39, 29, Equal, DV_I_45_0 | DV_I_48_0 | DV_II_47_0),
    cond(35, 5, 39, 30, Equal, DV_I_51_2),
    cond(37, 4, 39, 4, Differ, DV_I_43_0 | DV_II_53_0 | DV_II_55_0),
    cond(38, 0, 39, 5, Differ, DV_II_51_2),
    cond(38, 1, 39, 6, Differ, DV_I_49_2),
    cond(38, 30, 39, 3, Differ, DV_II_51_0),
    cond(35, 30, 40, 28, Differ, DV_II_48_0),
    cond(36, 4, 40, 29, Equal, DV_I_46_0 | DV_I_49_0 | DV_II_45_0 | DV_II_48_0),
    cond(37, 4, 40, 29, Equal, DV_I_43_0 | DV_I_47_0 | DV_II_46_0 | DV_II_53_0 | DV_II_55_0),
    cond(38, 1, 40, 1, Differ, DV_I_49_2),
    cond(38, 4, 40, 4, Differ, DV_I_44_0 | DV_II_54_0 | DV_II_56_0),
    cond(39, 1, 40, 6, Differ, DV_I_46_2 | DV_I_50_2 | DV_II_49_2),
    cond(39, 30, 40, 3, Differ, DV_II_52_0),
    cond(36, 0, 41, 30, Differ, DV_II_49_2),
    cond(36, 4, 41, 29, Differ, DV_I_50_0),
    cond(36, 30, 41, 28, Differ, DV_II_49_0),
    cond(37, 4, 41, 29, Equal, DV_I_50_0 | DV_II_49_0),
    cond(38, 4, 41, 29, Equal, DV_I_44_0 | DV_I_48_0 | DV_II_47_0 | DV_II_54_0 | DV_II_56_0),
    cond(39, 1, 41, 1, Differ, DV_I_50_2 | DV_II_49_2),
    cond(39, 4, 41, 4, Differ, DV_I_43_0 | DV_I_45_0 | DV_II_55_0),
    cond(40, 1, 41, 6, Differ, DV_I_47_2 | DV_I_51_2 | DV_II_50_2),
    cond(
        40, 29, 41, 29, Equal,
        DV_I_44_0 | DV_I_47_0 | DV_I_48_0 | DV_II_46_0 | DV_II_47_0 | DV_II_56_0,
    ),
    cond(37, 0, 42, 30, Differ, DV_II_50_2),
    cond(37, 4, 42, 29, Differ, DV_I_51_0),
    cond(37, 30, 42, 28, Differ, DV_II_50_0),
    cond(38, 4, 42, 29, Equal, DV_I_51_0 | DV_II_50_0),
    cond(39, 1, 42, 6, Differ, DV_I_46_2),
    cond(39, 4, 42, 29, Equal, DV_I_43_0 | DV_I_45_0 | DV_I_49_0 | DV_II_48_0 | DV_II_55_0),
    cond(40, 1, 42, 1, Differ, DV_I_51_2 | DV_II_50_2),
    cond(40, 4, 42, 4, Differ, DV_I_44_0 | DV_I_46_0 | DV_II_56_0),
    cond(41, 1, 42, 6, Differ, DV_I_48_2 | DV_II_46_2 | DV_II_51_2),
    cond(41, 29, 42, 29, Equal, DV_I_45_0 | DV_I_48_0 | DV_I_49_0 | DV_II_47_0 | DV_II_48_0),
    cond(38, 0, 43, 30, Differ, DV_II_51_2),
    cond(38, 4, 43, 29, Differ, DV_I_52_0),
    cond(38, 30, 43, 28, Differ, DV_II_51_0),
    cond(39, 4, 43, 29, Equal, DV_I_52_0 | DV_II_51_0),
    cond(40, 1, 43, 6, Differ, DV_I_47_2),
    cond(40, 4, 43, 29, Equal, DV_I_44_0 | DV_I_46_0 | DV_I_50_0 | DV_II_49_0 | DV_II_56_0),
    cond(41, 1, 43, 1, Differ, DV_II_46_2 | DV_II_51_2),
    cond(41, 4, 43, 4, Differ, DV_I_43_0 | DV_I_45_0 | DV_I_47_0),
    cond(42, 1, 43, 6, Differ, DV_I_49_2),
    cond(42, 29, 43, 29, Equal, DV_I_46_0 | DV_I_49_0 | DV_I_50_0 | DV_II_48_0 | DV_II_49_0),
    cond(39, 30, 44, 28, Differ, DV_II_52_0),
    cond(40, 4, 44, 29, Equal, DV_II_52_0),
    cond(
        41, 4, 44, 29, Equal,
        DV_I_43_0 | DV_I_45_0 | DV_I_47_0 | DV_I_51_0 | DV_II_45_0 | DV_II_50_0,
    ),
    cond(42, 4, 44, 4, Differ, DV_I_44_0 | DV_I_46_0 | DV_I_48_0),
    cond(42, 6, 44, 6, Equal, DV_I_46_2 | DV_I_48_2),
    cond(43, 1, 44, 6, Differ, DV_I_50_2),
    cond(
        43, 29, 44, 29, Equal,
        DV_I_47_0 | DV_I_50_0 | DV_I_51_0 | DV_II_45_0 | DV_II_49_0 | DV_II_50_0,
    ),
    cond(41, 3, 45, 28, Equal, DV_II_53_0),
    cond(41, 4, 45, 29, Equal, DV_II_53_0),
    cond(
        42, 4, 45, 29, Equal,
        DV_I_44_0 | DV_I_46_0 | DV_I_48_0 | DV_I_52_0 | DV_II_46_0 | DV_II_51_0,
    ),
    cond(43, 4, 45, 4, Differ, DV_I_45_0 | DV_I_47_0 | DV_I_49_0),
    cond(43, 6, 45, 6, Equal, DV_I_47_2 | DV_I_49_2),
    cond(44, 1, 45, 6, Differ, DV_I_51_2 | DV_II_49_2),
    cond(
        44, 29, 45, 29, Equal,
        DV_I_48_0 | DV_I_51_0 | DV_I_52_0 | DV_II_45_0 | DV_II_46_0 | DV_II_50_0 | DV_II_51_0,
    ),
    cond(42, 3, 46, 28, Equal, DV_II_54_0),
    cond(42, 4, 46, 29, Equal, DV_II_54_0),
    cond(
        43, 4, 46, 29, Equal,
        DV_I_43_0 | DV_I_45_0 | DV_I_47_0 | DV_I_49_0 | DV_II_47_0 | DV_II_52_0,
    ),
    cond(44, 1, 46, 1, Differ, DV_II_49_2),
    cond(44, 4, 46, 4, Differ, DV_I_46_0 | DV_I_48_0 | DV_I_50_0),
    cond(44, 6, 46, 6, Equal, DV_I_46_2 | DV_I_48_2 | DV_I_50_2),
    cond(45, 1, 46, 6, Differ, DV_II_50_2),
    cond(
        45, 29, 46, 29, Equal,
        DV_I_49_0 | DV_I_52_0 | DV_II_46_0 | DV_II_47_0 | DV_II_51_0 | DV_II_52_0,
    ),
    cond(43, 3, 47, 28, Equal, DV_II_55_0),
    cond(43, 4, 47, 29, Equal, DV_II_55_0),
    cond(
        44, 4, 47, 29, Equal,
        DV_I_44_0 | DV_I_46_0 | DV_I_48_0 | DV_I_50_0 | DV_II_48_0 | DV_II_53_0,
    ),
    cond(45, 4, 47, 4, Differ, DV_I_47_0 | DV_I_49_0 | DV_I_51_0),
    cond(45, 6, 47, 6, Equal, DV_I_47_2 | DV_I_49_2 | DV_I_51_2),
    cond(46, 1, 47, 6, Differ, DV_II_51_2),
    cond(46, 6, 47, 1, Equal, DV_I_46_2 | DV_II_50_2),
    cond(
        46, 29, 47, 29, Equal,
        DV_I_43_0 | DV_I_50_0 | DV_II_47_0 | DV_II_48_0 | DV_II_52_0 | DV_II_53_0,
    ),
    cond(44, 3, 48, 28, Equal, DV_II_56_0),
    cond(44, 4, 48, 29, Equal, DV_II_56_0),
    cond(44, 6, 48, 6, Equal, DV_I_48_2 | DV_I_50_2),
    cond(
        45, 4, 48, 29, Equal,
        DV_I_45_0 | DV_I_47_0 | DV_I_49_0 | DV_I_51_0 | DV_II_49_0 | DV_II_54_0,
    ),
    cond(46, 4, 48, 4, Differ, DV_I_48_0 | DV_I_50_0 | DV_I_52_0),
    cond(47, 1, 48, 6, Differ, DV_II_46_2),
    cond(47, 6, 48, 1, Equal, DV_I_47_2 | DV_II_51_2),
    cond(
        47, 29, 48, 29, Equal,
        DV_I_44_0 | DV_I_51_0 | DV_II_48_0 | DV_II_49_0 | DV_II_53_0 | DV_II_54_0,
    ),
    cond(41, 1, 49, 1, Differ, DV_I_48_2),
    cond(45, 6, 49, 6, Equal, DV_I_49_2 | DV_I_51_2),
    cond(
        46, 4, 49, 29, Equal,
        DV_I_46_0 | DV_I_48_0 | DV_I_50_0 | DV_I_52_0 | DV_II_50_0 | DV_II_55_0,
    ),
    cond(47, 4, 49, 4, Differ, DV_I_49_0 | DV_I_51_0 | DV_II_45_0),
    cond(
        48, 29, 49, 29, Equal,
        DV_I_45_0 | DV_I_52_0 | DV_II_49_0 | DV_II_50_0 | DV_II_54_0 | DV_II_55_0,
    ),
    cond(42, 1, 50, 1, Differ, DV_I_49_2),
    cond(
        47, 4, 50, 29, Equal,
        DV_I_47_0 | DV_I_49_0 | DV_I_51_0 | DV_II_45_0 | DV_II_51_0 | DV_II_56_0,
    ),
    cond(48, 4, 50, 4, Differ, DV_I_50_0 | DV_I_52_0 | DV_II_46_0),
    cond(48, 6, 50, 6, Equal, DV_I_50_2 | DV_II_46_2),
    cond(
        49, 29, 50, 29, Equal,
        DV_I_46_0 | DV_II_45_0 | DV_II_50_0 | DV_II_51_0 | DV_II_55_0 | DV_II_56_0,
    ),
    cond(44, 1, 51, 6, Differ, DV_I_51_2),
    cond(48, 4, 51, 29, Equal, DV_I_48_0 | DV_I_50_0 | DV_I_52_0 | DV_II_46_0 | DV_II_52_0),
    cond(48, 6, 51, 1, Equal, DV_I_50_2 | DV_II_46_2),
    cond(50, 1, 51, 6, Differ, DV_II_49_2),
    cond(50, 29, 51, 29, Equal, DV_I_47_0 | DV_II_46_0 | DV_II_51_0 | DV_II_52_0 | DV_II_56_0),
    cond(44, 1, 52, 1, Differ, DV_I_51_2),
    cond(49, 4, 52, 29, Equal, DV_I_49_0 | DV_I_51_0 | DV_II_45_0 | DV_II_47_0 | DV_II_53_0),
    cond(51, 1, 52, 6, Differ, DV_II_50_2),
    cond(51, 29, 52, 29, Equal, DV_I_48_0 | DV_II_47_0 | DV_II_52_0 | DV_II_53_0),
    cond(50, 1, 53, 6, Differ, DV_II_49_2),
    cond(50, 4, 53, 29, Equal, DV_I_50_0 | DV_I_52_0 | DV_II_46_0 | DV_II_48_0 | DV_II_54_0),
    cond(52, 1, 53, 6, Differ, DV_II_51_2),
    cond(52, 29, 53, 29, Equal, DV_I_49_0 | DV_II_45_0 | DV_II_48_0 | DV_II_53_0 | DV_II_54_0),
    cond(50, 1, 54, 1, Differ, DV_II_49_2),
    cond(51, 1, 54, 6, Differ, DV_II_50_2),
    cond(51, 4, 54, 29, Equal, DV_I_51_0 | DV_II_47_0 | DV_II_49_0 | DV_II_55_0),
    cond(51, 29, 54, 29, Differ, DV_II_47_0),
    cond(53, 29, 54, 29, Equal, DV_I_50_0 | DV_II_46_0 | DV_II_49_0 | DV_II_54_0 | DV_II_55_0),
    cond(51, 1, 55, 1, Differ, DV_II_50_2),
    cond(52, 1, 55, 6, Differ, DV_II_51_2),
    cond(52, 4, 55, 29, Equal, DV_I_52_0 | DV_II_48_0 | DV_II_50_0 | DV_II_56_0),
    cond(52, 29, 55, 29, Differ, DV_I_51_0 | DV_II_48_0),
    cond(54, 29, 55, 29, Equal, DV_I_51_0 | DV_II_47_0 | DV_II_50_0 | DV_II_55_0 | DV_II_56_0),
    cond(52, 1, 56, 1, Differ, DV_II_51_2),
    cond(53, 4, 56, 29, Equal, DV_II_49_0 | DV_II_51_0),
    cond(53, 29, 56, 29, Differ, DV_I_52_0 | DV_II_49_0),
    cond(55, 29, 56, 29, Equal, DV_I_52_0 | DV_II_48_0 | DV_II_51_0 | DV_II_56_0),
    cond(54, 4, 57, 29, Equal, DV_II_50_0 | DV_II_52_0),
    cond(54, 29, 57, 29, Differ, DV_II_49_0 | DV_II_50_0),
    cond(55, 4, 57, 4, Differ, DV_II_53_0),
    cond(56, 29, 57, 29, Equal, DV_II_52_0),
    cond(55, 4, 58, 29, Equal, DV_II_51_0 | DV_II_53_0),
    cond(55, 29, 58, 29, Differ, DV_II_50_0 | DV_II_51_0),
    cond(57, 29, 58, 29, Equal, DV_II_53_0),
    cond(56, 4, 59, 29, Equal, DV_II_52_0 | DV_II_54_0),
    cond(56, 29, 59, 29, Differ, DV_II_51_0 | DV_II_52_0),
    cond(57, 4, 59, 29, Equal, DV_II_55_0),
    cond(58, 0, 59, 5, Differ, DV_I_43_0),
    cond(58, 29, 59, 29, Equal, DV_II_54_0),
    cond(54, 4, 60, 29, Differ, DV_II_52_0),
    cond(59, 0, 60, 5, Differ, DV_I_44_0),
    cond(55, 4, 61, 29, Differ, DV_II_53_0),
    cond(60, 0, 61, 5, Differ, DV_I_45_0 | DV_II_45_0),
    cond(58, 4, 62, 29, Equal, DV_II_54_0),
    cond(61, 0, 62, 5, Differ, DV_I_46_0 | DV_II_46_0),
    cond(61, 1, 62, 6, Differ, DV_I_43_0),
    cond(61, 2, 62, 7, Differ, DV_I_46_2 | DV_II_46_2),
    cond(58, 0, 63, 30, Differ, DV_I_43_0),
    cond(59, 4, 63, 29, Equal, DV_II_55_0),
    cond(62, 0, 63, 5, Differ, DV_I_47_0 | DV_II_47_0),
    cond(62, 1, 63, 6, Differ, DV_I_44_0),
    cond(62, 2, 63, 7, Differ, DV_I_47_2),
    cond(59, 0, 64, 30, Differ, DV_I_44_0),
    cond(60, 4, 64, 29, Equal, DV_II_56_0),
    cond(63, 0, 64, 5, Differ, DV_I_48_0 | DV_II_48_0),
    cond(63, 1, 64, 6, Differ, DV_I_45_0 | DV_II_45_0),
    cond(63, 2, 64, 7, Differ, DV_I_48_2),
];

/// DisturbanceVectorTable pairs the disturbance vectors with the bit conditions
/// that filter them. It is built once and shared by every context.
pub struct DisturbanceVectorTable {
    vectors: &'static [DisturbanceVector],
    conditions: Vec<BitCondition>,
    all: u32,
}

impl DisturbanceVectorTable {
    /// new builds a table, ordering conditions by the last step they read so a
    /// family is dropped at its earliest failing condition.
    pub fn new(vectors: &'static [DisturbanceVector], conditions: &[BitCondition]) -> Self {
        let all = vectors.iter().fold(0, |m, dv| m | dv.mask());
        let mut conditions: Vec<BitCondition> = conditions
            .iter()
            .map(|c| BitCondition {
                families: c.families & all,
                ..*c
            })
            .filter(|c| c.families != 0)
            .collect();
        conditions.sort_by_key(|c| c.last_step());

        Self {
            vectors,
            conditions,
            all,
        }
    }

    /// vectors returns the disturbance vectors, in verification order.
    pub fn vectors(&self) -> &[DisturbanceVector] {
        self.vectors
    }

    /// conditions returns the conditions, ordered by their last step.
    pub fn conditions(&self) -> &[BitCondition] {
        &self.conditions
    }

    /// families returns the mask of every vector in the table.
    pub fn families(&self) -> u32 {
        self.all
    }

    /// check returns the mask of families whose conditions all hold for `w`.
    pub fn check(&self, w: &Schedule) -> u32 {
        let mut mask = self.all;
        for c in self.conditions.iter() {
            if mask & c.families != 0 && !c.holds(w) {
                mask &= !c.families;
                if mask == 0 {
                    break;
                }
            }
        }
        mask
    }
}

/// SHA1_TABLE is the table of the known SHA-1 collision attacks.
pub static SHA1_TABLE: Lazy<DisturbanceVectorTable> =
    Lazy::new(|| DisturbanceVectorTable::new(&SHA1_DVS, &UBC_CONDITIONS));
