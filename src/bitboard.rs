// src/bitboard.rs
//
// Square index layout: index = rank * 8 + (7 - file), so bit 0 is h1,
// bit 7 is a1, bit 56 is h8 and bit 63 is a8.

const H_FILE_BITS: u64 = 0x0101_0101_0101_0101;
const FIRST_RANK_BITS: u64 = 0x0000_0000_0000_00FF;

/// Mask of every square on `file` (0 = a-file, 7 = h-file).
#[inline(always)]
pub const fn file_mask(file: u8) -> u64 {
    H_FILE_BITS << (7 - file)
}

/// Mask of every square on `rank` (0 = first rank, 7 = eighth rank).
#[inline(always)]
pub const fn rank_mask(rank: u8) -> u64 {
    FIRST_RANK_BITS << (8 * rank)
}

// ———————— Files ————————
pub const FILE_A: u64 = file_mask(0);
pub const FILE_B: u64 = file_mask(1);
pub const FILE_C: u64 = file_mask(2);
pub const FILE_D: u64 = file_mask(3);
pub const FILE_E: u64 = file_mask(4);
pub const FILE_F: u64 = file_mask(5);
pub const FILE_G: u64 = file_mask(6);
pub const FILE_H: u64 = file_mask(7);

// ———————— Ranks ————————
pub const RANK_1: u64 = rank_mask(0);
pub const RANK_2: u64 = rank_mask(1);
pub const RANK_3: u64 = rank_mask(2);
pub const RANK_4: u64 = rank_mask(3);
pub const RANK_5: u64 = rank_mask(4);
pub const RANK_6: u64 = rank_mask(5);
pub const RANK_7: u64 = rank_mask(6);
pub const RANK_8: u64 = rank_mask(7);

pub trait BitboardExt {
    /// Iterate set bits in ascending index order.
    fn squares(self) -> BitIter;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn squares(self) -> BitIter {
        BitIter(self)
    }
}

/// Ascending iterator over the set bits of a bitboard.
#[derive(Debug, Clone)]
pub struct BitIter(u64);

impl Iterator for BitIter {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        Some(crate::utils::pop_lsb(&mut self.0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}
