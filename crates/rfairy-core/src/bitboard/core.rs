//! Bitboard（128bit盤面表現）

use crate::types::{File, Rank, Square};

/// 120升分の有効ビット
const ALL_BITS: u128 = (1u128 << Square::NUM) - 1;

/// Bitboard
///
/// bit n が升番号 n（`rank * 12 + file`）に対応する。上位 8bit は常に 0。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u128);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 全升が立っているBitboard
    pub const ALL: Bitboard = Bitboard(ALL_BITS);

    /// 単一升のBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u128 << sq.index())
    }

    /// 筋全体
    pub const fn file(file: File) -> Bitboard {
        let mut bits = 0u128;
        let mut r = 0;
        while r < Rank::NUM {
            bits |= 1u128 << (r * File::NUM + file.index());
            r += 1;
        }
        Bitboard(bits & ALL_BITS)
    }

    /// 段全体
    pub const fn rank(rank: Rank) -> Bitboard {
        Bitboard(((1u128 << File::NUM) - 1) << (rank.index() * File::NUM) & ALL_BITS)
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// 升を含むかどうか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u128 << sq.index()) != 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// u128として取得
    #[inline]
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// 升を追加
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// 立っている升を昇順に列挙
    #[inline]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.set(sq);
        }
        bb
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & ALL_BITS)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

/// Bitboard の升イテレータ
pub struct BitboardIter(u128);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_not() {
        assert_eq!(Bitboard::ALL.count(), 120);
        assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
        assert!((!Bitboard::ALL).is_empty());
    }

    #[test]
    fn test_file_rank_masks() {
        assert_eq!(Bitboard::file(File::A).count(), 10);
        assert_eq!(Bitboard::rank(Rank::R1).count(), 12);
        assert_eq!(Bitboard::rank(Rank::R10).count(), 12);
        let corner = Bitboard::file(File::A) & Bitboard::rank(Rank::R1);
        assert_eq!(corner.iter().collect::<Vec<_>>(), vec![Square::A1]);
    }

    #[test]
    fn test_contains_and_iter() {
        let e4 = Square::new(File::E, Rank::R4);
        let d5 = Square::new(File::D, Rank::R5);
        let bb: Bitboard = [e4, d5].into_iter().collect();
        assert!(bb.contains(e4));
        assert!(!bb.contains(Square::A1));
        assert_eq!(bb.iter().collect::<Vec<_>>(), vec![e4, d5]);
    }
}
