//! 筋（File）・段（Rank）・升（Square）
//!
//! 表現可能な最大盤は 12筋 × 10段（120升）。升番号は `rank * 12 + file`。
//! 設定値から作られた筋・段は範囲外の値を保持し得るので、使う側で `is_valid` を確認する。

use super::Color;

/// 筋（a筋〜l筋）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct File(u8);

impl File {
    /// 筋の数
    pub const NUM: usize = 12;
    /// 最大の筋
    pub const MAX: File = File(11);

    pub const A: File = File(0);
    pub const B: File = File(1);
    pub const C: File = File(2);
    pub const D: File = File(3);
    pub const E: File = File(4);
    pub const F: File = File(5);
    pub const G: File = File(6);
    pub const H: File = File(7);
    pub const I: File = File(8);
    pub const J: File = File(9);
    pub const K: File = File(10);
    pub const L: File = File(11);

    /// 0始まりの番号から生成（範囲チェックなし）
    #[inline]
    pub const fn new(n: u8) -> File {
        File(n)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < Self::NUM
    }

    /// 'a' 始まりの文字
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// 'a' 始まりの文字から生成
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        let n = (c as u8).wrapping_sub(b'a');
        if c.is_ascii() && (n as usize) < Self::NUM {
            Some(File(n))
        } else {
            None
        }
    }
}

/// 段（1段〜10段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Rank(u8);

impl Rank {
    /// 段の数
    pub const NUM: usize = 10;
    /// 最大の段
    pub const MAX: Rank = Rank(9);

    pub const R1: Rank = Rank(0);
    pub const R2: Rank = Rank(1);
    pub const R3: Rank = Rank(2);
    pub const R4: Rank = Rank(3);
    pub const R5: Rank = Rank(4);
    pub const R6: Rank = Rank(5);
    pub const R7: Rank = Rank(6);
    pub const R8: Rank = Rank(7);
    pub const R9: Rank = Rank(8);
    pub const R10: Rank = Rank(9);

    /// 0始まりの番号から生成（範囲チェックなし）
    #[inline]
    pub const fn new(n: u8) -> Rank {
        Rank(n)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < Self::NUM
    }

    /// 相対段（先手から見た段）
    ///
    /// 後手は `max_rank` を基準に反転する。
    #[inline]
    pub const fn relative(self, color: Color, max_rank: Rank) -> Rank {
        match color {
            Color::White => self,
            Color::Black => Rank(max_rank.0.wrapping_sub(self.0)),
        }
    }
}

/// 升
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = File::NUM * Rank::NUM;

    pub const A1: Square = Square(0);

    /// 筋と段から生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.0 * File::NUM as u8 + file.0)
    }

    /// 番号から生成（範囲外なら `None`）
    #[inline]
    pub const fn from_index(n: usize) -> Option<Square> {
        if n < Self::NUM {
            Some(Square(n as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        File(self.0 % File::NUM as u8)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank(self.0 / File::NUM as u8)
    }

    /// 手番から見た相対升（後手は段を反転）
    #[inline]
    pub const fn relative(self, color: Color, max_rank: Rank) -> Square {
        Square::new(self.file(), self.rank().relative(color, max_rank))
    }

    /// "e4" 形式の升名を解析
    pub fn from_name(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = chars.as_str().parse::<u8>().ok()?;
        if rank == 0 || rank as usize > Rank::NUM {
            return None;
        }
        Some(Square::new(file, Rank(rank - 1)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().0 + 1)
    }
}
