//! 駒種（PieceKind）と駒（Piece）
//!
//! 駒種は 6bit の番号で表す。0 は「駒種なし」、1-5 は標準駒、
//! 6-36 は組み込みのフェアリー駒、37-62 はユーザー定義駒（Betza 記法で動きを与える）、
//! 63 は玉。玉は常に最大の番号を持つ。

use super::{Color, Phase};

/// 駒種
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct PieceKind(u8);

/// 組み込み駒種の設定名（index = 駒種番号）
const BUILTIN_NAMES: [&str; 37] = [
    "",
    "pawn",
    "knight",
    "bishop",
    "rook",
    "queen",
    "fers",
    "alfil",
    "fersAlfil",
    "silver",
    "aiwok",
    "bers",
    "archbishop",
    "chancellor",
    "amazon",
    "knibis",
    "biskni",
    "kniroo",
    "rookni",
    "shogiPawn",
    "lance",
    "shogiKnight",
    "gold",
    "dragonHorse",
    "clobber",
    "breakthrough",
    "immobile",
    "cannon",
    "janggiCannon",
    "soldier",
    "horse",
    "elephant",
    "janggiElephant",
    "banner",
    "wazir",
    "commoner",
    "centaur",
];

/// 組み込み駒種の既定駒価値 (中盤, 終盤)
const BUILTIN_VALUES: [(i32, i32); 37] = [
    (0, 0),
    (126, 208),
    (781, 854),
    (825, 915),
    (1276, 1380),
    (2538, 2682),
    (420, 450),
    (350, 330),
    (700, 650),
    (660, 640),
    (2300, 2700),
    (1800, 1900),
    (2200, 2200),
    (2300, 2600),
    (2700, 2850),
    (1100, 1200),
    (750, 700),
    (1050, 1250),
    (800, 950),
    (90, 100),
    (350, 250),
    (350, 300),
    (720, 700),
    (1500, 1500),
    (300, 300),
    (300, 300),
    (50, 50),
    (800, 700),
    (800, 600),
    (200, 270),
    (520, 800),
    (300, 300),
    (340, 350),
    (3400, 3500),
    (400, 350),
    (700, 900),
    (1800, 1900),
];

impl PieceKind {
    /// 駒種の数（番号の上限）
    pub const NUM: usize = 64;

    /// 駒種なし
    pub const NONE: PieceKind = PieceKind(0);
    /// 全駒種（駒種集合の中でのみ使う。`NONE` と同じ番号）
    pub const ALL_PIECES: PieceKind = PieceKind(0);

    pub const PAWN: PieceKind = PieceKind(1);
    pub const KNIGHT: PieceKind = PieceKind(2);
    pub const BISHOP: PieceKind = PieceKind(3);
    pub const ROOK: PieceKind = PieceKind(4);
    pub const QUEEN: PieceKind = PieceKind(5);
    pub const FERS: PieceKind = PieceKind(6);
    pub const MET: PieceKind = PieceKind::FERS;
    pub const ALFIL: PieceKind = PieceKind(7);
    pub const FERS_ALFIL: PieceKind = PieceKind(8);
    pub const SILVER: PieceKind = PieceKind(9);
    pub const KHON: PieceKind = PieceKind::SILVER;
    pub const AIWOK: PieceKind = PieceKind(10);
    pub const BERS: PieceKind = PieceKind(11);
    pub const DRAGON: PieceKind = PieceKind::BERS;
    pub const ARCHBISHOP: PieceKind = PieceKind(12);
    pub const CHANCELLOR: PieceKind = PieceKind(13);
    pub const AMAZON: PieceKind = PieceKind(14);
    pub const KNIBIS: PieceKind = PieceKind(15);
    pub const BISKNI: PieceKind = PieceKind(16);
    pub const KNIROO: PieceKind = PieceKind(17);
    pub const ROOKNI: PieceKind = PieceKind(18);
    pub const SHOGI_PAWN: PieceKind = PieceKind(19);
    pub const LANCE: PieceKind = PieceKind(20);
    pub const SHOGI_KNIGHT: PieceKind = PieceKind(21);
    pub const GOLD: PieceKind = PieceKind(22);
    pub const DRAGON_HORSE: PieceKind = PieceKind(23);
    pub const CLOBBER: PieceKind = PieceKind(24);
    pub const BREAKTHROUGH: PieceKind = PieceKind(25);
    pub const IMMOBILE: PieceKind = PieceKind(26);
    pub const CANNON: PieceKind = PieceKind(27);
    pub const JANGGI_CANNON: PieceKind = PieceKind(28);
    pub const SOLDIER: PieceKind = PieceKind(29);
    pub const HORSE: PieceKind = PieceKind(30);
    pub const ELEPHANT: PieceKind = PieceKind(31);
    pub const JANGGI_ELEPHANT: PieceKind = PieceKind(32);
    pub const BANNER: PieceKind = PieceKind(33);
    pub const WAZIR: PieceKind = PieceKind(34);
    pub const COMMONER: PieceKind = PieceKind(35);
    pub const CENTAUR: PieceKind = PieceKind(36);

    /// ユーザー定義駒の先頭
    pub const CUSTOM_FIRST: PieceKind = PieceKind(37);
    /// 玉
    pub const KING: PieceKind = PieceKind(63);
    /// ユーザー定義駒の数
    pub const CUSTOM_NUM: usize = (Self::KING.0 - Self::CUSTOM_FIRST.0) as usize;

    /// 番号から生成（範囲外なら `None`）
    #[inline]
    pub const fn new(n: u8) -> Option<PieceKind> {
        if (n as usize) < Self::NUM {
            Some(PieceKind(n))
        } else {
            None
        }
    }

    /// n 番目（1始まり）のユーザー定義駒
    #[inline]
    pub const fn custom(n: usize) -> Option<PieceKind> {
        if n >= 1 && n <= Self::CUSTOM_NUM {
            Some(PieceKind(Self::CUSTOM_FIRST.0 + (n - 1) as u8))
        } else {
            None
        }
    }

    /// 生の番号
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// ユーザー定義駒かどうか
    #[inline]
    pub const fn is_custom(self) -> bool {
        self.0 >= Self::CUSTOM_FIRST.0 && self.0 < Self::KING.0
    }

    /// ユーザー定義駒表の添字
    #[inline]
    pub const fn custom_index(self) -> Option<usize> {
        if self.is_custom() {
            Some((self.0 - Self::CUSTOM_FIRST.0) as usize)
        } else {
            None
        }
    }

    /// 標準駒（歩〜女王）以外かどうか
    #[inline]
    pub const fn is_fairy(self) -> bool {
        self.0 > Self::QUEEN.0
    }

    /// 設定ファイル上の名前
    pub fn config_name(self) -> String {
        if self == Self::KING {
            "king".to_string()
        } else if let Some(i) = self.custom_index() {
            format!("customPiece{}", i + 1)
        } else {
            BUILTIN_NAMES[self.index()].to_string()
        }
    }

    /// 設定ファイル上の名前から駒種を引く（大文字小文字は区別しない）
    pub fn from_config_name(name: &str) -> Option<PieceKind> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "" => return None,
            "king" => return Some(Self::KING),
            "met" => return Some(Self::MET),
            "khon" => return Some(Self::KHON),
            "dragon" => return Some(Self::DRAGON),
            _ => {}
        }
        if let Some(n) = lower.strip_prefix("custompiece") {
            return n.parse::<usize>().ok().and_then(Self::custom);
        }
        BUILTIN_NAMES
            .iter()
            .position(|n| n.to_ascii_lowercase() == lower)
            .map(|i| PieceKind(i as u8))
    }

    /// 既定の駒価値
    ///
    /// ユーザー定義駒と玉は 0。
    pub fn default_value(self, phase: Phase) -> i32 {
        let Some(&(mg, eg)) = BUILTIN_VALUES.get(self.index()) else {
            return 0;
        };
        match phase {
            Phase::Mg => mg,
            Phase::Eg => eg,
        }
    }

    /// 全駒種（NONE を除く）
    pub fn iter() -> impl Iterator<Item = PieceKind> {
        (1..Self::NUM as u8).map(PieceKind)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.config_name())
        }
    }
}

/// 駒（手番 + 駒種）
///
/// `color << 6 | kind` の 7bit に詰める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒の数（番号の上限）
    pub const NUM: usize = Color::NUM * PieceKind::NUM;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece(((color as u8) << 6) | kind.raw())
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.0 >> 6 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind(self.0 & 0x3F)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_is_largest_kind() {
        assert!(PieceKind::iter().all(|k| k <= PieceKind::KING));
        assert_eq!(PieceKind::KING.index(), PieceKind::NUM - 1);
    }

    #[test]
    fn test_custom_range() {
        assert_eq!(PieceKind::CUSTOM_NUM, 26);
        assert_eq!(PieceKind::custom(1), Some(PieceKind::CUSTOM_FIRST));
        assert_eq!(PieceKind::custom(26).map(|k| k.raw()), Some(62));
        assert_eq!(PieceKind::custom(0), None);
        assert_eq!(PieceKind::custom(27), None);
        assert!(!PieceKind::KING.is_custom());
        assert!(!PieceKind::CENTAUR.is_custom());
        assert_eq!(PieceKind::custom(3).and_then(|k| k.custom_index()), Some(2));
    }

    #[test]
    fn test_config_name_roundtrip() {
        for kind in PieceKind::iter() {
            let name = kind.config_name();
            assert_eq!(PieceKind::from_config_name(&name), Some(kind), "{name}");
        }
        assert_eq!(PieceKind::from_config_name("Khon"), Some(PieceKind::SILVER));
        assert_eq!(PieceKind::from_config_name("dragon"), Some(PieceKind::BERS));
        assert_eq!(PieceKind::from_config_name("unicorn"), None);
    }

    #[test]
    fn test_piece_packing() {
        let p = Piece::new(Color::Black, PieceKind::KING);
        assert_eq!(p.color(), Color::Black);
        assert_eq!(p.kind(), PieceKind::KING);
        assert_eq!(p.index(), 127);
        let q = Piece::new(Color::White, PieceKind::QUEEN);
        assert_eq!(q.index(), 5);
    }

    #[test]
    fn test_default_value() {
        assert_eq!(PieceKind::PAWN.default_value(Phase::Mg), 126);
        assert_eq!(PieceKind::QUEEN.default_value(Phase::Eg), 2682);
        assert_eq!(PieceKind::KING.default_value(Phase::Mg), 0);
    }
}
