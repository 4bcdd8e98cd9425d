//! 評価パラメータ
//!
//! 静的評価が読むチューニング定数。導出処理の対象ではなく、
//! バリアント定義ではそのまま保持して評価側へ渡すだけ。

use crate::types::{Phase, PieceKind, Rank, Score, Square, Term};

const fn s(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

/// 移動力ボーナス表の幅（攻撃升数の上限）
pub const MOBILITY_SLOTS: usize = 4 * Rank::NUM;

/// 標準駒の移動力ボーナス（騎士・僧正・城・女王）
const KNIGHT_MOBILITY: [Score; 9] = [
    s(-62, -79), s(-53, -57), s(-12, -31), s(-3, -17), s(3, 7), s(12, 13),
    s(21, 16), s(28, 21), s(37, 26),
];
const BISHOP_MOBILITY: [Score; 14] = [
    s(-47, -59), s(-20, -25), s(14, -8), s(29, 12), s(39, 21), s(53, 40),
    s(53, 56), s(60, 58), s(62, 65), s(69, 72), s(78, 78), s(83, 87),
    s(91, 88), s(96, 98),
];
const ROOK_MOBILITY: [Score; 15] = [
    s(-60, -82), s(-24, -15), s(0, 17), s(3, 43), s(4, 72), s(14, 100),
    s(20, 102), s(30, 122), s(41, 133), s(41, 139), s(41, 153), s(45, 160),
    s(57, 165), s(58, 170), s(67, 175),
];
const QUEEN_MOBILITY: [Score; 28] = [
    s(-29, -49), s(-16, -29), s(-8, -8), s(-8, 17), s(18, 39), s(25, 54),
    s(23, 59), s(37, 73), s(41, 76), s(54, 95), s(65, 95), s(68, 101),
    s(69, 124), s(70, 128), s(70, 132), s(70, 133), s(71, 136), s(72, 140),
    s(74, 147), s(76, 149), s(90, 153), s(104, 169), s(105, 171), s(106, 171),
    s(112, 178), s(114, 185), s(114, 187), s(119, 221),
];

/// 評価パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalParams {
    pub lazy_threshold1: i32,
    pub lazy_threshold2: i32,
    pub space_threshold: i32,

    /// 駒種ごとの玉攻撃の重み
    pub king_attack_weights: [i32; PieceKind::NUM],
    /// 駒種ごとの安全な王手のボーナス [単数, 複数]
    pub safe_check: [[i32; 2]; PieceKind::NUM],
    /// 駒種 × 攻撃升数 の移動力ボーナス
    pub mobility_bonus: Vec<[Score; MOBILITY_SLOTS]>,
    pub max_mobility: Score,
    pub drop_mobility: Score,

    pub bishop_pawns: [Score; 6],
    pub king_protector: [Score; 2],
    pub outpost: [Score; 2],
    pub passed_rank: [Score; Rank::NUM],
    pub rook_on_closed_file: Score,
    pub rook_on_open_file: [Score; 2],
    pub threat_by_minor: [Score; PieceKind::NUM],
    pub threat_by_rook: [Score; PieceKind::NUM],
    pub cornered_bishop: i32,

    pub uncontested_outpost: Score,
    pub bishop_on_king_ring: Score,
    pub bishop_xray_pawns: Score,
    pub flank_attacks: Score,
    pub hanging: Score,
    pub knight_on_queen: Score,
    pub long_diagonal_bishop: Score,
    pub minor_behind_pawn: Score,
    pub passed_file: Score,
    pub pawnless_flank: Score,
    pub reachable_outpost: Score,
    pub restricted_piece: Score,
    pub rook_on_king_ring: Score,
    pub slider_on_queen: Score,
    pub threat_by_king: Score,
    pub threat_by_pawn_push: Score,
    pub threat_by_safe_pawn: Score,
    pub trapped_rook: Score,
    pub weak_queen_protection: Score,
    pub weak_queen: Score,

    pub king_proximity: Score,
    pub endgame_king_proximity: Score,
    pub connected_soldier: Score,
    pub virtual_check: i32,
    pub promotion_bonus: Score,
    pub psq_value: Score,

    /// 段階 × 駒種 の駒価値
    pub piece_value: [[i32; PieceKind::NUM]; Phase::NUM],
    /// 段階 × 評価項目 の重み（百分率）
    pub score_value: [[i32; Term::NUM]; Phase::NUM],
    /// 段階 × 駒種 × 升 の位置ボーナス
    piece_square_bonus: Vec<i32>,
}

impl Default for EvalParams {
    fn default() -> Self {
        let mut king_attack_weights = [0; PieceKind::NUM];
        king_attack_weights[PieceKind::KNIGHT.index()] = 81;
        king_attack_weights[PieceKind::BISHOP.index()] = 52;
        king_attack_weights[PieceKind::ROOK.index()] = 44;
        king_attack_weights[PieceKind::QUEEN.index()] = 10;
        king_attack_weights[PieceKind::FERS.index()] = 40;

        let mut safe_check = [[0; 2]; PieceKind::NUM];
        for (kind, single, multiple) in [
            (PieceKind::PAWN, 600, 600),
            (PieceKind::KNIGHT, 803, 1292),
            (PieceKind::BISHOP, 639, 974),
            (PieceKind::ROOK, 1087, 1878),
            (PieceKind::QUEEN, 759, 1132),
            (PieceKind::FERS, 600, 900),
        ] {
            safe_check[kind.index()] = [single, multiple];
        }

        let mut mobility_bonus = vec![[Score::ZERO; MOBILITY_SLOTS]; PieceKind::NUM];
        for (kind, table) in [
            (PieceKind::KNIGHT, &KNIGHT_MOBILITY[..]),
            (PieceKind::BISHOP, &BISHOP_MOBILITY[..]),
            (PieceKind::ROOK, &ROOK_MOBILITY[..]),
            (PieceKind::QUEEN, &QUEEN_MOBILITY[..]),
        ] {
            mobility_bonus[kind.index()][..table.len()].copy_from_slice(table);
        }

        let mut threat_by_minor = [Score::ZERO; PieceKind::NUM];
        let mut threat_by_rook = [Score::ZERO; PieceKind::NUM];
        for (kind, minor, rook) in [
            (PieceKind::PAWN, s(5, 32), s(3, 44)),
            (PieceKind::KNIGHT, s(55, 41), s(37, 68)),
            (PieceKind::BISHOP, s(77, 56), s(42, 60)),
            (PieceKind::ROOK, s(89, 119), s(0, 39)),
            (PieceKind::QUEEN, s(79, 162), s(58, 43)),
        ] {
            threat_by_minor[kind.index()] = minor;
            threat_by_rook[kind.index()] = rook;
        }

        let mut piece_value = [[0; PieceKind::NUM]; Phase::NUM];
        for phase in Phase::ALL {
            for kind in PieceKind::iter() {
                piece_value[phase.index()][kind.index()] = kind.default_value(phase);
            }
        }

        Self {
            lazy_threshold1: 1565,
            lazy_threshold2: 1102,
            space_threshold: 11551,
            king_attack_weights,
            safe_check,
            mobility_bonus,
            max_mobility: s(150, 200),
            drop_mobility: s(10, 10),
            bishop_pawns: [s(3, 8), s(3, 9), s(2, 8), s(3, 8), Score::ZERO, Score::ZERO],
            king_protector: [s(8, 9), s(6, 9)],
            outpost: [s(57, 38), s(31, 24)],
            passed_rank: [
                s(0, 0),
                s(7, 27),
                s(16, 32),
                s(17, 40),
                s(64, 71),
                s(170, 174),
                s(278, 262),
                s(0, 0),
                s(0, 0),
                s(0, 0),
            ],
            rook_on_closed_file: s(10, 5),
            rook_on_open_file: [s(19, 6), s(47, 26)],
            threat_by_minor,
            threat_by_rook,
            cornered_bishop: 50,
            uncontested_outpost: s(1, 10),
            bishop_on_king_ring: s(24, 0),
            bishop_xray_pawns: s(4, 5),
            flank_attacks: s(8, 0),
            hanging: s(69, 36),
            knight_on_queen: s(16, 11),
            long_diagonal_bishop: s(45, 0),
            minor_behind_pawn: s(18, 3),
            passed_file: s(11, 8),
            pawnless_flank: s(17, 95),
            reachable_outpost: s(31, 22),
            restricted_piece: s(7, 7),
            rook_on_king_ring: s(16, 0),
            slider_on_queen: s(60, 18),
            threat_by_king: s(24, 89),
            threat_by_pawn_push: s(48, 39),
            threat_by_safe_pawn: s(173, 94),
            trapped_rook: s(55, 13),
            weak_queen_protection: s(14, 0),
            weak_queen: s(56, 15),
            king_proximity: s(2, 6),
            endgame_king_proximity: s(0, 10),
            connected_soldier: s(20, 20),
            virtual_check: 600,
            promotion_bonus: s(1, 1),
            psq_value: s(100, 100),
            piece_value,
            score_value: [[100; Term::NUM]; Phase::NUM],
            piece_square_bonus: vec![0; Phase::NUM * PieceKind::NUM * Square::NUM],
        }
    }
}

impl EvalParams {
    #[inline]
    fn psq_slot(phase: Phase, kind: PieceKind, sq: Square) -> usize {
        (phase.index() * PieceKind::NUM + kind.index()) * Square::NUM + sq.index()
    }

    /// 駒価値
    #[inline]
    pub fn piece_value(&self, phase: Phase, kind: PieceKind) -> i32 {
        self.piece_value[phase.index()][kind.index()]
    }

    /// 位置ボーナス
    #[inline]
    pub fn piece_square_bonus(&self, phase: Phase, kind: PieceKind, sq: Square) -> i32 {
        self.piece_square_bonus[Self::psq_slot(phase, kind, sq)]
    }

    pub fn set_piece_square_bonus(&mut self, phase: Phase, kind: PieceKind, sq: Square, v: i32) {
        self.piece_square_bonus[Self::psq_slot(phase, kind, sq)] = v;
    }

    /// 移動力ボーナス（攻撃升数が表の幅を超える場合は末尾の値）
    pub fn mobility_bonus(&self, kind: PieceKind, attacked: usize) -> Score {
        self.mobility_bonus[kind.index()][attacked.min(MOBILITY_SLOTS - 1)]
    }
}
