//! ルール設定（生フィールド）
//!
//! 盤面・昇格・持ち駒・キャスリング・着手・終局の各グループを独立に設定できる。
//! 既定値は標準的なチェス。

use std::collections::BTreeSet;

use crate::bitboard::Bitboard;
use crate::types::{Color, File, PieceKind, Rank, Value};

/// 挟み込み規則（リバーシ型・アタックス型）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnclosingRule {
    #[default]
    None,
    Reversi,
    Ataxx,
}

/// 追い回し（千日手系）の規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChasingRule {
    #[default]
    None,
    Axf,
}

/// 駒得による判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialCounting {
    #[default]
    None,
    Janggi,
    Unweighted,
    WhiteDrawOdds,
    BlackDrawOdds,
}

/// 手数数え規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountingRule {
    #[default]
    None,
    Makruk,
    Cambodian,
    Asean,
}

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRules {
    pub max_rank: Rank,
    pub max_file: File,
    /// 初期局面（FEN 形式）
    pub start_fen: String,
    /// 持ち駒の表示幅
    pub pocket_size: u32,
    pub chess960: bool,
    /// 2 枚盤（バグハウス系）
    pub two_boards: bool,
    pub variant_template: String,
    pub piece_to_char_table: String,
}

impl Default for BoardRules {
    fn default() -> Self {
        Self {
            max_rank: Rank::R8,
            max_file: File::H,
            start_fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
            pocket_size: 0,
            chess960: false,
            two_boards: false,
            variant_template: "fairy".to_string(),
            piece_to_char_table: "-".to_string(),
        }
    }
}

impl BoardRules {
    /// 盤上の升数
    #[inline]
    pub fn squares(&self) -> usize {
        (self.max_rank.index() + 1) * (self.max_file.index() + 1)
    }

    /// 表現可能な最大盤に収まるか
    #[inline]
    pub fn fits(&self) -> bool {
        self.max_rank.is_valid() && self.max_file.is_valid()
    }

    /// 初期局面の盤面部分（最初の空白まで）
    pub fn start_board(&self) -> &str {
        self.start_fen
            .split(char::is_whitespace)
            .next()
            .unwrap_or_default()
    }
}

/// 昇格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRules {
    pub promotion_rank: Rank,
    /// 昇格先の候補（`promotion_piece_types()` で強い順に列挙）
    pub promotion_piece_types: BTreeSet<PieceKind>,
    pub sittuyin_promotion: bool,
    /// 駒種ごとの昇格上限（0 は無制限）
    pub promotion_limit: [u32; PieceKind::NUM],
    /// 駒種ごとの成り先（将棋型の成り）
    pub promoted_piece_type: [PieceKind; PieceKind::NUM],
    pub piece_promotion_on_capture: bool,
    pub mandatory_pawn_promotion: bool,
    pub mandatory_piece_promotion: bool,
    pub piece_demotion: bool,
    pub soldier_promotion_rank: Rank,
}

impl Default for PromotionRules {
    fn default() -> Self {
        Self {
            promotion_rank: Rank::R8,
            promotion_piece_types: [
                PieceKind::QUEEN,
                PieceKind::ROOK,
                PieceKind::BISHOP,
                PieceKind::KNIGHT,
            ]
            .into_iter()
            .collect(),
            sittuyin_promotion: false,
            promotion_limit: [0; PieceKind::NUM],
            promoted_piece_type: [PieceKind::NONE; PieceKind::NUM],
            piece_promotion_on_capture: false,
            mandatory_pawn_promotion: true,
            mandatory_piece_promotion: false,
            piece_demotion: false,
            soldier_promotion_rank: Rank::R1,
        }
    }
}

impl PromotionRules {
    /// 昇格先の候補を強い順（駒種番号の降順）に列挙
    pub fn promotion_piece_types(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.promotion_piece_types.iter().rev().copied()
    }

    /// 成り先
    #[inline]
    pub fn promoted(&self, kind: PieceKind) -> PieceKind {
        self.promoted_piece_type[kind.index()]
    }
}

/// 持ち駒・打ち込み
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRules {
    pub piece_drops: bool,
    pub drop_loop: bool,
    pub captures_to_hand: bool,
    pub first_rank_pawn_drops: bool,
    pub promotion_zone_pawn_drops: bool,
    pub drop_on_top: bool,
    pub enclosing_drop: EnclosingRule,
    pub enclosing_drop_start: Bitboard,
    /// 手番ごとの打ち込み可能領域
    pub drop_region: [Bitboard; Color::NUM],
    pub sittuyin_rook_drop: bool,
    pub drop_opposite_colored_bishop: bool,
    pub drop_promoted: bool,
    pub drop_no_doubled: PieceKind,
    pub drop_no_doubled_count: u32,
    pub drop_checks: bool,
    pub must_drop: bool,
    /// 打たなければならない駒種（`ALL_PIECES` は全駒種）
    pub must_drop_type: PieceKind,
    pub free_drops: bool,
}

impl Default for DropRules {
    fn default() -> Self {
        Self {
            piece_drops: false,
            drop_loop: false,
            captures_to_hand: false,
            first_rank_pawn_drops: false,
            promotion_zone_pawn_drops: false,
            drop_on_top: false,
            enclosing_drop: EnclosingRule::None,
            enclosing_drop_start: Bitboard::EMPTY,
            drop_region: [Bitboard::ALL; Color::NUM],
            sittuyin_rook_drop: false,
            drop_opposite_colored_bishop: false,
            drop_promoted: false,
            drop_no_doubled: PieceKind::NONE,
            drop_no_doubled_count: 1,
            drop_checks: true,
            must_drop: false,
            must_drop_type: PieceKind::ALL_PIECES,
            free_drops: false,
        }
    }
}

/// キャスリング
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastlingRules {
    pub castling: bool,
    pub castling_dropped_piece: bool,
    pub kingside_file: File,
    pub queenside_file: File,
    pub rank: Rank,
    pub king_file: File,
    pub king_piece: PieceKind,
    pub rook_piece: PieceKind,
}

impl Default for CastlingRules {
    fn default() -> Self {
        Self {
            castling: true,
            castling_dropped_piece: false,
            kingside_file: File::G,
            queenside_file: File::C,
            rank: Rank::R1,
            king_file: File::E,
            king_piece: PieceKind::KING,
            rook_piece: PieceKind::ROOK,
        }
    }
}

/// 着手
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRules {
    pub double_step: bool,
    pub double_step_rank: Rank,
    pub double_step_rank_min: Rank,
    pub en_passant_region: Bitboard,
    /// 玉の動き方（既定は `KING`）
    pub king_type: PieceKind,
    pub checking: bool,
    pub must_capture: bool,
    pub immobility_illegal: bool,
    pub gating: bool,
    pub arrow_gating: bool,
    pub seirawan_gating: bool,
    pub cambodian_moves: bool,
    pub diagonal_lines: Bitboard,
    pub pass: bool,
    pub pass_on_stalemate: bool,
    pub flying_general: bool,
    pub blast_on_capture: bool,
    pub flip_enclosed_pieces: EnclosingRule,
    /// 手番・駒種ごとの移動可能領域（空は制限なし）
    pub mobility_region: [[Bitboard; PieceKind::NUM]; Color::NUM],
}

impl Default for MoveRules {
    fn default() -> Self {
        Self {
            double_step: true,
            double_step_rank: Rank::R2,
            double_step_rank_min: Rank::R2,
            en_passant_region: Bitboard::ALL,
            king_type: PieceKind::KING,
            checking: true,
            must_capture: false,
            immobility_illegal: false,
            gating: false,
            arrow_gating: false,
            seirawan_gating: false,
            cambodian_moves: false,
            diagonal_lines: Bitboard::EMPTY,
            pass: false,
            pass_on_stalemate: false,
            flying_general: false,
            blast_on_capture: false,
            flip_enclosed_pieces: EnclosingRule::None,
            mobility_region: [[Bitboard::EMPTY; PieceKind::NUM]; Color::NUM],
        }
    }
}

impl MoveRules {
    #[inline]
    pub fn mobility_region(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.mobility_region[color.index()][kind.index()]
    }

    /// いずれかの手番に移動領域の制限があるか
    #[inline]
    pub fn is_restricted(&self, kind: PieceKind) -> bool {
        Color::ALL
            .iter()
            .any(|&c| self.mobility_region(c, kind).is_not_empty())
    }
}

/// 終局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEndRules {
    pub n_move_rule: u32,
    pub n_fold_rule: u32,
    pub n_fold_value: Value,
    pub n_fold_value_absolute: bool,
    pub perpetual_check_illegal: bool,
    pub move_repetition_illegal: bool,
    pub chasing_rule: ChasingRule,
    pub stalemate_value: Value,
    /// ステイルメイト値に駒数差の符号を掛ける
    pub stalemate_piece_count: bool,
    pub checkmate_value: Value,
    pub shogi_pawn_drop_mate_illegal: bool,
    pub shatar_mate_rule: bool,
    pub bikjang_rule: bool,
    pub extinction_value: Value,
    pub extinction_claim: bool,
    pub extinction_pseudo_royal: bool,
    pub extinction_piece_types: BTreeSet<PieceKind>,
    pub extinction_piece_count: u32,
    pub extinction_opponent_piece_count: u32,
    pub flag_piece: PieceKind,
    /// 手番ごとの旗領域
    pub flag_region: [Bitboard; Color::NUM],
    pub flag_move: bool,
    pub check_counting: bool,
    pub connect_n: u32,
    pub material_counting: MaterialCounting,
    pub counting_rule: CountingRule,
    /// 手詰まり引き分け（マークポン）
    pub makpong_rule: bool,
}

impl Default for GameEndRules {
    fn default() -> Self {
        Self {
            n_move_rule: 50,
            n_fold_rule: 3,
            n_fold_value: Value::DRAW,
            n_fold_value_absolute: false,
            perpetual_check_illegal: false,
            move_repetition_illegal: false,
            chasing_rule: ChasingRule::None,
            stalemate_value: Value::DRAW,
            stalemate_piece_count: false,
            checkmate_value: -Value::MATE,
            shogi_pawn_drop_mate_illegal: false,
            shatar_mate_rule: false,
            bikjang_rule: false,
            extinction_value: Value::NONE,
            extinction_claim: false,
            extinction_pseudo_royal: false,
            extinction_piece_types: BTreeSet::new(),
            extinction_piece_count: 0,
            extinction_opponent_piece_count: 0,
            flag_piece: PieceKind::NONE,
            flag_region: [Bitboard::EMPTY; Color::NUM],
            flag_move: false,
            check_counting: false,
            connect_n: 0,
            material_counting: MaterialCounting::None,
            counting_rule: CountingRule::None,
            makpong_rule: false,
        }
    }
}
