//! 導出値の計算
//!
//! 生フィールドだけから計算する純粋関数。事前計算済みの表には依存しない。

use crate::types::{Color, Piece, PieceKind, Value};

use super::VariantConfig;
use super::features::{FeatureLayout, FeatureSpace};
use super::fen::count_char;
use super::rules::MaterialCounting;

/// 導出値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// 標準の利き計算で足りる
    pub fast_attacks: bool,
    /// 拡張された利き計算で足りる
    pub fast_attacks2: bool,
    /// NNUE 特徴量空間
    pub features: FeatureSpace,
    /// 盤上（と初期持ち駒）の最大駒数
    pub max_pieces: usize,
    /// 終盤評価を使える
    pub endgame_eval: bool,
    /// 将棋型の成りがある
    pub shogi_style_promotions: bool,
}

fn fast_attack_kind(kind: PieceKind, king_type: PieceKind) -> bool {
    matches!(
        kind,
        PieceKind::PAWN
            | PieceKind::KNIGHT
            | PieceKind::BISHOP
            | PieceKind::ROOK
            | PieceKind::QUEEN
            | PieceKind::COMMONER
            | PieceKind::IMMOBILE
            | PieceKind::ARCHBISHOP
            | PieceKind::CHANCELLOR
    ) || (kind == PieceKind::KING && king_type == PieceKind::KING)
}

fn fast_attack2_kind(kind: PieceKind, king_type: PieceKind) -> bool {
    matches!(
        kind,
        PieceKind::PAWN
            | PieceKind::KNIGHT
            | PieceKind::BISHOP
            | PieceKind::ROOK
            | PieceKind::QUEEN
            | PieceKind::COMMONER
            | PieceKind::FERS
            | PieceKind::WAZIR
            | PieceKind::BREAKTHROUGH
            | PieceKind::SHOGI_PAWN
            | PieceKind::GOLD
            | PieceKind::SILVER
            | PieceKind::SHOGI_KNIGHT
            | PieceKind::DRAGON
            | PieceKind::DRAGON_HORSE
            | PieceKind::LANCE
    ) || (kind == PieceKind::KING && king_type == PieceKind::KING)
}

/// 玉として扱う駒種
///
/// 玉があれば玉、なければ「最後の 1 枚を取られたら負け」の普通駒。
/// どちらの手番も初期局面にちょうど 1 枚でなければ玉なしとする。
fn royal_kind(config: &VariantConfig) -> Option<PieceKind> {
    let pieces = config.pieces();
    let game_end = &config.game_end;
    let candidate = if pieces.contains(PieceKind::KING) {
        PieceKind::KING
    } else if game_end.extinction_piece_count == 0
        && game_end.extinction_piece_types.contains(&PieceKind::COMMONER)
    {
        PieceKind::COMMONER
    } else {
        return None;
    };
    let board = config.board.start_board();
    let unique = Color::ALL.iter().all(|&c| {
        pieces
            .piece_to_char(Piece::new(c, candidate))
            .is_some_and(|ch| count_char(board, ch) == 1)
    });
    if !unique {
        log::debug!("no unique {candidate} per side in start position, features without king");
        return None;
    }
    Some(candidate)
}

fn uses_pockets(config: &VariantConfig) -> bool {
    let drops = &config.drops;
    (drops.piece_drops
        && (drops.captures_to_hand
            || (!drops.must_drop && !config.moves.arrow_gating && config.pieces().len() != 1)))
        || config.moves.seirawan_gating
}

/// 生フィールドから導出値を計算する
///
/// 何度呼んでも同じ結果を返す。失敗はせず、計算できない部分は縮退させる。
pub fn derive(config: &VariantConfig) -> Derived {
    let pieces = config.pieces();
    let moves = &config.moves;
    let game_end = &config.game_end;

    let unrestricted = pieces.kinds().all(|k| !moves.is_restricted(k));
    let plain_moves = !moves.cambodian_moves && moves.diagonal_lines.is_empty();
    let fast_attacks = unrestricted
        && plain_moves
        && pieces.kinds().all(|k| fast_attack_kind(k, moves.king_type));
    let fast_attacks2 = unrestricted
        && plain_moves
        && pieces.kinds().all(|k| fast_attack2_kind(k, moves.king_type));

    let royal = royal_kind(config);
    let layout = FeatureLayout {
        kinds: pieces.kinds().collect(),
        royal,
        max_file: config.board.max_file,
        max_rank: config.board.max_rank,
        use_pockets: uses_pockets(config),
        royal_regions: royal.map_or([Default::default(); Color::NUM], |r| {
            [
                moves.mobility_region(Color::White, r),
                moves.mobility_region(Color::Black, r),
            ]
        }),
    };
    let features = FeatureSpace::build(&layout);
    if features.board_overflow() {
        log::warn!(
            "board {}x{} does not fit 12x10, features use a single king block",
            config.board.max_file.index() + 1,
            config.board.max_rank.index() + 1
        );
    }
    if features.anchors().is_empty() {
        log::warn!("king mobility region leaves no king square, feature space is empty");
    }

    let mut max_pieces = config
        .board
        .start_board()
        .chars()
        .filter(|&c| pieces.is_piece_char(c))
        .count();
    if config.board.two_boards {
        max_pieces *= 2;
    }

    let endgame_eval = unrestricted
        && game_end.extinction_value == Value::NONE
        && game_end.checkmate_value == -Value::MATE
        && game_end.stalemate_value == Value::DRAW
        && game_end.material_counting == MaterialCounting::None
        && game_end.flag_piece.is_none()
        && !moves.must_capture
        && !game_end.check_counting
        && !game_end.makpong_rule
        && game_end.connect_n == 0
        && !moves.blast_on_capture
        && !config.drops.captures_to_hand
        && !config.board.two_boards
        && moves.king_type == PieceKind::KING;

    let shogi_style_promotions = pieces.kinds().any(|k| {
        let promoted = config.promotion.promoted(k);
        !promoted.is_none() && promoted != k
    });

    let derived = Derived {
        fast_attacks,
        fast_attacks2,
        features,
        max_pieces,
        endgame_eval,
        shogi_style_promotions,
    };
    log::debug!(
        "derived: fast_attacks={} fast_attacks2={} dimensions={} max_pieces={} endgame_eval={} shogi_promotions={}",
        derived.fast_attacks,
        derived.fast_attacks2,
        derived.features.dimensions(),
        derived.max_pieces,
        derived.endgame_eval,
        derived.shogi_style_promotions
    );
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;

    #[test]
    fn test_standard_chess() {
        let derived = derive(&VariantConfig::default());
        assert!(derived.fast_attacks);
        assert!(derived.fast_attacks2);
        assert!(derived.endgame_eval);
        assert!(!derived.shogi_style_promotions);
        assert_eq!(derived.max_pieces, 32);
        // 64 anchors × (11 * 64)
        assert_eq!(derived.features.royal(), Some(PieceKind::KING));
        assert_eq!(derived.features.dimensions(), 64 * 11 * 64);
        assert!(!derived.features.uses_pockets());
    }

    #[test]
    fn test_idempotent() {
        let mut config = VariantConfig::default();
        config.add_piece(PieceKind::ARCHBISHOP, 'a');
        config.drops.piece_drops = true;
        assert_eq!(derive(&config), derive(&config));
    }

    #[test]
    fn test_mobility_region_disables_fast_paths() {
        let mut config = VariantConfig::default();
        config.moves.mobility_region[Color::White.index()][PieceKind::KNIGHT.index()] = Bitboard::ALL;
        let derived = derive(&config);
        assert!(!derived.fast_attacks);
        assert!(!derived.fast_attacks2);
        assert!(!derived.endgame_eval);
    }

    #[test]
    fn test_fairy_kinds_split_fast_paths() {
        let mut config = VariantConfig::default();
        config.add_piece(PieceKind::GOLD, 'g');
        let derived = derive(&config);
        assert!(!derived.fast_attacks);
        assert!(derived.fast_attacks2);

        let mut config = VariantConfig::default();
        config.add_piece(PieceKind::CHANCELLOR, 'c');
        let derived = derive(&config);
        assert!(derived.fast_attacks);
        assert!(!derived.fast_attacks2);
    }

    #[test]
    fn test_king_type_and_move_flags() {
        let mut config = VariantConfig::default();
        config.moves.king_type = PieceKind::WAZIR;
        let derived = derive(&config);
        assert!(!derived.fast_attacks);
        assert!(!derived.endgame_eval);

        let mut config = VariantConfig::default();
        config.moves.cambodian_moves = true;
        assert!(!derive(&config).fast_attacks2);
    }

    #[test]
    fn test_endgame_eval_conditions() {
        let mut config = VariantConfig::default();
        config.game_end.extinction_value = -Value::MATE;
        assert!(!derive(&config).endgame_eval);

        let mut config = VariantConfig::default();
        config.game_end.connect_n = 4;
        assert!(!derive(&config).endgame_eval);

        let mut config = VariantConfig::default();
        config.drops.captures_to_hand = true;
        assert!(!derive(&config).endgame_eval);
    }

    #[test]
    fn test_two_kings_per_side_drops_royal() {
        let mut config = VariantConfig::default();
        config.board.start_fen = "rnbqkbnk/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNK w - - 0 1".to_string();
        let features = derive(&config).features;
        assert_eq!(features.royal(), None);
        assert_eq!(features.anchors(), &[0]);
        assert_eq!(features.dimensions(), 12 * 64);
        assert!(features.check_bijective().is_ok());
    }

    #[test]
    fn test_commoner_royal_through_extinction() {
        let mut config = VariantConfig::default();
        config.remove_piece(PieceKind::KING).add_piece(PieceKind::COMMONER, 'k');
        config.game_end.extinction_value = -Value::MATE;
        config.game_end.extinction_piece_types.insert(PieceKind::COMMONER);
        let features = derive(&config).features;
        assert_eq!(features.royal(), Some(PieceKind::COMMONER));
        assert_eq!(features.anchors().len(), 64);
        assert!(features.check_bijective().is_ok());
    }

    #[test]
    fn test_pockets_and_two_boards() {
        let mut config = VariantConfig::default();
        config.drops.piece_drops = true;
        config.drops.captures_to_hand = true;
        config.board.two_boards = true;
        let derived = derive(&config);
        assert!(derived.features.uses_pockets());
        assert_eq!(derived.features.pocket_width(), 16);
        assert_eq!(derived.max_pieces, 64);
    }

    #[test]
    fn test_max_pieces_counts_synonyms_and_pocket() {
        let mut config = VariantConfig::default();
        config.add_piece_with_synonym(PieceKind::HORSE, 'x', 'h');
        config.board.start_fen =
            "rnbqkbnh/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNH[Pp] w - - 0 1".to_string();
        // 盤上の 32 枚（同義文字 h/H を含む）と持ち駒の 2 枚
        assert_eq!(derive(&config).max_pieces, 34);

        config.board.two_boards = true;
        assert_eq!(derive(&config).max_pieces, 68);
    }

    #[test]
    fn test_shogi_style_promotions() {
        let mut config = VariantConfig::default();
        config.promotion.promoted_piece_type[PieceKind::PAWN.index()] = PieceKind::PAWN;
        assert!(!derive(&config).shogi_style_promotions);
        config.promotion.promoted_piece_type[PieceKind::PAWN.index()] = PieceKind::GOLD;
        assert!(derive(&config).shogi_style_promotions);
        // 無効な駒種の成り先は数えない
        config.promotion.promoted_piece_type[PieceKind::PAWN.index()] = PieceKind::NONE;
        config.promotion.promoted_piece_type[PieceKind::LANCE.index()] = PieceKind::GOLD;
        assert!(!derive(&config).shogi_style_promotions);
    }
}
