//! 組み込みバリアント
//!
//! いずれも標準チェス（`VariantConfig::default()`）か既存の組み込み定義から派生させる。

use crate::bitboard::Bitboard;
use crate::types::{Color, File, PieceKind, Rank, Square, Value};
use crate::variant::{CountingRule, VariantConfig};

/// 筋・段の範囲で指定した升集合
fn region(files: std::ops::RangeInclusive<u8>, ranks: std::ops::RangeInclusive<u8>) -> Bitboard {
    ranks
        .flat_map(|r| files.clone().map(move |f| Square::new(File::new(f), Rank::new(r))))
        .collect()
}

fn fairy() -> VariantConfig {
    VariantConfig::default()
}

fn chess() -> VariantConfig {
    fairy()
}

fn nocastle() -> VariantConfig {
    let mut v = chess();
    v.board.start_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1".to_string();
    v.castling.castling = false;
    v
}

fn fischerandom() -> VariantConfig {
    let mut v = chess();
    v.board.chess960 = true;
    v
}

fn crazyhouse() -> VariantConfig {
    let mut v = chess();
    v.board.start_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR[] w KQkq - 0 1".to_string();
    v.board.pocket_size = 5;
    v.drops.piece_drops = true;
    v.drops.captures_to_hand = true;
    v
}

fn drop_loop() -> VariantConfig {
    let mut v = crazyhouse();
    v.drops.drop_loop = true;
    v
}

fn atomic() -> VariantConfig {
    let mut v = chess();
    v.remove_piece(PieceKind::KING)
        .add_piece(PieceKind::COMMONER, 'k');
    v.castling.king_piece = PieceKind::COMMONER;
    v.game_end.extinction_value = -Value::MATE;
    v.game_end.extinction_piece_types = [PieceKind::COMMONER].into_iter().collect();
    v.moves.blast_on_capture = true;
    v
}

fn kingofthehill() -> VariantConfig {
    let mut v = chess();
    let center = region(3..=4, 3..=4);
    v.game_end.flag_piece = PieceKind::KING;
    v.game_end.flag_region = [center; Color::NUM];
    v
}

fn racingkings() -> VariantConfig {
    let mut v = chess();
    v.board.start_fen = "8/8/8/8/8/8/krbnNBRK/qrbnNBRQ w - - 0 1".to_string();
    v.castling.castling = false;
    v.moves.checking = false;
    v.game_end.flag_piece = PieceKind::KING;
    v.game_end.flag_region = [Bitboard::rank(Rank::R8); Color::NUM];
    v.game_end.flag_move = true;
    v
}

fn three_check() -> VariantConfig {
    let mut v = chess();
    v.board.start_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 3+3 0 1".to_string();
    v.game_end.check_counting = true;
    v
}

fn antichess() -> VariantConfig {
    let mut v = nocastle();
    v.remove_piece(PieceKind::KING)
        .add_piece(PieceKind::COMMONER, 'k');
    v.promotion.promotion_piece_types.insert(PieceKind::COMMONER);
    v.game_end.stalemate_value = Value::MATE;
    v.game_end.extinction_value = Value::MATE;
    v.game_end.extinction_piece_types = [PieceKind::ALL_PIECES].into_iter().collect();
    v.moves.must_capture = true;
    v
}

fn extinction() -> VariantConfig {
    let mut v = chess();
    v.remove_piece(PieceKind::KING)
        .add_piece(PieceKind::COMMONER, 'k');
    v.castling.king_piece = PieceKind::COMMONER;
    v.promotion.promotion_piece_types.insert(PieceKind::COMMONER);
    v.game_end.extinction_value = -Value::MATE;
    v.game_end.extinction_piece_types = [
        PieceKind::COMMONER,
        PieceKind::QUEEN,
        PieceKind::ROOK,
        PieceKind::BISHOP,
        PieceKind::KNIGHT,
        PieceKind::PAWN,
    ]
    .into_iter()
    .collect();
    v
}

fn losers() -> VariantConfig {
    let mut v = nocastle();
    v.game_end.checkmate_value = Value::MATE;
    v.game_end.stalemate_value = Value::MATE;
    v.game_end.extinction_value = Value::MATE;
    v.game_end.extinction_piece_types = [PieceKind::ALL_PIECES].into_iter().collect();
    v.game_end.extinction_piece_count = 1;
    v.moves.must_capture = true;
    v
}

/// 白に玉がないので特徴量は玉なしの形になる
fn horde() -> VariantConfig {
    let mut v = chess();
    v.board.start_fen =
        "rnbqkbnr/pppppppp/8/1PP2PP1/PPPPPPPP/PPPPPPPP/PPPPPPPP/PPPPPPPP w kq - 0 1".to_string();
    v.moves.double_step_rank_min = Rank::R1;
    v.moves.en_passant_region = !Bitboard::rank(Rank::R1) & !Bitboard::rank(Rank::R2);
    v.game_end.extinction_value = -Value::MATE;
    v.game_end.extinction_piece_types = [PieceKind::ALL_PIECES].into_iter().collect();
    v
}

fn makruk() -> VariantConfig {
    let mut v = chess();
    v.reset_pieces()
        .add_piece(PieceKind::PAWN, 'p')
        .add_piece(PieceKind::KNIGHT, 'n')
        .add_piece(PieceKind::KHON, 's')
        .add_piece(PieceKind::ROOK, 'r')
        .add_piece(PieceKind::MET, 'm')
        .add_piece(PieceKind::KING, 'k');
    v.board.start_fen = "rnsmksnr/8/pppppppp/8/8/PPPPPPPP/8/RNSKMSNR w - - 0 1".to_string();
    v.promotion.promotion_rank = Rank::R6;
    v.promotion.promotion_piece_types = [PieceKind::MET].into_iter().collect();
    v.moves.double_step = false;
    v.castling.castling = false;
    v.game_end.n_move_rule = 0;
    v.game_end.counting_rule = CountingRule::Makruk;
    v
}

fn shatranj() -> VariantConfig {
    let mut v = chess();
    v.reset_pieces()
        .add_piece(PieceKind::PAWN, 'p')
        .add_piece(PieceKind::KNIGHT, 'n')
        .add_piece(PieceKind::ALFIL, 'b')
        .add_piece(PieceKind::ROOK, 'r')
        .add_piece(PieceKind::FERS, 'q')
        .add_piece(PieceKind::KING, 'k');
    v.board.start_fen = "rnbkqbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKQBNR w - - 0 1".to_string();
    v.promotion.promotion_piece_types = [PieceKind::FERS].into_iter().collect();
    v.moves.double_step = false;
    v.castling.castling = false;
    v.game_end.extinction_value = -Value::MATE;
    v.game_end.extinction_claim = true;
    v.game_end.extinction_piece_types = [PieceKind::ALL_PIECES].into_iter().collect();
    v.game_end.extinction_piece_count = 1;
    v.game_end.extinction_opponent_piece_count = 2;
    v.game_end.stalemate_value = -Value::MATE;
    v.game_end.n_move_rule = 70;
    v
}

fn capablanca() -> VariantConfig {
    let mut v = chess();
    v.board.max_file = File::J;
    v.board.start_fen =
        "rnabqkbcnr/pppppppppp/10/10/10/10/PPPPPPPPPP/RNABQKBCNR w KQkq - 0 1".to_string();
    v.add_piece(PieceKind::ARCHBISHOP, 'a')
        .add_piece(PieceKind::CHANCELLOR, 'c');
    v.castling.kingside_file = File::I;
    v.castling.queenside_file = File::C;
    v.castling.king_file = File::F;
    v.promotion.promotion_piece_types.insert(PieceKind::ARCHBISHOP);
    v.promotion.promotion_piece_types.insert(PieceKind::CHANCELLOR);
    v
}

/// 将棋系の共通部分
fn shogi_base() -> VariantConfig {
    let mut v = chess();
    v.reset_pieces()
        .add_piece(PieceKind::SHOGI_PAWN, 'p')
        .add_piece(PieceKind::SILVER, 's')
        .add_piece(PieceKind::GOLD, 'g')
        .add_piece(PieceKind::BISHOP, 'b')
        .add_piece(PieceKind::DRAGON_HORSE, 'h')
        .add_piece(PieceKind::ROOK, 'r')
        .add_piece(PieceKind::DRAGON, 'd')
        .add_piece(PieceKind::KING, 'k');
    v.drops.piece_drops = true;
    v.drops.captures_to_hand = true;
    v.drops.drop_no_doubled = PieceKind::SHOGI_PAWN;
    v.promotion.promotion_piece_types.clear();
    v.promotion.mandatory_pawn_promotion = false;
    for (from, to) in [
        (PieceKind::SHOGI_PAWN, PieceKind::GOLD),
        (PieceKind::SILVER, PieceKind::GOLD),
        (PieceKind::BISHOP, PieceKind::DRAGON_HORSE),
        (PieceKind::ROOK, PieceKind::DRAGON),
    ] {
        v.promotion.promoted_piece_type[from.index()] = to;
    }
    v.moves.double_step = false;
    v.moves.immobility_illegal = true;
    v.castling.castling = false;
    v.game_end.shogi_pawn_drop_mate_illegal = true;
    v.game_end.stalemate_value = -Value::MATE;
    v.game_end.n_fold_rule = 4;
    v.game_end.n_move_rule = 0;
    v.game_end.perpetual_check_illegal = true;
    v
}

fn minishogi() -> VariantConfig {
    let mut v = shogi_base();
    v.board.max_file = File::E;
    v.board.max_rank = Rank::R5;
    v.board.start_fen = "rbsgk/4p/5/P4/KGSBR[-] w 0 1".to_string();
    v.board.pocket_size = 5;
    v.promotion.promotion_rank = Rank::R5;
    v
}

fn shogi() -> VariantConfig {
    let mut v = shogi_base();
    v.board.max_file = File::I;
    v.board.max_rank = Rank::R9;
    v.board.start_fen =
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL[-] w 0 1".to_string();
    v.board.pocket_size = 7;
    v.add_piece(PieceKind::LANCE, 'l')
        .add_piece(PieceKind::SHOGI_KNIGHT, 'n');
    v.promotion.promotion_rank = Rank::R7;
    v.promotion.promoted_piece_type[PieceKind::LANCE.index()] = PieceKind::GOLD;
    v.promotion.promoted_piece_type[PieceKind::SHOGI_KNIGHT.index()] = PieceKind::GOLD;
    v
}

/// 玉と士は九宮、象は自陣に限られる
fn xiangqi() -> VariantConfig {
    let mut v = chess();
    v.reset_pieces()
        .add_piece(PieceKind::ROOK, 'r')
        .add_piece_with_synonym(PieceKind::HORSE, 'n', 'h')
        .add_piece_with_synonym(PieceKind::ELEPHANT, 'b', 'e')
        .add_piece(PieceKind::FERS, 'a')
        .add_piece(PieceKind::KING, 'k')
        .add_piece(PieceKind::CANNON, 'c')
        .add_piece(PieceKind::SOLDIER, 'p');
    v.board.max_file = File::I;
    v.board.max_rank = Rank::R10;
    v.board.start_fen =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1".to_string();

    let white_palace = region(3..=5, 0..=2);
    let black_palace = region(3..=5, 7..=9);
    let white_side = region(0..=8, 0..=4);
    let black_side = region(0..=8, 5..=9);
    for (kind, white, black) in [
        (PieceKind::KING, white_palace, black_palace),
        (PieceKind::FERS, white_palace, black_palace),
        (PieceKind::ELEPHANT, white_side, black_side),
    ] {
        v.moves.mobility_region[Color::White.index()][kind.index()] = white;
        v.moves.mobility_region[Color::Black.index()][kind.index()] = black;
    }
    v.moves.king_type = PieceKind::WAZIR;
    v.moves.double_step = false;
    v.moves.flying_general = true;
    v.promotion.promotion_piece_types.clear();
    v.promotion.soldier_promotion_rank = Rank::R6;
    v.castling.castling = false;
    v.game_end.stalemate_value = -Value::MATE;
    v.game_end.perpetual_check_illegal = true;
    v.game_end.n_move_rule = 0;
    v
}

fn tictactoe() -> VariantConfig {
    let mut v = chess();
    v.board.max_file = File::C;
    v.board.max_rank = Rank::R3;
    v.board.start_fen = "3/3/3[PPPPPpppp] w - - 0 1".to_string();
    v.reset_pieces().add_piece(PieceKind::IMMOBILE, 'p');
    v.drops.piece_drops = true;
    v.moves.double_step = false;
    v.castling.castling = false;
    v.promotion.promotion_piece_types.clear();
    v.game_end.stalemate_value = Value::DRAW;
    v.game_end.connect_n = 3;
    v
}

/// 組み込みバリアントの名前と定義（登録順）
pub(crate) fn builtin_variants() -> Vec<(&'static str, VariantConfig)> {
    vec![
        ("fairy", fairy()),
        ("chess", chess()),
        ("nocastle", nocastle()),
        ("fischerandom", fischerandom()),
        ("crazyhouse", crazyhouse()),
        ("loop", drop_loop()),
        ("atomic", atomic()),
        ("kingofthehill", kingofthehill()),
        ("racingkings", racingkings()),
        ("3check", three_check()),
        ("antichess", antichess()),
        ("extinction", extinction()),
        ("losers", losers()),
        ("horde", horde()),
        ("makruk", makruk()),
        ("shatranj", shatranj()),
        ("capablanca", capablanca()),
        ("minishogi", minishogi()),
        ("shogi", shogi()),
        ("xiangqi", xiangqi()),
        ("tictactoe", tictactoe()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::validate;

    #[test]
    fn test_all_builtins_validate() {
        for (name, config) in builtin_variants() {
            let variant = config.conclude();
            assert_eq!(validate(&variant), Ok(()), "{name}");
        }
    }

    #[test]
    fn test_region_helper() {
        let palace = region(3..=5, 0..=2);
        assert_eq!(palace.count(), 9);
        assert!(palace.contains(Square::new(File::E, Rank::R2)));
        assert!(!palace.contains(Square::new(File::C, Rank::R1)));
    }
}
