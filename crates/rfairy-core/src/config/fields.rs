//! 設定フィールドの適用
//!
//! 駒定義（`pawn = p`, `horse = n|h`, `customPiece1 = a:mW`, `king = -`）を先に適用し、
//! 残りのフィールドは名前ごとに値を解析して書き込む。駒文字を使うフィールドは
//! 駒定義の後でないと解決できないため、この順序は固定。

use std::collections::{BTreeMap, BTreeSet};

use crate::bitboard::Bitboard;
use crate::types::{Color, File, Phase, PieceKind, Rank, Square, Value};
use crate::variant::{
    ChasingRule, ConfigError, CountingRule, EnclosingRule, MaterialCounting, PieceSet,
    VariantConfig,
};

type FieldResult<T> = Result<T, ConfigError>;

/// フィールド群を適用する
///
/// `strict` が偽なら、未知のフィールドや解析できない値は警告を出して読み飛ばす。
pub fn apply_fields(
    config: &mut VariantConfig,
    fields: &BTreeMap<String, String>,
    strict: bool,
) -> FieldResult<()> {
    let (piece_fields, rule_fields): (Vec<_>, Vec<_>) = fields
        .iter()
        .partition(|(name, _)| PieceKind::from_config_name(name).is_some());

    for (name, value) in piece_fields.into_iter().chain(rule_fields) {
        let result = match PieceKind::from_config_name(name) {
            Some(kind) => apply_piece(config, kind, name, value),
            None => apply_field(config, name, value),
        };
        match result {
            Ok(()) => {}
            Err(e) if !strict => log::warn!("skipping field '{name}': {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// 駒定義 `c`, `c|s`, `c:betza`, `c|s:betza`, `-`（取り除く）
///
/// `s` は別名文字。
fn apply_piece(config: &mut VariantConfig, kind: PieceKind, name: &str, value: &str) -> FieldResult<()> {
    let value = value.trim();
    if value == "-" {
        config.remove_piece(kind);
        return Ok(());
    }
    let (symbols, betza) = value.split_once(':').unwrap_or((value, ""));
    let letter = |text: &str| {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
            _ => Err(ConfigError::invalid(name, value, "expected a piece letter")),
        }
    };
    let (symbol, synonym) = match symbols.split_once('|') {
        Some((symbol, synonym)) => (letter(symbol)?, Some(letter(synonym)?)),
        None => (letter(symbols)?, None),
    };
    config.add_piece_full(kind, symbol, betza, synonym);
    Ok(())
}

fn parse_bool(name: &str, value: &str) -> FieldResult<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::invalid(name, value, "expected true or false")),
    }
}

fn parse_int<T: std::str::FromStr>(name: &str, value: &str) -> FieldResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(name, value, "expected an integer"))
}

/// 1 始まりの段番号
fn parse_rank(name: &str, value: &str) -> FieldResult<Rank> {
    match parse_int::<u8>(name, value)? {
        0 => Err(ConfigError::invalid(name, value, "ranks start at 1")),
        n => Ok(Rank::new(n - 1)),
    }
}

/// 筋の文字（`a` 始まり）または 1 始まりの番号
fn parse_file(name: &str, value: &str) -> FieldResult<File> {
    let v = value.trim();
    let mut chars = v.chars();
    if let (Some(c @ 'a'..='z'), None) = (chars.next(), chars.next()) {
        return Ok(File::new(c as u8 - b'a'));
    }
    match parse_int::<u8>(name, value)? {
        0 => Err(ConfigError::invalid(name, value, "files start at 1")),
        n => Ok(File::new(n - 1)),
    }
}

fn parse_value(name: &str, value: &str) -> FieldResult<Value> {
    Value::parse(value).ok_or_else(|| ConfigError::invalid(name, value, "expected win, loss, draw, none or an integer"))
}

/// 駒文字 1 つ（`-` は駒種なし、`*` は全駒種）
fn parse_kind(pieces: &PieceSet, name: &str, value: &str) -> FieldResult<PieceKind> {
    let v = value.trim();
    match v {
        "-" | "" => return Ok(PieceKind::NONE),
        "*" => return Ok(PieceKind::ALL_PIECES),
        _ => {}
    }
    let mut chars = v.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => pieces
            .piece_of_char(c)
            .map(|p| p.kind())
            .ok_or_else(|| ConfigError::invalid(name, value, format!("'{c}' is not a piece of this variant"))),
        _ => Err(ConfigError::invalid(name, value, "expected a single piece letter")),
    }
}

/// 駒文字の列（`qrbn`、`-` は空）
fn parse_kind_list(pieces: &PieceSet, name: &str, value: &str) -> FieldResult<BTreeSet<PieceKind>> {
    let mut kinds = BTreeSet::new();
    for c in value.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '-' => {}
            '*' => {
                kinds.insert(PieceKind::ALL_PIECES);
            }
            c => {
                let piece = pieces.piece_of_char(c).ok_or_else(|| {
                    ConfigError::invalid(name, value, format!("'{c}' is not a piece of this variant"))
                })?;
                kinds.insert(piece.kind());
            }
        }
    }
    Ok(kinds)
}

/// 駒種名（`wazir` など）または駒文字
fn parse_kind_name(pieces: &PieceSet, name: &str, value: &str) -> FieldResult<PieceKind> {
    PieceKind::from_config_name(value.trim()).map_or_else(|| parse_kind(pieces, name, value), Ok)
}

/// `c:x` の組の列（空白またはカンマ区切り）
fn parse_pairs<'a>(name: &str, value: &'a str) -> FieldResult<Vec<(char, &'a str)>> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|token| {
            let (head, tail) = token
                .split_once(':')
                .ok_or_else(|| ConfigError::invalid(name, value, format!("'{token}' is not a char:value pair")))?;
            let mut chars = head.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok((c, tail)),
                _ => Err(ConfigError::invalid(name, value, format!("'{head}' is not a piece letter"))),
            }
        })
        .collect()
}

/// 升の列（`a1 b2`、`*3` は 3 段目全体、`c*` は c 筋全体、`*` は全升、`-` は空）
fn parse_squares(name: &str, value: &str) -> FieldResult<Bitboard> {
    let mut bb = Bitboard::EMPTY;
    for token in value.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        let bad = || ConfigError::invalid(name, value, format!("'{token}' is not a square"));
        match token {
            "-" => {}
            "*" => bb |= Bitboard::ALL,
            t if t.starts_with('*') => {
                let rank = t[1..].parse::<u8>().ok().filter(|r| (1..=Rank::NUM as u8).contains(r)).ok_or_else(bad)?;
                bb |= Bitboard::rank(Rank::new(rank - 1));
            }
            t if t.ends_with('*') => {
                let mut chars = t.chars();
                let file = chars.next().and_then(File::from_char).ok_or_else(bad)?;
                if chars.as_str() != "*" {
                    return Err(bad());
                }
                bb |= Bitboard::file(file);
            }
            t => bb |= Bitboard::from_square(Square::from_name(t).ok_or_else(bad)?),
        }
    }
    Ok(bb)
}

fn parse_enclosing(name: &str, value: &str) -> FieldResult<EnclosingRule> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "false" => Ok(EnclosingRule::None),
        "reversi" => Ok(EnclosingRule::Reversi),
        "ataxx" => Ok(EnclosingRule::Ataxx),
        _ => Err(ConfigError::invalid(name, value, "expected none, reversi or ataxx")),
    }
}

fn parse_chasing(name: &str, value: &str) -> FieldResult<ChasingRule> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "false" => Ok(ChasingRule::None),
        "axf" => Ok(ChasingRule::Axf),
        _ => Err(ConfigError::invalid(name, value, "expected none or axf")),
    }
}

fn parse_material_counting(name: &str, value: &str) -> FieldResult<MaterialCounting> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "false" => Ok(MaterialCounting::None),
        "janggi" => Ok(MaterialCounting::Janggi),
        "unweighted" => Ok(MaterialCounting::Unweighted),
        "whitedrawodds" => Ok(MaterialCounting::WhiteDrawOdds),
        "blackdrawodds" => Ok(MaterialCounting::BlackDrawOdds),
        _ => Err(ConfigError::invalid(name, value, "unknown material counting rule")),
    }
}

fn parse_counting(name: &str, value: &str) -> FieldResult<CountingRule> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "false" => Ok(CountingRule::None),
        "makruk" => Ok(CountingRule::Makruk),
        "cambodian" => Ok(CountingRule::Cambodian),
        "asean" => Ok(CountingRule::Asean),
        _ => Err(ConfigError::invalid(name, value, "unknown counting rule")),
    }
}

/// `mobilityRegion{White,Black}{Kind}`
fn mobility_region_target(name: &str) -> Option<(Color, PieceKind)> {
    let rest = name.strip_prefix("mobilityRegion")?;
    let (color, kind) = if let Some(k) = rest.strip_prefix("White") {
        (Color::White, k)
    } else {
        (Color::Black, rest.strip_prefix("Black")?)
    };
    Some((color, PieceKind::from_config_name(kind)?))
}

/// 駒定義以外のフィールドを 1 つ適用する
fn apply_field(config: &mut VariantConfig, name: &str, value: &str) -> FieldResult<()> {
    if let Some((color, kind)) = mobility_region_target(name) {
        config.moves.mobility_region[color.index()][kind.index()] = parse_squares(name, value)?;
        return Ok(());
    }

    let n = name;
    let v = value;
    match name {
        // 盤面
        "maxRank" => config.board.max_rank = parse_rank(n, v)?,
        "maxFile" => config.board.max_file = parse_file(n, v)?,
        "startFen" => config.board.start_fen = v.trim().to_string(),
        "pocketSize" => config.board.pocket_size = parse_int(n, v)?,
        "chess960" => config.board.chess960 = parse_bool(n, v)?,
        "twoBoards" => config.board.two_boards = parse_bool(n, v)?,
        "variantTemplate" => config.board.variant_template = v.trim().to_string(),
        "pieceToCharTable" => config.board.piece_to_char_table = v.trim().to_string(),
        "nnueAlias" => config.nnue_alias = v.trim().to_string(),

        // 昇格
        "promotionRank" => config.promotion.promotion_rank = parse_rank(n, v)?,
        "promotionPieceTypes" => {
            config.promotion.promotion_piece_types = parse_kind_list(config.pieces(), n, v)?
        }
        "sittuyinPromotion" => config.promotion.sittuyin_promotion = parse_bool(n, v)?,
        "promotionLimit" => {
            let mut limits = [0; PieceKind::NUM];
            for (c, limit) in parse_pairs(n, v)? {
                let kind = parse_kind(config.pieces(), n, &c.to_string())?;
                limits[kind.index()] = parse_int(n, limit)?;
            }
            config.promotion.promotion_limit = limits;
        }
        "promotedPieceType" => {
            let mut promoted = [PieceKind::NONE; PieceKind::NUM];
            for (from, to) in parse_pairs(n, v)? {
                let from = parse_kind(config.pieces(), n, &from.to_string())?;
                promoted[from.index()] = parse_kind(config.pieces(), n, to)?;
            }
            config.promotion.promoted_piece_type = promoted;
        }
        "piecePromotionOnCapture" => config.promotion.piece_promotion_on_capture = parse_bool(n, v)?,
        "mandatoryPawnPromotion" => config.promotion.mandatory_pawn_promotion = parse_bool(n, v)?,
        "mandatoryPiecePromotion" => config.promotion.mandatory_piece_promotion = parse_bool(n, v)?,
        "pieceDemotion" => config.promotion.piece_demotion = parse_bool(n, v)?,
        "soldierPromotionRank" => config.promotion.soldier_promotion_rank = parse_rank(n, v)?,

        // 持ち駒
        "pieceDrops" => config.drops.piece_drops = parse_bool(n, v)?,
        "dropLoop" => config.drops.drop_loop = parse_bool(n, v)?,
        "capturesToHand" => config.drops.captures_to_hand = parse_bool(n, v)?,
        "firstRankPawnDrops" => config.drops.first_rank_pawn_drops = parse_bool(n, v)?,
        "promotionZonePawnDrops" => config.drops.promotion_zone_pawn_drops = parse_bool(n, v)?,
        "dropOnTop" => config.drops.drop_on_top = parse_bool(n, v)?,
        "enclosingDrop" => config.drops.enclosing_drop = parse_enclosing(n, v)?,
        "enclosingDropStart" => config.drops.enclosing_drop_start = parse_squares(n, v)?,
        "whiteDropRegion" => config.drops.drop_region[Color::White.index()] = parse_squares(n, v)?,
        "blackDropRegion" => config.drops.drop_region[Color::Black.index()] = parse_squares(n, v)?,
        "sittuyinRookDrop" => config.drops.sittuyin_rook_drop = parse_bool(n, v)?,
        "dropOppositeColoredBishop" => config.drops.drop_opposite_colored_bishop = parse_bool(n, v)?,
        "dropPromoted" => config.drops.drop_promoted = parse_bool(n, v)?,
        "dropNoDoubled" => config.drops.drop_no_doubled = parse_kind(config.pieces(), n, v)?,
        "dropNoDoubledCount" => config.drops.drop_no_doubled_count = parse_int(n, v)?,
        "dropChecks" => config.drops.drop_checks = parse_bool(n, v)?,
        "mustDrop" => config.drops.must_drop = parse_bool(n, v)?,
        "mustDropType" => config.drops.must_drop_type = parse_kind(config.pieces(), n, v)?,
        "freeDrops" => config.drops.free_drops = parse_bool(n, v)?,

        // キャスリング
        "castling" => config.castling.castling = parse_bool(n, v)?,
        "castlingDroppedPiece" => config.castling.castling_dropped_piece = parse_bool(n, v)?,
        "castlingKingsideFile" => config.castling.kingside_file = parse_file(n, v)?,
        "castlingQueensideFile" => config.castling.queenside_file = parse_file(n, v)?,
        "castlingRank" => config.castling.rank = parse_rank(n, v)?,
        "castlingKingFile" => config.castling.king_file = parse_file(n, v)?,
        "castlingKingPiece" => config.castling.king_piece = parse_kind(config.pieces(), n, v)?,
        "castlingRookPiece" => config.castling.rook_piece = parse_kind(config.pieces(), n, v)?,

        // 着手
        "doubleStep" => config.moves.double_step = parse_bool(n, v)?,
        "doubleStepRank" => config.moves.double_step_rank = parse_rank(n, v)?,
        "doubleStepRankMin" => config.moves.double_step_rank_min = parse_rank(n, v)?,
        "enPassantRegion" => config.moves.en_passant_region = parse_squares(n, v)?,
        "kingType" => config.moves.king_type = parse_kind_name(config.pieces(), n, v)?,
        "checking" => config.moves.checking = parse_bool(n, v)?,
        "mustCapture" => config.moves.must_capture = parse_bool(n, v)?,
        "immobilityIllegal" => config.moves.immobility_illegal = parse_bool(n, v)?,
        "gating" => config.moves.gating = parse_bool(n, v)?,
        "arrowGating" => config.moves.arrow_gating = parse_bool(n, v)?,
        "seirawanGating" => config.moves.seirawan_gating = parse_bool(n, v)?,
        "cambodianMoves" => config.moves.cambodian_moves = parse_bool(n, v)?,
        "diagonalLines" => config.moves.diagonal_lines = parse_squares(n, v)?,
        "pass" => config.moves.pass = parse_bool(n, v)?,
        "passOnStalemate" => config.moves.pass_on_stalemate = parse_bool(n, v)?,
        "flyingGeneral" => config.moves.flying_general = parse_bool(n, v)?,
        "blastOnCapture" => config.moves.blast_on_capture = parse_bool(n, v)?,
        "flipEnclosedPieces" => config.moves.flip_enclosed_pieces = parse_enclosing(n, v)?,

        // 終局
        "nMoveRule" => config.game_end.n_move_rule = parse_int(n, v)?,
        "nFoldRule" => config.game_end.n_fold_rule = parse_int(n, v)?,
        "nFoldValue" => config.game_end.n_fold_value = parse_value(n, v)?,
        "nFoldValueAbsolute" => config.game_end.n_fold_value_absolute = parse_bool(n, v)?,
        "perpetualCheckIllegal" => config.game_end.perpetual_check_illegal = parse_bool(n, v)?,
        "moveRepetitionIllegal" => config.game_end.move_repetition_illegal = parse_bool(n, v)?,
        "chasingRule" => config.game_end.chasing_rule = parse_chasing(n, v)?,
        "stalemateValue" => config.game_end.stalemate_value = parse_value(n, v)?,
        "stalematePieceCount" => config.game_end.stalemate_piece_count = parse_bool(n, v)?,
        "checkmateValue" => config.game_end.checkmate_value = parse_value(n, v)?,
        "shogiPawnDropMateIllegal" => config.game_end.shogi_pawn_drop_mate_illegal = parse_bool(n, v)?,
        "shatarMateRule" => config.game_end.shatar_mate_rule = parse_bool(n, v)?,
        "bikjangRule" => config.game_end.bikjang_rule = parse_bool(n, v)?,
        "extinctionValue" => config.game_end.extinction_value = parse_value(n, v)?,
        "extinctionClaim" => config.game_end.extinction_claim = parse_bool(n, v)?,
        "extinctionPseudoRoyal" => config.game_end.extinction_pseudo_royal = parse_bool(n, v)?,
        "extinctionPieceTypes" => {
            config.game_end.extinction_piece_types = parse_kind_list(config.pieces(), n, v)?
        }
        "extinctionPieceCount" => config.game_end.extinction_piece_count = parse_int(n, v)?,
        "extinctionOpponentPieceCount" => {
            config.game_end.extinction_opponent_piece_count = parse_int(n, v)?
        }
        "flagPiece" => config.game_end.flag_piece = parse_kind(config.pieces(), n, v)?,
        "whiteFlag" => config.game_end.flag_region[Color::White.index()] = parse_squares(n, v)?,
        "blackFlag" => config.game_end.flag_region[Color::Black.index()] = parse_squares(n, v)?,
        "flagMove" => config.game_end.flag_move = parse_bool(n, v)?,
        "checkCounting" => config.game_end.check_counting = parse_bool(n, v)?,
        "connectN" => config.game_end.connect_n = parse_int(n, v)?,
        "materialCounting" => config.game_end.material_counting = parse_material_counting(n, v)?,
        "countingRule" => config.game_end.counting_rule = parse_counting(n, v)?,
        "makpongRule" => config.game_end.makpong_rule = parse_bool(n, v)?,

        // 評価
        "pieceValueMg" | "pieceValueEg" => {
            let phase = if name == "pieceValueMg" { Phase::Mg } else { Phase::Eg };
            for (c, amount) in parse_pairs(n, v)? {
                let kind = parse_kind(config.pieces(), n, &c.to_string())?;
                config.eval.piece_value[phase.index()][kind.index()] = parse_int(n, amount)?;
            }
        }

        _ => return Err(ConfigError::UnknownField(name.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pieces_are_applied_before_rules() {
        let mut config = VariantConfig::default();
        // `archbishop` はアルファベット順で `promotionPieceTypes` より前だが、
        // 駒定義を先に適用するので `a` が解決できる
        let f = fields(&[
            ("promotionPieceTypes", "aq"),
            ("archbishop", "a"),
            ("king", "-"),
            ("commoner", "k"),
        ]);
        apply_fields(&mut config, &f, true).unwrap();
        assert!(config.pieces().contains(PieceKind::ARCHBISHOP));
        assert!(!config.pieces().contains(PieceKind::KING));
        assert_eq!(
            config.promotion.promotion_piece_types().collect::<Vec<_>>(),
            vec![PieceKind::ARCHBISHOP, PieceKind::QUEEN]
        );
    }

    #[test]
    fn test_custom_piece_betza() {
        let mut config = VariantConfig::default();
        let f = fields(&[("customPiece2", "a:mWcF")]);
        apply_fields(&mut config, &f, true).unwrap();
        let kind = PieceKind::custom(2).unwrap();
        assert_eq!(config.pieces().custom_betza(kind), Some("mWcF"));
        assert_eq!(
            config.pieces().piece_to_char(Piece::new(Color::White, kind)),
            Some('A')
        );
    }

    #[test]
    fn test_piece_synonym_field() {
        let mut config = VariantConfig::default();
        let f = fields(&[("horse", "x|h"), ("customPiece1", "a|y:mW")]);
        apply_fields(&mut config, &f, true).unwrap();
        let horse = Piece::new(Color::Black, PieceKind::HORSE);
        assert_eq!(config.pieces().synonym(horse), Some('h'));
        assert_eq!(
            config.pieces().piece_of_char('H'),
            Some(Piece::new(Color::White, PieceKind::HORSE))
        );
        let custom = PieceKind::custom(1).unwrap();
        assert_eq!(config.pieces().custom_betza(custom), Some("mW"));
        assert_eq!(
            config.pieces().piece_of_char('y'),
            Some(Piece::new(Color::Black, custom))
        );

        for bad in ["x|", "|h", "x|hh", "x|1"] {
            let f = fields(&[("horse", bad)]);
            let err = apply_fields(&mut VariantConfig::default(), &f, true).unwrap_err();
            assert_eq!(err.field(), "horse", "{bad}");
        }
    }

    #[test]
    fn test_geometry_and_values() {
        let mut config = VariantConfig::default();
        let f = fields(&[
            ("maxRank", "10"),
            ("maxFile", "i"),
            ("checkmateValue", "win"),
            ("extinctionValue", "loss"),
            ("nMoveRule", "0"),
            ("castlingKingFile", "5"),
        ]);
        apply_fields(&mut config, &f, true).unwrap();
        assert_eq!(config.board.max_rank, Rank::R10);
        assert_eq!(config.board.max_file, File::I);
        assert_eq!(config.game_end.checkmate_value, Value::MATE);
        assert_eq!(config.game_end.extinction_value, -Value::MATE);
        assert_eq!(config.game_end.n_move_rule, 0);
        assert_eq!(config.castling.king_file, File::E);
    }

    #[test]
    fn test_square_lists() {
        let bb = parse_squares("x", "a1 *2 c*").unwrap();
        assert!(bb.contains(Square::A1));
        assert_eq!(bb.count(), 1 + 12 + 10 - 1);
        assert_eq!(parse_squares("x", "-"), Ok(Bitboard::EMPTY));
        assert!(parse_squares("x", "z9").is_err());
        assert!(parse_squares("x", "*11").is_err());
    }

    #[test]
    fn test_mobility_region_field() {
        let mut config = VariantConfig::default();
        let f = fields(&[("mobilityRegionBlackKing", "d8 e8 f8")]);
        apply_fields(&mut config, &f, true).unwrap();
        assert_eq!(config.moves.mobility_region(Color::Black, PieceKind::KING).count(), 3);
        assert!(config.moves.mobility_region(Color::White, PieceKind::KING).is_empty());
    }

    #[test]
    fn test_promotion_pairs() {
        let mut config = VariantConfig::default();
        let f = fields(&[
            ("gold", "g"),
            ("promotedPieceType", "p:g n:g"),
            ("promotionLimit", "q:1, r:2"),
        ]);
        apply_fields(&mut config, &f, true).unwrap();
        assert_eq!(config.promotion.promoted(PieceKind::PAWN), PieceKind::GOLD);
        assert_eq!(config.promotion.promoted(PieceKind::BISHOP), PieceKind::NONE);
        assert_eq!(config.promotion.promotion_limit[PieceKind::ROOK.index()], 2);
    }

    #[test]
    fn test_king_type_by_name() {
        let mut config = VariantConfig::default();
        apply_fields(&mut config, &fields(&[("kingType", "wazir")]), true).unwrap();
        assert_eq!(config.moves.king_type, PieceKind::WAZIR);
    }

    #[test]
    fn test_strict_and_lenient() {
        let f = fields(&[("noSuchField", "1"), ("maxRank", "abc"), ("pieceDrops", "true")]);
        let mut strict = VariantConfig::default();
        let err = apply_fields(&mut strict, &f, true).unwrap_err();
        assert_eq!(err.field(), "maxRank");

        let mut lenient = VariantConfig::default();
        apply_fields(&mut lenient, &f, false).unwrap();
        assert!(lenient.drops.piece_drops);
        assert_eq!(lenient.board.max_rank, Rank::R8);
    }

    #[test]
    fn test_unknown_piece_char() {
        let mut config = VariantConfig::default();
        let err = apply_fields(&mut config, &fields(&[("flagPiece", "z")]), true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "flagPiece"));
    }
}
