//! バリアント定義の整合性検査
//!
//! 導出は不正な定義でも失敗しないので、設定を読み込むときはここで検査する。

use crate::types::{Color, Piece, PieceKind};

use super::Variant;
use super::error::ConfigError;
use super::fen::{BoardLayout, FenError, count_char};

/// 定義を検査し、最初に見つかった問題を返す
pub fn validate(variant: &Variant) -> Result<(), ConfigError> {
    let config = variant.config();
    let pieces = variant.pieces();
    let board = &config.board;

    if !board.fits() {
        return Err(ConfigError::BoardTooLarge {
            files: board.max_file.index() + 1,
            ranks: board.max_rank.index() + 1,
        });
    }
    if pieces.is_empty() {
        return Err(ConfigError::EmptyPieceSet);
    }
    if let Some(&(symbol, first, second)) = pieces.duplicate_symbols().first() {
        return Err(ConfigError::DuplicateSymbol {
            symbol,
            first,
            second,
        });
    }

    let layout = BoardLayout::parse(board.start_board())?;
    layout.check_geometry(board.max_file.index() + 1, board.max_rank.index() + 1)?;
    if let Some(c) = layout.piece_chars().find(|&c| !pieces.is_piece_char(c)) {
        return Err(FenError::UnknownPiece(c).into());
    }

    let check_active = |field: &str, kind: PieceKind| {
        if kind.is_none() || pieces.contains(kind) {
            Ok(())
        } else {
            Err(ConfigError::InactivePieceReference {
                field: field.to_string(),
                kind,
            })
        }
    };
    for kind in config.promotion.promotion_piece_types() {
        check_active("promotionPieceTypes", kind)?;
    }
    for kind in pieces.kinds() {
        check_active("promotedPieceType", config.promotion.promoted(kind))?;
    }
    check_active("dropNoDoubled", config.drops.drop_no_doubled)?;
    check_active("flagPiece", config.game_end.flag_piece)?;
    if config.castling.castling {
        check_active("castlingKingPiece", config.castling.king_piece)?;
        check_active("castlingRookPiece", config.castling.rook_piece)?;
        for (field, file) in [
            ("castlingKingsideFile", config.castling.kingside_file),
            ("castlingQueensideFile", config.castling.queenside_file),
            ("castlingKingFile", config.castling.king_file),
        ] {
            if file > board.max_file {
                return Err(ConfigError::InvalidCastling {
                    field: field.to_string(),
                    file: file.to_char(),
                });
            }
        }
    }

    if pieces.contains(PieceKind::KING) && !config.game_end.extinction_pseudo_royal {
        let start = board.start_board();
        for color in Color::ALL {
            let count = pieces
                .piece_to_char(Piece::new(color, PieceKind::KING))
                .map_or(0, |c| count_char(start, c));
            if count > 1 {
                return Err(ConfigError::NonUniqueRoyal { color, count });
            }
        }
    }

    let features = variant.features();
    if features.board_overflow() {
        return Err(ConfigError::BoardTooLarge {
            files: board.max_file.index() + 1,
            ranks: board.max_rank.index() + 1,
        });
    }
    if features.anchors().is_empty() || features.dimensions() == 0 {
        // 両側の領域がともに盤外のときに限られる
        let royal = features.royal().unwrap_or(PieceKind::KING);
        return Err(ConfigError::NoRoyalSquare {
            field: mobility_region_field(Color::White, royal),
        });
    }
    features.check_bijective()?;
    Ok(())
}

/// `mobilityRegionWhiteKing` のようなフィールド名
fn mobility_region_field(color: Color, kind: PieceKind) -> String {
    let name = kind.config_name();
    let mut chars = name.chars();
    let kind_name: String = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .into_iter()
        .chain(chars)
        .collect();
    let side = match color {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!("mobilityRegion{side}{kind_name}")
}
