//! 表示用の要約

use serde::Serialize;

use crate::types::{Color, Piece};

use super::Variant;

/// 1 駒種分の要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSummary {
    pub kind: String,
    pub white: char,
    pub black: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub betza: Option<String>,
}

/// バリアントの要約（CLI の表示・JSON 出力用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub name: String,
    pub files: usize,
    pub ranks: usize,
    pub start_fen: String,
    pub pieces: Vec<PieceSummary>,
    pub royal: Option<String>,
    pub fast_attacks: bool,
    pub fast_attacks2: bool,
    pub nnue_dimensions: usize,
    pub nnue_king_squares: usize,
    pub nnue_pockets: bool,
    pub max_pieces: usize,
    pub endgame_eval: bool,
    pub shogi_style_promotions: bool,
}

impl VariantSummary {
    pub fn new(name: &str, variant: &Variant) -> Self {
        let config = variant.config();
        let derived = variant.derived();
        let pieces = variant
            .pieces()
            .iter()
            .map(|(kind, e)| PieceSummary {
                kind: kind.config_name(),
                white: Color::White.apply_case(e.symbol()),
                black: Color::Black.apply_case(e.symbol()),
                synonym: variant.pieces().synonym(Piece::new(Color::White, kind)),
                betza: e.betza().map(str::to_string),
            })
            .collect();
        Self {
            name: name.to_string(),
            files: config.board.max_file.index() + 1,
            ranks: config.board.max_rank.index() + 1,
            start_fen: config.board.start_fen.clone(),
            pieces,
            royal: derived.features.royal().map(|k| k.config_name()),
            fast_attacks: derived.fast_attacks,
            fast_attacks2: derived.fast_attacks2,
            nnue_dimensions: derived.features.dimensions(),
            nnue_king_squares: derived.features.anchors().len(),
            nnue_pockets: derived.features.uses_pockets(),
            max_pieces: derived.max_pieces,
            endgame_eval: derived.endgame_eval,
            shogi_style_promotions: derived.shogi_style_promotions,
        }
    }
}

impl std::fmt::Display for VariantSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "variant {}", self.name)?;
        writeln!(f, "  board        {}x{}", self.files, self.ranks)?;
        writeln!(f, "  start        {}", self.start_fen)?;
        let chars: String = self.pieces.iter().map(|p| p.white).collect();
        writeln!(f, "  pieces       {chars}")?;
        writeln!(f, "  royal        {}", self.royal.as_deref().unwrap_or("-"))?;
        writeln!(f, "  fast attacks {} / {}", self.fast_attacks, self.fast_attacks2)?;
        writeln!(
            f,
            "  nnue         {} features, {} king squares, pockets {}",
            self.nnue_dimensions, self.nnue_king_squares, self.nnue_pockets
        )?;
        writeln!(f, "  max pieces   {}", self.max_pieces)?;
        writeln!(f, "  endgame eval {}", self.endgame_eval)?;
        write!(f, "  shogi promo  {}", self.shogi_style_promotions)
    }
}
