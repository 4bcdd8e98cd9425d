//! バリアント定義
//!
//! - `VariantConfig`: 組み立て中の定義（生フィールドと駒種レジストリ）
//! - `Variant`: `VariantConfig::conclude()` で導出値を確定させた不変の定義
//!
//! 導出値は `Variant` にしか存在しないため、「導出前に読む」「導出後に生フィールドを
//! 書き換える」といった不整合は型で防がれる。

mod derive;
mod error;
mod eval_params;
pub mod features;
pub mod fen;
mod pieces;
mod rules;
mod summary;
mod validate;

pub use derive::{Derived, derive};
pub use error::{ConfigError, VariantError};
pub use eval_params::{EvalParams, MOBILITY_SLOTS};
pub use features::{FeatureKey, FeatureLayout, FeatureSpace, FeatureSpaceError, Relation};
pub use pieces::{PieceEncoding, PieceSet};
pub use rules::{
    BoardRules, CastlingRules, ChasingRule, CountingRule, DropRules, EnclosingRule, GameEndRules,
    MaterialCounting, MoveRules, PromotionRules,
};
pub use summary::VariantSummary;
pub use validate::validate;

use crate::types::PieceKind;

/// 組み立て中のバリアント定義
///
/// 既定値は標準チェス（歩・騎士・僧正・城・女王・玉）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    pub board: BoardRules,
    pieces: PieceSet,
    pub promotion: PromotionRules,
    pub drops: DropRules,
    pub castling: CastlingRules,
    pub moves: MoveRules,
    pub game_end: GameEndRules,
    pub eval: EvalParams,
    /// 評価関数を共有する別バリアント名
    pub nnue_alias: String,
}

impl Default for VariantConfig {
    fn default() -> Self {
        let mut pieces = PieceSet::new();
        for (kind, c) in [
            (PieceKind::PAWN, 'p'),
            (PieceKind::KNIGHT, 'n'),
            (PieceKind::BISHOP, 'b'),
            (PieceKind::ROOK, 'r'),
            (PieceKind::QUEEN, 'q'),
            (PieceKind::KING, 'k'),
        ] {
            pieces.add(kind, c, "", None);
        }
        Self {
            board: BoardRules::default(),
            pieces,
            promotion: PromotionRules::default(),
            drops: DropRules::default(),
            castling: CastlingRules::default(),
            moves: MoveRules::default(),
            game_end: GameEndRules::default(),
            eval: EvalParams::default(),
            nnue_alias: String::new(),
        }
    }
}

impl VariantConfig {
    /// 有効な駒種と記号表現
    #[inline]
    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    /// 駒種を追加する（既にあれば記号表現を上書き）
    pub fn add_piece(&mut self, kind: PieceKind, c: char) -> &mut Self {
        self.pieces.add(kind, c, "", None);
        self
    }

    /// 別名文字つきで駒種を追加する
    pub fn add_piece_with_synonym(&mut self, kind: PieceKind, c: char, synonym: char) -> &mut Self {
        self.pieces.add(kind, c, "", Some(synonym));
        self
    }

    /// ユーザー定義駒を Betza 記法つきで追加する
    pub fn add_custom_piece(&mut self, kind: PieceKind, c: char, betza: &str) -> &mut Self {
        self.pieces.add(kind, c, betza, None);
        self
    }

    /// 一般形
    pub fn add_piece_full(
        &mut self,
        kind: PieceKind,
        c: char,
        betza: &str,
        synonym: Option<char>,
    ) -> &mut Self {
        self.pieces.add(kind, c, betza, synonym);
        self
    }

    /// 駒種を取り除く（無効な駒種なら何もしない）
    pub fn remove_piece(&mut self, kind: PieceKind) -> &mut Self {
        self.pieces.remove(kind);
        self
    }

    /// 全駒種を取り除く
    pub fn reset_pieces(&mut self) -> &mut Self {
        self.pieces.reset();
        self
    }

    /// テンプレートから複製した直後に必ず呼ぶ初期化
    ///
    /// 毎回定義し直す必要のある値（評価関数の別名）を消す。
    pub fn init(&mut self) -> &mut Self {
        self.nnue_alias.clear();
        self
    }

    /// 導出値を計算して不変の定義にする
    pub fn conclude(self) -> Variant {
        let derived = derive(&self);
        Variant {
            config: self,
            derived,
        }
    }
}

/// 導出値を確定させたバリアント定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    config: VariantConfig,
    derived: Derived,
}

impl Variant {
    /// 生フィールド
    #[inline]
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// 導出値
    #[inline]
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    #[inline]
    pub fn pieces(&self) -> &PieceSet {
        &self.config.pieces
    }

    #[inline]
    pub fn features(&self) -> &FeatureSpace {
        &self.derived.features
    }

    /// 生フィールドの複製（テンプレートとして使う）
    pub fn to_config(&self) -> VariantConfig {
        self.config.clone()
    }

    /// 生フィールドを取り出す
    pub fn into_config(self) -> VariantConfig {
        self.config
    }
}
