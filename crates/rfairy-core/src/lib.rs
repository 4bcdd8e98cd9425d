//! # rfairy-core
//!
//! 多バリアント対応エンジンのルール記述層。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, PieceKind, Piece, File, Rank, Square, Value, Score）
//! - `bitboard`: 12筋×10段までの升集合
//! - `variant`: バリアント定義（駒種レジストリ・ルール・導出値・NNUE 特徴量空間・検査）
//! - `config`: 設定テキスト（TOML / INI）の読み込みとフィールド適用
//! - `registry`: 名前 → バリアント定義の表と組み込みバリアント
//!
//! ## 使用例
//!
//! ```
//! use rfairy_core::registry::VariantRegistry;
//!
//! let mut registry = VariantRegistry::with_builtins();
//! let report = registry
//!     .load_ini("[archchess:chess]\narchbishop = a\npromotionPieceTypes = aqrbn\n", true)
//!     .unwrap();
//! assert!(report.is_ok());
//! assert!(registry["archchess"].derived().fast_attacks);
//! ```

// 基本型
pub mod types;

// 盤面表現
pub mod bitboard;

// バリアント定義と導出
pub mod variant;

// 設定の読み込み
pub mod config;

// レジストリ
pub mod registry;

pub use registry::{LoadReport, VariantRegistry};
pub use variant::{Derived, Variant, VariantConfig};
