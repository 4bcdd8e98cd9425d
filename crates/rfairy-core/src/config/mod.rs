//! バリアント定義の読み込み元
//!
//! 読み込み元は一度だけ消費され、バリアントごとのレコード（名前・テンプレート・生フィールド）を
//! 順に返す。フィールドの解釈は `fields` が受け持つ。

mod fields;
mod ini_source;
mod toml_source;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use fields::apply_fields;
pub use ini_source::IniSource;
pub use toml_source::TomlSource;

/// 1 バリアント分の定義
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantRecord {
    pub name: String,
    /// 複製元のバリアント名（省略時は標準チェス）
    pub template: Option<String>,
    /// フィールド名 → 値の文字列
    pub fields: BTreeMap<String, String>,
}

impl VariantRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// 読み込み元そのものの失敗（その読み込み全体を中止する）
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("variant #{index} has no name")]
    MissingName { index: usize },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unsupported configuration file {} (expected .toml or .ini)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// バリアント定義の読み込み元
pub trait ConfigSource {
    type Records: IntoIterator<Item = VariantRecord>;

    /// レコード列に変換する
    fn into_records(self) -> Result<Self::Records, SourceError>;
}

impl ConfigSource for Vec<VariantRecord> {
    type Records = Vec<VariantRecord>;

    fn into_records(self) -> Result<Self::Records, SourceError> {
        Ok(self)
    }
}
