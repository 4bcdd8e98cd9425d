//! TOML 形式の読み込み元
//!
//! ```toml
//! [[variant]]
//! name = "mychess"
//! template = "chess"
//! archbishop = "a"
//! promotionPieceTypes = "aqrbn"
//! pieceDrops = true
//! ```
//!
//! `name` と `template` 以外のキーはそのままフィールドになる。整数・真偽値は文字列化し、
//! 配列は要素を空白で連結する。

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ConfigSource, SourceError, VariantRecord};

#[derive(Debug, Deserialize)]
struct TomlFile {
    #[serde(default)]
    variant: Vec<TomlVariant>,
}

#[derive(Debug, Deserialize)]
struct TomlVariant {
    name: Option<String>,
    template: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, toml::Value>,
}

/// TOML テキスト
#[derive(Debug, Clone)]
pub struct TomlSource<'a> {
    text: &'a str,
}

impl<'a> TomlSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

fn field_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items.iter().map(field_text).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

impl ConfigSource for TomlSource<'_> {
    type Records = Vec<VariantRecord>;

    fn into_records(self) -> Result<Self::Records, SourceError> {
        let file: TomlFile = toml::from_str(self.text)?;
        file.variant
            .into_iter()
            .enumerate()
            .map(|(index, v)| {
                let name = v.name.ok_or(SourceError::MissingName { index })?;
                Ok(VariantRecord {
                    name,
                    template: v.template,
                    fields: v.fields.iter().map(|(k, v)| (k.clone(), field_text(v))).collect(),
                })
            })
            .collect()
    }
}
