//! INI 形式の読み込み元
//!
//! ```ini
//! # コメント
//! [mychess:chess]
//! archbishop = a
//! pieceDrops = true
//! ```
//!
//! セクション名 `name:template` の `:template` は省略できる。

use super::{ConfigSource, SourceError, VariantRecord};

/// INI テキスト
#[derive(Debug, Clone)]
pub struct IniSource<'a> {
    text: &'a str,
}

impl<'a> IniSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl ConfigSource for IniSource<'_> {
    type Records = Vec<VariantRecord>;

    fn into_records(self) -> Result<Self::Records, SourceError> {
        let mut records: Vec<VariantRecord> = Vec::new();
        for (i, raw) in self.text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(section) = line.strip_prefix('[') {
                let section = section.strip_suffix(']').ok_or_else(|| SourceError::Syntax {
                    line: i + 1,
                    message: "section header is not closed".to_string(),
                })?;
                let (name, template) = match section.split_once(':') {
                    Some((name, template)) => (name.trim(), Some(template.trim())),
                    None => (section.trim(), None),
                };
                if name.is_empty() {
                    return Err(SourceError::MissingName {
                        index: records.len(),
                    });
                }
                let mut record = VariantRecord::new(name);
                record.template = template.map(str::to_string);
                records.push(record);
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| SourceError::Syntax {
                line: i + 1,
                message: format!("expected 'key = value', found '{line}'"),
            })?;
            let record = records.last_mut().ok_or_else(|| SourceError::Syntax {
                line: i + 1,
                message: "field outside of a variant section".to_string(),
            })?;
            record
                .fields
                .insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(records)
    }
}
