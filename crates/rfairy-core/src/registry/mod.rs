//! バリアントレジストリ
//!
//! 名前 → 確定済みバリアント定義の表。登録順を保持する。
//! 読み込み・消去は `&mut self` なので、読み手（`&VariantRegistry`）と同時には起こらない。

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use crate::config::{ConfigSource, IniSource, SourceError, TomlSource, VariantRecord, apply_fields};
use crate::variant::{ConfigError, Variant, VariantConfig, VariantError, validate};

/// 読み込み結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// 登録できたバリアント名（読み込み順）
    pub loaded: Vec<String>,
    /// 登録できなかったバリアント
    pub failed: Vec<VariantError>,
}

impl LoadReport {
    /// 全て登録できたか
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// バリアントレジストリ
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    variants: Vec<(String, Variant)>,
    index: HashMap<String, usize>,
}

impl VariantRegistry {
    /// 空のレジストリ
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み込みバリアントを登録済みのレジストリ
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// 組み込みバリアントを登録する
    pub fn initialize(&mut self) {
        for (name, config) in builtin::builtin_variants() {
            self.insert(name, config.conclude());
        }
        log::debug!("registered {} built-in variants", self.len());
    }

    /// 登録する（同名があれば位置を保ったまま置き換える）
    pub fn insert(&mut self, name: impl Into<String>, variant: Variant) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => {
                log::info!("replacing variant '{name}'");
                self.variants[i].1 = variant;
            }
            None => {
                self.index.insert(name.clone(), self.variants.len());
                self.variants.push((name, variant));
            }
        }
    }

    /// 全て消去する
    pub fn clear(&mut self) {
        self.variants.clear();
        self.index.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.index.get(name).map(|&i| &self.variants[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// 登録名（登録順）
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> + '_ {
        self.variants.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// 1 レコードからバリアントを組み立てる
    fn build(&self, record: &VariantRecord, strict: bool) -> Result<Variant, ConfigError> {
        let mut config = match &record.template {
            Some(template) => self
                .get(template)
                .ok_or_else(|| ConfigError::UnknownTemplate(template.clone()))?
                .to_config(),
            None => VariantConfig::default(),
        };
        config.init();
        apply_fields(&mut config, &record.fields, strict)?;
        let variant = config.conclude();
        if strict {
            validate(&variant)?;
        }
        Ok(variant)
    }

    /// 読み込み元のバリアントを順に登録する
    ///
    /// `validate` が真なら未知のフィールドや不整合な定義を失敗として報告する。
    /// 失敗したバリアントは登録せず、残りの読み込みは続ける。
    /// テンプレートには同じ読み込みの前方で定義したバリアントも使える。
    pub fn load<S: ConfigSource>(&mut self, source: S, validate: bool) -> Result<LoadReport, SourceError> {
        let mut report = LoadReport::default();
        for record in source.into_records()? {
            match self.build(&record, validate) {
                Ok(variant) => {
                    self.insert(record.name.clone(), variant);
                    report.loaded.push(record.name);
                }
                Err(source) => {
                    let err = VariantError::new(record.name, source);
                    log::warn!("{err}");
                    report.failed.push(err);
                }
            }
        }
        log::info!(
            "loaded {} variants ({} failed)",
            report.loaded.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// TOML テキストから読み込む
    pub fn load_toml(&mut self, text: &str, validate: bool) -> Result<LoadReport, SourceError> {
        self.load(TomlSource::new(text), validate)
    }

    /// INI テキストから読み込む
    pub fn load_ini(&mut self, text: &str, validate: bool) -> Result<LoadReport, SourceError> {
        self.load(IniSource::new(text), validate)
    }

    /// ファイルから読み込む（拡張子 `.toml` / `.ini` で形式を選ぶ）
    pub fn load_path(&mut self, path: impl AsRef<Path>, validate: bool) -> Result<LoadReport, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => self.load_toml(&text, validate),
            Some("ini") | Some("txt") => self.load_ini(&text, validate),
            _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl std::ops::Index<&str> for VariantRegistry {
    type Output = Variant;

    /// 未登録の名前ならパニックする
    fn index(&self, name: &str) -> &Variant {
        match self.get(name) {
            Some(v) => v,
            None => panic!("variant '{name}' is not registered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_builtins_in_order() {
        let registry = VariantRegistry::with_builtins();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.first(), Some(&"fairy"));
        assert_eq!(names.last(), Some(&"tictactoe"));
        assert_eq!(names.len(), 21);
        assert!(registry.contains("xiangqi"));
        assert_eq!(registry["chess"].derived().max_pieces, 32);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut registry = VariantRegistry::with_builtins();
        let mut config = registry["chess"].to_config();
        config.add_piece(PieceKind::AMAZON, 'z');
        registry.insert("nocastle", config.conclude());
        assert_eq!(registry.names().nth(2), Some("nocastle"));
        assert!(registry["nocastle"].pieces().contains(PieceKind::AMAZON));
        assert_eq!(registry.len(), 21);
    }

    #[test]
    fn test_clear() {
        let mut registry = VariantRegistry::with_builtins();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("chess").is_none());
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn test_load_records_with_failures() {
        let mut registry = VariantRegistry::with_builtins();
        let records = vec![
            VariantRecord::new("archchess")
                .with_template("chess")
                .with_field("archbishop", "a")
                .with_field("promotionPieceTypes", "aqrbn"),
            VariantRecord::new("broken").with_template("nope"),
            VariantRecord::new("badfen").with_field("startFen", "8/8/8 w - - 0 1"),
            VariantRecord::new("child").with_template("archchess"),
        ];
        let report = registry.load(records, true).unwrap();
        assert_eq!(report.loaded, vec!["archchess".to_string(), "child".to_string()]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].variant, "broken");
        assert_eq!(report.failed[0].source, ConfigError::UnknownTemplate("nope".into()));
        assert_eq!(report.failed[1].variant, "badfen");
        assert_eq!(report.failed[1].source.field(), "startFen");
        assert!(!registry.contains("broken"));
        assert!(registry["child"].pieces().contains(PieceKind::ARCHBISHOP));
    }

    #[test]
    fn test_template_from_same_batch() {
        let mut registry = VariantRegistry::with_builtins();
        let records = vec![
            VariantRecord::new("longgame").with_field("nMoveRule", "100"),
            VariantRecord::new("bigdrops")
                .with_template("longgame")
                .with_field("pieceDrops", "true"),
        ];
        let report = registry.load(records, true).unwrap();
        assert!(report.is_ok());
        assert!(registry["bigdrops"].config().drops.piece_drops);
        assert_eq!(registry["bigdrops"].config().game_end.n_move_rule, 100);
    }
}
