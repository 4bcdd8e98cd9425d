//! Error types for variant definitions
//!
//! `ConfigError` describes one offending field of a variant definition,
//! `VariantError` ties it to the variant name.

use crate::types::{Color, PieceKind, Rank};

use super::fen::FenError;
use super::features::FeatureSpaceError;

/// A problem with one field of a variant definition
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Template variant is not registered
    #[error("unknown template variant '{0}'")]
    UnknownTemplate(String),

    /// Field name is not understood
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Field value cannot be parsed
    #[error("invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Geometry exceeds the representable 12x10 board
    #[error("board of {files} files x {ranks} ranks exceeds the 12x10 limit")]
    BoardTooLarge { files: usize, ranks: usize },

    /// No active piece kind
    #[error("variant has no piece types")]
    EmptyPieceSet,

    /// Two active kinds share a display or synonym character
    #[error("piece character '{symbol}' is used by both {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: PieceKind,
        second: PieceKind,
    },

    /// Start position does not match the geometry or piece set
    #[error("invalid start position: {0}")]
    InvalidStartFen(#[from] FenError),

    /// More than one king per side in the start position
    #[error("{color:?} has {count} kings in the start position")]
    NonUniqueRoyal { color: Color, count: usize },

    /// A rule refers to a kind that is not in the piece set
    #[error("'{field}' refers to inactive piece type {kind}")]
    InactivePieceReference { field: String, kind: PieceKind },

    /// Castling file outside the board
    #[error("'{field}' file {file} is outside the board")]
    InvalidCastling { field: String, file: char },

    /// Royal mobility regions contain no square of the board
    #[error("'{field}' leaves no king square on the board")]
    NoRoyalSquare { field: String },

    /// Feature-index space is not a bijection
    #[error("feature index space is inconsistent: {0}")]
    FeatureIndexMismatch(#[from] FeatureSpaceError),
}

impl ConfigError {
    /// The raw field name the error refers to
    pub fn field(&self) -> String {
        match self {
            ConfigError::UnknownTemplate(_) => "template".to_string(),
            ConfigError::UnknownField(field)
            | ConfigError::InvalidValue { field, .. }
            | ConfigError::InactivePieceReference { field, .. }
            | ConfigError::InvalidCastling { field, .. }
            | ConfigError::NoRoyalSquare { field } => field.clone(),
            ConfigError::BoardTooLarge { ranks, .. } if *ranks > Rank::NUM => {
                "maxRank".to_string()
            }
            ConfigError::BoardTooLarge { .. } => "maxFile".to_string(),
            ConfigError::EmptyPieceSet => "pieceTypes".to_string(),
            ConfigError::DuplicateSymbol { second, .. } => second.config_name(),
            ConfigError::InvalidStartFen(_) | ConfigError::NonUniqueRoyal { .. } => {
                "startFen".to_string()
            }
            ConfigError::FeatureIndexMismatch(_) => "nnueFeatures".to_string(),
        }
    }

    /// Shorthand for `InvalidValue`
    pub fn invalid(field: &str, value: &str, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// A failing variant definition
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("variant '{variant}': {source}")]
pub struct VariantError {
    pub variant: String,
    #[source]
    pub source: ConfigError,
}

impl VariantError {
    pub fn new(variant: impl Into<String>, source: ConfigError) -> Self {
        Self {
            variant: variant.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(ConfigError::invalid("maxRank", "x", "not a rank").field(), "maxRank");
        assert_eq!(ConfigError::UnknownTemplate("nope".into()).field(), "template");
        let dup = ConfigError::DuplicateSymbol {
            symbol: 'b',
            first: PieceKind::BISHOP,
            second: PieceKind::ELEPHANT,
        };
        assert_eq!(dup.field(), "elephant");

        let wide = ConfigError::BoardTooLarge { files: 13, ranks: 8 };
        assert_eq!(wide.field(), "maxFile");
        let tall = ConfigError::BoardTooLarge { files: 8, ranks: 11 };
        assert_eq!(tall.field(), "maxRank");
        let region = ConfigError::NoRoyalSquare {
            field: "mobilityRegionWhiteKing".into(),
        };
        assert_eq!(region.field(), "mobilityRegionWhiteKing");
    }

    #[test]
    fn test_variant_error_message() {
        let err = VariantError::new("foo", ConfigError::UnknownField("bar".into()));
        assert_eq!(err.to_string(), "variant 'foo': unknown field 'bar'");
    }
}
