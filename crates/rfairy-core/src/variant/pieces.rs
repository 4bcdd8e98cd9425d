//! 駒種レジストリ
//!
//! 有効な駒種ごとに 1 レコード（表示文字・別名文字・Betza 記法）を保持する。
//! 駒種→文字、駒→文字（手番で大小）、別名文字、得点表示文字の 4 種の表は
//! すべてこのレコードから引くため、表同士が食い違うことはない。

use std::collections::BTreeMap;

use crate::types::{Color, Piece, PieceKind};

/// 1 駒種分の記号表現
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceEncoding {
    /// 表示文字（小文字で保持）
    symbol: char,
    /// 別名文字（小文字で保持）
    synonym: Option<char>,
    /// ユーザー定義駒の動き（Betza 記法）
    betza: Option<String>,
}

impl PieceEncoding {
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn synonym(&self) -> Option<char> {
        self.synonym
    }

    #[inline]
    pub fn betza(&self) -> Option<&str> {
        self.betza.as_deref()
    }
}

/// 有効な駒種の集合と記号表現
///
/// 反復順は駒種番号の昇順（玉は常に最後）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceSet {
    entries: BTreeMap<PieceKind, PieceEncoding>,
}

impl PieceSet {
    /// 空の集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 駒種を追加する
    ///
    /// 既に有効な駒種なら記号表現を上書きする。`betza` はユーザー定義駒のときだけ保持し、
    /// 空文字列は「記法なし」として扱う。`NONE` は無視する。
    pub fn add(&mut self, kind: PieceKind, c: char, betza: &str, synonym: Option<char>) {
        if kind.is_none() {
            return;
        }
        let betza = (kind.is_custom() && !betza.is_empty()).then(|| betza.to_string());
        let encoding = PieceEncoding {
            symbol: c.to_ascii_lowercase(),
            synonym: synonym.filter(|s| *s != ' ').map(|s| s.to_ascii_lowercase()),
            betza,
        };
        self.entries.insert(kind, encoding);
    }

    /// 駒種を取り除く（無効な駒種なら何もしない）
    pub fn remove(&mut self, kind: PieceKind) {
        self.entries.remove(&kind);
    }

    /// 全駒種を取り除く
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.entries.contains_key(&kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 有効な駒種（番号の昇順）
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.entries.keys().copied()
    }

    /// 有効な駒種と記号表現
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, &PieceEncoding)> + '_ {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    pub fn encoding(&self, kind: PieceKind) -> Option<&PieceEncoding> {
        self.entries.get(&kind)
    }

    /// 駒種→文字（小文字）
    pub fn piece_type_to_char(&self, kind: PieceKind) -> Option<char> {
        self.entries.get(&kind).map(|e| e.symbol)
    }

    /// 駒→表示文字（先手は大文字、後手は小文字）
    pub fn piece_to_char(&self, piece: Piece) -> Option<char> {
        self.entries
            .get(&piece.kind())
            .map(|e| piece.color().apply_case(e.symbol))
    }

    /// 駒→別名文字（大小は表示文字と同じ規則）
    pub fn synonym(&self, piece: Piece) -> Option<char> {
        self.entries
            .get(&piece.kind())
            .and_then(|e| e.synonym)
            .map(|c| piece.color().apply_case(c))
    }

    /// 評価内訳の表示に使う文字（小文字）
    pub fn score_to_char(&self, kind: PieceKind) -> Option<char> {
        self.piece_type_to_char(kind)
    }

    /// ユーザー定義駒の Betza 記法
    pub fn custom_betza(&self, kind: PieceKind) -> Option<&str> {
        self.entries.get(&kind).and_then(|e| e.betza())
    }

    /// 文字（表示文字または別名文字）から駒を引く
    pub fn piece_of_char(&self, c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else if c.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        let lower = c.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(_, e)| e.symbol == lower || e.synonym == Some(lower))
            .map(|(k, _)| Piece::new(color, *k))
    }

    /// 駒を表す文字かどうか
    #[inline]
    pub fn is_piece_char(&self, c: char) -> bool {
        self.piece_of_char(c).is_some()
    }

    /// 表示文字または別名文字が重複している駒種の組
    ///
    /// 大小で手番を区別するので、手番ごとの単射性は小文字表現の一意性と同値。
    pub fn duplicate_symbols(&self) -> Vec<(char, PieceKind, PieceKind)> {
        let mut seen: BTreeMap<char, PieceKind> = BTreeMap::new();
        let mut duplicates = Vec::new();
        for (kind, e) in &self.entries {
            for c in std::iter::once(e.symbol).chain(e.synonym.filter(|s| *s != e.symbol)) {
                if let Some(first) = seen.insert(c, *kind) {
                    duplicates.push((c, first, *kind));
                }
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> PieceSet {
        let mut set = PieceSet::new();
        for (kind, c) in [
            (PieceKind::PAWN, 'p'),
            (PieceKind::KNIGHT, 'n'),
            (PieceKind::BISHOP, 'b'),
            (PieceKind::ROOK, 'r'),
            (PieceKind::QUEEN, 'q'),
            (PieceKind::KING, 'k'),
        ] {
            set.add(kind, c, "", None);
        }
        set
    }

    #[test]
    fn test_add_sets_all_encodings() {
        let mut set = PieceSet::new();
        set.add(PieceKind::HORSE, 'N', "", Some('h'));
        let white = Piece::new(Color::White, PieceKind::HORSE);
        let black = Piece::new(Color::Black, PieceKind::HORSE);
        assert!(set.contains(PieceKind::HORSE));
        assert_eq!(set.piece_type_to_char(PieceKind::HORSE), Some('n'));
        assert_eq!(set.score_to_char(PieceKind::HORSE), Some('n'));
        assert_eq!(set.piece_to_char(white), Some('N'));
        assert_eq!(set.piece_to_char(black), Some('n'));
        assert_eq!(set.synonym(white), Some('H'));
        assert_eq!(set.synonym(black), Some('h'));
    }

    #[test]
    fn test_add_then_remove_restores_blank() {
        let mut set = standard();
        let before = set.clone();
        let kind = PieceKind::CHANCELLOR;
        set.add(kind, 'c', "", Some('x'));
        set.remove(kind);
        assert_eq!(set, before);
        assert!(!set.contains(kind));
        for color in Color::ALL {
            let piece = Piece::new(color, kind);
            assert_eq!(set.piece_to_char(piece), None);
            assert_eq!(set.synonym(piece), None);
        }
        assert_eq!(set.piece_type_to_char(kind), None);
        assert_eq!(set.score_to_char(kind), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = standard();
        let before = set.clone();
        set.remove(PieceKind::AMAZON);
        assert_eq!(set, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut set = standard();
        set.reset();
        assert!(set.is_empty());
        assert_eq!(set.piece_to_char(Piece::new(Color::White, PieceKind::KING)), None);
    }

    #[test]
    fn test_custom_betza_last_write_wins() {
        let mut set = PieceSet::new();
        let Some(custom) = PieceKind::custom(1) else {
            panic!("custom piece 1 must exist");
        };
        set.add(custom, 'a', "mW", None);
        set.add(custom, 'a', "mF", None);
        assert_eq!(set.custom_betza(custom), Some("mF"));
        // 組み込み駒の記法は保持しない
        set.add(PieceKind::KNIGHT, 'n', "N", None);
        assert_eq!(set.custom_betza(PieceKind::KNIGHT), None);
    }

    #[test]
    fn test_kinds_are_ascending() {
        let set = standard();
        let kinds: Vec<_> = set.kinds().collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.last(), Some(&PieceKind::KING));
    }

    #[test]
    fn test_piece_of_char() {
        let mut set = standard();
        set.add(PieceKind::ELEPHANT, 'b', "", Some('e'));
        assert_eq!(
            set.piece_of_char('K'),
            Some(Piece::new(Color::White, PieceKind::KING))
        );
        assert_eq!(set.piece_of_char('z'), None);
        assert_eq!(set.piece_of_char('/'), None);
        assert_eq!(
            set.piece_of_char('E'),
            Some(Piece::new(Color::White, PieceKind::ELEPHANT))
        );
    }

    #[test]
    fn test_duplicate_symbols() {
        let mut set = standard();
        assert!(set.duplicate_symbols().is_empty());
        set.add(PieceKind::ELEPHANT, 'b', "", None);
        assert_eq!(
            set.duplicate_symbols(),
            vec![('b', PieceKind::BISHOP, PieceKind::ELEPHANT)]
        );
    }
}
