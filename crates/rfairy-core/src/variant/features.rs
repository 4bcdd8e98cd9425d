//! NNUE 特徴量インデックス空間
//!
//! (玉位置) × (駒種 × 視点 × 升 + 持ち駒種 × 視点 × 枚数) を密な番号に写す。
//!
//! 1 つの玉位置あたりのレイアウト（S = 升数, P = 持ち駒幅, N = 玉以外の駒種数）:
//!
//! ```text
//! [ 駒種0 自分 | 駒種0 相手 | ... | 駒種N-1 相手 | 玉 ]  盤上: (2N + 1) * S （玉なしなら 2N * S）
//! [ 駒種0 自分 | 駒種0 相手 | ... | 駒種N-1 相手 ]        持ち駒: 2N * P
//! ```
//!
//! 玉の面は 1 枚で、自分の玉と相手の玉が共有する（玉位置が別途ブロックを選ぶため）。
//! 玉位置ブロックは玉の移動可能領域内の升だけに割り当てる。

use crate::bitboard::Bitboard;
use crate::types::{Color, File, Piece, PieceKind, Rank, Square};

/// 駒の手番と視点の関係
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Own = 0,
    Opponent = 1,
}

impl Relation {
    pub const ALL: [Relation; 2] = [Relation::Own, Relation::Opponent];

    #[inline]
    fn of(perspective: Color, piece: Piece) -> Relation {
        if piece.color() == perspective {
            Relation::Own
        } else {
            Relation::Opponent
        }
    }

    /// 視点から見てこの関係になる駒
    #[inline]
    fn piece(self, perspective: Color, kind: PieceKind) -> Piece {
        match self {
            Relation::Own => Piece::new(perspective, kind),
            Relation::Opponent => Piece::new(!perspective, kind),
        }
    }
}

/// 玉位置ブロック内の 1 特徴量
///
/// `square` と `count` は圧縮升番号・枚数（0 始まり）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Board {
        relation: Relation,
        kind: PieceKind,
        square: usize,
    },
    Royal {
        square: usize,
    },
    Hand {
        relation: Relation,
        kind: PieceKind,
        count: usize,
    },
}

/// 特徴量空間の構築に使う入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    /// 有効な駒種（昇順）
    pub kinds: Vec<PieceKind>,
    /// 玉として扱う駒種
    pub royal: Option<PieceKind>,
    pub max_file: File,
    pub max_rank: Rank,
    pub use_pockets: bool,
    /// 玉の移動可能領域（手番ごと、空は制限なし）
    pub royal_regions: [Bitboard; Color::NUM],
}

/// 全単射性検査の失敗
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureSpaceError {
    #[error("feature index {index} is produced twice from the {perspective:?} perspective")]
    Collision { perspective: Color, index: usize },

    #[error("feature index {index} is outside [0, {dimensions})")]
    OutOfRange { index: usize, dimensions: usize },

    #[error("feature index {index} is never produced from the {perspective:?} perspective")]
    Gap { perspective: Color, index: usize },
}

/// 1 駒種分の面の開始位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KindPlanes {
    kind: PieceKind,
    /// 盤上の面 [自分, 相手]
    board: [usize; 2],
    /// 持ち駒の面 [自分, 相手]
    hand: [usize; 2],
}

/// 領域を先頭から順に切り出す
struct Regions {
    cursor: usize,
}

impl Regions {
    fn new() -> Self {
        Self { cursor: 0 }
    }

    fn take(&mut self, width: usize) -> usize {
        let start = self.cursor;
        self.cursor += width;
        start
    }
}

/// 特徴量インデックス空間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpace {
    royal: Option<PieceKind>,
    planes: Vec<KindPlanes>,
    royal_plane: Option<usize>,
    squares: usize,
    pocket_width: usize,
    board_width: usize,
    per_anchor: usize,
    /// 圧縮升番号 → 玉位置ブロックの開始位置
    king_square_index: Vec<Option<usize>>,
    anchors: Vec<usize>,
    dimensions: usize,
    board_overflow: bool,
}

impl FeatureSpace {
    /// レイアウトから空間を組み立てる
    pub fn build(layout: &FeatureLayout) -> FeatureSpace {
        let files = layout.max_file.index() + 1;
        let squares = (layout.max_rank.index() + 1) * files;
        let pocket_width = if layout.use_pockets { 2 * files } else { 0 };
        let royal = layout.royal.filter(|r| layout.kinds.contains(r));

        let non_royal: Vec<PieceKind> = layout
            .kinds
            .iter()
            .copied()
            .filter(|k| Some(*k) != royal)
            .collect();

        let mut regions = Regions::new();
        let mut planes: Vec<KindPlanes> = non_royal
            .iter()
            .map(|&kind| KindPlanes {
                kind,
                board: [regions.take(squares), regions.take(squares)],
                hand: [0, 0],
            })
            .collect();
        let royal_plane = royal.map(|_| regions.take(squares));
        let board_width = regions.cursor;
        for p in &mut planes {
            p.hand = [regions.take(pocket_width), regions.take(pocket_width)];
        }
        let per_anchor = regions.cursor;

        let fits = layout.max_file.is_valid() && layout.max_rank.is_valid();
        let mut king_square_index = vec![None; squares.max(1)];
        let mut anchors = Vec::new();
        let board_overflow = royal.is_some() && !fits;

        if royal.is_some() && fits {
            let [white, black] = layout.royal_regions;
            let unrestricted = white.is_empty() || black.is_empty();
            for s in 0..squares {
                let Some(sq) = Square::from_index(s + s / files * (File::MAX.index() - layout.max_file.index())) else {
                    continue;
                };
                if unrestricted
                    || white.contains(sq)
                    || black.contains(sq.relative(Color::Black, layout.max_rank))
                {
                    king_square_index[s] = Some(anchors.len() * per_anchor);
                    anchors.push(s);
                }
            }
        } else {
            king_square_index[0] = Some(0);
            anchors.push(0);
        }

        FeatureSpace {
            royal,
            planes,
            royal_plane,
            squares,
            pocket_width,
            board_width,
            per_anchor,
            king_square_index,
            dimensions: anchors.len() * per_anchor,
            anchors,
            board_overflow,
        }
    }

    /// 空間の大きさ
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// 玉として扱う駒種
    #[inline]
    pub fn royal(&self) -> Option<PieceKind> {
        self.royal
    }

    /// 盤上の升数
    #[inline]
    pub fn squares(&self) -> usize {
        self.squares
    }

    /// 持ち駒の幅（持ち駒を使わなければ 0）
    #[inline]
    pub fn pocket_width(&self) -> usize {
        self.pocket_width
    }

    #[inline]
    pub fn uses_pockets(&self) -> bool {
        self.pocket_width > 0
    }

    /// 玉位置ブロック 1 つあたりの大きさ
    #[inline]
    pub fn per_anchor_width(&self) -> usize {
        self.per_anchor
    }

    /// 盤上部分の大きさ（持ち駒部分の開始位置）
    #[inline]
    pub fn board_width(&self) -> usize {
        self.board_width
    }

    /// 玉位置として使う圧縮升番号（昇順）
    #[inline]
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    /// 玉があるのに盤が表現可能な大きさを超えていた
    #[inline]
    pub fn board_overflow(&self) -> bool {
        self.board_overflow
    }

    fn planes_of(&self, kind: PieceKind) -> Option<&KindPlanes> {
        self.planes.iter().find(|p| p.kind == kind)
    }

    /// 盤上の駒の面の開始位置
    pub fn piece_square_index(&self, perspective: Color, piece: Piece) -> Option<usize> {
        if Some(piece.kind()) == self.royal {
            return self.royal_plane;
        }
        self.planes_of(piece.kind())
            .map(|p| p.board[Relation::of(perspective, piece) as usize])
    }

    /// 持ち駒の面の開始位置（玉・持ち駒なしは `None`）
    pub fn piece_hand_index(&self, perspective: Color, piece: Piece) -> Option<usize> {
        if !self.uses_pockets() {
            return None;
        }
        self.planes_of(piece.kind())
            .map(|p| p.hand[Relation::of(perspective, piece) as usize])
    }

    /// 玉位置ブロックの開始位置
    #[inline]
    pub fn king_square_index(&self, compact_sq: usize) -> Option<usize> {
        self.king_square_index.get(compact_sq).copied().flatten()
    }

    /// 先手視点での特徴量番号
    pub fn feature_index(&self, anchor: usize, key: FeatureKey) -> Option<usize> {
        self.feature_index_from(Color::White, anchor, key)
    }

    /// 指定視点での特徴量番号
    ///
    /// 範囲外の升・枚数や無効な駒種は `None`。
    pub fn feature_index_from(
        &self,
        perspective: Color,
        anchor: usize,
        key: FeatureKey,
    ) -> Option<usize> {
        let base = self.king_square_index(anchor)?;
        let offset = match key {
            FeatureKey::Board {
                relation,
                kind,
                square,
            } => {
                if square >= self.squares || Some(kind) == self.royal {
                    return None;
                }
                self.piece_square_index(perspective, relation.piece(perspective, kind))? + square
            }
            FeatureKey::Royal { square } => {
                let royal = self.royal?;
                if square >= self.squares {
                    return None;
                }
                self.piece_square_index(perspective, Piece::new(perspective, royal))? + square
            }
            FeatureKey::Hand {
                relation,
                kind,
                count,
            } => {
                if count >= self.pocket_width {
                    return None;
                }
                self.piece_hand_index(perspective, relation.piece(perspective, kind))? + count
            }
        };
        Some(base + offset)
    }

    /// 玉位置ブロック内の全特徴量（番号順）
    pub fn keys(&self) -> impl Iterator<Item = FeatureKey> + '_ {
        let board = self.planes.iter().flat_map(move |p| {
            Relation::ALL.into_iter().flat_map(move |relation| {
                (0..self.squares).map(move |square| FeatureKey::Board {
                    relation,
                    kind: p.kind,
                    square,
                })
            })
        });
        let royal = self
            .royal
            .into_iter()
            .flat_map(move |_| (0..self.squares).map(|square| FeatureKey::Royal { square }));
        let hand = self.planes.iter().flat_map(move |p| {
            Relation::ALL.into_iter().flat_map(move |relation| {
                (0..self.pocket_width).map(move |count| FeatureKey::Hand {
                    relation,
                    kind: p.kind,
                    count,
                })
            })
        });
        board.chain(royal).chain(hand)
    }

    /// 全 (玉位置, 特徴量) の像が両視点ともちょうど `[0, dimensions)` になるか検査する
    pub fn check_bijective(&self) -> Result<(), FeatureSpaceError> {
        for perspective in Color::ALL {
            let mut seen = vec![false; self.dimensions];
            for &anchor in &self.anchors {
                for key in self.keys() {
                    let Some(index) = self.feature_index_from(perspective, anchor, key) else {
                        continue;
                    };
                    let Some(slot) = seen.get_mut(index) else {
                        return Err(FeatureSpaceError::OutOfRange {
                            index,
                            dimensions: self.dimensions,
                        });
                    };
                    if *slot {
                        return Err(FeatureSpaceError::Collision { perspective, index });
                    }
                    *slot = true;
                }
            }
            if let Some(index) = seen.iter().position(|s| !s) {
                return Err(FeatureSpaceError::Gap { perspective, index });
            }
        }
        Ok(())
    }
}
