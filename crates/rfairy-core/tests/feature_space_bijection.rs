//! NNUE 特徴量空間の全単射性
//!
//! 組み込みバリアント全体と、ランダムに生成したレイアウトについて
//! (玉位置, 特徴量) → 番号 が `[0, dimensions)` への全単射であることを確かめる。

use std::collections::HashSet;

use proptest::prelude::*;
use rfairy_core::bitboard::Bitboard;
use rfairy_core::registry::VariantRegistry;
use rfairy_core::types::{Color, File, Piece, PieceKind, Rank, Square};
use rfairy_core::variant::{FeatureKey, FeatureLayout, FeatureSpace};

fn small_layout(kinds: &[PieceKind], royal: Option<PieceKind>) -> FeatureLayout {
    FeatureLayout {
        kinds: kinds.to_vec(),
        royal,
        max_file: File::C,
        max_rank: Rank::R3,
        use_pockets: false,
        royal_regions: [Bitboard::EMPTY; Color::NUM],
    }
}

/// 3x3 盤・2 駒種で全ての特徴量を列挙し、番号がちょうど 0..36 を覆うことを確かめる
#[test]
fn test_exhaustive_small_board() {
    let space = FeatureSpace::build(&small_layout(&[PieceKind::PAWN, PieceKind::ROOK], None));
    assert_eq!(space.dimensions(), 36);

    let mut seen = HashSet::new();
    for &anchor in space.anchors() {
        for key in space.keys() {
            let index = space.feature_index(anchor, key).unwrap();
            assert!(index < space.dimensions());
            assert!(seen.insert(index), "duplicate index {index} for {key:?}");
        }
    }
    assert_eq!(seen.len(), space.dimensions());
}

#[test]
fn test_exhaustive_small_board_with_king() {
    let space = FeatureSpace::build(&small_layout(
        &[PieceKind::PAWN, PieceKind::ROOK, PieceKind::KING],
        Some(PieceKind::KING),
    ));
    // 9 玉位置 × (2 駒種 × 2 視点 + 玉) × 9 升
    assert_eq!(space.anchors().len(), 9);
    assert_eq!(space.dimensions(), 9 * 5 * 9);
    assert!(space.check_bijective().is_ok());

    // 視点を反転すると自分と相手の面が入れ替わる
    let own = space
        .piece_square_index(Color::White, Piece::new(Color::White, PieceKind::ROOK))
        .unwrap();
    let flipped = space
        .piece_square_index(Color::Black, Piece::new(Color::Black, PieceKind::ROOK))
        .unwrap();
    assert_eq!(own, flipped);
}

#[test]
fn test_all_builtins_are_bijective() {
    let registry = VariantRegistry::with_builtins();
    for (name, variant) in registry.iter() {
        let features = variant.features();
        assert!(
            features.check_bijective().is_ok(),
            "{name}: {:?}",
            features.check_bijective()
        );
        assert_eq!(
            features.dimensions(),
            features.anchors().len() * features.per_anchor_width(),
            "{name}"
        );
    }
}

#[test]
fn test_xiangqi_king_squares_are_palace() {
    let registry = VariantRegistry::with_builtins();
    let features = registry["xiangqi"].features();
    assert_eq!(features.royal(), Some(PieceKind::KING));
    assert_eq!(features.anchors().len(), 9);
    // 9 筋の圧縮升番号で d1..f3
    assert_eq!(features.anchors(), &[3, 4, 5, 12, 13, 14, 21, 22, 23]);
    assert_eq!(features.king_square_index(0), None);
    assert_eq!(features.king_square_index(4), Some(features.per_anchor_width()));
}

#[test]
fn test_chess_classic_dimensions() {
    let registry = VariantRegistry::with_builtins();
    let features = registry["chess"].features();
    assert_eq!(features.dimensions(), 64 * 11 * 64);
    let key = FeatureKey::Royal { square: 60 };
    assert_eq!(features.feature_index(0, key), Some(10 * 64 + 60));
}

fn arb_kinds() -> impl Strategy<Value = Vec<PieceKind>> {
    prop::collection::btree_set(1u8..PieceKind::NUM as u8, 1..6).prop_map(|set| {
        set.into_iter()
            .filter_map(PieceKind::new)
            .collect::<Vec<_>>()
    })
}

fn arb_region(files: u8, ranks: u8) -> impl Strategy<Value = Bitboard> {
    prop::collection::vec((0..files, 0..ranks), 0..6).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(f, r)| Square::new(File::new(f), Rank::new(r)))
            .collect()
    })
}

fn arb_layout() -> impl Strategy<Value = FeatureLayout> {
    (1u8..=6, 1u8..=6)
        .prop_flat_map(|(files, ranks)| {
            (
                arb_kinds(),
                any::<bool>(),
                any::<bool>(),
                arb_region(files, ranks),
                arb_region(files, ranks),
                Just((files, ranks)),
            )
        })
        .prop_map(|(kinds, with_royal, use_pockets, white, black, (files, ranks))| {
            let royal = if with_royal { kinds.last().copied() } else { None };
            FeatureLayout {
                kinds,
                royal,
                max_file: File::new(files - 1),
                max_rank: Rank::new(ranks - 1),
                use_pockets,
                royal_regions: [white, black],
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_random_layout_is_bijective(layout in arb_layout()) {
        let space = FeatureSpace::build(&layout);
        prop_assert!(space.check_bijective().is_ok(), "{:?}", space.check_bijective());
        prop_assert_eq!(space.keys().count(), space.per_anchor_width());
        prop_assert!(!space.anchors().is_empty());
        prop_assert!(!space.board_overflow());
    }

    #[test]
    fn prop_out_of_range_keys_are_rejected(layout in arb_layout()) {
        let space = FeatureSpace::build(&layout);
        let anchor = space.anchors()[0];
        let kind = layout.kinds[0];
        let key = FeatureKey::Board {
            relation: rfairy_core::variant::Relation::Own,
            kind,
            square: space.squares(),
        };
        prop_assert_eq!(space.feature_index(anchor, key), None);
        let hand = FeatureKey::Hand {
            relation: rfairy_core::variant::Relation::Opponent,
            kind,
            count: space.pocket_width(),
        };
        prop_assert_eq!(space.feature_index(anchor, hand), None);
    }
}
