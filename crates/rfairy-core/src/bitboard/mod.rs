//! ビットボードモジュール
//!
//! 最大 12筋×10段（120升）の盤面を128bitで表現する升集合。
//! 移動領域・打ち込み領域・旗領域などのルール設定で使う。

mod core;

pub use self::core::Bitboard;
pub use self::core::BitboardIter;
