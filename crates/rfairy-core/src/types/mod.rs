//! 基本型

mod color;
mod piece;
mod square;
mod value;

pub use color::Color;
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
pub use value::{Phase, Score, Term, Value};
