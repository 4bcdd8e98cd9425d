//! 初期局面文字列の盤面部分
//!
//! 段は `/` 区切り（最上段から）、数字（複数桁可）は空き升の連続、`*` は壁、
//! `+` と `~` は直後・直前の駒に付く印で升を占めない。`[...]` は持ち駒。

/// 盤面部分の解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("pocket is not closed with ']'")]
    UnterminatedPocket,

    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },

    #[error("rank {rank} is {found} squares wide, expected {expected}")]
    RankWidth {
        rank: usize,
        expected: usize,
        found: usize,
    },

    #[error("'{0}' is not a piece of this variant")]
    UnknownPiece(char),
}

/// 盤上の 1 升
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Piece(char),
}

/// 解析済みの盤面部分
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// 最上段から順の各段
    pub rows: Vec<Vec<Cell>>,
    /// 持ち駒の文字
    pub pocket: Vec<char>,
}

impl BoardLayout {
    /// 盤面部分（最初の空白まで）を解析する
    pub fn parse(board: &str) -> Result<BoardLayout, FenError> {
        let mut layout = BoardLayout {
            rows: vec![Vec::new()],
            pocket: Vec::new(),
        };
        let mut chars = board.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '/' => layout.rows.push(Vec::new()),
                '[' => {
                    let mut closed = false;
                    for p in chars.by_ref() {
                        match p {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '-' => {}
                            p if p.is_ascii_alphabetic() => layout.pocket.push(p),
                            p => return Err(FenError::UnexpectedChar(p)),
                        }
                    }
                    if !closed {
                        return Err(FenError::UnterminatedPocket);
                    }
                }
                '0'..='9' => {
                    let mut run = c.to_digit(10).unwrap_or(0) as usize;
                    while let Some(d) = chars.peek().and_then(|d| d.to_digit(10)) {
                        run = run * 10 + d as usize;
                        chars.next();
                    }
                    if let Some(row) = layout.rows.last_mut() {
                        row.extend(std::iter::repeat_n(Cell::Empty, run));
                    }
                }
                '*' => {
                    if let Some(row) = layout.rows.last_mut() {
                        row.push(Cell::Wall);
                    }
                }
                '+' | '~' => {}
                c if c.is_ascii_alphabetic() => {
                    if let Some(row) = layout.rows.last_mut() {
                        row.push(Cell::Piece(c));
                    }
                }
                c => return Err(FenError::UnexpectedChar(c)),
            }
        }
        Ok(layout)
    }

    /// 段数と各段の幅を確認する
    pub fn check_geometry(&self, files: usize, ranks: usize) -> Result<(), FenError> {
        if self.rows.len() != ranks {
            return Err(FenError::RankCount {
                expected: ranks,
                found: self.rows.len(),
            });
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != files {
                return Err(FenError::RankWidth {
                    rank: ranks - i,
                    expected: files,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    /// 盤上と持ち駒の駒文字
    pub fn piece_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rows
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                Cell::Piece(c) => Some(*c),
                _ => None,
            })
            .chain(self.pocket.iter().copied())
    }
}

/// 文字の出現数
pub fn count_char(board: &str, c: char) -> usize {
    board.chars().filter(|&x| x == c).count()
}
