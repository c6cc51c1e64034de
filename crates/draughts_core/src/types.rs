use std::fmt;

/// Board height in rows. The grid is square and fixed at the standard size.
pub const ROWS: i8 = 8;
/// Board width in columns.
pub const COLS: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row on which a man of this color is crowned. White starts on rows
    /// 0..3 and advances down the grid, Black the reverse.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => ROWS - 1,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

/// A cell coordinate. Ordered row-major so collections keyed by `Square`
/// iterate in a stable, platform-independent order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }
}

/// Bounds-checked square constructor.
pub fn sq(row: i8, col: i8) -> Option<Square> {
    let s = Square { row, col };
    if s.in_bounds() { Some(s) } else { None }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, row: i8, col: i8) -> Self {
        Self {
            color,
            kind,
            row,
            col,
        }
    }

    pub fn man(color: Color, row: i8, col: i8) -> Self {
        Self::new(color, PieceKind::Man, row, col)
    }

    pub fn king(color: Color, row: i8, col: i8) -> Self {
        Self::new(color, PieceKind::King, row, col)
    }

    pub fn square(self) -> Square {
        Square {
            row: self.row,
            col: self.col,
        }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// The same piece relocated to `to`, crowned when it reaches its own
    /// promotion row. Crowning is irreversible; a king stays a king.
    pub fn moved_to(self, to: Square) -> Self {
        let kind = if self.kind == PieceKind::Man && to.row == self.color.promotion_row() {
            PieceKind::King
        } else {
            self.kind
        };
        Self {
            color: self.color,
            kind,
            row: to.row,
            col: to.col,
        }
    }
}
