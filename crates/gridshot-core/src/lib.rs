//! Core data structures for the Gridshot workflow.
//!
//! This crate provides the board and geometry types shared by the solver and
//! the desktop application:
//!
//! 1. **Board types**
//!    - [`digit`]: Type-safe representation of Sudoku digits 1-9
//!    - [`position`]: Row/column cell coordinates on the 9×9 grid
//!    - [`digit_set`]: A compact set of digits, used for duplicate scans
//!    - [`board`]: The 9×9 working board with sanitizing constructors
//!
//! 2. **Geometry types**
//!    - [`corners`]: The draggable corner quadrilateral used for manual
//!      perspective correction, held in normalized coordinates
//!
//! # Examples
//!
//! ```
//! use gridshot_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(0, 0), Some(Digit::D5));
//!
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(board.get(Position::new(8, 8)), None);
//! ```

pub mod board;
pub mod corners;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, BoardParseError},
    corners::{Corner, CornerSet, Point},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
