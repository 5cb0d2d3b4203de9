//! # Dicewords
//!
//! Herein are the engines and rules of a family of word games played with
//! letter dice: shake a boxed set of dice, then either hunt words through
//! the resulting grid along king-move paths, or arrange a rack of dice into
//! an interlocking crossword. The engines are pure geometry and scoring;
//! the dictionary is a separate oracle, consulted only by the game rules,
//! so the same grid and the same placement always answer the same questions
//! no matter which word list is loaded.
//!
//! * [`board`] is the shared geometry: positions, tiles, and validated
//!   grids.
//! * [`dice`] is the published die sets, the board variants, and the
//!   shaking that turns a bag of dice into tiles.
//! * [`search`] traces candidate words through a grid.
//! * [`placement`] reads words and islands out of a sparse spread of tiles.
//! * [`score`] is the published scoring tables.
//! * [`dictionary`] is the word list, with a binary cache for fast opens.
//! * [`game`] is the rules: judging plays and finished crosswords.

pub mod board;
pub mod dice;
pub mod dictionary;
pub mod game;
pub mod placement;
pub mod score;
pub mod search;
