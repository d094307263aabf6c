//! Player tokens and per-token data storage.
//!
//! ## Token
//!
//! The two marks a player drops into the cube. There is no "empty"
//! token: an empty cell is `None` wherever a cell is inspected.
//!
//! ## TokenMap
//!
//! Fixed two-slot storage indexed by `Token`, used for per-player
//! counters such as win tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Not};

/// One of the two player marks. White moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Token {
    White,
    Black,
}

impl Token {
    /// Both tokens, in turn order.
    pub const ALL: [Token; 2] = [Token::White, Token::Black];

    /// Slot index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Token::White => 0,
            Token::Black => 1,
        }
    }

    /// The other player's token.
    #[must_use]
    pub const fn opponent(self) -> Token {
        match self {
            Token::White => Token::Black,
            Token::Black => Token::White,
        }
    }

    /// Single-character marker used by the text dump.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Token::White => 'O',
            Token::Black => 'X',
        }
    }
}

impl Not for Token {
    type Output = Token;

    fn not(self) -> Token {
        self.opponent()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::White => write!(f, "White"),
            Token::Black => write!(f, "Black"),
        }
    }
}

/// Per-token data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sogo::core::{Token, TokenMap};
///
/// let mut wins: TokenMap<u32> = TokenMap::default();
/// wins[Token::Black] += 1;
/// assert_eq!(wins[Token::White], 0);
/// assert_eq!(wins[Token::Black], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMap<T> {
    data: [T; 2],
}

impl<T> TokenMap<T> {
    /// Get a reference to a token's entry.
    #[must_use]
    pub fn get(&self, token: Token) -> &T {
        &self.data[token.index()]
    }

    /// Get a mutable reference to a token's entry.
    pub fn get_mut(&mut self, token: Token) -> &mut T {
        &mut self.data[token.index()]
    }

    /// Iterate over (Token, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &T)> {
        Token::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Token> for TokenMap<T> {
    type Output = T;

    fn index(&self, token: Token) -> &Self::Output {
        self.get(token)
    }
}

impl<T> IndexMut<Token> for TokenMap<T> {
    fn index_mut(&mut self, token: Token) -> &mut Self::Output {
        self.get_mut(token)
    }
}
