//! Core types shared by every layer: player tokens and deterministic RNG.

pub mod rng;
pub mod token;

pub use rng::GameRng;
pub use token::{Token, TokenMap};
