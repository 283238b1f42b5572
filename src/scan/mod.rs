//! Tokenizing and classifying response file arguments.
//!
//! This module handles:
//! - Splitting whitespace/quote-delimited argument text into tokens
//! - Recognizing which compiler flag shapes embed a path, and where

pub mod classifier;
pub mod tokenizer;

pub use classifier::{Classification, ForcedInclude, classify, forced_include};
pub use tokenizer::{TOKEN_CAPACITY, Token, TokenKind, Tokenizer};
