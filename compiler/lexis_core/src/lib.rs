//! Longest-match lexical tokenization over caller-supplied rules.
//!
//! # Architecture
//!
//! - [`position`]: positions, end sentinels, and input cursors
//! - [`rule`]: the [`Rule`] contract, adapters, and cursor matchers
//! - [`step`]: one longest-match step over a rule tuple ([`RuleSet`])
//! - [`value`]: combining per-rule values into one token value type
//! - [`registry`]: rule type to category lookup
//! - [`lexer`]: the [`Lexer`] driver running steps to a [`Stop`]
//!
//! # Example
//!
//! ```
//! use lexis_core::{one_if, take_while, ByteCursor, Eof, Lexer};
//!
//! let lexer = Lexer::new((
//!     take_while(|b: u8| b.is_ascii_digit()),
//!     take_while(|b: u8| b.is_ascii_alphanumeric()),
//!     one_if(|b: u8| b.is_ascii_punctuation()),
//! ));
//!
//! let mut tokens = Vec::new();
//! let stop = lexer.scan(ByteCursor::from("123abc!"), &Eof, &mut tokens);
//!
//! assert!(stop.is_exhausted());
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].category(), 1);
//! assert_eq!(tokens[0].lexeme(), b"123abc");
//! assert_eq!(tokens[1].category(), 2);
//! ```

mod error;
pub mod lexer;
pub mod position;
pub mod registry;
pub mod rule;
pub mod step;
mod token;
pub mod value;

pub use error::UnrecognizedInput;
pub use lexer::{Lexer, Stop, Tokens};
pub use position::{ByteCursor, CharCursor, Cursor, Eof, Position, Sentinel};
pub use registry::{CategoryRegistry, RuleType, RuleTypes};
pub use rule::{
    capture, evaluate, literal, one_if, scan, take_while, vacant, with_value, Rule,
};
pub use step::{tokenize, RuleList, RuleSet};
pub use token::{Token, NO_CATEGORY};
pub use value::{Embed, TokenValue};
