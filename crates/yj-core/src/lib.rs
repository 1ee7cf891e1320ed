//! Hexagram derivation engine for Yijing.
//!
//! Turns six digits into an I Ching hexagram and its changing hexagram,
//! classifies a free-text query into an inquiry direction, and asks an
//! injected text generator for an interpretation. Also provides a worker
//! that answers whole free-text messages.

pub mod compose;
pub mod config;
pub mod direction;
pub mod diviner;
pub mod error;
pub mod generator;
pub mod hexagram;
pub mod lines;
pub mod mutation;
pub mod worker;

pub use config::DivinerConfig;
pub use direction::{Direction, classify};
pub use diviner::{Cast, Diviner, Reading, cast};
pub use error::{DivinationError, DivinationResult, GenerationError};
pub use generator::{DigitSource, RngDigitSource, TextGenerator};
pub use hexagram::{Hexagram, Trigram, lookup};
pub use lines::{Line, LineSequence, digits_to_lines, lines_to_key};
pub use mutation::mutate;
pub use worker::DivinationWorker;
