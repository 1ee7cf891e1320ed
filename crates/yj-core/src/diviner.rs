//! Top-level divination: digits in, report out.
//!
//! `Diviner` owns the two collaborators the engine needs from outside: a
//! [`TextGenerator`] for interpretations and a [`DigitSource`] for casting
//! when the caller brings no digits of their own.

use serde::Serialize;

use crate::compose::{format_report, interpret};
use crate::config::DivinerConfig;
use crate::direction::{Direction, classify};
use crate::error::DivinationResult;
use crate::generator::{DigitSource, RngDigitSource, TextGenerator};
use crate::hexagram::{Hexagram, lookup};
use crate::lines::{digits_to_lines, lines_to_key};
use crate::mutation::{changing_positions, mutate};

/// The original and changed hexagram for a digit string.
#[derive(Debug, Clone, Serialize)]
pub struct Cast {
    /// The six digits the cast came from.
    pub digits: String,
    /// The hexagram read directly from the digits.
    pub original: &'static Hexagram,
    /// The hexagram after the changing lines flip.
    pub changed: &'static Hexagram,
    /// Zero-based positions of the changing lines.
    pub changing_lines: Vec<usize>,
}

/// Derive both hexagrams from six digits.
pub fn cast(digits: &str) -> DivinationResult<Cast> {
    let lines = digits_to_lines(digits)?;
    let original = lookup(&lines_to_key(&lines))?;
    let changed = lookup(&lines_to_key(&mutate(&lines, digits)))?;
    Ok(Cast {
        digits: digits.to_string(),
        original,
        changed,
        changing_lines: changing_positions(digits),
    })
}

/// A finished divination.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    /// Hexagrams derived from the digits.
    #[serde(flatten)]
    pub cast: Cast,
    /// The direction the query was classified into.
    pub direction: Direction,
    /// Generated interpretation text.
    pub interpretation: String,
}

impl Reading {
    /// The user-facing report.
    pub fn report(&self) -> String {
        format_report(
            self.cast.original,
            self.cast.changed,
            self.direction,
            &self.interpretation,
        )
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.report())
    }
}

/// Runs divinations against an injected text generator.
pub struct Diviner {
    generator: Box<dyn TextGenerator>,
    digit_source: Box<dyn DigitSource>,
}

impl Diviner {
    /// Create a diviner. Random digits come from an RNG seeded per `config`.
    pub fn new(generator: impl TextGenerator + 'static, config: DivinerConfig) -> Self {
        let digit_source = match config.seed {
            Some(seed) => RngDigitSource::seeded(seed),
            None => RngDigitSource::from_entropy(),
        };
        Self {
            generator: Box::new(generator),
            digit_source: Box::new(digit_source),
        }
    }

    /// Replace the digit source.
    pub fn with_digit_source(mut self, source: impl DigitSource + 'static) -> Self {
        self.digit_source = Box::new(source);
        self
    }

    /// Divine for a free-text query and return the formatted report.
    ///
    /// With `digits` absent, six digits are drawn from the digit source.
    pub fn divine(&mut self, digits: Option<&str>, query: &str) -> DivinationResult<String> {
        self.cast(digits, query).map(|r| r.report())
    }

    /// Divine for a free-text query and return the structured reading.
    pub fn cast(&mut self, digits: Option<&str>, query: &str) -> DivinationResult<Reading> {
        self.cast_for(digits, classify(query))
    }

    /// Divine for an already chosen direction.
    pub fn cast_for(
        &mut self,
        digits: Option<&str>,
        direction: Direction,
    ) -> DivinationResult<Reading> {
        let digits = match digits {
            Some(d) => d.to_string(),
            None => {
                let d = self.digit_source.next_digits();
                tracing::debug!(digits = %d, "auto-generated digits");
                d
            }
        };

        let cast = cast(&digits)?;
        let interpretation =
            interpret(cast.original, cast.changed, direction, self.generator.as_ref())?;

        Ok(Reading {
            cast,
            direction,
            interpretation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DivinationError, GenerationError};
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedDigits(&'static str);

    impl DigitSource for FixedDigits {
        fn next_digits(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn echo_diviner() -> Diviner {
        let generator = |p: &str| Ok::<_, GenerationError>(format!("[{} chars]", p.chars().count()));
        Diviner::new(generator, DivinerConfig::default().with_seed(42))
    }

    #[test]
    fn cast_known_digits() {
        let c = cast("385962").unwrap();
        assert_eq!(c.original.index(), 38);
        assert_eq!(c.original.name(), "火泽睽");
        // 9 and 6 at positions 3 and 4 flip 101100 into 101010.
        assert_eq!(c.changing_lines, vec![3, 4]);
        assert_eq!(c.changed.key(), "101010");
        assert_eq!(c.changed.index(), 64);
    }

    #[test]
    fn cast_without_changing_lines() {
        let c = cast("123457").unwrap();
        assert_eq!(c.original, c.changed);
        assert!(c.changing_lines.is_empty());
    }

    #[test]
    fn invalid_digits_never_reach_generator() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let generator = move |_: &str| {
            counter.set(counter.get() + 1);
            Ok::<_, GenerationError>("text".to_string())
        };
        let mut diviner = Diviner::new(generator, DivinerConfig::default().with_seed(1));

        for bad in ["12a456", "1234", ""] {
            let err = diviner.divine(Some(bad), "career").unwrap_err();
            assert!(matches!(err, DivinationError::InvalidInput(_)), "{bad}: {err}");
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn divine_reports_classified_direction() {
        let mut diviner = echo_diviner();
        let report = diviner
            .divine(Some("385962"), "I want to know about my career")
            .unwrap();
        assert!(report.starts_with("🔢 Original Hexagram: 火泽睽 (Index 38)"));
        assert!(report.contains("🔁 Changing Hexagram: 火水未济 (Index 64)"));
        assert!(report.contains("🎯 Your inquiry type: \"Career\""));
    }

    #[test]
    fn divine_is_idempotent() {
        let mut diviner = echo_diviner();
        let a = diviner.divine(Some("385969"), "考试").unwrap();
        let b = diviner.divine(Some("385969"), "考试").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_digits_use_digit_source() {
        let mut diviner = echo_diviner().with_digit_source(FixedDigits("111111"));
        let reading = diviner.cast(None, "").unwrap();
        assert_eq!(reading.cast.digits, "111111");
        assert_eq!(reading.cast.original.name(), "乾为天");
        assert_eq!(reading.direction, Direction::Travel);
    }

    #[test]
    fn random_digits_are_valid() {
        let mut diviner = echo_diviner();
        for _ in 0..50 {
            let reading = diviner.cast(None, "love").unwrap();
            assert!(
                reading
                    .cast
                    .digits
                    .bytes()
                    .all(|b| (b'1'..=b'9').contains(&b))
            );
        }
    }

    #[test]
    fn generator_failure_propagates() {
        let generator = |_: &str| Err::<String, _>(GenerationError::new("quota exceeded"));
        let mut diviner = Diviner::new(generator, DivinerConfig::default());
        let err = diviner.divine(Some("385962"), "trip").unwrap_err();
        assert_eq!(
            err,
            DivinationError::InterpretationUnavailable("quota exceeded".to_string())
        );
    }

    #[test]
    fn cast_for_skips_classification() {
        let mut diviner = echo_diviner();
        let reading = diviner.cast_for(Some("385962"), Direction::Love).unwrap();
        assert_eq!(reading.direction, Direction::Love);
        assert_eq!(reading.to_string(), reading.report());
    }

    #[test]
    fn reading_serializes() {
        let mut diviner = echo_diviner();
        let reading = diviner.cast(Some("385962"), "exam").unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["digits"], "385962");
        assert_eq!(json["original"]["index"], 38);
        assert_eq!(json["changed"]["name"], "火水未济");
        assert_eq!(json["direction"], "Study");
        assert_eq!(json["changing_lines"], serde_json::json!([3, 4]));
    }
}
