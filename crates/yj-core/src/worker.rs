//! Free-text request handling.
//!
//! A worker takes a whole user message such as `"career 385962"`, pulls out
//! the first run of six digits, and treats whatever is left as the query.
//! Messages without digits get a guidance reply instead of a reading, and
//! engine failures are turned into a polite "try again" reply.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diviner::Diviner;

/// Reply when the message carries no six-digit number.
pub const GUIDANCE_MESSAGE: &str = "To begin your divination, please share the area of life you’d like to explore (e.g., travel, love, career, or studies), along with a 6-digit number, such as 123456.";

/// Reply when the engine fails.
pub const FAILURE_MESSAGE: &str = "The divination could not be completed at this time. Please try again later, when the timing is right.";

/// Query used when the message is nothing but digits.
pub const DEFAULT_QUERY: &str = "Travel fortune";

static SIX_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{6}").unwrap_or_else(|e| unreachable!("invalid digit pattern: {e}"))
});

/// A message split into divination digits and query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The six digits found in the message.
    pub digits: String,
    /// The remaining text, or [`DEFAULT_QUERY`] if nothing remains.
    pub query: String,
}

/// Split a message into digits and query. `None` if there are no six
/// consecutive digits.
pub fn parse_request(message: &str) -> Option<Request> {
    let digits = SIX_DIGITS.find(message)?.as_str();
    let rest = message.replace(digits, "");
    let rest = rest.trim();
    let query = if rest.is_empty() { DEFAULT_QUERY } else { rest };
    Some(Request {
        digits: digits.to_string(),
        query: query.to_string(),
    })
}

/// Answers free-text divination requests.
pub struct DivinationWorker {
    diviner: Diviner,
}

impl DivinationWorker {
    /// Wrap a diviner.
    pub fn new(diviner: Diviner) -> Self {
        Self { diviner }
    }

    /// Produce the reply for one user message.
    pub fn respond(&mut self, message: &str) -> String {
        let Some(request) = parse_request(message) else {
            return GUIDANCE_MESSAGE.to_string();
        };

        tracing::debug!(digits = %request.digits, query = %request.query, "divination request");

        match self.diviner.divine(Some(&request.digits), &request.query) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "divination failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DivinerConfig;
    use crate::error::GenerationError;

    fn worker_with(text: &'static str) -> DivinationWorker {
        let generator = move |_: &str| Ok::<_, GenerationError>(text.to_string());
        DivinationWorker::new(Diviner::new(generator, DivinerConfig::default().with_seed(3)))
    }

    #[test]
    fn parse_digits_and_query() {
        let req = parse_request("my career 385962 please").unwrap();
        assert_eq!(req.digits, "385962");
        assert_eq!(req.query, "my career  please");
    }

    #[test]
    fn first_run_of_digits_wins() {
        let req = parse_request("111111 then 222222").unwrap();
        assert_eq!(req.digits, "111111");
        assert_eq!(req.query, "then 222222");
    }

    #[test]
    fn longer_numbers_use_first_six() {
        let req = parse_request("12345678").unwrap();
        assert_eq!(req.digits, "123456");
        assert_eq!(req.query, "78");
    }

    #[test]
    fn digits_only_gets_default_query() {
        let req = parse_request("  385962 ").unwrap();
        assert_eq!(req.query, DEFAULT_QUERY);
    }

    #[test]
    fn repeated_digits_are_all_removed() {
        let req = parse_request("385962 love 385962").unwrap();
        assert_eq!(req.query, "love");
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_request("tell me about love"), None);
        assert_eq!(parse_request("12345 love"), None);
        assert_eq!(parse_request(""), None);
    }

    #[test]
    fn respond_with_guidance() {
        let mut worker = worker_with("unused");
        assert_eq!(worker.respond("what about my exam?"), GUIDANCE_MESSAGE);
    }

    #[test]
    fn respond_with_report() {
        let mut worker = worker_with("Journey well.");
        let reply = worker.respond("385962 出行");
        assert!(reply.contains("火泽睽 (Index 38)"));
        assert!(reply.contains("\"Travel\""));
        assert!(reply.ends_with("Journey well."));
    }

    #[test]
    fn respond_with_failure_message() {
        let generator = |_: &str| Err::<String, _>(GenerationError::new("offline"));
        let mut worker =
            DivinationWorker::new(Diviner::new(generator, DivinerConfig::default()));
        assert_eq!(worker.respond("385962 career"), FAILURE_MESSAGE);
    }

    #[test]
    fn blank_interpretation_is_a_failure() {
        let mut worker = worker_with("");
        assert_eq!(worker.respond("123456"), FAILURE_MESSAGE);
    }
}
