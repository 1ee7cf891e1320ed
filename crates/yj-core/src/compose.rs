//! Prompt rendering and the final report.

use crate::direction::Direction;
use crate::error::{DivinationError, DivinationResult};
use crate::generator::TextGenerator;
use crate::hexagram::Hexagram;

/// Fill a direction's template with hexagram fields.
///
/// Placeholders: `{original_name}`, `{original_index}`, `{changed_name}`,
/// `{changed_index}`, `{original_judgment}`, `{original_image}`.
pub fn render_prompt(original: &Hexagram, changed: &Hexagram, direction: Direction) -> String {
    let fields: [(&str, String); 6] = [
        ("{original_name}", original.name().to_string()),
        ("{original_index}", original.index().to_string()),
        ("{changed_name}", changed.name().to_string()),
        ("{changed_index}", changed.index().to_string()),
        ("{original_judgment}", original.judgment().to_string()),
        ("{original_image}", original.image().to_string()),
    ];
    fields
        .iter()
        .fold(direction.template().to_string(), |acc, (placeholder, value)| {
            acc.replace(placeholder, value)
        })
}

/// Lay out the report shown to the user.
pub fn format_report(
    original: &Hexagram,
    changed: &Hexagram,
    direction: Direction,
    interpretation: &str,
) -> String {
    format!(
        "🔢 Original Hexagram: {original}\n\
         🔁 Changing Hexagram: {changed}\n\
         \n\
         📖 Hexagram Text: \"{judgment}\"\n\
         🗣 Image Commentary: \"{image}\"\n\
         \n\
         🎯 Your inquiry type: \"{direction}\"\n\
         {interpretation}",
        judgment = original.judgment(),
        image = original.image(),
    )
}

/// Ask the generator for an interpretation of the text only.
///
/// Empty output counts as a failure.
pub fn interpret(
    original: &Hexagram,
    changed: &Hexagram,
    direction: Direction,
    generator: &dyn TextGenerator,
) -> DivinationResult<String> {
    let prompt = render_prompt(original, changed, direction);
    tracing::debug!(%direction, chars = prompt.chars().count(), "requesting interpretation");

    let text = generator
        .generate(&prompt)
        .map_err(|e| DivinationError::InterpretationUnavailable(e.message().to_string()))?;

    if text.trim().is_empty() {
        return Err(DivinationError::InterpretationUnavailable(
            "generator returned no text".to_string(),
        ));
    }
    Ok(text)
}

/// Generate an interpretation and format the full report.
pub fn compose(
    original: &Hexagram,
    changed: &Hexagram,
    direction: Direction,
    generator: &dyn TextGenerator,
) -> DivinationResult<String> {
    let interpretation = interpret(original, changed, direction, generator)?;
    Ok(format_report(original, changed, direction, &interpretation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::hexagram::lookup;
    use std::cell::RefCell;

    fn kui() -> &'static Hexagram {
        lookup("101100").unwrap()
    }

    fn qian() -> &'static Hexagram {
        lookup("111111").unwrap()
    }

    #[test]
    fn prompt_substitutes_every_field() {
        let prompt = render_prompt(kui(), qian(), Direction::Career);
        assert!(prompt.starts_with("Analyze career fortune"));
        assert!(prompt.contains("Original Hexagram: 火泽睽 (Index 38)"));
        assert!(prompt.contains("Changing Hexagram: 乾为天 (Index 1)"));
        assert!(prompt.contains("Hexagram Text: \"小事吉。\""));
        assert!(prompt.contains("Image Text: \"上火下泽，睽；君子以同而异。\""));
        assert!(!prompt.contains('{'), "unfilled placeholder in {prompt}");
    }

    #[test]
    fn prompt_follows_direction() {
        for d in Direction::all() {
            let prompt = render_prompt(kui(), qian(), *d);
            let topic = match d {
                Direction::Travel => "travel",
                Direction::Love => "love",
                Direction::Career => "career",
                Direction::Study => "academic",
            };
            assert!(prompt.starts_with(&format!("Analyze {topic} fortune")));
        }
    }

    #[test]
    fn generator_receives_prompt() {
        let seen = RefCell::new(String::new());
        let generator = |p: &str| {
            *seen.borrow_mut() = p.to_string();
            Ok::<_, GenerationError>("ok".to_string())
        };
        compose(kui(), qian(), Direction::Love, &generator).unwrap();
        assert_eq!(*seen.borrow(), render_prompt(kui(), qian(), Direction::Love));
    }

    #[test]
    fn report_layout() {
        let generator = |_: &str| Ok::<_, GenerationError>("A calm day for small matters.".to_string());
        let report = compose(kui(), qian(), Direction::Travel, &generator).unwrap();
        insta::assert_snapshot!(report, @r#"
        🔢 Original Hexagram: 火泽睽 (Index 38)
        🔁 Changing Hexagram: 乾为天 (Index 1)

        📖 Hexagram Text: "小事吉。"
        🗣 Image Commentary: "上火下泽，睽；君子以同而异。"

        🎯 Your inquiry type: "Travel"
        A calm day for small matters.
        "#);
    }

    #[test]
    fn failing_generator_yields_no_report() {
        let generator = |_: &str| Err::<String, _>(GenerationError::new("connection refused"));
        let err = compose(kui(), qian(), Direction::Study, &generator).unwrap_err();
        assert_eq!(
            err,
            DivinationError::InterpretationUnavailable("connection refused".to_string())
        );
    }

    #[test]
    fn blank_output_is_unavailable() {
        let generator = |_: &str| Ok::<_, GenerationError>("  \n\t".to_string());
        let err = compose(kui(), qian(), Direction::Study, &generator).unwrap_err();
        assert!(matches!(err, DivinationError::InterpretationUnavailable(_)));
    }
}
