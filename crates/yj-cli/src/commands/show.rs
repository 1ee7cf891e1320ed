use colored::Colorize;

use yj_core::hexagram::{self, Hexagram};

pub fn run(query: &str) -> Result<(), String> {
    let h = resolve(query)?;

    println!("  {} [{}]", h.name().bold(), format!("Index {}", h.index()).dimmed());
    println!();

    // Key order puts the upper trigram first, so draw top to bottom.
    for line in h.lines() {
        println!("    {}", line.glyph());
    }
    println!();

    println!("  key:    {}", h.key());
    println!("  upper:  {}", h.upper_trigram());
    println!("  lower:  {}", h.lower_trigram());
    println!();
    println!("  {}", "Judgment".underline());
    println!("  {}", h.judgment());
    println!();
    println!("  {}", "Image".underline());
    println!("  {}", h.image());

    Ok(())
}

/// A six-character `0`/`1` key, or an index from 1 to 64.
fn resolve(query: &str) -> Result<&'static Hexagram, String> {
    let query = query.trim();
    if query.len() == 6 && query.bytes().all(|b| b == b'0' || b == b'1') {
        return hexagram::lookup(query).map_err(|e| e.to_string());
    }
    query
        .parse::<u8>()
        .ok()
        .and_then(hexagram::by_index)
        .ok_or_else(|| format!("no hexagram matches \"{query}\"; use a 0/1 key or an index 1-64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_key_and_index() {
        assert_eq!(resolve("101100").unwrap().index(), 38);
        assert_eq!(resolve("38").unwrap().key(), "101100");
        assert_eq!(resolve(" 1 ").unwrap().name(), "乾为天");
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        for bad in ["0", "65", "300", "abc", "10110"] {
            assert!(resolve(bad).is_err(), "{bad}");
        }
    }
}
