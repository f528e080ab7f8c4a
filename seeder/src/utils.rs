use regex::Regex;

/// Seed files come from spreadsheets, names arrive with underscores, stray
/// punctuation, and uneven spacing.
pub fn sanitize(input: &str) -> String {
    let replace = Regex::new(r"[_]").unwrap();
    let mut s = replace.replace_all(input, " ").into_owned();

    let clean_re = Regex::new(r"[^A-Za-z0-9&()\- ]").unwrap();
    s = clean_re.replace_all(&s, "").into_owned();

    s = s.trim().to_string();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(&s, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn test_basic() {
        assert_eq!(sanitize("orange_chicken"), "orange chicken");
        assert_eq!(sanitize("Beijing Beef"), "Beijing Beef");
        assert_eq!(sanitize("clean-this_name!"), "clean-this name");
    }

    #[test]
    fn test_leading_trailing_spaces() {
        assert_eq!(sanitize("   Chow Mein   "), "Chow Mein");
        assert_eq!(sanitize("  multiple   spaces  "), "multiple spaces");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(sanitize("!@#$%^*"), "");
        assert_eq!(sanitize("abc123!@#"), "abc123");
        assert_eq!(sanitize("Sweet & Sour (Large)"), "Sweet & Sour (Large)");
    }

    #[test]
    fn test_underscores_and_dashes() {
        assert_eq!(sanitize("stir_fry-station"), "stir fry-station");
        assert_eq!(sanitize("_start_end_"), "start end");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("     "), "");
    }
}
