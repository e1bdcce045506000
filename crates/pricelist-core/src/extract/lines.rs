//! Line normalization.

/// A trimmed, non-empty line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Position among the kept lines (not the source line number).
    pub index: usize,
    pub text: &'a str,
}

/// Split text on CR and LF, trim every piece and drop the empty ones.
pub fn normalize_lines(text: &str) -> Vec<RawLine<'_>> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, text)| RawLine { index, text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_lines() {
        let lines = normalize_lines("  first \r\n\r\n second\rthird\n\n   \n");
        let texts: Vec<&str> = lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n\t\r\n").is_empty());
    }
}
