//! String cleanup helpers for labels and filenames.

/// Characters stripped by [`clean`].
const BAD_CHARS: &str = " !@#$%^&*()-,./<>?";

/// Strip punctuation and whitespace that would break filenames or labels.
///
/// Removes every occurrence of the characters in `" !@#$%^&*()-,./<>?"`.
pub fn clean(s: &str) -> String {
    s.chars().filter(|c| !BAD_CHARS.contains(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_removes_spaces_and_punctuation() {
        assert_eq!(clean("Kepler-186 f"), "Kepler186f");
        assert_eq!(clean("a/b.c,d"), "abcd");
    }

    #[test]
    fn clean_keeps_underscores_and_alphanumerics() {
        assert_eq!(clean("stellar_radius"), "stellar_radius");
        assert_eq!(clean("TRAPPIST-1e"), "TRAPPIST1e");
    }

    #[test]
    fn clean_of_empty_is_empty() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn clean_of_only_bad_chars_is_empty() {
        assert_eq!(clean(" !@#-.,"), "");
    }
}
