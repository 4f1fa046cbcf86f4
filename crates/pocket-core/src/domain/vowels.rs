//! Vowel Counting

/// Count ASCII vowels, ignoring case.
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels("Hello World"), 3);
        assert_eq!(count_vowels(""), 0);
        assert_eq!(count_vowels("AEIOU aeiou"), 10);
        assert_eq!(count_vowels("rhythm"), 0);
    }

    #[test]
    fn test_y_and_accents_do_not_count() {
        assert_eq!(count_vowels("yé"), 0);
    }
}
