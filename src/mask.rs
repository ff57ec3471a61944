//! Safe-to-log rendering of secret values
//!
//! Masked values are for human-readable diagnostics only; never compare
//! or store them.

const PLACEHOLDER: &str = "***";

/// Mask a credential for diagnostic output.
///
/// Secrets shorter than 8 characters collapse to a fixed placeholder so
/// not even their length leaks. Longer secrets keep the first and last
/// four characters around a fixed-width elision, so the output length
/// does not depend on the input length.
pub fn mask(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() < 8 {
        return PLACEHOLDER.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "***" ; "empty input")]
    #[test_case("short", "***" ; "five characters")]
    #[test_case("1234567", "***" ; "seven characters")]
    #[test_case("abcd1234", "abcd****1234" ; "exactly eight")]
    #[test_case("abcdefghijklmnop", "abcd****mnop" ; "sixteen characters")]
    fn test_mask(input: &str, expected: &str) {
        assert_eq!(mask(input), expected);
    }

    #[test]
    fn test_output_shape_is_constant_for_long_secrets() {
        for len in 8..64 {
            let secret = "x".repeat(len);
            let masked = mask(&secret);
            assert_eq!(masked.chars().count(), 12);
            assert!(masked.starts_with(&secret[..4]));
            assert!(masked.ends_with(&secret[len - 4..]));
        }
    }

    #[test]
    fn test_multibyte_secrets_do_not_panic() {
        assert_eq!(mask("ééééééééé"), "éééé****éééé");
        assert_eq!(mask("éé"), "***");
    }
}
