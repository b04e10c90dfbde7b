use crate::error::GradeError;
use crate::models::AnswerKey;

/// Extract the ordered answer key from solution-extraction text.
///
/// The only marker form recognized is a parenthesized run of digits,
/// `(<digits>)`, matched in textual order. The extraction prompt asks the
/// model to emit answers in exactly this shape; anything else ("[3]",
/// "3.", prose) is left unmatched and omitted. No count validation
/// happens here - callers grade against a fixed paper shape and should
/// check with `AnswerKey::expect_len` before use.
pub fn parse_answer_key(text: &str) -> Result<AnswerKey, GradeError> {
    if text.trim().is_empty() {
        return Err(GradeError::EmptyExtraction);
    }

    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            // At least one digit, immediately closed
            if j > i + 1 && j < bytes.len() && bytes[j] == b')' {
                if let Ok(value) = text[i + 1..j].parse::<u32>() {
                    values.push(value);
                    i = j + 1;
                    continue;
                }
            }
        }
        i += 1;
    }

    if values.is_empty() {
        return Err(GradeError::NoAnswerMarkers);
    }

    Ok(AnswerKey::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_markers() {
        let key = parse_answer_key("(1)(3)(2)").unwrap();
        assert_eq!(key.values(), &[1, 3, 2]);
    }

    #[test]
    fn test_markers_in_prose() {
        let text = "Q1: the answer is (4).\nQ2: we get x = 7, so (2)\nfinal: (13)";
        let key = parse_answer_key(text).unwrap();
        assert_eq!(key.values(), &[4, 2, 13]);
    }

    #[test]
    fn test_alternate_forms_unmatched() {
        // Only "(4)" uses the supported marker form
        let key = parse_answer_key("[3] 2. (4) answer: 1").unwrap();
        assert_eq!(key.values(), &[4]);
    }

    #[test]
    fn test_non_digit_inside_parens_skipped() {
        let key = parse_answer_key("(12a) (x) () (7)").unwrap();
        assert_eq!(key.values(), &[7]);
    }

    #[test]
    fn test_nested_open_paren() {
        let key = parse_answer_key("((3)").unwrap();
        assert_eq!(key.values(), &[3]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            parse_answer_key("   \n\t").unwrap_err(),
            GradeError::EmptyExtraction
        );
    }

    #[test]
    fn test_garbage_text() {
        assert_eq!(
            parse_answer_key("no markers here at all").unwrap_err(),
            GradeError::NoAnswerMarkers
        );
    }
}
