use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("value must be at least 1, got {0}")]
    NotPositive(String),
}

/// Parses a strictly positive integer, such as a grid size or a trial count.
pub fn parse_positive(value: &str) -> Result<usize, ParseError> {
    let trimmed = value.trim();
    if let Some(digits) = trimmed.strip_prefix('-') {
        if digits.chars().all(|c| c.is_ascii_digit()) && !digits.is_empty() {
            return Err(ParseError::NotPositive(trimmed.to_string()));
        }
    }
    match trimmed.parse::<usize>() {
        Ok(0) => Err(ParseError::NotPositive(trimmed.to_string())),
        Ok(n) => Ok(n),
        Err(_) => Err(ParseError::NotANumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_positive("200"), Ok(200));
        assert_eq!(parse_positive(" 1 "), Ok(1));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(
            parse_positive("0"),
            Err(ParseError::NotPositive("0".to_string()))
        );
        assert_eq!(
            parse_positive("-5"),
            Err(ParseError::NotPositive("-5".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            parse_positive("ten"),
            Err(ParseError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            parse_positive("1.5"),
            Err(ParseError::NotANumber("1.5".to_string()))
        );
        assert!(parse_positive("-").is_err());
    }
}
