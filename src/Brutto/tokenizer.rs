use thiserror::Error;

/// error types for the brutto parsing pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BruttoError {
    #[error("invalid character '{symbol}' at position {position}")]
    InvalidCharacter { symbol: char, position: usize },
    #[error("unbalanced group at position {position}")]
    UnbalancedGroup { position: usize },
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("invalid count {count} for '{context}'")]
    InvalidCount { context: String, count: usize },
    #[error("count overflow while processing '{context}'")]
    Overflow { context: String },
}

/// Lexical units of a brutto formula. An implicit count of 1 produces no token,
/// so "H2O" tokenizes into three tokens, not four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Element(String),
    Count(usize),
    GroupOpen,
    GroupClose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Splits a formula string into the flat ordered token sequence.
/// An element symbol is one uppercase letter followed by any number of lowercase
/// letters, a count is a run of decimal digits, groups are '(' and ')'.
/// Everything else (whitespace included) is rejected.
pub fn tokenize(formula: &str) -> Result<Vec<Token>, BruttoError> {
    let chars: Vec<char> = formula.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_uppercase() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let symbol: String = chars[start..i].iter().collect();
            tokens.push(Token {
                kind: TokenKind::Element(symbol),
                position: start,
            });
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            let value: usize = digits.parse().map_err(|_| BruttoError::Overflow {
                context: digits.clone(),
            })?;
            tokens.push(Token {
                kind: TokenKind::Count(value),
                position: start,
            });
        } else if c == '(' {
            tokens.push(Token {
                kind: TokenKind::GroupOpen,
                position: i,
            });
            i += 1;
        } else if c == ')' {
            tokens.push(Token {
                kind: TokenKind::GroupClose,
                position: i,
            });
            i += 1;
        } else {
            return Err(BruttoError::InvalidCharacter {
                symbol: c,
                position: i,
            });
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_formula() {
        let tokens = tokenize("H2O").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token {
                    kind: TokenKind::Element("H".to_string()),
                    position: 0
                },
                Token {
                    kind: TokenKind::Count(2),
                    position: 1
                },
                Token {
                    kind: TokenKind::Element("O".to_string()),
                    position: 2
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_two_letter_symbols_and_groups() {
        let tokens = tokenize("Ca3(PO4)2").unwrap();
        let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Element("Ca".to_string()),
                TokenKind::Count(3),
                TokenKind::GroupOpen,
                TokenKind::Element("P".to_string()),
                TokenKind::Element("O".to_string()),
                TokenKind::Count(4),
                TokenKind::GroupClose,
                TokenKind::Count(2),
            ]
        );
    }

    #[test]
    fn test_tokenize_multidigit_count() {
        let tokens = tokenize("C123").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Count(123));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_tokenize_empty_formula() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_tokenize_rejects_whitespace() {
        assert_eq!(
            tokenize("H2 O"),
            Err(BruttoError::InvalidCharacter {
                symbol: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn test_tokenize_rejects_lowercase_leading_symbol() {
        assert_eq!(
            tokenize("hO"),
            Err(BruttoError::InvalidCharacter {
                symbol: 'h',
                position: 0
            })
        );
    }

    #[test]
    fn test_tokenize_rejects_other_punctuation() {
        assert_eq!(
            tokenize("Na+"),
            Err(BruttoError::InvalidCharacter {
                symbol: '+',
                position: 2
            })
        );
    }

    #[test]
    fn test_tokenize_count_wider_than_usize() {
        let formula = format!("H{}9", usize::MAX);
        assert!(matches!(
            tokenize(&formula),
            Err(BruttoError::Overflow { .. })
        ));
    }
}
