use crate::parse::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a [DiceExpression](crate::DiceExpression) could not be built.
///
/// Once built, an expression never fails to report its bounds or to roll.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("the input expression has not been passed")]
    MissingInput,
    /// Only produced by `DiceExpression::from_json`, so it cannot occur without the `serde`
    /// feature.
    #[error("the input expression must be a string, found {found}")]
    InvalidType { found: &'static str },
    #[error("the input expression '{input}' is not valid: {source}")]
    InvalidExpression {
        input: String,
        #[source]
        source: ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::MissingInput.to_string(),
            "the input expression has not been passed"
        );
        assert_eq!(
            Error::InvalidType { found: "number" }.to_string(),
            "the input expression must be a string, found number"
        );
    }

    #[test]
    fn test_invalid_expression_names_the_input() {
        let source = crate::parse::parse("ssss").unwrap_err();
        let err = Error::InvalidExpression {
            input: "ssss".to_owned(),
            source: source.clone(),
        };
        assert!(err.to_string().starts_with("the input expression 'ssss' is not valid: "));
        assert_eq!(err.source().map(|e| e.to_string()), Some(source.to_string()));
    }
}
