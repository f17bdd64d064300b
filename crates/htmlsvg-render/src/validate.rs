/// Checks the canonical XHTML before it is embedded.
///
/// The synthesizer returns the validator's error value unchanged, so implementations pick
/// whatever error type their callers need to see.
pub trait DocumentValidator {
    type Error;

    fn validate(&self, xhtml: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid XHTML: {message}")]
    InvalidXhtml { message: String },
}

/// Rejects markup that is not well-formed XML (a `foreignObject` with such content paints
/// nothing).
#[derive(Debug, Clone, Copy, Default)]
pub struct WellFormedXhtml;

impl DocumentValidator for WellFormedXhtml {
    type Error = ValidationError;

    fn validate(&self, xhtml: &str) -> Result<(), ValidationError> {
        roxmltree::Document::parse(xhtml)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidXhtml {
                message: e.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoValidation;

impl DocumentValidator for NoValidation {
    type Error = std::convert::Infallible;

    fn validate(&self, _xhtml: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_xhtml_passes() {
        let xhtml = r#"<html xmlns="http://www.w3.org/1999/xhtml"><head><title/></head><body>ok</body></html>"#;
        assert_eq!(WellFormedXhtml.validate(xhtml), Ok(()));
    }

    #[test]
    fn malformed_xhtml_is_rejected() {
        let err = WellFormedXhtml
            .validate("<html><body><p></body></html>")
            .unwrap_err();
        let ValidationError::InvalidXhtml { message } = &err;
        assert!(!message.is_empty());
        assert!(err.to_string().starts_with("Invalid XHTML: "));
    }
}
