use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequired { field: &'static str },
    Empty { field: &'static str },
    InvalidHeaderValue { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { field } => write!(f, "{field} is required"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::MissingRequired { field: "location" };
        assert_eq!(err.to_string(), "location is required");

        let err = ValidationError::Empty { field: "id" };
        assert_eq!(err.to_string(), "id must not be empty");

        let err = ValidationError::InvalidHeaderValue { field: "api_key" };
        assert_eq!(
            err.to_string(),
            "api_key contains characters not allowed in an HTTP header"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
