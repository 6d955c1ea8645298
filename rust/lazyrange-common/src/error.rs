use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if this error was raised while constructing an adaptor
    /// or range with an invalid parameter.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration { .. })
    }

    pub fn configuration(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Configuration {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A range or adaptor was constructed with a parameter it cannot work with,
    /// such as a zero integer-range step or a non-positive stride.
    #[error("invalid configuration of {name}: {message}")]
    Configuration { name: String, message: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
