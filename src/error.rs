/// Failure category for a kernel run.
///
/// Every core failure is a deterministic input-validation failure; there are
/// no transient conditions and no retries. The shell maps each kind to a
/// stable process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input: non-positive width/samples-per-unit/sigma, or a
    /// Lanczos kernel size below 1.
    InvalidArgument,
    /// A normalization phase summed to exactly zero.
    DivisionByZero,
    /// Filesystem failure while writing/reading kernel artifacts.
    Io,
}

impl ErrorKind {
    /// Process exit code for this failure category.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::DivisionByZero => 3,
            ErrorKind::Io => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn division_by_zero(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DivisionByZero, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable_per_kind() {
        assert_eq!(AppError::invalid_argument("w").exit_code(), 2);
        assert_eq!(AppError::division_by_zero("p").exit_code(), 3);
        assert_eq!(AppError::io("f").exit_code(), 4);
    }

    #[test]
    fn display_shows_message_only() {
        let err = AppError::invalid_argument("width must be positive");
        assert_eq!(err.to_string(), "width must be positive");
    }
}
