use crate::foundation::error::LiveError;
use std::fmt;

/// Rejection of a script by the compiler. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub line: usize,
    pub offset: usize,
    pub message: String,
}

impl CompileError {
    pub(crate) fn at(src: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(src.len());
        let line = src.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1;
        Self {
            line,
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for CompileError {}

impl From<CompileError> for LiveError {
    fn from(e: CompileError) -> Self {
        LiveError::compile(e.to_string())
    }
}

/// A routine failed while it was being invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFailure {
    pub message: String,
}

impl RuntimeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RuntimeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuntimeFailure {}

impl From<RuntimeFailure> for LiveError {
    fn from(e: RuntimeFailure) -> Self {
        LiveError::runtime(e.message)
    }
}
