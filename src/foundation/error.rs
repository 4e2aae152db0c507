/// Result alias used across the crate's public surface.
pub type LiveResult<T> = Result<T, LiveError>;

/// Error taxonomy of the live-coding engine.
///
/// `Syntax` and `Compile` abort a source update, `Runtime` triggers a fallback to the last
/// stable routine, `Lex` is only ever produced by the autocoder's tokenizer and is absorbed.
#[derive(thiserror::Error, Debug)]
pub enum LiveError {
    /// Delimiter imbalance or forbidden construct detected before compilation.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The script compiler rejected the transformed text.
    #[error("compile error: {0}")]
    Compile(String),

    /// The active routine failed while running a frame.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The autocoder's tokenizer found no rule for the remaining input.
    #[error("lex error: {0}")]
    Lex(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LiveError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub fn lex(msg: impl Into<String>) -> Self {
        Self::Lex(msg.into())
    }

    /// Message as shown to the user, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Syntax(m) | Self::Compile(m) | Self::Runtime(m) | Self::Lex(m) => m.clone(),
            Self::Other(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
