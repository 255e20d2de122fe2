#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The shutdown future passed to `SnakeGame::run` resolved.
    Cancelled,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Cancelled => write!(f, "Game loop cancelled"),
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid direction '{}'", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}
