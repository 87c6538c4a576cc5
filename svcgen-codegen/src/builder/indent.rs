//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Tab character, as written by gofmt.
    #[default]
    Tab,
}

impl Indent {
    /// Tab indentation (Go, gofmt).
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "\t",
        }
    }

    /// The string for `level` nested indent levels.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}
