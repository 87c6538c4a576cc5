//! Go-specific naming conventions.

use svcgen_codegen::{NamingConvention, naming::escape_with_underscore};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_reserved_words() {
        assert!(GO_NAMING.is_reserved("type"));
        assert!(GO_NAMING.is_reserved("range"));
        assert!(!GO_NAMING.is_reserved("todo"));
        // Predeclared identifiers are not keywords.
        assert!(!GO_NAMING.is_reserved("any"));
    }

    #[test]
    fn test_go_escape_reserved() {
        assert_eq!(GO_NAMING.safe_name("func"), "_func");
        assert_eq!(GO_NAMING.safe_name("dtd"), "dtd");
    }
}
