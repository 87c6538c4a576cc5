//! Target-language naming rules.

/// How a target language protects identifiers that collide with its
/// reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "_type")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}

/// Escape by prefixing an underscore.
pub fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        reserved_words: &["func", "type"],
        escape_reserved: escape_with_underscore,
    };

    #[test]
    fn test_safe_name() {
        assert!(TEST_NAMING.is_reserved("type"));
        assert_eq!(TEST_NAMING.safe_name("type"), "_type");
        assert_eq!(TEST_NAMING.safe_name("todo"), "todo");
    }
}
