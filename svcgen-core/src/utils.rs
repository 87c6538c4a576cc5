//! Shared string utilities.

/// Uppercase the first letter of the token and of each internal word.
///
/// ASCII characters other than letters, digits and `_` separate words, so
/// `"gene ontology"` becomes `"Gene Ontology"` while `"gene_ontology"`
/// becomes `"Gene_ontology"`. Outside ASCII only whitespace separates words.
/// Letters that are already uppercase are left alone. Digraph letters with
/// a distinct titlecase form get their uppercase form.
///
/// This is the only routine that produces the capitalized service name.
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    result
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("todo"), "Todo");
        assert_eq!(to_title_case("user"), "User");
        assert_eq!(to_title_case("hElLo"), "HElLo");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_to_title_case_internal_words() {
        assert_eq!(to_title_case("gene ontology"), "Gene Ontology");
        assert_eq!(to_title_case("user-role"), "User-Role");
        assert_eq!(to_title_case("a.b.c"), "A.B.C");
    }

    #[test]
    fn test_to_title_case_keeps_underscore_words() {
        assert_eq!(to_title_case("gene_ontology"), "Gene_ontology");
        assert_eq!(to_title_case("stock2order"), "Stock2order");
    }

    #[test]
    fn test_non_ascii_punctuation_does_not_split_words() {
        assert_eq!(to_title_case("café·bar"), "Café·bar");
        assert_eq!(to_title_case("«todo»"), "«todo»");
    }

    #[test]
    fn test_non_ascii_whitespace_splits_words() {
        assert_eq!(to_title_case("über\u{a0}straße"), "Über\u{a0}Straße");
        assert_eq!(to_title_case("ärger"), "Ärger");
    }
}
