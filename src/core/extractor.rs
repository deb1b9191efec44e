use regex::Regex;
use std::sync::LazyLock;

// 變數名稱後面可能接的符號
static TRAILING_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\[\].,;!"')(:%+-]"#).unwrap());

/// A word is a variable when it starts with `$` and is not a property access (`$this->x`).
pub fn is_php_variable(word: &str) -> bool {
    word.starts_with('$') && !word.contains("->")
}

/// Cuts the word at the first bracket, quote, or punctuation symbol.
pub fn strip_trailing_symbols(word: &str) -> &str {
    match TRAILING_SYMBOLS.find(word) {
        Some(m) => &word[..m.start()],
        None => word,
    }
}

/// Variables in order of appearance, duplicates kept.
///
/// Words are separated by single spaces only, so a variable directly after
/// a tab or an opening parenthesis is not picked up.
pub fn extract_variables(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split(' '))
        .filter(|word| is_php_variable(word))
        .map(|word| strip_trailing_symbols(word).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_php_variable() {
        assert!(is_php_variable("$hazekura"));
        assert!(!is_php_variable("$this->hazekura"));
        assert!(!is_php_variable("hazekura"));
        assert!(!is_php_variable("a$hazekura"));
        assert!(!is_php_variable(""));
    }

    #[test]
    fn test_strip_trailing_symbols() {
        for symbol in ["[", "]", ".", ",", ";", "!", "\"", "'", ")", "(", ":", "%", "+", "-"] {
            let word = format!("risarisa{}", symbol);
            assert_eq!(strip_trailing_symbols(&word), "risarisa", "symbol {}", symbol);
        }
        assert_eq!(strip_trailing_symbols("risarisa"), "risarisa");
    }

    #[test]
    fn test_strip_keeps_prefix_before_first_symbol() {
        assert_eq!(strip_trailing_symbols("$items[0];"), "$items");
        assert_eq!(strip_trailing_symbols("$a.$b"), "$a");
        assert_eq!(strip_trailing_symbols("$x=1"), "$x=1");
    }

    #[test]
    fn test_extract_variables_from_line() {
        let vars = extract_variables("    public function __constructor(Bar $bar, Foo $foo): void");
        assert_eq!(vars, vec!["$bar", "$foo"]);
    }

    #[test]
    fn test_extract_skips_property_access() {
        let vars = extract_variables("        $this->bar = $bar;\r\n        return $this->foo;\r\n");
        assert_eq!(vars, vec!["$bar"]);
    }

    #[test]
    fn test_extract_keeps_duplicates_in_order() {
        let vars = extract_variables("$b = 1;\n$a = $b + 1;\n");
        assert_eq!(vars, vec!["$b", "$a", "$b"]);
    }

    #[test]
    fn test_extract_ignores_tab_separated_words() {
        assert!(extract_variables("\t$indented = 1;").is_empty());
    }
}
