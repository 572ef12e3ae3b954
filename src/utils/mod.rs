/// Configuration constants for the application
pub mod config {
    /// Title of the desktop window
    pub const WINDOW_TITLE: &str = "Searchable Input";

    /// Hint text shown in an empty field
    pub const DEFAULT_PLACEHOLDER: &str = "Search...";

    /// Namespaces offered when no cluster is reachable
    pub const FALLBACK_NAMESPACES: &[&str] = &["default", "kube-public", "kube-system"];

    /// Static options for the fruit picker
    pub const DEMO_FRUITS: &[&str] = &[
        "Apple",
        "Apricot",
        "Banana",
        "Blueberry",
        "Cherry",
        "Grape",
        "Mango",
        "Pineapple",
    ];
}

/// Convert a list of string constants into owned option strings
pub fn to_options(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_options() {
        assert_eq!(to_options(&["a", "b"]), vec!["a".to_string(), "b".to_string()]);
        assert!(to_options(&[]).is_empty());
    }

    #[test]
    fn test_fallback_namespaces_include_default() {
        assert!(config::FALLBACK_NAMESPACES.contains(&"default"));
    }
}
