/// Returns the options that contain `value` as a case-insensitive substring.
///
/// An empty `value` returns every option. Order is preserved and duplicates are kept.
pub fn filter_options(value: &str, options: &[String]) -> Vec<String> {
    if value.is_empty() {
        return options.to_vec();
    }

    let needle = value.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
