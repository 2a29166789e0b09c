//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Quote a name for use as a dot-language identifier
///
/// Dot IDs containing anything beyond alphanumerics and underscores must be
/// double-quoted, and embedded quotes and backslashes escaped.
pub fn quote_dot_id(name: &str) -> String {
    let escaped: String = name
        .chars()
        .flat_map(|c| match c {
            '"' | '\\' => vec!['\\', c],
            _ => vec![c],
        })
        .collect();
    format!("\"{escaped}\"")
}
