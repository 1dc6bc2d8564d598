/// Parse and normalize a comma-separated extension list.
///
/// Each extension must start with a dot. Whitespace around entries is
/// trimmed and empty entries are dropped.
///
/// # Errors
///
/// Returns an error message if the list is empty or an entry lacks its dot.
pub fn parse_extensions(s: &str) -> Result<String, String> {
    let extensions: Vec<&str> = s
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();

    if extensions.is_empty() {
        return Err("Extension list cannot be empty".to_string());
    }

    if let Some(bad) = extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
        return Err(format!(
            "Extensions must start with a dot, like '.js': '{}'",
            bad
        ));
    }

    Ok(extensions.join(","))
}
