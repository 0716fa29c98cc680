//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL (`window.location.search`)
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Look up `key` in a query string, with or without the leading `?`.
///
/// A key without `=` yields an empty value. Values are URL-decoded.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                return Some(
                    urlencoding::decode(param_value)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| param_value.to_string()),
                );
            }
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}
