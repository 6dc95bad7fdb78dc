//! Free-form command string parsing.

use std::collections::HashMap;

/// Parse a whitespace-separated `key:value` command string into a map.
///
/// Keys are lowercased. The value for `action` is upper-cased; all other
/// values pass through unmodified so case-sensitive product and price
/// tokens survive. Tokens without a colon are ignored. When a key appears
/// more than once, the last occurrence wins.
pub fn parse_command(input: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for token in input.split_whitespace() {
        if let Some((key, value)) = token.split_once(':') {
            let key = key.to_lowercase();
            let value = if key == "action" {
                value.to_uppercase()
            } else {
                value.to_string()
            };
            params.insert(key, value);
        }
    }

    params
}
