//! Query string and cookie splitting.

use std::collections::HashMap;

/// Parses a URL query string into a map of decoded keys and values.
///
/// Uses form-urlencoded rules: `+` decodes to a space and `%XX` escapes are
/// resolved. A key without `=` maps to an empty value, and so does an empty
/// pair (`a=1&&b=2` yields an `""` key). When a key repeats the last value wins.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        // form_urlencoded skips empty input, so an empty pair is mapped by hand
        let (key, value) = url::form_urlencoded::parse(pair.as_bytes())
            .into_owned()
            .next()
            .unwrap_or_default();
        params.insert(key, value);
    }

    params
}

/// Parses a `Cookie` header value into a name → value map.
///
/// Pairs are separated by `;` and split on the first `=`. Fragments without
/// `=` are ignored. Values are not unescaped.
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}
