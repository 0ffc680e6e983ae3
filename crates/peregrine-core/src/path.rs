use serde_json::Value;

/// Extract the node at a dot-delimited `path` from an untyped response tree.
///
/// Walks one segment at a time and returns `None` as soon as a key is
/// absent. A non-leaf node that is not an object breaks the response shape
/// contract; that case is logged as a warning and treated as absent rather
/// than a hard failure. The leaf is returned untyped; verifying it against
/// the expected type is the caller's job.
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        let map = match current.as_object() {
            Some(map) => map,
            None => {
                tracing::warn!(
                    path,
                    segment,
                    "expected an object while walking response tree"
                );
                return None;
            }
        };
        current = map.get(segment)?;
    }
    Some(current)
}

/// Extract a string leaf at `path`, or `None` when absent or not a string.
pub fn lookup_str<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    lookup(tree, path).and_then(Value::as_str)
}
