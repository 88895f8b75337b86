//! Destination scope matching.

/// True if a cost item scoped `item_scope` applies to `destination`.
///
/// Scopes are a destination code followed by a wildcard marker (`"LUB*"`).
/// Matching is a case-sensitive literal prefix test: the scope must begin
/// with the destination code. There is no global wildcard; `"*"` matches
/// nothing.
#[inline]
pub fn matches_scope(item_scope: &str, destination: &str) -> bool {
    item_scope.starts_with(destination)
}
