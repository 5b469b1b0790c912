mod lifestyle;
mod neighborhood;
mod transport;

pub use lifestyle::LifestyleOption;
pub use neighborhood::Neighborhood;
pub use transport::TransportOption;

/// Lowercase and drop everything but letters and digits, so "uber bolt",
/// "Uber/Bolt" and "uberbolt" compare equal.
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Exact (normalized) match first, then a prefix that matches exactly one option.
fn find_by_name<'a, T>(options: &'a [T], query: &str, name: impl Fn(&T) -> &str) -> Option<&'a T> {
    let wanted = normalize_name(query);
    if wanted.is_empty() {
        return None;
    }
    if let Some(exact) = options.iter().find(|o| normalize_name(name(o)) == wanted) {
        return Some(exact);
    }
    let mut prefixed = options
        .iter()
        .filter(|o| normalize_name(name(o)).starts_with(&wanted));
    match (prefixed.next(), prefixed.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
