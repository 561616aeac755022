use crate::core::filters::FilterState;
use crate::core::pagination::Pagination;
use url::form_urlencoded;

/// Derives the ordered `GET /cars` query from a state snapshot.
///
/// Order is fixed: `page`, `per_page`, `min_price`, `max_price`, then one
/// `make=`/`model=`/`state=` pair per selected entry in sorted order. Empty
/// dimensions contribute no pairs at all; absence means "unrestricted" to
/// the backend. Identical inputs always yield the identical sequence.
pub fn build(filters: &FilterState, pagination: &Pagination) -> Vec<(String, String)> {
    let price = filters.price();
    let mut pairs = vec![
        ("page".to_string(), pagination.page().to_string()),
        ("per_page".to_string(), pagination.per_page().to_string()),
        ("min_price".to_string(), price.min.to_string()),
        ("max_price".to_string(), price.max.to_string()),
    ];
    for make in filters.makes() {
        pairs.push(("make".to_string(), make.clone()));
    }
    for model in filters.models() {
        pairs.push(("model".to_string(), model.clone()));
    }
    for state in filters.states() {
        pairs.push(("state".to_string(), state.clone()));
    }
    pairs
}

/// Percent-encodes the pairs into a query string.
pub fn encode(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
