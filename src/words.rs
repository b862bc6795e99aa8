use std::collections::BTreeSet;

/// Splits content on whitespace and collapses duplicates.
///
/// Tokens are kept exactly as written: no case folding, no punctuation
/// stripping. The set is ordered so anything summing over it does so in a
/// stable order.
pub fn unique_words(content: &str) -> BTreeSet<String> {
    content.split_whitespace().map(str::to_string).collect()
}
