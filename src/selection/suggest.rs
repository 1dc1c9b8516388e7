//! Name suggestions for partially typed input.

use crate::dataset::Dataset;
use crate::division::Division;

/// Maximum number of suggestions returned for one query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Returns up to [`SUGGESTION_LIMIT`] divisions whose name contains `input`.
///
/// Matching is a case-insensitive substring test on the trimmed input, so
/// prefixes match too. Results are in Korean dictionary order; precomposed
/// Hangul syllables are encoded in 가나다 order, so code-point order of
/// the lowercased name gives it directly. Equal names keep file order.
/// Blank input yields nothing.
pub fn suggest<'a>(dataset: &'a Dataset, input: &str) -> Vec<&'a Division> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(String, &'a Division)> = dataset
        .divisions()
        .iter()
        .filter_map(|d| {
            let folded = d.name.to_lowercase();
            folded.contains(&query).then_some((folded, d))
        })
        .collect();

    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));
    matches.truncate(SUGGESTION_LIMIT);
    matches.into_iter().map(|(_, d)| d).collect()
}
