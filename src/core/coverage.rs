use super::index::TranslationIndex;

/// A key that lacks text in some of the discovered languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub key: String,
    /// Languages without a translation, in first-seen language order.
    pub missing_in: Vec<String>,
}

/// Find keys that are not translated into every language of the index.
///
/// A key without any translation lists every language. Gaps are informational;
/// they never stop generation.
pub fn find_coverage_gaps(index: &TranslationIndex) -> Vec<CoverageGap> {
    let languages: Vec<&str> = index.languages().collect();

    index
        .iter()
        .filter_map(|(key, descriptor)| {
            let missing_in: Vec<String> = languages
                .iter()
                .filter(|lang| descriptor.text(lang).is_none())
                .map(|lang| lang.to_string())
                .collect();

            if missing_in.is_empty() {
                None
            } else {
                Some(CoverageGap {
                    key: key.to_string(),
                    missing_in,
                })
            }
        })
        .collect()
}
