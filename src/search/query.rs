use super::types::{MatchType, QuerySpec, WeightedField};

/// Fields searched by a free-text query, in the order they are sent.
///
/// Title hits weigh the most, then tags. Everything else counts once.
pub const FIELD_BOOSTS: [WeightedField; 8] = [
    WeightedField { name: "Title", boost: 3.0 },
    WeightedField { name: "Tags", boost: 2.0 },
    WeightedField { name: "TenderNumber", boost: 1.0 },
    WeightedField { name: "Description", boost: 1.0 },
    WeightedField { name: "AISummary", boost: 1.0 },
    WeightedField { name: "Source", boost: 1.0 },
    WeightedField { name: "Province", boost: 1.0 },
    WeightedField { name: "Category", boost: 1.0 },
];

/// Turns the raw query text into the query to run.
///
/// Blank input browses the whole index; anything else becomes a best-fields
/// multi-match over [`FIELD_BOOSTS`]. The text is passed on as typed, the
/// engine does its own analysis.
pub fn build_query(query: &str) -> QuerySpec {
    if query.trim().is_empty() {
        return QuerySpec::MatchAll;
    }

    QuerySpec::MultiMatch {
        terms: query.to_string(),
        fields: FIELD_BOOSTS.to_vec(),
        match_type: MatchType::BestFields,
    }
}
