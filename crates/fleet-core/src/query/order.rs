//! Sort-string parsing and deterministic ordering.

use crate::types::sorting::{AllowList, SortDirection, SortError, SortField};

/// Ordering rules for one record kind.
#[derive(Debug)]
pub struct SortPolicy<C: 'static> {
    /// Sortable fields.
    pub allow_list: &'static AllowList<C>,
    /// Tokens used when the caller gives no sort, e.g. `["-updated_at", "id"]`.
    pub default_sort: &'static [&'static str],
    /// Field appended ascending as the final tiebreaker.
    pub stable_key: &'static str,
}

impl<C: Copy> SortPolicy<C> {
    /// Resolve a caller-supplied sort string into the final ordering.
    ///
    /// An empty or absent string falls back to `default_sort`; the stable key
    /// is appended in both cases.
    pub fn resolve(&self, sort: Option<&str>) -> Result<Vec<SortField<C>>, SortError> {
        let mut parsed = parse_sort(sort, self.allow_list)?;
        if parsed.is_empty() {
            parsed = parse_tokens(self.default_sort.iter().copied(), self.allow_list)?;
        }
        Ok(build_order(parsed, self.allow_list, self.stable_key))
    }
}

/// Parse `"driver_name,-created_at"` into ordered terms.
///
/// Tokens are trimmed and empty ones dropped. A leading `-` selects
/// descending order. Repeated fields keep their first occurrence only.
pub fn parse_sort<C: Copy>(
    spec: Option<&str>,
    allow_list: &AllowList<C>,
) -> Result<Vec<SortField<C>>, SortError> {
    match spec {
        Some(spec) => parse_tokens(spec.split(','), allow_list),
        None => Ok(Vec::new()),
    }
}

fn parse_tokens<'a, C: Copy>(
    tokens: impl Iterator<Item = &'a str>,
    allow_list: &AllowList<C>,
) -> Result<Vec<SortField<C>>, SortError> {
    let mut fields: Vec<SortField<C>> = Vec::new();

    for token in tokens.map(str::trim).filter(|t| !t.is_empty()) {
        let (direction, key) = match token.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, token),
        };

        let (name, column) =
            allow_list
                .resolve(key)
                .ok_or_else(|| SortError::InvalidSortField {
                    field: key.to_string(),
                    allowed: allow_list
                        .sorted_names()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                })?;

        if fields.iter().any(|f| f.name == name) {
            continue;
        }
        fields.push(SortField {
            name,
            column,
            direction,
        });
    }

    Ok(fields)
}

/// Append the stable key ascending unless it is already part of the order.
///
/// An empty or unknown `stable_key` leaves the order untouched.
pub fn build_order<C: Copy>(
    mut parsed: Vec<SortField<C>>,
    allow_list: &AllowList<C>,
    stable_key: &str,
) -> Vec<SortField<C>> {
    if stable_key.is_empty() || parsed.iter().any(|f| f.name == stable_key) {
        return parsed;
    }
    if let Some((name, column)) = allow_list.resolve(stable_key) {
        parsed.push(SortField::asc(name, column));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Id,
        Name,
        CreatedAt,
        UpdatedAt,
    }

    static ALLOW: AllowList<Col> = AllowList::new(&[
        ("id", Col::Id),
        ("name", Col::Name),
        ("created_at", Col::CreatedAt),
        ("updated_at", Col::UpdatedAt),
    ]);

    static NAME_ONLY: AllowList<Col> = AllowList::new(&[("name", Col::Name)]);

    static POLICY: SortPolicy<Col> = SortPolicy {
        allow_list: &ALLOW,
        default_sort: &["-updated_at", "id"],
        stable_key: "id",
    };

    fn pairs(fields: &[SortField<Col>]) -> Vec<(Col, SortDirection)> {
        fields.iter().map(|f| (f.column, f.direction)).collect()
    }

    #[test]
    fn test_empty_spec_is_empty() {
        assert!(parse_sort(None, &ALLOW).unwrap().is_empty());
        assert!(parse_sort(Some(""), &ALLOW).unwrap().is_empty());
        assert!(parse_sort(Some(" , ,"), &ALLOW).unwrap().is_empty());
    }

    #[test]
    fn test_preserves_token_order_and_direction() {
        let fields = parse_sort(Some("name,-created_at"), &ALLOW).unwrap();
        assert_eq!(
            pairs(&fields),
            vec![
                (Col::Name, SortDirection::Asc),
                (Col::CreatedAt, SortDirection::Desc)
            ]
        );
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let fields = parse_sort(Some("  -name ,  id "), &ALLOW).unwrap();
        assert_eq!(
            pairs(&fields),
            vec![(Col::Name, SortDirection::Desc), (Col::Id, SortDirection::Asc)]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_sort(Some("bogus"), &NAME_ONLY).unwrap_err();
        assert_eq!(
            err,
            SortError::InvalidSortField {
                field: "bogus".into(),
                allowed: vec!["name".into()],
            }
        );
    }

    #[test]
    fn test_unknown_descending_field_reports_bare_name() {
        let err = parse_sort(Some("name,-bogus"), &ALLOW).unwrap_err();
        let SortError::InvalidSortField { field, allowed } = err;
        assert_eq!(field, "bogus");
        assert_eq!(allowed, vec!["created_at", "id", "name", "updated_at"]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let fields = parse_sort(Some("name,name,-name"), &NAME_ONLY).unwrap();
        assert_eq!(pairs(&fields), vec![(Col::Name, SortDirection::Asc)]);
    }

    #[test]
    fn test_build_order_appends_stable_key() {
        let order = build_order(Vec::new(), &ALLOW, "id");
        assert_eq!(pairs(&order), vec![(Col::Id, SortDirection::Asc)]);

        let order = build_order(parse_sort(Some("-name"), &ALLOW).unwrap(), &ALLOW, "id");
        assert_eq!(
            pairs(&order),
            vec![(Col::Name, SortDirection::Desc), (Col::Id, SortDirection::Asc)]
        );
    }

    #[test]
    fn test_build_order_does_not_duplicate_stable_key() {
        let order = build_order(vec![SortField::desc("id", Col::Id)], &ALLOW, "id");
        assert_eq!(pairs(&order), vec![(Col::Id, SortDirection::Desc)]);
    }

    #[test]
    fn test_build_order_ignores_empty_or_unknown_key() {
        assert!(build_order(Vec::new(), &ALLOW, "").is_empty());
        assert!(build_order(Vec::new(), &NAME_ONLY, "id").is_empty());
    }

    #[test]
    fn test_policy_default_order() {
        let order = POLICY.resolve(None).unwrap();
        assert_eq!(
            pairs(&order),
            vec![
                (Col::UpdatedAt, SortDirection::Desc),
                (Col::Id, SortDirection::Asc)
            ]
        );
        assert_eq!(POLICY.resolve(Some("  ")).unwrap(), order);
    }

    #[test]
    fn test_policy_caller_order_gets_tiebreaker() {
        let order = POLICY.resolve(Some("name")).unwrap();
        assert_eq!(
            pairs(&order),
            vec![(Col::Name, SortDirection::Asc), (Col::Id, SortDirection::Asc)]
        );
    }

    #[test]
    fn test_policy_propagates_invalid_field() {
        assert!(POLICY.resolve(Some("name,nope")).is_err());
    }
}
