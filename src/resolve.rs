use crate::data::Dataset;
use crate::error::{ChartError, Result};
use crate::ir::ColumnRoles;

const CATEGORY_KEYWORDS: &[&str] = &["country"];
const ORDINAL_KEYWORDS: &[&str] = &["year"];
const MEASURE_KEYWORDS: &[&str] = &["gdp", "value"];

/// Resolve the three chart roles (category, ordinal, measure) against the
/// dataset headers.
///
/// Each role prefers the first header containing one of its keywords
/// (case-insensitive substring match); otherwise it falls back to a fixed
/// position (0, 1, 2). A fallback that runs off the end of the header list
/// is a schema error. Roles may legitimately land on the same column when
/// one header matches several keyword sets.
pub fn resolve_columns(data: &Dataset) -> Result<ColumnRoles> {
    let category = resolve_role(&data.headers, CATEGORY_KEYWORDS, 0, "category")?;
    let ordinal = resolve_role(&data.headers, ORDINAL_KEYWORDS, 1, "ordinal")?;
    let measure = resolve_role(&data.headers, MEASURE_KEYWORDS, 2, "measure")?;

    Ok(ColumnRoles {
        category,
        ordinal,
        measure,
        category_name: data.headers[category].clone(),
        ordinal_name: data.headers[ordinal].clone(),
        measure_name: data.headers[measure].clone(),
    })
}

/// Keyword scan first, positional fallback second.
fn resolve_role(
    headers: &[String],
    keywords: &[&str],
    fallback: usize,
    role: &str,
) -> Result<usize> {
    let matched = headers.iter().position(|h| {
        let lower = h.to_lowercase();
        keywords.iter().any(|k| lower.contains(k))
    });

    match matched {
        Some(i) => Ok(i),
        None if fallback < headers.len() => Ok(fallback),
        None => Err(ChartError::Schema(format!(
            "cannot infer {} column: no header contains '{}' and column {} does not exist",
            role,
            keywords.join("' or '"),
            fallback + 1,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_data(headers: &[&str]) -> Dataset {
        Dataset::new(headers.iter().map(|h| h.to_string()).collect(), vec![])
    }

    #[test]
    fn test_resolve_by_keyword() {
        let data = make_data(&["Country", "Year", "GDP"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 0);
        assert_eq!(roles.ordinal, 1);
        assert_eq!(roles.measure, 2);
        assert_eq!(roles.measure_name, "GDP");
    }

    #[test]
    fn test_resolve_keywords_beat_position() {
        let data = make_data(&["Metric Value", "Fiscal Year", "Country Name"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 2);
        assert_eq!(roles.ordinal, 1);
        assert_eq!(roles.measure, 0);
    }

    #[test]
    fn test_resolve_case_insensitive_substring() {
        let data = make_data(&["COUNTRY_CODE", "ReportYear", "gdp_usd"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 0);
        assert_eq!(roles.ordinal, 1);
        assert_eq!(roles.measure, 2);
    }

    #[test]
    fn test_resolve_positional_fallback() {
        let data = make_data(&["region", "quarter", "revenue"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 0);
        assert_eq!(roles.ordinal, 1);
        assert_eq!(roles.measure, 2);
        assert_eq!(roles.category_name, "region");
    }

    #[test]
    fn test_resolve_value_keyword() {
        let data = make_data(&["label", "period", "Total Value"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.measure, 2);
        let data = make_data(&["Total Value", "label", "period"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.measure, 0);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let data = make_data(&["country_a", "country_b", "x"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 0);
    }

    #[test]
    fn test_resolve_too_few_columns() {
        let data = make_data(&["Country", "Year"]);
        let err = resolve_columns(&data).unwrap_err();
        assert!(matches!(err, ChartError::Schema(_)));
        assert!(err.to_string().contains("measure"));
    }

    #[test]
    fn test_resolve_two_columns_with_full_keyword_cover() {
        // All three roles can resolve without the positional fallback.
        let data = make_data(&["Country", "Year GDP"]);
        let roles = resolve_columns(&data).unwrap();
        assert_eq!(roles.category, 0);
        assert_eq!(roles.ordinal, 1);
        assert_eq!(roles.measure, 1);
    }
}
