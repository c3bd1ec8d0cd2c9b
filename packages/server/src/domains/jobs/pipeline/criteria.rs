use serde::{Deserialize, Serialize};

use crate::domains::jobs::data::parse_number;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortKey {
    /// Most recently posted first.
    #[default]
    Date,
    SalaryHigh,
    SalaryLow,
    Title,
}

impl SortKey {
    /// Unrecognized keys fall back to `Date`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "salary-high" => SortKey::SalaryHigh,
            "salary-low" => SortKey::SalaryLow,
            "title" => SortKey::Title,
            _ => SortKey::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::SalaryHigh => "salary-high",
            SortKey::SalaryLow => "salary-low",
            SortKey::Title => "title",
        }
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        SortKey::parse(&raw)
    }
}

/// Filter and sort parameters for a listing query.
///
/// Salary bounds are kept as the raw text the user typed; a bound that does
/// not parse to a finite number is ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCriteria {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_min: Option<String>,
    #[serde(default)]
    pub salary_max: Option<String>,
    #[serde(default)]
    pub sort_by: SortKey,
}

impl JobCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_salary_min(mut self, min: impl Into<String>) -> Self {
        self.salary_min = Some(min.into());
        self
    }

    pub fn with_salary_max(mut self, max: impl Into<String>) -> Self {
        self.salary_max = Some(max.into());
        self
    }

    pub fn sorted_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Lowercased search text, or `None` when empty.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn location_filter(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    pub fn min_salary(&self) -> Option<f64> {
        self.salary_min.as_deref().and_then(parse_number)
    }

    pub fn max_salary(&self) -> Option<f64> {
        self.salary_max.as_deref().and_then(parse_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_falls_back_to_date() {
        assert_eq!(SortKey::parse("salary-high"), SortKey::SalaryHigh);
        assert_eq!(SortKey::parse("salary-low"), SortKey::SalaryLow);
        assert_eq!(SortKey::parse("title"), SortKey::Title);
        assert_eq!(SortKey::parse("date"), SortKey::Date);
        assert_eq!(SortKey::parse("popularity"), SortKey::Date);
        assert_eq!(SortKey::parse(""), SortKey::Date);
    }

    #[test]
    fn sort_key_round_trips_through_its_name() {
        for key in [
            SortKey::Date,
            SortKey::SalaryHigh,
            SortKey::SalaryLow,
            SortKey::Title,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), key);
            assert_eq!(
                serde_json::to_string(&key).unwrap(),
                format!("\"{}\"", key.as_str())
            );
        }
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let criteria: JobCriteria = serde_json::from_str(
            r#"{"search": "cook", "salaryMin": "15", "sortBy": "salary-low"}"#,
        )
        .unwrap();

        assert_eq!(criteria.search.as_deref(), Some("cook"));
        assert_eq!(criteria.min_salary(), Some(15.0));
        assert_eq!(criteria.max_salary(), None);
        assert_eq!(criteria.sort_by, SortKey::SalaryLow);
    }

    #[test]
    fn empty_and_unparsable_values_are_absent() {
        let criteria = JobCriteria::default()
            .with_search("")
            .with_location("")
            .with_salary_min("abc")
            .with_salary_max("  ");

        assert_eq!(criteria.search_term(), None);
        assert_eq!(criteria.location_filter(), None);
        assert_eq!(criteria.min_salary(), None);
        assert_eq!(criteria.max_salary(), None);
    }

    #[test]
    fn search_term_is_lowercased() {
        let criteria = JobCriteria::default().with_search("CoOk");
        assert_eq!(criteria.search_term().as_deref(), Some("cook"));
    }
}
