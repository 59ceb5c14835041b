use crate::core::ProcessRecord;

/// Admin dashboard filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessFilter {
    pub company: Option<String>,
    pub industry: Option<String>,
    pub value_score: Option<String>,
    pub feasibility_score: Option<String>,
    pub action_signal: Option<String>,
    pub status: Option<String>,
    /// Case-insensitive substring of name, company or industry
    pub search: Option<String>,
}

fn field_matches(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted.as_str()),
    }
}

impl ProcessFilter {
    pub fn matches(&self, process: &ProcessRecord) -> bool {
        field_matches(&self.company, Some(process.company.as_str()))
            && field_matches(&self.industry, process.industry.as_deref())
            && field_matches(&self.value_score, process.value_score.as_deref())
            && field_matches(&self.feasibility_score, process.feasibility_score.as_deref())
            && field_matches(&self.action_signal, process.action_signal.as_deref())
            && field_matches(&self.status, process.status.as_deref())
            && self.matches_search(process)
    }

    fn matches_search(&self, process: &ProcessRecord) -> bool {
        let Some(term) = self.search.as_deref().map(str::to_lowercase) else {
            return true;
        };
        process.name.to_lowercase().contains(&term)
            || process.company.to_lowercase().contains(&term)
            || process
                .industry
                .as_deref()
                .is_some_and(|industry| industry.to_lowercase().contains(&term))
    }

    pub fn apply<'a>(&self, processes: &'a [ProcessRecord]) -> Vec<&'a ProcessRecord> {
        processes.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(name: &str, company: &str, industry: Option<&str>) -> ProcessRecord {
        ProcessRecord {
            company: company.to_string(),
            industry: industry.map(str::to_string),
            ..ProcessRecord::new(name.to_lowercase(), name)
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let p = process("Payroll", "Acme", None);
        assert!(ProcessFilter::default().matches(&p));
    }

    #[test]
    fn test_exact_field_filters() {
        let mut p = process("Payroll", "Acme", Some("Retail"));
        p.value_score = Some("High".to_string());

        let filter = ProcessFilter {
            company: Some("Acme".to_string()),
            value_score: Some("High".to_string()),
            ..ProcessFilter::default()
        };
        assert!(filter.matches(&p));

        let filter = ProcessFilter {
            feasibility_score: Some("Low".to_string()),
            ..ProcessFilter::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let processes = vec![
            process("Invoice Matching", "Acme", Some("Logistics")),
            process("Payroll", "Globex", Some("Retail")),
            process("Onboarding", "Initech", None),
        ];
        let by_industry = ProcessFilter {
            search: Some("RETAIL".to_string()),
            ..ProcessFilter::default()
        };
        let names: Vec<_> = by_industry
            .apply(&processes)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Payroll"]);

        let by_company = ProcessFilter {
            search: Some("init".to_string()),
            ..ProcessFilter::default()
        };
        assert_eq!(by_company.apply(&processes).len(), 1);
    }
}
