use serde::{Deserialize, Serialize};

/// Denylists and thresholds the eligibility rules are evaluated against.
///
/// Missing keys in a deserialized document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityRules {
    pub outdated_topics: Vec<String>,
    pub legacy_email_domains: Vec<String>,
    pub prestige_employers: Vec<String>,
    pub legacy_browsers: Vec<String>,
    pub min_certifications: usize,
    pub min_years_experience: u32,
    pub min_browser_major_version: u32,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            outdated_topics: vec!["Cobol".to_string()],
            legacy_email_domains: vec!["aol.com".to_string()],
            prestige_employers: vec!["Microsoft".to_string()],
            legacy_browsers: vec![
                "IE".to_string(),
                "Internet Explorer".to_string(),
                "InternetExplorer".to_string(),
            ],
            min_certifications: 3,
            min_years_experience: 10,
            min_browser_major_version: 9,
        }
    }
}

impl EligibilityRules {
    pub(crate) fn is_prestige_employer(&self, employer: &str) -> bool {
        contains_ignore_case(&self.prestige_employers, employer)
    }

    pub(crate) fn is_legacy_email_domain(&self, domain: &str) -> bool {
        contains_ignore_case(&self.legacy_email_domains, domain)
    }

    pub(crate) fn is_legacy_browser(&self, name: &str) -> bool {
        contains_ignore_case(&self.legacy_browsers, name)
    }
}

fn contains_ignore_case(list: &[String], value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && list.iter().any(|entry| entry.trim().eq_ignore_ascii_case(value))
}
