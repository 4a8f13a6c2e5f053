use super::super::domain::{Session, Speaker};
use super::config::EligibilityRules;

pub(crate) fn is_outdated_topic(session: &Session, rules: &EligibilityRules) -> bool {
    session.covers_any_topic(&rules.outdated_topics)
}

pub(crate) fn is_outdated_browser(speaker: &Speaker, rules: &EligibilityRules) -> bool {
    rules.is_legacy_browser(&speaker.browser.name)
        && speaker.browser.major_version < rules.min_browser_major_version
}

pub(crate) fn has_legacy_email(speaker: &Speaker, rules: &EligibilityRules) -> bool {
    rules.is_legacy_email_domain(speaker.email_domain())
}

pub(crate) fn works_for_prestige_employer(speaker: &Speaker, rules: &EligibilityRules) -> bool {
    speaker
        .employer
        .as_deref()
        .map(|employer| rules.is_prestige_employer(employer))
        .unwrap_or(false)
}

/// Either signal on its own is enough; a prestige employer is handled by
/// [`appears_exceptional`], which always overrides red flags.
pub(crate) fn has_red_flags(speaker: &Speaker, rules: &EligibilityRules) -> bool {
    has_legacy_email(speaker, rules) || is_outdated_browser(speaker, rules)
}

pub(crate) fn appears_exceptional(speaker: &Speaker, rules: &EligibilityRules) -> bool {
    works_for_prestige_employer(speaker, rules)
        || speaker.has_blog
        || speaker.certifications.len() >= rules.min_certifications
        || speaker.years_experience >= rules.min_years_experience
}
