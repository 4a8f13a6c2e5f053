use std::fmt;

use serde::{Deserialize, Serialize};

use super::evaluation::{EligibilityEvaluator, RegistrationError};
use super::repository::SpeakerRepository;

/// Identifier generated by storage for a registered speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeakerId(pub u64);

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Browser the speaker registered with, used to spot outdated tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub name: String,
    pub major_version: u32,
}

impl Browser {
    pub fn new(name: impl Into<String>, major_version: u32) -> Self {
        Self {
            name: name.into(),
            major_version,
        }
    }
}

/// A proposed talk. Fields are private so a session cannot change after review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    title: String,
    description: String,
}

impl Session {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the title or description mentions any of `topics`, ignoring case.
    pub fn covers_any_topic<S: AsRef<str>>(&self, topics: &[S]) -> bool {
        let title = self.title.to_lowercase();
        let description = self.description.to_lowercase();
        topics.iter().any(|topic| {
            let topic = topic.as_ref().trim().to_lowercase();
            !topic.is_empty() && (title.contains(&topic) || description.contains(&topic))
        })
    }
}

/// Speaker profile submitted for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub has_blog: bool,
    #[serde(default)]
    pub blog_url: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub browser: Browser,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Speaker {
    /// Domain portion of the email address, i.e. everything after the last `@`.
    ///
    /// An address without `@` is returned whole.
    pub fn email_domain(&self) -> &str {
        match self.email.rsplit_once('@') {
            Some((_, domain)) => domain,
            None => &self.email,
        }
    }

    /// Register this speaker against the default eligibility rules.
    pub fn register<R>(&self, repository: &R) -> Result<SpeakerId, RegistrationError>
    where
        R: SpeakerRepository + ?Sized,
    {
        EligibilityEvaluator::default().register(self, repository)
    }
}

/// Fields that must be present before any eligibility rule runs, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredField::FirstName => "first_name",
            RequiredField::LastName => "last_name",
            RequiredField::Email => "email",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Review result for a single proposed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReview {
    pub title: String,
    pub approved: bool,
}
