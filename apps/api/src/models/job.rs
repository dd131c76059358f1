use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Head-count bucket a posting is filed under. Drives the vibe score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-1000")]
    Large,
    #[serde(rename = "1000-5000")]
    Enterprise,
    #[serde(rename = "5000+")]
    Global,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Micro => "1-10",
            CompanySize::Small => "11-50",
            CompanySize::Medium => "51-200",
            CompanySize::Large => "201-1000",
            CompanySize::Enterprise => "1000-5000",
            CompanySize::Global => "5000+",
        }
    }
}

/// A job card from the catalog. Reference data: never mutated after load.
///
/// `requirements` and `description` carry no serde default, so a posting that
/// omits either one is rejected at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Annual salary bounds in whole currency units.
    pub salary_min: u64,
    pub salary_max: u64,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub description: String,
    pub company_size: CompanySize,
    pub uses_ats: bool,

    // Display-only fields; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glassdoor_rating: Option<f32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("job {id}: salary_min {min} exceeds salary_max {max}")]
    InvalidSalaryRange { id: u32, min: u64, max: u64 },

    #[error("job {id}: description cannot be empty")]
    EmptyDescription { id: u32 },

    #[error("job {id}: requirement #{index} is blank")]
    BlankRequirement { id: u32, index: usize },
}

impl JobPosting {
    /// Checks the invariants serde cannot express. An empty `requirements`
    /// list is allowed and scores zero on the required-skill term.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.salary_min > self.salary_max {
            return Err(ModelError::InvalidSalaryRange {
                id: self.id,
                min: self.salary_min,
                max: self.salary_max,
            });
        }
        if self.description.trim().is_empty() {
            return Err(ModelError::EmptyDescription { id: self.id });
        }
        if let Some(index) = self.requirements.iter().position(|r| r.trim().is_empty()) {
            return Err(ModelError::BlankRequirement { id: self.id, index });
        }
        Ok(())
    }
}
