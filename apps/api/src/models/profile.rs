use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Career path picked during onboarding. Selects the skill taxonomy shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Engineer,
    Designer,
    Manager,
    Founder,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Engineer => "Engineer",
            Role::Designer => "Designer",
            Role::Manager => "Manager",
            Role::Founder => "Founder",
        }
    }
}

/// Declared preference for organizational stability vs. velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    Structure,
    Chaos,
    Balance,
}

/// A candidate profile built once during onboarding and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    /// Distinct skills in first-seen order. Duplicates are dropped case-insensitively.
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
    /// `None` when the user skipped the preference step; scored like `balance`.
    #[serde(default, deserialize_with = "deserialize_vibe")]
    pub vibe: Option<Vibe>,
}

#[cfg(test)]
impl UserProfile {
    pub fn new<I, S>(name: impl Into<String>, role: Role, skills: I, vibe: Option<Vibe>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            role,
            skills: normalize_skills(skills.into_iter().map(Into::into)),
            vibe,
        }
    }
}

fn normalize_skills(skills: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(normalize_skills(raw.unwrap_or_default().into_iter()))
}

// Onboarding stores an empty string until a preference is picked.
fn deserialize_vibe<'de, D>(deserializer: D) -> Result<Option<Vibe>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("structure") => Ok(Some(Vibe::Structure)),
        Some("chaos") => Ok(Some(Vibe::Chaos)),
        Some("balance") => Ok(Some(Vibe::Balance)),
        Some(other) => Err(serde::de::Error::unknown_variant(
            other,
            &["structure", "chaos", "balance"],
        )),
    }
}
