//! Skill taxonomy — the skills offered per career path during onboarding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Skills for one role, grouped by how established they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTiers {
    pub core: Vec<String>,
    pub advanced: Vec<String>,
    pub emerging: Vec<String>,
}

impl SkillTiers {
    fn from_static(core: &[&str], advanced: &[&str], emerging: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            core: owned(core),
            advanced: owned(advanced),
            emerging: owned(emerging),
        }
    }

    /// True when `skill` is listed in any tier, ignoring case.
    pub fn contains(&self, skill: &str) -> bool {
        self.core
            .iter()
            .chain(&self.advanced)
            .chain(&self.emerging)
            .any(|s| s.eq_ignore_ascii_case(skill))
    }
}

/// Role → skill tiers. Injected at startup like the red-flag lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTaxonomy {
    roles: HashMap<Role, SkillTiers>,
}

impl SkillTaxonomy {
    pub fn skills_for(&self, role: Role) -> Option<&SkillTiers> {
        self.roles.get(&role)
    }

    /// Profile skills that are not listed for the profile's role. Free-form
    /// skills are allowed; this only feeds the onboarding summary.
    pub fn unlisted_skills<'a>(&self, role: Role, skills: &'a [String]) -> Vec<&'a str> {
        let tiers = self.skills_for(role);
        skills
            .iter()
            .map(String::as_str)
            .filter(|s| !tiers.is_some_and(|t| t.contains(s)))
            .collect()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        let roles = HashMap::from([
            (
                Role::Engineer,
                SkillTiers::from_static(
                    &["React", "Node.js", "Python", "TypeScript", "SQL", "Git"],
                    &["AWS", "Docker", "Kubernetes", "GraphQL", "Microservices", "CI/CD"],
                    &["Rust", "Go", "WebAssembly", "Edge Computing", "Blockchain", "AI/ML"],
                ),
            ),
            (
                Role::Designer,
                SkillTiers::from_static(
                    &["Figma", "UI/UX", "Adobe XD", "Sketch", "Prototyping"],
                    &[
                        "Motion Design",
                        "User Research",
                        "Design Systems",
                        "Accessibility",
                        "Framer",
                    ],
                    &[
                        "3D Design",
                        "AR/VR",
                        "AI-Assisted Design",
                        "Voice UI",
                        "Spatial Computing",
                    ],
                ),
            ),
            (
                Role::Manager,
                SkillTiers::from_static(
                    &["Agile", "Scrum", "JIRA", "Team Leadership", "Communication"],
                    &[
                        "OKRs",
                        "Strategy",
                        "Budgeting",
                        "Stakeholder Management",
                        "Roadmapping",
                    ],
                    &[
                        "Data-Driven Decisions",
                        "Remote Team Management",
                        "AI Tools",
                        "Change Management",
                    ],
                ),
            ),
            (
                Role::Founder,
                SkillTiers::from_static(
                    &["Product Vision", "MVP Development", "Customer Discovery", "Pitching"],
                    &[
                        "Fundraising",
                        "Growth Hacking",
                        "Unit Economics",
                        "Hiring",
                        "Legal/Compliance",
                    ],
                    &[
                        "Web3",
                        "AI Integration",
                        "Community Building",
                        "Creator Economy",
                        "Platform Strategy",
                    ],
                ),
            ),
        ]);
        Self { roles }
    }
}
