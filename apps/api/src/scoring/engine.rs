//! Match engine — scores a user profile against one job posting.
//!
//! `MatchEngine::analyze` is a pure function of (profile, posting, lexicon,
//! config): no I/O, no clock, no randomness. `AppState` shares one engine
//! behind an `Arc` and handlers call it concurrently without locking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CompanySize, JobPosting, UserProfile, Vibe};
use crate::scoring::lexicon::{FlagStatus, RedFlagLexicon};
use crate::scoring::skills::{count_matches, match_skills, skill_score};
use crate::scoring::weights::ScoringConfig;

const CULTURE_RED: u32 = 25;
const CULTURE_ORANGE: u32 = 50;
const CULTURE_GREEN_BASE: u32 = 85;
const CULTURE_PER_POSITIVE: u32 = 3;

/// Screened by an applicant tracking system.
const ATS_SCREENED: u32 = 75;
/// Reaches a human directly.
const ATS_DIRECT: u32 = 95;

/// Salary score when the posting discloses no range (0..0).
const SALARY_UNDISCLOSED: f64 = 50.0;

const VIBE_NEUTRAL: u32 = 70;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Full verdict for one (profile, posting) pair. Every field is recomputed per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub overall: u32, // 5 – 98
    pub skill_score: u32,
    pub culture_score: u32,
    pub salary_score: u32,
    pub vibe_score: u32,
    pub ats_score: u32,
    pub flag_status: FlagStatus,
    pub critical_flags: Vec<String>,
    pub warning_flags: Vec<String>,
    pub positive_flags: Vec<String>,
    /// Lowercased requirements the profile covers, for highlighting.
    pub matched_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub toxicity_score: i32,
}

/// A catalog posting paired with its analysis, as returned by `MatchEngine::rank`.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    pub job: JobPosting,
    pub analysis: MatchAnalysis,
}

impl MatchAnalysis {
    /// Terminal-style progress lines shown while a card renders.
    pub fn narrate(&self, job: &JobPosting) -> Vec<String> {
        vec![
            format!("TARGET: {}", job.company.to_uppercase()),
            format!(
                "ANALYZING SALARY VECTOR... {}-{}",
                job.salary_min, job.salary_max
            ),
            format!("DETECTED {} CRITICAL FLAGS", self.critical_flags.len()),
            format!("CULTURE COMPATIBILITY: {}%", self.culture_score),
            "ANALYSIS_COMPLETE".to_string(),
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    lexicon: RedFlagLexicon,
    config: ScoringConfig,
}

impl MatchEngine {
    pub fn new(lexicon: RedFlagLexicon, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn lexicon(&self) -> &RedFlagLexicon {
        &self.lexicon
    }

    /// Algorithm:
    /// 1. Skills: symmetric substring match of profile skills against
    ///    requirements (70 pts) and preferred skills (30 pts).
    /// 2. Red flags: lexicon scan of the description → toxicity → flag status.
    /// 3. Culture from flag status, ATS from screening, salary from the
    ///    average of the range, vibe from preference × company size.
    /// 4. overall = weighted blend, rounded, clamped to [floor, ceiling].
    pub fn analyze(&self, profile: &UserProfile, job: &JobPosting) -> MatchAnalysis {
        // Fractions count every listed entry, repeats included; the matched
        // lists returned to callers are distinct.
        let total_required = job.requirements.len();
        let skill = skill_score(
            count_matches(&profile.skills, &job.requirements),
            total_required,
            count_matches(&profile.skills, &job.preferred_skills),
            job.preferred_skills.len(),
        )
        .round();
        let matched_required = match_skills(&profile.skills, &job.requirements);
        let matched_preferred = match_skills(&profile.skills, &job.preferred_skills);

        let flags = self.lexicon.scan(&job.description);
        let toxicity_score = flags.toxicity_score();
        let flag_status = flags.status();

        let culture = culture_score(flag_status, flags.positive.len());
        let ats = ats_score(job.uses_ats);
        let salary = salary_score(job, self.config.salary_ceiling.get());
        let vibe = vibe_score(profile.vibe, job.company_size);

        let overall = self.config.blend(
            skill,
            culture as f64,
            vibe as f64,
            ats as f64,
            salary,
        );

        debug!(
            job_id = job.id,
            company_size = job.company_size.as_str(),
            overall,
            toxicity_score,
            ?flag_status,
            matched = matched_required.len(),
            required = total_required,
            "scored posting"
        );

        MatchAnalysis {
            overall,
            skill_score: skill as u32,
            culture_score: culture,
            salary_score: salary.round() as u32,
            vibe_score: vibe,
            ats_score: ats,
            flag_status,
            critical_flags: flags.critical,
            warning_flags: flags.warning,
            positive_flags: flags.positive,
            matched_required,
            matched_preferred,
            toxicity_score,
        }
    }

    /// Scores every posting and orders them best first. Equal scores keep input order.
    pub fn rank(&self, profile: &UserProfile, jobs: &[JobPosting]) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = jobs
            .iter()
            .map(|job| RankedMatch {
                analysis: self.analyze(profile, job),
                job: job.clone(),
            })
            .collect();
        ranked.sort_by(|a, b| b.analysis.overall.cmp(&a.analysis.overall));
        ranked
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Green postings earn a bonus per positive phrase, capped at 100.
fn culture_score(status: FlagStatus, positive_hits: usize) -> u32 {
    match status {
        FlagStatus::Red => CULTURE_RED,
        FlagStatus::Orange => CULTURE_ORANGE,
        FlagStatus::Green => {
            let bonus = (positive_hits as u32).saturating_mul(CULTURE_PER_POSITIVE);
            CULTURE_GREEN_BASE.saturating_add(bonus).min(100)
        }
    }
}

fn ats_score(uses_ats: bool) -> u32 {
    if uses_ats {
        ATS_SCREENED
    } else {
        ATS_DIRECT
    }
}

/// Average of the salary range as a percentage of `ceiling`, capped at 100.
fn salary_score(job: &JobPosting, ceiling: u64) -> f64 {
    let avg = (job.salary_min as f64 + job.salary_max as f64) / 2.0;
    if avg <= 0.0 {
        return SALARY_UNDISCLOSED;
    }
    (avg / ceiling as f64 * 100.0).min(100.0)
}

fn vibe_score(vibe: Option<Vibe>, size: CompanySize) -> u32 {
    match (vibe, size) {
        (Some(Vibe::Structure), CompanySize::Micro) => 30,
        (Some(Vibe::Structure), CompanySize::Global) => 95,
        (Some(Vibe::Chaos), CompanySize::Micro) => 95,
        (Some(Vibe::Chaos), CompanySize::Global) => 40,
        _ => VIBE_NEUTRAL,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use super::*;
    use crate::catalog::seed::seed_jobs;
    use crate::models::job::fixtures::posting;
    use crate::models::Role;

    fn profile(skills: &[&str], vibe: Option<Vibe>) -> UserProfile {
        UserProfile::new("Asha", Role::Engineer, skills.iter().copied(), vibe)
    }

    fn job_with(requirements: &[&str], preferred: &[&str], description: &str) -> JobPosting {
        let mut job = posting(1);
        job.requirements = requirements.iter().map(|s| s.to_string()).collect();
        job.preferred_skills = preferred.iter().map(|s| s.to_string()).collect();
        job.description = description.to_string();
        job
    }

    #[test]
    fn test_perfect_skill_match_clean_description() {
        let engine = MatchEngine::default();
        let user = profile(&["React", "Node.js", "AWS"], Some(Vibe::Structure));
        let mut job = job_with(
            &["React", "Node.js", "AWS"],
            &[],
            "structured environment with mentorship and growth",
        );
        job.uses_ats = true;
        job.company_size = CompanySize::Global;

        let a = engine.analyze(&user, &job);
        assert_eq!(a.skill_score, 100);
        assert_eq!(a.flag_status, FlagStatus::Green);
        assert!(a.culture_score >= 85);
        assert_eq!(a.culture_score, 94);
        assert_eq!(a.vibe_score, 95);
        assert_eq!(a.ats_score, 75);
        assert_eq!(a.toxicity_score, -15);
        assert_eq!(a.matched_required, vec!["react", "node.js", "aws"]);
        assert!(a.matched_preferred.is_empty());
    }

    #[test]
    fn test_toxic_posting_is_red() {
        let engine = MatchEngine::default();
        let job = job_with(
            &["React"],
            &[],
            "Need a rockstar ninja to hustle. We're a family here.",
        );
        let a = engine.analyze(&profile(&["React"], None), &job);
        assert!(a.critical_flags.len() >= 2);
        assert_eq!(a.critical_flags, vec!["rockstar", "ninja", "family"]);
        assert_eq!(a.warning_flags, vec!["hustle"]);
        assert_eq!(a.flag_status, FlagStatus::Red);
        assert_eq!(a.culture_score, 25);
        assert_eq!(a.toxicity_score, 100);
    }

    #[test]
    fn test_user_skill_react_matches_react_native() {
        let engine = MatchEngine::default();
        let job = job_with(&["React Native"], &[], "Build apps.");
        let a = engine.analyze(&profile(&["React"], None), &job);
        assert_eq!(a.matched_required, vec!["react native"]);
        assert_eq!(a.skill_score, 100);
    }

    #[test]
    fn test_empty_requirements_does_not_panic() {
        let engine = MatchEngine::default();
        let job = job_with(&[], &[], "Build things.");
        let a = engine.analyze(&profile(&["Rust"], None), &job);
        // Required term contributes 0; empty preferred list earns the full 30.
        assert_eq!(a.skill_score, 30);
        assert!(a.matched_required.is_empty());
        assert!((5..=98).contains(&a.overall));
    }

    #[test]
    fn test_repeated_requirement_counts_toward_fraction() {
        let engine = MatchEngine::default();
        let job = job_with(&["Go", "go", "React"], &[], "Build things.");
        let a = engine.analyze(&profile(&["React"], None), &job);
        // round(1/3 * 70 + 30)
        assert_eq!(a.skill_score, 53);
        assert_eq!(a.matched_required, vec!["react"]);

        let a = engine.analyze(&profile(&["Go"], None), &job);
        // round(2/3 * 70 + 30), matched list stays distinct
        assert_eq!(a.skill_score, 77);
        assert_eq!(a.matched_required, vec!["go"]);
    }

    #[test]
    fn test_empty_skills_scores_zero_matches() {
        let engine = MatchEngine::default();
        let job = job_with(&["Rust", "SQL"], &["Kafka"], "Build things.");
        let a = engine.analyze(&profile(&[], None), &job);
        assert_eq!(a.skill_score, 0);
        assert!(a.matched_required.is_empty());
    }

    #[test]
    fn test_preferred_skills_share() {
        let engine = MatchEngine::default();
        let job = job_with(&["Rust", "SQL"], &["Kafka", "Go"], "Build things.");
        let a = engine.analyze(&profile(&["rust", "go"], None), &job);
        // 1/2*70 + 1/2*30
        assert_eq!(a.skill_score, 50);
        assert_eq!(a.matched_preferred, vec!["go"]);
    }

    #[test]
    fn test_culture_score_is_clamped_to_100() {
        let lexicon = RedFlagLexicon::new(
            Vec::<&str>::new(),
            vec![],
            vec!["calm", "kind", "fair", "paid", "rest", "learn"],
        )
        .unwrap();
        let engine = MatchEngine::new(lexicon, ScoringConfig::default());
        let job = job_with(&["Rust"], &[], "calm kind fair paid rest learn");
        let a = engine.analyze(&profile(&["Rust"], None), &job);
        assert_eq!(a.positive_flags.len(), 6);
        assert_eq!(a.flag_status, FlagStatus::Green);
        assert_eq!(a.culture_score, 100);
    }

    #[test]
    fn test_orange_culture() {
        assert_eq!(culture_score(FlagStatus::Orange, 3), 50);
        assert_eq!(culture_score(FlagStatus::Red, 3), 25);
        assert_eq!(culture_score(FlagStatus::Green, 0), 85);
    }

    #[test]
    fn test_ats_policy() {
        assert_eq!(ats_score(true), 75);
        assert_eq!(ats_score(false), 95);
    }

    #[test]
    fn test_salary_score_scales_to_ceiling() {
        let mut job = posting(1);
        job.salary_min = 2_000_000;
        job.salary_max = 3_000_000;
        assert!((salary_score(&job, 5_000_000) - 50.0).abs() < 1e-9);

        job.salary_min = 9_000_000;
        job.salary_max = 11_000_000;
        assert_eq!(salary_score(&job, 5_000_000), 100.0);
    }

    #[test]
    fn test_undisclosed_salary_is_neutral() {
        let mut job = posting(1);
        job.salary_min = 0;
        job.salary_max = 0;
        assert_eq!(salary_score(&job, 5_000_000), 50.0);
    }

    #[test]
    fn test_custom_salary_ceiling() {
        let config =
            ScoringConfig::default().with_salary_ceiling(NonZeroU64::new(200_000).unwrap());
        let engine = MatchEngine::new(RedFlagLexicon::default(), config);
        let mut job = posting(1);
        job.salary_min = 90_000;
        job.salary_max = 110_000;
        let a = engine.analyze(&profile(&[], None), &job);
        assert_eq!(a.salary_score, 50);
    }

    #[test]
    fn test_vibe_table() {
        use CompanySize::*;
        assert_eq!(vibe_score(Some(Vibe::Structure), Micro), 30);
        assert_eq!(vibe_score(Some(Vibe::Structure), Global), 95);
        assert_eq!(vibe_score(Some(Vibe::Structure), Enterprise), 70);
        assert_eq!(vibe_score(Some(Vibe::Chaos), Micro), 95);
        assert_eq!(vibe_score(Some(Vibe::Chaos), Global), 40);
        assert_eq!(vibe_score(Some(Vibe::Chaos), Small), 70);
        assert_eq!(vibe_score(Some(Vibe::Balance), Micro), 70);
        assert_eq!(vibe_score(Some(Vibe::Balance), Global), 70);
        assert_eq!(vibe_score(None, Micro), 70);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = MatchEngine::default();
        let user = profile(&["React", "Python"], Some(Vibe::Chaos));
        for job in seed_jobs() {
            assert_eq!(engine.analyze(&user, &job), engine.analyze(&user, &job));
        }
    }

    #[test]
    fn test_scores_stay_in_bounds_across_catalog() {
        let engine = MatchEngine::default();
        let vibes = [
            None,
            Some(Vibe::Structure),
            Some(Vibe::Chaos),
            Some(Vibe::Balance),
        ];
        let skill_sets: [&[&str]; 3] = [&[], &["React", "AWS"], &["Figma", "UI/UX", "Python"]];
        for job in seed_jobs() {
            for vibe in vibes {
                for skills in skill_sets {
                    let a = engine.analyze(&profile(skills, vibe), &job);
                    assert!((5..=98).contains(&a.overall), "overall {}", a.overall);
                    let subs = [
                        a.skill_score,
                        a.culture_score,
                        a.salary_score,
                        a.vibe_score,
                        a.ats_score,
                    ];
                    assert!(subs.iter().all(|s| *s <= 100), "sub-scores {subs:?}");
                }
            }
        }
    }

    #[test]
    fn test_overall_clamped_to_floor() {
        let engine = MatchEngine::default();
        let mut job = job_with(&["Rust"], &["Go"], "rockstar ninja guru family");
        job.salary_min = 1;
        job.salary_max = 1;
        job.company_size = CompanySize::Global;
        // 0*.35 + 25*.25 + 40*.2 + 75*.1 + ~0*.1 ≈ 21.75
        let a = engine.analyze(&profile(&[], Some(Vibe::Chaos)), &job);
        assert_eq!(a.overall, 22);

        let mut harsh = ScoringConfig::default();
        harsh.weights = crate::scoring::weights::ScoringWeights {
            skill: 0.0,
            culture: 0.0,
            vibe: 0.0,
            ats: 0.0,
            salary: 0.0,
        };
        let engine = MatchEngine::new(RedFlagLexicon::default(), harsh);
        assert_eq!(engine.analyze(&profile(&[], None), &job).overall, 5);
    }

    #[test]
    fn test_adding_matching_skill_never_lowers_skill_score() {
        let engine = MatchEngine::default();
        let job = job_with(
            &["React", "Node.js", "TypeScript", "AWS"],
            &["GraphQL", "Docker"],
            "Build things.",
        );
        let additions = ["aws", "graphql", "react", "typescript", "docker", "node.js"];
        let mut skills: Vec<&str> = vec![];
        let mut last = engine.analyze(&profile(&skills, None), &job).skill_score;
        for skill in additions {
            skills.push(skill);
            let now = engine.analyze(&profile(&skills, None), &job).skill_score;
            assert!(now >= last, "adding {skill} dropped {last} -> {now}");
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_adding_critical_word_never_improves_flags() {
        let engine = MatchEngine::default();
        let user = profile(&["React"], None);
        let rank = |s: FlagStatus| match s {
            FlagStatus::Green => 0,
            FlagStatus::Orange => 1,
            FlagStatus::Red => 2,
        };
        let mut description = String::from("Remote role with benefits and mentorship.");
        let mut last = engine.analyze(&user, &job_with(&["React"], &[], &description));
        for word in ["guru", "rockstar", "ninja", "fast-paced"] {
            description.push(' ');
            description.push_str(word);
            let now = engine.analyze(&user, &job_with(&["React"], &[], &description));
            assert!(now.toxicity_score >= last.toxicity_score);
            assert!(rank(now.flag_status) >= rank(last.flag_status));
            last = now;
        }
        assert_eq!(last.flag_status, FlagStatus::Red);
    }

    #[test]
    fn test_rank_orders_best_first() {
        let engine = MatchEngine::default();
        let user = profile(
            &["Figma", "UI/UX", "User Research", "Prototyping", "Design Systems"],
            Some(Vibe::Structure),
        );
        let ranked = engine.rank(&user, &seed_jobs());
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].job.company, "Airbnb");
        assert!(ranked
            .windows(2)
            .all(|w| w[0].analysis.overall >= w[1].analysis.overall));
    }

    #[test]
    fn test_rank_keeps_input_order_on_ties() {
        let engine = MatchEngine::default();
        let jobs = vec![posting(1), posting(2), posting(3)];
        let ranked = engine.rank(&profile(&["Rust"], None), &jobs);
        let ids: Vec<u32> = ranked.iter().map(|r| r.job.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_narrate_lines() {
        let engine = MatchEngine::default();
        let job = job_with(&["Rust"], &[], "rockstar wanted");
        let a = engine.analyze(&profile(&["Rust"], None), &job);
        let log = a.narrate(&job);
        assert_eq!(log[0], "TARGET: ACME");
        assert_eq!(log[1], "ANALYZING SALARY VECTOR... 2000000-3000000");
        assert_eq!(log[2], "DETECTED 1 CRITICAL FLAGS");
        assert_eq!(log[3], "CULTURE COMPATIBILITY: 50%");
        assert_eq!(log.last().map(String::as_str), Some("ANALYSIS_COMPLETE"));
    }
}
