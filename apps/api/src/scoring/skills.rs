//! Skill matching — symmetric, case-insensitive substring containment.

use std::collections::HashSet;

const REQUIRED_SHARE: f64 = 70.0;
const PREFERRED_SHARE: f64 = 30.0;

/// True when either (already lowercased) skill contains the other.
/// "react" matches "react.js" and "react native"; "java" matches "javascript".
fn skills_overlap(user_skill: &str, target: &str) -> bool {
    !user_skill.is_empty() && (user_skill.contains(target) || target.contains(user_skill))
}

/// Returns the distinct lowercased `targets` covered by at least one user
/// skill, in posting order.
pub fn match_skills(user_skills: &[String], targets: &[String]) -> Vec<String> {
    let user: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    distinct_lowercase(targets)
        .into_iter()
        .filter(|target| user.iter().any(|u| skills_overlap(u, target)))
        .collect()
}

/// Number of `targets` entries covered by at least one user skill. Repeated
/// entries count every time, so the result pairs with `targets.len()`.
pub fn count_matches(user_skills: &[String], targets: &[String]) -> usize {
    let user: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    targets
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|target| user.iter().any(|u| skills_overlap(u, target)))
        .count()
}

/// Lowercases and drops repeats, keeping first-seen order.
fn distinct_lowercase(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Skill score in [0, 100]: 70 points for required coverage plus 30 for
/// preferred coverage.
///
/// A posting with no requirements earns nothing on the required term; one
/// with no preferred skills earns the full preferred term.
pub fn skill_score(
    matched_required: usize,
    total_required: usize,
    matched_preferred: usize,
    total_preferred: usize,
) -> f64 {
    let required = if total_required > 0 {
        matched_required as f64 / total_required as f64 * REQUIRED_SHARE
    } else {
        0.0
    };
    let preferred = if total_preferred > 0 {
        matched_preferred as f64 / total_preferred as f64 * PREFERRED_SHARE
    } else {
        PREFERRED_SHARE
    };
    required + preferred
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let matched = match_skills(&strings(&["react"]), &strings(&["React"]));
        assert_eq!(matched, vec!["react"]);
    }

    #[test]
    fn test_user_skill_inside_requirement_matches() {
        // "react native" contains "react"
        let matched = match_skills(&strings(&["React"]), &strings(&["React Native"]));
        assert_eq!(matched, vec!["react native"]);
    }

    #[test]
    fn test_requirement_inside_user_skill_matches() {
        let matched = match_skills(&strings(&["React.js"]), &strings(&["React"]));
        assert_eq!(matched, vec!["react"]);
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        let matched = match_skills(&strings(&["Figma"]), &strings(&["PostgreSQL", "AWS"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_user_skill_never_matches() {
        let matched = match_skills(&strings(&[""]), &strings(&["Rust"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_no_user_skills_matches_nothing() {
        assert!(match_skills(&[], &strings(&["Rust"])).is_empty());
    }

    #[test]
    fn test_matches_keep_posting_order_without_repeats() {
        let matched = match_skills(
            &strings(&["aws", "node.js"]),
            &strings(&["Node.js", "Docker", "AWS", "node.js"]),
        );
        assert_eq!(matched, vec!["node.js", "aws"]);
    }

    #[test]
    fn test_count_matches_counts_repeated_entries() {
        let targets = strings(&["Go", "go", "React"]);
        assert_eq!(count_matches(&strings(&["go"]), &targets), 2);
        assert_eq!(count_matches(&strings(&["React"]), &targets), 1);
        assert_eq!(count_matches(&[], &targets), 0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        assert_eq!(skill_score(3, 3, 0, 0), 100.0);
        assert_eq!(skill_score(3, 3, 2, 2), 100.0);
    }

    #[test]
    fn test_partial_coverage() {
        // 2/4 * 70 + 1/3 * 30 = 35 + 10
        assert!((skill_score(2, 4, 1, 3) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_requirements_contributes_zero() {
        assert_eq!(skill_score(0, 0, 0, 0), 30.0);
        assert_eq!(skill_score(0, 0, 1, 2), 15.0);
    }

    #[test]
    fn test_no_match_with_preferred_list_scores_zero() {
        assert_eq!(skill_score(0, 5, 0, 2), 0.0);
    }
}
