use crate::catalog::ProjectIdea;
use crate::skills::SkillProgress;
use crate::types::SkillLevel;
use std::cmp::Ordering;
use std::collections::HashMap;

// Scoring weights. Tuned for a catalog of tens of entries where most skills
// start unrated; the magnitudes only matter relative to each other.
const LEARNING_SKILL_WEIGHT: f64 = 3.0;
const NEW_SKILL_BONUS: f64 = 2.0;
const TOO_MANY_NEW_PENALTY: f64 = 1.0;
const COMFORTABLE_SKILL_WEIGHT: f64 = 0.5;
const ALL_MASTERED_PENALTY: f64 = 5.0;

/// A catalog entry with its fit score.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub idea: &'a ProjectIdea,
    pub score: f64,
}

fn score_idea(idea: &ProjectIdea, levels: &HashMap<&str, SkillLevel>) -> f64 {
    let level_of = |skill: &String| levels.get(skill.as_str()).copied();
    let mut score = 0.0;

    // Projects that practice skills currently being learned rank highest.
    let learning = idea
        .skills
        .iter()
        .filter(|s| level_of(s) == Some(SkillLevel::Learning))
        .count();
    score += learning as f64 * LEARNING_SKILL_WEIGHT;

    // A little new material is good; a wall of it is not. Unrated skills
    // count as new alongside explicit not-started ratings.
    let new_skills = idea
        .skills
        .iter()
        .filter(|s| matches!(level_of(s), None | Some(SkillLevel::NotStarted)))
        .count();
    if (1..=2).contains(&new_skills) {
        score += NEW_SKILL_BONUS;
    }
    if new_skills > 3 {
        score -= TOO_MANY_NEW_PENALTY;
    }

    let comfortable = idea
        .skills
        .iter()
        .filter(|s| level_of(s) == Some(SkillLevel::Comfortable))
        .count();
    score += comfortable as f64 * COMFORTABLE_SKILL_WEIGHT;

    // Nothing left to learn here.
    if idea
        .skills
        .iter()
        .all(|s| level_of(s) == Some(SkillLevel::Mastered))
    {
        score -= ALL_MASTERED_PENALTY;
    }

    score
}

/// Score every non-completed catalog entry, highest first. The sort is
/// stable, so equal scores keep catalog order.
pub fn rank<'a>(
    catalog: &'a [ProjectIdea],
    skill_progress: &[SkillProgress],
    completed_ids: &[String],
) -> Vec<Scored<'a>> {
    let levels: HashMap<&str, SkillLevel> = skill_progress
        .iter()
        .map(|p| (p.skill_id.as_str(), p.level))
        .collect();

    let mut scored: Vec<Scored<'a>> = catalog
        .iter()
        .filter(|idea| !completed_ids.iter().any(|c| c == &idea.id))
        .map(|idea| Scored {
            idea,
            score: score_idea(idea, &levels),
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// The top `count` picks.
pub fn recommend<'a>(
    catalog: &'a [ProjectIdea],
    skill_progress: &[SkillProgress],
    completed_ids: &[String],
    count: usize,
) -> Vec<&'a ProjectIdea> {
    rank(catalog, skill_progress, completed_ids)
        .into_iter()
        .take(count)
        .map(|s| s.idea)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
