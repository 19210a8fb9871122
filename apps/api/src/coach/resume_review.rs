//! Resume review — canned improvement suggestions keyed by resume field.
//!
//! Keys follow the builder's field addressing: `summary`, `skills`, and
//! `experience_<id>_description` for each experience entry. Only non-empty
//! fields receive suggestions.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::time::sleep;

use crate::models::resume::{ResumeData, Suggestion, SuggestionKind};

const LATENCY: Duration = Duration::from_millis(1500);

pub type SuggestionMap = BTreeMap<String, Vec<Suggestion>>;

/// Reviews a resume and returns suggestions per field, after the simulated
/// AI round trip.
pub async fn review_resume(resume: &ResumeData) -> SuggestionMap {
    sleep(LATENCY).await;
    build_suggestions(resume)
}

fn build_suggestions(resume: &ResumeData) -> SuggestionMap {
    let mut suggestions = SuggestionMap::new();

    if !resume.summary.is_empty() {
        suggestions.insert(
            "summary".to_string(),
            vec![
                Suggestion {
                    kind: SuggestionKind::Structure,
                    text: "Consider adding a quantifiable achievement to your summary to make it \
more impactful. e.g., '...resulting in a 20% increase in user engagement.'"
                        .to_string(),
                },
                Suggestion {
                    kind: SuggestionKind::Grammar,
                    text: "The term 'passionate' is slightly overused. Consider alternatives like \
'dedicated' or 'results-oriented'."
                        .to_string(),
                },
            ],
        );
    }

    for exp in &resume.experience {
        if exp.description.is_empty() {
            continue;
        }
        suggestions.insert(
            format!("experience_{}_description", exp.id),
            vec![
                Suggestion {
                    kind: SuggestionKind::Grammar,
                    text: format!(
                        "Use stronger action verbs. Instead of \"Led a team\", try \"Spearheaded \
a cross-functional team\" for your role at {}.",
                        exp.company
                    ),
                },
                Suggestion {
                    kind: SuggestionKind::Ats,
                    text: "Include keywords from the job description. For a senior role, consider \
adding terms like 'mentorship', 'code review', or 'system design'."
                        .to_string(),
                },
            ],
        );
    }

    if !resume.skills.is_empty() {
        suggestions.insert(
            "skills".to_string(),
            vec![Suggestion {
                kind: SuggestionKind::Ats,
                text: "Tailor your skills to the job description. We noticed the job requires \
'GraphQL', which is missing from your list."
                    .to_string(),
            }],
        );
    }

    suggestions
}
