//! Learning-roadmap generation — four canned phases shaped around the
//! stated career goal.

use std::time::Duration;

use tokio::time::sleep;

use crate::errors::AppError;
use crate::models::roadmap::{ResourceLink, RoadmapStep};

const LATENCY: Duration = Duration::from_millis(2000);

/// Generates a learning roadmap for a career goal. Rejects an empty goal.
pub async fn generate_roadmap(career_goal: &str) -> Result<Vec<RoadmapStep>, AppError> {
    let goal = career_goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation(
            "Please provide a career goal to generate a roadmap.".to_string(),
        ));
    }
    sleep(LATENCY).await;
    Ok(build_roadmap(goal))
}

fn build_roadmap(goal: &str) -> Vec<RoadmapStep> {
    let link = |title: &str| ResourceLink {
        title: title.to_string(),
        url: "#".to_string(),
    };
    vec![
        RoadmapStep {
            id: 1,
            title: "Phase 1: Foundational Skills".to_string(),
            description: format!("Strengthen the core concepts necessary for a {goal}."),
            resources: vec![
                link("Official Documentation"),
                link("Beginner's Course on Coursera"),
            ],
            completed: false,
        },
        RoadmapStep {
            id: 2,
            title: "Phase 2: Intermediate Concepts & Tooling".to_string(),
            description: "Dive deeper into advanced topics and learn the essential tools of the trade."
                .to_string(),
            resources: vec![
                link("Advanced Guide on freeCodeCamp"),
                link("Workshop on Popular Tools"),
            ],
            completed: false,
        },
        RoadmapStep {
            id: 3,
            title: "Phase 3: Practical Application".to_string(),
            description: "Build real-world projects to solidify your knowledge and create a portfolio."
                .to_string(),
            resources: vec![
                link("Project-Based Learning Tutorial"),
                link("GitHub Repositories for Inspiration"),
            ],
            completed: false,
        },
        RoadmapStep {
            id: 4,
            title: "Phase 4: Specialization & Interview Prep".to_string(),
            description: "Focus on a niche area and prepare for technical and behavioral interviews."
                .to_string(),
            resources: vec![
                link("Specialization Track on Pluralsight"),
                link("Mock Interview with CareerNest"),
            ],
            completed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_empty_goal_is_rejected() {
        let err = generate_roadmap("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_roadmap_has_four_incomplete_phases() {
        let steps = build_roadmap("Data Engineer");
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| !s.completed));
        assert!(steps[0].description.contains("Data Engineer"));
        assert_eq!(
            steps.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }
}
