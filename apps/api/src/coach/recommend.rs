//! Application-strategy recommendation shown on new tracker cards.

use std::time::Duration;

use tokio::time::sleep;

const LATENCY: Duration = Duration::from_millis(800);

/// Produces the advisory blurb for a newly tracked application.
pub async fn recommend_for_application(role: &str, company: &str) -> String {
    sleep(LATENCY).await;
    build_recommendation(role, company)
}

fn build_recommendation(role: &str, company: &str) -> String {
    format!(
        "For the {role} role at {company}, recommend using your 'Senior Software Engineer' \
resume. Highlight projects related to analytics dashboards and team leadership. Consider \
creating a new cover letter emphasizing your React and Node.js skills."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_names_role_and_company() {
        let text = build_recommendation("Backend Engineer", "Acme");
        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("Acme"));
    }
}
