//! The application board. Cards keep insertion order; columns are derived
//! from each card's status at render time, exactly like the kanban view.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::tracker::{JobApplication, JobApplicationStatus};

#[derive(Clone, Default)]
pub struct TrackerBoard {
    inner: Arc<Mutex<Vec<JobApplication>>>,
}

impl TrackerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-populated with the three sample applications.
    pub fn seeded() -> Self {
        let board = Self::new();
        {
            let mut apps = board.lock();
            apps.push(sample(
                "Google",
                "Frontend Engineer",
                JobApplicationStatus::Applied,
                "For this role, use your \"React Specialist\" resume and create a new cover \
letter emphasizing your work on design systems.",
            ));
            apps.push(sample(
                "Netflix",
                "UI/UX Designer",
                JobApplicationStatus::Interviewing,
                "Highlight your portfolio projects related to streaming services. Your \
\"Creative Portfolio\" resume is a good fit.",
            ));
            apps.push(sample(
                "Amazon",
                "Cloud Solutions Architect",
                JobApplicationStatus::Saved,
                "Focus on your AWS certifications and experience with large-scale \
infrastructure in your resume.",
            ));
        }
        board
    }

    pub fn list(&self) -> Vec<JobApplication> {
        self.lock().clone()
    }

    /// Adds a new card. New applications always land in `Saved`.
    pub fn add(
        &self,
        company: String,
        role: String,
        url: String,
        ai_recommendation: String,
    ) -> JobApplication {
        let application = JobApplication {
            id: Uuid::new_v4(),
            company,
            role,
            url,
            status: JobApplicationStatus::Saved,
            ai_recommendation,
            created_at: Utc::now(),
        };
        self.lock().push(application.clone());
        application
    }

    /// Moves a card to another column.
    pub fn set_status(
        &self,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<JobApplication, AppError> {
        let mut apps = self.lock();
        let application = apps
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
        application.status = status;
        Ok(application.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JobApplication>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn sample(
    company: &str,
    role: &str,
    status: JobApplicationStatus,
    recommendation: &str,
) -> JobApplication {
    JobApplication {
        id: Uuid::new_v4(),
        company: company.to_string(),
        role: role.to_string(),
        url: "#".to_string(),
        status,
        ai_recommendation: recommendation.to_string(),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_board_has_three_cards() {
        let board = TrackerBoard::seeded();
        let apps = board.list();
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0].company, "Google");
        assert_eq!(apps[1].status, JobApplicationStatus::Interviewing);
    }

    #[test]
    fn test_new_applications_start_saved() {
        let board = TrackerBoard::new();
        let app = board.add(
            "Acme".to_string(),
            "Engineer".to_string(),
            "https://acme.example".to_string(),
            "rec".to_string(),
        );
        assert_eq!(app.status, JobApplicationStatus::Saved);
        assert_eq!(board.list().len(), 1);
    }

    #[test]
    fn test_status_change_moves_the_card() {
        let board = TrackerBoard::seeded();
        let id = board.list()[2].id;
        let updated = board.set_status(id, JobApplicationStatus::Offer).unwrap();
        assert_eq!(updated.status, JobApplicationStatus::Offer);
        assert_eq!(board.list()[2].status, JobApplicationStatus::Offer);
    }

    #[test]
    fn test_unknown_card_is_not_found() {
        let board = TrackerBoard::new();
        let err = board
            .set_status(Uuid::new_v4(), JobApplicationStatus::Hired)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
