//! In-memory resume version store. Versions are keyed by a user-chosen
//! name; "save as new" duplicates the current version under a fresh name
//! and rejects collisions.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData};

#[derive(Clone, Default)]
pub struct VersionStore {
    inner: Arc<Mutex<BTreeMap<String, ResumeData>>>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the two sample versions the builder ships
    /// with.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut versions = store.lock();
            versions.insert("Senior Software Engineer".to_string(), senior_sample());
            versions.insert("Frontend Developer".to_string(), frontend_sample());
        }
        store
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<ResumeData> {
        self.lock().get(name).cloned()
    }

    /// Creates or replaces a version.
    pub fn upsert(&self, name: &str, data: ResumeData) {
        self.lock().insert(name.to_string(), data);
    }

    /// Copies `from` under `new_name`. Fails when the source is missing or
    /// the target name is already taken.
    pub fn duplicate(&self, from: &str, new_name: &str) -> Result<ResumeData, AppError> {
        let mut versions = self.lock();
        if versions.contains_key(new_name) {
            return Err(AppError::Validation(
                "A resume version with this name already exists.".to_string(),
            ));
        }
        let data = versions
            .get(from)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Resume version '{from}' not found")))?;
        versions.insert(new_name.to_string(), data.clone());
        Ok(data)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, ResumeData>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn shared_personal_info() -> PersonalInfo {
    PersonalInfo {
        full_name: "Jane Doe".to_string(),
        email: "jane.doe@email.com".to_string(),
        phone_number: "123-456-7890".to_string(),
        linkedin: "linkedin.com/in/janedoe".to_string(),
        portfolio: "github.com/janedoe".to_string(),
    }
}

fn shared_education() -> Vec<Education> {
    vec![Education {
        id: "edu1".to_string(),
        institution: "State University".to_string(),
        degree: "Bachelor of Science".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date: "Aug 2014".to_string(),
        end_date: "May 2018".to_string(),
    }]
}

fn senior_sample() -> ResumeData {
    ResumeData {
        personal_info: shared_personal_info(),
        summary: "A passionate and creative software engineer with 5+ years of experience in \
building scalable web applications. Proficient in JavaScript, React, and Node.js."
            .to_string(),
        experience: vec![Experience {
            id: "exp1".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            company: "Tech Corp".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            description: "Led a team of 5 engineers to develop a new customer-facing analytics \
dashboard, resulting in a 20% increase in user engagement."
                .to_string(),
        }],
        education: shared_education(),
        skills: ["JavaScript", "React", "Node.js", "TypeScript", "PostgreSQL", "Docker", "AWS"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

fn frontend_sample() -> ResumeData {
    ResumeData {
        personal_info: shared_personal_info(),
        summary: "Creative Frontend Developer with a knack for building beautiful and responsive \
user interfaces. Expert in React, Tailwind CSS, and modern web technologies."
            .to_string(),
        experience: vec![Experience {
            id: "exp1".to_string(),
            job_title: "Frontend Developer".to_string(),
            company: "Web Solutions Inc.".to_string(),
            location: "Remote".to_string(),
            start_date: "Jun 2018".to_string(),
            end_date: "Dec 2019".to_string(),
            description: "Developed and maintained the UI for several client websites using React \
and Redux, improving page load times by 15%."
                .to_string(),
        }],
        education: shared_education(),
        skills: ["HTML5", "CSS3", "JavaScript", "React", "Redux", "Tailwind CSS", "Figma"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_both_samples() {
        let store = VersionStore::seeded();
        assert_eq!(
            store.names(),
            vec!["Frontend Developer", "Senior Software Engineer"]
        );
        assert!(store.get("Senior Software Engineer").is_some());
    }

    #[test]
    fn test_duplicate_rejects_existing_name() {
        let store = VersionStore::seeded();
        let err = store
            .duplicate("Senior Software Engineer", "Frontend Developer")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_duplicate_copies_the_source() {
        let store = VersionStore::seeded();
        let copy = store
            .duplicate("Senior Software Engineer", "Senior Software Engineer Copy")
            .unwrap();
        assert_eq!(store.get("Senior Software Engineer Copy"), Some(copy));
        assert_eq!(store.names().len(), 3);
    }

    #[test]
    fn test_duplicate_missing_source_is_not_found() {
        let store = VersionStore::seeded();
        let err = store.duplicate("No Such Version", "Copy").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
