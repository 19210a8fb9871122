//! Section-level diff between two resume versions.
//!
//! Entries (experience, education) are matched by id: present only on one
//! side counts as added/removed, same id with different content counts as
//! edited. Skills are compared as sets; personal info field by field.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::resume::{Experience, ResumeData};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub edited: Vec<String>,
}

impl EntryChanges {
    fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.edited.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    /// Names of changed personal-info fields.
    pub personal_info: Vec<String>,
    pub summary_changed: bool,
    pub skills_added: Vec<String>,
    pub skills_removed: Vec<String>,
    pub experience: EntryChanges,
    pub education: EntryChanges,
}

impl VersionDiff {
    pub fn is_empty(&self) -> bool {
        self.personal_info.is_empty()
            && !self.summary_changed
            && self.skills_added.is_empty()
            && self.skills_removed.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}

pub fn diff_versions(a: &ResumeData, b: &ResumeData) -> VersionDiff {
    VersionDiff {
        personal_info: diff_personal_info(a, b),
        summary_changed: a.summary != b.summary,
        skills_added: set_difference(&b.skills, &a.skills),
        skills_removed: set_difference(&a.skills, &b.skills),
        experience: diff_entries(
            a.experience.iter().map(|e| (e.id.as_str(), experience_body(e))),
            b.experience.iter().map(|e| (e.id.as_str(), experience_body(e))),
        ),
        education: diff_entries(
            a.education.iter().map(|e| (e.id.as_str(), education_body(e))),
            b.education.iter().map(|e| (e.id.as_str(), education_body(e))),
        ),
    }
}

fn diff_personal_info(a: &ResumeData, b: &ResumeData) -> Vec<String> {
    let (a, b) = (&a.personal_info, &b.personal_info);
    let fields = [
        ("fullName", &a.full_name, &b.full_name),
        ("email", &a.email, &b.email),
        ("phoneNumber", &a.phone_number, &b.phone_number),
        ("linkedin", &a.linkedin, &b.linkedin),
        ("portfolio", &a.portfolio, &b.portfolio),
    ];
    fields
        .iter()
        .filter(|(_, left, right)| left != right)
        .map(|(name, _, _)| name.to_string())
        .collect()
}

fn set_difference(from: &[String], minus: &[String]) -> Vec<String> {
    let exclude: BTreeSet<&String> = minus.iter().collect();
    from.iter()
        .filter(|s| !exclude.contains(s))
        .cloned()
        .collect()
}

/// Content of an entry minus its id, for edit detection.
fn experience_body(e: &Experience) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        e.job_title, e.company, e.location, e.start_date, e.end_date, e.description
    )
}

fn education_body(e: &crate::models::resume::Education) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        e.institution, e.degree, e.field_of_study, e.start_date, e.end_date
    )
}

fn diff_entries<'a>(
    left: impl Iterator<Item = (&'a str, String)>,
    right: impl Iterator<Item = (&'a str, String)>,
) -> EntryChanges {
    let left: Vec<(&str, String)> = left.collect();
    let right: Vec<(&str, String)> = right.collect();
    let left_ids: BTreeSet<&str> = left.iter().map(|(id, _)| *id).collect();
    let right_ids: BTreeSet<&str> = right.iter().map(|(id, _)| *id).collect();

    let mut changes = EntryChanges::default();
    for (id, _) in &right {
        if !left_ids.contains(id) {
            changes.added.push(id.to_string());
        }
    }
    for (id, body) in &left {
        if !right_ids.contains(id) {
            changes.removed.push(id.to_string());
        } else if right
            .iter()
            .any(|(rid, rbody)| rid == id && rbody != body)
        {
            changes.edited.push(id.to_string());
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resumes::store::VersionStore;

    fn samples() -> (ResumeData, ResumeData) {
        let store = VersionStore::seeded();
        (
            store.get("Senior Software Engineer").unwrap(),
            store.get("Frontend Developer").unwrap(),
        )
    }

    #[test]
    fn test_identical_versions_produce_empty_diff() {
        let (senior, _) = samples();
        assert!(diff_versions(&senior, &senior).is_empty());
    }

    #[test]
    fn test_sample_versions_differ_in_content_not_identity() {
        let (senior, frontend) = samples();
        let diff = diff_versions(&senior, &frontend);
        assert!(diff.personal_info.is_empty(), "same person");
        assert!(diff.summary_changed);
        assert!(diff.skills_added.contains(&"Figma".to_string()));
        assert!(diff.skills_removed.contains(&"Docker".to_string()));
        // Same entry id, different job: edited, not added/removed.
        assert_eq!(diff.experience.edited, vec!["exp1"]);
        assert!(diff.education.is_empty());
    }

    #[test]
    fn test_added_and_removed_entries() {
        let (senior, mut edited) = samples();
        let mut edited_exp = senior.experience[0].clone();
        edited_exp.id = "exp2".to_string();
        edited.experience.push(edited_exp);
        let diff = diff_versions(&senior, &edited);
        assert_eq!(diff.experience.added, vec!["exp2"]);
        assert!(diff.experience.removed.is_empty());

        let reverse = diff_versions(&edited, &senior);
        assert_eq!(reverse.experience.removed, vec!["exp2"]);
    }

    #[test]
    fn test_personal_info_field_changes_are_named() {
        let (senior, _) = samples();
        let mut changed = senior.clone();
        changed.personal_info.email = "jane@newmail.com".to_string();
        let diff = diff_versions(&senior, &changed);
        assert_eq!(diff.personal_info, vec!["email"]);
    }
}
