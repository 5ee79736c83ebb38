//! Owning editing session for a resume document
//!
//! One session owns exactly one document value. Every edit replaces a whole
//! field through [`ResumePatch`], producing a new document value by
//! clone-with-replacement; no partial in-place mutation is ever visible
//! outside the session. Entry-level helpers (add/update/remove by id) are
//! expressed on top of whole-list replacement.

use crate::model::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ResumeDocument, SkillSet, TemplateKind,
};

/// Whole-field replacement applied to the session's document.
#[derive(Debug, Clone)]
pub enum ResumePatch {
    Template(TemplateKind),
    Font(String),
    Contact(ContactInfo),
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(SkillSet),
}

#[derive(Debug, Default)]
pub struct ResumeSession {
    document: ResumeDocument,
}

impl ResumeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: ResumeDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Replace the whole document, e.g. when loading a preset.
    pub fn load(&mut self, document: ResumeDocument) {
        self.document = document;
    }

    pub fn apply(&mut self, patch: ResumePatch) {
        let mut next = self.document.clone();
        match patch {
            ResumePatch::Template(template) => next.template = template,
            ResumePatch::Font(font) => next.font = font,
            ResumePatch::Contact(contact) => next.contact = contact,
            ResumePatch::Summary(summary) => next.summary = summary,
            ResumePatch::Experience(experience) => next.experience = experience,
            ResumePatch::Education(education) => next.education = education,
            ResumePatch::Skills(skills) => next.skills = skills,
        }
        self.document = next;
    }

    /// Next unused experience id, "exp-N".
    pub fn allocate_experience_id(&self) -> String {
        format!(
            "exp-{}",
            next_numeric_suffix(self.document.experience.iter().map(|e| e.id.as_str()), "exp-")
        )
    }

    /// Next unused education id, "edu-N".
    pub fn allocate_education_id(&self) -> String {
        format!(
            "edu-{}",
            next_numeric_suffix(self.document.education.iter().map(|e| e.id.as_str()), "edu-")
        )
    }

    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        let mut list = self.document.experience.clone();
        list.push(entry);
        self.apply(ResumePatch::Experience(list));
    }

    /// Replaces the entry with the matching id. Returns false when no entry
    /// has that id; the document is left untouched.
    pub fn update_experience(&mut self, id: &str, entry: ExperienceEntry) -> bool {
        let mut list = self.document.experience.clone();
        match list.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = entry;
                self.apply(ResumePatch::Experience(list));
                true
            }
            None => false,
        }
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.document.experience.len();
        let list: Vec<ExperienceEntry> = self
            .document
            .experience
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = list.len() != before;
        if removed {
            self.apply(ResumePatch::Experience(list));
        }
        removed
    }

    pub fn add_education(&mut self, entry: EducationEntry) {
        let mut list = self.document.education.clone();
        list.push(entry);
        self.apply(ResumePatch::Education(list));
    }

    pub fn update_education(&mut self, id: &str, entry: EducationEntry) -> bool {
        let mut list = self.document.education.clone();
        match list.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = entry;
                self.apply(ResumePatch::Education(list));
                true
            }
            None => false,
        }
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        let before = self.document.education.len();
        let list: Vec<EducationEntry> = self
            .document
            .education
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = list.len() != before;
        if removed {
            self.apply(ResumePatch::Education(list));
        }
        removed
    }
}

/// Smallest N such that `prefix-N` collides with no existing id.
fn next_numeric_suffix<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
