//! Camp Repository Port
//!
//! Abstract interface for Camp persistence operations.
//!
//! Reads go straight to the repository. Writes are staged on a
//! [`CampUnitOfWork`] owned by a single request and submitted together
//! with [`CampUnitOfWork::save_changes`].

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{errors::DomainError, Camp};

/// A staged write against the camp store
#[derive(Debug, Clone, PartialEq)]
pub enum CampChange {
    /// Insert a new camp together with its talks and speakers
    Add(Camp),
    /// Overwrite the scalar fields and location of an existing camp (talks untouched)
    Update(Camp),
    /// Remove a camp and every talk it owns
    Delete(Camp),
}

/// Repository interface for Camp entities
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Find all Camps, newest event first
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DomainError>;

    /// Find a Camp by moniker
    async fn get_camp(&self, moniker: &str, include_talks: bool)
        -> Result<Option<Camp>, DomainError>;

    /// Find all Camps whose event starts on the given date
    async fn get_all_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DomainError>;

    /// Apply staged changes atomically, returning the number of affected records
    async fn save_changes(&self, changes: &[CampChange]) -> Result<usize, DomainError>;
}

/// Per-request change set over a [`CampRepository`]
pub struct CampUnitOfWork<'a, R: CampRepository + ?Sized> {
    repo: &'a R,
    pending: Vec<CampChange>,
}

impl<'a, R: CampRepository + ?Sized> CampUnitOfWork<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            pending: Vec::new(),
        }
    }

    /// Stage a new camp
    pub fn add(&mut self, camp: Camp) {
        self.pending.push(CampChange::Add(camp));
    }

    /// Stage an overwrite of an existing camp
    pub fn update(&mut self, camp: Camp) {
        self.pending.push(CampChange::Update(camp));
    }

    /// Stage removal of a camp
    pub fn delete(&mut self, camp: Camp) {
        self.pending.push(CampChange::Delete(camp));
    }

    /// Submit staged changes.
    ///
    /// Returns `true` only if the store reports at least one affected
    /// record; an empty unit of work saves nothing and returns `false`.
    pub async fn save_changes(self) -> Result<bool, DomainError> {
        if self.pending.is_empty() {
            return Ok(false);
        }
        let affected = self.repo.save_changes(&self.pending).await?;
        Ok(affected > 0)
    }
}
