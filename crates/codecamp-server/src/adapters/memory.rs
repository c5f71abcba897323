//! In-memory implementation of CampRepository
//!
//! Mirrors the Postgres adapter's semantics (unique monikers, talks kept on
//! update, newest event first) and can simulate an unreachable store or
//! saves that affect nothing.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use codecamp::{Camp, CampChange, CampRepository, DomainError};

#[derive(Default)]
pub struct InMemoryCampRepository {
    camps: RwLock<Vec<Camp>>,
    unavailable: AtomicBool,
    reject_saves: AtomicBool,
}

impl InMemoryCampRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with a repository error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Report zero affected records for every save
    pub fn reject_saves(&self, reject: bool) {
        self.reject_saves.store(reject, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.camps.read().await.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Repository("connection refused".to_string()));
        }
        Ok(())
    }

    async fn select<F>(&self, include_talks: bool, filter: F) -> Vec<Camp>
    where
        F: Fn(&Camp) -> bool,
    {
        let mut camps: Vec<Camp> = self
            .camps
            .read()
            .await
            .iter()
            .filter(|camp| filter(camp))
            .cloned()
            .map(|mut camp| {
                if !include_talks {
                    camp.talks.clear();
                }
                camp
            })
            .collect();

        camps.sort_by(|a, b| {
            b.event_date
                .cmp(&a.event_date)
                .then_with(|| a.moniker.cmp(&b.moniker))
        });
        camps
    }
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DomainError> {
        self.check_available()?;
        Ok(self.select(include_talks, |_| true).await)
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DomainError> {
        self.check_available()?;
        Ok(self
            .select(include_talks, |camp| camp.moniker == moniker)
            .await
            .into_iter()
            .next())
    }

    async fn get_all_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DomainError> {
        self.check_available()?;
        Ok(self
            .select(include_talks, |camp| camp.event_date == date)
            .await)
    }

    async fn save_changes(&self, changes: &[CampChange]) -> Result<usize, DomainError> {
        self.check_available()?;
        if self.reject_saves.load(Ordering::SeqCst) {
            return Ok(0);
        }

        let mut camps = self.camps.write().await;
        let mut staged = camps.clone();
        let mut affected = 0;

        for change in changes {
            match change {
                CampChange::Add(camp) => {
                    if staged.iter().any(|c| c.moniker == camp.moniker) {
                        return Err(DomainError::Conflict("Moniker in use".to_string()));
                    }
                    staged.push(camp.clone());
                    affected += 1 + camp.talks.len();
                }
                CampChange::Update(camp) => {
                    if let Some(stored) = staged.iter_mut().find(|c| c.id == camp.id) {
                        let talks = std::mem::take(&mut stored.talks);
                        *stored = Camp {
                            talks,
                            ..camp.clone()
                        };
                        affected += 1;
                    }
                }
                CampChange::Delete(camp) => {
                    if let Some(pos) = staged.iter().position(|c| c.id == camp.id) {
                        let removed = staged.remove(pos);
                        affected += 1 + removed.talks.len();
                    }
                }
            }
        }

        *camps = staged;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camp(moniker: &str) -> Camp {
        Camp::new(
            moniker.to_string(),
            "Test Camp".to_string(),
            NaiveDate::from_ymd_opt(2018, 3, 18).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_duplicate_add_is_conflict_and_saves_nothing() {
        let repo = InMemoryCampRepository::new();

        let err = repo
            .save_changes(&[
                CampChange::Add(camp("ATL2018")),
                CampChange::Add(camp("ATL2018")),
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_add_over_stored_moniker_is_conflict() {
        let repo = InMemoryCampRepository::new();
        repo.save_changes(&[CampChange::Add(camp("ATL2018"))])
            .await
            .unwrap();

        let err = repo
            .save_changes(&[CampChange::Add(camp("ATL2018"))])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }
}
