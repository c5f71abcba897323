//! Camp Application Service (Use Case)
//!
//! Orchestrates the camp resource operations. Every outcome other than
//! success comes back as a [`CampError`]; repository failures surface as
//! [`CampError::ServerFailure`] through `?`.

use std::sync::Arc;

use chrono::NaiveDate;

use codecamp::{Camp, CampRepository, CampUnitOfWork, Moniker};

use super::CampError;
use crate::models::CampModel;

/// Base path of the camp resource
pub const CAMPS_PATH: &str = "/api/camps";

/// Canonical location of a camp, or `None` if the moniker cannot be used in a URL
pub fn resource_location(moniker: &str) -> Option<String> {
    Moniker::parse(moniker)
        .ok()
        .map(|m| format!("{}/{}", CAMPS_PATH, m))
}

/// Application service for Camp operations
pub struct CampService<R: CampRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CampRepository + ?Sized> CampService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Camps; an empty store is a successful empty list
    pub async fn list(&self, include_talks: bool) -> Result<Vec<Camp>, CampError> {
        Ok(self.repo.get_all_camps(include_talks).await?)
    }

    /// Get a Camp by moniker
    pub async fn get(&self, moniker: &str) -> Result<Camp, CampError> {
        self.repo
            .get_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))
    }

    /// Get all Camps starting on `date`; no match is NotFound, unlike `list`
    pub async fn search_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, CampError> {
        let camps = self
            .repo
            .get_all_camps_by_event_date(date, include_talks)
            .await?;

        if camps.is_empty() {
            tracing::warn!("No camps found on {}", date);
            return Err(CampError::NotFound(format!(
                "Could not find any camps on {}",
                date
            )));
        }

        Ok(camps)
    }

    /// Create a new Camp, returning its resource location and the stored record
    pub async fn create(&self, model: CampModel) -> Result<(String, Camp), CampError> {
        let moniker = model
            .moniker
            .clone()
            .ok_or_else(|| CampError::BadRequest("moniker is required".to_string()))?;

        if self.repo.get_camp(&moniker, false).await?.is_some() {
            tracing::warn!("Rejected camp creation, moniker in use: {}", moniker);
            return Err(CampError::Conflict("Moniker in use".to_string()));
        }

        let location = resource_location(&moniker).ok_or_else(|| {
            CampError::BadRequest(format!("Could not use current moniker: {}", moniker))
        })?;

        let camp = model.into_camp()?;

        let mut uow = CampUnitOfWork::new(self.repo.as_ref());
        uow.add(camp.clone());
        if !uow.save_changes().await? {
            return Err(CampError::BadRequest("Failed to save new camp".to_string()));
        }

        tracing::info!("Created Camp: {} ({})", camp.name, camp.moniker);

        Ok((location, camp))
    }

    /// Overlay the sent fields of `model` onto the Camp at `moniker`
    pub async fn update(&self, moniker: &str, model: CampModel) -> Result<Camp, CampError> {
        let mut camp = self
            .repo
            .get_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))?;

        if let Some(sent) = model.moniker.as_deref() {
            if sent != moniker {
                return Err(CampError::BadRequest(format!(
                    "Moniker cannot be changed from {} to {}",
                    moniker, sent
                )));
            }
        }

        model.apply_to(&mut camp)?;

        let mut uow = CampUnitOfWork::new(self.repo.as_ref());
        uow.update(camp.clone());
        if !uow.save_changes().await? {
            return Err(CampError::BadRequest("Failed to update camp".to_string()));
        }

        tracing::info!("Updated Camp: {}", camp.moniker);

        Ok(camp)
    }

    /// Delete the Camp at `moniker` together with its talks
    pub async fn delete(&self, moniker: &str) -> Result<(), CampError> {
        let camp = self
            .repo
            .get_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))?;

        let mut uow = CampUnitOfWork::new(self.repo.as_ref());
        uow.delete(camp);
        if !uow.save_changes().await? {
            return Err(CampError::BadRequest("Failed to delete the camp".to_string()));
        }

        tracing::info!("Deleted Camp: {}", moniker);

        Ok(())
    }
}

fn not_found(moniker: &str) -> CampError {
    tracing::warn!("Camp not found: {}", moniker);
    CampError::NotFound(format!("Could not find camp with moniker of {}", moniker))
}
