//! Talent profile submission and résumé storage.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use ledgerjobs_core::config::StorageConfig;
use ledgerjobs_core::error::AppError;
use ledgerjobs_core::result::AppResult;
use ledgerjobs_core::traits::storage::StorageProvider;
use ledgerjobs_database::repositories::TalentProfileRepository;
use ledgerjobs_entity::talent::{TalentProfile, UpsertTalentProfile};
use ledgerjobs_storage::resume_storage_path;

use crate::context::RequestContext;

/// Talent network operations: profile upsert and résumé upload.
#[derive(Clone)]
pub struct TalentService {
    profiles: Arc<TalentProfileRepository>,
    storage: Arc<dyn StorageProvider>,
    config: StorageConfig,
}

impl std::fmt::Debug for TalentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TalentService")
            .field("provider", &self.storage.provider_type())
            .finish()
    }
}

impl TalentService {
    /// Creates a new talent service.
    pub fn new(
        profiles: Arc<TalentProfileRepository>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            profiles,
            storage,
            config,
        }
    }

    /// The current user's profile, if they have joined the network.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<Option<TalentProfile>> {
        self.profiles.find_by_user(ctx.user_id).await
    }

    /// Create or update the current user's profile.
    ///
    /// One profile per user: resubmitting replaces the form fields and
    /// keeps the stored résumé unless the submission carries a new one.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        form: UpsertTalentProfile,
    ) -> AppResult<TalentProfile> {
        validate_profile(&form)?;
        let profile = self.profiles.upsert(ctx.user_id, &form).await?;
        info!(user_id = %ctx.user_id, profile_id = %profile.id, "Talent profile submitted");
        Ok(profile)
    }

    /// Store an uploaded résumé and record its path on the profile.
    ///
    /// The stored name is derived from the user and upload time; the
    /// candidate's own filename only contributes the extension.
    pub async fn upload_resume(
        &self,
        ctx: &RequestContext,
        original_filename: &str,
        data: Bytes,
    ) -> AppResult<TalentProfile> {
        if data.is_empty() {
            return Err(AppError::validation("Résumé file is empty"));
        }
        if data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Résumé exceeds the {} byte upload limit",
                self.config.max_upload_size_bytes
            )));
        }

        let previous = self
            .profiles
            .find_by_user(ctx.user_id)
            .await?
            .and_then(|p| p.resume_path);

        let path = resume_storage_path(&self.config, ctx.user_id, original_filename)?;
        self.storage.write_bytes(&path, data).await?;
        let profile = self.profiles.set_resume_path(ctx.user_id, &path).await?;

        // The superseded file is orphaned once the path is replaced.
        if let Some(old) = previous {
            if old != path {
                if let Err(e) = self.storage.delete(&old).await {
                    warn!(user_id = %ctx.user_id, path = old, error = %e, "Failed to remove old résumé");
                }
            }
        }

        info!(user_id = %ctx.user_id, path, "Résumé stored");
        Ok(profile)
    }

    /// The current user's stored résumé document, with its storage path.
    pub async fn resume(&self, ctx: &RequestContext) -> AppResult<(String, Bytes)> {
        let profile = self
            .profiles
            .find_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("No talent profile on record"))?;
        let path = profile
            .resume_path
            .ok_or_else(|| AppError::not_found("No résumé on file"))?;
        let data = self.storage.read_bytes(&path).await?;
        Ok((path, data))
    }
}

fn validate_profile(form: &UpsertTalentProfile) -> AppResult<()> {
    if form.full_name.trim().chars().count() < 2 {
        return Err(AppError::validation(
            "Full name must be at least 2 characters",
        ));
    }
    if !form.email.contains('@') {
        return Err(AppError::validation("A valid email address is required"));
    }
    if form.current_location.trim().chars().count() < 2 {
        return Err(AppError::validation(
            "Current location must be at least 2 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UpsertTalentProfile {
        UpsertTalentProfile {
            full_name: "Niamh Doyle".to_string(),
            email: "niamh@example.ie".to_string(),
            current_location: "Galway".to_string(),
            additional_locations: None,
            salary_expectation: Some("\u{20ac}70k".to_string()),
            linkedin_url: None,
            portfolio_url: None,
            resume_path: None,
        }
    }

    #[test]
    fn accepts_complete_profile() {
        assert!(validate_profile(&form()).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut f = form();
        f.full_name = "  ".to_string();
        assert!(validate_profile(&f).is_err());

        let mut f = form();
        f.email = "not-an-email".to_string();
        assert!(validate_profile(&f).is_err());

        let mut f = form();
        f.current_location = String::new();
        assert!(validate_profile(&f).is_err());
    }

    #[test]
    fn rejects_single_character_name_and_location() {
        let mut f = form();
        f.full_name = "X".to_string();
        assert!(validate_profile(&f).is_err());

        let mut f = form();
        f.current_location = " C ".to_string();
        assert!(validate_profile(&f).is_err());

        let mut f = form();
        f.full_name = "Jo".to_string();
        assert!(validate_profile(&f).is_ok());
    }
}
