//! Résumé storage path construction.

use chrono::Utc;
use uuid::Uuid;

use ledgerjobs_core::config::StorageConfig;
use ledgerjobs_core::error::AppError;
use ledgerjobs_core::result::AppResult;

/// Build the storage path for an uploaded résumé.
///
/// Paths are `resumes/{user_id}/{timestamp}.{ext}` so repeated uploads
/// never clobber each other and the filename the candidate chose never
/// reaches the filesystem. The extension must be on the configured
/// allowlist.
pub fn resume_storage_path(
    config: &StorageConfig,
    user_id: Uuid,
    original_filename: &str,
) -> AppResult<String> {
    let ext = original_filename
        .rsplit('.')
        .next()
        .filter(|e| *e != original_filename)
        .map(str::to_lowercase)
        .ok_or_else(|| AppError::validation("Résumé filename has no extension"))?;

    if !config.allowed_extensions.iter().any(|a| a == &ext) {
        return Err(AppError::validation(format!(
            "Résumé file type '.{ext}' is not accepted. Allowed: {}",
            config.allowed_extensions.join(", ")
        )));
    }

    Ok(format!(
        "resumes/{user_id}/{}.{ext}",
        Utc::now().timestamp_millis()
    ))
}

/// Public download URL for a stored résumé path.
pub fn resume_public_url(config: &StorageConfig, path: &str) -> String {
    format!("{}/{path}", config.public_base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_timestamped_path() {
        let config = StorageConfig::default();
        let user_id = Uuid::new_v4();
        let path = resume_storage_path(&config, user_id, "My CV.pdf").unwrap();
        assert!(path.starts_with(&format!("resumes/{user_id}/")));
        assert!(path.ends_with(".pdf"));
    }

    #[test]
    fn rejects_disallowed_extension() {
        let config = StorageConfig::default();
        assert!(resume_storage_path(&config, Uuid::new_v4(), "cv.exe").is_err());
        assert!(resume_storage_path(&config, Uuid::new_v4(), "noextension").is_err());
    }

    #[test]
    fn extension_is_case_insensitive() {
        let config = StorageConfig::default();
        let path = resume_storage_path(&config, Uuid::new_v4(), "CV.DOCX").unwrap();
        assert!(path.ends_with(".docx"));
    }

    #[test]
    fn public_url_joins_base_and_path() {
        let mut config = StorageConfig::default();
        config.public_base_url = "http://localhost:8080/files/".to_string();
        assert_eq!(
            resume_public_url(&config, "resumes/u/1.pdf"),
            "http://localhost:8080/files/resumes/u/1.pdf"
        );
    }
}
