//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ledgerjobs_entity::job::model::CreateJob;
use ledgerjobs_entity::talent::model::UpsertTalentProfile;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Job posting request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Role title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Hiring firm or practice.
    #[validate(length(min = 1, max = 255))]
    pub company: String,
    /// Full listing description.
    #[validate(length(min = 1))]
    pub description: String,
    /// Free-text location.
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    /// Normalised region category.
    pub location_category: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Work routine.
    pub routine: Option<String>,
    /// Contract type.
    pub employment_type: Option<String>,
    /// Experience bracket.
    pub experience_level: Option<String>,
    /// Minimum years of experience.
    pub min_experience: Option<i32>,
    /// Lower salary bound in euro per year.
    pub salary_min: Option<i32>,
    /// Upper salary bound in euro per year.
    pub salary_max: Option<i32>,
    /// Display-ready salary text.
    pub salary_range: Option<String>,
    /// Notable perks.
    pub perks: Option<String>,
    /// Link to the original posting.
    #[validate(url(message = "job_url must be a valid URL"))]
    pub job_url: String,
    /// When the listing was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Application deadline.
    pub closing_date: Option<DateTime<Utc>>,
}

impl From<CreateJobRequest> for CreateJob {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            description: req.description,
            location: req.location,
            location_category: req.location_category,
            city: req.city,
            routine: req.routine,
            employment_type: req.employment_type,
            experience_level: req.experience_level,
            min_experience: req.min_experience,
            salary_min: req.salary_min,
            salary_max: req.salary_max,
            salary_range: req.salary_range,
            perks: req.perks,
            job_url: req.job_url,
            posted_date: req.posted_date,
            closing_date: req.closing_date,
        }
    }
}

/// Talent profile submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TalentProfileRequest {
    /// Candidate's full name.
    #[validate(length(min = 2, max = 255))]
    pub full_name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Current location.
    #[validate(length(min = 2, max = 255))]
    pub current_location: String,
    /// Other acceptable locations.
    pub additional_locations: Option<String>,
    /// Salary expectation.
    pub salary_expectation: Option<String>,
    /// LinkedIn profile URL.
    #[validate(url)]
    pub linkedin_url: Option<String>,
    /// Portfolio URL.
    #[validate(url)]
    pub portfolio_url: Option<String>,
}

impl From<TalentProfileRequest> for UpsertTalentProfile {
    fn from(req: TalentProfileRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            current_location: req.current_location,
            additional_locations: req.additional_locations,
            salary_expectation: req.salary_expectation,
            linkedin_url: req.linkedin_url,
            portfolio_url: req.portfolio_url,
            resume_path: None,
        }
    }
}

/// Newsletter subscription body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    /// Email address to subscribe.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn talent_profile_requires_two_character_name_and_location() {
        let req = TalentProfileRequest {
            full_name: "N".to_string(),
            email: "niamh@example.ie".to_string(),
            current_location: "Galway".to_string(),
            additional_locations: None,
            salary_expectation: None,
            linkedin_url: None,
            portfolio_url: None,
        };
        assert!(req.validate().is_err());

        let req = TalentProfileRequest {
            full_name: "Niamh Doyle".to_string(),
            current_location: "G".to_string(),
            ..req
        };
        assert!(req.validate().is_err());

        let req = TalentProfileRequest {
            current_location: "Galway".to_string(),
            ..req
        };
        assert!(req.validate().is_ok());
    }
}
