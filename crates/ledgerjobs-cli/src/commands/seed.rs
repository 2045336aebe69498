//! Load sample job listings for local development.

use chrono::{Duration, Utc};
use clap::Args;

use crate::output;
use ledgerjobs_core::error::AppError;
use ledgerjobs_database::repositories::JobRepository;
use ledgerjobs_entity::job::model::CreateJob;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip seeding when the jobs table already has rows
    #[arg(long, default_value = "true")]
    pub skip_if_populated: bool,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let jobs = JobRepository::new(pool);

    if args.skip_if_populated {
        let existing = jobs.count_all().await?;
        if existing > 0 {
            println!("Jobs table already has {existing} rows, skipping seed.");
            return Ok(());
        }
    }

    let samples = sample_jobs();
    let total = samples.len();
    for job in &samples {
        jobs.create(job).await?;
    }

    output::print_success(&format!("Seeded {total} job listings."));
    Ok(())
}

fn sample_jobs() -> Vec<CreateJob> {
    let now = Utc::now();
    vec![
        CreateJob {
            title: "Financial Accountant".to_string(),
            company: "Murphy & Co Chartered Accountants".to_string(),
            description: "Newly qualified ACA for a growing Dublin practice. \
                          Monthly management accounts, statutory reporting, and \
                          client advisory work."
                .to_string(),
            location: "Dublin 2".to_string(),
            location_category: Some("dublin".to_string()),
            city: Some("Dublin".to_string()),
            routine: Some("hybrid".to_string()),
            employment_type: Some("permanent".to_string()),
            experience_level: Some("entry".to_string()),
            min_experience: Some(0),
            salary_min: Some(55_000),
            salary_max: Some(65_000),
            salary_range: Some("€55k - €65k".to_string()),
            perks: Some("Pension, exam support, hybrid working".to_string()),
            job_url: "https://example.com/jobs/financial-accountant".to_string(),
            posted_date: Some(now - Duration::days(2)),
            closing_date: Some(now + Duration::days(28)),
        },
        CreateJob {
            title: "Audit Senior".to_string(),
            company: "Atlantic Audit Partners".to_string(),
            description: "Audit senior for a mixed portfolio of owner-managed \
                          businesses across Munster. Lead fieldwork teams and \
                          report directly to partners."
                .to_string(),
            location: "Cork".to_string(),
            location_category: Some("cork".to_string()),
            city: Some("Cork".to_string()),
            routine: Some("office".to_string()),
            employment_type: Some("permanent".to_string()),
            experience_level: Some("mid".to_string()),
            min_experience: Some(3),
            salary_min: Some(60_000),
            salary_max: Some(75_000),
            salary_range: Some("€60k - €75k".to_string()),
            perks: None,
            job_url: "https://example.com/jobs/audit-senior".to_string(),
            posted_date: Some(now - Duration::days(5)),
            closing_date: None,
        },
        CreateJob {
            title: "Group Financial Controller".to_string(),
            company: "Shannon Foods Group".to_string(),
            description: "Senior finance leader for a food manufacturing group. \
                          Own consolidated reporting, treasury, and a team of \
                          eight across two sites."
                .to_string(),
            location: "Limerick".to_string(),
            location_category: Some("munster".to_string()),
            city: Some("Limerick".to_string()),
            routine: Some("hybrid".to_string()),
            employment_type: Some("permanent".to_string()),
            experience_level: Some("director".to_string()),
            min_experience: Some(10),
            salary_min: Some(110_000),
            salary_max: None,
            salary_range: Some("€110k+".to_string()),
            perks: Some("Car allowance, bonus, healthcare".to_string()),
            job_url: "https://example.com/jobs/group-financial-controller".to_string(),
            posted_date: Some(now - Duration::days(1)),
            closing_date: Some(now + Duration::days(21)),
        },
        CreateJob {
            title: "Tax Consultant (Remote)".to_string(),
            company: "Clover Tax Advisory".to_string(),
            description: "Fully remote CTA/ACA dual-qualified consultant for \
                          private client and SME tax planning."
                .to_string(),
            location: "Remote, Ireland".to_string(),
            location_category: Some("remote".to_string()),
            city: None,
            routine: Some("remote".to_string()),
            employment_type: Some("contract".to_string()),
            experience_level: Some("senior".to_string()),
            min_experience: Some(5),
            salary_min: None,
            salary_max: None,
            salary_range: None,
            perks: Some("Fully remote, flexible hours".to_string()),
            job_url: "https://example.com/jobs/tax-consultant-remote".to_string(),
            posted_date: Some(now - Duration::days(10)),
            closing_date: None,
        },
        CreateJob {
            title: "Practice Accountant".to_string(),
            company: "West Coast Accounting".to_string(),
            description: "Part-qualified or newly qualified accountant for a \
                          friendly Galway practice. Broad exposure to accounts \
                          prep, VAT, and payroll."
                .to_string(),
            location: "Galway".to_string(),
            location_category: Some("connacht".to_string()),
            city: Some("Galway".to_string()),
            routine: Some("office".to_string()),
            employment_type: Some("permanent".to_string()),
            experience_level: Some("entry".to_string()),
            min_experience: Some(1),
            salary_min: Some(45_000),
            salary_max: Some(55_000),
            salary_range: Some("€45k - €55k".to_string()),
            perks: None,
            job_url: "https://example.com/jobs/practice-accountant".to_string(),
            posted_date: None,
            closing_date: None,
        },
    ]
}
