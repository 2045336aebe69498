//! Interactive job feed browser.
//!
//! Drives the same paged feed the HTTP API serves: scrolling past the
//! last visible row loads the next page, changing the filter rewinds to
//! page zero, and saving a job while signed out prompts a login and then
//! replays the save.

use std::sync::Arc;

use clap::Args;
use dialoguer::{Confirm, Input, Password, Select};
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use ledgerjobs_auth::session::manager::{ClientInfo, SessionManager};
use ledgerjobs_core::error::AppError;
use ledgerjobs_core::types::query::JobFilter;
use ledgerjobs_database::repositories::{
    JobRepository, SavedJobRepository, SessionRepository, UserRepository,
};
use ledgerjobs_entity::job::model::Job;
use ledgerjobs_service::{EndPager, FeedOutcome, JobFeed, RequestContext, SavedJobService};

/// Arguments for the browse command
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Free-text search across title, company, description, and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Minimum salary in thousands of euro
    #[arg(long)]
    pub min_salary: Option<u32>,

    /// Maximum salary in thousands of euro (omit for the default cap)
    #[arg(long)]
    pub max_salary: Option<u32>,

    /// Include jobs with no salary data
    #[arg(long)]
    pub include_missing_salary: bool,

    /// Region category (dublin, cork, remote, ...)
    #[arg(long)]
    pub location: Option<String>,

    /// Work routine (remote, hybrid, office)
    #[arg(long)]
    pub routine: Option<String>,

    /// Experience bracket (entry, mid, senior, director)
    #[arg(long)]
    pub experience: Option<String>,
}

/// Job display row for table output
#[derive(Debug, serde::Serialize, Tabled)]
struct JobRow {
    /// Row number within the feed
    #[tabled(rename = "#")]
    index: usize,
    /// Role title
    title: String,
    /// Hiring firm
    company: String,
    /// Location
    location: String,
    /// Salary
    salary: String,
    /// Posted date
    posted: String,
}

impl JobRow {
    fn from_job(index: usize, job: &Job) -> Self {
        Self {
            index,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary_display(),
            posted: {
                let date = job
                    .posted_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                if job.is_closed() {
                    format!("{date} (closed)")
                } else {
                    date
                }
            },
        }
    }
}

fn filter_from_args(args: &BrowseArgs) -> JobFilter {
    let defaults = JobFilter::default();
    JobFilter {
        search_query: args.search.clone().unwrap_or_default(),
        min_salary: args.min_salary.unwrap_or(defaults.min_salary),
        max_salary: args.max_salary.or(defaults.max_salary),
        include_missing_salary: args.include_missing_salary,
        experience: args.experience.clone().unwrap_or_default(),
        location: args.location.clone().unwrap_or_default(),
        city: String::new(),
        routine: args.routine.clone().unwrap_or_default(),
    }
}

/// Execute the browse command
pub async fn execute(
    args: &BrowseArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    let job_repo = Arc::new(JobRepository::new(pool.clone()));
    let saved_repo = Arc::new(SavedJobRepository::new(pool.clone()));
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(pool.clone()));

    let session_manager = SessionManager::new(user_repo, session_repo, config.auth.clone());
    let saved_jobs = SavedJobService::new(saved_repo);

    let mut feed = JobFeed::new(job_repo);
    feed.set_filter(filter_from_args(args));

    let mut pager = EndPager::new();
    let mut ctx: Option<RequestContext> = None;

    match feed.load_next().await? {
        FeedOutcome::EndOfData if feed.jobs().is_empty() => {
            println!("No jobs match the current filter.");
            return Ok(());
        }
        _ => {}
    }

    loop {
        render_feed(&feed, format);

        let mut choices = vec!["Save a job".to_string(), "Refresh".to_string()];
        if feed.has_more() {
            choices.insert(0, "Load more".to_string());
        }
        choices.push("Quit".to_string());

        let selection = Select::new()
            .with_prompt("Action")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        match choices[selection].as_str() {
            "Load more" => {
                // Reaching the last visible row is what triggers a page
                // load; a second look at the same row is a no-op.
                let count = feed.jobs().len();
                if count == 0 || pager.observe(count - 1, count) {
                    match feed.load_next().await {
                        Ok(FeedOutcome::EndOfData) => {
                            println!("End of listings.");
                        }
                        Ok(_) => {}
                        Err(e) => {
                            // The feed stays intact; the same page can be
                            // retried on the next loop.
                            output::print_error(&format!("Load failed: {e}"));
                            pager.reset();
                        }
                    }
                }
            }
            "Save a job" => {
                let index: usize = Input::new()
                    .with_prompt("Row number to save")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                let Some(job) = feed.jobs().get(index) else {
                    output::print_error("No such row in the feed.");
                    continue;
                };
                let job_id = job.id;
                let title = job.title.clone();

                if ctx.is_none() {
                    println!("Saving requires an account. Sign in to continue.");
                    match sign_in(&session_manager).await {
                        Ok(signed_in) => ctx = Some(signed_in),
                        Err(e) => {
                            output::print_error(&format!("Sign-in failed: {e}"));
                            continue;
                        }
                    }
                }

                if let Some(ctx) = &ctx {
                    save_job(&saved_jobs, ctx, job_id, &title).await;
                }
            }
            "Refresh" => {
                feed.refresh();
                pager.reset();
                feed.load_next().await?;
            }
            _ => break,
        }
    }

    Ok(())
}

fn render_feed(feed: &JobFeed<JobRepository>, format: OutputFormat) {
    let rows: Vec<JobRow> = feed
        .jobs()
        .iter()
        .enumerate()
        .map(|(i, job)| JobRow::from_job(i, job))
        .collect();

    output::print_list(&rows, format);

    if feed.has_more() {
        println!("  ({} shown, more available)", feed.jobs().len());
    } else {
        println!("  ({} shown, end of listings)", feed.jobs().len());
    }
}

async fn sign_in(session_manager: &SessionManager) -> Result<RequestContext, AppError> {
    let email: String = Input::new()
        .with_prompt("Email")
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

    let result = match session_manager
        .login(&email, &password, ClientInfo::default())
        .await
    {
        Ok(result) => result,
        Err(e) if e.kind == ledgerjobs_core::error::ErrorKind::Authentication => {
            let create = Confirm::new()
                .with_prompt("No account with those credentials. Create one?")
                .default(false)
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
            if !create {
                return Err(e);
            }
            session_manager
                .signup(&email, &password, None, ClientInfo::default())
                .await?
        }
        Err(e) => return Err(e),
    };

    output::print_success(&format!("Signed in as {}", result.user.email));
    Ok(RequestContext::new(
        result.user.id,
        result.session.id,
        result.user.email,
    ))
}

async fn save_job(
    saved_jobs: &SavedJobService<SavedJobRepository>,
    ctx: &RequestContext,
    job_id: Uuid,
    title: &str,
) {
    use ledgerjobs_service::SaveOutcome;

    match saved_jobs.save(ctx, job_id).await {
        Ok(SaveOutcome::Saved) => output::print_success(&format!("Saved \"{title}\"")),
        Ok(SaveOutcome::AlreadySaved) => {
            output::print_success(&format!("\"{title}\" was already saved"))
        }
        Err(e) => output::print_error(&format!("Save failed: {e}")),
    }
}
