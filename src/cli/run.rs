use crate::cli::{load_config, working_dir, RunArgs};
use crate::config::Config;
use crate::error::ConfigError;
use crate::github::{actions, context, failure_message, CommentReconciler, GhClient};
use crate::output::{render_final, with_marker, write_summary};
use crate::provider::create_analyzer;
use crate::runner::Orchestrator;
use std::path::Path;
use tracing::{error, info};

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    if args.dry_run {
        let config = load_config(args.config.as_deref(), args.projects.as_deref())?;
        let working_dir = working_dir(args.working_dir)?;
        return preview(&config, &working_dir, args.report_dir.as_deref()).await;
    }

    // Runs outside a pull request have nothing to comment on
    let Some(pr) = context::resolve(
        args.repo.as_deref(),
        args.pr,
        args.event_path.as_deref(),
    )?
    else {
        info!("No pull request associated with this run; nothing to do");
        return Ok(());
    };

    let token = args
        .token
        .filter(|t| !t.is_empty())
        .ok_or(ConfigError::MissingInput("token"))?;

    let config = load_config(args.config.as_deref(), args.projects.as_deref())?;
    let working_dir = working_dir(args.working_dir)?;

    info!(
        "Reporting {} projects on {}#{}",
        config.projects.len(),
        pr.repo,
        pr.number
    );

    let client = GhClient::new(pr.repo.clone(), pr.number, token);
    let reconciler = CommentReconciler::new(
        &client,
        config.marker.clone(),
        config.author.clone(),
        config.per_page,
    );
    let orchestrator = Orchestrator::new(create_analyzer(&config), working_dir);

    let outcome = reconciler
        .publish(&config.projects, orchestrator.run(&config.projects))
        .await?;

    info!(
        "Report for {}#{} is in comment {}",
        pr.repo, pr.number, outcome.comment_id
    );

    if let Some(report_dir) = &args.report_dir {
        write_summary(report_dir, &outcome.results, &outcome.report)?;
        info!("Report written to {:?}", report_dir);
    }

    if let Some(message) = outcome.failure_message() {
        error!("Exiting with error: {}", message);
        actions::set_failed(&message);
        std::process::exit(1);
    }

    Ok(())
}

/// Analyze and print the comment body that would be posted
async fn preview(
    config: &Config,
    working_dir: &Path,
    report_dir: Option<&Path>,
) -> anyhow::Result<()> {
    info!("DRY RUN - the pull request will not be touched");

    let orchestrator = Orchestrator::new(create_analyzer(config), working_dir.to_path_buf());
    let run = orchestrator.run(&config.projects).await?;
    let report = render_final(&run.results);

    println!("{}", with_marker(&config.marker, &report.document));

    if let Some(report_dir) = report_dir {
        write_summary(report_dir, &run.results, &report)?;
        info!("Report written to {:?}", report_dir);
    }

    if let Some(message) = failure_message(report.error_count, run.results.len()) {
        error!("Exiting with error: {}", message);
        actions::set_failed(&message);
        std::process::exit(1);
    }

    Ok(())
}
