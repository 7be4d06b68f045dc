use crate::cli::{load_config, working_dir, ReportArgs};
use crate::github::{actions, failure_message};
use crate::output::{render_final, write_summary};
use crate::provider::create_analyzer;
use crate::runner::Orchestrator;
use tracing::{error, info};

pub async fn execute(args: ReportArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.projects.as_deref())?;
    let working_dir = working_dir(args.working_dir)?;

    let orchestrator = Orchestrator::new(create_analyzer(&config), working_dir);
    let run = orchestrator.run(&config.projects).await?;
    let report = render_final(&run.results);

    println!("{}", report.document);

    if let Some(report_dir) = &args.report_dir {
        write_summary(report_dir, &run.results, &report)?;
        info!("Report written to {:?}", report_dir);
    }

    if args.fail_on_findings {
        if let Some(message) = failure_message(report.error_count, run.results.len()) {
            error!("Exiting with error: {}", message);
            actions::set_failed(&message);
            std::process::exit(1);
        }
    }

    Ok(())
}
