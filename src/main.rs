use bundle_catalog::adapters::outbound::console::StderrProgressReporter;
use bundle_catalog::adapters::outbound::filesystem::SnapshotDirectoryReader;
use bundle_catalog::adapters::outbound::network::{BackendClient, CachingManagedBundleRepository};
use bundle_catalog::application::dto::WorkflowActionRequest;
use bundle_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bundle_catalog::application::read_models::CatalogReadModel;
use bundle_catalog::application::services::SnapshotStore;
use bundle_catalog::application::use_cases::{
    QueryCatalogUseCase, RefreshCatalogUseCase, WorkflowActionUseCase, WorkflowBoardUseCase,
};
use bundle_catalog::catalog::domain::CatalogSnapshot;
use bundle_catalog::cli::{Args, Command};
use bundle_catalog::config::{discover_config, load_config_from_path, CliOverrides, Settings};
use bundle_catalog::ports::outbound::{CatalogSource, ProgressReporter};
use bundle_catalog::shared::error::{CatalogError, ExitCode};
use bundle_catalog::shared::Result;
use clap::Parser;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Argument-level mistakes exit with 2, everything else with 3
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::Validation { .. })
        | Some(CatalogError::UnknownStatus { .. })
        | Some(CatalogError::InvalidConfig { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(
        config_file,
        CliOverrides {
            api_url: args.api_url.clone(),
        },
    )?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let mut action_failed = false;
    let model = match &args.command {
        Command::Search(search) => {
            let snapshot = load_snapshot(&args, &settings, &progress_reporter).await?;
            QueryCatalogUseCase::new(snapshot)
                .search(&search.to_request(settings.excluded_statuses.clone()))
        }
        Command::Facets(filter) => {
            let snapshot = load_snapshot(&args, &settings, &progress_reporter).await?;
            QueryCatalogUseCase::new(snapshot)
                .facets(&filter.to_request(String::new(), settings.excluded_statuses.clone()))
        }
        Command::Deps { id } => {
            let snapshot = load_snapshot(&args, &settings, &progress_reporter).await?;
            QueryCatalogUseCase::new(snapshot).dependencies(id)?
        }
        Command::Parents { id } => {
            let snapshot = load_snapshot(&args, &settings, &progress_reporter).await?;
            QueryCatalogUseCase::new(snapshot).parents(id)?
        }
        Command::Workflow(workflow) => {
            let client = backend_client(&args, &settings)?;
            let use_case = WorkflowBoardUseCase::new(
                CachingManagedBundleRepository::new(client.clone()),
                client,
                &progress_reporter,
            )
            .with_info_chunk_size(settings.info_chunk_size);
            use_case.execute(workflow.to_request()).await?
        }
        Command::Mark { status, bundles } => {
            let request = WorkflowActionRequest::MarkForStatus {
                status: status.clone(),
                bundles: bundles.clone(),
            };
            let (model, failed) = submit(&args, &settings, &progress_reporter, request).await?;
            action_failed = failed;
            model
        }
        Command::SetTarget { target, bundles } => {
            let request = WorkflowActionRequest::SetTarget {
                target: target.clone(),
                bundles: bundles.clone(),
            };
            let (model, failed) = submit(&args, &settings, &progress_reporter, request).await?;
            action_failed = failed;
            model
        }
        Command::Undo => {
            let request = WorkflowActionRequest::UndoLastChange;
            let (model, failed) = submit(&args, &settings, &progress_reporter, request).await?;
            action_failed = failed;
            model
        }
        Command::Publish => {
            let request = WorkflowActionRequest::PublishChanges;
            let (model, failed) = submit(&args, &settings, &progress_reporter, request).await?;
            action_failed = failed;
            model
        }
    };

    present(&args, &progress_reporter, &model)?;

    if action_failed {
        return Ok(ExitCode::ApplicationError);
    }
    if args.fail_on_empty && model.result_count() == 0 {
        progress_reporter.report_error("⚠️  No bundles matched.");
        return Ok(ExitCode::NoMatches);
    }
    Ok(ExitCode::Success)
}

fn backend_client(args: &Args, settings: &Settings) -> Result<BackendClient> {
    if args.source_dir.is_some() {
        return Err(CatalogError::Validation {
            message: "--source-dir only serves catalog queries; workflow commands need the backend (--api-url)".to_string(),
        }
        .into());
    }
    BackendClient::new(&settings.api_url, settings.timeout, settings.max_retries)
        .map(|client| {
            client.with_catalog_paths(&settings.bundles_path, &settings.dependencies_path)
        })
}

async fn load_snapshot(
    args: &Args,
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
) -> Result<Arc<CatalogSnapshot>> {
    match &args.source_dir {
        Some(dir) => {
            let reader = SnapshotDirectoryReader::new(dir)
                .with_file_names(&settings.bundles_path, &settings.dependencies_path);
            refresh(reader, progress_reporter).await
        }
        None => {
            let client = BackendClient::new(&settings.api_url, settings.timeout, settings.max_retries)?
                .with_catalog_paths(&settings.bundles_path, &settings.dependencies_path);
            refresh(client, progress_reporter).await
        }
    }
}

async fn refresh<CS: CatalogSource>(
    source: CS,
    progress_reporter: &StderrProgressReporter,
) -> Result<Arc<CatalogSnapshot>> {
    let use_case = RefreshCatalogUseCase::new(source, SnapshotStore::new(), progress_reporter);
    let outcome = use_case.execute().await?;
    Ok(outcome.snapshot)
}

async fn submit(
    args: &Args,
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
    request: WorkflowActionRequest,
) -> Result<(CatalogReadModel, bool)> {
    let client = backend_client(args, settings)?;
    let use_case = WorkflowActionUseCase::new(client.clone(), client, progress_reporter);
    let outcome = use_case.execute(request).await?;
    let failed = outcome.messages.has_errors();
    Ok((outcome.model, failed))
}

fn present(
    args: &Args,
    progress_reporter: &StderrProgressReporter,
    model: &CatalogReadModel,
) -> Result<()> {
    progress_reporter.report(FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format);
    let content = formatter.format(model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&content)
}
