//! `export` and `import` subcommands

use std::io::{BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use acm_validator_core::services::{ExportService, ImportOptions, ImportService};
use acm_validator_core::types::{ExportOutput, ImportReport, ReconcileOutcome, SkipReason};
use acm_validator_core::{Confirmer, FixedConfirmer, PromptConfirmer, ServiceContext};
use acm_validator_provider::{AcmProvider, Route53Provider};
use anyhow::{Context, Result};

use crate::cli::{Cli, Command};
use crate::config::RunConfig;

/// Run one subcommand. `Err` only for failures that abort the whole run.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export { output } => {
            let config = RunConfig::load(&cli.global)?;
            export(&build_context(&config)?, output.as_deref()).await
        }
        Command::Import { file } => {
            // Read the file first: an unreadable file needs no credentials
            let input = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let config = RunConfig::load(&cli.global)?;
            import(&build_context(&config)?, &input, &config).await
        }
    }
}

/// Build the AWS adapters and wire them into a service context.
fn build_context(config: &RunConfig) -> Result<Arc<ServiceContext>> {
    let acm = AcmProvider::new(config.credentials.clone(), config.region.clone())
        .context("Failed to create ACM client")?;
    let route53 = Arc::new(
        Route53Provider::new(config.credentials.clone())
            .context("Failed to create Route 53 client")?,
    );

    match config.profile.as_deref() {
        Some(profile) => tracing::info!("Profile '{profile}', ACM region {}", acm.region()),
        None => tracing::info!("Environment credentials, ACM region {}", acm.region()),
    }

    Ok(Arc::new(ServiceContext::new(
        Arc::new(acm),
        route53.clone(),
        route53,
    )))
}

async fn export(ctx: &Arc<ServiceContext>, output: Option<&Path>) -> Result<()> {
    let service = ExportService::new(Arc::clone(ctx));
    let report = service
        .export()
        .await
        .context("Export aborted")?;

    for failure in &report.failures {
        tracing::warn!("{}: {}", failure.arn, failure.reason);
    }

    let rendered = ExportService::render(&report)?;
    match (&rendered, output) {
        (ExportOutput::Table(text), Some(path)) => {
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} record(s) to {}", report.records.len(), path.display());
        }
        (ExportOutput::Table(text), None) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
        (other, _) => {
            if let Some(message) = other.message() {
                println!("{message}");
            }
        }
    }

    eprintln!(
        "Export: {} certificate(s), {} pending record(s), {} failure(s)",
        report.certificate_count,
        report.records.len(),
        report.failures.len()
    );
    Ok(())
}

async fn import(ctx: &Arc<ServiceContext>, input: &str, config: &RunConfig) -> Result<()> {
    let service = ImportService::new(Arc::clone(ctx));
    let options = ImportOptions {
        dry_run: config.dry_run,
    };

    let confirmer: Box<dyn Confirmer> = if config.assume_yes {
        Box::new(FixedConfirmer(true))
    } else {
        Box::new(PromptConfirmer::new(
            BufReader::new(std::io::stdin()),
            std::io::stderr(),
        ))
    };

    let report = service
        .import(input, options, confirmer.as_ref())
        .await
        .context("Import aborted")?;

    print_import_summary(&report);
    Ok(())
}

fn print_import_summary(report: &ImportReport) {
    for rejection in &report.rejected_rows {
        eprintln!("  line {}: rejected ({})", rejection.line, rejection.reason);
    }
    for item in &report.items {
        if let ReconcileOutcome::Failed(reason) = &item.outcome {
            eprintln!("  {}: failed ({reason})", item.record.name());
        }
    }

    eprintln!(
        "Import: {} record(s), {} applied, {} failed, skipped: {} no zone, {} invalid domain, {} declined, {} dry-run; {} row(s) rejected",
        report.items.len(),
        report.applied_count(),
        report.failed_count(),
        report.skipped_count(SkipReason::ZoneNotFound),
        report.skipped_count(SkipReason::InvalidDomain),
        report.skipped_count(SkipReason::Declined),
        report.skipped_count(SkipReason::DryRun),
        report.rejected_rows.len()
    );
}
