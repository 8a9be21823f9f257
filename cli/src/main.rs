//! CLI entrypoint for trivia-judge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_application::{
    AnswerJudge, QuestionCatalog, VerifierParams, VerifyAnswerInput, VerifyAnswerUseCase,
};
use trivia_domain::{OutputFormat, QuestionId};
use trivia_infrastructure::{ConfigLoader, FileConfig, InMemoryQuestionCatalog, OpenAiJudge};
use trivia_presentation::{Cli, Command, ConsoleFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Use --help to see available commands.");
    };

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog.path.clone());
    let catalog = InMemoryQuestionCatalog::load(&catalog_path)
        .with_context(|| format!("Failed to load question bank {}", catalog_path.display()))?;
    if catalog.is_empty() {
        warn!("Question bank {} is empty", catalog_path.display());
    }

    match command {
        Command::Show { question_id } => {
            let id = QuestionId::new(question_id);
            let Some(question) = catalog.resolve(id) else {
                bail!("Question with ID {} not found", id);
            };
            print!("{}", ConsoleFormatter::format_question(&question));
        }
        Command::List { round, value } => {
            let matching: Vec<_> = catalog.in_slot(round.as_deref(), value.as_deref()).collect();
            if matching.is_empty() && (round.is_some() || value.is_some()) {
                bail!(
                    "No questions found for round='{}' and value='{}'",
                    round.as_deref().unwrap_or("*"),
                    value.as_deref().unwrap_or("*")
                );
            }
            print!("{}", ConsoleFormatter::format_listing(matching));
        }
        Command::Verify {
            question_id,
            answer,
            output,
        } => {
            // === Dependency Injection ===
            let judge = if cli.no_judge {
                info!("AI judge disabled by --no-judge");
                None
            } else {
                OpenAiJudge::from_config(&config.judge)
                    .context("Failed to read AI judge credential")?
                    .map(|j| Arc::new(j) as Arc<dyn AnswerJudge>)
            };

            let use_case = VerifyAnswerUseCase::new(Arc::new(catalog), judge).with_params(
                VerifierParams::default().with_judge_timeout(config.judge.timeout()),
            );
            info!("AI judge configured: {}", use_case.judge_configured());

            // Ctrl-C abandons a pending judge call; the fallback verdict is still printed.
            let cancellation = CancellationToken::new();
            let on_interrupt = cancellation.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            let result = use_case
                .execute_with_cancellation(VerifyAnswerInput::new(question_id, answer), &cancellation)
                .await?;

            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            match format {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format(&result)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&result)),
            }
        }
    }

    Ok(())
}

/// Report configuration issues; errors abort, warnings are logged
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
