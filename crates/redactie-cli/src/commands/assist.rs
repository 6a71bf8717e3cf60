//! `redactie assist`

use std::path::Path;

use anyhow::{bail, Context, Result};
use redactie_core::{AssistOutcome, Studio};
use tracing::info;

use super::read_source;
use crate::cli::{AssistArgs, Settings};

pub async fn run(settings: &Settings, args: AssistArgs) -> Result<()> {
    if args.write && args.input == Path::new("-") {
        bail!("--write needs a file, not stdin");
    }

    let config = settings.resolve()?;
    let mut studio = Studio::new(&config).context("Failed to set up the AI client")?;
    studio.set_document(read_source(&args.input)?);

    let outcome = studio.assist(args.task).await;
    emit(outcome, studio.document().as_str(), &args)
}

/// Report the outcome and hand the resulting document to the user
fn emit(outcome: Option<AssistOutcome>, document: &str, args: &AssistArgs) -> Result<()> {
    let Some(outcome) = outcome else {
        bail!("another assist request is still running");
    };

    let task = outcome.task();
    match outcome {
        AssistOutcome::Applied { .. } => info!(task = %task, "Document updated"),
        AssistOutcome::NoText { .. } => {
            eprintln!("No text returned for '{}'; document unchanged.", task);
        }
        AssistOutcome::Failed { alert, .. } => {
            eprintln!("{}", alert);
            bail!("assist task '{}' failed", task);
        }
    }

    if args.write {
        std::fs::write(&args.input, document)
            .with_context(|| format!("Failed to write {}", args.input.display()))?;
        info!("Wrote {}", args.input.display());
    } else {
        println!("{}", document);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactie_core::TaskKind;

    fn args(input: &Path, write: bool) -> AssistArgs {
        AssistArgs {
            task: TaskKind::Shorten,
            input: input.to_path_buf(),
            write,
        }
    }

    #[test]
    fn test_applied_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.md");
        std::fs::write(&path, "lang").unwrap();

        emit(
            Some(AssistOutcome::Applied { task: TaskKind::Shorten }),
            "kort",
            &args(&path, true),
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kort");
    }

    #[test]
    fn test_failure_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.md");
        std::fs::write(&path, "lang").unwrap();

        let result = emit(
            Some(AssistOutcome::Failed {
                task: TaskKind::Shorten,
                alert: "mis".to_string(),
            }),
            "lang",
            &args(&path, true),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("'shorten'"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "lang");
    }

    #[test]
    fn test_busy_outcome_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.md");
        let err = emit(None, "tekst", &args(&path, true)).unwrap_err();
        assert!(err.to_string().contains("still running"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_from_stdin_rejected() {
        let settings = Settings {
            config: None,
            api_key: None,
            model: None,
            language: None,
        };
        let err = run(&settings, args(Path::new("-"), true)).await.unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }
}
