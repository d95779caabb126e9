use crate::cli::globals::GlobalArgs;
use crate::userdeck::{Controller, HtmlPage, State, Trigger, UserSource};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub output: Option<PathBuf>,
    pub search: Option<String>,
    pub title: String,
}

/// Loads once into a fresh page, then applies `search` as if it had been typed.
/// Returns the controller in its final state.
pub async fn build_page<S: UserSource>(
    source: &S,
    title: &str,
    search: Option<&str>,
) -> Controller<HtmlPage> {
    let mut controller = Controller::new(HtmlPage::new(title));
    controller.load(source, Trigger::Startup).await;
    if let Some(term) = search {
        controller.on_input(term);
    }
    controller
}

/// Execute the export action. The page is written even when the load fails, so
/// the error region is visible in the output.
/// # Errors
/// Returns an error if the page cannot be written or the load failed.
pub async fn execute(args: Args) -> Result<()> {
    let fetcher = args.globals.fetcher()?;
    let controller = build_page(&fetcher, &args.title, args.search.as_deref()).await;
    let document = controller.view().to_document();

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, document)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), cards = controller.view().cards().len(), "page written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    if controller.state() == State::Failed {
        let message = controller.view().error().unwrap_or("load failed");
        return Err(anyhow!("{message}"));
    }

    Ok(())
}
