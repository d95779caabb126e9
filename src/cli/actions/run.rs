use crate::cli::actions::{browse, export, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Browse(args) => browse::execute(args).await,
        Action::Export(args) => export::execute(args).await,
    }
}
