use crate::cli::{
    actions::{browse, export, Action},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let endpoint = matches
        .get_one::<String>("endpoint")
        .context("missing required argument: --endpoint")?;
    let endpoint = Url::parse(endpoint).context("invalid USERDECK_ENDPOINT")?;
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(10);

    let globals = GlobalArgs::new(endpoint).with_timeout_secs(timeout);

    match matches.subcommand() {
        Some(("export", sub_m)) => Ok(Action::Export(export::Args {
            globals,
            output: sub_m.get_one::<String>("output").map(PathBuf::from),
            search: sub_m.get_one::<String>("search").cloned(),
            title: sub_m
                .get_one::<String>("title")
                .cloned()
                .unwrap_or_else(|| "User Directory".to_string()),
        })),
        // `browse` is also what runs without a subcommand.
        _ => Ok(Action::Browse(browse::Args { globals })),
    }
}
