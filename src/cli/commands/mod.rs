mod endpoint;
mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userdeck")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand(
            Command::new("browse")
                .about("Interactive search; type to filter, :reload to refetch, :quit to exit"),
        )
        .subcommand(
            Command::new("export")
                .about("Load once and write the card list as an HTML page")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("File to write, stdout when omitted")
                        .env("USERDECK_OUTPUT"),
                )
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .help("Initial search text applied to the loaded users"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Page title")
                        .default_value("User Directory"),
                ),
        );

    let command = endpoint::with_args(command);
    logging::with_args(command)
}
