use crate::userdeck::fetcher::DEFAULT_ENDPOINT;
use clap::{builder::ValueParser, Arg, Command};
use url::Url;

pub fn validator_endpoint() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
        match url.scheme() {
            "http" | "https" => Ok(value.to_string()),
            scheme => Err(format!("unsupported scheme {scheme}, expected http or https")),
        }
    })
}

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("URL returning the JSON array of users")
                .env("USERDECK_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT)
                .global(true)
                .value_parser(validator_endpoint()),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds, 0 disables it")
                .env("USERDECK_TIMEOUT")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
}
