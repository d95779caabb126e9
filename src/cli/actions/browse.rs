use crate::cli::globals::GlobalArgs;
use crate::userdeck::{Event, Session, TerminalView};
use anyhow::Result;
use std::{io::Write, sync::Arc};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    sync::mpsc,
};
use tracing::{debug, info, warn};

const HELP: &str = "Type to search, empty line shows everyone, :reload to refetch, :quit to exit\n";

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Translates one line of terminal input into a session event.
#[must_use]
pub fn parse_line(line: &str) -> Event {
    match line.trim() {
        ":r" | ":reload" => Event::Reload,
        ":q" | ":quit" => Event::Quit,
        _ => Event::Input(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Forwards input lines as events until EOF, `:quit`, or the session goes away.
///
/// # Errors
/// Returns an error if reading from `input` fails.
pub async fn read_events<R>(input: R, events: mpsc::Sender<Event>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    while let Some(line) = lines.next_line().await? {
        let event = parse_line(&line);
        let quit = event == Event::Quit;

        if events.send(event).await.is_err() || quit {
            break;
        }
    }

    debug!("input closed");
    Ok(())
}

/// Execute the browse action.
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn execute(args: Args) -> Result<()> {
    let fetcher = Arc::new(args.globals.fetcher()?);
    info!(endpoint = %fetcher.endpoint(), "starting browse session");

    let mut out = std::io::stdout();
    out.write_all(HELP.as_bytes())?;

    let (tx, rx) = mpsc::channel(32);
    let reader = tokio::spawn(async move {
        if let Err(err) = read_events(tokio::io::stdin(), tx).await {
            warn!("failed to read input: {err}");
        }
    });

    let controller = Session::new(fetcher, TerminalView::new(out)).run(rx).await;
    reader.abort();

    debug!(state = ?controller.state(), cached = controller.cache().len(), "session ended");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let cases = [
            (":r", Event::Reload),
            (":reload", Event::Reload),
            ("  :reload  ", Event::Reload),
            (":q", Event::Quit),
            (":quit", Event::Quit),
            ("", Event::Input(String::new())),
            ("ville", Event::Input("ville".to_string())),
            (" South Elvis", Event::Input(" South Elvis".to_string())),
            ("bret\r", Event::Input("bret".to_string())),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_line(line), expected, "line {line:?}");
        }
    }

    #[tokio::test]
    async fn test_read_events_stops_at_quit() -> Result<()> {
        let input: &[u8] = b"ville\n:reload\n\n:quit\nignored\n";
        let (tx, mut rx) = mpsc::channel(8);

        read_events(input, tx).await?;

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        assert_eq!(
            events,
            [
                Event::Input("ville".to_string()),
                Event::Reload,
                Event::Input(String::new()),
                Event::Quit,
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_read_events_ends_at_eof() -> Result<()> {
        let input: &[u8] = b"leanne";
        let (tx, mut rx) = mpsc::channel(8);

        read_events(input, tx).await?;

        assert_eq!(rx.recv().await, Some(Event::Input("leanne".to_string())));
        assert_eq!(rx.recv().await, None);
        Ok(())
    }
}
