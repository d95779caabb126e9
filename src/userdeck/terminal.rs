//! Line-oriented view for interactive sessions. Every region change is written
//! to the underlying writer as it happens.

use super::{render::Content, view::View};
use std::io::Write;
use tracing::warn;

pub struct TerminalView<W: Write> {
    out: W,
    input: String,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!("failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_loading(&mut self) {
        self.emit("Loading users...\n");
    }

    // Nothing on screen to take down.
    fn hide_loading(&mut self) {}

    fn show_error(&mut self, message: &str) {
        self.emit(&format!("Error: {message}\n"));
    }

    fn hide_error(&mut self) {}

    fn replace_content(&mut self, content: Content) {
        match content {
            Content::Cleared => {}
            Content::EmptyState(message) => self.emit(&format!("{message}\n")),
            Content::Cards(cards) => {
                let mut text = String::new();
                for card in &cards {
                    text.push('\n');
                    text.push_str(&card.to_string());
                }
                text.push_str(&format!("\n{} user(s) shown\n", cards.len()));
                self.emit(&text);
            }
        }
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.emit("Search cleared\n");
        }
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::userdeck::{model::fixtures, render::render};

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8_lossy(&view.into_inner()).into_owned()
    }

    #[test]
    fn writes_cards_with_count() {
        let mut view = TerminalView::new(Vec::new());
        view.replace_content(render(&[fixtures::leanne()]));

        let text = output(view);
        assert!(text.contains("#1 Leanne Graham\n"));
        assert!(text.contains("Email: Sincere@april.biz <mailto:Sincere@april.biz>"));
        assert!(text.ends_with("\n1 user(s) shown\n"));
    }

    #[test]
    fn writes_indicators() {
        let mut view = TerminalView::new(Vec::new());
        view.show_loading();
        view.show_error("Network response was not ok (503)");
        view.replace_content(render(&[] as &[crate::userdeck::model::UserRecord]));

        assert_eq!(
            output(view),
            "Loading users...\nError: Network response was not ok (503)\nNo user data available.\n"
        );
    }

    #[test]
    fn clear_input_reports_only_when_searching() {
        let mut view = TerminalView::new(Vec::new());
        view.clear_input();
        view.set_input_text("bret");
        assert_eq!(view.input_text(), "bret");
        view.clear_input();
        assert_eq!(view.input_text(), "");

        assert_eq!(output(view), "Search cleared\n");
    }
}
