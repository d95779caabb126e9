//! In-memory HTML document with the regions the controller drives. The document
//! can be serialized as a standalone page; the search input and reload button
//! are emitted as static controls.

use super::{
    render::{escape_html, Card, Content},
    view::View,
};
use std::fmt::Write as _;

pub const CONTAINER_ID: &str = "usersContainer";
pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const RELOAD_BUTTON_ID: &str = "reloadBtn";

const STYLE: &str = "\
.hidden { display: none; }
.user-card { opacity: 0; animation: reveal 0.4s ease forwards; }
@keyframes reveal { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HtmlPage {
    title: String,
    loading: bool,
    error: Option<String>,
    content: Content,
    input: String,
}

impl HtmlPage {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the visible error indicator, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.content.cards()
    }

    /// Serializes the container region only.
    #[must_use]
    pub fn container_html(&self) -> String {
        match &self.content {
            Content::Cleared => String::new(),
            Content::EmptyState(message) => {
                format!("<p class=\"empty-state\">{}</p>\n", escape_html(message))
            }
            Content::Cards(cards) => cards.iter().map(Card::to_html).collect(),
        }
    }

    /// Serializes the whole page.
    #[must_use]
    pub fn to_document(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " class=\"hidden\"" };
        let title = escape_html(&self.title);

        let mut html = String::new();
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"en\">");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "<meta charset=\"utf-8\">");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<style>\n{STYLE}</style>");
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        let _ = writeln!(html, "<h1>{title}</h1>");
        let _ = writeln!(
            html,
            "<input type=\"text\" id=\"{SEARCH_INPUT_ID}\" placeholder=\"Search users...\" value=\"{}\">",
            escape_html(&self.input)
        );
        let _ = writeln!(html, "<button id=\"{RELOAD_BUTTON_ID}\">Reload</button>");
        let _ = writeln!(
            html,
            "<div id=\"{LOADING_ID}\"{}>Loading users...</div>",
            hidden(self.loading)
        );
        let _ = writeln!(
            html,
            "<div id=\"{ERROR_ID}\"{}><p id=\"{ERROR_MESSAGE_ID}\">{}</p></div>",
            hidden(self.error.is_some()),
            escape_html(self.error.as_deref().unwrap_or_default())
        );
        let _ = writeln!(html, "<div id=\"{CONTAINER_ID}\">");
        html.push_str(&self.container_html());
        let _ = writeln!(html, "</div>");
        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        html
    }
}

impl View for HtmlPage {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn replace_content(&mut self, content: Content) {
        self.content = content;
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }
}
