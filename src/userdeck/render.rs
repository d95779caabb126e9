//! Maps user records onto cards. Rendering is pure: it produces a [`Content`]
//! value and the view decides how to put it on screen.

use super::model::UserRecord;
use std::{
    fmt::{self, Write as _},
    time::Duration,
};

/// Message shown in place of cards when there is nothing to display.
pub const EMPTY_STATE_MESSAGE: &str = "No user data available.";
/// Reveal delay added per card position.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// What the card container holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Content {
    #[default]
    Cleared,
    EmptyState(&'static str),
    Cards(Vec<Card>),
}

impl Content {
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Content::Cards(cards) => cards.as_slice(),
            Content::Cleared | Content::EmptyState(_) => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Link {
        href: String,
        text: String,
        new_tab: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub value: Value,
}

impl Row {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: Value::Text(value.into()),
        }
    }

    fn link(label: &'static str, href: String, text: &str, new_tab: bool) -> Self {
        Self {
            label,
            value: Value::Link {
                href,
                text: text.to_string(),
                new_tab,
            },
        }
    }
}

/// A titled group of rows inside a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub position: usize,
    pub reveal_delay: Duration,
    pub heading: String,
    pub sections: Vec<Section>,
}

/// Renders records into cards, or the empty state when there are none.
pub fn render<'a, I>(users: I) -> Content
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    let cards: Vec<Card> = users
        .into_iter()
        .enumerate()
        .map(|(position, user)| card(position, user))
        .collect();

    if cards.is_empty() {
        Content::EmptyState(EMPTY_STATE_MESSAGE)
    } else {
        Content::Cards(cards)
    }
}

#[must_use]
pub fn reveal_delay(position: usize) -> Duration {
    REVEAL_STAGGER.saturating_mul(u32::try_from(position).unwrap_or(u32::MAX))
}

fn card(position: usize, user: &UserRecord) -> Card {
    let address = &user.address;
    let company = &user.company;

    Card {
        id: user.id.to_string(),
        position,
        reveal_delay: reveal_delay(position),
        heading: user.name.clone(),
        sections: vec![
            Section {
                title: None,
                icon: None,
                rows: vec![Row::text("Username", user.username.as_str())],
            },
            Section {
                title: Some("Contact"),
                icon: Some("fas fa-address-card"),
                rows: vec![
                    Row::link("Email", format!("mailto:{}", user.email), &user.email, false),
                    Row::link("Phone", format!("tel:{}", user.phone), &user.phone, false),
                    Row::link(
                        "Website",
                        format!("https://{}", user.website),
                        &user.website,
                        true,
                    ),
                ],
            },
            Section {
                title: Some("Address"),
                icon: Some("fas fa-map-marker-alt"),
                rows: vec![
                    Row::text("Street", address.street.as_str()),
                    Row::text("Suite", address.suite.as_str()),
                    Row::text("City", address.city.as_str()),
                    Row::text("Zipcode", address.zipcode.as_str()),
                    Row::text("Geo", format!("{}, {}", address.geo.lat, address.geo.lng)),
                ],
            },
            Section {
                title: None,
                icon: None,
                rows: vec![
                    Row::text("Company", company.name.as_str()),
                    Row::text("Catchphrase", format!("\"{}\"", company.catch_phrase)),
                ],
            },
        ],
    }
}

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Value {
    fn to_html(&self) -> String {
        match self {
            Value::Text(text) => format!("<span>{}</span>", escape_html(text)),
            Value::Link {
                href,
                text,
                new_tab,
            } => {
                let target = if *new_tab { " target=\"_blank\"" } else { "" };
                format!(
                    "<a href=\"{}\"{target}>{}</a>",
                    escape_html(href),
                    escape_html(text)
                )
            }
        }
    }
}

impl Card {
    /// Animation delay in CSS notation, e.g. `0.3s`.
    #[must_use]
    pub fn css_delay(&self) -> String {
        format!("{}s", self.reveal_delay.as_secs_f64())
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(
            html,
            "<div class=\"user-card\" data-id=\"{}\" style=\"animation-delay: {}\">",
            escape_html(&self.id),
            self.css_delay()
        );
        let _ = writeln!(html, "  <h2>{}</h2>", escape_html(&self.heading));

        for section in &self.sections {
            let rows = section.rows.iter().map(|row| {
                format!(
                    "<div class=\"user-info\"><strong>{}:</strong> {}</div>",
                    row.label,
                    row.value.to_html()
                )
            });

            match section.title {
                Some(title) => {
                    let class = format!("{}-section", title.to_lowercase());
                    let _ = writeln!(html, "  <div class=\"{class}\">");
                    let icon = section
                        .icon
                        .map(|icon| format!("<i class=\"{icon}\"></i>"))
                        .unwrap_or_default();
                    let _ = writeln!(
                        html,
                        "    <div class=\"section-title\">{icon}<h3>{title}</h3></div>"
                    );
                    for row in rows {
                        let _ = writeln!(html, "    {row}");
                    }
                    let _ = writeln!(html, "  </div>");
                }
                None => {
                    for row in rows {
                        let _ = writeln!(html, "  {row}");
                    }
                }
            }
        }

        html.push_str("</div>\n");
        html
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(formatter, "{text}"),
            Value::Link { href, text, .. } => write!(formatter, "{text} <{href}>"),
        }
    }
}

/// Plain-text card used by the terminal view.
impl fmt::Display for Card {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "#{} {}", self.position + 1, self.heading)?;
        for section in &self.sections {
            let indent = if let Some(title) = section.title {
                writeln!(formatter, "  {title}")?;
                "    "
            } else {
                "  "
            };
            for row in &section.rows {
                writeln!(formatter, "{indent}{}: {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::userdeck::model::fixtures;

    fn row<'a>(card: &'a Card, label: &str) -> Option<&'a Value> {
        card.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.label == label)
            .map(|row| &row.value)
    }

    #[test]
    fn empty_input_renders_empty_state() {
        let content = render(&[] as &[UserRecord]);
        assert_eq!(content, Content::EmptyState(EMPTY_STATE_MESSAGE));
        assert!(content.cards().is_empty());
    }

    #[test]
    fn one_card_per_record_in_order() {
        let users = vec![
            fixtures::user(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
            fixtures::user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
            fixtures::user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
        ];

        let content = render(&users);
        let headings: Vec<&str> = content.cards().iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, ["Clementine Bauch", "Leanne Graham", "Ervin Howell"]);

        let ids: Vec<&str> = content.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn reveal_delay_is_staggered_by_position() {
        assert_eq!(reveal_delay(0), Duration::ZERO);
        assert_eq!(reveal_delay(1), Duration::from_millis(100));
        assert_eq!(reveal_delay(7), Duration::from_millis(700));

        let users: Vec<_> = (0..3)
            .map(|i| fixtures::user(i, "Name", "e@x.io", "City", "Co"))
            .collect();
        let delays: Vec<String> = render(&users).cards().iter().map(Card::css_delay).collect();
        assert_eq!(delays, ["0s", "0.1s", "0.2s"]);
    }

    #[test]
    fn maps_every_field() {
        let content = render(&[fixtures::leanne()]);
        let [card] = content.cards() else {
            panic!("expected exactly one card");
        };

        assert_eq!(card.heading, "Leanne Graham");
        assert_eq!(row(card, "Username"), Some(&Value::Text("Bret".to_string())));
        assert_eq!(
            row(card, "Email"),
            Some(&Value::Link {
                href: "mailto:Sincere@april.biz".to_string(),
                text: "Sincere@april.biz".to_string(),
                new_tab: false,
            })
        );
        assert_eq!(
            row(card, "Phone"),
            Some(&Value::Link {
                href: "tel:1-770-736-8031 x56442".to_string(),
                text: "1-770-736-8031 x56442".to_string(),
                new_tab: false,
            })
        );
        assert_eq!(
            row(card, "Website"),
            Some(&Value::Link {
                href: "https://hildegard.org".to_string(),
                text: "hildegard.org".to_string(),
                new_tab: true,
            })
        );
        assert_eq!(row(card, "Street"), Some(&Value::Text("Kulas Light".to_string())));
        assert_eq!(row(card, "Suite"), Some(&Value::Text("Apt. 556".to_string())));
        assert_eq!(row(card, "City"), Some(&Value::Text("Gwenborough".to_string())));
        assert_eq!(row(card, "Zipcode"), Some(&Value::Text("92998-3874".to_string())));
        assert_eq!(row(card, "Geo"), Some(&Value::Text("-37.3159, 81.1496".to_string())));
        assert_eq!(row(card, "Company"), Some(&Value::Text("Romaguera-Crona".to_string())));
        assert_eq!(
            row(card, "Catchphrase"),
            Some(&Value::Text(
                "\"Multi-layered client-server neural-net\"".to_string()
            ))
        );
    }

    #[test]
    fn card_html_contains_links() {
        let content = render(&[fixtures::leanne()]);
        let html: String = content.cards().iter().map(Card::to_html).collect();

        assert!(html.contains("<h2>Leanne Graham</h2>"));
        assert!(html.contains("<a href=\"mailto:Sincere@april.biz\">Sincere@april.biz</a>"));
        assert!(html.contains("<a href=\"tel:1-770-736-8031 x56442\">"));
        assert!(html.contains("<a href=\"https://hildegard.org\" target=\"_blank\">hildegard.org</a>"));
        assert!(html.contains("style=\"animation-delay: 0s\""));
        assert!(html.contains("<div class=\"contact-section\">"));
        assert!(html.contains("<div class=\"address-section\">"));
    }

    #[test]
    fn card_html_escapes_text() {
        let mut user = fixtures::leanne();
        user.name = "<script>alert('x')</script>".to_string();

        let content = render(&[user]);
        let html: String = content.cards().iter().map(Card::to_html).collect();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn card_text_lists_rows() {
        let content = render(&[fixtures::leanne()]);
        let text: String = content.cards().iter().map(ToString::to_string).collect();

        assert!(text.starts_with("#1 Leanne Graham\n"));
        assert!(text.contains("  Username: Bret\n"));
        assert!(text.contains("  Contact\n    Email: Sincere@april.biz <mailto:Sincere@april.biz>\n"));
        assert!(text.contains("    Geo: -37.3159, 81.1496\n"));
    }
}
