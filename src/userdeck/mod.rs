pub mod controller;
pub mod fetcher;
pub mod filter;
pub mod model;
pub mod page;
pub mod render;
pub mod session;
pub mod terminal;
pub mod view;

pub use self::controller::{Controller, State, Ticket, Trigger};
pub use self::fetcher::{FetchError, FetchErrorKind, Fetcher, UserSource};
pub use self::filter::filter;
pub use self::model::UserRecord;
pub use self::page::HtmlPage;
pub use self::render::{render, Card, Content};
pub use self::session::{Event, Session};
pub use self::terminal::TerminalView;
pub use self::view::View;
