use super::render::Content;

/// Display surface driven by the [`Controller`](super::Controller).
///
/// A view exposes four regions (card container, loading indicator, error indicator
/// and search input) and keeps whatever state it needs to show them. It never
/// talks to the network and never filters.
pub trait View {
    fn show_loading(&mut self);

    fn hide_loading(&mut self);

    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    /// Replaces everything in the card container.
    fn replace_content(&mut self, content: Content);

    /// Current text of the search input.
    fn input_text(&self) -> String;

    fn set_input_text(&mut self, text: &str);

    fn clear_input(&mut self) {
        self.set_input_text("");
    }
}
