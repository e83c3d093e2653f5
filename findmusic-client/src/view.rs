use crate::render::DisplayFragment;
use crate::util::escape_html;

/// The display regions a submission writes to. Every call fully replaces its region.
pub trait ResultsView {
    fn show_status(&mut self, text: &str);
    fn show_main(&mut self, fragment: &DisplayFragment);
    fn show_secondary(&mut self, fragment: &DisplayFragment);
    fn clear_results(&mut self);
}

/// In-memory HTML regions: the status line as escaped text, the two lists as markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    pub status: String,
    pub main: String,
    pub secondary: String,
}

impl ResultsView for HtmlPage {
    fn show_status(&mut self, text: &str) {
        self.status = escape_html(text);
    }

    fn show_main(&mut self, fragment: &DisplayFragment) {
        self.main = fragment.to_html();
    }

    fn show_secondary(&mut self, fragment: &DisplayFragment) {
        self.secondary = fragment.to_html();
    }

    fn clear_results(&mut self) {
        self.main.clear();
        self.secondary.clear();
    }
}
