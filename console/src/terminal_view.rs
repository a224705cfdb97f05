use ask_client::{AnswerResult, PageView, Status, View};

/// Prints page changes to stdout while keeping the page model current.
#[derive(Debug, Default)]
pub struct TerminalView {
    page: PageView,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ask_client::Page {
        self.page.snapshot()
    }
}

impl View for TerminalView {
    fn set_status(&self, status: &Status) {
        self.page.set_status(status);
        let text = status.to_string();
        if !text.is_empty() {
            println!("» {}", text);
        }
    }

    fn show_result(&self, result: &AnswerResult) {
        self.page.show_result(result);
        println!();
        println!("{}", result.answer);
        println!();
        println!("Agent(s) used: {}", result.agents_label());
        if !result.rationale.is_empty() {
            println!("Rationale: {}", result.rationale);
        }
        println!();
    }

    fn hide_result(&self) {
        self.page.hide_result();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.page.set_submit_enabled(enabled);
        log::debug!("Submit {}", if enabled { "enabled" } else { "disabled" });
    }
}
