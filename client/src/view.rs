use crate::models::AnswerResult;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Element IDs of the page the controller renders into.
pub mod element_ids {
    pub const QUERY_FORM: &str = "query-form";
    pub const QUERY_INPUT: &str = "query-input";
    pub const PDF_UPLOAD: &str = "pdf-upload";
    pub const STATUS_AREA: &str = "status-area";
    pub const RESULT_AREA: &str = "result-area";
    pub const ANSWER_TEXT: &str = "answer-text";
    pub const AGENT_USED: &str = "agent-used";
    pub const RATIONALE: &str = "rationale";
    pub const SUBMIT_BUTTON: &str = "submit-button";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Uploading(String),
    Uploaded(String),
    Thinking,
    Error(String),
    UploadFailed,
    AskFailed,
    Cleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Uploading(name) => write!(f, "Uploading {}...", name),
            Status::Uploaded(name) => write!(
                f,
                "✅ {} uploaded successfully. You can now ask questions about it.",
                name
            ),
            Status::Thinking => f.write_str("Thinking..."),
            Status::Error(message) => write!(f, "Error: {}", message),
            Status::UploadFailed => f.write_str("An error occurred during file upload."),
            Status::AskFailed => f.write_str("An error occurred while getting the answer."),
            Status::Cleared => Ok(()),
        }
    }
}

/// Rendering surface driven by the controller.
pub trait View: Send + Sync {
    fn set_status(&self, status: &Status);

    /// Fills the answer fields and reveals the result block.
    fn show_result(&self, result: &AnswerResult);

    fn hide_result(&self);

    fn set_submit_enabled(&self, enabled: bool);
}

/// Contents of the page's bound elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status_area: String,
    pub result_hidden: bool,
    pub answer_text: String,
    pub agent_used: String,
    pub rationale: String,
    pub submit_disabled: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            status_area: String::new(),
            result_hidden: true,
            answer_text: String::new(),
            agent_used: String::new(),
            rationale: String::new(),
            submit_disabled: false,
        }
    }
}

impl Page {
    /// Text content of a text-bearing element, looked up by its ID.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        match id {
            element_ids::STATUS_AREA => Some(&self.status_area),
            element_ids::ANSWER_TEXT => Some(&self.answer_text),
            element_ids::AGENT_USED => Some(&self.agent_used),
            element_ids::RATIONALE => Some(&self.rationale),
            _ => None,
        }
    }
}

/// Headless stand-in for the document: records what the controller renders.
#[derive(Debug, Default)]
pub struct PageView {
    page: Mutex<Page>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Page {
        self.page().clone()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl View for PageView {
    fn set_status(&self, status: &Status) {
        self.page().status_area = status.to_string();
    }

    fn show_result(&self, result: &AnswerResult) {
        let mut page = self.page();
        page.answer_text = result.answer.clone();
        page.agent_used = result.agents_label();
        page.rationale = result.rationale.clone();
        page.result_hidden = false;
    }

    fn hide_result(&self) {
        self.page().result_hidden = true;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.page().submit_disabled = !enabled;
    }
}
