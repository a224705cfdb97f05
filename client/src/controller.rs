use crate::error::ClientError;
use crate::gateway::Backend;
use crate::models::*;
use crate::view::{Status, View};
use std::sync::{Mutex, MutexGuard};

/// User actions the controller reacts to.
#[derive(Debug, Clone)]
pub enum Intent {
    FileSelected(Option<SelectedFile>),
    QuerySubmitted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file was selected; nothing was sent.
    Skipped,
    Uploaded(FileId),
    Rejected(String),
    Failed,
    /// A newer upload started before this one finished; its result was dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    /// Blank query; nothing was sent.
    Skipped,
    /// Another ask is still in flight and submit is disabled.
    Busy,
    Answered(AnswerResult),
    Rejected(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Upload(UploadOutcome),
    Ask(AskOutcome),
}

#[derive(Debug, Default)]
struct Session {
    file_id: Option<FileId>,
    upload_ticket: u64,
    asking: bool,
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Releases the submit control when an ask ends, including when the ask
/// future is dropped before the backend answers.
struct AskInFlight<'a, V: View> {
    session: &'a Mutex<Session>,
    view: &'a V,
    settled: bool,
}

impl<V: View> Drop for AskInFlight<'_, V> {
    fn drop(&mut self) {
        lock(self.session).asking = false;
        if !self.settled {
            log::warn!("Ask abandoned before the backend answered");
            self.view.set_status(&Status::Cleared);
        }
        self.view.set_submit_enabled(true);
    }
}

pub struct ViewController<B, V> {
    backend: B,
    view: V,
    session: Mutex<Session>,
}

impl<B: Backend, V: View> ViewController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            session: Mutex::new(Session::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn file_id(&self) -> Option<FileId> {
        lock(&self.session).file_id.clone()
    }

    pub async fn dispatch(&self, intent: Intent) -> Outcome {
        match intent {
            Intent::FileSelected(file) => Outcome::Upload(self.handle_upload(file).await),
            Intent::QuerySubmitted(query) => Outcome::Ask(self.handle_ask(&query).await),
        }
    }

    pub async fn handle_upload(&self, file: Option<SelectedFile>) -> UploadOutcome {
        let Some(file) = file else {
            return UploadOutcome::Skipped;
        };

        let ticket = {
            let mut session = lock(&self.session);
            session.upload_ticket += 1;
            session.upload_ticket
        };

        self.view.set_status(&Status::Uploading(file.name.clone()));
        let result = self.backend.upload_pdf(&file).await;

        let mut session = lock(&self.session);
        if session.upload_ticket != ticket {
            log::debug!("Discarding result of superseded upload {}", file.name);
            return UploadOutcome::Superseded;
        }

        match result {
            Ok(upload) => {
                log::info!("Uploaded {} as {}", file.name, upload.file_id);
                session.file_id = Some(upload.file_id.clone());
                self.view.set_status(&Status::Uploaded(file.name));
                UploadOutcome::Uploaded(upload.file_id)
            }
            Err(ClientError::Application { message, .. }) => {
                self.view.set_status(&Status::Error(message.clone()));
                UploadOutcome::Rejected(message)
            }
            Err(err) => {
                log::error!("Upload error: {}", err);
                self.view.set_status(&Status::UploadFailed);
                UploadOutcome::Failed
            }
        }
    }

    pub async fn handle_ask(&self, query: &str) -> AskOutcome {
        if query.trim().is_empty() {
            return AskOutcome::Skipped;
        }

        let file_id = {
            let mut session = lock(&self.session);
            if session.asking {
                return AskOutcome::Busy;
            }
            session.asking = true;
            session.file_id.clone()
        };
        let mut in_flight = AskInFlight {
            session: &self.session,
            view: &self.view,
            settled: false,
        };

        self.view.hide_result();
        self.view.set_status(&Status::Thinking);
        self.view.set_submit_enabled(false);

        let request = AskRequest {
            query: query.to_string(),
            file_id,
        };

        let outcome = match self.backend.ask(&request).await {
            Ok(answer) => {
                self.view.show_result(&answer);
                self.view.set_status(&Status::Cleared);
                AskOutcome::Answered(answer)
            }
            Err(ClientError::Application { message, .. }) => {
                self.view.set_status(&Status::Error(message.clone()));
                AskOutcome::Rejected(message)
            }
            Err(err) => {
                log::error!("Ask error: {}", err);
                self.view.set_status(&Status::AskFailed);
                AskOutcome::Failed
            }
        };

        in_flight.settled = true;
        outcome
    }
}
