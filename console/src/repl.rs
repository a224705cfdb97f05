use crate::commands::{self, Command};
use crate::terminal_view::TerminalView;
use anyhow::Result;
use ask_client::{AskOutcome, Backend, Intent, Outcome, SelectedFile, Status, View, ViewController};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

pub type Controller<B> = ViewController<B, TerminalView>;

/// Reads commands until `:quit` or end of input, running each dispatch as its
/// own task. Returns once every started task has finished.
pub async fn run<B, R>(controller: Arc<Controller<B>>, input: R) -> Result<()>
where
    B: Backend + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut tasks = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        while tasks.try_join_next().is_some() {}

        match commands::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{}", commands::HELP),
            Command::Unknown(name) => println!("Unknown command :{} (try :help)", name),
            Command::Logs => {
                tasks.spawn(show_logs(controller.clone()));
            }
            Command::Upload(path) => {
                if path.is_none() {
                    println!("Usage: :upload <path>");
                }
                tasks.spawn(upload(controller.clone(), path));
            }
            Command::Ask(query) => {
                tasks.spawn(ask(controller.clone(), query));
            }
        }
    }

    if !tasks.is_empty() {
        log::debug!("Waiting for {} pending request(s)", tasks.len());
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            log::error!("Request task failed: {}", err);
        }
    }
    Ok(())
}

async fn upload<B: Backend>(controller: Arc<Controller<B>>, path: Option<PathBuf>) {
    let file = match path {
        Some(path) => match SelectedFile::from_path(&path).await {
            Ok(file) => Some(file),
            Err(err) => {
                log::warn!("Could not load {}: {:#}", path.display(), err);
                controller.view().set_status(&Status::Error(format!("{:#}", err)));
                return;
            }
        },
        None => None,
    };

    controller.dispatch(Intent::FileSelected(file)).await;
}

async fn ask<B: Backend>(controller: Arc<Controller<B>>, query: String) {
    let outcome = controller.dispatch(Intent::QuerySubmitted(query)).await;
    if outcome == Outcome::Ask(AskOutcome::Busy) {
        println!("Still working on the previous question, please wait.");
    }
}

async fn show_logs<B: Backend>(controller: Arc<Controller<B>>) {
    match controller.backend().fetch_logs().await {
        Ok(entries) if entries.is_empty() => println!("(trace log is empty)"),
        Ok(entries) => {
            for entry in entries {
                println!("  {}", entry.log);
            }
        }
        Err(err) => {
            log::error!("Logs error: {}", err);
            println!("Could not fetch the trace log: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_client::{AnswerResult, AskRequest, ClientError, FileId, LogEntry, UploadResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct SlowBackend {
        questions: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Backend for SlowBackend {
        async fn upload_pdf(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(UploadResponse {
                file_id: FileId(format!("id-{}", file.name)),
                message: None,
            })
        }

        async fn ask(&self, request: &AskRequest) -> Result<AnswerResult, ClientError> {
            self.questions.lock().unwrap().push(request.query.clone());
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(AnswerResult {
                answer: format!("answer to {}", request.query),
                agents_used: vec!["WebSearch".into()],
                rationale: String::new(),
            })
        }

        async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ClientError> {
            Ok(Vec::new())
        }
    }

    fn controller() -> Arc<Controller<SlowBackend>> {
        Arc::new(ViewController::new(SlowBackend::default(), TerminalView::new()))
    }

    #[tokio::test]
    async fn pending_answer_is_rendered_before_input_ends() {
        let controller = controller();

        run(controller.clone(), &b"what is new?\n"[..]).await.unwrap();

        let page = controller.view().snapshot();
        assert_eq!(page.answer_text, "answer to what is new?");
        assert!(!page.result_hidden);
        assert!(!page.submit_disabled);
    }

    #[tokio::test]
    async fn quit_stops_reading_but_finishes_started_work() {
        let controller = controller();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let input = format!(":upload {}\nfirst question\n:quit\nnever sent\n", path.display());
        run(controller.clone(), input.as_bytes()).await.unwrap();

        assert_eq!(controller.file_id(), Some(FileId::from("id-paper.pdf")));
        assert_eq!(
            *controller.backend().questions.lock().unwrap(),
            vec!["first question".to_string()]
        );
    }
}
