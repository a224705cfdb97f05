use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque identifier the backend hands out for an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub String);

impl FileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A document picked for upload.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .with_context(|| format!("{} does not name a file", path.display()))?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        log::debug!("Loaded {} ({} bytes)", name, bytes.len());
        Ok(Self { name, bytes })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: FileId,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
    pub file_id: Option<FileId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    #[serde(default)]
    pub agents_used: Vec<String>,
    #[serde(default)]
    pub rationale: String,
}

impl AnswerResult {
    pub fn agents_label(&self) -> String {
        self.agents_used.join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub log: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_without_file_serializes_null() {
        let request = AskRequest {
            query: "what is this?".to_string(),
            file_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "query": "what is this?", "file_id": null })
        );
    }

    #[test]
    fn answer_tolerates_missing_rationale() {
        let answer: AnswerResult = serde_json::from_str(
            r#"{"answer": "hello", "agents_used": ["Placeholder Agent"]}"#,
        )
        .unwrap();
        assert_eq!(answer.rationale, "");
        assert_eq!(answer.agents_label(), "Placeholder Agent");
    }

    #[test]
    fn agents_are_comma_joined() {
        let answer = AnswerResult {
            answer: "a".to_string(),
            agents_used: vec!["WebSearch".to_string(), "ArxivSearch".to_string()],
            rationale: String::new(),
        };
        assert_eq!(answer.agents_label(), "WebSearch, ArxivSearch");
    }

    #[tokio::test]
    async fn selected_file_takes_name_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.bytes, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn selected_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(dir.path().join("missing.pdf"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.pdf"));
    }
}
