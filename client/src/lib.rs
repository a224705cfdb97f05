pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod models;
pub mod view;

pub use config::ClientConfig;
pub use controller::{AskOutcome, Intent, Outcome, UploadOutcome, ViewController};
pub use error::ClientError;
pub use gateway::{Backend, HttpBackend};
pub use models::*;
pub use view::{Page, PageView, Status, View};
