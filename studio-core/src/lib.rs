pub mod client;
pub mod error;
pub mod request;
pub mod state;
pub mod tool;

pub use client::ApiClient;
pub use error::StudioError;
pub use request::ApiRequest;
pub use state::{Action, Outcome, Studio, update};
pub use tool::{DraftTone, RefineStyle, SummaryFormat, SummaryLength, Tool, ToolOptions};
