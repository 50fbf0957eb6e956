use serde::Deserialize;
use serde_json::Value;

use crate::{error::StudioError, request::ApiRequest};

pub const API_BASE_URL: &str = "https://api.cohere.ai/v1";
pub const CLIENT_NAME: &str = "text-studio";

const GENERIC_REJECTION: &str = "API request failed";

#[derive(Deserialize)]
struct ErrorBody {
	message: Option<String>,
}

/// One parameterized call site for all three tools. The request itself
/// decides the path, the body, and which response field to read back.
#[derive(Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new()
	}
}

impl ApiClient {
	pub fn new() -> Self {
		Self::with_base_url(API_BASE_URL)
	}

	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self { http: reqwest::Client::new(), base_url: base_url.into() }
	}

	/// Issues the single authenticated POST for one invocation and extracts
	/// the generated text. A success response without the expected field is
	/// a defined empty success, not an error.
	pub async fn invoke(&self, credential: &str, request: &ApiRequest) -> Result<String, StudioError> {
		let response = self
			.http
			.post(format!("{}{}", self.base_url, request.path()))
			.bearer_auth(credential)
			.header("X-Client-Name", CLIENT_NAME)
			.json(request)
			.send()
			.await
			.map_err(|err| StudioError::Network(err.to_string()))?;

		if !response.status().is_success() {
			let message = match response.json::<ErrorBody>().await {
				Ok(ErrorBody { message: Some(message) }) => message,
				_ => GENERIC_REJECTION.to_owned(),
			};
			return Err(StudioError::Rejected(message));
		}

		let body: Value = response.json().await.map_err(|err| StudioError::Network(err.to_string()))?;
		Ok(body.get(request.output_field()).and_then(Value::as_str).unwrap_or_default().to_owned())
	}
}
