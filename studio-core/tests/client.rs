use mockito::{Matcher, Server};
use serde_json::json;
use studio_core::{ApiClient, ApiRequest, StudioError, SummaryFormat, SummaryLength, Tool, ToolOptions};

fn summarize_request() -> ApiRequest {
	let options = ToolOptions { summary_length: SummaryLength::Short, summary_format: SummaryFormat::Bullets, ..Default::default() };
	ApiRequest::build(Tool::Summarize, "The quick brown fox...", &options).unwrap()
}

#[tokio::test]
async fn success_returns_the_summary_field_verbatim() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/summarize")
		.match_header("authorization", "Bearer co-test-key")
		.match_header("x-client-name", "text-studio")
		.match_header("content-type", "application/json")
		.match_body(Matcher::Json(json!({
			"text": "The quick brown fox...",
			"length": "short",
			"format": "bullets",
			"model": "summarize-xlarge",
			"extractiveness": "low",
			"temperature": 0.3,
		})))
		.with_status(200)
		.with_body(r#"{"summary":"Fox jumps."}"#)
		.create_async()
		.await;

	let client = ApiClient::with_base_url(server.url());
	let result = client.invoke("co-test-key", &summarize_request()).await;

	mock.assert_async().await;
	assert_eq!(result.unwrap(), "Fox jumps.");
}

#[tokio::test]
async fn chat_endpoint_reads_the_text_field() {
	let mut server = Server::new_async().await;
	server.mock("POST", "/chat").with_status(200).with_body(r#"{"text":"A witty piece."}"#).create_async().await;

	let request = ApiRequest::build(Tool::Draft, "remote work", &ToolOptions::default()).unwrap();
	let result = ApiClient::with_base_url(server.url()).invoke("co-test-key", &request).await;

	assert_eq!(result.unwrap(), "A witty piece.");
}

#[tokio::test]
async fn rejection_surfaces_the_server_message() {
	let mut server = Server::new_async().await;
	server.mock("POST", "/summarize").with_status(401).with_body(r#"{"message":"invalid key"}"#).create_async().await;

	let result = ApiClient::with_base_url(server.url()).invoke("bad-key", &summarize_request()).await;

	assert_eq!(result.unwrap_err(), StudioError::Rejected("invalid key".into()));
}

#[tokio::test]
async fn rejection_without_a_message_falls_back_to_a_generic_one() {
	let mut server = Server::new_async().await;
	server.mock("POST", "/summarize").with_status(500).with_body("gateway exploded").create_async().await;

	let result = ApiClient::with_base_url(server.url()).invoke("co-test-key", &summarize_request()).await;

	assert_eq!(result.unwrap_err(), StudioError::Rejected("API request failed".into()));
}

#[tokio::test]
async fn success_without_the_expected_field_is_an_empty_success() {
	let mut server = Server::new_async().await;
	server.mock("POST", "/summarize").with_status(200).with_body(r#"{"id":"abc123"}"#).create_async().await;

	let result = ApiClient::with_base_url(server.url()).invoke("co-test-key", &summarize_request()).await;

	assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn transport_failure_maps_to_a_network_error() {
	// Nothing listens on this port.
	let client = ApiClient::with_base_url("http://127.0.0.1:9");
	let result = client.invoke("co-test-key", &summarize_request()).await;

	assert!(matches!(result.unwrap_err(), StudioError::Network(_)));
}
