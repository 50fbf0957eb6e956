use serde::Serialize;

use crate::{
	error::StudioError,
	tool::{SummaryFormat, SummaryLength, Tool, ToolOptions},
};

pub const SUMMARIZE_MODEL: &str = "summarize-xlarge";
pub const CHAT_MODEL: &str = "command";

const SUMMARIZE_TEMPERATURE: f64 = 0.3;
const DRAFT_TEMPERATURE: f64 = 0.7;
const REFINE_TEMPERATURE: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeBody {
	pub text: String,
	pub length: SummaryLength,
	pub format: SummaryFormat,
	pub model: &'static str,
	pub extractiveness: &'static str,
	pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBody {
	pub message: String,
	pub model: &'static str,
	pub temperature: f64,
}

/// A fully built request: which endpoint to hit, what body to send, and
/// which field of the response carries the generated text. Serializes as
/// the bare body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiRequest {
	Summarize(SummarizeBody),
	Chat(ChatBody),
}

impl ApiRequest {
	/// Maps the active tool, its input text, and its option slot to the
	/// endpoint's payload. The only precondition is a non-blank input; the
	/// payload itself carries the text untrimmed.
	pub fn build(tool: Tool, text: &str, options: &ToolOptions) -> Result<Self, StudioError> {
		if text.trim().is_empty() {
			return Err(StudioError::EmptyInput(tool));
		}

		Ok(match tool {
			Tool::Summarize => Self::Summarize(SummarizeBody {
				text: text.to_owned(),
				length: options.summary_length,
				format: options.summary_format,
				model: SUMMARIZE_MODEL,
				extractiveness: "low",
				temperature: SUMMARIZE_TEMPERATURE,
			}),
			Tool::Draft => Self::Chat(ChatBody {
				message: format!("Write a {} piece about: {text}.", options.draft_tone),
				model: CHAT_MODEL,
				temperature: DRAFT_TEMPERATURE,
			}),
			Tool::Refine => Self::Chat(ChatBody {
				message: format!("{} \"{text}\"", options.refine_style.instruction()),
				model: CHAT_MODEL,
				temperature: REFINE_TEMPERATURE,
			}),
		})
	}

	pub fn path(&self) -> &'static str {
		match self {
			Self::Summarize(_) => "/summarize",
			Self::Chat(_) => "/chat",
		}
	}

	/// Name of the response field holding the generated text.
	pub fn output_field(&self) -> &'static str {
		match self {
			Self::Summarize(_) => "summary",
			Self::Chat(_) => "text",
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::tool::{DraftTone, RefineStyle};

	#[test]
	fn blank_input_is_rejected_for_every_tool() {
		for tool in [Tool::Summarize, Tool::Draft, Tool::Refine] {
			for text in ["", "   ", "\n\t "] {
				let err = ApiRequest::build(tool, text, &ToolOptions::default()).unwrap_err();
				assert_eq!(err, StudioError::EmptyInput(tool));
			}
		}
	}

	#[test]
	fn summarize_body_matches_wire_shape() {
		let options = ToolOptions { summary_length: SummaryLength::Short, summary_format: SummaryFormat::Bullets, ..Default::default() };
		let request = ApiRequest::build(Tool::Summarize, "The quick brown fox...", &options).unwrap();

		assert_eq!(request.path(), "/summarize");
		assert_eq!(request.output_field(), "summary");
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"text": "The quick brown fox...",
				"length": "short",
				"format": "bullets",
				"model": "summarize-xlarge",
				"extractiveness": "low",
				"temperature": 0.3,
			})
		);
	}

	#[test]
	fn draft_message_embeds_tone_and_topic() {
		let options = ToolOptions { draft_tone: DraftTone::Witty, ..Default::default() };
		let request = ApiRequest::build(Tool::Draft, "remote work", &options).unwrap();

		assert_eq!(request.path(), "/chat");
		assert_eq!(request.output_field(), "text");
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"message": "Write a witty piece about: remote work.",
				"model": "command",
				"temperature": 0.7,
			})
		);
	}

	#[test]
	fn refine_message_quotes_the_input() {
		let options = ToolOptions { refine_style: RefineStyle::Formal, ..Default::default() };
		let request = ApiRequest::build(Tool::Refine, "hey whats up", &options).unwrap();

		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["message"], "Rewrite the following text to be more formal and professional: \"hey whats up\"");
		assert_eq!(body["temperature"], json!(0.4));
	}

	#[test]
	fn payload_text_is_not_trimmed() {
		let request = ApiRequest::build(Tool::Summarize, "  padded  ", &ToolOptions::default()).unwrap();
		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["text"], "  padded  ");
	}
}
