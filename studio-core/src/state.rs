use crate::{
	error::StudioError,
	request::ApiRequest,
	tool::{DraftTone, RefineStyle, SummaryFormat, SummaryLength, Tool, ToolOptions},
};

/// Terminal and in-flight states of one action invocation. Each new
/// invocation replaces the previous outcome wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
	#[default]
	Idle,
	Pending,
	Success(String),
	Failure(StudioError),
}

impl Outcome {
	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}
}

/// The whole UI state. The rendering layer holds exactly one of these in a
/// signal and mutates it only through [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Studio {
	pub credential: Option<String>,
	pub show_key_entry: bool,
	pub active_tool: Tool,
	pub input: String,
	pub options: ToolOptions,
	pub outcome: Outcome,
}

impl Default for Studio {
	fn default() -> Self {
		Self { credential: None, show_key_entry: true, active_tool: Tool::default(), input: String::new(), options: ToolOptions::default(), outcome: Outcome::default() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Result of the one-time storage read at startup.
	CredentialLoaded(Option<String>),
	SaveCredential(String),
	ClearCredential,
	ToggleKeyEntry,
	SelectTool(Tool),
	EditInput(String),
	ClearInput,
	SetSummaryLength(SummaryLength),
	SetSummaryFormat(SummaryFormat),
	SetDraftTone(DraftTone),
	SetRefineStyle(RefineStyle),
	Submit,
	Resolved(Result<String, StudioError>),
}

/// Applies one action and returns the next state, plus the request to
/// dispatch when the action admitted a new invocation. The caller owns the
/// side effects (storage writes, the network call); everything observable
/// in the UI flows through here.
#[must_use]
pub fn update(mut state: Studio, action: Action) -> (Studio, Option<ApiRequest>) {
	match action {
		Action::CredentialLoaded(credential) => {
			state.show_key_entry = credential.is_none();
			state.credential = credential;
		},
		Action::SaveCredential(value) => {
			// A blank save changes nothing; the entry panel stays open.
			if !value.trim().is_empty() {
				state.credential = Some(value);
				state.show_key_entry = false;
			}
		},
		Action::ClearCredential => {
			state.credential = None;
			state.show_key_entry = true;
		},
		Action::ToggleKeyEntry => state.show_key_entry = !state.show_key_entry,
		Action::SelectTool(tool) => {
			state.active_tool = tool;
			state.input.clear();
			// An in-flight call is never cancelled; its resolution still lands.
			if !state.outcome.is_pending() {
				state.outcome = Outcome::Idle;
			}
		},
		Action::EditInput(text) => state.input = text,
		Action::ClearInput => state.input.clear(),
		Action::SetSummaryLength(length) => state.options.summary_length = length,
		Action::SetSummaryFormat(format) => state.options.summary_format = format,
		Action::SetDraftTone(tone) => state.options.draft_tone = tone,
		Action::SetRefineStyle(style) => state.options.refine_style = style,
		Action::Submit => {
			if state.outcome.is_pending() {
				return (state, None);
			}
			match ApiRequest::build(state.active_tool, &state.input, &state.options) {
				Err(err) => state.outcome = Outcome::Failure(err),
				Ok(request) => {
					if state.credential.is_none() {
						state.outcome = Outcome::Failure(StudioError::MissingCredential);
						state.show_key_entry = true;
					} else {
						state.outcome = Outcome::Pending;
						return (state, Some(request));
					}
				},
			}
		},
		Action::Resolved(result) => {
			// A resolution that arrives after anything other than Pending is
			// stale and dropped.
			if state.outcome.is_pending() {
				state.outcome = match result {
					Ok(text) => Outcome::Success(text),
					Err(err) => Outcome::Failure(err),
				};
			}
		},
	}
	(state, None)
}
