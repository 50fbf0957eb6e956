use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// The three fixed user-facing tasks. Wire values and prompt fragments are
/// always the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Tool {
	#[default]
	Summarize,
	Draft,
	Refine,
}

impl Tool {
	pub fn label(self) -> &'static str {
		match self {
			Self::Summarize => "Summarizer",
			Self::Draft => "Writer",
			Self::Refine => "Refiner",
		}
	}

	pub fn action_label(self) -> &'static str {
		match self {
			Self::Summarize => "Summarize Text",
			Self::Draft => "Generate Draft",
			Self::Refine => "Refine Text",
		}
	}

	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Summarize => "Paste an article, email, or report here to get a quick summary...",
			Self::Draft => "Enter a topic (e.g., 'The benefits of remote work') or a specific instruction...",
			Self::Refine => "Paste the text you want to rewrite or improve...",
		}
	}

	/// Validation message shown when the action fires on blank input.
	pub fn empty_input_hint(self) -> &'static str {
		match self {
			Self::Summarize => "Please enter some text to summarize.",
			Self::Draft => "Please enter a topic or instruction.",
			Self::Refine => "Please enter text to refine.",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryLength {
	Short,
	#[default]
	Medium,
	Long,
}

impl SummaryLength {
	pub fn label(self) -> &'static str {
		match self {
			Self::Short => "Short",
			Self::Medium => "Medium",
			Self::Long => "Long",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryFormat {
	#[default]
	Paragraph,
	Bullets,
}

impl SummaryFormat {
	pub fn label(self) -> &'static str {
		match self {
			Self::Paragraph => "Paragraph",
			Self::Bullets => "Bullet Points",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DraftTone {
	#[default]
	Professional,
	Casual,
	Enthusiastic,
	Informative,
	Witty,
}

impl DraftTone {
	pub fn label(self) -> &'static str {
		match self {
			Self::Professional => "Professional",
			Self::Casual => "Casual",
			Self::Enthusiastic => "Enthusiastic",
			Self::Informative => "Informative",
			Self::Witty => "Witty",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RefineStyle {
	#[default]
	Concise,
	Formal,
	Casual,
	Exciting,
}

impl RefineStyle {
	pub fn label(self) -> &'static str {
		match self {
			Self::Concise => "Make it Concise",
			Self::Formal => "Make it Formal",
			Self::Casual => "Make it Casual",
			Self::Exciting => "Make it Exciting",
		}
	}

	/// The rewrite instruction sent ahead of the quoted input text.
	pub fn instruction(self) -> &'static str {
		match self {
			Self::Concise => "Rewrite the following text to be more concise and clear:",
			Self::Formal => "Rewrite the following text to be more formal and professional:",
			Self::Casual => "Rewrite the following text to be more casual and friendly:",
			Self::Exciting => "Rewrite the following text to sound exciting and energetic:",
		}
	}
}

/// One option slot per tool. The whole struct survives tab switches and
/// result resets; only the active tool's slot is ever read when a request
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolOptions {
	pub summary_length: SummaryLength,
	pub summary_format: SummaryFormat,
	pub draft_tone: DraftTone,
	pub refine_style: RefineStyle,
}
