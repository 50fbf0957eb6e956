use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use strum::IntoEnumIterator;
use studio_core::{Action, DraftTone, Outcome, RefineStyle, SummaryFormat, SummaryLength, Tool, ToolOptions};
use wasm_bindgen_futures::JsFuture;

use crate::storage;

#[component]
pub fn Header(credential_present: bool, dispatch: Callback<Action>) -> Element {
	let chip_class = if credential_present {
		"flex items-center gap-2 text-xs font-medium px-3 py-1.5 rounded-full transition-colors bg-emerald-500/10 text-emerald-400 border border-emerald-500/20"
	} else {
		"flex items-center gap-2 text-xs font-medium px-3 py-1.5 rounded-full transition-colors bg-amber-500/10 text-amber-400 border border-amber-500/20 animate-pulse"
	};

	rsx! {
		header { class: "border-b border-slate-800 bg-slate-900/50 backdrop-blur-md sticky top-0 z-10",
			div { class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between",
				h1 { class: "font-bold text-lg tracking-tight",
					"Text Studio "
					span { class: "text-slate-500 font-normal", "| AI Text Tools" }
				}
				button { class: chip_class, onclick: move |_| dispatch.call(Action::ToggleKeyEntry),
					if credential_present {
						"API Key Active"
					} else {
						"Set API Key"
					}
				}
			}
		}
	}
}

#[component]
pub fn KeyPanel(credential: Option<String>, dispatch: Callback<Action>) -> Element {
	// The field starts from whatever is already saved; the panel remounts on
	// each open, so a cleared key leaves it blank.
	let initial = credential.clone().unwrap_or_default();
	let mut draft = use_signal(move || initial);

	rsx! {
		div { class: "bg-indigo-900/10 border border-indigo-500/30 rounded-xl p-6",
			div { class: "flex flex-col md:flex-row gap-4 items-end md:items-center justify-between",
				div { class: "space-y-1 flex-1",
					h3 { class: "font-semibold text-indigo-100", "Configure Access" }
					p { class: "text-sm text-indigo-300/70",
						"Your API key is stored locally in your browser and sent only to the Cohere API."
					}
				}
				div { class: "flex gap-2 w-full md:w-auto",
					input {
						class: "flex-1 min-w-[240px] bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm focus:outline-none focus:border-indigo-500",
						r#type: "password",
						placeholder: "paste your API key",
						value: "{draft}",
						oninput: move |evt| draft.set(evt.value()),
					}
					button {
						class: "px-4 py-2 rounded-lg text-sm font-medium bg-indigo-600 hover:bg-indigo-500 text-white",
						onclick: move |_| {
							storage::save(&draft());
							dispatch.call(Action::SaveCredential(draft()));
						},
						"Save"
					}
					if credential.is_some() {
						button {
							class: "px-4 py-2 rounded-lg text-sm font-medium text-red-400 hover:text-red-300 hover:bg-red-950/30",
							onclick: move |_| {
								storage::clear();
								draft.set(String::new());
								dispatch.call(Action::ClearCredential);
							},
							"Clear"
						}
					}
				}
			}
		}
	}
}

#[component]
pub fn ToolTabs(active: Tool, dispatch: Callback<Action>) -> Element {
	rsx! {
		div { class: "flex flex-wrap gap-2 p-1 bg-slate-900/50 rounded-xl border border-slate-800 w-fit mx-auto md:mx-0",
			for tool in Tool::iter() {
				button {
					class: if tool == active { "flex items-center gap-2 px-6 py-2.5 rounded-lg text-sm font-medium transition-all bg-slate-800 text-white shadow-md" } else { "flex items-center gap-2 px-6 py-2.5 rounded-lg text-sm font-medium transition-all text-slate-400 hover:text-slate-200 hover:bg-slate-800/50" },
					onclick: move |_| dispatch.call(Action::SelectTool(tool)),
					{tool.label()}
				}
			}
		}
	}
}

#[component]
fn Select(label: &'static str, value: String, options: Vec<(String, String)>, on_change: EventHandler<String>) -> Element {
	rsx! {
		div { class: "space-y-1.5",
			label { class: "text-xs font-medium text-slate-400 uppercase tracking-wider", {label} }
			select {
				class: "w-full bg-slate-900/50 border border-slate-700 rounded-lg px-4 py-2.5 text-slate-200 focus:outline-none focus:ring-2 focus:ring-indigo-500/50 cursor-pointer",
				value: "{value}",
				onchange: move |evt| on_change.call(evt.value()),
				for (wire , text) in options {
					option { value: "{wire}", selected: wire == value, "{text}" }
				}
			}
		}
	}
}

#[component]
pub fn InputPanel(tool: Tool, input: String, options: ToolOptions, pending: bool, dispatch: Callback<Action>) -> Element {
	let blank = input.trim().is_empty();

	rsx! {
		div { class: "bg-slate-800/50 border border-slate-700 rounded-xl p-6 border-t-4 border-t-indigo-500 flex flex-col gap-4",
			div { class: "flex items-center justify-between",
				h2 { class: "font-semibold text-slate-200", "Input" }
				button {
					class: "text-xs text-slate-500 hover:text-slate-300",
					onclick: move |_| dispatch.call(Action::ClearInput),
					"Clear"
				}
			}
			textarea {
				class: "w-full h-64 bg-slate-900/50 border border-slate-700 rounded-lg px-4 py-3 text-slate-200 placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-indigo-500/50 resize-none",
				placeholder: tool.placeholder(),
				value: "{input}",
				oninput: move |evt| dispatch.call(Action::EditInput(evt.value())),
			}
			div { class: "grid grid-cols-2 gap-4 pt-2 border-t border-slate-700/50",
				match tool {
					Tool::Summarize => rsx! {
						Select {
							label: "Length",
							value: options.summary_length.to_string(),
							options: SummaryLength::iter().map(|l| (l.to_string(), l.label().to_owned())).collect::<Vec<_>>(),
							on_change: move |wire: String| dispatch.call(Action::SetSummaryLength(wire.parse().unwrap_or_default())),
						}
						Select {
							label: "Format",
							value: options.summary_format.to_string(),
							options: SummaryFormat::iter().map(|f| (f.to_string(), f.label().to_owned())).collect::<Vec<_>>(),
							on_change: move |wire: String| dispatch.call(Action::SetSummaryFormat(wire.parse().unwrap_or_default())),
						}
					},
					Tool::Draft => rsx! {
						div { class: "col-span-2",
							Select {
								label: "Tone",
								value: options.draft_tone.to_string(),
								options: DraftTone::iter().map(|t| (t.to_string(), t.label().to_owned())).collect::<Vec<_>>(),
								on_change: move |wire: String| dispatch.call(Action::SetDraftTone(wire.parse().unwrap_or_default())),
							}
						}
					},
					Tool::Refine => rsx! {
						div { class: "col-span-2",
							Select {
								label: "Goal",
								value: options.refine_style.to_string(),
								options: RefineStyle::iter().map(|s| (s.to_string(), s.label().to_owned())).collect::<Vec<_>>(),
								on_change: move |wire: String| dispatch.call(Action::SetRefineStyle(wire.parse().unwrap_or_default())),
							}
						}
					},
				}
			}
			button {
				class: "w-full mt-2 flex items-center justify-center gap-2 px-4 py-2.5 rounded-lg font-medium bg-indigo-600 hover:bg-indigo-500 text-white shadow-lg shadow-indigo-500/20 disabled:opacity-50 disabled:cursor-not-allowed",
				disabled: pending || blank,
				onclick: move |_| dispatch.call(Action::Submit),
				if pending {
					"Processing..."
				} else {
					{tool.action_label()}
				}
			}
		}
	}
}

#[component]
pub fn ResultBox(outcome: Outcome) -> Element {
	rsx! {
		div { class: "flex flex-col h-full bg-slate-900 border border-slate-800 rounded-xl overflow-hidden",
			div { class: "flex items-center justify-between px-4 py-3 bg-slate-800/50 border-b border-slate-800",
				h3 { class: "text-sm font-medium text-slate-300", "AI Output" }
				match &outcome {
					Outcome::Success(text) if !text.is_empty() => rsx! {
						CopyButton { text: text.clone() }
					},
					_ => rsx! {},
				}
			}
			div { class: "flex-1 p-4 overflow-y-auto min-h-[200px] text-sm leading-relaxed text-slate-300",
				match &outcome {
					Outcome::Pending => rsx! {
						div { class: "space-y-3 animate-pulse",
							div { class: "h-2 bg-slate-800 rounded w-3/4" }
							div { class: "h-2 bg-slate-800 rounded w-full" }
							div { class: "h-2 bg-slate-800 rounded w-5/6" }
							div { class: "h-2 bg-slate-800 rounded w-4/6" }
						}
					},
					Outcome::Failure(err) => rsx! {
						div { class: "flex flex-col items-center justify-center h-full text-red-400 gap-2 p-4 text-center",
							p { "{err}" }
						}
					},
					Outcome::Success(text) if !text.is_empty() => rsx! {
						div { class: "whitespace-pre-wrap", "{text}" }
					},
					// Idle, or a success the provider sent no output for.
					_ => rsx! {
						div { class: "h-full flex flex-col items-center justify-center text-slate-600 gap-2",
							p { "Result will appear here..." }
						}
					},
				}
			}
		}
	}
}

#[component]
fn CopyButton(text: String) -> Element {
	let mut copy_label = use_signal(|| "Copy".to_string());

	rsx! {
		button {
			class: "text-slate-400 hover:text-white transition-colors text-xs bg-slate-700/50 px-2 py-1 rounded-md",
			onclick: move |_| {
				to_owned![text];
				async move {
					// Best effort; a refusal only flips the label.
					if let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) {
						if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
							copy_label.set("Copied!".to_owned());
							TimeoutFuture::new(2_000).await;
							copy_label.set("Copy".to_owned());
						} else {
							copy_label.set("Failed".to_owned());
						}
					}
				}
			},
			"{copy_label}"
		}
	}
}
