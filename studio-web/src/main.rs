use dioxus::{
	logger::tracing::{Level, info, warn},
	prelude::*,
};
use studio_core::{Action, ApiClient, Studio, update};

mod components;
mod storage;

use components::{Header, InputPanel, KeyPanel, ResultBox, ToolTabs};

fn main() {
	dioxus::logger::init(Level::INFO).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
fn App() -> Element {
	// The stored credential is read exactly once, before the first render.
	let mut studio = use_signal(|| update(Studio::default(), Action::CredentialLoaded(storage::load())).0);

	let dispatch = use_callback(move |action: Action| {
		let (next, request) = update(studio(), action);
		let credential = next.credential.clone();
		studio.set(next);

		if let (Some(request), Some(credential)) = (request, credential) {
			spawn(async move {
				info!("dispatching {} request", request.path());
				let result = ApiClient::new().invoke(&credential, &request).await;
				if let Err(err) = &result {
					warn!("request failed: {err}");
				}
				// Resolve on every path so pending can never stick.
				let (next, _) = update(studio(), Action::Resolved(result));
				studio.set(next);
			});
		}
	});

	let state = studio();

	rsx! {
		div { class: "min-h-screen bg-slate-950 text-slate-200 font-sans selection:bg-indigo-500/30",
			Header { credential_present: state.credential.is_some(), dispatch }
			main { class: "max-w-6xl mx-auto px-4 py-8 space-y-8",
				if state.show_key_entry {
					KeyPanel { credential: state.credential.clone(), dispatch }
				}
				ToolTabs { active: state.active_tool, dispatch }
				div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
					InputPanel {
						tool: state.active_tool,
						input: state.input.clone(),
						options: state.options,
						pending: state.outcome.is_pending(),
						dispatch,
					}
					ResultBox { outcome: state.outcome.clone() }
				}
			}
		}
	}
}
