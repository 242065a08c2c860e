use leptos::prelude::*;

use super::ghost::{SpeakKey, SpeechBubbleState};

/// Project tile with a click-to-expand details panel.
///
/// `speak` wires the card's hover to the mascot. Cards marked `coming_soon`
/// get an inert action instead of the toggle and never expand.
#[component]
pub fn ProjectCard(
	#[prop(into)] title: String,
	#[prop(into)] summary: String,
	#[prop(default = None)] speak: Option<SpeakKey>,
	#[prop(default = false)] coming_soon: bool,
	children: Children,
) -> impl IntoView {
	let state = expect_context::<SpeechBubbleState>();
	let expanded = RwSignal::new(false);

	let enter = move |_| {
		if let Some(key) = speak {
			state.speak(key);
		}
	};
	let leave = move |_| {
		if speak.is_some() {
			state.quiet();
		}
	};

	let action = if coming_soon {
		view! { <button class="btn btn-soon">"Coming soon"</button> }.into_any()
	} else {
		view! {
			<button
				class=move || if expanded.get() { "btn btn-toggle closing" } else { "btn btn-toggle" }
				on:click=move |_| expanded.update(|open| *open = !*open)
			>
				{move || if expanded.get() { "Less details" } else { "More details" }}
			</button>
		}
		.into_any()
	};

	view! {
		<article
			class=move || if expanded.get() { "project-card expanded" } else { "project-card" }
			on:mouseenter=enter
			on:mouseleave=leave
		>
			<h3>{title}</h3>
			<p class="card-summary">{summary}</p>
			{action}
			<div class=move || {
				if expanded.get() { "project-details open" } else { "project-details" }
			}>{children()}</div>
		</article>
	}
}

/// Certificate tile; the action is a plain external link, the hover still
/// talks to the mascot.
#[component]
pub fn CertificateCard(
	#[prop(into)] title: String,
	#[prop(into)] issuer: String,
	#[prop(into)] href: String,
	speak: SpeakKey,
) -> impl IntoView {
	let state = expect_context::<SpeechBubbleState>();
	let enter = move |_| state.speak(speak);
	let leave = move |_| state.quiet();

	view! {
		<article class="cert-card" on:mouseenter=enter on:mouseleave=leave>
			<h3>{title}</h3>
			<p class="card-summary">{issuer}</p>
			<a class="btn btn-view" href=href target="_blank" rel="noreferrer">
				"View certificate"
			</a>
		</article>
	}
}
