use leptos::prelude::*;

use super::state::SpeechBubbleState;

// Static face markup; styles.css decides which mouth and brows show for the
// active expression class.
const GHOST_SVG: &str = r#"<svg class="ghost-svg" viewBox="0 0 120 140" role="img" aria-label="neon ghost mascot">
	<path class="ghost-body" d="M10 60 a50 50 0 0 1 100 0 v58 l-16 -12 -17 12 -17 -12 -17 12 -17 -12 -16 12 z" />
	<circle class="ghost-eye" cx="42" cy="62" r="7" />
	<circle class="ghost-eye" cx="78" cy="62" r="7" />
	<path class="ghost-brow" d="M33 48 l18 -5" />
	<path class="ghost-brow" d="M87 48 l-18 -5" />
	<path class="mouth mouth-default" d="M52 86 q8 7 16 0" />
	<path class="mouth mouth-challenge" d="M50 88 l7 -5 7 5 6 -5" />
	<circle class="mouth mouth-interest" cx="60" cy="88" r="6" />
	<path class="mouth mouth-pride" d="M46 84 q14 13 28 0" />
	<path class="mouth mouth-celebration" d="M44 82 q16 18 32 0 z" />
</svg>"#;

/// The floating neon ghost. Every face part lives in the SVG; the active
/// expression class on the wrapper decides which of them show.
#[component]
pub fn Ghost() -> impl IntoView {
	let state = expect_context::<SpeechBubbleState>();
	let expression = state.expression();

	view! {
		<div
			node_ref=state.mascot_ref()
			class=move || match expression.get() {
				Some(exp) => format!("neon-ghost {}", exp.css_class()),
				None => "neon-ghost".to_string(),
			}
			inner_html=GHOST_SVG
		></div>
	}
}

/// Fixed-position bubble that follows the mascot while visible. Position is
/// written as inline style in viewport pixels; visibility is a class swap so
/// CSS can run the fade.
#[component]
pub fn SpeechBubble() -> impl IntoView {
	let state = expect_context::<SpeechBubbleState>();
	let (text, active, position) = (state.text(), state.active(), state.position());

	view! {
		<div
			node_ref=state.bubble_ref()
			class=move || if active.get() { "speech-bubble bubble-active" } else { "speech-bubble" }
			style=move || {
				let (top, left) = position.get();
				format!("top: {top}px; left: {left}px;")
			}
			role="status"
		>
			{move || text.get()}
		</div>
	}
}
