use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::confetti::BurstEffect;
use super::types::{Expression, SpeakKey};

// Bubble box estimate before the first layout pass, and the gap above the
// mascot.
const FALLBACK_BUBBLE_W: f64 = 180.0;
const FALLBACK_BUBBLE_H: f64 = 50.0;
const BUBBLE_GAP: f64 = 5.0;

const TRACK_MS: i32 = 16;
const REVEAL_MS: i32 = 10;
const CLEAR_MS: i32 = 300;

// Timer ids sit in plain signals; the JS closures backing them are not
// `Send`, so they live in thread-local stored values instead.
type TimerId = RwSignal<Option<i32>>;
type TimerCb = StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage>;

/// Drives the speech bubble and the mascot's face.
///
/// One instance is created by the home page and shared through context, which
/// requires `Send + Sync`; every field is therefore a `Copy` signal or arena
/// handle rather than the value itself. Interactive elements call
/// [`speak`](Self::speak) on hover-in and [`quiet`](Self::quiet) on
/// hover-out. While the bubble is visible a 16ms interval keeps it pinned
/// above the mascot, which floats.
#[derive(Clone, Copy)]
pub struct SpeechBubbleState {
	text: RwSignal<String>,
	active: RwSignal<bool>,
	expression: RwSignal<Option<Expression>>,
	/// (top, left) in viewport pixels.
	position: RwSignal<(f64, f64)>,
	mascot: NodeRef<Div>,
	bubble: NodeRef<Div>,
	track_id: TimerId,
	track_cb: TimerCb,
	reveal_id: TimerId,
	reveal_cb: TimerCb,
	clear_id: TimerId,
	clear_cb: TimerCb,
	confetti: StoredValue<Rc<dyn BurstEffect>, LocalStorage>,
}

impl SpeechBubbleState {
	pub fn new(confetti: Rc<dyn BurstEffect>) -> Self {
		Self {
			text: RwSignal::new(String::new()),
			active: RwSignal::new(false),
			expression: RwSignal::new(None),
			position: RwSignal::new((0.0, 0.0)),
			mascot: NodeRef::new(),
			bubble: NodeRef::new(),
			track_id: RwSignal::new(None),
			track_cb: StoredValue::new_local(None),
			reveal_id: RwSignal::new(None),
			reveal_cb: StoredValue::new_local(None),
			clear_id: RwSignal::new(None),
			clear_cb: StoredValue::new_local(None),
			confetti: StoredValue::new_local(confetti),
		}
	}

	pub fn text(&self) -> RwSignal<String> {
		self.text
	}

	pub fn active(&self) -> RwSignal<bool> {
		self.active
	}

	pub fn expression(&self) -> RwSignal<Option<Expression>> {
		self.expression
	}

	pub fn position(&self) -> RwSignal<(f64, f64)> {
		self.position
	}

	/// Attach to the mascot wrapper so the bubble knows what to follow.
	pub fn mascot_ref(&self) -> NodeRef<Div> {
		self.mascot
	}

	pub fn bubble_ref(&self) -> NodeRef<Div> {
		self.bubble
	}

	/// Show the bubble with the key's line, pull the matching face, and for
	/// celebratory keys start the confetti. A pending text clear from an
	/// earlier hide is cancelled so the new line is not wiped mid-show.
	pub fn speak(&self, key: SpeakKey) {
		cancel_timeout(self.clear_id, self.clear_cb);
		self.text.set(key.phrase().to_string());
		self.reposition();
		self.start_tracking();
		self.schedule_reveal();
		self.expression.set(Some(key.expression()));
		if key.celebrates() {
			self.confetti.with_value(|c| c.start());
		}
	}

	/// Hide the bubble and relax the face. The text is cleared only after
	/// the fade-out so it does not vanish mid-transition.
	pub fn quiet(&self) {
		cancel_timeout(self.reveal_id, self.reveal_cb);
		self.active.set(false);
		self.stop_tracking();
		self.expression.set(None);
		self.confetti.with_value(|c| c.stop());
		self.schedule_clear();
	}

	/// Recompute the bubble position from the mascot's current rect. Falls
	/// back to estimated bubble dimensions before the first layout.
	fn reposition(&self) {
		let Some(mascot) = self.mascot.get_untracked() else {
			self.stop_tracking();
			return;
		};
		let rect = mascot.get_bounding_client_rect();
		let (bw, bh) = self.bubble_size();
		let center_x = rect.left() + rect.width() / 2.0;
		self.position
			.set((rect.top() - bh - BUBBLE_GAP, center_x - bw / 2.0));
	}

	fn bubble_size(&self) -> (f64, f64) {
		let Some(bubble) = self.bubble.get_untracked() else {
			return (FALLBACK_BUBBLE_W, FALLBACK_BUBBLE_H);
		};
		let (w, h) = (f64::from(bubble.offset_width()), f64::from(bubble.offset_height()));
		(
			if w > 0.0 { w } else { FALLBACK_BUBBLE_W },
			if h > 0.0 { h } else { FALLBACK_BUBBLE_H },
		)
	}

	fn start_tracking(&self) {
		if self.track_id.get_untracked().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let this = *self;
		// The closure clears only the timer id, never its own slot; dropping
		// a closure from inside its own invocation is not allowed.
		let closure: Closure<dyn FnMut()> = Closure::new(move || {
			if this.active.get_untracked() {
				this.reposition();
			} else {
				this.stop_tracking();
			}
		});
		match window.set_interval_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			TRACK_MS,
		) {
			Ok(id) => {
				self.track_id.set(Some(id));
				self.track_cb.set_value(Some(closure));
			}
			Err(_) => drop(closure),
		}
	}

	fn stop_tracking(&self) {
		if let Some(id) = self.track_id.get_untracked() {
			self.track_id.set(None);
			if let Some(window) = web_sys::window() {
				window.clear_interval_with_handle(id);
			}
		}
	}

	fn schedule_reveal(&self) {
		cancel_timeout(self.reveal_id, self.reveal_cb);
		let Some(window) = web_sys::window() else {
			return;
		};
		let (active, id_slot) = (self.active, self.reveal_id);
		let closure: Closure<dyn FnMut()> = Closure::new(move || {
			id_slot.set(None);
			active.set(true);
		});
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			REVEAL_MS,
		) {
			Ok(id) => {
				self.reveal_id.set(Some(id));
				self.reveal_cb.set_value(Some(closure));
			}
			Err(_) => drop(closure),
		}
	}

	fn schedule_clear(&self) {
		cancel_timeout(self.clear_id, self.clear_cb);
		let Some(window) = web_sys::window() else {
			return;
		};
		let (text, id_slot) = (self.text, self.clear_id);
		let closure: Closure<dyn FnMut()> = Closure::new(move || {
			id_slot.set(None);
			text.set(String::new());
		});
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			CLEAR_MS,
		) {
			Ok(id) => {
				self.clear_id.set(Some(id));
				self.clear_cb.set_value(Some(closure));
			}
			Err(_) => drop(closure),
		}
	}
}

// Only called from event handlers, never from inside the timer closures
// themselves, so dropping the stored closure here is safe.
fn cancel_timeout(id: TimerId, cb: TimerCb) {
	if let Some(handle) = id.get_untracked() {
		id.set(None);
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(handle);
		}
	}
	cb.set_value(None);
}
