use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Start/stop contract for the celebration burst. The interaction layer only
/// ever starts or stops it; what actually fires is up to the implementation.
pub trait BurstEffect {
	fn start(&self);
	fn stop(&self);
}

const VOLLEY_MS: i32 = 250;
const NEON_COLORS: [&str; 3] = ["#ff69f5", "#00ffff", "#ffffff"];

/// Fires neon confetti volleys on a repeating timer through the
/// `canvas-confetti` script loaded from `index.html`. When the script is
/// missing the effect silently does nothing; it is decoration, not content.
pub struct CanvasConfetti {
	interval: Rc<RefCell<Option<i32>>>,
	tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl CanvasConfetti {
	pub fn new() -> Self {
		Self {
			interval: Rc::new(RefCell::new(None)),
			tick: Rc::new(RefCell::new(None)),
		}
	}
}

impl Default for CanvasConfetti {
	fn default() -> Self {
		Self::new()
	}
}

impl BurstEffect for CanvasConfetti {
	fn start(&self) {
		self.stop();
		if confetti_fn().is_none() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let closure: Closure<dyn FnMut()> = Closure::new(move || fire_volleys());
		match window.set_interval_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			VOLLEY_MS,
		) {
			Ok(id) => {
				*self.interval.borrow_mut() = Some(id);
				*self.tick.borrow_mut() = Some(closure);
			}
			Err(_) => drop(closure),
		}
	}

	fn stop(&self) {
		if let Some(id) = self.interval.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				window.clear_interval_with_handle(id);
			}
		}
		self.tick.borrow_mut().take();
	}
}

fn confetti_fn() -> Option<js_sys::Function> {
	let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("confetti")).ok()?;
	value.dyn_into::<js_sys::Function>().ok()
}

/// One timer tick: a center shower plus a burst from each bottom corner.
fn fire_volleys() {
	let Some(confetti) = confetti_fn() else {
		return;
	};
	let _ = confetti.call1(&JsValue::NULL, &volley(20, None, 60.0, (0.5, 0.8), true));
	let _ = confetti.call1(&JsValue::NULL, &volley(10, Some(60.0), 50.0, (0.0, 1.0), false));
	let _ = confetti.call1(&JsValue::NULL, &volley(10, Some(120.0), 50.0, (1.0, 1.0), false));
}

fn volley(count: u32, angle: Option<f64>, spread: f64, origin: (f64, f64), shapes: bool) -> JsValue {
	let opts = js_sys::Object::new();
	let set = |key: &str, value: &JsValue| {
		let _ = js_sys::Reflect::set(&opts, &JsValue::from_str(key), value);
	};
	set("particleCount", &JsValue::from_f64(f64::from(count)));
	if let Some(angle) = angle {
		set("angle", &JsValue::from_f64(angle));
	}
	set("spread", &JsValue::from_f64(spread));

	let at = js_sys::Object::new();
	let _ = js_sys::Reflect::set(&at, &JsValue::from_str("x"), &JsValue::from_f64(origin.0));
	let _ = js_sys::Reflect::set(&at, &JsValue::from_str("y"), &JsValue::from_f64(origin.1));
	set("origin", &at);

	let colors = js_sys::Array::new();
	for color in NEON_COLORS {
		colors.push(&JsValue::from_str(color));
	}
	set("colors", &colors);

	if shapes {
		let list = js_sys::Array::new();
		list.push(&JsValue::from_str("square"));
		list.push(&JsValue::from_str("circle"));
		set("shapes", &list);
	}

	opts.into()
}
