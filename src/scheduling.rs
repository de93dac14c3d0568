//! Scheduling utilities – the "wait until the page has laid out" primitive.
//!
//! Inserting the dialog and moving focus into it in the same task does not
//! work reliably in every engine: focus lands before the new markup is
//! rendered and is lost.  Instead of guessing a millisecond delay the
//! controller awaits [`next_paint`] between the two steps.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve once the next frame has been produced.
///
/// `requestAnimationFrame` fires right *before* the frame is painted; the
/// zero-delay timeout queued after it runs once that frame is done.  Without a
/// window (worker, tests outside a browser) only the timeout is awaited.
pub async fn next_paint() {
    let frame = js_sys::Promise::new(&mut |resolve, _reject| {
        let requested = web_sys::window()
            .map(|w| w.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !requested {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(frame).await;
    TimeoutFuture::new(0).await;
}
