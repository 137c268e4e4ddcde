//! Viewport intersection -> one-shot reveal.
//!
//! Wraps an `IntersectionObserver` around a section node and drives the
//! [`Reveal`] state machine: the flag flips on first entry and never
//! reverts, so scrolling back up does not replay entrance animations. The
//! observer is disconnected on cleanup whether or not the threshold was
//! ever crossed.

use amparo_core::reveal::Reveal;
use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the section that must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Returns a signal that flips to `true` the first time `target` crosses
/// the viewport threshold. `root_margin` shrinks the observation box at the
/// bottom so sections reveal slightly before their edge (e.g.
/// `"0px 0px -50px 0px"`).
pub fn use_reveal(target: NodeRef<Section>, root_margin: &'static str) -> Signal<bool> {
    let (state, set_state) = signal(Reveal::Hidden);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    set_state.update(|s| s.on_intersection(entry.is_intersecting()));
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(root_margin);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        observer.observe(&element);

        let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new((observer, callback));
        on_cleanup(move || {
            let (observer, callback) = cleanup.take();
            observer.disconnect();
            drop(callback);
        });
    });

    Signal::derive(move || state.get().is_revealed())
}
