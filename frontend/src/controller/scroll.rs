use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::controller::subscription::Subscription;
use crate::error::{self, PageError};

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Last known scrolled flag, so listeners can tell when it flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns true when the flag changed.
    pub fn observe(&mut self, offset_y: f64) -> bool {
        let scrolled = is_scrolled(offset_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Registers a passive `scroll` listener that reports `window.scrollY`.
pub fn listen_scroll<F>(window: &Window, on_offset: F) -> Result<Subscription, PageError>
where
    F: Fn(f64) + 'static,
{
    let on_offset = Rc::new(on_offset);
    let target = window.clone();
    let callback = Closure::<dyn Fn()>::new({
        let on_offset = on_offset.clone();
        move || {
            if let Ok(offset) = target.scroll_y() {
                on_offset(offset);
            }
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| PageError::js("adding scroll listener", err))?;

    // Pick up an offset restored by the browser before the first event
    if let Ok(offset) = window.scroll_y() {
        on_offset(offset);
    }

    let window = window.clone();
    Ok(Subscription::new(move || {
        if let Err(err) =
            window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }))
}

/// Scrolled flag for the navigation bar, kept current for the component's lifetime.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = error::window().and_then(|window| {
                    let state = Cell::new(ScrollState::default());
                    listen_scroll(&window, move |offset| {
                        let mut next = state.get();
                        if next.observe(offset) {
                            debug!("Navigation scrolled: {}", next.scrolled());
                            setter.set(next.scrolled());
                        }
                        state.set(next);
                    })
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("Scroll tracking disabled: {}", err);
                        None
                    }
                };
                move || {
                    if let Some(subscription) = subscription {
                        subscription.dispose();
                    }
                }
            },
            (),
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn flag_follows_offset_both_ways() {
        let mut state = ScrollState::default();
        assert!(!state.scrolled());

        assert!(state.observe(100.0));
        assert!(state.scrolled());

        assert!(!state.observe(400.0));
        assert!(state.scrolled());

        assert!(state.observe(0.0));
        assert!(!state.scrolled());
    }

    #[test]
    fn small_scrolls_do_not_flip() {
        let mut state = ScrollState::default();
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!state.observe(offset));
        }
        assert!(!state.scrolled());
    }
}
