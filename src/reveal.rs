//! Scroll-triggered reveal animations.
//!
//! Every observed element walks `Unobserved -> Pending -> Visible` exactly
//! once. [`RevealTracker`] holds that per-element state keyed by element
//! identity, so the page markup is never tagged; the browser side
//! feeds it `IntersectionObserver` entries and, on the single `Revealed`
//! transition, adds the `visible` marker and stops observing the element.
//! Leaving and re-entering the viewport afterwards has no effect.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{RATIO_EPSILON, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};

/// When an element counts as having entered the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Minimum visible fraction of the element, `0.0..=1.0`.
    pub threshold: f64,
    /// How far the observer root is pulled up from the viewport bottom.
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX }
    }
}

impl RevealOptions {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Whether an observation satisfies the threshold.
    #[must_use]
    pub fn admits(&self, visibility: Visibility) -> bool {
        visibility.is_intersecting && visibility.ratio + RATIO_EPSILON >= self.threshold
    }
}

/// One intersection observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Slot of an observed element inside a [`RevealTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey(pub usize);

impl std::fmt::Display for RevealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unobserved,
    Pending,
    /// Terminal.
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// The element just became visible; mark it and unobserve it.
    Revealed,
    Unchanged,
}

/// Per-element reveal state.
///
/// `T` is the element handle; handles compare by identity, so an element
/// matched by several selectors is tracked once.
#[derive(Debug, Clone)]
pub struct RevealTracker<T> {
    options: RevealOptions,
    entries: Vec<(T, RevealState)>,
}

impl<T: PartialEq> Default for RevealTracker<T> {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

impl<T: PartialEq> RevealTracker<T> {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { options, entries: Vec::new() }
    }

    #[must_use]
    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Start tracking `target` in `Pending`.
    ///
    /// Returns `None` when `target` is already tracked.
    pub fn register(&mut self, target: T) -> Option<RevealKey> {
        if self.key_of(&target).is_some() {
            return None;
        }
        self.entries.push((target, RevealState::Pending));
        Some(RevealKey(self.entries.len() - 1))
    }

    /// Key of a tracked element.
    #[must_use]
    pub fn key_of(&self, target: &T) -> Option<RevealKey> {
        self.entries.iter().position(|(t, _)| t == target).map(RevealKey)
    }

    /// Current state; keys never registered read as `Unobserved`.
    #[must_use]
    pub fn state(&self, key: RevealKey) -> RevealState {
        self.entries.get(key.0).map(|(_, state)| *state).unwrap_or_default()
    }

    /// Feed one observation for `key`.
    pub fn observe_entry(&mut self, key: RevealKey, visibility: Visibility) -> RevealTransition {
        let Some((_, state)) = self.entries.get_mut(key.0) else {
            return RevealTransition::Unchanged;
        };
        if *state != RevealState::Pending || !self.options.admits(visibility) {
            return RevealTransition::Unchanged;
        }
        *state = RevealState::Visible;
        RevealTransition::Revealed
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.count(RevealState::Pending)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.count(RevealState::Visible)
    }

    fn count(&self, wanted: RevealState) -> usize {
        self.entries.iter().filter(|(_, s)| *s == wanted).count()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RevealOptions, RevealTracker, RevealTransition, Visibility};
    use crate::config::RevealConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// Observe every element matching the configured selectors.
    ///
    /// Returns the number of elements being watched.
    ///
    /// # Errors
    ///
    /// Returns a wrapped JS error if the observer cannot be created or a
    /// selector is invalid.
    pub fn attach(document: &Document, config: &RevealConfig) -> Result<usize, SiteError> {
        let options = RevealOptions { threshold: config.threshold, bottom_margin_px: config.bottom_margin_px };
        let tracker = Rc::new(RefCell::new(RevealTracker::<Element>::new(options)));
        let visible_class = config.visible_class.clone();

        let cb_tracker = Rc::clone(&tracker);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for value in entries.iter() {
                let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let visibility = Visibility {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let transition = {
                    let mut tracker = cb_tracker.borrow_mut();
                    tracker.key_of(&target).map(|key| (key, tracker.observe_entry(key, visibility)))
                };
                let Some((key, RevealTransition::Revealed)) = transition else {
                    continue;
                };
                if let Err(err) = dom::set_class(&target, &visible_class, true) {
                    log::warn!("reveal {key}: {err}");
                }
                observer.unobserve(&target);
                log::debug!("element revealed: {key}");
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        for selector in &config.selectors {
            let mut watched = 0_usize;
            for el in dom::query_all(document, selector)? {
                // None when an earlier selector matched it already.
                if tracker.borrow_mut().register(el.clone()).is_none() {
                    continue;
                }
                observer.observe(&el);
                watched += 1;
            }
            log::info!("watching {watched} elements for {selector}");
        }

        let total = tracker.borrow().pending_count();
        log::info!("scroll animations initialized ({total} elements)");
        Ok(total)
    }
}
