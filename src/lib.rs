//! # brochure
//!
//! Page enhancements for the marketing site, compiled to WebAssembly.
//!
//! Three independent controllers attach once the document is ready: the
//! mobile hamburger menu, smooth scrolling for in-page anchors, and one-shot
//! reveal animations for cards and fade-in blocks. Each controller keeps its
//! state in memory and projects it onto CSS class markers; the stylesheet
//! owns the visuals.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Menu open/closed state and its marker projection |
//! | [`scroll`] | Anchor href classification and smooth scrolling |
//! | [`reveal`] | Per-element reveal state machine and observer wiring |
//! | [`config`] | Selector, class and threshold overrides |
//! | [`consts`] | Default selectors, class names and thresholds |
//! | [`error`] | [`error::SiteError`] |
//!
//! Browser wiring is behind the `hydrate` feature. Without it the crate is
//! the pure state layer, which is what the unit tests exercise.

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
mod dom;
pub mod error;
pub mod menu;
pub mod reveal;
pub mod scroll;

#[cfg(feature = "hydrate")]
pub use runtime::{init, start};

#[cfg(feature = "hydrate")]
mod runtime {
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::{Document, DocumentReadyState};

    use crate::config::SiteConfig;
    use crate::consts::CONFIG_ELEMENT_ID;
    use crate::error::SiteError;
    use crate::{dom, menu, reveal, scroll};

    /// WASM entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if console_log::init_with_level(level).is_err() {
            log::debug!("logger already installed");
        }
        if let Err(err) = when_ready() {
            log::error!("page enhancements not started: {err}");
        }
    }

    fn when_ready() -> Result<(), SiteError> {
        let document = dom::document()?;
        if document.ready_state() != DocumentReadyState::Loading {
            init(&document, &load_config(&document));
            return Ok(());
        }
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| {
            init(&doc, &load_config(&doc));
        })
    }

    /// Read overrides from `<script type="application/json" id="brochure-config">`.
    ///
    /// Falls back to the defaults when the element is absent or invalid.
    fn load_config(document: &Document) -> SiteConfig {
        let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return SiteConfig::default();
        };
        match SiteConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                SiteConfig::default()
            }
        }
    }

    /// Attach every controller. A controller that fails stays detached and
    /// the others still attach.
    pub fn init(document: &Document, config: &SiteConfig) {
        if let Err(err) = menu::MenuController::attach(document, &config.menu) {
            log::error!("mobile menu disabled: {err}");
        }
        if let Err(err) = scroll::attach(document, &config.scroll) {
            log::error!("smooth scroll disabled: {err}");
        }
        if let Err(err) = reveal::attach(document, &config.reveal) {
            log::error!("scroll animations disabled: {err}");
        }
    }
}
