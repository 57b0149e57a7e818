//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::FRAGMENT_MARKER;

/// What an anchor's `href` points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// Missing href, or one that leaves the page. Default navigation applies.
    External,
    /// `#` on its own.
    Bare,
    /// `#id`; holds the id without the marker.
    Fragment(&'a str),
}

/// Classify an href by its fragment marker.
#[must_use]
pub fn classify_href(href: Option<&str>) -> AnchorTarget<'_> {
    match href.and_then(|h| h.strip_prefix(FRAGMENT_MARKER)) {
        None => AnchorTarget::External,
        Some("") => AnchorTarget::Bare,
        Some(id) => AnchorTarget::Fragment(id),
    }
}

/// How a click on an anchor should be handled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollPlan<'a> {
    /// Suppress the browser's jump.
    pub prevent_default: bool,
    /// Element id to bring to the top of the viewport.
    pub target_id: Option<&'a str>,
}

#[must_use]
pub fn plan_click(href: Option<&str>) -> ScrollPlan<'_> {
    match classify_href(href) {
        AnchorTarget::External => ScrollPlan::default(),
        AnchorTarget::Bare => ScrollPlan { prevent_default: true, target_id: None },
        AnchorTarget::Fragment(id) => ScrollPlan { prevent_default: true, target_id: Some(id) },
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::plan_click;
    use crate::config::ScrollConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// Attach smooth-scroll handlers to every in-page anchor.
    ///
    /// Returns the number of anchors wired.
    ///
    /// # Errors
    ///
    /// Returns a wrapped JS error if the selector is invalid or a listener
    /// cannot be attached.
    pub fn attach(document: &Document, config: &ScrollConfig) -> Result<usize, SiteError> {
        let anchors = dom::query_all(document, &config.anchor_selector)?;
        for anchor in &anchors {
            let doc = document.clone();
            let link = anchor.clone();
            dom::listen(anchor, "click", move |event| {
                let href = link.get_attribute("href");
                let plan = plan_click(href.as_deref());
                if plan.prevent_default {
                    event.prevent_default();
                }
                let Some(id) = plan.target_id else {
                    return;
                };
                match doc.get_element_by_id(id) {
                    Some(target) => scroll_to_top(&target),
                    None => log::debug!("no element with id {id:?}; scroll skipped"),
                }
            })?;
        }
        log::info!("smooth scroll initialized ({} anchors)", anchors.len());
        Ok(anchors.len())
    }

    fn scroll_to_top(target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
