//! Selector, class and threshold configuration.
//!
//! The defaults describe the stock page markup. A page may override any
//! subset with an inline `<script type="application/json" id="brochure-config">`
//! element; omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_CLASS, ANCHOR_SELECTOR, CARD_SELECTOR, DESKTOP_BREAKPOINT_PX, FADE_IN_SELECTOR, MENU_OPEN_CLASS,
    NAV_LINK_SELECTOR, NAV_SELECTOR, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD, TOGGLE_SELECTOR, VISIBLE_CLASS,
};
use crate::error::SiteError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub nav_selector: String,
    pub link_selector: String,
    pub active_class: String,
    pub body_open_class: String,
    /// Widths strictly above this close the menu.
    pub breakpoint_px: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: TOGGLE_SELECTOR.into(),
            nav_selector: NAV_SELECTOR.into(),
            link_selector: NAV_LINK_SELECTOR.into(),
            active_class: ACTIVE_CLASS.into(),
            body_open_class: MENU_OPEN_CLASS.into(),
            breakpoint_px: DESKTOP_BREAKPOINT_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: ANCHOR_SELECTOR.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Every element matching any of these is observed.
    pub selectors: Vec<String>,
    pub visible_class: String,
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![CARD_SELECTOR.into(), FADE_IN_SELECTOR.into()],
            visible_class: VISIBLE_CLASS.into(),
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for malformed JSON and
    /// [`SiteError::InvalidConfig`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and reject empty selectors or class names.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SiteError> {
        let menu = &self.menu;
        non_empty("menu.toggle_selector", &menu.toggle_selector)?;
        non_empty("menu.nav_selector", &menu.nav_selector)?;
        non_empty("menu.link_selector", &menu.link_selector)?;
        non_empty("menu.active_class", &menu.active_class)?;
        non_empty("menu.body_open_class", &menu.body_open_class)?;
        non_negative("menu.breakpoint_px", menu.breakpoint_px)?;

        non_empty("scroll.anchor_selector", &self.scroll.anchor_selector)?;

        let reveal = &self.reveal;
        if reveal.selectors.is_empty() {
            return Err(SiteError::InvalidConfig("reveal.selectors must not be empty".into()));
        }
        for selector in &reveal.selectors {
            non_empty("reveal.selectors[]", selector)?;
        }
        non_empty("reveal.visible_class", &reveal.visible_class)?;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal.threshold must be within 0..=1, got {}",
                reveal.threshold
            )));
        }
        non_negative("reveal.bottom_margin_px", reveal.bottom_margin_px)?;
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), SiteError> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfig(format!("{field} must not be empty")));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), SiteError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SiteError::InvalidConfig(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
