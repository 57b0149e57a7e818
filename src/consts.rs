//! Shared constants for the page controllers.

// ── Menu ────────────────────────────────────────────────────────

/// Hamburger button that opens and closes the mobile menu.
pub const TOGGLE_SELECTOR: &str = ".hamburger";

/// Navigation container that slides in on mobile.
pub const NAV_SELECTOR: &str = "nav";

/// Links inside the navigation container.
pub const NAV_LINK_SELECTOR: &str = "nav a";

/// Marker on the toggle button and nav while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// Marker on `<body>` while the menu is open (locks background scroll).
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Viewport widths strictly above this close an open menu, in CSS pixels.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

// ── Smooth scroll ───────────────────────────────────────────────

/// In-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Prefix that marks an href as an in-page fragment.
pub const FRAGMENT_MARKER: char = '#';

// ── Reveal ──────────────────────────────────────────────────────

/// Service cards animated on first scroll into view.
pub const CARD_SELECTOR: &str = ".service-card";

/// Generic fade-in targets.
pub const FADE_IN_SELECTOR: &str = ".fade-in";

/// Marker added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of the element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Amount the observer root is shrunk at the bottom, in CSS pixels.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

/// Float slack when comparing an intersection ratio to the threshold.
///
/// Covers only binary rounding of a ratio that is exactly at the threshold
/// (e.g. `0.1` computed as `0.09999999999999999`); a ratio of 9.95% is
/// still below a 10% threshold.
pub const RATIO_EPSILON: f64 = f64::EPSILON * 16.0;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional inline JSON element holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "brochure-config";
