//! Mobile hamburger menu.
//!
//! [`MenuCore`] owns the single open/closed flag and reduces input events
//! into it. The DOM never holds state of its own: after every change the
//! controller writes [`MenuMarkers`] onto the toggle button, the nav
//! container and `<body>` in one pass, so the three markers cannot drift.
//!
//! The initial state is read once from the nav's `active` class and then
//! projected onto all three elements, so markup that ships with only some
//! markers set is normalized at startup.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::MenuConfig;
use crate::consts::DESKTOP_BREAKPOINT_PX;
use crate::error::SiteError;

/// Inputs the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was activated.
    Toggle,
    /// A link inside the navigation was activated.
    LinkActivated,
    /// A click anywhere in the document, classified against the menu.
    DocumentClick {
        /// The click target lies inside the navigation container.
        inside_nav: bool,
        /// The click target lies inside the toggle button.
        on_toggle: bool,
    },
    /// The window was resized to `width` CSS pixels.
    Resize { width: f64 },
}

/// Class markers derived from the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuMarkers {
    /// `active` on the toggle button.
    pub toggle_active: bool,
    /// `active` on the navigation container.
    pub nav_active: bool,
    /// `menu-open` on `<body>`.
    pub body_menu_open: bool,
}

impl MenuMarkers {
    /// Whether all three markers agree.
    #[must_use]
    pub fn consistent(self) -> bool {
        self.toggle_active == self.nav_active && self.nav_active == self.body_menu_open
    }
}

/// Menu state, independent of the browser.
#[derive(Debug, Clone, Copy)]
pub struct MenuCore {
    open: bool,
    breakpoint_px: f64,
}

impl Default for MenuCore {
    fn default() -> Self {
        Self::new(DESKTOP_BREAKPOINT_PX)
    }
}

impl MenuCore {
    /// A closed menu that auto-closes above `breakpoint_px`.
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self::with_open(false, breakpoint_px)
    }

    /// A menu starting in the given state.
    #[must_use]
    pub fn with_open(open: bool, breakpoint_px: f64) -> Self {
        Self { open, breakpoint_px }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply one event. Returns `true` when the open flag changed.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::LinkActivated => false,
            MenuEvent::DocumentClick { inside_nav, on_toggle } => self.open && (inside_nav || on_toggle),
            MenuEvent::Resize { width } => self.open && width <= self.breakpoint_px,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    /// The projection to write onto the page.
    #[must_use]
    pub fn markers(&self) -> MenuMarkers {
        MenuMarkers {
            toggle_active: self.open,
            nav_active: self.open,
            body_menu_open: self.open,
        }
    }
}

/// The toggle button, nav container and body, once all three are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuElements<T> {
    pub toggle: T,
    pub nav: T,
    pub body: T,
}

/// Decide whether the menu can attach at all.
///
/// The menu is all-or-nothing: unless every element is present, no
/// listener may be attached.
///
/// # Errors
///
/// Returns [`SiteError::ElementNotFound`] naming the first missing element:
/// the toggle selector, then the nav selector, then `body`.
pub fn resolve_menu<T>(
    toggle: Option<T>,
    nav: Option<T>,
    body: Option<T>,
    config: &MenuConfig,
) -> Result<MenuElements<T>, SiteError> {
    let toggle = toggle.ok_or_else(|| SiteError::ElementNotFound(config.toggle_selector.clone()))?;
    let nav = nav.ok_or_else(|| SiteError::ElementNotFound(config.nav_selector.clone()))?;
    let body = body.ok_or_else(|| SiteError::ElementNotFound("body".into()))?;
    Ok(MenuElements { toggle, nav, body })
}

#[cfg(feature = "hydrate")]
pub use browser::MenuController;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, Node};

    use super::{MenuCore, MenuElements, MenuEvent, MenuMarkers, resolve_menu};
    use crate::config::MenuConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// The three elements carrying the menu markers.
    struct MenuView {
        toggle: Element,
        nav: Element,
        body: Element,
        active_class: String,
        body_open_class: String,
    }

    impl MenuView {
        fn render(&self, markers: MenuMarkers) -> Result<(), SiteError> {
            dom::set_class(&self.toggle, &self.active_class, markers.toggle_active)?;
            dom::set_class(&self.nav, &self.active_class, markers.nav_active)?;
            dom::set_class(&self.body, &self.body_open_class, markers.body_menu_open)
        }

        fn contains(container: &Element, target: Option<&Node>) -> bool {
            target.is_some_and(|node| container.contains(Some(node)))
        }
    }

    /// Browser wiring for [`MenuCore`].
    pub struct MenuController {
        core: Rc<RefCell<MenuCore>>,
        view: Rc<MenuView>,
    }

    impl MenuController {
        /// Look up the menu elements and attach every listener.
        ///
        /// Nothing is attached unless the toggle, nav and body all exist; the
        /// check runs in [`resolve_menu`] before the first listener.
        ///
        /// # Errors
        ///
        /// Returns [`SiteError::ElementNotFound`] for the first missing element,
        /// or a wrapped JS error if a listener cannot be attached.
        pub fn attach(document: &Document, config: &MenuConfig) -> Result<Self, SiteError> {
            let toggle = dom::find(document, &config.toggle_selector)?;
            let nav = dom::find(document, &config.nav_selector)?;
            let body = document.body().map(Element::from);
            log::debug!(
                "menu toggle found: {}, nav found: {}, body found: {}",
                toggle.is_some(),
                nav.is_some(),
                body.is_some()
            );
            let MenuElements { toggle, nav, body } = resolve_menu(toggle, nav, body, config)?;
            let links = dom::query_all(document, &config.link_selector)?;
            let open = nav.class_list().contains(&config.active_class);

            let controller = Self {
                core: Rc::new(RefCell::new(MenuCore::with_open(open, config.breakpoint_px))),
                view: Rc::new(MenuView {
                    toggle,
                    nav,
                    body,
                    active_class: config.active_class.clone(),
                    body_open_class: config.body_open_class.clone(),
                }),
            };
            controller.render()?;

            controller.listen(&controller.view.toggle, "click", |_| MenuEvent::Toggle)?;
            for link in &links {
                controller.listen(link, "click", |_| MenuEvent::LinkActivated)?;
            }

            let view = Rc::clone(&controller.view);
            controller.listen(document, "click", move |event: &Event| {
                let target = event.target();
                let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
                MenuEvent::DocumentClick {
                    inside_nav: MenuView::contains(&view.nav, node),
                    on_toggle: MenuView::contains(&view.toggle, node),
                }
            })?;

            let window = dom::window()?;
            let resized = window.clone();
            controller.listen(&window, "resize", move |_| MenuEvent::Resize {
                width: resized.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0)),
            })?;

            log::info!("mobile menu initialized ({} nav links)", links.len());
            Ok(controller)
        }

        fn render(&self) -> Result<(), SiteError> {
            self.view.render(self.core.borrow().markers())
        }

        /// Map DOM events on `target` through `classify` into the core.
        fn listen<F>(&self, target: &web_sys::EventTarget, event: &str, classify: F) -> Result<(), SiteError>
        where
            F: Fn(&Event) -> MenuEvent + 'static,
        {
            let core = Rc::clone(&self.core);
            let view = Rc::clone(&self.view);
            dom::listen(target, event, move |ev| {
                let menu_event = classify(&ev);
                let (changed, markers) = {
                    let mut core = core.borrow_mut();
                    (core.handle(menu_event), core.markers())
                };
                if !changed {
                    return;
                }
                log::debug!("menu {:?} -> open: {}", menu_event, markers.nav_active);
                if let Err(err) = view.render(markers) {
                    log::warn!("menu render failed: {err}");
                }
            })
        }
    }
}
