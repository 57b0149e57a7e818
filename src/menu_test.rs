use super::*;

fn open_menu() -> MenuCore {
    let mut core = MenuCore::default();
    assert!(core.handle(MenuEvent::Toggle));
    core
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn starts_closed_with_markers_cleared() {
    let core = MenuCore::default();
    assert!(!core.is_open());
    assert_eq!(core.markers(), MenuMarkers::default());
}

#[test]
fn toggle_flips_state() {
    let mut core = MenuCore::default();
    assert!(core.handle(MenuEvent::Toggle));
    assert!(core.is_open());
    assert!(core.handle(MenuEvent::Toggle));
    assert!(!core.is_open());
}

#[test]
fn toggle_parity_matches_activation_count() {
    for initial_open in [false, true] {
        let mut core = MenuCore::default();
        if initial_open {
            core.handle(MenuEvent::Toggle);
        }
        for count in 1..=9_u32 {
            core.handle(MenuEvent::Toggle);
            assert_eq!(core.is_open(), initial_open ^ (count % 2 == 1), "after {count} toggles");
            let markers = core.markers();
            assert!(markers.consistent());
            assert_eq!(markers.nav_active, core.is_open());
        }
    }
}

// =============================================================
// Link activation
// =============================================================

#[test]
fn link_click_closes_open_menu() {
    let mut core = open_menu();
    assert!(core.handle(MenuEvent::LinkActivated));
    assert!(!core.is_open());
    assert!(core.markers().consistent());
}

#[test]
fn link_click_on_closed_menu_is_noop() {
    let mut core = MenuCore::default();
    assert!(!core.handle(MenuEvent::LinkActivated));
    assert!(!core.is_open());
}

// =============================================================
// Outside click
// =============================================================

#[test]
fn outside_click_closes_open_menu() {
    let mut core = open_menu();
    assert!(core.handle(MenuEvent::DocumentClick { inside_nav: false, on_toggle: false }));
    assert!(!core.is_open());
}

#[test]
fn click_inside_nav_keeps_menu_open() {
    let mut core = open_menu();
    assert!(!core.handle(MenuEvent::DocumentClick { inside_nav: true, on_toggle: false }));
    assert!(core.is_open());
}

#[test]
fn click_on_toggle_does_not_double_close() {
    let mut core = open_menu();
    assert!(!core.handle(MenuEvent::DocumentClick { inside_nav: false, on_toggle: true }));
    assert!(core.is_open());
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut core = MenuCore::default();
    assert!(!core.handle(MenuEvent::DocumentClick { inside_nav: false, on_toggle: false }));
    assert!(!core.is_open());
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_above_breakpoint_closes() {
    let mut core = open_menu();
    assert!(core.handle(MenuEvent::Resize { width: 769.0 }));
    assert!(!core.is_open());
}

#[test]
fn resize_at_breakpoint_keeps_open() {
    let mut core = open_menu();
    assert!(!core.handle(MenuEvent::Resize { width: 768.0 }));
    assert!(core.is_open());
    assert!(!core.handle(MenuEvent::Resize { width: 320.0 }));
    assert!(core.is_open());
}

#[test]
fn resize_while_closed_stays_closed() {
    let mut core = MenuCore::default();
    assert!(!core.handle(MenuEvent::Resize { width: 1440.0 }));
    assert!(!core.handle(MenuEvent::Resize { width: 320.0 }));
    assert!(!core.is_open());
}

#[test]
fn custom_breakpoint_is_honored() {
    let mut core = MenuCore::new(1024.0);
    core.handle(MenuEvent::Toggle);
    assert!(!core.handle(MenuEvent::Resize { width: 900.0 }));
    assert!(core.handle(MenuEvent::Resize { width: 1025.0 }));
}

// =============================================================
// Projection
// =============================================================

#[test]
fn markers_stay_consistent_across_mixed_events() {
    let events = [
        MenuEvent::Toggle,
        MenuEvent::DocumentClick { inside_nav: true, on_toggle: false },
        MenuEvent::Resize { width: 500.0 },
        MenuEvent::LinkActivated,
        MenuEvent::Toggle,
        MenuEvent::Resize { width: 1200.0 },
        MenuEvent::Toggle,
        MenuEvent::DocumentClick { inside_nav: false, on_toggle: false },
    ];
    let mut core = MenuCore::default();
    for event in events {
        core.handle(event);
        let markers = core.markers();
        assert!(markers.consistent(), "{event:?}");
        assert_eq!(markers.body_menu_open, core.is_open());
    }
    assert!(!core.is_open());
}

#[test]
fn inconsistent_markers_are_detected() {
    let markers = MenuMarkers { toggle_active: true, nav_active: false, body_menu_open: true };
    assert!(!markers.consistent());
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn seeded_open_state_projects_all_markers() {
    let core = MenuCore::with_open(true, 768.0);
    assert!(core.is_open());
    let markers = core.markers();
    assert!(markers.consistent());
    assert!(markers.toggle_active && markers.nav_active && markers.body_menu_open);
}

#[test]
fn seeded_open_state_toggles_closed() {
    let mut core = MenuCore::with_open(true, 768.0);
    assert!(core.handle(MenuEvent::Toggle));
    assert_eq!(core.markers(), MenuMarkers::default());
}

// =============================================================
// Element resolution
// =============================================================

#[test]
fn resolve_with_all_elements_present() {
    let config = MenuConfig::default();
    let elements = resolve_menu(Some("button"), Some("nav"), Some("body"), &config).unwrap();
    assert_eq!(elements, MenuElements { toggle: "button", nav: "nav", body: "body" });
}

#[test]
fn missing_toggle_is_reported_by_selector() {
    let config = MenuConfig::default();
    let err = resolve_menu(None, Some("nav"), Some("body"), &config).unwrap_err();
    assert!(matches!(err, SiteError::ElementNotFound(ref what) if what == ".hamburger"), "{err}");
}

#[test]
fn missing_nav_is_reported_by_selector() {
    let config = MenuConfig::default();
    let err = resolve_menu(Some("button"), None, Some("body"), &config).unwrap_err();
    assert!(matches!(err, SiteError::ElementNotFound(ref what) if what == "nav"), "{err}");
}

#[test]
fn missing_body_is_reported() {
    let config = MenuConfig::default();
    let err = resolve_menu(Some("button"), Some("nav"), None, &config).unwrap_err();
    assert!(matches!(err, SiteError::ElementNotFound(ref what) if what == "body"), "{err}");
}

#[test]
fn missing_element_uses_configured_selector() {
    let config = MenuConfig { toggle_selector: "#menu-button".into(), ..MenuConfig::default() };
    let err = resolve_menu::<u8>(None, None, None, &config).unwrap_err();
    assert_eq!(err.to_string(), "element not found: #menu-button");
}
