// Host-side tests for the project card hover styles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod hover {
    include!("../src/core/hover.rs");
}

use hover::*;
use std::collections::BTreeMap;

#[derive(Default)]
struct FakeStyle(BTreeMap<String, String>);

impl StyleTarget for FakeStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        self.0.insert(property.to_string(), value.to_string());
    }
}

impl FakeStyle {
    fn get(&self, p: &str) -> Option<&str> {
        self.0.get(p).map(String::as_str)
    }
}

#[test]
fn enter_lifts_and_adds_shadow() {
    let mut s = FakeStyle::default();
    apply_card_style(&mut s, HoverPhase::Enter.style());
    assert_eq!(s.get("transform"), Some("translateY(-8px) scale(1.02)"));
    assert_eq!(s.get("box-shadow"), Some("0 10px 20px rgba(0,0,0,0.2)"));
    assert_eq!(
        s.get("transition"),
        Some("transform 0.3s ease, box-shadow 0.3s ease")
    );
}

#[test]
fn leave_restores_neutral_baseline_exactly() {
    let mut s = FakeStyle::default();
    apply_card_style(&mut s, HoverPhase::Enter.style());
    apply_card_style(&mut s, HoverPhase::Leave.style());
    assert_eq!(s.get("transform"), Some("translateY(0) scale(1)"));
    assert_eq!(s.get("box-shadow"), Some("none"));
    // Transition kept so the card eases back down
    assert!(s.get("transition").is_some());
}

#[test]
fn repeated_enter_is_idempotent() {
    let mut once = FakeStyle::default();
    apply_card_style(&mut once, LIFTED);
    let mut twice = FakeStyle::default();
    apply_card_style(&mut twice, LIFTED);
    apply_card_style(&mut twice, LIFTED);
    assert_eq!(once.0, twice.0);
}

#[test]
fn phases_map_to_dom_events() {
    assert_eq!(HoverPhase::Enter.event_name(), "mouseenter");
    assert_eq!(HoverPhase::Leave.event_name(), "mouseleave");
    assert_eq!(HoverPhase::Leave.style(), NEUTRAL);
}
