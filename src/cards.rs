use crate::constants::PROJECT_CARD_SELECTOR;
use crate::core::hover::{apply_card_style, HoverPhase, StyleTarget};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

struct InlineStyle(web::CssStyleDeclaration);

impl StyleTarget for InlineStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        _ = self.0.set_property(property, value);
    }
}

fn bind_card(card: &web::HtmlElement) {
    for phase in [HoverPhase::Enter, HoverPhase::Leave] {
        let el = card.clone();
        dom::add_listener(card, phase.event_name(), move |_ev: web::MouseEvent| {
            apply_card_style(&mut InlineStyle(el.style()), phase.style());
        });
    }
}

/// Attach hover lift to every project card. Returns how many were bound.
pub fn init(document: &web::Document) -> usize {
    let cards = match document.query_selector_all(PROJECT_CARD_SELECTOR) {
        Ok(list) => list,
        Err(_) => return 0,
    };
    let mut bound = 0;
    for i in 0..cards.length() {
        if let Some(card) = cards
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        {
            bind_card(&card);
            bound += 1;
        }
    }
    bound
}
