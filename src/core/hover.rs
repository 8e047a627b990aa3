/// Inline style values a project card carries in one hover phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
    /// `None` leaves the current transition untouched.
    pub transition: Option<&'static str>,
}

pub const LIFTED: CardStyle = CardStyle {
    transform: "translateY(-8px) scale(1.02)",
    box_shadow: "0 10px 20px rgba(0,0,0,0.2)",
    transition: Some("transform 0.3s ease, box-shadow 0.3s ease"),
};

// The transition set on enter stays so the card eases back down.
pub const NEUTRAL: CardStyle = CardStyle {
    transform: "translateY(0) scale(1)",
    box_shadow: "none",
    transition: None,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Enter,
    Leave,
}

impl HoverPhase {
    pub fn event_name(self) -> &'static str {
        match self {
            HoverPhase::Enter => "mouseenter",
            HoverPhase::Leave => "mouseleave",
        }
    }

    pub fn style(self) -> CardStyle {
        match self {
            HoverPhase::Enter => LIFTED,
            HoverPhase::Leave => NEUTRAL,
        }
    }
}

/// Minimal style sink so the hover rules can be applied to anything with
/// settable CSS properties.
pub trait StyleTarget {
    fn set_style(&mut self, property: &str, value: &str);
}

pub fn apply_card_style<T: StyleTarget + ?Sized>(target: &mut T, style: CardStyle) {
    target.set_style("transform", style.transform);
    target.set_style("box-shadow", style.box_shadow);
    if let Some(transition) = style.transition {
        target.set_style("transition", transition);
    }
}
