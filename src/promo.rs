//! Monetization: pick one of two promotional blocks from the current height.

/// Above this height the water-activity promotion runs (meters, exclusive)
pub const PADDLE_THRESHOLD_M: f32 = 1.8;

/// Which promotional block to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromoVariant {
    WaterActivities,
    RockShoes,
}

/// Static copy for one promotional block.
#[derive(Clone, Copy, Debug)]
pub struct PromoCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
}

impl PromoVariant {
    pub fn copy(self) -> PromoCopy {
        match self {
            PromoVariant::WaterActivities => PromoCopy {
                title: "Tide is High! Perfect for Paddling",
                body: "Explore the coastline from the water. Rent a paddleboard or kayak today.",
                cta: "Book Water Activities",
            },
            PromoVariant::RockShoes => PromoCopy {
                title: "Heading to the Caves?",
                body: "The rocks can be slippery. We recommend these grip-sole water shoes for safety.",
                cta: "Shop Rock Shoes",
            },
        }
    }
}

/// Map current height to a promo variant. The boundary is exclusive on the
/// high side: exactly 1.8 m still shows the footwear block.
pub fn select(height: f32) -> PromoVariant {
    if height > PADDLE_THRESHOLD_M {
        PromoVariant::WaterActivities
    } else {
        PromoVariant::RockShoes
    }
}

/// Thin rendering consumer: variant copy as a text block.
pub fn render(variant: PromoVariant) -> String {
    let copy = variant.copy();
    format!("{}\n{}\n[{}]", copy.title, copy.body, copy.cta)
}
