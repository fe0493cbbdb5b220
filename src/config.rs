use log::Level;

use crate::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose geometry logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BOOKING_URL: &str = "https://cal.com/sociql/consulting";

/// Gap kept between the sticky header and a section scrolled into place.
pub const HEADER_MARGIN_PX: f64 = 8.0;
pub const HEADER_HEIGHT_FALLBACK_PX: i32 = 80;

/// Band in the middle of the viewport a section has to cross to become active.
pub const SPY_ROOT_MARGIN: &str = "-50% 0px -45% 0px";
pub const SPY_THRESHOLD: f64 = 0.01;

pub const CAROUSEL_SETTLE_DELAY_MS: u32 = 100;
pub const LEGAL_ANCHOR_DELAY_MS: u32 = 50;

pub const INDICATOR_SPRING: SpringConfig = SpringConfig {
    stiffness: 320.0,
    damping: 28.0,
    mass: 0.7,
};

pub const CARD_SPRING: SpringConfig = SpringConfig {
    stiffness: 200.0,
    damping: 20.0,
    mass: 1.0,
};
