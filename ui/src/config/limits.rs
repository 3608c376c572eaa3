/// Narrowest card that still fits the swatch, badge and a short name
pub const MIN_CARD_WIDTH: u16 = 18;

/// Widest card before a single column stops looking like a grid
pub const MAX_CARD_WIDTH: u16 = 80;

/// Border, swatch, name, mood and sigil rows
pub const MIN_CARD_HEIGHT: u16 = 6;

pub const MAX_CARD_HEIGHT: u16 = 20;

/// Bounds for the event loop poll timeout (milliseconds)
pub const MIN_POLL_TIMEOUT_MS: u64 = 10;
pub const MAX_POLL_TIMEOUT_MS: u64 = 1000;

/// Bounds for the tick interval (milliseconds)
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 5000;
