use serde::{Deserialize, Serialize};

/// Side of the square floating icon, in pixels.
pub const ICON_SIZE: i64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPosition {
    pub x: i64,
    pub y: i64,
}

impl Default for IconPosition {
    fn default() -> Self {
        Self { x: 20, y: 20 }
    }
}

impl IconPosition {
    /// Keep the whole icon inside a `width` x `height` viewport.
    pub fn clamped(self, width: i64, height: i64) -> Self {
        let max_x = (width - ICON_SIZE).max(0);
        let max_y = (height - ICON_SIZE).max(0);
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }

    /// Parse `X,Y`.
    pub fn parse(s: &str) -> Option<Self> {
        let (x, y) = s.split_once(',')?;
        Some(Self {
            x: x.trim().parse().ok()?,
            y: y.trim().parse().ok()?,
        })
    }
}

/// Presentation-only placement state, persisted alongside the tracker records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub minimized: bool,
    pub icon_position: IconPosition,
}

/// Parse a `WIDTHxHEIGHT` viewport.
pub fn parse_viewport(s: &str) -> Option<(i64, i64)> {
    let lower = s.to_lowercase();
    let (w, h) = lower.split_once('x')?;
    match (w.trim().parse::<i64>(), h.trim().parse::<i64>()) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Some((w, h)),
        _ => None,
    }
}
