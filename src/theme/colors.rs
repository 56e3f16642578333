//! Colors - Shop Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Shop color palette - All colors are accessed via associated functions
pub struct ShopColors;

impl ShopColors {
    // Surfaces
    /// Window background
    pub fn background() -> Rgba { rgb(0xfafafa) }
    /// List and details pane background
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Top bar background
    pub fn top_bar_bg() -> Rgba { rgb(0xf3edf7) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1d1b20) }
    /// Secondary text (price, description)
    pub fn text_secondary() -> Rgba { rgb(0x49454f) }
    /// Placeholder text
    pub fn text_muted() -> Rgba { rgb(0x79747e) }

    // Interaction
    /// Row hover
    pub fn row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Row pressed / selected
    pub fn row_selected() -> Rgba { rgb(0xe8def8) }
    /// Ghost button hover
    pub fn ghost_hover() -> Rgba { rgba(0x1d1b2014) }

    // Borders
    /// Row dividers and the pane separator
    pub fn divider() -> Rgba { rgb(0xcac4d0) }
}
