// UI constants extracted from scattered magic numbers across the codebase.

use eframe::egui::Color32;

/// Accent color used for selected segments, value labels and the switch track.
pub const ACCENT: Color32 = Color32::from_rgb(210, 85, 85);

/// Neutral outline color for unselected widget borders.
pub const OUTLINE: Color32 = Color32::from_gray(80);

/// Panel background fill.
pub const PANEL_BG: Color32 = Color32::from_rgb(30, 30, 30);

/// Alpha of the accent fill behind a selected segment (premultiplied).
pub const ACCENT_FILL_ALPHA: u8 = 26;

/// Segmented group metrics
pub mod button_group {
    /// Corner radius on the leading/trailing edges of the strip.
    pub const ROUNDING: f32 = 12.0;

    /// Horizontal overlap between adjacent segments so shared borders
    /// do not render twice as thick.
    pub const OVERLAP: f32 = 1.0;

    /// Inner horizontal padding reserved for the segment caption.
    pub const TEXT_PADDING: f32 = 8.0;
}

/// Slider row metrics
pub mod slider_item {
    /// Vertical gap between the header row and the slider rail.
    pub const HEADER_GAP: f32 = 4.0;
}

/// Switch metrics
pub mod switch {
    /// Track width in logical pixels.
    pub const WIDTH: f32 = 40.0;

    /// Track height in logical pixels.
    pub const HEIGHT: f32 = 22.0;

    /// Gap between the label column and the switch.
    pub const LABEL_GAP: f32 = 8.0;
}

/// Shared row spacing
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;
}
