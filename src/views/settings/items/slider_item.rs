use std::ops::RangeInclusive;

use eframe::egui::{self, Label, RichText, Slider, Ui};

use crate::ui_constants::{slider_item as metrics, spacing, ACCENT};

/// Default value formatter: two decimal places.
pub fn two_decimals(value: f32) -> String {
    format!("{value:.2}")
}

/// Distance between two snap stops, or None for a continuous slider.
pub(crate) fn step_interval(range: &RangeInclusive<f32>, step: usize) -> Option<f64> {
    if step == 0 {
        return None;
    }
    let span = (range.end() - range.start()) as f64;
    if span <= 0.0 {
        return None;
    }
    Some(span / step as f64)
}

/// Slider row: optional leading icon, title on the left, the formatted
/// current value on the right, slider rail underneath.
/// `step == 0` drags continuously; otherwise the rail snaps to `step + 1`
/// evenly spaced stops across `range`. Every intermediate drag position is
/// written through `value`; returns true on any frame the value changed.
/// A `value` outside `range` is clamped by the slider itself.
pub fn slider_item(
    ui: &mut Ui,
    text: &str,
    value: &mut f32,
    range: RangeInclusive<f32>,
    step: usize,
    icon: Option<&str>,
    value_text: impl Fn(f32) -> String,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        if let Some(glyph) = icon {
            ui.add(Label::new(RichText::new(glyph).size(18.0).weak()).selectable(false));
            ui.add_space(spacing::SMALL);
        }
        ui.vertical(|ui| {
            // Header: title left, current value right.
            ui.horizontal(|ui| {
                ui.add(Label::new(RichText::new(text).weak()).selectable(false));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        Label::new(RichText::new(value_text(*value)).color(ACCENT))
                            .selectable(false),
                    );
                });
            });
            ui.add_space(metrics::HEADER_GAP);

            ui.spacing_mut().slider_width = ui.available_width();
            let mut slider = Slider::new(value, range.clone()).show_value(false);
            if let Some(interval) = step_interval(&range, step) {
                slider = slider.step_by(interval);
            }
            changed = ui.add(slider).changed();
        });
    });
    changed
}
