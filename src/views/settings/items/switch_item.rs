use eframe::egui::{self, Color32, Label, RichText, Rounding, Sense, Stroke, Ui, Vec2};

use crate::ui_constants::{spacing, switch as metrics, ACCENT, OUTLINE};

/// Toggle row: optional leading icon, title, optional weak description
/// under the title, switch pinned to the trailing edge. Flips `checked`
/// and returns true when the switch is clicked this frame. A missing
/// description is dropped from the layout entirely, not rendered as an
/// empty line.
pub fn switch_item(
    ui: &mut Ui,
    text: &str,
    checked: &mut bool,
    icon: Option<&str>,
    description: Option<&str>,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        if let Some(glyph) = icon {
            ui.add(Label::new(RichText::new(glyph).size(18.0).weak()).selectable(false));
            ui.add_space(spacing::SMALL);
        }
        ui.vertical(|ui| {
            ui.set_max_width(ui.available_width() - metrics::WIDTH - metrics::LABEL_GAP);
            ui.add(Label::new(RichText::new(text)).selectable(false));
            if let Some(desc) = description {
                ui.add(Label::new(RichText::new(desc).weak().size(12.0)).selectable(false));
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            changed = switch(ui, checked);
        });
    });
    changed
}

/// Painter-drawn switch: pill-shaped track with a gliding knob.
fn switch(ui: &mut Ui, on: &mut bool) -> bool {
    let size = Vec2::new(metrics::WIDTH, metrics::HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let mut changed = false;
    if response.clicked() {
        *on = !*on;
        changed = true;
    }

    if ui.is_rect_visible(rect) {
        // The knob glides on the egui animation clock; the reported value
        // flips immediately on click.
        let how_on = ui.ctx().animate_bool(response.id, *on);
        let radius = rect.height() * 0.5;

        let (track_fill, track_border) = if *on {
            (ACCENT.linear_multiply(0.35), ACCENT)
        } else {
            (Color32::from_rgb(45, 45, 45), OUTLINE)
        };
        let painter = ui.painter();
        painter.rect(rect, Rounding::same(radius), track_fill, Stroke::new(1.0, track_border));

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        painter.circle(
            egui::pos2(knob_x, rect.center().y),
            radius - 3.0,
            Color32::from_gray(220),
            Stroke::new(1.0, Color32::from_gray(50)),
        );
    }

    changed
}
