// Logs window with colored levels and utilities.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

use crate::localization::translate;

lazy_static! {
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn draw_logs_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new(translate("logs-window-title"))
        .id(egui::Id::new("logs_window"))
        .open(open)
        .default_size([560.0, 360.0])
        .resizable(true)
        .show(ctx, |ui| {
            // Toolbar
            ui.horizontal(|ui| {
                if ui.button(translate("logs-clear")).clicked() {
                    crate::logger::clear();
                }
                if ui.button(translate("logs-copy")).clicked() {
                    let text = crate::logger::get_all().join("\n");
                    ui.output_mut(|o| o.copied_text = text);
                }
                let mut autoscroll = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
                if ui.checkbox(&mut autoscroll, translate("logs-autoscroll")).changed() {
                    if let Ok(mut w) = AUTOSCROLL.write() {
                        *w = autoscroll;
                    }
                }
                ui.separator();
                ui.label(format!("{} lines", crate::logger::len()));
            });
            ui.separator();

            let stick = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if stick {
                scroll = scroll.stick_to_bottom(true);
            }

            let total = crate::logger::len();
            let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
            // Batch visible lines into a single layout job to keep the
            // per-frame widget count down.
            scroll.show_rows(ui, row_height, total, |ui, row_range| {
                let mut job = egui::text::LayoutJob::default();
                crate::logger::for_each_range(row_range.start, row_range.end, |e| {
                    let fmt = egui::TextFormat {
                        color: color_for_level(e.level),
                        font_id: egui::FontId::monospace(12.0),
                        ..Default::default()
                    };
                    job.append(&format!("[{:>5}] {}: {}\n", e.level, e.target, e.msg), 0.0, fmt);
                });
                ui.add(egui::Label::new(job).wrap(false));
            });
        });
}

fn color_for_level(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(230, 80, 80),
        Level::Warn => egui::Color32::from_rgb(230, 180, 60),
        Level::Info => egui::Color32::from_gray(200),
        Level::Debug => egui::Color32::from_gray(140),
        Level::Trace => egui::Color32::from_gray(100),
    }
}
