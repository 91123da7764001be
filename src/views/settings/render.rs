use eframe::egui::{self, Layout, RichText};
use strum::IntoEnumIterator;

use crate::localization::translate;
use crate::types::*;
use crate::ui_constants::{spacing, PANEL_BG};
use crate::views::settings::items::{
    button_group::button_group,
    slider_item::{slider_item, two_decimals},
    switch_item::switch_item,
};
use crate::views::settings::LocalizableName;

/// Runs an enum through the segmented group: the variants become the
/// labels, the current variant the selected index.
fn enum_button_group<T>(ui: &mut egui::Ui, current: &mut T) -> bool
where
    T: IntoEnumIterator + LocalizableName + PartialEq + Clone,
{
    let variants: Vec<T> = T::iter().collect();
    let labels: Vec<String> = variants.iter().map(|v| translate(v.loc_key())).collect();
    let mut idx = variants.iter().position(|v| v == current).unwrap_or(0);
    if button_group(ui, &labels, &mut idx) {
        *current = variants[idx].clone();
        true
    } else {
        false
    }
}

fn section_header(ui: &mut egui::Ui, key: &str) {
    ui.label(RichText::new(translate(key)).weak());
    ui.add_space(spacing::SMALL);
}

/// Draws the settings panel.
/// State is passed in by mutable references and updated in-place.
pub fn draw_settings_panel(
    ctx: &egui::Context,
    library_filter: &mut LibraryFilter,
    quality: &mut StreamQuality,
    language: &mut LangChoice,
    volume: &mut f32,
    crossfade_secs: &mut f32,
    playback_speed: &mut f32,
    gapless: &mut bool,
    normalize_loudness: &mut bool,
    resume_position: &mut bool,
) -> (bool, bool) {
    let mut changed_now = false;
    let mut logs_clicked = false;
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(PANEL_BG).inner_margin(10.0))
        .show(ctx, |ui| {
            ui.label(RichText::new(translate("settings-title")).strong());
            ui.separator();

            section_header(ui, "settings-section-library");
            changed_now |= enum_button_group(ui, library_filter);

            ui.separator();
            section_header(ui, "settings-section-quality");
            changed_now |= enum_button_group(ui, quality);

            ui.separator();
            section_header(ui, "settings-section-playback");
            changed_now |= slider_item(
                ui,
                &translate("settings-volume"),
                volume,
                0.0..=1.0,
                0,
                Some("🔊"),
                two_decimals,
            );
            changed_now |= slider_item(
                ui,
                &translate("settings-crossfade"),
                crossfade_secs,
                0.0..=12.0,
                12,
                None,
                |v| format!("{v:.0} s"),
            );
            changed_now |= slider_item(
                ui,
                &translate("settings-speed"),
                playback_speed,
                0.5..=2.0,
                6,
                None,
                |v| format!("{v:.2}×"),
            );

            ui.add_space(spacing::MEDIUM);
            changed_now |= switch_item(ui, &translate("settings-gapless"), gapless, None, None);
            changed_now |= switch_item(
                ui,
                &translate("settings-normalize"),
                normalize_loudness,
                None,
                Some(&translate("settings-normalize-desc")),
            );
            changed_now |= switch_item(
                ui,
                &translate("settings-resume"),
                resume_position,
                Some("💾"),
                Some(&translate("settings-resume-desc")),
            );

            ui.separator();
            section_header(ui, "settings-section-language");
            if enum_button_group(ui, language) {
                changed_now = true;
                apply_language(*language);
            }

            ui.add_space(spacing::MEDIUM);
            ui.with_layout(Layout::bottom_up(egui::Align::LEFT), |ui| {
                if ui.button(translate("settings-logs")).clicked() {
                    logs_clicked = true;
                }
            });
        });
    (changed_now, logs_clicked)
}

fn apply_language(choice: LangChoice) {
    match choice.code() {
        Some(code) => {
            if let Err(e) = crate::localization::set_current_language(code) {
                log::error!("Language switch failed: {e}");
            }
        }
        None => crate::localization::set_language_auto(),
    }
    log::info!(
        "UI language set to {}",
        crate::localization::get_current_language()
    );
}
