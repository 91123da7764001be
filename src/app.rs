// Application shell: owns the working copy of the settings state and
// drives the panel. Persistence and the logs window live in submodules.

use eframe::{egui, App};

use crate::types::*;
use crate::views::settings::draw_settings_panel;

mod logs_ui;
pub mod settings;

pub struct PlaydeckApp {
    library_filter: LibraryFilter,
    quality: StreamQuality,
    language: LangChoice,
    volume: f32,
    crossfade_secs: f32,
    playback_speed: f32,
    gapless: bool,
    normalize_loudness: bool,
    resume_position: bool,
    show_logs: bool,
    dirty: bool,
}

impl Default for PlaydeckApp {
    fn default() -> Self {
        let s = settings::with_settings(|s| s.clone());
        Self {
            library_filter: s.library_filter,
            quality: s.quality,
            language: s.language,
            volume: s.volume,
            crossfade_secs: s.crossfade_secs,
            playback_speed: s.playback_speed,
            gapless: s.gapless,
            normalize_loudness: s.normalize_loudness,
            resume_position: s.resume_position,
            show_logs: false,
            dirty: false,
        }
    }
}

impl App for PlaydeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        let (changed_now, logs_clicked) = draw_settings_panel(
            ctx,
            &mut self.library_filter,
            &mut self.quality,
            &mut self.language,
            &mut self.volume,
            &mut self.crossfade_secs,
            &mut self.playback_speed,
            &mut self.gapless,
            &mut self.normalize_loudness,
            &mut self.resume_position,
        );

        if changed_now {
            self.push_to_store();
            self.dirty = true;
        }

        // Defer the actual write until the pointer is released so slider
        // drags do not hit the disk every frame.
        if self.dirty && !ctx.input(|i| i.pointer.any_down()) {
            settings::save_settings_to_disk();
            self.dirty = false;
        }

        if logs_clicked {
            self.show_logs = !self.show_logs;
        }
        if self.show_logs {
            logs_ui::draw_logs_window(ctx, &mut self.show_logs);
        }
    }
}

impl PlaydeckApp {
    fn push_to_store(&self) {
        settings::with_settings_mut(|s| {
            s.library_filter = self.library_filter;
            s.quality = self.quality;
            s.language = self.language;
            s.volume = self.volume;
            s.crossfade_secs = self.crossfade_secs;
            s.playback_speed = self.playback_speed;
            s.gapless = self.gapless;
            s.normalize_loudness = self.normalize_loudness;
            s.resume_position = self.resume_position;
        });
    }
}
