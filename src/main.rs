#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console in release builds

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    // Initialize localization from the stored choice or the system locale
    let preferred = app::settings::with_settings(|s| s.language);
    if let Err(e) = localization::initialize_localization(preferred.code()) {
        log::error!("Localization initialization failed: {e}");
    }

    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|_cc| Box::new(app::PlaydeckApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
