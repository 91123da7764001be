#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;

    use eframe::egui::{self, pos2, vec2, Event, Modifiers, PointerButton, Pos2, Rect, RawInput};

    use crate::views::settings::items::button_group::{
        button_group, segment_rect, segment_rounding, segment_width,
    };
    use crate::views::settings::items::slider_item::{slider_item, step_interval, two_decimals};
    use crate::views::settings::items::switch_item::switch_item;
    use crate::ui_constants;

    /// Runs `ui_fn` for `frames` frames on a headless context, feeding the
    /// pointer events returned by `events_for_frame`. Frame 0 is normally
    /// left event-free so the closure can measure the layout first;
    /// widget rects are stable across frames.
    fn run_frames(
        frames: usize,
        mut events_for_frame: impl FnMut(usize) -> Vec<Event>,
        mut ui_fn: impl FnMut(&mut egui::Ui),
    ) {
        let ctx = egui::Context::default();
        for frame in 0..frames {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 600.0))),
                events: events_for_frame(frame),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| ui_fn(ui));
            });
        }
    }

    /// Hover, press, release on consecutive frames (1..=3).
    fn press_release(target: Pos2, frame: usize) -> Vec<Event> {
        match frame {
            1 => vec![Event::PointerMoved(target)],
            2 => vec![Event::PointerButton {
                pos: target,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::default(),
            }],
            3 => vec![Event::PointerButton {
                pos: target,
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::default(),
            }],
            _ => vec![],
        }
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // --- button_group ---

    #[test]
    fn lone_segment_rounds_all_corners() {
        let r = segment_rounding(0, 1, 12.0);
        assert_eq!((r.nw, r.ne, r.sw, r.se), (12.0, 12.0, 12.0, 12.0));
    }

    #[test]
    fn edge_segments_round_outer_corners_only() {
        let first = segment_rounding(0, 3, 12.0);
        assert_eq!((first.nw, first.sw), (12.0, 12.0));
        assert_eq!((first.ne, first.se), (0.0, 0.0));

        let mid = segment_rounding(1, 3, 12.0);
        assert_eq!((mid.nw, mid.ne, mid.sw, mid.se), (0.0, 0.0, 0.0, 0.0));

        let last = segment_rounding(2, 3, 12.0);
        assert_eq!((last.ne, last.se), (12.0, 12.0));
        assert_eq!((last.nw, last.sw), (0.0, 0.0));
    }

    #[test]
    fn segments_overlap_by_one_pixel_and_span_the_container() {
        let container = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 32.0));
        let count = 4;
        let seg_w = segment_width(container.width(), count);
        for i in 1..count {
            let prev = segment_rect(container, i - 1, seg_w);
            let cur = segment_rect(container, i, seg_w);
            assert!((prev.right() - cur.left() - 1.0).abs() < 1e-3);
        }
        let last = segment_rect(container, count - 1, seg_w);
        assert!((last.right() - container.right()).abs() < 1e-3);
    }

    #[test]
    fn button_group_click_reports_new_index_once() {
        let items = labels(&["One", "Two", "Three"]);
        let mut selected = 0usize;
        let mut reports = 0usize;
        let target = Cell::new(Pos2::ZERO);

        run_frames(
            4,
            |f| press_release(target.get(), f),
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
                let container = Rect::from_min_size(origin, vec2(width, height));
                let seg_w = segment_width(width, items.len());
                target.set(segment_rect(container, 2, seg_w).center());
                if button_group(ui, &items, &mut selected) {
                    reports += 1;
                }
            },
        );

        assert_eq!(selected, 2);
        assert_eq!(reports, 1);
    }

    #[test]
    fn button_group_ignores_click_on_selected_segment() {
        let items = labels(&["One", "Two"]);
        let mut selected = 1usize;
        let mut reports = 0usize;
        let target = Cell::new(Pos2::ZERO);

        run_frames(
            4,
            |f| press_release(target.get(), f),
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
                let container = Rect::from_min_size(origin, vec2(width, height));
                let seg_w = segment_width(width, items.len());
                target.set(segment_rect(container, 1, seg_w).center());
                if button_group(ui, &items, &mut selected) {
                    reports += 1;
                }
            },
        );

        assert_eq!(selected, 1);
        assert_eq!(reports, 0);
    }

    #[test]
    fn button_group_with_no_labels_renders_nothing() {
        let mut selected = 0usize;
        let mut changed = true;
        run_frames(
            1,
            |_| vec![],
            |ui| {
                changed = button_group(ui, &[], &mut selected);
            },
        );
        assert!(!changed);
        assert_eq!(selected, 0);
    }

    #[test]
    fn button_group_tolerates_out_of_range_selection() {
        let items = labels(&["One", "Two", "Three"]);
        let mut selected = 10usize;
        let mut reports = 0usize;
        let target = Cell::new(Pos2::ZERO);

        run_frames(
            4,
            |f| press_release(target.get(), f),
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
                let container = Rect::from_min_size(origin, vec2(width, height));
                let seg_w = segment_width(width, items.len());
                target.set(segment_rect(container, 1, seg_w).center());
                if button_group(ui, &items, &mut selected) {
                    reports += 1;
                }
            },
        );

        assert_eq!(selected, 1);
        assert_eq!(reports, 1);
    }

    // --- slider_item ---

    #[test]
    fn two_decimals_is_the_default_format() {
        assert_eq!(two_decimals(0.5), "0.50");
        assert_eq!(two_decimals(1.0), "1.00");
        assert_eq!(two_decimals(0.125), "0.12");
    }

    #[test]
    fn step_interval_splits_the_range_evenly() {
        assert_eq!(step_interval(&(0.0..=1.0), 4), Some(0.25));
        assert_eq!(step_interval(&(0.5..=2.0), 6), Some(0.25));
        assert_eq!(step_interval(&(0.0..=1.0), 0), None);
        assert_eq!(step_interval(&(1.0..=1.0), 3), None);
    }

    #[test]
    fn slider_drag_to_center_reports_half() {
        let mut value = 0.0f32;
        let mut changed_frames = 0usize;
        let target = Cell::new(Pos2::ZERO);

        run_frames(
            5,
            |f| match f {
                1 => vec![Event::PointerMoved(target.get())],
                2 => vec![Event::PointerButton {
                    pos: target.get(),
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::default(),
                }],
                3 => vec![Event::PointerMoved(target.get())],
                4 => vec![Event::PointerButton {
                    pos: target.get(),
                    button: PointerButton::Primary,
                    pressed: false,
                    modifiers: Modifiers::default(),
                }],
                _ => vec![],
            },
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                if slider_item(ui, "VOLUME", &mut value, 0.0..=1.0, 0, None, two_decimals) {
                    changed_frames += 1;
                }
                // The rail is the last thing in the row block; aim at its
                // vertical center. Its midpoint maps to t = 0.5 regardless
                // of the handle padding on both ends.
                let bottom = ui.min_rect().max.y;
                target.set(pos2(origin.x + width * 0.5, bottom - 9.0));
            },
        );

        assert!((value - 0.5).abs() < 1e-3, "value = {value}");
        assert_eq!(changed_frames, 1);
    }

    #[test]
    fn stepped_slider_snaps_to_five_values() {
        const SWEEP: usize = 24;
        let mut value = 0.0f32;
        let seen = RefCell::new(BTreeSet::<i32>::new());
        let rail = Cell::new((0.0f32, 0.0f32, 0.0f32));

        run_frames(
            SWEEP + 4,
            |f| {
                let (lx, rx, y) = rail.get();
                match f {
                    0 => vec![],
                    1 => vec![Event::PointerMoved(pos2(lx, y))],
                    2 => vec![Event::PointerButton {
                        pos: pos2(lx, y),
                        button: PointerButton::Primary,
                        pressed: true,
                        modifiers: Modifiers::default(),
                    }],
                    f if f < SWEEP + 3 => {
                        let t = (f - 3) as f32 / (SWEEP - 1) as f32;
                        vec![Event::PointerMoved(pos2(lx + (rx - lx) * t, y))]
                    }
                    _ => vec![Event::PointerButton {
                        pos: pos2(rx, y),
                        button: PointerButton::Primary,
                        pressed: false,
                        modifiers: Modifiers::default(),
                    }],
                }
            },
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                slider_item(ui, "STEPS", &mut value, 0.0..=1.0, 4, None, two_decimals);
                let bottom = ui.min_rect().max.y;
                // Stay a pixel inside the widget so edge hit-testing is
                // unambiguous; the slider clamps to the ends anyway.
                rail.set((origin.x + 1.0, origin.x + width - 1.0, bottom - 9.0));
                seen.borrow_mut().insert((value * 100.0).round() as i32);
            },
        );

        let expected: BTreeSet<i32> = [0, 25, 50, 75, 100].into_iter().collect();
        assert_eq!(*seen.borrow(), expected);
    }

    // --- switch_item ---

    #[test]
    fn switch_click_toggles_on_and_reports_once() {
        let mut checked = false;
        let mut reports = 0usize;
        let target = Cell::new(Pos2::ZERO);

        run_frames(
            4,
            |f| press_release(target.get(), f),
            |ui| {
                let origin = ui.cursor().min;
                let width = ui.available_width();
                if switch_item(ui, "Gapless playback", &mut checked, None, None) {
                    reports += 1;
                }
                let bottom = ui.min_rect().max.y;
                target.set(pos2(
                    origin.x + width - ui_constants::switch::WIDTH * 0.5,
                    (origin.y + bottom) * 0.5,
                ));
            },
        );

        assert!(checked);
        assert_eq!(reports, 1);
    }

    #[test]
    fn description_line_extends_the_row() {
        let mut h_without = 0.0f32;
        let mut h_with = 0.0f32;

        run_frames(
            1,
            |_| vec![],
            |ui| {
                let top = ui.cursor().min.y;
                let mut a = true;
                switch_item(ui, "Normalize loudness", &mut a, None, None);
                let mid = ui.cursor().min.y;
                h_without = mid - top;

                let mut b = false;
                switch_item(
                    ui,
                    "Normalize loudness",
                    &mut b,
                    None,
                    Some("Match perceived volume across tracks"),
                );
                h_with = ui.cursor().min.y - mid;
            },
        );

        assert!(
            h_with > h_without + 4.0,
            "with: {h_with}, without: {h_without}"
        );
    }
}
