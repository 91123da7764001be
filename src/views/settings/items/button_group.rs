use eframe::egui::{
    self, text::LayoutJob, text::TextWrapping, Color32, FontId, Rect, Rounding, Sense, Stroke, Ui,
    Vec2,
};

use crate::ui_constants::{button_group as metrics, ACCENT, ACCENT_FILL_ALPHA, OUTLINE};

/// Stateless segmented button group:
/// - one equal-width segment per label, reading as a single joined strip;
/// - first segment rounds its leading corners, last its trailing corners,
///   interior segments stay square;
/// - neighbors overlap by one pixel and the selected segment is painted
///   last so its accent border is not occluded by the shared edges.
/// Writes the clicked index through `selected` and returns true when the
/// selection changed this frame. An empty `labels` renders nothing.
pub fn button_group(ui: &mut Ui, labels: &[String], selected: &mut usize) -> bool {
    let count = labels.len();
    if count == 0 {
        return false;
    }

    let available_width = ui.available_width();
    let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
    let (container_rect, container_response) =
        ui.allocate_exact_size(Vec2::new(available_width, height), Sense::hover());

    let seg_w = segment_width(container_rect.width(), count);

    let mut changed = false;
    let mut hovered: Option<usize> = None;

    // Interaction pass before painting, so hover feedback lands on the
    // same frame and the selected segment can be drawn after its neighbors.
    // Segment ids hang off the container's id, which keeps several groups
    // in one panel from colliding.
    for i in 0..count {
        let seg_rect = segment_rect(container_rect, i, seg_w);
        let id = container_response.id.with(i as i64);
        let response = ui
            .interact(seg_rect, id, Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.hovered() {
            hovered = Some(i);
        }
        if response.clicked() && *selected != i {
            *selected = i;
            changed = true;
        }
    }

    let mut order: Vec<usize> = (0..count).filter(|i| *i != *selected).collect();
    if *selected < count {
        order.push(*selected);
    }
    for i in order {
        paint_segment(
            ui,
            segment_rect(container_rect, i, seg_w),
            segment_rounding(i, count, metrics::ROUNDING),
            &labels[i],
            i == *selected,
            hovered == Some(i),
        );
    }

    changed
}

/// Width of one segment. Segments regain the pixel lost to each shared
/// edge so the strip still spans the container exactly.
pub(crate) fn segment_width(container_width: f32, count: usize) -> f32 {
    (container_width + (count as f32 - 1.0) * metrics::OVERLAP) / count as f32
}

pub(crate) fn segment_rect(container: Rect, index: usize, seg_w: f32) -> Rect {
    let x = container.min.x + index as f32 * (seg_w - metrics::OVERLAP);
    Rect::from_min_size(
        egui::pos2(x, container.min.y),
        Vec2::new(seg_w, container.height()),
    )
}

/// First segment rounds its leading corners, last its trailing corners;
/// a lone segment is both and rounds all four.
pub(crate) fn segment_rounding(index: usize, count: usize, radius: f32) -> Rounding {
    let first = index == 0;
    let last = index + 1 == count;
    Rounding {
        nw: if first { radius } else { 0.0 },
        sw: if first { radius } else { 0.0 },
        ne: if last { radius } else { 0.0 },
        se: if last { radius } else { 0.0 },
    }
}

fn paint_segment(
    ui: &Ui,
    rect: Rect,
    rounding: Rounding,
    label: &str,
    is_selected: bool,
    is_hovered: bool,
) {
    let painter = ui.painter();

    let fill = if is_selected {
        Color32::from_rgba_premultiplied(ACCENT.r(), ACCENT.g(), ACCENT.b(), ACCENT_FILL_ALPHA)
    } else if is_hovered {
        Color32::from_rgba_premultiplied(255, 255, 255, 6)
    } else {
        Color32::TRANSPARENT
    };
    let border = if is_selected { ACCENT } else { OUTLINE };
    painter.rect(rect, rounding, fill, Stroke::new(1.0, border));

    let text_color = if is_selected {
        ACCENT
    } else {
        Color32::from_gray(200)
    };

    // Single line, elided when the caption overflows the segment.
    let mut job =
        LayoutJob::simple_singleline(label.to_string(), FontId::proportional(14.0), text_color);
    job.wrap = TextWrapping {
        max_width: (rect.width() - 2.0 * metrics::TEXT_PADDING).max(0.0),
        max_rows: 1,
        break_anywhere: true,
        overflow_character: Some('…'),
    };
    let galley = ui.fonts(|f| f.layout_job(job));
    let pos = rect.center() - galley.size() * 0.5;
    painter.galley(pos, galley, text_color);
}
