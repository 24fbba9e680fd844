//! Zeichnet Container, Track-Füllungen, Track-Texte und Thumb.

use options_row_engine::{
    Dimensions, LayoutDirection, OptionItem, OptionsController, OptionsRowOptions,
};

const CORNER_RADIUS: f32 = 12.0;
const TRACK_FONT_SIZE: f32 = 14.0;
const ACTIVE_TRACK_ALPHA: f32 = 0.3;
const INACTIVE_TRACK_ALPHA: f32 = 0.1;

fn to_egui(v: glam::Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

/// Linke Screen-Kante eines Elements mit Start-relativer Position.
fn screen_left(rect: egui::Rect, dims: &Dimensions, start: f32, width: f32) -> f32 {
    match dims.direction {
        LayoutDirection::LeftToRight => rect.min.x + start,
        LayoutDirection::RightToLeft => rect.max.x - start - width,
    }
}

/// Rechteck eines Start-relativen Bereichs, vertikal um das Padding verkleinert.
fn padded_span(rect: egui::Rect, dims: &Dimensions, start: f32, end: f32) -> Option<egui::Rect> {
    let width = end - start;
    if width <= 0.0 {
        return None;
    }
    let left = screen_left(rect, dims, start, width);
    Some(egui::Rect::from_min_max(
        egui::pos2(left, rect.min.y + dims.top_padding),
        egui::pos2(
            left + width,
            rect.min.y + dims.top_padding + dims.thumb_height,
        ),
    ))
}

/// Zeichnet nur den leeren Container (z.B. bei ungültiger Geometrie).
pub(super) fn paint_container(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, CORNER_RADIUS, ui.visuals().extreme_bg_color);
}

/// Zeichnet die komplette Zeile für den aktuellen Controller-Zustand.
pub(super) fn paint_row(
    ui: &egui::Ui,
    rect: egui::Rect,
    id: egui::Id,
    controller: &OptionsController,
    items: &[OptionItem],
    options: &OptionsRowOptions,
) {
    paint_container(ui, rect);

    let painter = ui.painter();
    let visuals = ui.visuals();
    let accent = visuals.selection.bg_fill;
    let dims = controller.dimensions();

    if options.active_track_visible {
        let width = controller
            .active_track_width()
            .max(options.active_track_min_width);
        let end = width - dims.end_padding;
        if let Some(fill) = padded_span(rect, dims, dims.start_padding, end) {
            painter.rect_filled(
                fill,
                CORNER_RADIUS,
                accent.gamma_multiply(ACTIVE_TRACK_ALPHA),
            );
        }
    }

    if options.inactive_track_visible {
        let width = controller.inactive_track_width();
        let start = dims.container_width - width + dims.start_padding;
        let end = dims.container_width - dims.end_padding;
        if let Some(fill) = padded_span(rect, dims, start, end) {
            painter.rect_filled(
                fill,
                CORNER_RADIUS,
                accent.gamma_multiply(INACTIVE_TRACK_ALPHA),
            );
        }
    }

    let font = egui::FontId::proportional(TRACK_FONT_SIZE);
    for (index, item) in items.iter().enumerate() {
        let left = screen_left(
            rect,
            dims,
            dims.calculate_offset(index),
            dims.section_width,
        );
        let center = egui::pos2(left + dims.section_width / 2.0, rect.center().y);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &item.track_text,
            font.clone(),
            visuals.text_color(),
        );
    }

    // Thumb wächst beim Ziehen in das Padding hinein.
    let expand = ui.ctx().animate_bool_with_time(
        id.with("thumb_expand"),
        controller.is_dragging(),
        options.thumb_resize_secs,
    );
    let size = dims.thumb_size(false).lerp(dims.thumb_size(true), expand);
    let left = screen_left(rect, dims, controller.offset_x(), size.x);
    let thumb = egui::Rect::from_min_size(
        egui::pos2(left, rect.center().y - size.y / 2.0),
        to_egui(size),
    );
    painter.rect_filled(thumb, CORNER_RADIUS, accent);
    painter.text(
        thumb.center(),
        egui::Align2::CENTER_CENTER,
        controller.thumb_label(),
        font,
        visuals.strong_text_color(),
    );
}
