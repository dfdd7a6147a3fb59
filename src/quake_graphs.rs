use egui::epaint::PathShape;
use egui::{
    pos2, vec2, Align, Align2, Color32, FontId, Layout, Rect, RichText, ScrollArea, Sense, Shape,
    Stroke, UiBuilder,
};

use crate::records::LocationAggregate;

const SLICE_COLORS: [Color32; 7] = [
    Color32::from_rgb(255, 0, 0),     // Red
    Color32::from_rgb(0, 255, 0),     // Green
    Color32::from_rgb(0, 0, 255),     // Blue
    Color32::from_rgb(128, 0, 128),   // Purple
    Color32::from_rgb(255, 192, 203), // Pink
    Color32::from_rgb(192, 192, 192), // Silver
    Color32::from_rgb(255, 215, 0),   // Gold
];

/// One pie slice per aggregate, sweep proportional to its share of the total
/// count, location name drawn on the slice and repeated in a legend on the
/// right. Draws nothing when there are no slices.
pub fn draw_pie_chart(ui: &mut egui::Ui, slices: &[LocationAggregate]) -> Option<egui::Response> {
    let fractions = slice_fractions(slices);
    if fractions.is_empty() {
        return None;
    }

    let bottom_padding = 20.0;
    let left_padding = 20.0;
    let legend_width = 200.0;
    let available_width = ui.available_width() - legend_width;
    let available_height = ui.available_height() - 20.0;
    let available_size = available_width.min(available_height);

    let content_size = vec2(
        available_size + legend_width + left_padding,
        available_size + bottom_padding,
    );

    let (response, painter) = ui.allocate_painter(content_size, Sense::hover());

    let rect = response.rect;
    let center = pos2(rect.min.x + (available_size / 2.0), rect.center().y);
    let radius = (available_size / 2.5).min(available_size / 2.0);

    let mut start_angle = 0.0f32;
    let stroke = Stroke::new(1.0, Color32::BLACK);

    let legend_area = Rect::from_min_size(
        pos2(center.x + radius + 20.0, rect.min.y),
        vec2(legend_width - 20.0, available_size),
    );

    let mut legend_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(legend_area)
            .layout(Layout::top_down_justified(Align::LEFT)),
    );

    ScrollArea::vertical().show(&mut legend_ui, |ui| {
        for (i, (slice, fraction)) in slices.iter().zip(fractions.iter()).enumerate() {
            let angle = fraction * std::f32::consts::TAU;
            let color = SLICE_COLORS[i % SLICE_COLORS.len()];

            let mut points = Vec::new();
            points.push(center);

            let steps = 32;
            for j in 0..=steps {
                let current_angle = start_angle + (angle * j as f32 / steps as f32);
                points.push(pos2(
                    center.x + radius * current_angle.cos(),
                    center.y + radius * current_angle.sin(),
                ));
            }

            painter.add(Shape::Path(PathShape::convex_polygon(
                points,
                color,
                Stroke::NONE,
            )));
            // divider at the slice's start edge
            painter.add(Shape::line_segment(
                [
                    center,
                    pos2(
                        center.x + radius * start_angle.cos(),
                        center.y + radius * start_angle.sin(),
                    ),
                ],
                stroke,
            ));

            // slice label at the sweep midpoint
            let mid_angle = start_angle + angle / 2.0;
            painter.text(
                pos2(
                    center.x + radius * 0.65 * mid_angle.cos(),
                    center.y + radius * 0.65 * mid_angle.sin(),
                ),
                Align2::CENTER_CENTER,
                &slice.location,
                FontId::proportional(12.0),
                Color32::BLACK,
            );

            // legend
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(vec2(20.0, 20.0), Sense::hover());
                ui.painter().rect_filled(rect, 0.0, color);
                ui.label(
                    RichText::new(format!(
                        "{}: {} ({:.1}%)",
                        slice.location,
                        slice.count,
                        fraction * 100.0
                    ))
                    .size(12.0)
                    .color(Color32::BLACK),
                );
            });

            start_angle += angle;
        }
        // close the last slice
        painter.add(Shape::line_segment(
            [
                center,
                pos2(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ),
            ],
            stroke,
        ));
    });

    Some(response)
}

/// Share of the total count per slice. Empty when there is nothing to draw,
/// so callers never divide by a zero total.
fn slice_fractions(slices: &[LocationAggregate]) -> Vec<f32> {
    let total: i64 = slices.iter().map(|s| s.count).sum();
    if total <= 0 {
        return Vec::new();
    }
    slices
        .iter()
        .map(|s| s.count as f32 / total as f32)
        .collect()
}
