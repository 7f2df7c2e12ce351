use crate::domain::sentiment::{GaugeColor, SentimentReading, gauge_angle};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Paint the analog sentiment dial: a semicircular arc with tick marks and
/// a needle whose rotation comes from `domain::sentiment::gauge_angle`
/// (-90° at score 0, +90° at score 100). The needle and readout take the
/// label-derived gauge color.
pub fn sentiment_gauge(ui: &mut egui::Ui, reading: &SentimentReading) {
    let desired = egui::vec2(200.0, 130.0);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let center = egui::pos2(rect.center().x, rect.bottom() - 30.0);
    let radius: f32 = 85.0;

    // Dial arc, left (score 0) to right (score 100) over the top
    let arc: Vec<egui::Pos2> = (0..=64)
        .map(|i| {
            let theta = std::f32::consts::PI * (1.0 + i as f32 / 64.0);
            center + radius * egui::vec2(theta.cos(), theta.sin())
        })
        .collect();
    painter.add(egui::Shape::line(
        arc,
        egui::Stroke::new(4.0, DesignSystem::BORDER_SUBTLE),
    ));

    // Ticks at 0, 25, 50, 75, 100
    for score in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let rad = (gauge_angle(score) as f32).to_radians();
        let dir = egui::vec2(rad.sin(), -rad.cos());
        painter.line_segment(
            [center + dir * (radius - 6.0), center + dir * (radius + 4.0)],
            egui::Stroke::new(2.0, DesignSystem::TEXT_MUTED),
        );
    }

    // Needle
    let color = DesignSystem::gauge_color(GaugeColor::from_label(&reading.label));
    let rad = (gauge_angle(reading.score) as f32).to_radians();
    let dir = egui::vec2(rad.sin(), -rad.cos());
    painter.line_segment(
        [center, center + dir * (radius - 14.0)],
        egui::Stroke::new(3.0, color),
    );
    painter.circle_filled(center, 5.0, color);

    // Readout
    painter.text(
        center + egui::vec2(0.0, 10.0),
        egui::Align2::CENTER_TOP,
        format!("{} · {:.0}", reading.label, reading.score),
        egui::FontId::proportional(14.0),
        color,
    );
}
