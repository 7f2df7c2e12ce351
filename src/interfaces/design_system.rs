use crate::domain::risk::RiskLevel;
use crate::domain::sentiment::GaugeColor;
use eframe::egui;

/// Dark theme palette and severity colors
pub struct DesignSystem;

impl DesignSystem {
    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(13, 17, 23);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 30, 38);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(16, 21, 28);

    // Accents
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 166, 255);

    // Severity
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 83); // Green
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 171, 0); // Amber
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(213, 0, 0); // Red

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(230, 237, 243);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(155);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT);

        visuals
    }

    /// Card frame for result blocks
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(8.0)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Pill color for a risk severity bucket
    pub fn risk_color(level: RiskLevel) -> egui::Color32 {
        match level {
            RiskLevel::Low => Self::SUCCESS,
            RiskLevel::Moderate => Self::WARNING,
            RiskLevel::High => Self::DANGER,
        }
    }

    /// Fill color for the sentiment gauge needle and readout
    pub fn gauge_color(color: GaugeColor) -> egui::Color32 {
        match color {
            GaugeColor::Green => Self::SUCCESS,
            GaugeColor::Amber => Self::WARNING,
            GaugeColor::Red => Self::DANGER,
        }
    }
}
