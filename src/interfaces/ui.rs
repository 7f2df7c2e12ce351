use crate::application::app::{EstimatorApp, LocationCatalog, PLACEHOLDER};
use crate::interfaces::components::gauge::sentiment_gauge;
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;

const LOCATION_PLACEHOLDER: &str = "Choose a Location";

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Drain worker events and log lines ---
        self.pump_events();

        // --- 2. Top status bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🏠 Homecast");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = if self.estimating || self.analyzing {
                        ("● WORKING", DesignSystem::WARNING)
                    } else {
                        ("● READY", DesignSystem::SUCCESS)
                    };
                    ui.label(egui::RichText::new(text).color(color).small());
                });
            });
        });

        // --- 3. Left panel: estimate form ---
        egui::SidePanel::left("form_panel")
            .default_width(320.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Property Details");
                ui.separator();
                self.form_panel(ui);
            });

        // --- 4. Bottom panel: activity log ---
        egui::TopBottomPanel::bottom("log_panel")
            .max_height(160.0)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Activity Log")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false, true])
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for line in &self.activity_log {
                                    ui.label(
                                        egui::RichText::new(line)
                                            .small()
                                            .color(DesignSystem::TEXT_SECONDARY),
                                    );
                                }
                            });
                    });
            });

        // --- 5. Central panel: results ---
        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_panel(ui);
        });

        // --- 6. Blocking alert ---
        self.alert_modal(ctx);

        // Keep polling the worker channels even when idle
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl EstimatorApp {
    fn form_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Area (square feet)");
        ui.add(egui::TextEdit::singleline(&mut self.area_input).desired_width(120.0));
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Bedrooms (BHK)");
        ui.horizontal(|ui| {
            for n in 1..=5u8 {
                ui.radio_value(&mut self.bedrooms, Some(n), n.to_string());
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Bathrooms");
        ui.horizontal(|ui| {
            for n in 1..=5u8 {
                ui.radio_value(&mut self.bathrooms, Some(n), n.to_string());
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Location");
        match self.catalog.clone() {
            LocationCatalog::Loading => {
                ui.add_enabled(false, egui::Button::new("Loading locations…"));
            }
            LocationCatalog::Unavailable => {
                ui.add_enabled(false, egui::Button::new("Locations unavailable"));
            }
            LocationCatalog::Ready(locations) => {
                let selected = self
                    .selected_location
                    .clone()
                    .unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string());
                egui::ComboBox::from_id_salt("location_selector")
                    .selected_text(selected)
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        for location in &locations {
                            ui.selectable_value(
                                &mut self.selected_location,
                                Some(location.clone()),
                                location,
                            );
                        }
                    });
            }
        }
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Forecast horizon (months)");
        ui.add(egui::TextEdit::singleline(&mut self.horizon_input).desired_width(80.0));
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.horizontal(|ui| {
            let estimate = ui.add_enabled(
                !self.estimating,
                egui::Button::new(egui::RichText::new("Estimate Price").strong()),
            );
            if estimate.clicked() {
                self.submit_estimate();
            }
            if ui.button("Reset").clicked() {
                self.reset_form();
            }
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();
        ui.label("Market commentary");
        ui.add(
            egui::TextEdit::multiline(&mut self.commentary)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .hint_text("Paste a headline or your own notes…"),
        );
        let analyze = ui.add_enabled(!self.analyzing, egui::Button::new("Analyze Sentiment"));
        if analyze.clicked() {
            self.analyze_sentiment();
        }
    }

    fn results_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Estimate");
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            price_card(ui, "Current Price", &self.results.current_price_text());
            price_card(ui, "Future Price", &self.results.future_price_text());
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();
        ui.heading("Risk");
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Level:").strong());
            match (&self.results.risk_label, self.results.risk_level) {
                (Some(label), Some(level)) => {
                    ui.label(
                        egui::RichText::new(label)
                            .strong()
                            .color(DesignSystem::risk_color(level))
                            .background_color(DesignSystem::risk_color(level).linear_multiply(0.15)),
                    );
                }
                _ => {
                    ui.label(PLACEHOLDER);
                }
            }
            ui.separator();
            ui.label(egui::RichText::new("Composite score:").strong());
            ui.label(self.results.composite_score_text());
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Expected growth:").strong());
            ui.label(self.results.growth_text());
            ui.separator();
            ui.label(egui::RichText::new("Volatility:").strong());
            ui.label(self.results.volatility_text());
        });

        text_row(ui, "Category", self.results.risk_category.as_deref());
        text_row(ui, "Message", self.results.risk_message.as_deref());
        text_row(ui, "Recommendation", self.results.recommendation.as_deref());
        text_row(
            ui,
            "Why",
            self.results.prescription_explanation.as_deref(),
        );

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();
        ui.heading("Sentiment");
        ui.add_space(DesignSystem::SPACING_SMALL);

        sentiment_gauge(ui, &self.results.gauge);
        if let Some(line) = &self.results.sentiment_line {
            ui.label(
                egui::RichText::new(line).color(DesignSystem::TEXT_PRIMARY),
            );
        }
    }

    fn alert_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        // Modal blocks the rest of the UI until dismissed
        let response = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.heading("Notice");
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(&message);
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
        });
        if response.should_close() {
            self.alert = None;
        }
    }
}

// Helper for price cards
fn price_card(ui: &mut egui::Ui, label: &str, value: &str) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(label)
                    .small()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.label(
                egui::RichText::new(value)
                    .heading()
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
    });
}

fn text_row(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .strong()
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.label(value.unwrap_or(PLACEHOLDER));
    });
}
