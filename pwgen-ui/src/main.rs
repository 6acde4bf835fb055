use eframe::{egui, Frame};
use egui::{Color32, Context, RichText};

use pwgen_core::config::Settings;
use pwgen_core::model::charset::CharClass;
use pwgen_core::model::form::FormState;
use pwgen_core::model::generator::Generator;
use pwgen_core::model::validation::Field;

const ERROR_COLOR: Color32 = Color32::from_rgb(0xff, 0x0d, 0x10);
const HINT_COLOR: Color32 = Color32::from_rgb(0x75, 0x82, 0x83);

/// Global UI state (MUST persist between frames in egui).
struct GeneratorUI {
    form: FormState,
    generator: Generator,
}

impl GeneratorUI {
    fn new(settings: &Settings) -> Self {
        Self {
            form: FormState::new(settings.initial_length_input()),
            generator: Generator::new(),
        }
    }

    /// Validates the form and stores a new password.
    fn generate(&mut self) {
        if let Err(e) = self.form.submit(&mut self.generator) {
            // The button is disabled while the form is invalid
            log::warn!("generation refused: {e}");
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        log::debug!("form reset");
    }

    fn error_label(ui: &mut egui::Ui, message: Option<String>) {
        if let Some(message) = message {
            ui.label(RichText::new(message).color(ERROR_COLOR).small());
        }
    }
}

impl eframe::App for GeneratorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Password Generator").size(32.0).strong());
            ui.add_space(15.0);

            egui::Grid::new("generator_grid")
                .num_columns(2)
                .spacing([20.0, 15.0])
                .show(ui, |ui| {
                    // length field + inline error
                    ui.vertical(|ui| {
                        ui.label("Password Length:");
                        Self::error_label(ui, self.form.error_for(Field::Length));
                    });
                    ui.add(
                        egui::TextEdit::singleline(self.form.length_input_mut())
                            .hint_text("Ex. 8")
                            .desired_width(80.0),
                    );
                    ui.end_row();

                    // class toggles
                    for class in CharClass::ALL {
                        ui.label(format!("{}:", class.label()));
                        let mut checked = self.form.is_enabled(class);
                        if ui.checkbox(&mut checked, "").changed() {
                            self.form.set_class(class, checked);
                        }
                        ui.end_row();
                    }
                });

            Self::error_label(ui, self.form.error_for(Field::Classes));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let valid = self.form.is_valid();
                if ui
                    .add_enabled(valid, egui::Button::new("Generate Password").min_size([120.0, 36.0].into()))
                    .clicked()
                {
                    self.generate();
                }
                if ui
                    .add(egui::Button::new("Reset").min_size([120.0, 36.0].into()))
                    .clicked()
                {
                    self.reset();
                }
            });

            // Output
            if let Some(password) = self.form.password() {
                ui.add_space(15.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new("Results:").size(26.0).strong());
                    ui.label(RichText::new("Select to copy").color(HINT_COLOR));
                    ui.add(
                        egui::Label::new(RichText::new(password.as_str()).size(22.0).monospace())
                            .selectable(true),
                    );
                });
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let settings = match Settings::load(None) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}, falling back to default settings");
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Password Generator",
        options,
        Box::new(move |_| Ok(Box::new(GeneratorUI::new(&settings)))),
    )
}
