use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use bevy::winit::{WinitSettings, UpdateMode};
use std::time::Duration;

use soroban_trainer::egui_canvas::{self, EguiCanvas};
use soroban_trainer::settings::{AbacusSettings, MAX_FONT_SIZE, MAX_RODS, MIN_FONT_SIZE, MIN_RODS};
use soroban_trainer::{paint, render_svg, Abacus, PlaceValueMode, ThemeName};

#[derive(Event)]
pub struct AbacusChanged;

/// The single abacus on screen.
#[derive(Resource, Deref, DerefMut)]
struct Board(Abacus);

#[derive(Resource, Default)]
struct ToolbarState {
    number: String,
    error: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn is_mobile_device() -> bool {
    false // Default to desktop for non-wasm builds
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    fn is_mobile_device() -> bool;
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> AbacusSettings {
    AbacusSettings::load(soroban_trainer::settings::SETTINGS_FILE)
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> AbacusSettings {
    AbacusSettings::default()
}

fn build_abacus(settings: &AbacusSettings) -> soroban_trainer::Result<Abacus> {
    let mut abacus = Abacus::new(settings.rod_count)?;
    abacus.set_place_value_mode(settings.place_value_mode())?;
    Ok(abacus)
}

fn main() -> soroban_trainer::Result<()> {
    let settings = load_settings();
    let abacus = build_abacus(&settings)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Soroban Trainer".into(),
                resolution: (1200.0, 520.0).into(),
                // Make it resize to the available space
                fit_canvas_to_parent: true,
                // Prevents issues with touch scrolling and back/forward gestures
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin { enable_multipass_for_primary_context: false })
        .add_event::<AbacusChanged>()
        .insert_resource(settings)
        .insert_resource(Board(abacus))
        .init_resource::<ToolbarState>()
        .add_systems(Startup, (setup, init_refresh_rate))
        .add_systems(Update, (toolbar_system, canvas_system).chain())
        .add_systems(Update, log_abacus_value.run_if(on_event::<AbacusChanged>))
        .run();

    Ok(())
}

fn init_refresh_rate(mut winit: ResMut<WinitSettings>) {
    winit.focused_mode = UpdateMode::reactive(Duration::from_secs_f32(1.0 / 60.0));
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn toolbar_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<AbacusSettings>,
    mut board: ResMut<Board>,
    mut toolbar: ResMut<ToolbarState>,
    mut commands: Commands,
) {
    let ctx = contexts.ctx_mut();
    let mut changed = false;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new(board.formatted_value())
                    .monospace()
                    .strong()
                    .size(settings.font_size),
            );
            ui.separator();

            ui.add(egui::Slider::new(&mut settings.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE).text("Font"));

            let current = settings.theme;
            egui::ComboBox::from_label("Theme")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for name in ThemeName::ALL {
                        ui.selectable_value(&mut settings.theme, name, name.label());
                    }
                });

            ui.checkbox(&mut settings.decimal_mode, "Middle = Units (decimal)");
            let last_rod = board.rod_count() - 1;
            let decimal_mode = settings.decimal_mode;
            ui.add_enabled(
                decimal_mode,
                egui::Slider::new(&mut settings.pivot, 0..=last_rod).text("Units rod"),
            );

            if ui.button("Reset").clicked() {
                info!("Resetting abacus");
                board.reset();
                changed = true;
            }
        });

        ui.horizontal_wrapped(|ui| {
            ui.add(egui::Slider::new(&mut settings.rod_count, MIN_RODS..=MAX_RODS).text("Rods"));
            if ui.button("Rebuild Abacus").clicked() {
                info!("Rebuilding abacus with {} rods", settings.rod_count);
                match board.rebuild(settings.rod_count) {
                    Ok(()) => {
                        if let PlaceValueMode::Decimal { pivot } = board.mode() {
                            settings.pivot = pivot;
                        } else if settings.pivot >= settings.rod_count {
                            settings.pivot = settings.rod_count / 2;
                        }
                        changed = true;
                    }
                    Err(err) => warn!("Rebuild failed: {err}"),
                }
            }
            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut toolbar.number)
                    .desired_width(120.0)
                    .hint_text("number"),
            );
            if ui.button("Show").clicked() {
                let number = toolbar.number.clone();
                match board.set_value(&number) {
                    Ok(()) => {
                        toolbar.error = None;
                        changed = true;
                    }
                    Err(err) => {
                        warn!("Cannot show number: {err}");
                        toolbar.error = Some(err.to_string());
                    }
                }
            }
            if let Some(error) = &toolbar.error {
                ui.colored_label(egui::Color32::RED, error.as_str());
            }
            ui.separator();

            ui.checkbox(&mut settings.show_total, "Show Total Value");
            ui.checkbox(&mut settings.show_rod_values, "Show Rod Values");

            if ui.button("Copy SVG").clicked() {
                let svg = render_svg(&board.0, &settings.theme.palette(), &settings.paint_options());
                ui.ctx().copy_text(svg);
                info!("Copied abacus as SVG");
            }
        });
    });

    let wanted = settings.place_value_mode();
    if wanted != board.mode() {
        match board.set_place_value_mode(wanted) {
            Ok(()) => changed = true,
            Err(err) => warn!("Cannot switch place values: {err}"),
        }
    }

    if changed {
        commands.send_event(AbacusChanged);
    }
}

fn canvas_system(
    mut contexts: EguiContexts,
    settings: Res<AbacusSettings>,
    mut board: ResMut<Board>,
    mut commands: Commands,
) {
    let ctx = contexts.ctx_mut();
    let theme = settings.theme.palette();

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui_canvas::color32(theme.background)))
        .show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let (w, h) = board.layout().canvas_size(board.rod_count());
                let (response, painter) = ui.allocate_painter(egui::vec2(w, h), egui::Sense::click());
                let origin = response.rect.min;

                if response.clicked()
                    && let Some(pos) = response.interact_pointer_pos()
                    && board.handle_click(egui_canvas::to_canvas(pos, origin))
                {
                    commands.send_event(AbacusChanged);
                }

                let mut options = settings.paint_options();
                if !is_mobile_device() {
                    options.hover = response.hover_pos().and_then(|pos| {
                        board
                            .hit_test(egui_canvas::to_canvas(pos, origin))
                            .map(|hit| (hit.rod, hit.bead.kind()))
                    });
                }

                paint(&board.0, &theme, &options, &mut EguiCanvas::new(&painter, origin));
            });
        });
}

fn log_abacus_value(board: Res<Board>) {
    info!("Abacus Value Now {}", board.formatted_value());
}
