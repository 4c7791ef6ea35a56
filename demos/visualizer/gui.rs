use eframe::egui::{self, *};

use dotplane::controls::{Preset, ANGLE_RANGE_DEGREES, LENGTH_RANGE};
use dotplane::render::PlaneRenderer;
use dotplane::scene::{Handle, Scene};

use crate::painter::PainterSurface;

pub struct Gui {
    pub scene: Scene,
    renderer: PlaneRenderer,
}

impl Gui {
    pub fn new(renderer: PlaneRenderer) -> Self {
        Gui {
            scene: Scene::default(),
            renderer,
        }
    }
    pub fn show(&mut self, ctx: &Context) {
        // The GUI has two areas, a left control panel and the plane on the right
        SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Vector u");
            show_vector(ui, &mut self.scene, Handle::U);

            ui.heading("Vector v");
            show_vector(ui, &mut self.scene, Handle::V);

            ui.heading("Presets");
            show_presets(ui, &mut self.scene);

            ui.heading("Readout");
            show_readout(ui, &self.scene);
        });
        CentralPanel::default().show(ctx, |ui| {
            show_plane(ui, &mut self.scene, &self.renderer);
        });
    }
}

fn show_vector(ui: &mut Ui, scene: &mut Scene, handle: Handle) {
    let vector = scene.vector(handle);
    let mut length = vector.length;
    let mut degrees = vector.angle_degrees().round();

    Grid::new(format!("{:?}_grid", handle)).show(ui, |ui| {
        ui.label("Length: ");
        if ui
            .add(Slider::new(&mut length, LENGTH_RANGE.min..=LENGTH_RANGE.max).step_by(LENGTH_RANGE.step))
            .changed()
        {
            scene.set_length(handle, length);
        }
        ui.end_row();

        ui.label("Angle: ");
        if ui
            .add(
                Slider::new(&mut degrees, ANGLE_RANGE_DEGREES.min..=ANGLE_RANGE_DEGREES.max)
                    .step_by(ANGLE_RANGE_DEGREES.step)
                    .suffix(" [deg]"),
            )
            .changed()
        {
            scene.set_angle_degrees(handle, degrees);
        }
        ui.end_row();
    });
}

fn show_presets(ui: &mut Ui, scene: &mut Scene) {
    ui.horizontal(|ui| {
        for preset in Preset::ALL {
            if ui.button(preset.label()).clicked() {
                scene.apply_preset(preset);
            }
        }
    });
}

fn show_readout(ui: &mut Ui, scene: &Scene) {
    for line in scene.readout().to_string().lines() {
        ui.label(line);
    }
}

fn show_plane(ui: &mut Ui, scene: &mut Scene, renderer: &PlaneRenderer) {
    let canvas = renderer.layout().canvas;
    let (response, painter) = ui.allocate_painter(
        vec2(canvas.width as f32, canvas.height as f32),
        Sense::hover(),
    );
    let mut surface = PainterSurface::new(&painter, response.rect);
    scene.render(renderer, &mut surface);
    painter.rect_stroke(response.rect, 0.0, egui::Stroke::new(1.0, Color32::BLACK));
}
