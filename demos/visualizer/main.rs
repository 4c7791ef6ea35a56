use eframe;

mod gui;
mod painter;

use dotplane::render::LayoutConfig;
use gui::Gui;

struct App {
    gui: Gui,
}

impl App {
    pub fn default() -> Self {
        App {
            gui: Gui::new(LayoutConfig::new().realize()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &eframe::egui::Context, _: &mut eframe::Frame) {
        // egui repaints on input, which is exactly when the scene can change
        self.gui.show(ctx);
    }
}

fn main() {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Dot Product Visualizer",
        native_options,
        Box::new(|_| Box::new(App::default())),
    );
}
