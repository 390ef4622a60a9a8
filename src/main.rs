use eframe::egui;
use pokestudy::gui::PokeStudyApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PokeStudy")
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([380.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("PokeStudy", options, Box::new(|cc| Ok(Box::new(PokeStudyApp::new(cc)))))
}
