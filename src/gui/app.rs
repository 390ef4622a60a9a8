use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    capture_status::{
        self,
        CaptureState,
    },
    pokedex_modal::PokedexModal,
    theme::{
        set_theme,
        Theme,
    },
    timer_panel::{
        self,
        TimerAction,
        TimerInputs,
    },
};
use crate::core::{
    tasks::{
        TaskManager,
        TaskResult,
    },
    timer::TimerEvent,
    Collection,
    CountdownTimer,
};

pub struct PokeStudyApp {
    timer: CountdownTimer,
    inputs: TimerInputs,
    collection: Collection,
    capture: CaptureState,
    pokedex: PokedexModal,
    theme: Theme,
    task_manager: TaskManager,
}

impl PokeStudyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Sprite URLs render through the http image loader.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::pokedex();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.3);

        let collection = Collection::hydrate();
        println!("Pokédex hydrated with {} Pokémon", collection.len());

        let timer = CountdownTimer::new();
        let inputs = TimerInputs::from_timer(&timer);

        Self {
            timer,
            inputs,
            collection,
            capture: CaptureState::default(),
            pokedex: PokedexModal::new(),
            theme,
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Capture(Ok(pokemon)) => {
                println!("Caught {} ({})", pokemon.name, pokemon.padded_id());
                self.collection.push(pokemon.clone());
                self.collection.persist();
                self.capture = CaptureState::Caught(pokemon);
            }
            TaskResult::Capture(Err(details)) => {
                eprintln!("Capture failed: {}", details);
                self.capture = CaptureState::Failed(details);
            }
        }
    }

    fn start_capture(&mut self) {
        // Refused starts (an attempt already in flight) leave the state as-is.
        if self.task_manager.start_capture() {
            self.capture = CaptureState::Loading;
        }
    }

    fn reset(&mut self) {
        self.timer.reset();
        self.capture = CaptureState::Idle;
        self.inputs = TimerInputs::from_timer(&self.timer);
    }
}

impl eframe::App for PokeStudyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(TimerEvent::Expired) = self.timer.advance(Instant::now()) {
            self.start_capture();
        }

        let mut action = None;
        let mut retry = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            action = timer_panel::show(
                ui,
                &mut self.timer,
                &mut self.inputs,
                self.collection.len(),
                &self.theme,
            );
            retry = capture_status::capture_card(ui, &self.capture, &self.theme);
        });

        match action {
            Some(TimerAction::Toggle) => self.timer.toggle(),
            Some(TimerAction::Reset) => self.reset(),
            Some(TimerAction::OpenPokedex) => self.pokedex.open(),
            None => {}
        }

        if retry {
            self.start_capture();
        }

        self.pokedex.show(ctx, &self.collection, &self.theme);
        capture_status::loading_overlay(ctx, &self.capture, &self.theme);

        // Keep frames coming while the countdown or a request is live.
        if self.timer.is_running() || self.capture.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
