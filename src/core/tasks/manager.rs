use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::pokeapi;

/// Runs network work off the GUI thread. The GUI drains finished results
/// every frame with [`TaskManager::poll_results`].
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    capture_in_flight: Arc<AtomicBool>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, capture_in_flight: Arc::new(AtomicBool::new(false)) }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn capture_in_flight(&self) -> bool {
        self.capture_in_flight.load(Ordering::Relaxed)
    }

    /// Fetch one random Pokémon in the background. At most one capture runs
    /// at a time; returns false when an earlier attempt is still outstanding
    /// and no new request was started.
    pub fn start_capture(&self) -> bool {
        if self.capture_in_flight.swap(true, Ordering::SeqCst) {
            println!("Capture already in flight, ignoring trigger");
            return false;
        }

        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let in_flight = self.capture_in_flight.clone();

        thread::spawn(move || {
            let id = pokeapi::random_id();
            println!("Capturing Pokémon #{:03}...", id);

            let result =
                runtime.block_on(pokeapi::fetch_pokemon(id)).map_err(|e| e.to_string());

            in_flight.store(false, Ordering::SeqCst);
            let _ = sender.send(TaskResult::Capture(result));
        });

        true
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_capture_is_rejected_while_one_is_outstanding() {
        let manager = TaskManager::new();

        // Claim the in-flight flag the way a running capture would.
        assert!(!manager.capture_in_flight.swap(true, Ordering::SeqCst));
        assert!(manager.capture_in_flight());
        assert!(!manager.start_capture());

        manager.capture_in_flight.store(false, Ordering::SeqCst);
        assert!(!manager.capture_in_flight());
    }
}
