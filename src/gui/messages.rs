/// User-facing strings, keyed by status so a locale swap never touches
/// control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    CaptureLoading,
    CaptureFailed,
    CaptureSuccess,
    Retry,
    Start,
    Pause,
    Reset,
    Minutes,
    Seconds,
    OpenPokedex,
    PokedexTitle,
    PokedexEmpty,
    Close,
    CaughtOn,
}

pub fn text(key: MessageKey) -> &'static str {
    match key {
        MessageKey::CaptureLoading => "A wild Pokémon is approaching...",
        MessageKey::CaptureFailed => "Failed to catch the Pokémon",
        MessageKey::CaptureSuccess => "Gotcha!",
        MessageKey::Retry => "Retry",
        MessageKey::Start => "Start",
        MessageKey::Pause => "Pause",
        MessageKey::Reset => "Reset",
        MessageKey::Minutes => "min",
        MessageKey::Seconds => "sec",
        MessageKey::OpenPokedex => "Pokédex",
        MessageKey::PokedexTitle => "Pokédex",
        MessageKey::PokedexEmpty => "No Pokémon caught yet. Finish a study session to catch one!",
        MessageKey::Close => "Close",
        MessageKey::CaughtOn => "Caught on",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_is_non_empty() {
        assert!(!text(MessageKey::CaptureFailed).is_empty());
    }
}
