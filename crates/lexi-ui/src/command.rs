use lexi_core::types::UiEvent;

pub const HELP: &str = "\
Type a word and press Enter to look it up.
  /s <word>   search for a word starting with ':' or '/'
  :save       save or unsave the word on screen
  :play       show the pronunciation audio source
  :list       show saved words
  :open N     look up saved word N
  :del N      delete saved word N
  :home       back to the start
  :help       this text
  :quit       exit";

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    /// 1-based row in the saved list
    OpenSaved(usize),
    DeleteSaved(usize),
    PlayAudio,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();

    if let Some(word) = trimmed.strip_prefix("/s ") {
        return Command::Ui(UiEvent::Search(word.to_string()));
    }

    let Some(rest) = trimmed.strip_prefix(':') else {
        // Anything else is the search box being submitted, blank included
        return Command::Ui(UiEvent::Search(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let index = parts.next().and_then(|n| n.parse::<usize>().ok());

    match (name, index) {
        ("save", None) => Command::Ui(UiEvent::ToggleSave),
        ("list" | "saved", None) => Command::Ui(UiEvent::ShowSaved),
        ("home", None) => Command::Ui(UiEvent::Home),
        ("open", Some(n)) if n > 0 => Command::OpenSaved(n),
        ("del" | "delete", Some(n)) if n > 0 => Command::DeleteSaved(n),
        ("play", None) => Command::PlayAudio,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
