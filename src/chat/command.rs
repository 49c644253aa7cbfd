use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Clear cached translations and history"),
    ("/speak", "Speak the last input (or: /speak hi, /speak bn <text>)"),
    ("/stats", "Show session statistics"),
    ("/view", "Switch between line and word view"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    Reset,
    Stats,
    /// `/view [line|word]`; toggles when no view is given.
    View(Option<String>),
    /// `/speak [language] [text]`
    Speak {
        language: Option<String>,
        text: Option<String>,
    },
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        Some("reset") => SlashCommand::Reset,
        Some("stats") => SlashCommand::Stats,
        Some("view") => SlashCommand::View(parts.get(1).map(|v| (*v).to_string())),
        Some("speak") => SlashCommand::Speak {
            language: parts.get(1).map(|v| (*v).to_string()),
            text: (parts.len() > 2).then(|| parts[2..].join(" ")),
        },
        _ => SlashCommand::Unknown(parts.join(" ")),
    };
    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn command(input: &str) -> SlashCommand {
        match parse_input(input) {
            Input::Command(cmd) => cmd,
            other => panic!("Expected Input::Command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("  আমার সোনার বাংলা ") {
            Input::Text(text) => assert_eq!(text, "আমার সোনার বাংলা"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(command("/config"), SlashCommand::Config);
        assert_eq!(command("/help"), SlashCommand::Help);
        assert_eq!(command("/reset"), SlashCommand::Reset);
        assert_eq!(command("/stats"), SlashCommand::Stats);
    }

    #[test]
    fn test_parse_quit_commands() {
        assert_eq!(command("/quit"), SlashCommand::Quit);
        assert_eq!(command("/exit"), SlashCommand::Quit);
        assert_eq!(command("/q"), SlashCommand::Quit);
    }

    #[test]
    fn test_parse_view_command() {
        assert_eq!(command("/view"), SlashCommand::View(None));
        assert_eq!(command("/view word"), SlashCommand::View(Some("word".to_string())));
    }

    #[test]
    fn test_parse_speak_command() {
        assert_eq!(
            command("/speak"),
            SlashCommand::Speak {
                language: None,
                text: None
            }
        );
        assert_eq!(
            command("/speak bn আমার সোনার বাংলা"),
            SlashCommand::Speak {
                language: Some("bn".to_string()),
                text: Some("আমার সোনার বাংলা".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(command("/unknown"), SlashCommand::Unknown("unknown".to_string()));
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("নমস্কার").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].starts_with("/speak"));
        assert!(suggestions[1].starts_with("/stats"));

        let suggestions = completer.get_suggestions("/v").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/view"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/stats  Show session statistics".to_string();
        let completion = completer.get_completion("/st", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/stats".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
