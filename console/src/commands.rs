use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:upload <path>`; a bare `:upload` selects nothing.
    Upload(Option<PathBuf>),
    Ask(String),
    Logs,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub const HELP: &str = "\
Commands:
  :upload <path>   upload a PDF to ask questions about
  :logs            show the backend trace log
  :help            show this help
  :quit            exit
Anything else is sent as a question; start it with :: to send a question
that begins with a colon.";

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Ask(line.trim_end_matches(['\r', '\n']).to_string());
    };
    if rest.starts_with(':') {
        return Command::Ask(rest.to_string());
    }

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name {
        "upload" | "u" => {
            let path = (!argument.is_empty()).then(|| PathBuf::from(argument));
            Command::Upload(path)
        }
        "logs" => Command::Logs,
        "help" | "h" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            parse("What does this document say about fees?"),
            Command::Ask("What does this document say about fees?".into())
        );
    }

    #[test]
    fn question_keeps_inner_whitespace() {
        assert_eq!(parse("  two  spaces\r\n"), Command::Ask("  two  spaces".into()));
    }

    #[test]
    fn double_colon_sends_a_question_starting_with_colon() {
        assert_eq!(parse("::) why?"), Command::Ask(":) why?".into()));
        assert_eq!(parse("::quit"), Command::Ask(":quit".into()));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   \t"), Command::Empty);
    }

    #[test]
    fn upload_takes_the_rest_of_the_line_as_path() {
        assert_eq!(
            parse(":upload ./papers/my report.pdf"),
            Command::Upload(Some(PathBuf::from("./papers/my report.pdf")))
        );
        assert_eq!(parse(":upload"), Command::Upload(None));
        assert_eq!(parse(":upload   "), Command::Upload(None));
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse(":logs"), Command::Logs);
        assert_eq!(parse(":help"), Command::Help);
        assert_eq!(parse(":quit"), Command::Quit);
        assert_eq!(parse(":exit"), Command::Quit);
        assert_eq!(parse(":frobnicate"), Command::Unknown("frobnicate".into()));
    }
}
