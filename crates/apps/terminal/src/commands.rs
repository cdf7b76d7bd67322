//! Canned command interpreter and transcript model.

use site_content::{Project, PROFILE, PROJECTS, SKILL_CATEGORIES};

pub(crate) const PROMPT_USER: &str = "guest@cruz-os";

const HELP_TEXT: &str = "Available commands:
  help     - Show this help message
  about    - About me
  skills   - List my skills
  projects - Show my projects
  contact  - Contact information
  clear    - Clear terminal
  whoami   - Who am I?
  date     - Show current date
  echo     - Echo a message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TerminalOutput {
    Text(String),
    /// Rendered as clickable contact links.
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranscriptEntry {
    pub(crate) id: u64,
    pub(crate) command: String,
    pub(crate) output: TerminalOutput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandOutcome {
    Append(TerminalOutput),
    Clear,
}

/// Interprets one input line. `now` is only called for `date`.
pub(crate) fn evaluate(input: &str, now: impl FnOnce() -> String) -> CommandOutcome {
    let trimmed = input.trim();
    let normalized = trimmed.to_lowercase();

    let text = match normalized.as_str() {
        "" => String::new(),
        "help" => HELP_TEXT.to_string(),
        "about" => about_text(),
        "skills" => skills_text(),
        "projects" => projects_text(),
        "contact" => return CommandOutcome::Append(TerminalOutput::Contact),
        "clear" => return CommandOutcome::Clear,
        "whoami" => PROMPT_USER.to_string(),
        "date" => now(),
        "echo" => String::new(),
        _ if normalized.starts_with("echo ") => trimmed["echo ".len()..].to_string(),
        _ if normalized.starts_with("project ") => {
            project_text(normalized["project ".len()..].trim(), trimmed)
        }
        _ => not_found(trimmed),
    };
    CommandOutcome::Append(TerminalOutput::Text(text))
}

fn not_found(command: &str) -> String {
    format!("command not found: {command}. Type 'help' for available commands.")
}

fn about_text() -> String {
    format!(
        "{}\n{}\n\n{}",
        PROFILE.name,
        PROFILE.badge,
        PROFILE.paragraphs.join("\n\n")
    )
}

fn skills_text() -> String {
    SKILL_CATEGORIES
        .iter()
        .map(|category| format!("{}: {}", category.title, category.technologies.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn projects_text() -> String {
    let listing = PROJECTS
        .iter()
        .map(|project| {
            format!(
                "[{}] {} - {} ({})",
                project.number, project.title, project.category, project.year
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Type 'project <number>' for details, or visit my GitHub.\n\n{listing}")
}

fn project_text(selector: &str, raw: &str) -> String {
    let wanted = selector.trim_start_matches('0');
    let found = PROJECTS
        .iter()
        .find(|project| project.number.trim_start_matches('0') == wanted && !wanted.is_empty());
    match found {
        Some(Project {
            title,
            category,
            year,
            tech,
            ..
        }) => format!("{title}\n{category} / {year}\n{tech}"),
        None => not_found(raw),
    }
}

#[derive(Debug, Default)]
pub(crate) struct TerminalSession {
    entries: Vec<TranscriptEntry>,
    next_id: u64,
    history: Vec<String>,
    history_cursor: Option<usize>,
}

impl TerminalSession {
    pub(crate) fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub(crate) fn submit(&mut self, input: &str, now: impl FnOnce() -> String) {
        self.history_cursor = None;
        if !input.trim().is_empty() {
            self.history.push(input.trim().to_string());
        }

        match evaluate(input, now) {
            CommandOutcome::Clear => self.entries.clear(),
            CommandOutcome::Append(output) => {
                let id = self.next_id;
                self.next_id += 1;
                self.entries.push(TranscriptEntry {
                    id,
                    command: input.to_string(),
                    output,
                });
            }
        }
    }

    /// Steps back through submitted commands; stays on the oldest.
    pub(crate) fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let cursor = match self.history_cursor {
            None => self.history.len() - 1,
            Some(cursor) => cursor.saturating_sub(1),
        };
        self.history_cursor = Some(cursor);
        self.history.get(cursor).map(String::as_str)
    }

    /// Steps forward; `Some("")` once past the newest command.
    pub(crate) fn history_next(&mut self) -> Option<&str> {
        let cursor = self.history_cursor?;
        if cursor + 1 >= self.history.len() {
            self.history_cursor = None;
            return Some("");
        }
        self.history_cursor = Some(cursor + 1);
        self.history.get(cursor + 1).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(input: &str) -> String {
        match evaluate(input, || "Thu Jan 01 1970".to_string()) {
            CommandOutcome::Append(TerminalOutput::Text(text)) => text,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn known_commands_are_trimmed_and_case_insensitive() {
        assert_eq!(text("  WhoAmI "), "guest@cruz-os");
        assert_eq!(text("HELP"), HELP_TEXT);
        assert_eq!(text("date"), "Thu Jan 01 1970");
        assert_eq!(
            evaluate(" Contact", String::new),
            CommandOutcome::Append(TerminalOutput::Contact)
        );
        assert_eq!(evaluate("CLEAR", String::new), CommandOutcome::Clear);
    }

    #[test]
    fn echo_preserves_original_case() {
        assert_eq!(text("echo Hello World"), "Hello World");
        assert_eq!(text("ECHO  spaced"), " spaced");
        assert_eq!(text("echo"), "");
    }

    #[test]
    fn unknown_command_reports_input() {
        assert_eq!(
            text("sudo rm -rf /"),
            "command not found: sudo rm -rf /. Type 'help' for available commands."
        );
        assert_eq!(
            text("project 9"),
            "command not found: project 9. Type 'help' for available commands."
        );
    }

    #[test]
    fn content_commands_render_site_data() {
        assert!(text("about").starts_with("Giovanni Cruz\nSoftware Engineer\n\n"));
        assert!(text("skills").lines().any(|line| line.starts_with("Blockchain: Solidity")));
        assert!(text("projects").contains("[02] Book SaaS"));
        assert!(text("project 1").starts_with("Solution Card\n"));
        assert!(text("project 04").starts_with("Piva Insurances\n"));
    }

    #[test]
    fn empty_input_appends_empty_entry_and_clear_resets() {
        let mut session = TerminalSession::default();
        session.submit("", String::new);
        session.submit("whoami", String::new);
        assert_eq!(session.entries().len(), 2);
        assert_eq!(
            session.entries()[0].output,
            TerminalOutput::Text(String::new())
        );

        session.submit("clear", String::new);
        assert!(session.entries().is_empty());

        session.submit("whoami", String::new);
        let ids: Vec<_> = session.entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn history_recall_walks_submitted_commands() {
        let mut session = TerminalSession::default();
        assert_eq!(session.history_prev(), None);
        for command in ["help", "  ", "date", "whoami"] {
            session.submit(command, String::new);
        }

        assert_eq!(session.history_prev(), Some("whoami"));
        assert_eq!(session.history_prev(), Some("date"));
        assert_eq!(session.history_prev(), Some("help"));
        assert_eq!(session.history_prev(), Some("help"));
        assert_eq!(session.history_next(), Some("date"));
        assert_eq!(session.history_next(), Some("whoami"));
        assert_eq!(session.history_next(), Some(""));
        assert_eq!(session.history_next(), None);
    }
}
