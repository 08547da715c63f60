/*!
 * Terminal rendering of the translator form.
 *
 * Rendering returns strings so the interactive loop decides where they go;
 * colours follow the session theme.
 */

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::app_controller::{Banner, SubmitOutcome};
use crate::language_catalog::LanguageCatalog;
use crate::session::{SessionState, Theme};

const RESET: &str = "\x1B[0m";

/// ANSI palette of one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    text: &'static str,
    muted: &'static str,
    heading: &'static str,
    success: &'static str,
    info: &'static str,
    warning: &'static str,
    error: &'static str,
}

const LIGHT: Palette = Palette {
    text: "\x1B[30m",
    muted: "\x1B[90m",
    heading: "\x1B[1;30m",
    success: "\x1B[32m",
    info: "\x1B[34m",
    warning: "\x1B[33m",
    error: "\x1B[31m",
};

const DARK: Palette = Palette {
    text: "\x1B[97m",
    muted: "\x1B[37m",
    heading: "\x1B[1;97m",
    success: "\x1B[92m",
    info: "\x1B[96m",
    warning: "\x1B[93m",
    error: "\x1B[91m",
};

/// Renders form sections for a theme
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
    color: bool,
}

impl Renderer {
    /// Create a renderer; `color` off yields plain text
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// Switch theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn palette(&self) -> Palette {
        match self.theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Title, subtitle and divider
    pub fn header(&self) -> String {
        let palette = self.palette();
        let icon = match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        };
        format!(
            "{}  {}\n{}\n{}",
            self.paint(palette.heading, "🌐 Smart Language Translator"),
            self.paint(palette.muted, &format!("[{} :theme]", icon)),
            self.paint(palette.muted, "Translate text effortlessly with a voice-enabled translator."),
            self.paint(palette.text, &"─".repeat(60)),
        )
    }

    /// Current source and target selection
    pub fn selection(&self, state: &SessionState) -> String {
        let palette = self.palette();
        format!(
            "{} {}  🔁  {} {}",
            self.paint(palette.heading, "From"),
            self.paint(palette.text, &state.source_language),
            self.paint(palette.heading, "To"),
            self.paint(palette.text, &state.target_language),
        )
    }

    /// One banner line
    pub fn banner(&self, banner: &Banner) -> String {
        let palette = self.palette();
        match banner {
            Banner::Info(message) => self.paint(palette.info, &format!("🧭 {}", message)),
            Banner::Warning(message) => self.paint(palette.warning, &format!("⚠️ {}", message)),
            Banner::Error(message) => self.paint(palette.error, &format!("❌ {}", message)),
        }
    }

    /// Banners, translated text and audio of a submit
    pub fn outcome(&self, outcome: &SubmitOutcome) -> String {
        let palette = self.palette();
        let mut lines: Vec<String> = outcome.banners.iter().map(|b| self.banner(b)).collect();

        if let Some(text) = &outcome.translated_text {
            lines.push(self.paint(palette.heading, "🎯 Translated Text"));
            lines.push(self.paint(palette.success, text));
        }

        if let Some(audio) = &outcome.audio {
            lines.push(self.paint(
                palette.muted,
                &format!("🔊 {} ({})  [💾 :save [path]]", audio.file_path.display(), audio.mime_type),
            ));
        }

        lines.join("\n")
    }

    /// Catalog listing, with or without the auto-detect sentinel
    pub fn languages(&self, include_auto: bool) -> String {
        LanguageCatalog::entries()
            .iter()
            .filter(|e| include_auto || !e.is_auto())
            .map(|e| format!("  {:<22} {}", e.display_name, e.code))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Command reference of the interactive form
    pub fn help(&self) -> String {
        let palette = self.palette();
        [
            ":from <language>   choose the source language (Auto Detect allowed)",
            ":to <language>     choose the target language",
            ":swap              exchange source and target",
            ":theme             toggle light/dark theme",
            ":langs             list languages",
            ":save [path]       save the last audio (default name from config)",
            ":help              show this help",
            ":quit              leave",
            "anything else      translate it",
        ]
        .iter()
        .map(|line| self.paint(palette.muted, line))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// A line typed into the interactive form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Select a source language
    From(String),
    /// Select a target language
    To(String),
    /// Exchange source and target
    Swap,
    /// Toggle the theme
    Theme,
    /// List languages
    Languages,
    /// Save the last audio, optionally to a path
    Save(Option<String>),
    /// Show help
    Help,
    /// Leave the form
    Quit,
    /// Translate the text
    Translate(String),
    /// Unrecognised `:` command
    Unknown(String),
}

impl FormCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return FormCommand::Translate(line.to_string());
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name.to_lowercase().as_str() {
            "from" | "source" => FormCommand::From(argument.to_string()),
            "to" | "target" => FormCommand::To(argument.to_string()),
            "swap" => FormCommand::Swap,
            "theme" => FormCommand::Theme,
            "langs" | "languages" => FormCommand::Languages,
            "save" | "download" => {
                FormCommand::Save((!argument.is_empty()).then(|| argument.to_string()))
            }
            "help" | "?" => FormCommand::Help,
            "quit" | "exit" | "q" => FormCommand::Quit,
            _ => FormCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// Spinner shown while providers are working
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
