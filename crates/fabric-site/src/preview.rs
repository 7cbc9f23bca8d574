//! Line-driven preview of the mounted shell.

use crate::app::{SiteApp, SWITCHER_ROOT_ID};
use crate::error::{SiteError, SiteResult};
use crate::host::HostBundle;
use fabric_common::{ClickEvent, DocumentEvent};
use fabric_i18n::Locale;
use std::str::FromStr;
use tracing::debug;

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  go <path>             click the header link to <path>
  back | forward        host history navigation
  lang <code>           set the language directly (en zh ko ru ar bg)
  menu                  open or close the language list
  pick <code>           choose a language from the open list
  escape                press Escape
  click-outside         press the pointer outside the language switcher
  theme                 toggle the theme
  scheme <light|dark>   change the ambient color scheme
  tier <id>             open or close a landing tier
  goal <id>             choose a planner goal
  render                print the shell markup
  status                print the shell state
  help                  print this text
  quit                  leave";

/// A parsed preview command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the header link to a path
    Go(String),
    /// History back
    Back,
    /// History forward
    Forward,
    /// Set the language without the switcher
    Lang(Locale),
    /// Toggle the language list
    Menu,
    /// Pick a language from the open list
    Pick(Locale),
    /// Escape key
    Escape,
    /// Pointer press outside the switcher
    ClickOutside,
    /// Toggle the theme
    Theme,
    /// Ambient scheme change; `true` for dark
    Scheme(bool),
    /// Toggle a landing tier
    Tier(String),
    /// Choose a planner goal
    Goal(String),
    /// Print markup
    Render,
    /// Print state
    Status,
    /// Print usage
    Help,
    /// Stop
    Quit,
}

fn argument<'a>(command: &str, argument: Option<&'a str>) -> SiteResult<&'a str> {
    argument.ok_or_else(|| SiteError::Command(format!("'{command}' needs an argument")))
}

fn locale_argument(command: &str, argument_text: Option<&str>) -> SiteResult<Locale> {
    let code = argument(command, argument_text)?;
    Locale::from_code(code)
        .ok_or_else(|| SiteError::Command(format!("unsupported language '{code}'")))
}

impl FromStr for Command {
    type Err = SiteError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(SiteError::Command("empty command".to_string()));
        };

        let command = match name {
            "go" => Self::Go(argument(name, words.next())?.to_string()),
            "back" => Self::Back,
            "forward" => Self::Forward,
            "lang" => Self::Lang(locale_argument(name, words.next())?),
            "menu" => Self::Menu,
            "pick" => Self::Pick(locale_argument(name, words.next())?),
            "escape" => Self::Escape,
            "click-outside" => Self::ClickOutside,
            "theme" => Self::Theme,
            "scheme" => match argument(name, words.next())? {
                "dark" => Self::Scheme(true),
                "light" => Self::Scheme(false),
                other => {
                    return Err(SiteError::Command(format!(
                        "scheme must be 'light' or 'dark', got '{other}'"
                    )))
                }
            },
            "tier" => Self::Tier(argument(name, words.next())?.to_string()),
            "goal" => Self::Goal(argument(name, words.next())?.to_string()),
            "render" => Self::Render,
            "status" => Self::Status,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(SiteError::Command(format!("unknown command '{other}'"))),
        };

        if let Some(extra) = words.next() {
            return Err(SiteError::Command(format!(
                "unexpected argument '{extra}' for '{name}'"
            )));
        }
        Ok(command)
    }
}

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Continue(String),
    /// Stop reading
    Quit,
}

/// A mounted shell plus the host it runs on.
#[derive(Debug)]
pub struct Preview {
    app: SiteApp,
    host: HostBundle,
}

impl Preview {
    /// Wraps a shell mounted on `host`.
    pub const fn new(app: SiteApp, host: HostBundle) -> Self {
        Self { app, host }
    }

    /// The shell.
    pub const fn app(&self) -> &SiteApp {
        &self.app
    }

    /// The host.
    pub const fn host(&self) -> &HostBundle {
        &self.host
    }

    /// Parses and runs one input line. Blank lines do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Command`] for a line that is not a command.
    pub fn run_line(&self, line: &str) -> SiteResult<Outcome> {
        if line.trim().is_empty() {
            return Ok(Outcome::Continue(String::new()));
        }
        Ok(self.execute(&line.parse()?))
    }

    /// Runs one command.
    pub fn execute(&self, command: &Command) -> Outcome {
        debug!(?command, "preview command");
        let text = match command {
            Command::Go(path) => {
                let mut click = ClickEvent::primary();
                let before = self.app.router().path();
                self.app.click_link(path, &mut click);
                if self.app.router().path() == before {
                    format!("already at {before}")
                } else {
                    self.app.status().to_string()
                }
            }
            Command::Back => self.history_step(self.host.history.back(), "back"),
            Command::Forward => self.history_step(self.host.history.forward(), "forward"),
            Command::Lang(locale) => {
                if self.app.set_language(*locale) {
                    self.app.status().to_string()
                } else {
                    format!("language already {locale}")
                }
            }
            Command::Menu => {
                self.app.switcher().toggle();
                self.menu_state()
            }
            Command::Pick(locale) => {
                if self.app.switcher().is_open() {
                    self.app.switcher().select(*locale);
                    self.app.status().to_string()
                } else {
                    "language list is closed; open it with 'menu'".to_string()
                }
            }
            Command::Escape => {
                self.host.dispatch(&DocumentEvent::key_down("Escape"));
                self.menu_state()
            }
            Command::ClickOutside => {
                self.host
                    .dispatch(&DocumentEvent::pointer_down(["main-content", "app-shell"]));
                self.menu_state()
            }
            Command::Theme => format!("theme {}", self.app.toggle_theme()),
            Command::Scheme(prefers_dark) => {
                self.host.scheme.set_prefers_dark(*prefers_dark);
                format!("ambient {} -> theme {}", scheme_name(*prefers_dark), self.app.theme().mode())
            }
            Command::Tier(id) => match self.app.toggle_tier(id) {
                Some(true) => format!("tier {id} open"),
                Some(false) => format!("tier {id} closed"),
                None => format!("no tier '{id}'"),
            },
            Command::Goal(id) => {
                if self.app.select_goal(id) {
                    format!("goal {id} selected")
                } else {
                    format!("no goal '{id}'")
                }
            }
            Command::Render => self.app.render(),
            Command::Status => self.app.status().to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(text)
    }

    fn history_step(&self, moved: bool, direction: &str) -> String {
        if moved {
            self.app.status().to_string()
        } else {
            format!("nothing to go {direction} to")
        }
    }

    fn menu_state(&self) -> String {
        let state = if self.app.switcher().is_open() {
            "open"
        } else {
            "closed"
        };
        format!("{SWITCHER_ROOT_ID} {state}")
    }
}

const fn scheme_name(prefers_dark: bool) -> &'static str {
    if prefers_dark {
        "dark"
    } else {
        "light"
    }
}
