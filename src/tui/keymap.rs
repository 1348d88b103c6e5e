//! # Keymap
//!
//! Classifies raw key presses into core `Action`s. Bindings come from the
//! config as strings like `"tab"`, `"q"` or `"ctrl+c"` and are parsed once at
//! startup, so a typo fails before the terminal goes raw.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Action;
use crate::core::config::KeyNames;
use crate::core::view::Controls;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyBindingError {
    #[error("empty key name")]
    Empty,
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    #[error("unknown modifier {modifier:?} in {binding:?}")]
    UnknownModifier { modifier: String, binding: String },
}

/// One physical key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn parse(name: &str) -> Result<Self, KeyBindingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KeyBindingError::Empty);
        }
        // A lone "+" is the plus key, not a separator.
        if name == "+" {
            return Ok(Self {
                code: KeyCode::Char('+'),
                modifiers: KeyModifiers::NONE,
            });
        }

        let mut parts: Vec<&str> = name.split('+').collect();
        let key = parts.pop().unwrap_or_default();
        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => {
                    return Err(KeyBindingError::UnknownModifier {
                        modifier: part.to_string(),
                        binding: name.to_string(),
                    });
                }
            };
        }

        let mut code = parse_code(key)?;
        // Terminals report Shift+Tab as BackTab.
        if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
            code = KeyCode::BackTab;
        }
        Ok(Self { code, modifiers })
    }

    /// Does `event` press this key?
    ///
    /// Plain character bindings ignore SHIFT, since terminals report `Q` as
    /// `Char('Q')` with SHIFT already applied. Ctrl and shift character
    /// bindings compare case-insensitively for the same reason.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let folds_case = self
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        let (code, event_code) = match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) if folds_case => {
                (KeyCode::Char(a.to_ascii_lowercase()), KeyCode::Char(b.to_ascii_lowercase()))
            }
            pair => pair,
        };
        if code != event_code {
            return false;
        }
        let mut mods = event.modifiers;
        match self.code {
            KeyCode::Char(_) if !self.modifiers.contains(KeyModifiers::SHIFT) => {
                mods.remove(KeyModifiers::SHIFT);
            }
            // Shift is implied by an uppercase char or BackTab, even when
            // the terminal leaves the modifier out.
            KeyCode::Char(_) if matches!(event.code, KeyCode::Char(c) if c.is_uppercase()) => {
                mods.insert(KeyModifiers::SHIFT);
            }
            KeyCode::BackTab => mods.insert(KeyModifiers::SHIFT),
            _ => {}
        }
        mods == self.modifiers
    }

    /// Short label for the control legend.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Tab | KeyCode::BackTab => "TAB".to_string(),
            KeyCode::Char(' ') => "SPACE".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "ENTER".to_string(),
            KeyCode::Esc => "ESC".to_string(),
            KeyCode::Backspace => "BACKSPACE".to_string(),
            KeyCode::Up => "UP".to_string(),
            KeyCode::Down => "DOWN".to_string(),
            KeyCode::Left => "LEFT".to_string(),
            KeyCode::Right => "RIGHT".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };
        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            label.push_str("shift+");
        }
        label.push_str(&key);
        label
    }
}

fn parse_code(key: &str) -> Result<KeyCode, KeyBindingError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "" => return Err(KeyBindingError::Empty),
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(KeyBindingError::UnknownKey(key.to_string())),
        },
        _ => return Err(KeyBindingError::UnknownKey(key.to_string())),
    };
    Ok(code)
}

fn parse_all(names: &[String]) -> Result<Vec<KeyBinding>, KeyBindingError> {
    names.iter().map(|n| KeyBinding::parse(n)).collect()
}

/// Key bindings for each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub next: Vec<KeyBinding>,
    pub reveal: Vec<KeyBinding>,
    pub quit: Vec<KeyBinding>,
}

impl Keymap {
    pub fn from_names(names: &KeyNames) -> Result<Self, KeyBindingError> {
        Ok(Self {
            next: parse_all(&names.next)?,
            reveal: parse_all(&names.reveal)?,
            quit: parse_all(&names.quit)?,
        })
    }

    /// `None` means the key has no binding and the press is ignored.
    ///
    /// Quit is checked first so a key bound twice can always end the session.
    pub fn classify(&self, event: &KeyEvent) -> Option<Action> {
        let hit = |bindings: &[KeyBinding]| bindings.iter().any(|b| b.matches(event));
        if hit(&self.quit) {
            Some(Action::Quit)
        } else if hit(&self.next) {
            Some(Action::NextCard)
        } else if hit(&self.reveal) {
            Some(Action::Reveal)
        } else {
            None
        }
    }

    /// Legend labels. Ctrl+C style escape hatches are left out of the legend
    /// when a plain key does the same job.
    pub fn controls(&self) -> Controls {
        Controls {
            next: legend(&self.next),
            reveal: legend(&self.reveal),
            quit: legend(&self.quit),
        }
    }
}

/// Same bindings as `KeyNames::default()`: tab, space, q / ctrl+c.
impl Default for Keymap {
    fn default() -> Self {
        let key = |code, modifiers| KeyBinding { code, modifiers };
        Self {
            next: vec![key(KeyCode::Tab, KeyModifiers::NONE)],
            reveal: vec![key(KeyCode::Char(' '), KeyModifiers::NONE)],
            quit: vec![
                key(KeyCode::Char('q'), KeyModifiers::NONE),
                key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ],
        }
    }
}

fn legend(bindings: &[KeyBinding]) -> String {
    let plain: Vec<String> = bindings
        .iter()
        .filter(|b| b.modifiers.is_empty())
        .map(KeyBinding::label)
        .collect();
    if plain.is_empty() {
        bindings
            .iter()
            .map(KeyBinding::label)
            .collect::<Vec<_>>()
            .join(" / ")
    } else {
        plain.join(" / ")
    }
}
