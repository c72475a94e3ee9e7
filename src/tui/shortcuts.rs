//! Centralized keyboard shortcuts.
//!
//! | Action              | Keys                 |
//! |---------------------|----------------------|
//! | Send                | Enter                |
//! | Scroll              | ↑ ↓ PageUp PageDown  |
//! | Next/prev reference | Tab / Shift+Tab      |
//! | Search reference    | Ctrl+F               |
//! | Example prompt      | Ctrl+E               |
//! | New conversation    | Ctrl+N               |
//! | Cancel request      | Esc                  |
//! | Quit                | Ctrl+C               |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NextReference,
    PrevReference,
    SearchReference,
    ExamplePrompt,
    NewConversation,
    Cancel,
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Shortcut::Quit),
            KeyCode::Char('n') if ctrl => Some(Shortcut::NewConversation),
            KeyCode::Char('f') if ctrl => Some(Shortcut::SearchReference),
            KeyCode::Char('e') if ctrl => Some(Shortcut::ExamplePrompt),
            KeyCode::BackTab => Some(Shortcut::PrevReference),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Shortcut::PrevReference)
            }
            KeyCode::Tab => Some(Shortcut::NextReference),
            KeyCode::Esc => Some(Shortcut::Cancel),
            _ => None,
        }
    }

    /// Hint shown in the bottom bar.
    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::NextReference => "Tab reference",
            Shortcut::PrevReference => "Shift+Tab previous",
            Shortcut::SearchReference => "Ctrl+F search",
            Shortcut::ExamplePrompt => "Ctrl+E example",
            Shortcut::NewConversation => "Ctrl+N new",
            Shortcut::Cancel => "Esc cancel",
            Shortcut::Quit => "Ctrl+C quit",
        }
    }
}
