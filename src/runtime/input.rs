//! Keyboard input handling
//!
//! Focus capture works like a modal stack:
//! - the add/edit form, when open, receives every key
//! - otherwise the inline position editor, when open
//! - otherwise keys are application shortcuts

use winit::keyboard::{Key, NamedKey};

use ranklist::commands::Cmd;
use ranklist::messages::{AppMsg, FormMsg, ImportMsg, ListMsg, Msg};
use ranklist::model::{AppModel, ColumnCount, InputEdit};
use ranklist::update::update;
use ranklist::view::geometry::list_viewport;

/// Modifier keys relevant for shortcuts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub logo: bool,
}

impl KeyModifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS
    #[inline]
    pub fn command(&self) -> bool {
        self.ctrl || self.logo
    }
}

/// Where typed text goes
enum TextTarget {
    Form,
    Position,
}

impl TextTarget {
    fn edit(&self, edit: InputEdit) -> Msg {
        match self {
            TextTarget::Form => Msg::Form(FormMsg::Input(edit)),
            TextTarget::Position => Msg::List(ListMsg::RepositionInput(edit)),
        }
    }
}

/// Handle a key press
pub fn handle_key(model: &mut AppModel, key: Key, mods: KeyModifiers) -> Option<Cmd> {
    if model.form.is_some() {
        return handle_form_key(model, key, mods);
    }
    if model.ui.position_edit.is_some() {
        return handle_position_key(model, key, mods);
    }
    handle_shortcut(model, key, mods)
}

fn handle_form_key(model: &mut AppModel, key: Key, mods: KeyModifiers) -> Option<Cmd> {
    match key {
        Key::Named(NamedKey::Escape) => update(model, Msg::Form(FormMsg::Cancel)),
        Key::Named(NamedKey::Enter) => update(model, Msg::Form(FormMsg::Submit)),
        Key::Named(NamedKey::Tab) if mods.shift => update(model, Msg::Form(FormMsg::FocusPrev)),
        Key::Named(NamedKey::Tab) => update(model, Msg::Form(FormMsg::FocusNext)),
        Key::Named(NamedKey::ArrowDown) => update(model, Msg::Form(FormMsg::FocusNext)),
        Key::Named(NamedKey::ArrowUp) => update(model, Msg::Form(FormMsg::FocusPrev)),
        key => handle_text_key(model, TextTarget::Form, key, mods),
    }
}

fn handle_position_key(model: &mut AppModel, key: Key, mods: KeyModifiers) -> Option<Cmd> {
    match key {
        Key::Named(NamedKey::Escape) => update(model, Msg::List(ListMsg::CancelReposition)),
        Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Tab) => {
            update(model, Msg::List(ListMsg::CommitReposition))
        }
        key => handle_text_key(model, TextTarget::Position, key, mods),
    }
}

/// Editing keys shared by the form inputs and the position editor
fn handle_text_key(model: &mut AppModel, target: TextTarget, key: Key, mods: KeyModifiers) -> Option<Cmd> {
    let edit = match key {
        Key::Named(NamedKey::Backspace) => InputEdit::DeleteBackward,
        Key::Named(NamedKey::Delete) => InputEdit::DeleteForward,
        Key::Named(NamedKey::ArrowLeft) => InputEdit::CursorLeft,
        Key::Named(NamedKey::ArrowRight) => InputEdit::CursorRight,
        Key::Named(NamedKey::Home) => InputEdit::CursorHome,
        Key::Named(NamedKey::End) => InputEdit::CursorEnd,
        Key::Named(NamedKey::Space) if !mods.command() => InputEdit::InsertChar(' '),
        Key::Character(ref s) if mods.command() && s.eq_ignore_ascii_case("v") => {
            InputEdit::InsertText(clipboard_line()?)
        }
        Key::Character(ref s) if !mods.command() => InputEdit::InsertText(s.to_string()),
        _ => return None,
    };
    update(model, target.edit(edit))
}

/// First line of the clipboard text, if any
fn clipboard_line() -> Option<String> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("clipboard unavailable: {}", e);
            return None;
        }
    };
    let text = clipboard.get_text().ok()?;
    let line = text.lines().next().unwrap_or_default().to_string();
    (!line.is_empty()).then_some(line)
}

fn handle_shortcut(model: &mut AppModel, key: Key, mods: KeyModifiers) -> Option<Cmd> {
    let page = (list_viewport(model).height * 0.9).max(model.line_height as f32);
    match key {
        Key::Character(ref s) if mods.command() => {
            let msg = match s.to_ascii_lowercase().as_str() {
                "n" => Msg::Form(FormMsg::OpenCreate),
                "o" => Msg::Import(ImportMsg::Request),
                "q" => Msg::App(AppMsg::Quit),
                digit => {
                    let n = digit.parse::<u8>().ok()?;
                    Msg::set_columns(ColumnCount::new(n)?)
                }
            };
            update(model, msg)
        }
        Key::Named(NamedKey::PageDown) => update(model, Msg::List(ListMsg::Scroll(page))),
        Key::Named(NamedKey::PageUp) => update(model, Msg::List(ListMsg::Scroll(-page))),
        Key::Named(NamedKey::Home) => update(model, Msg::List(ListMsg::Scroll(f32::MIN))),
        Key::Named(NamedKey::End) => update(model, Msg::List(ListMsg::Scroll(f32::MAX))),
        _ => None,
    }
}
