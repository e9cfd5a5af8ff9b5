//! Keyboard Shortcuts
//!
//! Maps global keydown events to app actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close both dialogs
    CloseDialogs,
    /// Ctrl/Cmd + Enter: submit the form holding focus
    SubmitFocusedForm,
    /// Alt + N: focus the new-task title
    FocusNewTask,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
        }
    }
}

pub fn shortcut_for(key: &str, mods: Modifiers) -> Option<Shortcut> {
    match key {
        "Escape" => Some(Shortcut::CloseDialogs),
        "Enter" if mods.ctrl || mods.meta => Some(Shortcut::SubmitFocusedForm),
        "n" if mods.alt => Some(Shortcut::FocusNewTask),
        _ => None,
    }
}
