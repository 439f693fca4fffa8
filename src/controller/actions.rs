use crate::config::Action;
use crate::draw::DrawingEngine;
use crate::input::KeyEvent;
use log::debug;

use super::DrawingModeController;

impl<E: DrawingEngine> DrawingModeController<E> {
    /// Processes a key-down event from the host window.
    ///
    /// Returns `true` when the event triggered an action; the host must then
    /// suppress its default handling and stop propagation. Returns `false`
    /// (and changes nothing) when drawing is disabled, when shortcuts are
    /// turned off, or when no binding matches.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.options.shortcuts || !self.flags.enabled {
            return false;
        }

        if event.target_editable && self.options.ignore_editable_targets {
            debug!("Skipping shortcut for editable target: {:?}", event.key);
            return false;
        }

        match self.find_action(event) {
            Some(action) => {
                let handled = self.handle_action(action);
                debug!("Key {:?} -> {:?} (handled: {})", event.key, action, handled);
                handled
            }
            None => false,
        }
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, event: &KeyEvent) -> Option<Action> {
        let key_str = event.key.binding_name()?;
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches(&key_str, event.modifiers))
            .map(|(_, action)| *action)
    }

    /// Performs a bound action. Returns whether it took effect as a shortcut.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Undo => {
                self.undo();
                true
            }
            Action::Redo => {
                self.redo();
                true
            }
            Action::DisableDrawing => {
                self.set_enabled(false);
                true
            }
            Action::SetMode(mode) => {
                self.set_logical_mode(mode);
                true
            }
            Action::ClearCanvas => {
                self.clear();
                true
            }
            Action::SelectColor(digit) => match self.palette.by_digit(digit) {
                Some(color) => {
                    self.set_color(color);
                    true
                }
                None => false,
            },
        }
    }
}
