//! Controller state and engine bookkeeping.

use crate::config::{Action, Config, KeyBinding, KeybindingError};
use crate::draw::{Brush, Color, DrawingEngine, EngineEvent, Palette, Point};
use crate::input::LogicalMode;
use crate::sync::{PageId, SharedSyncState};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

/// UI-facing booleans.
///
/// `can_undo`, `can_redo` and `can_clear` are re-read from the engine on every
/// engine change notification; `is_drawing` follows stroke start/end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UiFlags {
    /// Drawing layer is active; keyboard shortcuts are inert while false
    pub enabled: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_clear: bool,
    /// A stroke is in progress
    pub is_drawing: bool,
}

/// Behavior switches fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Dispatch keyboard shortcuts
    pub shortcuts: bool,
    /// Recompute flags from engine notifications
    pub track_engine_state: bool,
    /// Skip shortcut dispatch for events aimed at editable targets
    pub ignore_editable_targets: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            shortcuts: true,
            track_engine_state: true,
            ignore_editable_targets: false,
        }
    }
}

impl ControllerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            shortcuts: config.shortcuts.enabled,
            track_engine_state: config.engine.track_state,
            ignore_editable_targets: config.shortcuts.ignore_editable_targets,
        }
    }
}

/// Binds a drawing engine to brush state, keyboard shortcuts and page sync.
///
/// One controller exists per session. Every method runs to completion
/// synchronously; engine notifications produced by a call are processed
/// before the call returns.
pub struct DrawingModeController<E: DrawingEngine> {
    pub(super) engine: E,
    pub(super) brush: Brush,
    pub(super) mode: LogicalMode,
    pub(super) palette: Palette,
    pub(super) flags: UiFlags,
    pub(super) sync: SharedSyncState,
    pub(super) current_page: PageId,
    pub(super) is_presenter: bool,
    /// Keybinding action map for lookup
    pub(super) action_map: HashMap<KeyBinding, Action>,
    pub(super) options: ControllerOptions,
}

impl<E: DrawingEngine> DrawingModeController<E> {
    /// Creates a controller with explicit settings.
    ///
    /// The presenter role is applied to the sync state immediately and the
    /// current page's stored content, if any, is loaded into the engine.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        engine: E,
        brush: Brush,
        mode: LogicalMode,
        palette: Palette,
        action_map: HashMap<KeyBinding, Action>,
        options: ControllerOptions,
        sync: SharedSyncState,
        current_page: PageId,
        is_presenter: bool,
    ) -> Self {
        let mut controller = Self {
            engine,
            brush,
            mode,
            palette,
            flags: UiFlags::default(),
            sync,
            current_page,
            is_presenter,
            action_map,
            options,
        };

        controller.set_logical_mode(mode);
        controller.sync.borrow_mut().set_role(is_presenter);
        controller.load_current_page();
        controller
    }

    /// Creates a controller from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the configured keybindings are invalid or collide.
    pub fn from_config(
        engine: E,
        config: &Config,
        sync: SharedSyncState,
        current_page: PageId,
        is_presenter: bool,
    ) -> Result<Self, KeybindingError> {
        let palette = config.palette();
        let action_map = config.keybindings.build_action_map(palette.len())?;

        let mut brush = Brush::new(config.initial_color(), config.brush.default_size);
        brush.simplify = config.brush.simplify;

        Ok(Self::new(
            engine,
            brush,
            config.brush.default_mode,
            palette,
            action_map,
            ControllerOptions::from_config(config),
            sync,
            current_page,
            is_presenter,
        ))
    }

    /// Creates a controller with the default palette, brush and keybindings.
    pub fn with_defaults(
        engine: E,
        sync: SharedSyncState,
        current_page: PageId,
        is_presenter: bool,
    ) -> Self {
        let config = Config::default();
        let palette = config.palette();
        let action_map = config
            .keybindings
            .build_action_map(palette.len())
            .expect("default keybindings never collide");
        let brush = Brush::new(palette.first(), config.brush.default_size);

        Self::new(
            engine,
            brush,
            LogicalMode::Draw,
            palette,
            action_map,
            ControllerOptions::default(),
            sync,
            current_page,
            is_presenter,
        )
    }

    // =========================================================================
    // Brush and mode
    // =========================================================================

    /// Selects the drawing tool and derives the engine-facing brush fields.
    ///
    /// Arrow is drawn as a line with an arrowhead. Color, size and
    /// simplification are left untouched.
    pub fn set_logical_mode(&mut self, mode: LogicalMode) {
        let (draw_mode, arrow_end) = mode.engine_encoding();
        self.mode = mode;
        self.brush.mode = draw_mode;
        self.brush.arrow_end = arrow_end;
        debug!("Logical mode set to {mode}");
    }

    pub fn logical_mode(&self) -> LogicalMode {
        self.mode
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    /// Sets the stroke width; non-positive and non-finite sizes are ignored.
    pub fn set_size(&mut self, size: f64) {
        if size.is_finite() && size > 0.0 {
            self.brush.size = size;
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // =========================================================================
    // Flags
    // =========================================================================

    pub fn flags(&self) -> UiFlags {
        self.flags
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.flags.enabled != enabled {
            debug!("Drawing {}", if enabled { "enabled" } else { "disabled" });
        }
        self.flags.enabled = enabled;
    }

    /// Applies an engine notification to the UI flags.
    ///
    /// A committed stroke (`End`) is also published to the current page when
    /// the local session is sending.
    pub fn on_engine_event(&mut self, event: EngineEvent) {
        if self.options.track_engine_state {
            match event {
                EngineEvent::Changed => {
                    self.flags.can_redo = self.engine.can_redo();
                    self.flags.can_undo = self.engine.can_undo();
                    self.flags.can_clear = self.engine.element_count() > 0;
                }
                EngineEvent::Start => self.flags.is_drawing = true,
                EngineEvent::End => self.flags.is_drawing = false,
            }
        }

        if event == EngineEvent::End {
            self.publish_current_page();
        }
    }

    /// Drains and applies everything the engine queued since the last call.
    pub(super) fn process_engine_events(&mut self) {
        for event in self.engine.take_events() {
            self.on_engine_event(event);
        }
    }

    // =========================================================================
    // Engine actions
    // =========================================================================

    /// Erases the engine and empties the stored content of the current page.
    ///
    /// A stroke in flight is abandoned along with everything else.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.sync
            .borrow_mut()
            .set_content(self.current_page.clone(), String::new());
        self.flags.is_drawing = false;
        self.process_engine_events();
    }

    /// Reverts the last stroke. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.engine.undo();
        self.process_engine_events();
        if undone {
            self.publish_current_page();
        }
        undone
    }

    /// Re-applies the last undone stroke.
    pub fn redo(&mut self) -> bool {
        let redone = self.engine.redo();
        self.process_engine_events();
        if redone {
            self.publish_current_page();
        }
        redone
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // =========================================================================
    // Pointer forwarding
    // =========================================================================

    /// Starts a stroke with the current brush. Ignored while drawing is disabled.
    pub fn pointer_down(&mut self, at: Point) {
        if !self.flags.enabled {
            return;
        }
        self.engine.begin_stroke(&self.brush, at);
        self.process_engine_events();
    }

    pub fn pointer_move(&mut self, to: Point) {
        if !self.flags.enabled {
            return;
        }
        self.engine.extend_stroke(to);
        self.process_engine_events();
    }

    pub fn pointer_up(&mut self) {
        self.engine.end_stroke();
        self.process_engine_events();
    }

    // =========================================================================
    // Pages and replication
    // =========================================================================

    pub fn current_page(&self) -> &PageId {
        &self.current_page
    }

    pub fn is_presenter(&self) -> bool {
        self.is_presenter
    }

    pub fn sync(&self) -> &SharedSyncState {
        &self.sync
    }

    /// Updates the local role and flips the replication direction to match.
    pub fn set_presenter(&mut self, is_presenter: bool) {
        self.is_presenter = is_presenter;
        self.sync.borrow_mut().set_role(is_presenter);
    }

    /// Switches to another page and loads its stored drawing.
    pub fn set_current_page(&mut self, page: PageId) {
        if page == self.current_page {
            return;
        }
        debug!("Switching drawing page {} -> {}", self.current_page, page);
        self.current_page = page;
        self.load_current_page();
    }

    /// Write path for the replication layer.
    ///
    /// Content is accepted only while receiving; it is stored for `page` and
    /// rendered immediately when `page` is the current page. Returns whether
    /// the content was accepted.
    pub fn apply_remote_content(&mut self, page: PageId, content: String) -> bool {
        if !self.sync.borrow().receive() {
            warn!("Ignoring remote drawing for page {page}: local session is not receiving");
            return false;
        }

        let is_current = page == self.current_page;
        self.sync.borrow_mut().set_content(page, content);
        if is_current {
            self.load_current_page();
        }
        true
    }

    fn load_current_page(&mut self) {
        let content = self
            .sync
            .borrow()
            .content(&self.current_page)
            .unwrap_or_default()
            .to_string();

        if let Err(err) = self.engine.load(&content) {
            warn!(
                "Discarding unreadable drawing for page {}: {}",
                self.current_page, err
            );
            self.engine.clear();
        }
        // A page switch abandons any stroke in flight.
        self.flags.is_drawing = false;
        self.process_engine_events();
    }

    fn publish_current_page(&mut self) {
        let mut sync = self.sync.borrow_mut();
        if sync.send() {
            sync.set_content(self.current_page.clone(), self.engine.dump());
        }
    }
}
