//! Drawing engine interface consumed by the controller.

use super::brush::Brush;
use super::shape::Point;
use thiserror::Error;

/// Notifications emitted by a drawing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Stroke list mutated (commit, undo, redo, clear, load).
    Changed,
    /// A stroke began.
    Start,
    /// A stroke ended, committed or not.
    End,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed drawing content: {0}")]
    Malformed(String),
}

/// Vector-drawing engine operated by [`crate::controller::DrawingModeController`].
///
/// Engines queue [`EngineEvent`]s as they mutate; the controller drains them
/// with [`DrawingEngine::take_events`] after every call so flags stay in step
/// with the engine.
pub trait DrawingEngine {
    /// Erases all rendered strokes.
    fn clear(&mut self);

    /// Reverts the most recent stroke. Returns `false` when there is nothing to undo.
    fn undo(&mut self) -> bool;

    /// Re-applies the most recently undone stroke.
    fn redo(&mut self) -> bool;

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Number of currently rendered elements.
    fn element_count(&self) -> usize;

    /// Starts a stroke using the brush as it is at this instant.
    fn begin_stroke(&mut self, brush: &Brush, at: Point);

    fn extend_stroke(&mut self, to: Point);

    fn end_stroke(&mut self);

    /// Serializes the rendered strokes. An empty page serializes to `""`.
    fn dump(&self) -> String;

    /// Replaces the rendered strokes with serialized content.
    fn load(&mut self, content: &str) -> Result<(), EngineError>;

    /// Drains queued notifications in emission order.
    fn take_events(&mut self) -> Vec<EngineEvent>;
}
