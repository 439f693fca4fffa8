//! In-memory drawing engine.

use super::brush::Brush;
use super::engine::{DrawingEngine, EngineError, EngineEvent};
use super::shape::{Point, Shape};
use log::debug;

/// Stroke being drawn while the pointer is down.
#[derive(Debug)]
struct ActiveStroke {
    brush: Brush,
    path: Vec<Point>,
}

/// Reference [`DrawingEngine`] keeping strokes in memory.
///
/// Holds the committed shapes in draw order (first = bottom layer) plus a redo
/// stack of undone shapes. Committing a new stroke discards the redo stack.
#[derive(Debug, Default)]
pub struct Sketchpad {
    shapes: Vec<Shape>,
    redo_stack: Vec<Shape>,
    active: Option<ActiveStroke>,
    events: Vec<EngineEvent>,
}

impl Sketchpad {
    /// Creates a new empty sketchpad with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns true while a stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.active.is_some()
    }

    fn emit(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

impl DrawingEngine for Sketchpad {
    fn clear(&mut self) {
        self.shapes.clear();
        self.redo_stack.clear();
        let abandoned = self.active.take().is_some();
        self.emit(EngineEvent::Changed);
        if abandoned {
            self.emit(EngineEvent::End);
        }
    }

    fn undo(&mut self) -> bool {
        match self.shapes.pop() {
            Some(shape) => {
                self.redo_stack.push(shape);
                self.emit(EngineEvent::Changed);
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(shape) => {
                self.shapes.push(shape);
                self.emit(EngineEvent::Changed);
                true
            }
            None => false,
        }
    }

    fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn element_count(&self) -> usize {
        self.shapes.len()
    }

    fn begin_stroke(&mut self, brush: &Brush, at: Point) {
        self.active = Some(ActiveStroke {
            brush: brush.clone(),
            path: vec![at],
        });
        self.emit(EngineEvent::Start);
    }

    fn extend_stroke(&mut self, to: Point) {
        if let Some(active) = self.active.as_mut() {
            if active.path.last() != Some(&to) {
                active.path.push(to);
            }
        }
    }

    fn end_stroke(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        match Shape::from_path(&active.brush, &active.path) {
            Some(shape) => {
                self.shapes.push(shape);
                self.redo_stack.clear();
                self.emit(EngineEvent::Changed);
            }
            None => debug!("Discarding degenerate {:?} stroke", active.brush.mode),
        }
        self.emit(EngineEvent::End);
    }

    fn dump(&self) -> String {
        if self.shapes.is_empty() {
            return String::new();
        }
        // Shapes hold only plain numbers, enums and hex colors.
        serde_json::to_string(&self.shapes).unwrap_or_default()
    }

    fn load(&mut self, content: &str) -> Result<(), EngineError> {
        let shapes = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(content).map_err(|e| EngineError::Malformed(e.to_string()))?
        };

        self.shapes = shapes;
        self.redo_stack.clear();
        self.active = None;
        self.emit(EngineEvent::Changed);
        Ok(())
    }

    fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}
