//! Stand-in scene renderer: rebuilds the garment uniforms on every change and
//! logs what a GPU renderer would upload.

use std::cell::Cell;
use std::rc::Rc;

use montiera_core::{GarmentUniforms, ResolvedColors, Selection, SelectionObserver};

#[derive(Debug, Default)]
pub struct SceneLog {
    frames: Rc<Cell<u64>>,
}

impl SceneLog {
    /// Shared redraw count, still readable once the log is boxed into a session.
    pub fn frame_counter(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.frames)
    }
}

impl SelectionObserver for SceneLog {
    fn selection_changed(&mut self, selection: &Selection, colors: &ResolvedColors) {
        let frame = self.frames.get() + 1;
        self.frames.set(frame);
        let uniforms = GarmentUniforms::from_resolved(colors);
        tracing::info!(
            frame,
            preset = selection.preset.name().unwrap_or("custom"),
            suit = %colors.suit,
            shirt = %colors.shirt,
            accent = %colors.accent,
            uniform_bytes = uniforms.as_bytes().len(),
            "redraw"
        );
    }
}
