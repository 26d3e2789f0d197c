//! Windowless host
//!
//! Replays a script of held controls, one entry per frame, and records what
//! would have been drawn. Used by the native binary and by tests.

use crate::error::HostError;
use crate::game::{Host, WindowConfig};
use crate::renderer::{DrawCommand, DrawList};

use super::input::HeldControls;

#[derive(Debug, Default)]
pub struct HeadlessHost {
    script: Vec<HeldControls>,
    cursor: usize,
    controls: HeldControls,
    canvas: DrawList,
    last_frame: Vec<DrawCommand>,
    init_error: Option<String>,
    window: Option<WindowConfig>,
}

impl HeadlessHost {
    /// Run one frame per script entry, then close
    pub fn scripted(script: Vec<HeldControls>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Run `frames` frames with nothing held
    pub fn idle(frames: usize) -> Self {
        Self::scripted(vec![HeldControls::new(); frames])
    }

    /// A host whose window never opens
    pub fn failing(reason: &str) -> Self {
        Self {
            init_error: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Commands presented by the most recent frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Window requested at init
    pub fn window(&self) -> Option<&WindowConfig> {
        self.window.as_ref()
    }
}

impl Host for HeadlessHost {
    type Controls = HeldControls;
    type Canvas = DrawList;

    fn init(&mut self, window: &WindowConfig) -> Result<(), HostError> {
        if let Some(reason) = &self.init_error {
            return Err(HostError::Init(reason.clone()));
        }
        log::debug!("Headless window {:?}", window);
        self.window = Some(window.clone());
        Ok(())
    }

    fn begin_frame(&mut self) {
        if let Some(controls) = self.script.get(self.cursor) {
            self.controls = controls.clone();
        }
        self.cursor += 1;
        self.canvas.clear();
    }

    fn controls(&self) -> &HeldControls {
        &self.controls
    }

    fn canvas(&mut self) -> &mut DrawList {
        &mut self.canvas
    }

    fn end_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.canvas.commands);
    }

    fn quit_requested(&self) -> bool {
        self.cursor > self.script.len()
    }
}
