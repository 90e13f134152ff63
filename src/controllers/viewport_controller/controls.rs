/// Which interaction keys are held during one display tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportControlsSnapshot {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportAction {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

impl ViewportControlsSnapshot {
    /// At most one action per tick; earlier fields win.
    #[must_use]
    pub fn action(&self) -> Option<ViewportAction> {
        if self.zoom_in {
            Some(ViewportAction::ZoomIn)
        } else if self.zoom_out {
            Some(ViewportAction::ZoomOut)
        } else if self.left {
            Some(ViewportAction::PanLeft)
        } else if self.right {
            Some(ViewportAction::PanRight)
        } else if self.up {
            Some(ViewportAction::PanUp)
        } else if self.down {
            Some(ViewportAction::PanDown)
        } else {
            None
        }
    }
}
