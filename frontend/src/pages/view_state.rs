use std::cell::{Cell, RefCell};

use shared::ViewOptions;

/// Identifies one `render` pass; responses carrying an outdated token are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToken(u64);

/// View options most recently requested for rendering, plus the render fence
#[derive(Debug, Default)]
pub struct ViewState {
    last_options: RefCell<Option<ViewOptions>>,
    generation: Cell<u64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `options` as the current view and open a new render pass
    pub fn begin_render(&self, options: &ViewOptions) -> RenderToken {
        self.last_options.replace(Some(options.clone()));
        self.advance()
    }

    pub fn is_current(&self, token: RenderToken) -> bool {
        self.generation.get() == token.0
    }

    /// Make every in-flight render stale without forgetting the last options
    pub fn invalidate(&self) {
        self.advance();
    }

    pub fn last_options(&self) -> Option<ViewOptions> {
        self.last_options.borrow().clone()
    }

    fn advance(&self) -> RenderToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RenderToken(next)
    }
}
