/// GraphicsContext - explicit owner of the active graphics device
///
/// Every component that talks to the GPU receives a `GraphicsContext`
/// instead of reaching for a process-wide handle. Clones share the same
/// device. The context is deliberately `!Send`: GL calls are only valid
/// on the thread that made the context current.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::graphics_device::GraphicsDevice;

/// Shared, single-thread handle to the graphics device
#[derive(Clone)]
pub struct GraphicsContext {
    device: Rc<RefCell<dyn GraphicsDevice>>,
}

impl GraphicsContext {
    /// Take ownership of a device.
    pub fn new<D: GraphicsDevice + 'static>(device: D) -> Self {
        Self {
            device: Rc::new(RefCell::new(device)),
        }
    }

    /// Borrow the device for one call sequence.
    ///
    /// Do not hold the returned guard across code that may drop a
    /// `Program` or a stage object: their `Drop` borrows the device too.
    pub fn device(&self) -> RefMut<'_, dyn GraphicsDevice> {
        self.device.borrow_mut()
    }

    /// Number of live clones of this context (including `self`).
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.device)
    }
}

impl std::fmt::Debug for GraphicsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsContext")
            .field("handles", &self.handle_count())
            .finish()
    }
}
