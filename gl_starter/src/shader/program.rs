/// Program - owned GPU program object

use crate::graphics_device::{GraphicsContext, ProgramHandle};

/// Linked GPU program
///
/// Owns the driver handle and releases it when dropped. Uniform writes
/// live in `uniform.rs`.
pub struct Program {
    handle: ProgramHandle,
    context: GraphicsContext,
}

impl Program {
    pub(crate) fn from_handle(context: GraphicsContext, handle: ProgramHandle) -> Self {
        Self { handle, context }
    }

    /// Driver handle.
    pub fn handle(&self) -> ProgramHandle {
        self.handle
    }

    /// Driver handle as a raw integer.
    pub fn id(&self) -> u32 {
        self.handle.0
    }

    /// Context the program was created in.
    pub fn context(&self) -> &GraphicsContext {
        &self.context
    }

    /// Make this program current for draw/dispatch calls.
    pub fn use_program(&self) {
        self.context.device().use_program(Some(self.handle));
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        crate::starter_debug!("glstarter::shader", "Releasing program {}", self.handle);
        self.context.device().delete_program(self.handle);
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program").field("handle", &self.handle).finish()
    }
}
