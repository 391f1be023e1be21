/// Graphics device module - the GPU driver seam and the context that owns it

// Module declarations
pub mod graphics_device;
pub mod shader;
pub mod uniform;
pub mod context;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use shader::*;
pub use uniform::*;
pub use context::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
