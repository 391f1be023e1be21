/*!
# GL Starter - OpenGL Backend

OpenGL implementation of the gl_starter `GraphicsDevice` trait.

This crate uses glow for the GL bindings and glutin/winit for window and
context creation. The context it creates is current on the thread that
created it, and every GL call made through it must stay on that thread.
*/

mod opengl_graphics_device;
mod opengl_window;
mod debug;

pub use opengl_graphics_device::OpenGlGraphicsDevice;
pub use opengl_window::OpenGlWindow;

// Re-export debug utilities
pub use debug::{debug_message_stats, DebugMessageStats};

// Re-export the GL bindings so callers can issue draw calls
pub use glow;
