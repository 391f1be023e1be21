/// OpenGlWindow - window, GL context and surface creation
///
/// Creates a winit window with a core-profile context of the requested
/// version, makes it current, loads the GL entry points through glow and
/// hands out a `GraphicsContext` for the shader pipeline.

use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;
use glutin::config::{Config as GlutinConfig, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Window};

use gl_starter::glstarter::render::{Config, GraphicsContext};
use gl_starter::glstarter::{Error, Result};
use gl_starter::{starter_error, starter_info, starter_warn};

use crate::opengl_graphics_device::OpenGlGraphicsDevice;

/// Window plus current GL context
pub struct OpenGlWindow {
    gl: Rc<glow::Context>,
    graphics_context: GraphicsContext,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    // Dropped last: the surface and context refer to it
    window: Window,
}

fn init_error(what: &str, e: impl std::fmt::Display) -> Error {
    starter_error!("glstarter::opengl", "{}: {}", what, e);
    Error::InitializationFailed(format!("{}: {}", what, e))
}

/// Config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = GlutinConfig> + '_>) -> GlutinConfig {
    configs
        .reduce(|best, config| if config.num_samples() > best.num_samples() { config } else { best })
        // find_configs reports an error instead of yielding nothing
        .expect("display returned an empty config list")
}

impl OpenGlWindow {
    /// Create the window and its GL context, current on this thread.
    pub fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes.clone()))
            .build(event_loop, template, pick_config)
            .map_err(|e| init_error("Failed to create GL display", e))?;

        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)
                .map_err(|e| init_error("Failed to create window", e))?,
        };

        let gl_display = gl_config.display();
        let raw_window_handle = window
            .window_handle()
            .map_err(|e| init_error("Failed to get window handle", e))?
            .as_raw();

        let (major, minor) = config.version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .with_debug(cfg!(feature = "gl-debug"))
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| init_error(&format!("Failed to create OpenGL {}.{} core context", major, minor), e))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| init_error("Failed to build surface attributes", e))?;
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| init_error("Failed to create window surface", e))?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .map_err(|e| init_error("Failed to make GL context current", e))?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = gl_surface.set_swap_interval(&gl_context, interval) {
            starter_warn!("glstarter::opengl", "Failed to set swap interval: {}", e);
        }

        #[allow(unused_mut)]
        let mut gl = unsafe { glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name)) };

        #[cfg(feature = "gl-debug")]
        crate::debug::install_debug_callback(&mut gl);

        let size = window.inner_size();
        unsafe {
            gl.viewport(0, 0, size.width as i32, size.height as i32);
            starter_info!(
                "glstarter::opengl",
                "OpenGL context ready: {} ({})",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        let gl = Rc::new(gl);
        let graphics_context = GraphicsContext::new(OpenGlGraphicsDevice::new(gl.clone()));

        Ok(Self {
            gl,
            graphics_context,
            gl_surface,
            gl_context,
            window,
        })
    }

    /// Context to build shaders with.
    pub fn graphics_context(&self) -> &GraphicsContext {
        &self.graphics_context
    }

    /// Raw glow context for draw calls outside the shader pipeline.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Framebuffer size in pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Resize the surface and viewport. Zero sizes (minimized) are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, w, h);
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };
    }

    /// Present the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| Error::BackendError(format!("Failed to swap buffers: {}", e)))
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Hide and grab the cursor for mouse look, or release it.
    pub fn set_cursor_captured(&self, captured: bool) {
        let result = if captured {
            self.window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Locked))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            starter_warn!("glstarter::opengl", "Cursor grab not supported: {}", e);
        }
        self.window.set_cursor_visible(!captured);
    }
}
