//! GL Starter demo: one triangle, one annotated shader, a first-person camera.
//!
//! Controls: click to capture the mouse, WASD to move, mouse to look,
//! Escape to release the mouse or quit.

use std::collections::HashSet;
use std::time::Instant;

use gl_starter::glam::{Mat4, Vec3};
use gl_starter::glstarter::camera::{Camera, CameraControllerFirstPerson, CameraMovement};
use gl_starter::glstarter::render::Config;
use gl_starter::glstarter::shader::{ProgramKind, Shader};
use gl_starter::glstarter::Result;
use gl_starter::{starter_error, starter_info};
use gl_starter_renderer_opengl::glow::{self, HasContext};
use gl_starter_renderer_opengl::OpenGlWindow;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

const SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/example.glsl");

#[rustfmt::skip]
const TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0, // left
     0.5, -0.5, 0.0, // right
     0.0,  0.5, 0.0, // top
];

// ============================================================================
// GPU geometry
// ============================================================================

struct Triangle {
    vertex_array: glow::NativeVertexArray,
    vertex_buffer: glow::NativeBuffer,
}

impl Triangle {
    fn new(gl: &glow::Context) -> Result<Self> {
        let backend = |what: &str, e: String| gl_starter::starter_err!("glstarter::demo", "Failed to create {}: {}", what, e);
        unsafe {
            let vertex_array = gl.create_vertex_array().map_err(|e| backend("vertex array", e))?;
            let vertex_buffer = gl.create_buffer().map_err(|e| backend("vertex buffer", e))?;

            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice::<f32, u8>(&TRIANGLE), glow::STATIC_DRAW);

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 3 * std::mem::size_of::<f32>() as i32, 0);
            gl.enable_vertex_attrib_array(0);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            Ok(Self { vertex_array, vertex_buffer })
        }
    }

    fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
            gl.bind_vertex_array(None);
        }
    }

    fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vertex_array);
            gl.delete_buffer(self.vertex_buffer);
        }
    }
}

// ============================================================================
// Scene state (exists while the window does)
// ============================================================================

struct Scene {
    triangle: Triangle,
    shader: Shader,
    camera: Camera,
    controller: CameraControllerFirstPerson,
    pressed: HashSet<KeyCode>,
    mouse_captured: bool,
    last_frame: Instant,
    started: Instant,
    // Last field: GL objects above are released while the context is alive
    window: OpenGlWindow,
}

impl Scene {
    fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let window = OpenGlWindow::new(event_loop, config)?;
        let shader = Shader::from_annotated_file(window.graphics_context(), SHADER_PATH, ProgramKind::Graphics)?;
        let triangle = Triangle::new(window.gl())?;

        let (width, height) = window.size();
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), width as f32, height as f32);

        Ok(Self {
            triangle,
            shader,
            camera,
            controller: CameraControllerFirstPerson::default(),
            pressed: HashSet::new(),
            mouse_captured: false,
            last_frame: Instant::now(),
            started: Instant::now(),
            window,
        })
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let bindings = [
            (KeyCode::KeyW, CameraMovement::Forward),
            (KeyCode::KeyS, CameraMovement::Backward),
            (KeyCode::KeyA, CameraMovement::Left),
            (KeyCode::KeyD, CameraMovement::Right),
        ];
        for (key, movement) in bindings {
            if self.pressed.contains(&key) {
                self.controller.process_keyboard(&mut self.camera, movement, delta_time);
            }
        }
    }

    fn render(&self) -> Result<()> {
        let gl = self.window.gl();
        unsafe {
            gl.clear_color(0.2, 0.3, 0.3, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        let time = self.started.elapsed().as_secs_f32();
        self.shader.use_program();
        self.shader.set_mat4("u_model", &Mat4::from_rotation_y(time * 0.5));
        self.shader.set_mat4("u_view_projection", &self.camera.view_projection_matrix());
        self.shader.set_vec3("u_tint", Vec3::new(1.0, 0.8, 0.6));
        self.triangle.draw(gl);

        self.window.swap_buffers()
    }

    fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
        self.window.set_cursor_captured(captured);
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.triangle.destroy(self.window.gl());
    }
}

// ============================================================================
// Application
// ============================================================================

struct App {
    config: Config,
    scene: Option<Scene>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_some() {
            return;
        }
        match Scene::new(event_loop, &self.config) {
            Ok(scene) => {
                starter_info!("glstarter::demo", "Scene ready");
                scene.window.request_redraw();
                self.scene = Some(scene);
            }
            Err(e) => {
                starter_error!("glstarter::demo", "Failed to start: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                scene.window.resize(size.width, size.height);
                scene.camera.set_viewport_size(size.width as f32, size.height as f32);
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                scene.set_mouse_captured(true);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                match (code, event.state) {
                    (KeyCode::Escape, ElementState::Pressed) if scene.mouse_captured => scene.set_mouse_captured(false),
                    (KeyCode::Escape, ElementState::Pressed) => event_loop.exit(),
                    (_, ElementState::Pressed) => {
                        scene.pressed.insert(code);
                    }
                    (_, ElementState::Released) => {
                        scene.pressed.remove(&code);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                scene.update();
                if let Err(e) = scene.render() {
                    starter_error!("glstarter::demo", "{}", e);
                    event_loop.exit();
                    return;
                }
                scene.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if scene.mouse_captured {
                // Screen y grows downwards, pitch grows upwards
                scene.controller.process_mouse_movement(&mut scene.camera, dx as f32, -dy as f32, true);
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.scene = None;
    }
}

fn main() {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            starter_error!("glstarter::demo", "Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let config = Config {
        title: "Example window".to_string(),
        ..Config::default()
    };
    let mut app = App { config, scene: None };

    if let Err(e) = event_loop.run_app(&mut app) {
        starter_error!("glstarter::demo", "Event loop terminated with error: {}", e);
        std::process::exit(1);
    }
}
