/*!
# GL Starter

Minimal OpenGL rendering bootstrap: shader loading with stage macros and
`#include` expansion, program building with stage-tagged diagnostics,
uniform binding, and a first-person camera with frustum construction.

## Architecture

- **GraphicsDevice**: the GPU driver calls the core issues (trait)
- **GraphicsContext**: explicit, single-thread owner of the active device
- **ShaderSource** / **preprocess**: file loading and source preprocessing
- **build_program** / **Program**: compile, link, RAII release
- **Shader**: load + preprocess + build in one call, typed uniform setters
- **Camera** / **Frustum**: first-person camera and its six culling planes

Backends (OpenGL via `glow`) implement `GraphicsDevice` in their own crate.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics_device;
pub mod shader;
pub mod camera;

// Main glstarter namespace module
pub mod glstarter {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and entry points used by the macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            log, log_detailed, set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Render sub-module: device seam and context
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
