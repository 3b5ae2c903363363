//! OpenGL backend over `glow`
//!
//! Enabled with the `glow` feature.

use glow::HasContext;

use crate::backend::{GraphicsApi, Location};
use crate::source::ShaderStage;

/// [`GraphicsApi`] backed by a `glow` OpenGL context
pub struct GlowApi<'a> {
    gl: &'a glow::Context,
}

impl<'a> GlowApi<'a> {
    /// Wrap a context
    ///
    /// # Safety
    ///
    /// `gl` must be current on the calling thread for as long as the
    /// returned value is used, and every call must come from that thread.
    pub unsafe fn new(gl: &'a glow::Context) -> Self {
        Self { gl }
    }

    fn shader_type(stage: ShaderStage) -> u32 {
        match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
            ShaderStage::Geometry => glow::GEOMETRY_SHADER,
        }
    }
}

// SAFETY (all methods): `GlowApi::new` requires a current context on the
// calling thread.
impl GraphicsApi for GlowApi<'_> {
    type Stage = glow::Shader;
    type Program = glow::Program;

    fn create_stage(&self, stage: ShaderStage) -> Result<Self::Stage, String> {
        unsafe { self.gl.create_shader(Self::shader_type(stage)) }
    }

    fn compile_stage(&self, stage: Self::Stage, source: &str) -> Result<(), String> {
        unsafe {
            self.gl.shader_source(stage, source);
            self.gl.compile_shader(stage);
            if self.gl.get_shader_compile_status(stage) {
                Ok(())
            } else {
                Err(self.gl.get_shader_info_log(stage))
            }
        }
    }

    fn destroy_stage(&self, stage: Self::Stage) {
        unsafe { self.gl.delete_shader(stage) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_stage(&self, program: Self::Program, stage: Self::Stage) {
        unsafe { self.gl.attach_shader(program, stage) }
    }

    fn link_program(&self, program: Self::Program) -> Result<(), String> {
        unsafe {
            self.gl.link_program(program);
            if self.gl.get_program_link_status(program) {
                Ok(())
            } else {
                Err(self.gl.get_program_info_log(program))
            }
        }
    }

    fn destroy_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Location {
        Location::from(unsafe { self.gl.get_attrib_location(program, name) })
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Location {
        let location = unsafe { self.gl.get_uniform_location(program, name) };
        Location::from(location.map(|location| location.0))
    }
}
