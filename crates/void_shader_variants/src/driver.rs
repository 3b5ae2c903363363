//! Program compilation and linking
//!
//! Turns specialized sources into a linked program through a
//! [`GraphicsApi`]. Stage objects are owned here until they are linked or
//! released.

use crate::backend::GraphicsApi;
use crate::source::ShaderSources;
use crate::ShaderError;

/// Compile every present stage of `sources`
///
/// Vertex and fragment are always compiled, geometry only when non-empty.
/// On failure every stage object created so far is destroyed and the
/// compiler's diagnostic is returned unmodified.
pub fn compile_stages<A: GraphicsApi>(
    api: &A,
    sources: &ShaderSources,
) -> Result<Vec<A::Stage>, ShaderError> {
    let mut stages = Vec::with_capacity(3);

    for (kind, text) in sources.stages() {
        let stage = match api.create_stage(kind) {
            Ok(stage) => stage,
            Err(e) => {
                release(api, &stages);
                return Err(ShaderError::Backend(format!(
                    "failed to create {} shader: {}",
                    kind, e
                )));
            }
        };

        if let Err(diagnostic) = api.compile_stage(stage, text) {
            log::error!("Failed to compile {} shader: {}", kind, diagnostic);
            api.destroy_stage(stage);
            release(api, &stages);
            return Err(ShaderError::Compile {
                stage: kind,
                log: diagnostic,
            });
        }

        log::trace!("Compiled {} shader {:?}", kind, stage);
        stages.push(stage);
    }

    Ok(stages)
}

/// Link `stages` into a new program
///
/// The stages stay owned by the caller. A program that fails to link is
/// destroyed.
pub fn link_program<A: GraphicsApi>(
    api: &A,
    stages: &[A::Stage],
) -> Result<A::Program, ShaderError> {
    let program = api.create_program().map_err(ShaderError::Backend)?;

    for &stage in stages {
        api.attach_stage(program, stage);
    }

    match api.link_program(program) {
        Ok(()) => {
            log::debug!("Linked program {:?} from {} stages", program, stages.len());
            Ok(program)
        }
        Err(diagnostic) => {
            log::error!("Failed to link program: {}", diagnostic);
            api.destroy_program(program);
            Err(ShaderError::Link { log: diagnostic })
        }
    }
}

/// Link `stages` into a new program and release them
///
/// Stages are destroyed whether or not linking succeeds.
pub fn link_program_releasing<A: GraphicsApi>(
    api: &A,
    stages: Vec<A::Stage>,
) -> Result<A::Program, ShaderError> {
    let result = link_program(api, &stages);
    release(api, &stages);
    result
}

/// Compile and link `sources`, optionally releasing the stage objects
pub fn build_program<A: GraphicsApi>(
    api: &A,
    sources: &ShaderSources,
    release_stages: bool,
) -> Result<A::Program, ShaderError> {
    let stages = compile_stages(api, sources)?;
    if release_stages {
        link_program_releasing(api, stages)
    } else {
        link_program(api, &stages)
    }
}

fn release<A: GraphicsApi>(api: &A, stages: &[A::Stage]) {
    for &stage in stages {
        api.destroy_stage(stage);
    }
}
