//! # Void Shader Variants
//!
//! Shader variant compiler for Void Engine providing:
//! - Loading of vertex/fragment/geometry GLSL templates
//! - Define-based specialization of each shader family
//! - Program compilation and linking through a [`GraphicsApi`]
//! - Per-family attribute/uniform location tables
//!
//! ## Architecture
//!
//! ```text
//! Template Files ──► Loader ──► Specializer ──► Driver ──► Linked Program
//!                                   ▲                          │
//!                        ShaderConfig (flags, params)          ▼
//!                                                       Location Resolver ──► Location Table
//! ```
//!
//! Each template stage carries a single [`SHADER_DEFINITIONS_MARKER`] which the
//! specializer replaces with a block of `#define` lines derived from the
//! pipeline configuration.

pub mod backend;
pub mod builder;
pub mod config;
pub mod defines;
pub mod driver;
#[cfg(all(feature = "glow", not(target_arch = "wasm32")))]
pub mod glow_api;
pub mod locations;
pub mod names;
pub mod params;
pub mod source;
pub mod specialize;

pub use backend::{GraphicsApi, Location};
pub use builder::{ShaderBuilder, ShaderFamily, ShaderProgram};
pub use config::ShaderConfig;
pub use defines::{DefineBlock, ShaderDefine};
pub use driver::{build_program, compile_stages, link_program, link_program_releasing};
pub use locations::{
    BlendLocations, BloomSearchLocations, BlurLocations, ColorLocations, CubemapLocations,
    DirLightLocations, DofBlurLocations, DofCocLocations, DofLocations, PointLightLocations,
    ShadowLocations, SsrLocations,
};
pub use params::{
    AttenuationMode, BloomMode, BloomType, BlurShaderParams, BoneSystemMode, ColorShaderParams,
    CubemapShaderParams, DofAlgorithm, DofBlurShaderParams, FeatureFlags, LightingMode,
    NormalMappingMode, PositionOutput, ShadowMappingMode, ShadowMappingType, ShadowShaderParams,
    SsrMode, TextureComponent, TextureMappingMode, VectorType,
};
pub use source::{load_sources, save_sources, ShaderPaths, ShaderSources, ShaderStage};
pub use specialize::DirectionalPair;

use std::path::PathBuf;
use thiserror::Error;

/// Placeholder replaced by the generated definitions in every template stage
pub const SHADER_DEFINITIONS_MARKER: &str = "#algdef";

/// Errors from the shader variant pipeline
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to access shader file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("Program link failed: {log}")]
    Link { log: String },

    #[error("Graphics backend error: {0}")]
    Backend(String),

    #[error("Invalid shader configuration: {0}")]
    Config(String),
}

impl ShaderError {
    /// Wrap an I/O error with the path it concerns
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
