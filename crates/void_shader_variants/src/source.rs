//! Shader template loading
//!
//! Reads and writes the raw text of up to three shader stages. An empty
//! geometry text means the family has no geometry stage.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ShaderError;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderStage {
    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::Geometry => "geometry",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File paths of a shader family's stages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderPaths {
    /// Vertex stage path
    pub vertex: PathBuf,
    /// Fragment stage path
    pub fragment: PathBuf,
    /// Optional geometry stage path
    pub geometry: Option<PathBuf>,
}

impl ShaderPaths {
    /// Paths for a vertex + fragment family
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
            geometry: None,
        }
    }

    /// Add a geometry stage path
    pub fn with_geometry(mut self, geometry: impl Into<PathBuf>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Geometry path, if one was given and is non-empty
    pub fn geometry_path(&self) -> Option<&Path> {
        self.geometry
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// In-memory source text of a shader family
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
    /// Empty when the family has no geometry stage
    pub geometry: String,
}

impl ShaderSources {
    /// Sources without a geometry stage
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
            geometry: String::new(),
        }
    }

    /// Add a geometry stage
    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = geometry.into();
        self
    }

    /// Whether a geometry stage is present
    pub fn has_geometry(&self) -> bool {
        !self.geometry.is_empty()
    }

    /// Present stages in vertex, fragment, geometry order
    pub fn stages(&self) -> impl Iterator<Item = (ShaderStage, &str)> {
        [
            (ShaderStage::Vertex, self.vertex.as_str()),
            (ShaderStage::Fragment, self.fragment.as_str()),
            (ShaderStage::Geometry, self.geometry.as_str()),
        ]
        .into_iter()
        .filter(|(stage, text)| *stage != ShaderStage::Geometry || !text.is_empty())
    }
}

/// Read a stage as text
///
/// Templates are single-byte text. Bytes that are not valid UTF-8 are decoded
/// as Latin-1, so one stray byte in a comment does not reject the file.
fn read_stage(path: &Path) -> Result<String, ShaderError> {
    let bytes = std::fs::read(path).map_err(|e| ShaderError::io(path, e))?;
    Ok(decode_stage(bytes))
}

fn decode_stage(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

fn write_stage(path: &Path, text: &str) -> Result<(), ShaderError> {
    std::fs::write(path, text).map_err(|e| ShaderError::io(path, e))
}

/// Read the stage texts named by `paths`
///
/// Vertex and fragment are required. Geometry is read only when a non-empty
/// path is given, otherwise it is left empty. Nothing is cached.
pub fn load_sources(paths: &ShaderPaths) -> Result<ShaderSources, ShaderError> {
    let vertex = read_stage(&paths.vertex)?;
    let fragment = read_stage(&paths.fragment)?;
    let geometry = match paths.geometry_path() {
        Some(path) => read_stage(path)?,
        None => String::new(),
    };

    log::debug!(
        "Loaded shader sources {:?} / {:?} (geometry: {})",
        paths.vertex,
        paths.fragment,
        !geometry.is_empty()
    );

    Ok(ShaderSources {
        vertex,
        fragment,
        geometry,
    })
}

/// Write stage texts to `paths`
///
/// The geometry text is written only when it is non-empty and a geometry
/// path is given.
pub fn save_sources(sources: &ShaderSources, paths: &ShaderPaths) -> Result<(), ShaderError> {
    write_stage(&paths.vertex, &sources.vertex)?;
    write_stage(&paths.fragment, &sources.fragment)?;
    if let Some(path) = paths.geometry_path().filter(|_| sources.has_geometry()) {
        write_stage(path, &sources.geometry)?;
    }
    Ok(())
}
