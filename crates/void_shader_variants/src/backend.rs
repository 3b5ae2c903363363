//! Graphics API abstraction
//!
//! The compiler talks to the native graphics API only through
//! [`GraphicsApi`]. All calls are expected to happen on the thread that owns
//! the graphics context, so implementations need not be `Send` or `Sync`.

use std::fmt;

use crate::source::ShaderStage;

/// Slot of an attribute or uniform inside a linked program
///
/// Names missing from a program (for example compiled out by a disabled
/// feature) resolve to [`Location::NOT_FOUND`]. That is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(i32);

impl Location {
    /// Sentinel for a name the program does not expose
    pub const NOT_FOUND: Self = Self(-1);

    /// Wrap the slot exactly as the graphics API reported it
    ///
    /// Any negative value reads as "not found".
    pub fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw slot value as reported
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Whether the program exposes this slot
    pub fn is_found(&self) -> bool {
        self.0 >= 0
    }

    /// Slot index if found
    pub fn index(&self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::NOT_FOUND
    }
}

impl From<Option<u32>> for Location {
    fn from(slot: Option<u32>) -> Self {
        slot.and_then(|slot| i32::try_from(slot).ok())
            .map_or(Self::NOT_FOUND, Self)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_found() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("not found")
        }
    }
}

/// Shader and program object lifecycle of the native graphics API
///
/// Failures are reported as the API's diagnostic text.
pub trait GraphicsApi {
    /// Compiled stage object
    type Stage: Copy + fmt::Debug;
    /// Program object
    type Program: Copy + fmt::Debug;

    /// Create an empty stage object
    fn create_stage(&self, stage: ShaderStage) -> Result<Self::Stage, String>;

    /// Upload `source` and compile it
    fn compile_stage(&self, stage: Self::Stage, source: &str) -> Result<(), String>;

    /// Release a stage object
    fn destroy_stage(&self, stage: Self::Stage);

    /// Create an empty program object
    fn create_program(&self) -> Result<Self::Program, String>;

    /// Attach a compiled stage to a program
    fn attach_stage(&self, program: Self::Program, stage: Self::Stage);

    /// Link the attached stages
    fn link_program(&self, program: Self::Program) -> Result<(), String>;

    /// Release a program object
    fn destroy_program(&self, program: Self::Program);

    /// Slot of a vertex attribute, [`Location::NOT_FOUND`] if absent
    fn attrib_location(&self, program: Self::Program, name: &str) -> Location;

    /// Slot of a uniform, [`Location::NOT_FOUND`] if absent
    fn uniform_location(&self, program: Self::Program, name: &str) -> Location;
}
