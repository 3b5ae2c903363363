//! Preprocessor define composition
//!
//! Builds the ordered `#define` block that replaces the definitions marker
//! in a template stage.

use crate::SHADER_DEFINITIONS_MARKER;

/// Shader preprocessor define
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderDefine {
    /// Define name
    pub name: String,
    /// Optional value (None = just defined, Some = value)
    pub value: Option<String>,
}

impl ShaderDefine {
    /// Create a simple define (no value)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Create a define with a value
    pub fn with_value(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: Some(value.to_string()),
        }
    }

    /// Convert to preprocessor directive
    pub fn to_directive(&self) -> String {
        if let Some(value) = &self.value {
            format!("#define {} {}", self.name, value)
        } else {
            format!("#define {}", self.name)
        }
    }
}

/// Ordered block of defines
///
/// Order is significant: later directives may rely on earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefineBlock {
    defines: Vec<ShaderDefine>,
}

impl DefineBlock {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flag define
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.defines.push(ShaderDefine::new(name));
        self
    }

    /// Append a flag define only when `enabled`
    pub fn flag_if(self, enabled: bool, name: impl Into<String>) -> Self {
        if enabled {
            self.flag(name)
        } else {
            self
        }
    }

    /// Append an optional flag define
    pub fn flag_opt(self, name: Option<&str>) -> Self {
        match name {
            Some(name) => self.flag(name),
            None => self,
        }
    }

    /// Append a valued define
    pub fn value(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.defines.push(ShaderDefine::with_value(name, value));
        self
    }

    /// Defines in order
    pub fn defines(&self) -> &[ShaderDefine] {
        &self.defines
    }

    /// Number of defines
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    /// Whether the block has no defines
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }

    /// Render the block, one newline-terminated directive per define
    pub fn render(&self) -> String {
        let mut block = String::new();
        for define in &self.defines {
            block.push_str(&define.to_directive());
            block.push('\n');
        }
        block
    }

    /// Replace the first definitions marker in `source` with this block
    ///
    /// A source without the marker is returned unchanged.
    pub fn apply(&self, source: &str) -> String {
        if source.contains(SHADER_DEFINITIONS_MARKER) {
            source.replacen(SHADER_DEFINITIONS_MARKER, &self.render(), 1)
        } else {
            source.to_string()
        }
    }
}
