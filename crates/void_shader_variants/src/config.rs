//! Pipeline shader configuration
//!
//! Groups the feature flags with every family's parameter record. This is
//! where parameter values are checked before any specialization runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::params::{
    BlurShaderParams, BoneSystemMode, ColorShaderParams, CubemapShaderParams, DofBlurShaderParams,
    FeatureFlags, PositionOutput, ShadowShaderParams,
};
use crate::ShaderError;

/// Shader configuration of a rendering pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub flags: FeatureFlags,
    pub color: ColorShaderParams,
    pub shadow: ShadowShaderParams,
    pub dof_blur: DofBlurShaderParams,
    pub blur: BlurShaderParams,
    pub cubemap: CubemapShaderParams,
}

impl ShaderConfig {
    /// Parse a JSON configuration; missing sections take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ShaderError> {
        serde_json::from_str(json).map_err(|e| ShaderError::Config(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ShaderError::io(path, e))?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded shader configuration from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, ShaderError> {
        serde_json::to_string_pretty(self).map_err(|e| ShaderError::Config(e.to_string()))
    }

    /// Reject parameter combinations the templates cannot handle
    pub fn validate(&self) -> Result<(), ShaderError> {
        if self.dof_blur.blur_kernel_radius == 0 {
            return Err(ShaderError::Config(
                "dof_blur.blur_kernel_radius must be at least 1".to_string(),
            ));
        }

        if self.blur.blur_kernel_radius == 0 {
            return Err(ShaderError::Config(
                "blur.blur_kernel_radius must be at least 1".to_string(),
            ));
        }

        if self.flags.bone_system == BoneSystemMode::Enabled {
            if self.color.max_bone_attribs_per_vertex == 0 {
                return Err(ShaderError::Config(
                    "color.max_bone_attribs_per_vertex must be at least 1 with the bone system enabled"
                        .to_string(),
                ));
            }
            if self.shadow.max_bone_attribs_per_vertex == 0 {
                return Err(ShaderError::Config(
                    "shadow.max_bone_attribs_per_vertex must be at least 1 with the bone system enabled"
                        .to_string(),
                ));
            }
        }

        let cubemap = &self.cubemap;
        if cubemap.cubemap_color_output
            && cubemap.position_output != PositionOutput::None
            && cubemap.cubemap_color_out_color_component == cubemap.position_out_color_component
        {
            return Err(ShaderError::Config(format!(
                "cubemap color and position outputs share output component {}",
                cubemap.position_out_color_component
            )));
        }

        Ok(())
    }
}
