//! Feature flags and per-family shader parameters
//!
//! Flags apply to the whole pipeline; parameter records are scoped to one
//! shader family. Both are read-only once the pipeline is configured.

use serde::{Deserialize, Serialize};

/// Normal mapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMappingMode {
    #[default]
    Disabled,
    Enabled,
    /// Switchable at runtime through a uniform
    Dual,
}

/// Skeletal animation support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoneSystemMode {
    #[default]
    Disabled,
    Enabled,
}

/// Shadow mapping mode of the color pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMappingMode {
    #[default]
    Disabled,
    /// Single-sample shadows
    Simple,
    Enabled,
}

/// Light kind rendered by the shadow pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMappingType {
    #[default]
    Point,
    Directional,
}

/// Texture mapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureMappingMode {
    #[default]
    Disabled,
    Enabled,
    /// Switchable at runtime through a uniform
    Dual,
}

/// Lighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    Disabled,
    #[default]
    Enabled,
}

/// Light attenuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttenuationMode {
    #[default]
    Disabled,
    Enabled,
}

/// Screen-space reflections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsrMode {
    #[default]
    Disabled,
    Enabled,
}

/// Bloom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomMode {
    #[default]
    Disabled,
    Enabled,
}

/// How bloom is combined with the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomType {
    #[default]
    Add,
    Screen,
}

/// Pipeline-wide feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub normal_mapping: NormalMappingMode,
    pub bone_system: BoneSystemMode,
    pub shadow_mapping: ShadowMappingMode,
    pub shadow_mapping_type: ShadowMappingType,
    pub texture_mapping: TextureMappingMode,
    pub lighting: LightingMode,
    pub attenuation: AttenuationMode,
    pub ssr: SsrMode,
    pub bloom: BloomMode,
    pub bloom_type: BloomType,
}

/// Color (opaque) pass parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorShaderParams {
    pub max_bone_attribs_per_vertex: u32,
    pub max_bones: u32,
    /// Size of the point light uniform array
    pub max_point_lights: u32,
    /// Size of the directional light uniform array
    pub max_dir_lights: u32,
}

impl Default for ColorShaderParams {
    fn default() -> Self {
        Self {
            max_bone_attribs_per_vertex: 4,
            max_bones: 64,
            max_point_lights: 8,
            max_dir_lights: 8,
        }
    }
}

/// Shadow pass parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowShaderParams {
    pub max_bone_attribs_per_vertex: u32,
    pub max_bones: u32,
}

impl Default for ShadowShaderParams {
    fn default() -> Self {
        Self {
            max_bone_attribs_per_vertex: 4,
            max_bones: 64,
        }
    }
}

/// Depth of field algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DofAlgorithm {
    /// Thin-lens model (plane in focus, aperture, image distance)
    Cinematic,
    /// Linear ramp around a focal depth
    #[default]
    Linear,
    /// Sample a precomputed circle-of-confusion map
    FromCocMap,
}

/// Depth of field blur parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DofBlurShaderParams {
    pub algorithm: DofAlgorithm,
    pub bleeding_elimination_delta_z: bool,
    pub bleeding_elimination_delta_coc: bool,
    pub bleeding_elimination_focus_coc: bool,
    pub blur_kernel_radius: u32,
}

impl Default for DofBlurShaderParams {
    fn default() -> Self {
        Self {
            algorithm: DofAlgorithm::Linear,
            bleeding_elimination_delta_z: false,
            bleeding_elimination_delta_coc: false,
            bleeding_elimination_focus_coc: false,
            blur_kernel_radius: 4,
        }
    }
}

/// GLSL vector type by component count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorType {
    Float,
    Vec2,
    #[default]
    Vec3,
    Vec4,
}

impl VectorType {
    /// GLSL type name
    pub fn glsl_type(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
        }
    }
}

/// Texture channels read by a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureComponent {
    Red,
    Rg,
    #[default]
    Rgb,
    Rgba,
}

impl TextureComponent {
    /// GLSL swizzle selecting the channels
    pub fn swizzle(&self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Rg => "rg",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }
}

/// Separable blur parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurShaderParams {
    pub blur_kernel_radius: u32,
    /// Output vector type
    pub vecout: VectorType,
    /// Channels sampled from the input texture
    pub tex_component: TextureComponent,
}

impl Default for BlurShaderParams {
    fn default() -> Self {
        Self {
            blur_kernel_radius: 4,
            vecout: VectorType::Vec3,
            tex_component: TextureComponent::Rgb,
        }
    }
}

/// Position output of the cubemap pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionOutput {
    #[default]
    None,
    Cube,
    Sphere,
}

/// Cubemap pass parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CubemapShaderParams {
    /// Output attachment index for the cubemap color
    pub cubemap_color_out_color_component: u32,
    /// Output attachment index for positions
    pub position_out_color_component: u32,
    pub vecout: VectorType,
    pub cubemap_color_output: bool,
    pub position_output: PositionOutput,
}

impl Default for CubemapShaderParams {
    fn default() -> Self {
        Self {
            cubemap_color_out_color_component: 0,
            position_out_color_component: 1,
            vecout: VectorType::Vec3,
            cubemap_color_output: true,
            position_output: PositionOutput::None,
        }
    }
}
