//! Per-family shader specialization
//!
//! Each family replaces the definitions marker of its template stages with a
//! block of defines derived from the feature flags and its parameter record.
//! These functions are pure and never fail; parameter validation happens in
//! [`ShaderConfig::validate`](crate::ShaderConfig::validate).

use crate::defines::DefineBlock;
use crate::params::{
    AttenuationMode, BloomMode, BloomType, BlurShaderParams, BoneSystemMode, ColorShaderParams,
    CubemapShaderParams, DofAlgorithm, DofBlurShaderParams, FeatureFlags, LightingMode,
    NormalMappingMode, PositionOutput, ShadowMappingMode, ShadowMappingType, ShadowShaderParams,
    SsrMode, TextureMappingMode,
};
use crate::source::ShaderSources;

/// Horizontal/vertical pair of a separable pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalPair<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> DirectionalPair<T> {
    /// Both halves, horizontal first
    pub fn into_array(self) -> [T; 2] {
        [self.horizontal, self.vertical]
    }
}

fn normal_mapping(mode: NormalMappingMode) -> &'static str {
    match mode {
        NormalMappingMode::Enabled => "ALGINE_NORMAL_MAPPING_MODE_ENABLED",
        NormalMappingMode::Dual => "ALGINE_NORMAL_MAPPING_MODE_DUAL",
        NormalMappingMode::Disabled => "ALGINE_NORMAL_MAPPING_MODE_DISABLED",
    }
}

fn bone_system(mode: BoneSystemMode) -> &'static str {
    match mode {
        BoneSystemMode::Enabled => "ALGINE_BONE_SYSTEM_ENABLED",
        BoneSystemMode::Disabled => "ALGINE_BONE_SYSTEM_DISABLED",
    }
}

fn shadow_mapping(mode: ShadowMappingMode) -> &'static str {
    match mode {
        ShadowMappingMode::Enabled => "ALGINE_SHADOW_MAPPING_MODE_ENABLED",
        ShadowMappingMode::Simple => "ALGINE_SHADOW_MAPPING_MODE_SIMPLE",
        ShadowMappingMode::Disabled => "ALGINE_SHADOW_MAPPING_MODE_DISABLED",
    }
}

fn shadow_mapping_type(kind: ShadowMappingType) -> &'static str {
    match kind {
        ShadowMappingType::Point => "ALGINE_SHADOW_MAPPING_TYPE_POINT_LIGHTING",
        ShadowMappingType::Directional => "ALGINE_SHADOW_MAPPING_TYPE_DIR_LIGHTING",
    }
}

fn texture_mapping(mode: TextureMappingMode) -> &'static str {
    match mode {
        TextureMappingMode::Enabled => "ALGINE_TEXTURE_MAPPING_MODE_ENABLED",
        TextureMappingMode::Dual => "ALGINE_TEXTURE_MAPPING_MODE_DUAL",
        TextureMappingMode::Disabled => "ALGINE_TEXTURE_MAPPING_MODE_DISABLED",
    }
}

fn lighting(mode: LightingMode) -> &'static str {
    match mode {
        LightingMode::Enabled => "ALGINE_LIGHTING_MODE_ENABLED",
        LightingMode::Disabled => "ALGINE_LIGHTING_MODE_DISABLED",
    }
}

fn attenuation(mode: AttenuationMode) -> &'static str {
    match mode {
        AttenuationMode::Enabled => "ALGINE_ATTENUATION_MODE_ENABLED",
        AttenuationMode::Disabled => "ALGINE_ATTENUATION_MODE_DISABLED",
    }
}

fn ssr(mode: SsrMode) -> &'static str {
    match mode {
        SsrMode::Enabled => "ALGINE_SSR_MODE_ENABLED",
        SsrMode::Disabled => "ALGINE_SSR_MODE_DISABLED",
    }
}

fn bloom(mode: BloomMode) -> &'static str {
    match mode {
        BloomMode::Enabled => "ALGINE_BLOOM_ENABLED",
        BloomMode::Disabled => "ALGINE_BLOOM_DISABLED",
    }
}

fn bloom_type(kind: BloomType) -> &'static str {
    match kind {
        BloomType::Add => "ALGINE_BLOOM_TYPE_ADD",
        BloomType::Screen => "ALGINE_BLOOM_TYPE_SCREEN",
    }
}

fn dof_algorithm(algorithm: DofAlgorithm) -> &'static str {
    match algorithm {
        DofAlgorithm::Cinematic => "ALGINE_CINEMATIC_DOF",
        DofAlgorithm::Linear => "ALGINE_LINEAR_DOF",
        DofAlgorithm::FromCocMap => "ALGINE_DOF_FROM_COC_MAP",
    }
}

fn position_output(output: PositionOutput) -> Option<&'static str> {
    match output {
        PositionOutput::Cube => Some("ALGINE_CUBE_POSITIONS"),
        PositionOutput::Sphere => Some("ALGINE_SPHERE_POSITIONS"),
        PositionOutput::None => None,
    }
}

const HORIZONTAL: &str = "ALGINE_HORIZONTAL";
const VERTICAL: &str = "ALGINE_VERTICAL";

/// Color (opaque geometry) pass
pub fn color_shader(
    sources: &ShaderSources,
    flags: &FeatureFlags,
    params: &ColorShaderParams,
) -> ShaderSources {
    let vertex = DefineBlock::new()
        .flag(normal_mapping(flags.normal_mapping))
        .flag(bone_system(flags.bone_system))
        .value("MAX_BONE_ATTRIBS_PER_VERTEX", params.max_bone_attribs_per_vertex)
        .value("MAX_BONES", params.max_bones);

    let fragment = DefineBlock::new()
        .flag(normal_mapping(flags.normal_mapping))
        .flag(shadow_mapping(flags.shadow_mapping))
        .flag(texture_mapping(flags.texture_mapping))
        .flag(lighting(flags.lighting))
        .flag(attenuation(flags.attenuation))
        .flag(ssr(flags.ssr))
        .value("MAX_POINT_LIGHTS_COUNT", params.max_point_lights)
        .value("MAX_DIR_LIGHTS_COUNT", params.max_dir_lights);

    ShaderSources {
        vertex: vertex.apply(&sources.vertex),
        fragment: fragment.apply(&sources.fragment),
        geometry: sources.geometry.clone(),
    }
}

/// Shadow map pass; the geometry stage, if any, is left as loaded
pub fn shadow_shader(
    sources: &ShaderSources,
    flags: &FeatureFlags,
    params: &ShadowShaderParams,
) -> ShaderSources {
    let vertex = DefineBlock::new()
        .flag(bone_system(flags.bone_system))
        .flag(shadow_mapping_type(flags.shadow_mapping_type))
        .value("MAX_BONE_ATTRIBS_PER_VERTEX", params.max_bone_attribs_per_vertex)
        .value("MAX_BONES", params.max_bones);

    let fragment = DefineBlock::new().flag(shadow_mapping_type(flags.shadow_mapping_type));

    ShaderSources {
        vertex: vertex.apply(&sources.vertex),
        fragment: fragment.apply(&sources.fragment),
        geometry: sources.geometry.clone(),
    }
}

/// Separable depth of field blur
///
/// Both variants share the vertex stage verbatim. The horizontal fragment is
/// the vertical one with `ALGINE_HORIZONTAL` appended to the block.
pub fn dof_blur_shader(
    sources: &ShaderSources,
    params: &DofBlurShaderParams,
) -> DirectionalPair<ShaderSources> {
    let vertical = DefineBlock::new()
        .flag(dof_algorithm(params.algorithm))
        .flag_if(params.bleeding_elimination_delta_z, "ALGINE_BLEEDING_ELIM_DZ")
        .flag_if(params.bleeding_elimination_delta_coc, "ALGINE_BLEEDING_ELIM_DCOC")
        .flag_if(params.bleeding_elimination_focus_coc, "ALGINE_BLEEDING_ELIM_FCOC")
        .value("KERNEL_RADIUS", params.blur_kernel_radius);
    let horizontal = vertical.clone().flag(HORIZONTAL);

    directional_pair(sources, &horizontal, &vertical)
}

/// Circle-of-confusion map pass
///
/// Only distinguishes cinematic from linear; a CoC-map source falls to linear.
pub fn dof_coc_shader(sources: &ShaderSources, params: &DofBlurShaderParams) -> ShaderSources {
    let algorithm = match params.algorithm {
        DofAlgorithm::Cinematic => DofAlgorithm::Cinematic,
        DofAlgorithm::Linear | DofAlgorithm::FromCocMap => DofAlgorithm::Linear,
    };
    let fragment = DefineBlock::new().flag(dof_algorithm(algorithm));

    ShaderSources {
        fragment: fragment.apply(&sources.fragment),
        ..sources.clone()
    }
}

/// Tone mapping / bloom blend pass
pub fn blend_shader(sources: &ShaderSources, flags: &FeatureFlags) -> ShaderSources {
    let fragment = DefineBlock::new()
        .flag(bloom(flags.bloom))
        .flag(bloom_type(flags.bloom_type));

    ShaderSources {
        fragment: fragment.apply(&sources.fragment),
        ..sources.clone()
    }
}

/// Screen-space reflections pass (no definitions)
pub fn ssr_shader(sources: &ShaderSources) -> ShaderSources {
    sources.clone()
}

/// Bloom bright-pixel search pass (no definitions)
pub fn bloom_search_shader(sources: &ShaderSources) -> ShaderSources {
    sources.clone()
}

/// Separable Gaussian blur
pub fn blur_shader(
    sources: &ShaderSources,
    params: &BlurShaderParams,
) -> DirectionalPair<ShaderSources> {
    let base = DefineBlock::new()
        .value("KERNEL_RADIUS", params.blur_kernel_radius)
        .value("vecout", params.vecout.glsl_type())
        .value("texComponent", params.tex_component.swizzle());
    let horizontal = base.clone().flag(HORIZONTAL);
    let vertical = base.flag(VERTICAL);

    directional_pair(sources, &horizontal, &vertical)
}

/// Shared vertex stage, per-direction fragment blocks
fn directional_pair(
    sources: &ShaderSources,
    horizontal: &DefineBlock,
    vertical: &DefineBlock,
) -> DirectionalPair<ShaderSources> {
    let variant = |block: &DefineBlock| {
        ShaderSources::new(sources.vertex.clone(), block.apply(&sources.fragment))
    };

    DirectionalPair {
        horizontal: variant(horizontal),
        vertical: variant(vertical),
    }
}

/// Skybox / environment cubemap pass
pub fn cubemap_shader(sources: &ShaderSources, params: &CubemapShaderParams) -> ShaderSources {
    let fragment = DefineBlock::new()
        .value(
            "ALGINE_CUBEMAP_COLOR_OUT_COLOR_COMPONENT",
            params.cubemap_color_out_color_component,
        )
        .value(
            "ALGINE_POS_OUT_COLOR_COMPONENT",
            params.position_out_color_component,
        )
        .value("vecout", params.vecout.glsl_type())
        .flag_if(params.cubemap_color_output, "ALGINE_CUBEMAP_COLOR")
        .flag_opt(position_output(params.position_output));

    ShaderSources {
        fragment: fragment.apply(&sources.fragment),
        ..sources.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{TextureComponent, VectorType};
    use crate::SHADER_DEFINITIONS_MARKER;

    fn template() -> ShaderSources {
        let stage = "#version 330\n#algdef\nvoid main() {}\n";
        ShaderSources::new(stage, stage)
    }

    fn block_of(text: &str) -> Vec<&str> {
        text.lines()
            .filter(|line| line.starts_with("#define"))
            .collect()
    }

    #[test]
    fn test_color_vertex_block() {
        let flags = FeatureFlags {
            normal_mapping: NormalMappingMode::Disabled,
            bone_system: BoneSystemMode::Enabled,
            ..Default::default()
        };
        let params = ColorShaderParams {
            max_bone_attribs_per_vertex: 4,
            max_bones: 60,
            ..Default::default()
        };

        let result = color_shader(&template(), &flags, &params);
        assert_eq!(
            block_of(&result.vertex),
            vec![
                "#define ALGINE_NORMAL_MAPPING_MODE_DISABLED",
                "#define ALGINE_BONE_SYSTEM_ENABLED",
                "#define MAX_BONE_ATTRIBS_PER_VERTEX 4",
                "#define MAX_BONES 60",
            ]
        );
        assert!(!result.vertex.contains(SHADER_DEFINITIONS_MARKER));
    }

    #[test]
    fn test_color_fragment_block() {
        let flags = FeatureFlags {
            normal_mapping: NormalMappingMode::Dual,
            shadow_mapping: ShadowMappingMode::Simple,
            texture_mapping: TextureMappingMode::Enabled,
            lighting: LightingMode::Enabled,
            attenuation: AttenuationMode::Disabled,
            ssr: SsrMode::Enabled,
            ..Default::default()
        };
        let params = ColorShaderParams {
            max_point_lights: 2,
            max_dir_lights: 1,
            ..Default::default()
        };

        let result = color_shader(&template(), &flags, &params);
        assert_eq!(
            block_of(&result.fragment),
            vec![
                "#define ALGINE_NORMAL_MAPPING_MODE_DUAL",
                "#define ALGINE_SHADOW_MAPPING_MODE_SIMPLE",
                "#define ALGINE_TEXTURE_MAPPING_MODE_ENABLED",
                "#define ALGINE_LIGHTING_MODE_ENABLED",
                "#define ALGINE_ATTENUATION_MODE_DISABLED",
                "#define ALGINE_SSR_MODE_ENABLED",
                "#define MAX_POINT_LIGHTS_COUNT 2",
                "#define MAX_DIR_LIGHTS_COUNT 1",
            ]
        );
    }

    #[test]
    fn test_shadow_leaves_geometry() {
        let sources = template().with_geometry("#algdef\nlayout(triangles) in;\n");
        let flags = FeatureFlags {
            shadow_mapping_type: ShadowMappingType::Directional,
            ..Default::default()
        };

        let result = shadow_shader(&sources, &flags, &ShadowShaderParams::default());
        assert_eq!(result.geometry, sources.geometry);
        assert_eq!(
            block_of(&result.fragment),
            vec!["#define ALGINE_SHADOW_MAPPING_TYPE_DIR_LIGHTING"]
        );
        assert_eq!(
            block_of(&result.vertex)[1],
            "#define ALGINE_SHADOW_MAPPING_TYPE_DIR_LIGHTING"
        );
        assert_eq!(block_of(&result.vertex).len(), 4);
    }

    #[test]
    fn test_dof_blur_pair() {
        let params = DofBlurShaderParams {
            algorithm: DofAlgorithm::FromCocMap,
            bleeding_elimination_delta_z: true,
            bleeding_elimination_delta_coc: false,
            bleeding_elimination_focus_coc: true,
            blur_kernel_radius: 3,
        };

        let pair = dof_blur_shader(&template(), &params);
        assert_eq!(pair.horizontal.vertex, template().vertex);
        assert_eq!(pair.vertical.vertex, template().vertex);
        assert_eq!(
            block_of(&pair.vertical.fragment),
            vec![
                "#define ALGINE_DOF_FROM_COC_MAP",
                "#define ALGINE_BLEEDING_ELIM_DZ",
                "#define ALGINE_BLEEDING_ELIM_FCOC",
                "#define KERNEL_RADIUS 3",
            ]
        );

        let mut horizontal = block_of(&pair.vertical.fragment);
        horizontal.push("#define ALGINE_HORIZONTAL");
        assert_eq!(block_of(&pair.horizontal.fragment), horizontal);
    }

    #[test]
    fn test_dof_coc_collapses_coc_map_to_linear() {
        let params = DofBlurShaderParams {
            algorithm: DofAlgorithm::FromCocMap,
            ..Default::default()
        };
        let result = dof_coc_shader(&template(), &params);
        assert_eq!(block_of(&result.fragment), vec!["#define ALGINE_LINEAR_DOF"]);
        assert_eq!(result.vertex, template().vertex);

        let params = DofBlurShaderParams {
            algorithm: DofAlgorithm::Cinematic,
            ..Default::default()
        };
        let result = dof_coc_shader(&template(), &params);
        assert_eq!(block_of(&result.fragment), vec!["#define ALGINE_CINEMATIC_DOF"]);
    }

    #[test]
    fn test_blend_block() {
        let flags = FeatureFlags {
            bloom: BloomMode::Enabled,
            bloom_type: BloomType::Screen,
            ..Default::default()
        };
        let result = blend_shader(&template(), &flags);
        assert_eq!(
            block_of(&result.fragment),
            vec!["#define ALGINE_BLOOM_ENABLED", "#define ALGINE_BLOOM_TYPE_SCREEN"]
        );
    }

    #[test]
    fn test_pass_through_families() {
        assert_eq!(ssr_shader(&template()), template());
        assert_eq!(bloom_search_shader(&template()), template());
    }

    #[test]
    fn test_blur_pair() {
        let params = BlurShaderParams {
            blur_kernel_radius: 5,
            vecout: VectorType::Float,
            tex_component: TextureComponent::Red,
        };

        let pair = blur_shader(&template(), &params);
        assert_eq!(pair.horizontal.vertex, pair.vertical.vertex);

        let base = vec![
            "#define KERNEL_RADIUS 5",
            "#define vecout float",
            "#define texComponent r",
        ];
        let mut horizontal = base.clone();
        horizontal.push("#define ALGINE_HORIZONTAL");
        let mut vertical = base;
        vertical.push("#define ALGINE_VERTICAL");

        assert_eq!(block_of(&pair.horizontal.fragment), horizontal);
        assert_eq!(block_of(&pair.vertical.fragment), vertical);
    }

    #[test]
    fn test_cubemap_branches() {
        let params = CubemapShaderParams {
            cubemap_color_out_color_component: 0,
            position_out_color_component: 2,
            vecout: VectorType::Vec4,
            cubemap_color_output: false,
            position_output: PositionOutput::Sphere,
        };
        let result = cubemap_shader(&template(), &params);
        assert_eq!(
            block_of(&result.fragment),
            vec![
                "#define ALGINE_CUBEMAP_COLOR_OUT_COLOR_COMPONENT 0",
                "#define ALGINE_POS_OUT_COLOR_COMPONENT 2",
                "#define vecout vec4",
                "#define ALGINE_SPHERE_POSITIONS",
            ]
        );

        let params = CubemapShaderParams {
            cubemap_color_output: true,
            position_output: PositionOutput::None,
            ..params
        };
        let result = cubemap_shader(&template(), &params);
        let block = block_of(&result.fragment);
        assert_eq!(block.len(), 4);
        assert_eq!(block[3], "#define ALGINE_CUBEMAP_COLOR");
    }

    #[test]
    fn test_pair_order() {
        let pair = DirectionalPair {
            horizontal: 1,
            vertical: 2,
        };
        assert_eq!(pair.into_array(), [1, 2]);
    }

    #[test]
    fn test_branch_names() {
        for (mode, name) in [
            (NormalMappingMode::Enabled, "ALGINE_NORMAL_MAPPING_MODE_ENABLED"),
            (NormalMappingMode::Dual, "ALGINE_NORMAL_MAPPING_MODE_DUAL"),
            (NormalMappingMode::Disabled, "ALGINE_NORMAL_MAPPING_MODE_DISABLED"),
        ] {
            assert_eq!(normal_mapping(mode), name);
        }
        for (mode, name) in [
            (BoneSystemMode::Enabled, "ALGINE_BONE_SYSTEM_ENABLED"),
            (BoneSystemMode::Disabled, "ALGINE_BONE_SYSTEM_DISABLED"),
        ] {
            assert_eq!(bone_system(mode), name);
        }
        for (mode, name) in [
            (ShadowMappingMode::Enabled, "ALGINE_SHADOW_MAPPING_MODE_ENABLED"),
            (ShadowMappingMode::Simple, "ALGINE_SHADOW_MAPPING_MODE_SIMPLE"),
            (ShadowMappingMode::Disabled, "ALGINE_SHADOW_MAPPING_MODE_DISABLED"),
        ] {
            assert_eq!(shadow_mapping(mode), name);
        }
        for (kind, name) in [
            (ShadowMappingType::Point, "ALGINE_SHADOW_MAPPING_TYPE_POINT_LIGHTING"),
            (ShadowMappingType::Directional, "ALGINE_SHADOW_MAPPING_TYPE_DIR_LIGHTING"),
        ] {
            assert_eq!(shadow_mapping_type(kind), name);
        }
        for (mode, name) in [
            (TextureMappingMode::Enabled, "ALGINE_TEXTURE_MAPPING_MODE_ENABLED"),
            (TextureMappingMode::Dual, "ALGINE_TEXTURE_MAPPING_MODE_DUAL"),
            (TextureMappingMode::Disabled, "ALGINE_TEXTURE_MAPPING_MODE_DISABLED"),
        ] {
            assert_eq!(texture_mapping(mode), name);
        }
        for (mode, name) in [
            (LightingMode::Enabled, "ALGINE_LIGHTING_MODE_ENABLED"),
            (LightingMode::Disabled, "ALGINE_LIGHTING_MODE_DISABLED"),
        ] {
            assert_eq!(lighting(mode), name);
        }
        for (mode, name) in [
            (AttenuationMode::Enabled, "ALGINE_ATTENUATION_MODE_ENABLED"),
            (AttenuationMode::Disabled, "ALGINE_ATTENUATION_MODE_DISABLED"),
        ] {
            assert_eq!(attenuation(mode), name);
        }
        for (mode, name) in [
            (SsrMode::Enabled, "ALGINE_SSR_MODE_ENABLED"),
            (SsrMode::Disabled, "ALGINE_SSR_MODE_DISABLED"),
        ] {
            assert_eq!(ssr(mode), name);
        }
        for (mode, name) in [
            (BloomMode::Enabled, "ALGINE_BLOOM_ENABLED"),
            (BloomMode::Disabled, "ALGINE_BLOOM_DISABLED"),
        ] {
            assert_eq!(bloom(mode), name);
        }
        for (kind, name) in [
            (BloomType::Add, "ALGINE_BLOOM_TYPE_ADD"),
            (BloomType::Screen, "ALGINE_BLOOM_TYPE_SCREEN"),
        ] {
            assert_eq!(bloom_type(kind), name);
        }
        for (algorithm, name) in [
            (DofAlgorithm::Cinematic, "ALGINE_CINEMATIC_DOF"),
            (DofAlgorithm::Linear, "ALGINE_LINEAR_DOF"),
            (DofAlgorithm::FromCocMap, "ALGINE_DOF_FROM_COC_MAP"),
        ] {
            assert_eq!(dof_algorithm(algorithm), name);
        }
        for (output, name) in [
            (PositionOutput::Cube, Some("ALGINE_CUBE_POSITIONS")),
            (PositionOutput::Sphere, Some("ALGINE_SPHERE_POSITIONS")),
            (PositionOutput::None, None),
        ] {
            assert_eq!(position_output(output), name);
        }
    }

    /// Number of lines in `text` that are exactly `#define <name>`
    fn flag_lines(text: &str, name: &str) -> usize {
        let directive = format!("#define {}", name);
        text.lines().filter(|line| *line == directive).count()
    }

    #[test]
    fn test_each_branch_emits_one_line() {
        let params = ColorShaderParams::default();

        for mode in [
            NormalMappingMode::Enabled,
            NormalMappingMode::Dual,
            NormalMappingMode::Disabled,
        ] {
            let flags = FeatureFlags {
                normal_mapping: mode,
                ..Default::default()
            };
            let result = color_shader(&template(), &flags, &params);
            assert_eq!(flag_lines(&result.vertex, normal_mapping(mode)), 1);
            assert_eq!(flag_lines(&result.fragment, normal_mapping(mode)), 1);
            assert_eq!(block_of(&result.vertex).len(), 4);
            assert_eq!(block_of(&result.fragment).len(), 8);
        }

        for mode in [BoneSystemMode::Enabled, BoneSystemMode::Disabled] {
            let flags = FeatureFlags {
                bone_system: mode,
                ..Default::default()
            };
            let result = color_shader(&template(), &flags, &params);
            assert_eq!(flag_lines(&result.vertex, bone_system(mode)), 1);
            assert_eq!(block_of(&result.vertex).len(), 4);
        }

        for mode in [
            TextureMappingMode::Enabled,
            TextureMappingMode::Dual,
            TextureMappingMode::Disabled,
        ] {
            let flags = FeatureFlags {
                texture_mapping: mode,
                ..Default::default()
            };
            let result = color_shader(&template(), &flags, &params);
            assert_eq!(flag_lines(&result.fragment, texture_mapping(mode)), 1);
            assert_eq!(block_of(&result.fragment).len(), 8);
        }

        for (lighting_mode, attenuation_mode, ssr_mode) in [
            (LightingMode::Disabled, AttenuationMode::Enabled, SsrMode::Disabled),
            (LightingMode::Enabled, AttenuationMode::Disabled, SsrMode::Enabled),
        ] {
            let flags = FeatureFlags {
                lighting: lighting_mode,
                attenuation: attenuation_mode,
                ssr: ssr_mode,
                ..Default::default()
            };
            let result = color_shader(&template(), &flags, &params);
            assert_eq!(flag_lines(&result.fragment, lighting(lighting_mode)), 1);
            assert_eq!(flag_lines(&result.fragment, attenuation(attenuation_mode)), 1);
            assert_eq!(flag_lines(&result.fragment, ssr(ssr_mode)), 1);
            assert_eq!(block_of(&result.fragment).len(), 8);
        }

        for (bloom_mode, kind) in [
            (BloomMode::Disabled, BloomType::Add),
            (BloomMode::Enabled, BloomType::Screen),
        ] {
            let flags = FeatureFlags {
                bloom: bloom_mode,
                bloom_type: kind,
                ..Default::default()
            };
            let result = blend_shader(&template(), &flags);
            assert_eq!(
                block_of(&result.fragment),
                vec![
                    format!("#define {}", bloom(bloom_mode)),
                    format!("#define {}", bloom_type(kind)),
                ]
            );
        }

        for output in [PositionOutput::Cube, PositionOutput::Sphere, PositionOutput::None] {
            let params = CubemapShaderParams {
                cubemap_color_output: false,
                position_output: output,
                ..Default::default()
            };
            let block = cubemap_shader(&template(), &params).fragment;
            match position_output(output) {
                Some(name) => {
                    assert_eq!(flag_lines(&block, name), 1);
                    assert_eq!(block_of(&block).len(), 4);
                }
                None => assert_eq!(block_of(&block).len(), 3),
            }
        }
    }

    #[test]
    fn test_templates_without_marker_are_unchanged() {
        let sources = ShaderSources::new("in vec3 inPos;\n", "out vec4 fragColor;\n")
            .with_geometry("layout(triangles) in;\n");
        let flags = FeatureFlags::default();

        assert_eq!(
            color_shader(&sources, &flags, &ColorShaderParams::default()),
            sources
        );
        assert_eq!(
            shadow_shader(&sources, &flags, &ShadowShaderParams::default()),
            sources
        );
        assert_eq!(
            dof_coc_shader(&sources, &DofBlurShaderParams::default()),
            sources
        );
        assert_eq!(blend_shader(&sources, &flags), sources);
        assert_eq!(ssr_shader(&sources), sources);
        assert_eq!(bloom_search_shader(&sources), sources);
        assert_eq!(
            cubemap_shader(&sources, &CubemapShaderParams::default()),
            sources
        );

        let pair = dof_blur_shader(&sources, &DofBlurShaderParams::default());
        assert_eq!(pair.horizontal.vertex, sources.vertex);
        assert_eq!(pair.horizontal.fragment, sources.fragment);
        assert_eq!(pair.vertical.fragment, sources.fragment);

        let pair = blur_shader(&sources, &BlurShaderParams::default());
        assert_eq!(pair.horizontal.fragment, sources.fragment);
        assert_eq!(pair.vertical.vertex, sources.vertex);
        assert_eq!(pair.vertical.fragment, sources.fragment);
    }
}
