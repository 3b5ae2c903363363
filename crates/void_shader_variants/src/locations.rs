//! Per-family location tables
//!
//! After linking, every attribute and uniform a family's render code uses is
//! looked up once and cached here. Lookups only query the program, so
//! resolving twice against the same program yields equal tables.

use crate::backend::{GraphicsApi, Location};
use crate::names::{self, array_element, struct_element};

/// Lookup helper bound to one program
struct Locator<'a, A: GraphicsApi> {
    api: &'a A,
    program: A::Program,
}

impl<'a, A: GraphicsApi> Locator<'a, A> {
    fn new(api: &'a A, program: A::Program) -> Self {
        Self { api, program }
    }

    fn attrib(&self, name: &str) -> Location {
        let location = self.api.attrib_location(self.program, name);
        if !location.is_found() {
            log::trace!("Attribute '{}' not found in program {:?}", name, self.program);
        }
        location
    }

    fn uniform(&self, name: &str) -> Location {
        let location = self.api.uniform_location(self.program, name);
        if !location.is_found() {
            log::trace!("Uniform '{}' not found in program {:?}", name, self.program);
        }
        location
    }
}

/// Fields shared by point and directional lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightLocations {
    /// Constant attenuation term
    pub kc: Location,
    /// Linear attenuation term
    pub kl: Location,
    /// Quadratic attenuation term
    pub kq: Location,
    pub pos: Location,
    pub color: Location,
}

impl LightLocations {
    fn resolve<A: GraphicsApi>(locator: &Locator<'_, A>, array: &str, index: u32) -> Self {
        let field = |name| locator.uniform(&struct_element(array, index, name));
        Self {
            kc: field(names::color::LIGHT_KC),
            kl: field(names::color::LIGHT_KL),
            kq: field(names::color::LIGHT_KQ),
            pos: field(names::color::LIGHT_POS),
            color: field(names::color::LIGHT_COLOR),
        }
    }
}

/// Uniforms of one point light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointLightLocations {
    pub light: LightLocations,
    pub far: Location,
    pub bias: Location,
    pub shadow_map: Location,
}

/// Uniforms of one directional light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirLightLocations {
    pub light: LightLocations,
    pub light_matrix: Location,
    pub min_bias: Location,
    pub max_bias: Location,
    pub shadow_map: Location,
}

/// Color pass locations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorLocations {
    pub mat_model: Location,
    pub mat_view: Location,
    pub mat_pvm: Location,
    pub mat_vm: Location,
    pub bones: Location,
    pub normal_mapping_switcher: Location,
    pub bone_attribs_per_vertex: Location,
    pub in_position: Location,
    pub in_normal: Location,
    pub in_tangent: Location,
    pub in_bitangent: Location,
    pub in_tex_coord: Location,
    pub in_bone_ids: Location,
    pub in_bone_weights: Location,

    pub view_pos: Location,
    pub point_lights_count: Location,
    pub dir_lights_count: Location,
    pub shadow_disk_radius_k: Location,
    pub shadow_disk_radius_min: Location,
    pub shadow_opacity: Location,
    pub texture_mapping_switcher: Location,

    pub material_ambient_tex: Location,
    pub material_diffuse_tex: Location,
    pub material_specular_tex: Location,
    pub material_normal_tex: Location,
    pub material_reflection_strength_tex: Location,
    pub material_jitter_tex: Location,
    pub material_ambient_color: Location,
    pub material_diffuse_color: Location,
    pub material_specular_color: Location,
    pub material_ambient_strength: Location,
    pub material_diffuse_strength: Location,
    pub material_specular_strength: Location,
    pub material_shininess: Location,

    /// One entry per point light slot, in index order
    pub point_lights: Vec<PointLightLocations>,
    /// One entry per directional light slot, in index order
    pub dir_lights: Vec<DirLightLocations>,
}

impl ColorLocations {
    /// Resolve the color pass table, including `max_point_lights` point and
    /// `max_dir_lights` directional light entries
    pub fn resolve<A: GraphicsApi>(
        api: &A,
        program: A::Program,
        max_point_lights: u32,
        max_dir_lights: u32,
    ) -> Self {
        use names::color::*;

        let l = Locator::new(api, program);

        let point_lights = (0..max_point_lights)
            .map(|i| PointLightLocations {
                light: LightLocations::resolve(&l, POINT_LIGHTS, i),
                far: l.uniform(&struct_element(POINT_LIGHTS, i, LIGHT_FAR)),
                bias: l.uniform(&struct_element(POINT_LIGHTS, i, LIGHT_BIAS)),
                shadow_map: l.uniform(&array_element(POINT_LIGHT_SHADOW_MAPS, i)),
            })
            .collect();

        let dir_lights = (0..max_dir_lights)
            .map(|i| DirLightLocations {
                light: LightLocations::resolve(&l, DIR_LIGHTS, i),
                light_matrix: l.uniform(&struct_element(DIR_LIGHTS, i, LIGHT_MATRIX)),
                min_bias: l.uniform(&struct_element(DIR_LIGHTS, i, LIGHT_MIN_BIAS)),
                max_bias: l.uniform(&struct_element(DIR_LIGHTS, i, LIGHT_MAX_BIAS)),
                shadow_map: l.uniform(&array_element(DIR_LIGHT_SHADOW_MAPS, i)),
            })
            .collect();

        Self {
            mat_model: l.uniform(MAT_MODEL),
            mat_view: l.uniform(MAT_VIEW),
            mat_pvm: l.uniform(MAT_PVM),
            mat_vm: l.uniform(MAT_VM),
            bones: l.uniform(BONES),
            normal_mapping_switcher: l.uniform(SWITCH_NORMAL_MAPPING),
            bone_attribs_per_vertex: l.uniform(BONE_ATTRIBS_PER_VERTEX),
            in_position: l.attrib(IN_POSITION),
            in_normal: l.attrib(IN_NORMAL),
            in_tangent: l.attrib(IN_TANGENT),
            in_bitangent: l.attrib(IN_BITANGENT),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            in_bone_ids: l.attrib(IN_BONE_IDS),
            in_bone_weights: l.attrib(IN_BONE_WEIGHTS),

            view_pos: l.uniform(VIEW_POSITION),
            point_lights_count: l.uniform(POINT_LIGHTS_COUNT),
            dir_lights_count: l.uniform(DIR_LIGHTS_COUNT),
            shadow_disk_radius_k: l.uniform(SHADOW_DISK_RADIUS_K),
            shadow_disk_radius_min: l.uniform(SHADOW_DISK_RADIUS_MIN),
            shadow_opacity: l.uniform(SHADOW_OPACITY),
            texture_mapping_switcher: l.uniform(SWITCH_TEXTURE_MAPPING),

            material_ambient_tex: l.uniform(MATERIAL_AMBIENT_TEX),
            material_diffuse_tex: l.uniform(MATERIAL_DIFFUSE_TEX),
            material_specular_tex: l.uniform(MATERIAL_SPECULAR_TEX),
            material_normal_tex: l.uniform(MATERIAL_NORMAL_TEX),
            material_reflection_strength_tex: l.uniform(MATERIAL_REFLECTION_STRENGTH_TEX),
            material_jitter_tex: l.uniform(MATERIAL_JITTER_TEX),
            material_ambient_color: l.uniform(MATERIAL_AMBIENT_COLOR),
            material_diffuse_color: l.uniform(MATERIAL_DIFFUSE_COLOR),
            material_specular_color: l.uniform(MATERIAL_SPECULAR_COLOR),
            material_ambient_strength: l.uniform(MATERIAL_AMBIENT_STRENGTH),
            material_diffuse_strength: l.uniform(MATERIAL_DIFFUSE_STRENGTH),
            material_specular_strength: l.uniform(MATERIAL_SPECULAR_STRENGTH),
            material_shininess: l.uniform(MATERIAL_SHININESS),

            point_lights,
            dir_lights,
        }
    }
}

/// Shadow pass locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowLocations {
    /// Cube face matrices of the geometry stage
    pub shadow_matrices: Location,
    pub mat_light_space: Location,
    pub mat_model: Location,
    pub bones: Location,
    pub bone_attribs_per_vertex: Location,
    pub in_position: Location,
    pub in_bone_ids: Location,
    pub in_bone_weights: Location,
    pub lamp_pos: Location,
    pub far: Location,
}

impl ShadowLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::shadow::*;

        let l = Locator::new(api, program);
        Self {
            shadow_matrices: l.uniform(MAT_SHADOW),
            mat_light_space: l.uniform(MAT_LIGHT_SPACE),
            mat_model: l.uniform(MAT_MODEL),
            bones: l.uniform(BONES),
            bone_attribs_per_vertex: l.uniform(BONE_ATTRIBS_PER_VERTEX),
            in_position: l.attrib(IN_POSITION),
            in_bone_ids: l.attrib(IN_BONE_IDS),
            in_bone_weights: l.attrib(IN_BONE_WEIGHTS),
            lamp_pos: l.uniform(LAMP_POSITION),
            far: l.uniform(FAR_PLANE),
        }
    }
}

/// Locations shared by the depth of field passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DofLocations {
    pub in_position: Location,
    pub in_tex_coord: Location,
    pub sampler_position_map: Location,
    pub focal_depth: Location,
    pub focal_range: Location,
    pub sigma_min: Location,
    pub sigma_max: Location,
    pub cinematic_plane_in_focus: Location,
    pub cinematic_aperture: Location,
    pub cinematic_image_distance: Location,
}

impl DofLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        Self::resolve_with(&Locator::new(api, program))
    }

    fn resolve_with<A: GraphicsApi>(l: &Locator<'_, A>) -> Self {
        use names::dof::*;

        Self {
            in_position: l.attrib(IN_POSITION),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            sampler_position_map: l.uniform(SAMPLER_MAP_POSITION),
            focal_depth: l.uniform(FOCAL_DEPTH),
            focal_range: l.uniform(FOCAL_RANGE),
            sigma_min: l.uniform(SIGMA_MIN),
            sigma_max: l.uniform(SIGMA_MAX),
            cinematic_plane_in_focus: l.uniform(CINEMATIC_PLANE_IN_FOCUS),
            cinematic_aperture: l.uniform(CINEMATIC_APERTURE),
            cinematic_image_distance: l.uniform(CINEMATIC_IMAGE_DISTANCE),
        }
    }
}

/// Depth of field blur locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DofBlurLocations {
    pub dof: DofLocations,
    pub sampler_image: Location,
    pub sampler_coc_map: Location,
    pub bleeding_elimination_min_delta_z: Location,
    pub bleeding_elimination_min_delta_coc: Location,
    pub bleeding_elimination_max_focus_coc: Location,
}

impl DofBlurLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::dof::*;

        let l = Locator::new(api, program);
        Self {
            dof: DofLocations::resolve_with(&l),
            sampler_image: l.uniform(SAMPLER_IMAGE),
            sampler_coc_map: l.uniform(SAMPLER_MAP_COC),
            bleeding_elimination_min_delta_z: l.uniform(BLEEDING_ELIM_MIN_DZ),
            bleeding_elimination_min_delta_coc: l.uniform(BLEEDING_ELIM_MIN_DCOC),
            bleeding_elimination_max_focus_coc: l.uniform(BLEEDING_ELIM_MAX_FCOC),
        }
    }
}

/// Circle-of-confusion pass locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DofCocLocations {
    pub dof: DofLocations,
}

impl DofCocLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        Self {
            dof: DofLocations::resolve(api, program),
        }
    }
}

/// Blend pass locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlendLocations {
    pub in_position: Location,
    pub in_tex_coord: Location,
    pub sampler_bloom: Location,
    pub sampler_image: Location,
    pub exposure: Location,
    pub gamma: Location,
}

impl BlendLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::blend::*;

        let l = Locator::new(api, program);
        Self {
            in_position: l.attrib(IN_POSITION),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            sampler_bloom: l.uniform(SAMPLER_BLOOM),
            sampler_image: l.uniform(SAMPLER_IMAGE),
            exposure: l.uniform(EXPOSURE),
            gamma: l.uniform(GAMMA),
        }
    }
}

/// Screen-space reflections locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SsrLocations {
    pub in_position: Location,
    pub in_tex_coord: Location,
    pub sampler_color_map: Location,
    pub sampler_normal_map: Location,
    pub sampler_ssr_values_map: Location,
    pub sampler_position_map: Location,
    pub mat_projection: Location,
    pub mat_view: Location,
    pub sky_color: Location,
    pub binary_search_count: Location,
    pub ray_march_count: Location,
    pub step: Location,
    pub l_limiter: Location,
    pub min_ray_step: Location,
}

impl SsrLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::ssr::*;

        let l = Locator::new(api, program);
        Self {
            in_position: l.attrib(IN_POSITION),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            sampler_color_map: l.uniform(SAMPLER_MAP_COLOR),
            sampler_normal_map: l.uniform(SAMPLER_MAP_NORMAL),
            sampler_ssr_values_map: l.uniform(SAMPLER_MAP_SSR_VALUES),
            sampler_position_map: l.uniform(SAMPLER_MAP_POSITION),
            mat_projection: l.uniform(MAT_PROJECTION),
            mat_view: l.uniform(MAT_VIEW),
            sky_color: l.uniform(SKY_COLOR),
            binary_search_count: l.uniform(BINARY_SEARCH_COUNT),
            ray_march_count: l.uniform(RAY_MARCH_COUNT),
            step: l.uniform(STEP),
            l_limiter: l.uniform(L_LIMITER),
            min_ray_step: l.uniform(MIN_RAY_STEP),
        }
    }
}

/// Bloom search locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BloomSearchLocations {
    pub in_position: Location,
    pub in_tex_coord: Location,
    pub threshold: Location,
    pub brightness_threshold: Location,
    pub image: Location,
}

impl BloomSearchLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::bloom_search::*;

        let l = Locator::new(api, program);
        Self {
            in_position: l.attrib(IN_POSITION),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            threshold: l.uniform(THRESHOLD),
            brightness_threshold: l.uniform(BRIGHTNESS_THRESHOLD),
            image: l.uniform(IMAGE),
        }
    }
}

/// Blur locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlurLocations {
    pub in_position: Location,
    pub in_tex_coord: Location,
    pub image: Location,
    pub kernel: Location,
}

impl BlurLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::blur::*;

        let l = Locator::new(api, program);
        Self {
            in_position: l.attrib(IN_POSITION),
            in_tex_coord: l.attrib(IN_TEXCOORD),
            image: l.uniform(IMAGE),
            kernel: l.uniform(KERNEL),
        }
    }
}

/// Cubemap locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CubemapLocations {
    pub in_position: Location,
    pub mat_transform: Location,
    pub cubemap: Location,
    pub color: Location,
    pub position_scaling: Location,
}

impl CubemapLocations {
    pub fn resolve<A: GraphicsApi>(api: &A, program: A::Program) -> Self {
        use names::cubemap::*;

        let l = Locator::new(api, program);
        Self {
            in_position: l.attrib(IN_POSITION),
            mat_transform: l.uniform(MAT_TRANSFORM),
            cubemap: l.uniform(CUBEMAP),
            color: l.uniform(COLOR),
            position_scaling: l.uniform(POSITION_SCALING),
        }
    }
}
