//! Attribute and uniform names declared by the shader templates
//!
//! These must match the template declarations exactly; a mismatch is not an
//! error, the slot simply resolves to [`Location::NOT_FOUND`](crate::Location::NOT_FOUND).

/// Color pass
pub mod color {
    // vertex stage
    pub const MAT_MODEL: &str = "modelMatrix";
    pub const MAT_VIEW: &str = "viewMatrix";
    pub const MAT_PVM: &str = "MVPMatrix";
    pub const MAT_VM: &str = "MVMatrix";
    pub const BONES: &str = "bones";
    pub const SWITCH_NORMAL_MAPPING: &str = "normalMappingSwitcher";
    pub const BONE_ATTRIBS_PER_VERTEX: &str = "boneAttribsPerVertex";
    pub const IN_POSITION: &str = "inPos";
    pub const IN_NORMAL: &str = "inNormal";
    pub const IN_TANGENT: &str = "inTangent";
    pub const IN_BITANGENT: &str = "inBitangent";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const IN_BONE_IDS: &str = "inBoneIds";
    pub const IN_BONE_WEIGHTS: &str = "inBoneWeights";

    // fragment stage
    pub const VIEW_POSITION: &str = "viewPos";
    pub const POINT_LIGHTS_COUNT: &str = "pointLightsCount";
    pub const DIR_LIGHTS_COUNT: &str = "dirLightsCount";
    pub const SHADOW_DISK_RADIUS_K: &str = "diskRadius_k";
    pub const SHADOW_DISK_RADIUS_MIN: &str = "diskRadius_min";
    pub const SHADOW_OPACITY: &str = "shadowOpacity";
    pub const SWITCH_TEXTURE_MAPPING: &str = "textureMappingSwitcher";

    pub const MATERIAL_AMBIENT_TEX: &str = "material.ambient";
    pub const MATERIAL_DIFFUSE_TEX: &str = "material.diffuse";
    pub const MATERIAL_SPECULAR_TEX: &str = "material.specular";
    pub const MATERIAL_NORMAL_TEX: &str = "material.normal";
    pub const MATERIAL_REFLECTION_STRENGTH_TEX: &str = "material.reflectionStrength";
    pub const MATERIAL_JITTER_TEX: &str = "material.jitter";
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.cambient";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.cdiffuse";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.cspecular";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_STRENGTH: &str = "material.diffuseStrength";
    pub const MATERIAL_SPECULAR_STRENGTH: &str = "material.specularStrength";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    // light arrays, `array[i].field`
    pub const POINT_LIGHTS: &str = "pointLights";
    pub const DIR_LIGHTS: &str = "dirLights";
    pub const LIGHT_KC: &str = "kc";
    pub const LIGHT_KL: &str = "kl";
    pub const LIGHT_KQ: &str = "kq";
    pub const LIGHT_POS: &str = "pos";
    pub const LIGHT_COLOR: &str = "color";
    pub const LIGHT_FAR: &str = "far";
    pub const LIGHT_BIAS: &str = "bias";
    pub const LIGHT_MATRIX: &str = "lightMatrix";
    pub const LIGHT_MIN_BIAS: &str = "minBias";
    pub const LIGHT_MAX_BIAS: &str = "maxBias";

    // shadow map sampler arrays, `array[i]`
    pub const POINT_LIGHT_SHADOW_MAPS: &str = "pointLightShadowMaps";
    pub const DIR_LIGHT_SHADOW_MAPS: &str = "dirLightShadowMaps";
}

/// Shadow pass
pub mod shadow {
    pub const MAT_SHADOW: &str = "shadowMatrices";
    pub const MAT_LIGHT_SPACE: &str = "lightSpaceMatrix";
    pub const MAT_MODEL: &str = "model";
    pub const BONES: &str = "bones";
    pub const BONE_ATTRIBS_PER_VERTEX: &str = "boneAttribsPerVertex";
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_BONE_IDS: &str = "inBoneIds";
    pub const IN_BONE_WEIGHTS: &str = "inBoneWeights";
    pub const LAMP_POSITION: &str = "lampPos";
    pub const FAR_PLANE: &str = "far";
}

/// Depth of field blur and circle-of-confusion passes
pub mod dof {
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const SAMPLER_IMAGE: &str = "image";
    pub const SAMPLER_MAP_POSITION: &str = "positionMap";
    pub const SAMPLER_MAP_COC: &str = "cocMap";

    // linear
    pub const FOCAL_DEPTH: &str = "focalDepth";
    pub const FOCAL_RANGE: &str = "focalRange";
    pub const SIGMA_MIN: &str = "sigmaMin";
    pub const SIGMA_MAX: &str = "sigmaMax";

    // cinematic
    pub const CINEMATIC_PLANE_IN_FOCUS: &str = "cinematicDOF.p";
    pub const CINEMATIC_APERTURE: &str = "cinematicDOF.a";
    pub const CINEMATIC_IMAGE_DISTANCE: &str = "cinematicDOF.i";

    pub const BLEEDING_ELIM_MIN_DZ: &str = "bleedingEliminationMinDeltaZ";
    pub const BLEEDING_ELIM_MIN_DCOC: &str = "bleedingEliminationMinDeltaCoC";
    pub const BLEEDING_ELIM_MAX_FCOC: &str = "bleedingEliminationMaxFocusCoC";
}

/// Bloom / tone mapping blend pass
pub mod blend {
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const SAMPLER_BLOOM: &str = "bloomScene";
    pub const SAMPLER_IMAGE: &str = "image";
    pub const EXPOSURE: &str = "exposure";
    pub const GAMMA: &str = "gamma";
}

/// Screen-space reflections pass
pub mod ssr {
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const SAMPLER_MAP_COLOR: &str = "colorMap";
    pub const SAMPLER_MAP_NORMAL: &str = "normalMap";
    pub const SAMPLER_MAP_SSR_VALUES: &str = "ssrValuesMap";
    pub const SAMPLER_MAP_POSITION: &str = "positionMap";
    pub const MAT_PROJECTION: &str = "projection";
    pub const MAT_VIEW: &str = "view";
    pub const SKY_COLOR: &str = "skyColor";
    pub const BINARY_SEARCH_COUNT: &str = "binarySearchCount";
    pub const RAY_MARCH_COUNT: &str = "rayMarchCount";
    pub const STEP: &str = "step";
    pub const L_LIMITER: &str = "LLimiter";
    pub const MIN_RAY_STEP: &str = "minRayStep";
}

/// Bloom bright-pixel search pass
pub mod bloom_search {
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const THRESHOLD: &str = "threshold";
    pub const BRIGHTNESS_THRESHOLD: &str = "brightnessThreshold";
    pub const IMAGE: &str = "image";
}

/// Separable blur pass
pub mod blur {
    pub const IN_POSITION: &str = "inPosition";
    pub const IN_TEXCOORD: &str = "inTexCoord";
    pub const IMAGE: &str = "image";
    pub const KERNEL: &str = "kernel";
}

/// Cubemap pass
pub mod cubemap {
    pub const IN_POSITION: &str = "inPos";
    pub const MAT_TRANSFORM: &str = "transform";
    pub const CUBEMAP: &str = "cubemap";
    pub const COLOR: &str = "color";
    pub const POSITION_SCALING: &str = "scaling";
}

/// `array[index].field`
pub fn struct_element(array: &str, index: u32, field: &str) -> String {
    format!("{}[{}].{}", array, index, field)
}

/// `array[index]`
pub fn array_element(array: &str, index: u32) -> String {
    format!("{}[{}]", array, index)
}
