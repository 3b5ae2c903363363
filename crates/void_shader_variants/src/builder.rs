//! Family builder
//!
//! Runs load → specialize → compile/link → resolve for one shader family.
//! Which families to build, and when, is left to the render pipeline.

use std::fmt;

use crate::backend::GraphicsApi;
use crate::config::ShaderConfig;
use crate::driver::build_program;
use crate::locations::{
    BlendLocations, BloomSearchLocations, BlurLocations, ColorLocations, CubemapLocations,
    DofBlurLocations, DofCocLocations, ShadowLocations, SsrLocations,
};
use crate::source::{load_sources, save_sources, ShaderPaths, ShaderSources};
use crate::specialize::{self, DirectionalPair};
use crate::ShaderError;

/// Shader families known to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderFamily {
    Color,
    Shadow,
    DofBlur,
    DofCoc,
    Blend,
    Ssr,
    BloomSearch,
    Blur,
    Cubemap,
}

impl ShaderFamily {
    /// All families
    pub const ALL: [ShaderFamily; 9] = [
        Self::Color,
        Self::Shadow,
        Self::DofBlur,
        Self::DofCoc,
        Self::Blend,
        Self::Ssr,
        Self::BloomSearch,
        Self::Blur,
        Self::Cubemap,
    ];

    /// Short family name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Shadow => "shadow",
            Self::DofBlur => "dof_blur",
            Self::DofCoc => "dof_coc",
            Self::Blend => "blend",
            Self::Ssr => "ssr",
            Self::BloomSearch => "bloom_search",
            Self::Blur => "blur",
            Self::Cubemap => "cubemap",
        }
    }

    /// Whether the family produces a horizontal/vertical pair
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::DofBlur | Self::Blur)
    }
}

impl fmt::Display for ShaderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A linked program and its resolved locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram<P, L> {
    pub program: P,
    pub locations: L,
}

/// Builds shader families against one graphics API and configuration
pub struct ShaderBuilder<'a, A: GraphicsApi> {
    api: &'a A,
    config: &'a ShaderConfig,
    release_stages: bool,
}

impl<'a, A: GraphicsApi> ShaderBuilder<'a, A> {
    /// Create a builder that releases stage objects after linking
    pub fn new(api: &'a A, config: &'a ShaderConfig) -> Self {
        Self {
            api,
            config,
            release_stages: true,
        }
    }

    /// Keep or release stage objects after linking
    pub fn release_stages(mut self, release: bool) -> Self {
        self.release_stages = release;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ShaderConfig {
        self.config
    }

    /// Specialized sources of a family, without compiling them
    ///
    /// Directional families yield horizontal then vertical.
    pub fn specialize(
        &self,
        family: ShaderFamily,
        sources: &ShaderSources,
    ) -> Vec<ShaderSources> {
        let config = self.config;
        match family {
            ShaderFamily::Color => {
                vec![specialize::color_shader(sources, &config.flags, &config.color)]
            }
            ShaderFamily::Shadow => {
                vec![specialize::shadow_shader(sources, &config.flags, &config.shadow)]
            }
            ShaderFamily::DofBlur => specialize::dof_blur_shader(sources, &config.dof_blur)
                .into_array()
                .to_vec(),
            ShaderFamily::DofCoc => vec![specialize::dof_coc_shader(sources, &config.dof_blur)],
            ShaderFamily::Blend => vec![specialize::blend_shader(sources, &config.flags)],
            ShaderFamily::Ssr => vec![specialize::ssr_shader(sources)],
            ShaderFamily::BloomSearch => vec![specialize::bloom_search_shader(sources)],
            ShaderFamily::Blur => specialize::blur_shader(sources, &config.blur)
                .into_array()
                .to_vec(),
            ShaderFamily::Cubemap => vec![specialize::cubemap_shader(sources, &config.cubemap)],
        }
    }

    /// Write the specialized sources of a family next to each other
    ///
    /// `outputs` must hold one path set per variant (two for directional
    /// families, horizontal first).
    pub fn dump_sources(
        &self,
        family: ShaderFamily,
        paths: &ShaderPaths,
        outputs: &[ShaderPaths],
    ) -> Result<(), ShaderError> {
        let variants = self.specialize(family, &load_sources(paths)?);
        if variants.len() != outputs.len() {
            return Err(ShaderError::Config(format!(
                "{} family has {} variants but {} output path sets were given",
                family,
                variants.len(),
                outputs.len()
            )));
        }

        for (sources, output) in variants.iter().zip(outputs) {
            save_sources(sources, output)?;
        }
        log::debug!("Dumped {} {} variant(s)", variants.len(), family);
        Ok(())
    }

    fn program(
        &self,
        family: ShaderFamily,
        sources: &ShaderSources,
    ) -> Result<A::Program, ShaderError> {
        let program = build_program(self.api, sources, self.release_stages).map_err(|e| {
            log::error!("Failed to build {} shader: {}", family, e);
            e
        })?;
        log::info!("Built {} shader program {:?}", family, program);
        Ok(program)
    }

    /// Build both halves of a directional family
    ///
    /// The horizontal program is destroyed if the vertical one fails.
    fn directional<L>(
        &self,
        family: ShaderFamily,
        pair: DirectionalPair<ShaderSources>,
        resolve: impl Fn(&A, A::Program) -> L,
    ) -> Result<DirectionalPair<ShaderProgram<A::Program, L>>, ShaderError> {
        let horizontal = self.program(family, &pair.horizontal)?;
        let vertical = match self.program(family, &pair.vertical) {
            Ok(program) => program,
            Err(e) => {
                self.api.destroy_program(horizontal);
                return Err(e);
            }
        };

        Ok(DirectionalPair {
            horizontal: ShaderProgram {
                program: horizontal,
                locations: resolve(self.api, horizontal),
            },
            vertical: ShaderProgram {
                program: vertical,
                locations: resolve(self.api, vertical),
            },
        })
    }

    /// Opaque color pass
    pub fn color(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, ColorLocations>, ShaderError> {
        let config = self.config;
        let templates = load_sources(paths)?;
        let sources = specialize::color_shader(&templates, &config.flags, &config.color);
        let program = self.program(ShaderFamily::Color, &sources)?;
        let locations = ColorLocations::resolve(
            self.api,
            program,
            config.color.max_point_lights,
            config.color.max_dir_lights,
        );
        Ok(ShaderProgram { program, locations })
    }

    /// Shadow map pass; `paths` may carry a geometry stage
    pub fn shadow(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, ShadowLocations>, ShaderError> {
        let config = self.config;
        let templates = load_sources(paths)?;
        let sources = specialize::shadow_shader(&templates, &config.flags, &config.shadow);
        let program = self.program(ShaderFamily::Shadow, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: ShadowLocations::resolve(self.api, program),
        })
    }

    /// Depth of field blur, horizontal and vertical
    pub fn dof_blur(
        &self,
        paths: &ShaderPaths,
    ) -> Result<DirectionalPair<ShaderProgram<A::Program, DofBlurLocations>>, ShaderError> {
        let pair = specialize::dof_blur_shader(&load_sources(paths)?, &self.config.dof_blur);
        self.directional(ShaderFamily::DofBlur, pair, DofBlurLocations::resolve)
    }

    /// Circle-of-confusion map pass
    pub fn dof_coc(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, DofCocLocations>, ShaderError> {
        let sources = specialize::dof_coc_shader(&load_sources(paths)?, &self.config.dof_blur);
        let program = self.program(ShaderFamily::DofCoc, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: DofCocLocations::resolve(self.api, program),
        })
    }

    /// Tone mapping / bloom blend pass
    pub fn blend(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, BlendLocations>, ShaderError> {
        let sources = specialize::blend_shader(&load_sources(paths)?, &self.config.flags);
        let program = self.program(ShaderFamily::Blend, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: BlendLocations::resolve(self.api, program),
        })
    }

    /// Screen-space reflections pass
    pub fn ssr(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, SsrLocations>, ShaderError> {
        let sources = specialize::ssr_shader(&load_sources(paths)?);
        let program = self.program(ShaderFamily::Ssr, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: SsrLocations::resolve(self.api, program),
        })
    }

    /// Bloom bright-pixel search pass
    pub fn bloom_search(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, BloomSearchLocations>, ShaderError> {
        let sources = specialize::bloom_search_shader(&load_sources(paths)?);
        let program = self.program(ShaderFamily::BloomSearch, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: BloomSearchLocations::resolve(self.api, program),
        })
    }

    /// Separable blur, horizontal and vertical
    pub fn blur(
        &self,
        paths: &ShaderPaths,
    ) -> Result<DirectionalPair<ShaderProgram<A::Program, BlurLocations>>, ShaderError> {
        let pair = specialize::blur_shader(&load_sources(paths)?, &self.config.blur);
        self.directional(ShaderFamily::Blur, pair, BlurLocations::resolve)
    }

    /// Cubemap pass
    pub fn cubemap(
        &self,
        paths: &ShaderPaths,
    ) -> Result<ShaderProgram<A::Program, CubemapLocations>, ShaderError> {
        let sources = specialize::cubemap_shader(&load_sources(paths)?, &self.config.cubemap);
        let program = self.program(ShaderFamily::Cubemap, &sources)?;
        Ok(ShaderProgram {
            program,
            locations: CubemapLocations::resolve(self.api, program),
        })
    }
}
