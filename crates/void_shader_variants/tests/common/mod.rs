//! Recording graphics API used by the integration tests
//!
//! Stage "compilation" evaluates `#define`/`#ifdef`/`#ifndef`/`#else`/`#endif`
//! and collects `uniform <type> <name>;` and (vertex stage) `in <type> <name>;`
//! declarations from the active lines. An active `#error` line fails
//! compilation.

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use void_shader_variants::{GraphicsApi, Location, ShaderStage};

#[derive(Debug, Clone)]
pub struct StageObject {
    pub kind: ShaderStage,
    pub source: String,
    pub attribs: Vec<String>,
    pub uniforms: Vec<String>,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProgramObject {
    pub stages: Vec<usize>,
    pub attribs: Vec<String>,
    pub uniforms: Vec<String>,
    pub linked: bool,
    pub destroyed: bool,
}

#[derive(Debug, Default)]
struct State {
    stages: Vec<StageObject>,
    programs: Vec<ProgramObject>,
}

#[derive(Debug, Default)]
pub struct MockGl {
    state: Mutex<State>,
    /// Reject every link request
    pub fail_link: bool,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    /// Stage objects created and not yet destroyed
    pub fn live_stages(&self) -> usize {
        self.state.lock().stages.iter().filter(|s| !s.destroyed).count()
    }

    /// Program objects created and not yet destroyed
    pub fn live_programs(&self) -> usize {
        self.state.lock().programs.iter().filter(|p| !p.destroyed).count()
    }

    /// Number of stage objects ever created
    pub fn created_stages(&self) -> usize {
        self.state.lock().stages.len()
    }

    /// Source uploaded for `kind` in `program`
    pub fn stage_source(&self, program: usize, kind: ShaderStage) -> Option<String> {
        let state = self.state.lock();
        state.programs[program]
            .stages
            .iter()
            .map(|&index| &state.stages[index])
            .find(|stage| stage.kind == kind)
            .map(|stage| stage.source.clone())
    }

    pub fn stage_kinds(&self, program: usize) -> Vec<ShaderStage> {
        let state = self.state.lock();
        state.programs[program]
            .stages
            .iter()
            .map(|&index| state.stages[index].kind)
            .collect()
    }
}

/// Declared name of `uniform <type> <name>;` or `in <type> <name>;`
fn declared_name(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword)?.strip_prefix(' ')?;
    let mut tokens = rest.split_whitespace();
    let _ty = tokens.next()?;
    let name = tokens.next()?;
    Some(name.trim_end_matches(';').to_string())
}

struct Preprocessed {
    attribs: Vec<String>,
    uniforms: Vec<String>,
    error: Option<String>,
}

fn preprocess(kind: ShaderStage, source: &str) -> Preprocessed {
    let mut defined = HashSet::new();
    let mut active = vec![true];
    let mut out = Preprocessed {
        attribs: Vec::new(),
        uniforms: Vec::new(),
        error: None,
    };

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        let enabled = active.iter().all(|&a| a);

        if let Some(name) = line.strip_prefix("#ifdef ") {
            active.push(defined.contains(name.trim()));
        } else if let Some(name) = line.strip_prefix("#ifndef ") {
            active.push(!defined.contains(name.trim()));
        } else if line == "#else" {
            if let Some(last) = active.last_mut() {
                *last = !*last;
            }
        } else if line == "#endif" {
            active.pop();
        } else if !enabled {
            continue;
        } else if let Some(rest) = line.strip_prefix("#define ") {
            if let Some(name) = rest.split_whitespace().next() {
                defined.insert(name.to_string());
            }
        } else if let Some(message) = line.strip_prefix("#error") {
            out.error = Some(format!("ERROR: 0:{}: '#error' :{}", number + 1, message));
        } else if let Some(name) = declared_name(line, "uniform") {
            out.uniforms.push(name);
        } else if kind == ShaderStage::Vertex {
            if let Some(name) = declared_name(line, "in") {
                out.attribs.push(name);
            }
        }
    }

    out
}

impl GraphicsApi for MockGl {
    type Stage = usize;
    type Program = usize;

    fn create_stage(&self, kind: ShaderStage) -> Result<usize, String> {
        let mut state = self.state.lock();
        state.stages.push(StageObject {
            kind,
            source: String::new(),
            attribs: Vec::new(),
            uniforms: Vec::new(),
            destroyed: false,
        });
        Ok(state.stages.len() - 1)
    }

    fn compile_stage(&self, stage: usize, source: &str) -> Result<(), String> {
        let mut state = self.state.lock();
        let object = &mut state.stages[stage];
        let result = preprocess(object.kind, source);
        object.source = source.to_string();
        object.attribs = result.attribs;
        object.uniforms = result.uniforms;
        match result.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn destroy_stage(&self, stage: usize) {
        let mut state = self.state.lock();
        assert!(!state.stages[stage].destroyed, "stage {} destroyed twice", stage);
        state.stages[stage].destroyed = true;
    }

    fn create_program(&self) -> Result<usize, String> {
        let mut state = self.state.lock();
        state.programs.push(ProgramObject::default());
        Ok(state.programs.len() - 1)
    }

    fn attach_stage(&self, program: usize, stage: usize) {
        self.state.lock().programs[program].stages.push(stage);
    }

    fn link_program(&self, program: usize) -> Result<(), String> {
        if self.fail_link {
            return Err("error: unresolved varying 'texCoord'".to_string());
        }

        let mut state = self.state.lock();
        let mut attribs = Vec::new();
        let mut uniforms = Vec::new();
        for &index in &state.programs[program].stages {
            let stage = &state.stages[index];
            attribs.extend(stage.attribs.iter().cloned());
            for uniform in &stage.uniforms {
                if !uniforms.contains(uniform) {
                    uniforms.push(uniform.clone());
                }
            }
        }

        let object = &mut state.programs[program];
        object.attribs = attribs;
        object.uniforms = uniforms;
        object.linked = true;
        Ok(())
    }

    fn destroy_program(&self, program: usize) {
        self.state.lock().programs[program].destroyed = true;
    }

    fn attrib_location(&self, program: usize, name: &str) -> Location {
        let state = self.state.lock();
        let object = &state.programs[program];
        match object.attribs.iter().position(|a| a == name) {
            Some(slot) if object.linked => Location::from_raw(slot as i32),
            _ => Location::NOT_FOUND,
        }
    }

    fn uniform_location(&self, program: usize, name: &str) -> Location {
        let state = self.state.lock();
        let object = &state.programs[program];
        match object.uniforms.iter().position(|u| u == name) {
            Some(slot) if object.linked => Location::from_raw(slot as i32),
            _ => Location::NOT_FOUND,
        }
    }
}

/// Write a template file and return its path
pub fn write_template(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("template should be writable");
    path
}
