//! Shader compilation, linking and validation.
//!
//! GLSL sources are compiled on the host with naga's GLSL frontend, which gives
//! compile diagnostics before anything reaches the GPU. Linking checks that the
//! two stages fit together (every fragment input location is written by the
//! vertex stage). Failures are logged and produce invalid objects rather than
//! errors: a broken program renders nothing instead of stopping the demo.

use std::{borrow::Cow, collections::BTreeSet};

use naga::{
    Binding, Handle, Module, ShaderStage, Type, TypeInner,
    front::glsl,
    valid::{Capabilities, ValidationFlags, Validator},
};

/// Entry point name the GLSL frontend gives to `void main()`.
pub const ENTRY_POINT: &str = "main";

/// Result of compiling one stage. Invalid when `module()` is `None`; the
/// compiler output is then available through `diagnostic()`.
#[derive(Debug)]
pub struct CompiledShader {
    stage: ShaderStage,
    module: Option<Module>,
    diagnostic: String,
}

impl CompiledShader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn module(&self) -> Option<&Module> {
        self.module.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.module.is_some()
    }

    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}

/// Compile and validate a single GLSL stage.
pub fn compile_shader(stage: ShaderStage, source: &str) -> CompiledShader {
    let compiled = glsl::Frontend::default()
        .parse(&glsl::Options::from(stage), source)
        .map_err(|errors| errors.emit_to_string(source))
        .and_then(|module| {
            validator()
                .validate(&module)
                .map(|_| module)
                .map_err(|error| error.emit_to_string(source))
        });

    match compiled {
        Ok(module) => CompiledShader {
            stage,
            module: Some(module),
            diagnostic: String::new(),
        },
        Err(mut diagnostic) => {
            if diagnostic.trim().is_empty() {
                diagnostic = String::from("unknown compiler error");
            }
            log::error!(
                "ERROR: {} shader compilation failed.\n{}",
                stage_name(stage),
                diagnostic
            );
            CompiledShader {
                stage,
                module: None,
                diagnostic,
            }
        }
    }
}

/// A linked vertex + fragment pair.
#[derive(Debug)]
pub struct ShaderProgram {
    vertex: Option<Module>,
    fragment: Option<Module>,
    log: String,
}

impl ShaderProgram {
    /// Link two compiled stages. The stages are consumed; only the linked
    /// program keeps their modules.
    pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Self {
        let mut log = String::new();
        if vertex.stage != ShaderStage::Vertex {
            let found = stage_name(vertex.stage);
            append_log(&mut log, format!("{found} shader attached as vertex stage"));
        }
        if fragment.stage != ShaderStage::Fragment {
            let found = stage_name(fragment.stage);
            append_log(&mut log, format!("{found} shader attached as fragment stage"));
        }

        match (&vertex.module, &fragment.module) {
            (Some(vs), Some(fs)) => match (
                entry_point(vs, ShaderStage::Vertex),
                entry_point(fs, ShaderStage::Fragment),
            ) {
                (Some(vs_entry), Some(fs_entry)) => {
                    let written = vertex_outputs(vs, vs_entry);
                    let missing: Vec<_> = fragment_inputs(fs, fs_entry)
                        .difference(&written)
                        .copied()
                        .collect();
                    if !missing.is_empty() {
                        append_log(
                            &mut log,
                            format!("fragment inputs at locations {missing:?} are not written by the vertex shader"),
                        );
                    }
                }
                (vs_entry, fs_entry) => {
                    if vs_entry.is_none() {
                        append_log(&mut log, "vertex shader has no `main` entry point");
                    }
                    if fs_entry.is_none() {
                        append_log(&mut log, "fragment shader has no `main` entry point");
                    }
                }
            },
            (vs, fs) => {
                if vs.is_none() {
                    append_log(&mut log, "vertex shader is not compiled");
                }
                if fs.is_none() {
                    append_log(&mut log, "fragment shader is not compiled");
                }
            }
        }

        if !log.is_empty() {
            log::error!("ERROR: shader program linking failed.\n{log}");
        }
        Self {
            vertex: vertex.module,
            fragment: fragment.module,
            log,
        }
    }

    /// Re-validate both stages of a linked program, appending problems to the log.
    pub fn validate(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let mut validator = validator();
        for (name, module) in [("vertex", &self.vertex), ("fragment", &self.fragment)] {
            if let Some(Err(error)) = module.as_ref().map(|m| validator.validate(m)) {
                log::error!("ERROR: {name} stage failed program validation: {error}");
                append_log(&mut self.log, format!("{name} stage: {error}"));
            }
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.log.is_empty() && self.vertex.is_some() && self.fragment.is_some()
    }

    pub fn log(&self) -> &str {
        &self.log
    }

    /// Hand the program to the GPU. The host-side modules are dropped once the
    /// device has its own copies. Returns `None` for an invalid program.
    pub fn into_gpu(self, device: &wgpu::Device) -> Option<GpuProgram> {
        let valid = self.is_valid();
        let (Some(vertex), Some(fragment), true) = (self.vertex, self.fragment, valid) else {
            log::error!("Shader program is not usable, nothing will be drawn");
            return None;
        };
        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Vertex Shader"),
            source: wgpu::ShaderSource::Naga(Cow::Owned(vertex)),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Fragment Shader"),
            source: wgpu::ShaderSource::Naga(Cow::Owned(fragment)),
        });
        Some(GpuProgram { vertex, fragment })
    }
}

/// Device-side shader modules of a linked program.
#[derive(Debug)]
pub struct GpuProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

/// Compile both stages, link and validate them.
pub fn create_shader_program(vertex_source: &str, fragment_source: &str) -> ShaderProgram {
    let vertex = compile_shader(ShaderStage::Vertex, vertex_source);
    let fragment = compile_shader(ShaderStage::Fragment, fragment_source);
    let mut program = ShaderProgram::link(vertex, fragment);
    program.validate();
    program
}

// One problem per line.
fn append_log<S: AsRef<str>>(log: &mut String, entry: S) {
    if !log.is_empty() {
        log.push('\n');
    }
    log.push_str(entry.as_ref());
}

fn validator() -> Validator {
    Validator::new(ValidationFlags::all(), Capabilities::all())
}

fn stage_name(stage: ShaderStage) -> &'static str {
    match stage {
        ShaderStage::Vertex => "vertex",
        ShaderStage::Fragment => "fragment",
        ShaderStage::Compute => "compute",
        _ => "mesh pipeline",
    }
}

fn entry_point(module: &Module, stage: ShaderStage) -> Option<&naga::EntryPoint> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == ENTRY_POINT)
}

fn vertex_outputs(module: &Module, entry: &naga::EntryPoint) -> BTreeSet<u32> {
    let mut locations = BTreeSet::new();
    if let Some(result) = &entry.function.result {
        collect_locations(module, result.binding.as_ref(), result.ty, &mut locations);
    }
    locations
}

fn fragment_inputs(module: &Module, entry: &naga::EntryPoint) -> BTreeSet<u32> {
    let mut locations = BTreeSet::new();
    for argument in &entry.function.arguments {
        collect_locations(module, argument.binding.as_ref(), argument.ty, &mut locations);
    }
    locations
}

// User-defined varyings either carry a binding themselves or are members of
// an interface struct.
fn collect_locations(
    module: &Module,
    binding: Option<&Binding>,
    ty: Handle<Type>,
    locations: &mut BTreeSet<u32>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            locations.insert(*location);
        }
        Some(Binding::BuiltIn(_)) => (),
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    if let Some(Binding::Location { location, .. }) = &member.binding {
                        locations.insert(*location);
                    }
                }
            }
        }
    }
}
