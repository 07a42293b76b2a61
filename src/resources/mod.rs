use std::path::Path;

/**
 * This module contains all logic for loading shaders and textures from external files.
 */
pub mod ppm;
pub mod shader;
pub mod texture;

/// Read a text file relative to the working directory.
pub fn load_string<P: AsRef<Path>>(file_name: P) -> anyhow::Result<String> {
    use anyhow::Context;
    let path = file_name.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

/// Load shader source text.
///
/// A missing file is not fatal here: the error is logged and an empty source is
/// returned, which then fails to compile and leaves the program unusable.
pub fn load_shader<P: AsRef<Path>>(file_name: P) -> String {
    match load_string(&file_name) {
        Ok(source) => source,
        Err(e) => {
            log::error!(
                "LoadShader: file not found ({e:#}). Try an absolute file path to see if the file exists"
            );
            String::new()
        }
    }
}
