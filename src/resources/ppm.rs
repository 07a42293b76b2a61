//! PPM (portable pixmap) decoding.
//!
//! The ASCII variant is read line by line:
//!
//! * line 0 holds the magic number (`P3`)
//! * line 1 holds `width height`
//! * line 2 holds the maximum channel value, which is ignored
//! * every following line holds channel samples in row-major RGB order
//!
//! Lines starting with `#` are comments and blank lines are skipped; neither
//! counts as a line. The binary variant (`P6`) is accepted as well.

use std::path::Path;

use anyhow::{Context, bail, ensure};

/// A decoded RGB image.
///
/// `data` always holds exactly `width * height * 3` bytes. When `flipped` is
/// set the buffer was reversed end-to-start, so pixels run bottom-right to
/// top-left and each pixel is stored as BGR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmImage {
    pub magic: String,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub flipped: bool,
}

impl PpmImage {
    /// Decode a PPM from raw file contents, binary (`P6`) or ASCII.
    pub fn from_bytes(bytes: &[u8], flip: bool) -> anyhow::Result<Self> {
        if bytes.starts_with(b"P6") {
            return Self::parse_binary(bytes, flip);
        }
        let text = std::str::from_utf8(bytes).context("ASCII PPM is not valid UTF-8")?;
        Self::parse(text, flip)
    }

    /// Decode an ASCII PPM.
    pub fn parse(text: &str, flip: bool) -> anyhow::Result<Self> {
        let mut magic = None;
        let mut dimensions = None;
        let mut data = Vec::new();

        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        for (iteration, line) in lines.enumerate() {
            match iteration {
                0 => {
                    ensure!(line.starts_with('P'), "PPM magic number missing, found {line:?}");
                    magic = Some(line.to_string());
                }
                1 => {
                    let (width, height) = parse_dimensions(line)?;
                    log::info!("PPM width, height = {width}, {height}");
                    // never reserve more than the text could possibly hold
                    data.reserve_exact(sample_count(width, height)?.min(text.len()));
                    dimensions = Some((width, height));
                }
                // maximum channel value
                2 => (),
                _ => {
                    for token in line.split_whitespace() {
                        let sample: u8 = token
                            .parse()
                            .with_context(|| format!("PPM sample {token:?} is not a byte"))?;
                        data.push(sample);
                    }
                }
            }
        }

        let (Some(magic), Some((width, height))) = (magic, dimensions) else {
            bail!("PPM header is incomplete");
        };
        Self::finish(magic, width, height, data, flip)
    }

    fn parse_binary(bytes: &[u8], flip: bool) -> anyhow::Result<Self> {
        let mut cursor = 0;
        let mut fields = Vec::with_capacity(4);
        while fields.len() < 4 {
            // skip whitespace and comments between header fields
            while cursor < bytes.len() {
                if bytes[cursor].is_ascii_whitespace() {
                    cursor += 1;
                } else if bytes[cursor] == b'#' {
                    while cursor < bytes.len() && bytes[cursor] != b'\n' {
                        cursor += 1;
                    }
                } else {
                    break;
                }
            }
            let start = cursor;
            while cursor < bytes.len() && !bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            ensure!(start < cursor, "PPM header is incomplete");
            fields.push(std::str::from_utf8(&bytes[start..cursor])?);
        }
        // exactly one whitespace byte separates the header from the raster
        cursor += 1;

        let (width, height) = parse_dimensions(&format!("{} {}", fields[1], fields[2]))?;
        let max_value: u32 = fields[3]
            .parse()
            .with_context(|| format!("PPM max value {:?} is not a number", fields[3]))?;
        ensure!(
            max_value <= u8::MAX as u32,
            "16-bit PPM samples are not supported (max value {max_value})"
        );
        let raster = bytes.get(cursor..).unwrap_or_default().to_vec();
        Self::finish(fields[0].to_string(), width, height, raster, flip)
    }

    fn finish(magic: String, width: u32, height: u32, mut data: Vec<u8>, flip: bool) -> anyhow::Result<Self> {
        let expected = sample_count(width, height)?;
        ensure!(
            data.len() == expected,
            "PPM holds {} samples but {width}x{height} needs {expected}",
            data.len()
        );
        if flip {
            data.reverse();
        }
        Ok(Self {
            magic,
            width,
            height,
            data,
            flipped: flip,
        })
    }

    /// Expand to RGBA, keeping the row order of `data` but undoing the channel
    /// swap introduced by flipping.
    pub fn to_rgba8(&self) -> anyhow::Result<image::RgbaImage> {
        let pixels = self
            .data
            .chunks_exact(3)
            .flat_map(|px| {
                if self.flipped {
                    [px[2], px[1], px[0], u8::MAX]
                } else {
                    [px[0], px[1], px[2], u8::MAX]
                }
            })
            .collect();
        image::RgbaImage::from_raw(self.width, self.height, pixels)
            .with_context(|| format!("{}x{} PPM has a short pixel buffer", self.width, self.height))
    }
}

/// Read and decode a PPM file.
pub fn load_ppm<P: AsRef<Path>>(path: P, flip: bool) -> anyhow::Result<PpmImage> {
    let path = path.as_ref();
    log::info!("Reading in ppm file: {}", path.display());
    let bytes = std::fs::read(path)
        .with_context(|| format!("Unable to open ppm file: {}", path.display()))?;
    PpmImage::from_bytes(&bytes, flip).with_context(|| format!("PPM not parsed correctly: {}", path.display()))
}

fn parse_dimensions(line: &str) -> anyhow::Result<(u32, u32)> {
    let mut tokens = line.split_whitespace();
    let mut next = |name: &str| -> anyhow::Result<i64> {
        let token = tokens
            .next()
            .with_context(|| format!("PPM {name} missing in {line:?}"))?;
        token
            .parse()
            .with_context(|| format!("PPM {name} {token:?} is not a number"))
    };
    let width = next("width")?;
    let height = next("height")?;
    ensure!(
        width > 0 && height > 0,
        "width and/or height dimensions are not positive ({width}x{height})"
    );
    Ok((
        u32::try_from(width).context("PPM width too large")?,
        u32::try_from(height).context("PPM height too large")?,
    ))
}

fn sample_count(width: u32, height: u32) -> anyhow::Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .with_context(|| format!("PPM dimensions {width}x{height} are too large"))
}
