//! One plain-text PPM (`P3`) image per snapshot.
//!
//! Contact coordinates are treated as fractions of the frame: `x = 0` maps
//! to the left column and `x = 1` to the right one. Each contact is drawn as
//! a three-pixel diagonal mark in a color derived from its affinity and
//! position. Later contacts overwrite earlier ones where marks overlap.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use contact_types::{Contact, Snapshot};
use tracing::{debug, info};

use crate::error::RenderError;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Color of every pixel not covered by a contact.
pub const BACKGROUND: Rgb = [12, 12, 24];

/// Pixel dimensions of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl FrameSize {
    /// Create a frame size from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidInput`] for a zero width or height.
    pub fn validate(self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::invalid(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

/// A rendered raster image, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: FrameSize,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// A frame filled with [`BACKGROUND`].
    pub fn blank(size: FrameSize) -> Self {
        let count = usize::try_from(u64::from(size.width) * u64::from(size.height)).unwrap_or(0);
        Self {
            size,
            pixels: vec![BACKGROUND; count],
        }
    }

    /// Frame dimensions.
    pub const fn size(&self) -> FrameSize {
        self.size
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Set the color at `(x, y)`. Out-of-frame coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(pixel) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *pixel = color;
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let row = usize::try_from(y).ok()?;
        let col = usize::try_from(x).ok()?;
        let width = usize::try_from(self.size.width).ok()?;
        row.checked_mul(width)?.checked_add(col)
    }

    /// Draw one contact: its pixel plus the up-left and down-right
    /// diagonal neighbours, all clamped to the frame.
    fn plot(&mut self, contact: &Contact) {
        let max_x = self.size.width.saturating_sub(1);
        let max_y = self.size.height.saturating_sub(1);
        let px = to_pixel(contact.x, max_x);
        let py = to_pixel(contact.y, max_y);
        let color = contact_color(contact);

        self.set_pixel(px, py, color);
        self.set_pixel(px.saturating_sub(1), py.saturating_sub(1), color);
        self.set_pixel(
            px.saturating_add(1).min(max_x),
            py.saturating_add(1).min(max_y),
            color,
        );
    }

    /// Write the frame as ASCII PPM: a `P3` header, then one line per row
    /// of space-separated `R G B` triples.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "P3\n{} {}\n255", self.size.width, self.size.height)?;
        let width = usize::try_from(self.size.width).unwrap_or(usize::MAX).max(1);
        for row in self.pixels.chunks(width) {
            for (i, [r, g, b]) in row.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b" ")?;
                }
                write!(writer, "{r} {g} {b}")?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Map a fractional coordinate to a pixel index in `[0, max]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixel(fraction: f64, max: u32) -> u32 {
    let max_f = f64::from(max);
    // `as` saturates and maps NaN to 0.
    (fraction * max_f).round().clamp(0.0, max_f) as u32
}

/// Truncate to an 8-bit channel, saturating outside `[0, 255]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Color of a contact's mark: red from affinity, green from `x`, blue
/// from `y`.
pub fn contact_color(contact: &Contact) -> Rgb {
    [
        channel(80.0 + 175.0 * contact.affinity.min(1.0)),
        channel(60.0 + 195.0 * contact.x),
        channel(60.0 + 195.0 * contact.y),
    ]
}

/// Render one snapshot into a frame.
pub fn render_frame(snapshot: &Snapshot, size: FrameSize) -> Frame {
    let mut frame = Frame::blank(size);
    for contact in snapshot.contacts() {
        frame.plot(contact);
    }
    frame
}

/// File name of the frame at `index`: `frame_0000.ppm`, `frame_0001.ppm`, ...
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:04}.ppm")
}

/// Render every snapshot into `output_dir`, one PPM file per snapshot.
///
/// The directory (and any missing parents) is created first, so an empty
/// sequence still leaves the directory behind. Returns the written paths in
/// snapshot order.
///
/// # Errors
///
/// Returns [`RenderError::InvalidInput`] for a zero-sized frame and
/// [`RenderError::Io`] if the directory or a frame file cannot be written.
/// Frames written before a failure are kept.
pub fn generate_visual_frames(
    snapshots: &[Snapshot],
    output_dir: &Path,
    size: FrameSize,
) -> Result<Vec<PathBuf>, RenderError> {
    size.validate()?;
    fs::create_dir_all(output_dir).map_err(|e| RenderError::io(output_dir, e))?;

    let mut paths = Vec::with_capacity(snapshots.len());
    for (index, snapshot) in snapshots.iter().enumerate() {
        let path = output_dir.join(frame_file_name(index));
        let frame = render_frame(snapshot, size);
        write_frame_file(&frame, &path)?;
        debug!(frame = index, path = %path.display(), "Frame written");
        paths.push(path);
    }

    info!(
        dir = %output_dir.display(),
        frames = paths.len(),
        width = size.width,
        height = size.height,
        "Frames written"
    );
    Ok(paths)
}

fn write_frame_file(frame: &Frame, path: &Path) -> Result<(), RenderError> {
    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    frame
        .write_ppm(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| RenderError::io(path, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use contact_types::ContactId;

    use super::*;

    fn contact_at(x: f64, y: f64, affinity: f64) -> Contact {
        Contact::new(ContactId(0), x, y, 0.0, 0.0, affinity)
    }

    #[test]
    fn blank_frame_is_background() {
        let frame = Frame::blank(FrameSize::new(4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(frame.pixel(x, y), Some(BACKGROUND));
            }
        }
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn contact_color_follows_formula() {
        assert_eq!(contact_color(&contact_at(0.0, 0.0, 0.4)), [150, 60, 60]);
        assert_eq!(contact_color(&contact_at(1.0, 1.0, 1.0)), [255, 255, 255]);
        assert_eq!(contact_color(&contact_at(0.5, 0.2, 2.0)), [255, 157, 99]);
    }

    #[test]
    fn color_saturates_outside_unit_square() {
        assert_eq!(contact_color(&contact_at(1.5, -1.0, -1.0))[1..], [255, 0]);
    }

    #[test]
    fn contact_draws_diagonal_mark() {
        let snapshot = Snapshot::capture(0.1, vec![contact_at(0.5, 0.5, 1.0)]);
        let frame = render_frame(&snapshot, FrameSize::new(9, 9));
        let color = contact_color(&snapshot.contacts()[0]);
        assert_eq!(frame.pixel(4, 4), Some(color));
        assert_eq!(frame.pixel(3, 3), Some(color));
        assert_eq!(frame.pixel(5, 5), Some(color));
        assert_eq!(frame.pixel(3, 5), Some(BACKGROUND));
        assert_eq!(frame.pixel(5, 3), Some(BACKGROUND));
    }

    #[test]
    fn corner_mark_is_clamped_to_frame() {
        let snapshot = Snapshot::capture(0.1, vec![contact_at(0.0, 1.0, 1.0)]);
        let frame = render_frame(&snapshot, FrameSize::new(5, 5));
        let color = contact_color(&snapshot.contacts()[0]);
        assert_eq!(frame.pixel(0, 4), Some(color));
        // (-1, 3) clamps to (0, 3); (1, 5) clamps to (1, 4).
        assert_eq!(frame.pixel(0, 3), Some(color));
        assert_eq!(frame.pixel(1, 4), Some(color));
        let colored = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y) != Some(BACKGROUND))
            .count();
        assert_eq!(colored, 3);
    }

    #[test]
    fn later_contacts_overwrite_earlier() {
        let first = contact_at(0.5, 0.5, 0.4);
        let second = contact_at(0.5, 0.5, 1.0);
        let snapshot = Snapshot::capture(0.1, vec![first, second]);
        let frame = render_frame(&snapshot, FrameSize::new(11, 11));
        assert_eq!(frame.pixel(5, 5), Some(contact_color(&second)));
    }

    #[test]
    fn out_of_range_positions_land_on_edges() {
        let snapshot = Snapshot::capture(0.1, vec![contact_at(3.0, -2.0, 0.5)]);
        let frame = render_frame(&snapshot, FrameSize::new(6, 6));
        assert_eq!(frame.pixel(5, 0), Some(contact_color(&snapshot.contacts()[0])));
    }

    #[test]
    fn ppm_layout() {
        let mut frame = Frame::blank(FrameSize::new(2, 2));
        frame.set_pixel(1, 0, [255, 0, 7]);
        let mut out = Vec::new();
        frame.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n12 12 24 255 0 7\n12 12 24 12 12 24\n");
    }

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_file_name(0), "frame_0000.ppm");
        assert_eq!(frame_file_name(42), "frame_0042.ppm");
        assert_eq!(frame_file_name(12_345), "frame_12345.ppm");
    }
}
