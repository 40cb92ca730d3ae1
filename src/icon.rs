/// Shape-space geometry of the badge: a disk carrying a microphone glyph.
///
/// Glyph coordinates are normalised by the disk radius, so `(0, 0)` is the
/// centre of the icon and `±1` touches the disk edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicGeometry {
    /// Disk radius as a fraction of the icon size.
    pub disk_ratio: f32,
    /// Width of the anti-aliased rim, in pixels.
    pub edge_px: f32,

    pub capsule_half_width: f32,
    pub capsule_top: f32,
    pub capsule_bottom: f32,

    pub arc_center_y: f32,
    pub arc_radius: f32,
    pub arc_thickness: f32,
    pub arc_max_y: f32,

    pub stand_half_width: f32,
    pub stand_top: f32,
    pub stand_bottom: f32,

    pub base_half_width: f32,
    pub base_y: f32,
    pub base_half_thickness: f32,
}

impl MicGeometry {
    pub const DEFAULT: Self = Self {
        disk_ratio: 0.45,
        edge_px: 1.5,

        capsule_half_width: 0.22,
        capsule_top: -0.55,
        capsule_bottom: 0.0,

        arc_center_y: -0.1,
        arc_radius: 0.38,
        arc_thickness: 0.055,
        arc_max_y: 0.25,

        stand_half_width: 0.04,
        stand_top: 0.15,
        stand_bottom: 0.45,

        base_half_width: 0.2,
        base_y: 0.45,
        base_half_thickness: 0.04,
    };

    /// Rounded-end body. The cap radius equals the half-width, so both ends
    /// are full semicircles.
    fn in_capsule(&self, nx: f32, ny: f32) -> bool {
        let w = self.capsule_half_width;
        if nx.abs() > w {
            return false;
        }
        let upper = self.capsule_top + w;
        let lower = self.capsule_bottom - w;
        if ny < upper {
            (nx * nx + (ny - upper).powi(2)).sqrt() <= w
        } else if ny > lower {
            (nx * nx + (ny - lower).powi(2)).sqrt() <= w
        } else {
            true
        }
    }

    /// Cradle: the lower half of a ring around the body.
    fn in_arc(&self, nx: f32, ny: f32) -> bool {
        if ny < self.arc_center_y || ny > self.arc_max_y {
            return false;
        }
        let arc_dist = (nx * nx + (ny - self.arc_center_y).powi(2)).sqrt();
        (arc_dist - self.arc_radius).abs() <= self.arc_thickness
    }

    fn in_stand(&self, nx: f32, ny: f32) -> bool {
        nx.abs() <= self.stand_half_width && ny >= self.stand_top && ny <= self.stand_bottom
    }

    fn in_base(&self, nx: f32, ny: f32) -> bool {
        nx.abs() <= self.base_half_width && (ny - self.base_y).abs() <= self.base_half_thickness
    }

    pub fn glyph_contains(&self, nx: f32, ny: f32) -> bool {
        self.in_capsule(nx, ny)
            || self.in_arc(nx, ny)
            || self.in_stand(nx, ny)
            || self.in_base(nx, ny)
    }
}

impl Default for MicGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Background gradient endpoints (top-left → bottom-right).
const GRADIENT_FROM: [f32; 3] = [40.0, 120.0, 220.0];
const GRADIENT_TO: [f32; 3] = [60.0, 150.0, 180.0];

/// True if the shape-space point `(nx, ny)` is part of the white microphone.
pub fn mic_glyph_contains(nx: f32, ny: f32) -> bool {
    MicGeometry::DEFAULT.glyph_contains(nx, ny)
}

/// Generate an RGBA icon at the given `size`.
///
/// Draws a blue gradient disk with a white microphone silhouette. The buffer
/// is row-major, four bytes per pixel, `size * size * 4` bytes long.
pub fn create_icon(size: u32) -> Vec<u8> {
    render_with(size, &MicGeometry::DEFAULT)
}

pub fn render_with(size: u32, geo: &MicGeometry) -> Vec<u8> {
    let s = size as f32;
    let mut data = vec![0u8; size as usize * size as usize * 4];
    let cx = s / 2.0;
    let cy = s / 2.0;
    let radius = s * geo.disk_ratio;

    for y in 0..size {
        for x in 0..size {
            let idx = (y as usize * size as usize + x as usize) * 4;
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist > radius {
                // Outside the disk: left as transparent black
                continue;
            }

            let t = ((dx + dy) / (2.0 * radius) + 0.5).clamp(0.0, 1.0);
            let mut rgb = [0u8; 3];
            for (c, out) in rgb.iter_mut().enumerate() {
                let v = GRADIENT_FROM[c] + t * (GRADIENT_TO[c] - GRADIENT_FROM[c]);
                *out = v as u8;
            }

            // Anti-alias edge of the disk
            let edge_dist = radius - dist;
            let a = if edge_dist < geo.edge_px {
                (255.0 * (edge_dist / geo.edge_px)) as u8
            } else {
                255
            };

            let nx = dx / radius;
            let ny = dy / radius;
            if geo.glyph_contains(nx, ny) {
                rgb = [255, 255, 255];
            }

            data[idx..idx + 3].copy_from_slice(&rgb);
            data[idx + 3] = a;
        }
    }
    data
}
