//! Mesh variant: nested wireframe spheres and slice planes in a real 3D
//! scene, animated straight off the clock each frame.

use std::f32::consts::{FRAC_PI_4, TAU};

use wiresphere_common::{Color, Result};
use wiresphere_config::schema::MeshConfig;

use super::Palette;
use crate::backend::RenderBackend;
use crate::geometry::MeshGeometry;
use crate::scene::{Light, Material, MeshId, PerspectiveCamera, Scene};

/// `(radius, width segments, height segments, opacity)`; the outer
/// sphere's opacity comes from config.
const INNER_SPHERES: [(f32, u32, u32, f32); 2] = [(1.5, 24, 12, 0.5), (1.0, 16, 8, 0.3)];
const OUTER_SPHERE: (f32, u32, u32) = (2.0, 32, 16);

const PLANE_SIZE: f32 = 4.0;
const PLANE_ORBIT: f32 = 1.5;
const PLANE_LIFT: f32 = 0.2;
const PLANE_PEAK_OPACITY: f32 = 0.8;
const PLANE_JITTER: f32 = 0.3;

/// Phase span over which the planes fade in after the window opens.
const SLICE_RAMP: f32 = 0.3;

const TIME_SCALE: f64 = 0.6;

const AMBIENT: Color = Color::from_rgb_u32(0x404040);

/// Handles into the scene plus the per-frame animation rules.
#[derive(Debug)]
pub struct MeshSphere {
    cycle_ms: f64,
    window: (f32, f32),
    wireframe_peak: f32,
    wireframe_dim: f32,
    fade_step: f32,
    outer: MeshId,
    planes: Vec<MeshId>,
}

impl MeshSphere {
    /// Standard camera for `aspect`.
    pub fn camera(config: &MeshConfig, aspect: f32) -> PerspectiveCamera {
        PerspectiveCamera::new(config.fov_degrees as f32, aspect)
    }

    /// Populate `scene` with lights, spheres and slice planes.
    pub fn build<B: RenderBackend>(
        scene: &mut Scene<B>,
        config: &MeshConfig,
        slice_count: u32,
        palette: &Palette,
    ) -> Result<Self> {
        scene.add_light(Light::Ambient {
            color: AMBIENT,
            intensity: 0.6,
        });
        scene.add_light(Light::Point {
            color: palette.core,
            intensity: 0.8,
            distance: 100.0,
            position: [0.0, 0.0, PerspectiveCamera::DISTANCE],
        });

        let wireframe_peak = config.wireframe_peak as f32;
        let (r, w, h) = OUTER_SPHERE;
        let outer = scene.add(
            &MeshGeometry::sphere(r, w, h),
            Material::wireframe(palette.wireframe, wireframe_peak),
        )?;
        for (r, w, h, opacity) in INNER_SPHERES {
            scene.add(
                &MeshGeometry::sphere(r, w, h),
                Material::wireframe(palette.wireframe, opacity),
            )?;
        }

        let plane = MeshGeometry::plane(PLANE_SIZE, PLANE_SIZE);
        let mut planes = Vec::with_capacity(slice_count as usize);
        for i in 0..slice_count {
            let angle = i as f32 / slice_count as f32 * TAU;
            let id = scene.add(&plane, Material::double_sided(palette.slice, 0.0))?;
            if let Some(mesh) = scene.mesh_mut(id) {
                mesh.transform.position = plane_position(angle, 0.0);
                mesh.transform.rotation = [0.0, angle, FRAC_PI_4];
            }
            planes.push(id);
        }

        Ok(Self {
            cycle_ms: f64::from(config.cycle_ms),
            window: (
                config.slice_window_start as f32,
                config.slice_window_end as f32,
            ),
            wireframe_peak,
            wireframe_dim: config.wireframe_dim as f32,
            fade_step: config.fade_step as f32,
            outer,
            planes,
        })
    }

    /// Position within the slice cycle, `[0, 1)`.
    pub fn phase(&self, elapsed_ms: f64) -> f32 {
        ((elapsed_ms.max(0.0) % self.cycle_ms) / self.cycle_ms) as f32
    }

    pub fn in_window(&self, phase: f32) -> bool {
        phase > self.window.0 && phase < self.window.1
    }

    pub fn planes(&self) -> &[MeshId] {
        &self.planes
    }

    pub fn outer(&self) -> MeshId {
        self.outer
    }

    /// Advance the scene to `elapsed_ms` since mount.
    ///
    /// Group motion is a pure function of time. Fade-outs outside the
    /// slice window step by `fade_step` per call, so they run per frame.
    pub fn update<B: RenderBackend>(&self, scene: &mut Scene<B>, elapsed_ms: f64) {
        let time = (elapsed_ms / 1000.0 * TIME_SCALE) as f32;
        let group = scene.group_mut();
        group.rotation = [(time * 0.3).sin() * 0.2, time * 0.5, 0.0];
        group.set_uniform_scale(1.0 + (time * 2.0).sin() * 0.05);

        let phase = self.phase(elapsed_ms);
        let inside = self.in_window(phase);
        let ramp = ((phase - self.window.0) / SLICE_RAMP).clamp(0.0, 1.0);
        let count = self.planes.len() as f32;

        for (i, id) in self.planes.iter().enumerate() {
            let Some(mesh) = scene.mesh_mut(*id) else {
                continue;
            };
            if inside {
                mesh.material.opacity = ramp * PLANE_PEAK_OPACITY;
                let angle = i as f32 / count * TAU;
                let offset = (time * 3.0 + i as f32).sin() * PLANE_JITTER;
                mesh.transform.position = plane_position(angle, offset);
            } else {
                mesh.material.opacity = (mesh.material.opacity - self.fade_step).max(0.0);
            }
        }

        if let Some(outer) = scene.mesh_mut(self.outer) {
            outer.material.opacity = if inside {
                self.wireframe_dim
            } else {
                (outer.material.opacity + self.fade_step).min(self.wireframe_peak)
            };
        }
    }
}

fn plane_position(angle: f32, offset: f32) -> [f32; 3] {
    let (s, c) = angle.sin_cos();
    [
        c * (PLANE_ORBIT + offset),
        s * (PLANE_LIFT + offset * 0.5),
        s * (PLANE_ORBIT + offset),
    ]
}

// =============================================================================
// Tests
// =============================================================================
