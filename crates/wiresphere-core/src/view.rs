//! Mounted sphere view: owns the backend, the animation parameters and
//! the repeating redraw task for one variant.

use tracing::{debug, info};
use wiresphere_common::{Result, Viewport};
use wiresphere_config::schema::SphereVariant;
use wiresphere_config::WireSphereConfig;

use crate::backend::RenderBackend;
use crate::layout::Layout;
use crate::scene::Scene;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::timeline::ParameterStore;
use crate::variants::{FlatSphere, MeshSphere, Palette, ProjectedSphere};

/// Work the view schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTask {
    /// Compose and submit a frame; runs on every poll.
    Redraw,
    /// Ask the host to log frame statistics.
    ReportStats,
}

/// What happened during one [`SphereView::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since mount.
    pub elapsed_ms: f64,
    /// The stats interval elapsed on this frame.
    pub report_stats: bool,
}

enum Stage<B: RenderBackend> {
    Flat { backend: B, sphere: FlatSphere },
    Projected { backend: B, sphere: ProjectedSphere },
    Mesh { scene: Scene<B>, sphere: MeshSphere },
}

/// A mounted sphere animation.
///
/// Created by [`SphereView::mount`], driven by [`SphereView::frame`] once
/// per display refresh, and torn down by [`SphereView::unmount`] or drop.
/// After teardown every call is a silent no-op.
pub struct SphereView<B: RenderBackend> {
    variant: SphereVariant,
    layout: Layout,
    palette: Palette,
    params: ParameterStore,
    scheduler: Scheduler<ViewTask>,
    redraw: TaskHandle,
    mounted_at_ms: f64,
    stage: Option<Stage<B>>,
}

impl<B: RenderBackend> SphereView<B> {
    /// Build geometry, start the timelines and schedule the redraw loop.
    ///
    /// Fails only if the mesh variant cannot acquire backend resources;
    /// anything acquired before the failure is released again.
    pub fn mount(
        config: &WireSphereConfig,
        viewport: Viewport,
        mut backend: B,
        now_ms: f64,
    ) -> Result<Self> {
        let variant = config.sphere.variant;
        let layout = Layout::new(viewport);
        let palette = Palette::from_config(&config.colors);
        let slice_count = config.sphere.slice_count;
        let mut params = ParameterStore::new();

        backend.resize(viewport);
        let stage = match variant {
            SphereVariant::Flat => Stage::Flat {
                sphere: FlatSphere::mount(&config.flat, slice_count, &layout, &mut params, now_ms),
                backend,
            },
            SphereVariant::Projected => Stage::Projected {
                sphere: ProjectedSphere::mount(
                    &config.projected,
                    slice_count,
                    &layout,
                    &mut params,
                    now_ms,
                ),
                backend,
            },
            SphereVariant::Mesh => {
                let camera = MeshSphere::camera(&config.mesh, viewport.aspect());
                let mut scene = Scene::new(backend, camera, palette.background);
                let sphere = MeshSphere::build(&mut scene, &config.mesh, slice_count, &palette)?;
                Stage::Mesh { scene, sphere }
            }
        };

        let mut scheduler = Scheduler::new();
        let redraw = scheduler.every(ViewTask::Redraw, 0.0, now_ms);
        let stats_interval = f64::from(config.performance.stats_interval_ms);
        if stats_interval > 0.0 {
            scheduler.every(ViewTask::ReportStats, stats_interval, now_ms + stats_interval);
        }

        info!(
            variant = variant.as_str(),
            width = viewport.width,
            height = viewport.height,
            radius = layout.radius,
            parameters = params.len(),
            "sphere view mounted"
        );

        Ok(Self {
            variant,
            layout,
            palette,
            params,
            scheduler,
            redraw,
            mounted_at_ms: now_ms,
            stage: Some(stage),
        })
    }

    /// Advance every timeline to `now_ms` and submit one frame.
    ///
    /// Returns `Ok(None)` once the view is unmounted or its redraw task
    /// has been cancelled.
    pub fn frame(&mut self, now_ms: f64) -> Result<Option<FrameTick>> {
        if !self.redraw.is_alive() {
            return Ok(None);
        }
        let Some(stage) = self.stage.as_mut() else {
            return Ok(None);
        };

        let tasks = self.scheduler.due(now_ms);
        if !tasks.contains(&ViewTask::Redraw) {
            return Ok(None);
        }

        self.params.tick(now_ms);
        let elapsed_ms = now_ms - self.mounted_at_ms;

        match stage {
            Stage::Flat { backend, sphere } => {
                let list = sphere.compose(&self.params, &self.layout, &self.palette, elapsed_ms);
                backend.draw_canvas(&list)?;
            }
            Stage::Projected { backend, sphere } => {
                let list = sphere.compose(&self.params, &self.layout, &self.palette);
                backend.draw_canvas(&list)?;
            }
            Stage::Mesh { scene, sphere } => {
                sphere.update(scene, elapsed_ms);
                scene.render_frame()?;
            }
        }

        Ok(Some(FrameTick {
            elapsed_ms,
            report_stats: tasks.contains(&ViewTask::ReportStats),
        }))
    }

    /// Re-layout for a new viewport. Animation state is untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };
        self.layout = Layout::new(viewport);
        match stage {
            Stage::Flat { backend, sphere } => {
                sphere.resize(&self.layout);
                backend.resize(viewport);
            }
            Stage::Projected { backend, sphere } => {
                sphere.resize(&self.layout);
                backend.resize(viewport);
            }
            Stage::Mesh { scene, .. } => scene.resize(viewport),
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "sphere view resized"
        );
    }

    /// Tear down: cancel the redraw loop, stop every timeline, then
    /// release backend resources in reverse order. Idempotent.
    pub fn unmount(&mut self) {
        let Some(stage) = self.stage.take() else {
            return;
        };
        self.redraw.cancel();
        self.scheduler.cancel_all();
        self.params.stop_all();

        match stage {
            Stage::Flat { mut backend, .. } | Stage::Projected { mut backend, .. } => {
                backend.shutdown();
            }
            Stage::Mesh { mut scene, .. } => scene.dispose(),
        }
        info!(variant = self.variant.as_str(), "sphere view unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.stage.is_some()
    }

    pub fn variant(&self) -> SphereVariant {
        self.variant
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Handle to the redraw loop; cancelling it stops frames immediately.
    pub fn redraw_handle(&self) -> TaskHandle {
        self.redraw.clone()
    }

    /// The backend, while mounted.
    pub fn backend(&self) -> Option<&B> {
        match self.stage.as_ref()? {
            Stage::Flat { backend, .. } | Stage::Projected { backend, .. } => Some(backend),
            Stage::Mesh { scene, .. } => Some(scene.backend()),
        }
    }

    pub fn backend_mut(&mut self) -> Option<&mut B> {
        match self.stage.as_mut()? {
            Stage::Flat { backend, .. } | Stage::Projected { backend, .. } => Some(backend),
            Stage::Mesh { scene, .. } => Some(scene.backend_mut()),
        }
    }

    /// The mesh variant's scene, while mounted.
    pub fn scene(&self) -> Option<&Scene<B>> {
        match self.stage.as_ref()? {
            Stage::Mesh { scene, .. } => Some(scene),
            _ => None,
        }
    }
}

impl<B: RenderBackend> Drop for SphereView<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{Call, CallLog, RecordingBackend};

    fn config(variant: SphereVariant) -> WireSphereConfig {
        let mut config = WireSphereConfig::default();
        config.sphere.variant = variant;
        config.performance.stats_interval_ms = 1000;
        config
    }

    fn mount(variant: SphereVariant) -> (SphereView<RecordingBackend>, CallLog) {
        let (backend, log) = RecordingBackend::new();
        let view =
            SphereView::mount(&config(variant), Viewport::new(390.0, 844.0), backend, 500.0)
                .unwrap();
        (view, log)
    }

    fn count(log: &CallLog, pred: impl Fn(&Call) -> bool) -> usize {
        log.borrow().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn every_variant_draws_frames() {
        for variant in [SphereVariant::Flat, SphereVariant::Projected, SphereVariant::Mesh] {
            let (mut view, log) = mount(variant);
            let tick = view.frame(516.0).unwrap().unwrap();
            assert_eq!(tick.elapsed_ms, 16.0);
            assert!(!tick.report_stats);
            let drawn = count(&log, |c| matches!(c, Call::Canvas(_) | Call::Scene { .. }));
            assert_eq!(drawn, 1, "{variant:?}");
        }
    }

    #[test]
    fn stats_task_fires_on_interval() {
        let (mut view, _) = mount(SphereVariant::Projected);
        assert!(!view.frame(1000.0).unwrap().unwrap().report_stats);
        assert!(view.frame(1500.0).unwrap().unwrap().report_stats);
        assert!(!view.frame(1516.0).unwrap().unwrap().report_stats);
    }

    #[test]
    fn timelines_are_relative_to_mount() {
        let (mut view, _) = mount(SphereVariant::Projected);
        view.frame(500.0 + 3000.0).unwrap();
        let slice = view.params().find("slice_progress").unwrap();
        assert_eq!(view.params().value(slice), 1.0);
    }

    #[test]
    fn no_draw_or_mutation_after_unmount() {
        let (mut view, log) = mount(SphereVariant::Flat);
        view.frame(600.0).unwrap();
        let snapshot: Vec<f32> = view.params().iter().map(|p| p.value()).collect();

        view.unmount();
        let calls_after_unmount = log.borrow().len();
        assert!(view.frame(5000.0).unwrap().is_none());
        view.resize(Viewport::new(100.0, 100.0));

        assert_eq!(log.borrow().len(), calls_after_unmount);
        let after: Vec<f32> = view.params().iter().map(|p| p.value()).collect();
        assert_eq!(snapshot, after);
        assert!(!view.is_mounted());
        assert!(view.backend().is_none());
    }

    #[test]
    fn cancelled_redraw_stops_frames() {
        let (mut view, log) = mount(SphereVariant::Projected);
        view.redraw_handle().cancel();
        assert!(view.frame(600.0).unwrap().is_none());
        assert_eq!(count(&log, |c| matches!(c, Call::Canvas(_))), 0);
    }

    #[test]
    fn unmount_is_idempotent_and_drop_after_unmount_is_quiet() {
        let (mut view, log) = mount(SphereVariant::Mesh);
        view.unmount();
        view.unmount();
        drop(view);
        assert_eq!(count(&log, |c| *c == Call::Shutdown), 1);
    }

    #[test]
    fn mesh_teardown_releases_in_reverse_then_shuts_down() {
        let (view, log) = mount(SphereVariant::Mesh);
        drop(view);
        let calls = log.borrow().clone();
        let acquired: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                Call::AcquireGeometry(id) | Call::AcquireMaterial(id) => Some(*id),
                _ => None,
            })
            .collect();
        let mut released: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                Call::Release(id) => Some(*id),
                _ => None,
            })
            .collect();
        released.reverse();
        assert_eq!(acquired, released);
        assert_eq!(calls.last(), Some(&Call::Shutdown));
    }

    #[test]
    fn resize_changes_aspect_only() {
        let (mut view, log) = mount(SphereVariant::Mesh);
        view.frame(2600.0).unwrap();
        let group_before = *view.scene().unwrap().group();
        let opacities_before: Vec<f32> = view
            .scene()
            .unwrap()
            .meshes()
            .iter()
            .map(|m| m.material.opacity)
            .collect();

        view.resize(Viewport::new(1000.0, 500.0));
        let scene = view.scene().unwrap();
        assert_eq!(scene.camera().aspect, 2.0);
        assert_eq!(*scene.group(), group_before);
        let opacities_after: Vec<f32> = scene.meshes().iter().map(|m| m.material.opacity).collect();
        assert_eq!(opacities_before, opacities_after);
        assert!(log
            .borrow()
            .contains(&Call::Resize(Viewport::new(1000.0, 500.0))));

        view.frame(2616.0).unwrap();
        let last_aspect = log.borrow().iter().rev().find_map(|c| match c {
            Call::Scene { aspect, .. } => Some(*aspect),
            _ => None,
        });
        assert_eq!(last_aspect, Some(2.0));
    }

    #[test]
    fn resize_keeps_2d_animation_phase() {
        let (mut view, _) = mount(SphereVariant::Projected);
        view.frame(2000.0).unwrap();
        let values: Vec<f32> = view.params().iter().map(|p| p.value()).collect();
        view.resize(Viewport::new(800.0, 600.0));
        assert!((view.layout().radius - 210.0).abs() < 1e-3);
        let after: Vec<f32> = view.params().iter().map(|p| p.value()).collect();
        assert_eq!(values, after);
    }

    #[test]
    fn failed_mount_releases_partial_resources() {
        let (mut backend, log) = RecordingBackend::new();
        backend.fail_acquire_after = Some(3);
        let result = SphereView::mount(
            &config(SphereVariant::Mesh),
            Viewport::new(390.0, 844.0),
            backend,
            0.0,
        );
        assert!(result.is_err());
        assert_eq!(count(&log, |c| matches!(c, Call::Release(_))), 3);
        assert_eq!(count(&log, |c| *c == Call::Shutdown), 1);
    }

    #[test]
    fn stats_disabled_with_zero_interval() {
        let (backend, _) = RecordingBackend::new();
        let mut config = config(SphereVariant::Flat);
        config.performance.stats_interval_ms = 0;
        let mut view = SphereView::mount(&config, Viewport::new(390.0, 844.0), backend, 0.0).unwrap();
        for i in 0..100 {
            let tick = view.frame(i as f64 * 1000.0).unwrap().unwrap();
            assert!(!tick.report_stats);
        }
    }
}
