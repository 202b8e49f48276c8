//! The seam between the animation core and whatever puts pixels on screen.

use wiresphere_common::{Result, Viewport};

use crate::draw::DrawList;
use crate::geometry::MeshGeometry;
use crate::scene::{Material, SceneFrame};

/// Opaque handle to a backend-owned resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u64);

/// A resource the scene asks the backend to allocate.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Geometry(&'a MeshGeometry),
    Material(&'a Material),
}

/// Host rendering backend.
///
/// The flat and projected variants submit a [`DrawList`] per frame; the
/// mesh variant acquires geometry and materials up front and submits a
/// [`SceneFrame`]. Resources are released in reverse acquisition order
/// before [`RenderBackend::shutdown`] is called.
pub trait RenderBackend {
    fn acquire(&mut self, resource: Resource<'_>) -> Result<ResourceId>;

    fn release(&mut self, id: ResourceId);

    fn resize(&mut self, viewport: Viewport);

    fn draw_canvas(&mut self, list: &DrawList) -> Result<()>;

    fn draw_scene(&mut self, frame: &SceneFrame<'_>) -> Result<()>;

    /// Final teardown once every resource has been released.
    fn shutdown(&mut self) {}
}

#[cfg(test)]
pub(crate) mod recording {
    //! In-memory backend that logs every call for assertions.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        AcquireGeometry(ResourceId),
        AcquireMaterial(ResourceId),
        Release(ResourceId),
        Resize(Viewport),
        Canvas(DrawList),
        Scene { meshes: usize, aspect: f32 },
        Shutdown,
    }

    pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

    pub(crate) struct RecordingBackend {
        next_id: u64,
        log: CallLog,
        pub(crate) fail_acquire_after: Option<usize>,
    }

    impl RecordingBackend {
        pub(crate) fn new() -> (Self, CallLog) {
            let log = CallLog::default();
            (
                Self {
                    next_id: 1,
                    log: log.clone(),
                    fail_acquire_after: None,
                },
                log,
            )
        }
    }

    impl RenderBackend for RecordingBackend {
        fn acquire(&mut self, resource: Resource<'_>) -> Result<ResourceId> {
            if let Some(limit) = self.fail_acquire_after {
                if (self.next_id - 1) as usize >= limit {
                    return Err(wiresphere_common::WireSphereError::Renderer(
                        "out of memory".into(),
                    ));
                }
            }
            let id = ResourceId(self.next_id);
            self.next_id += 1;
            let call = match resource {
                Resource::Geometry(_) => Call::AcquireGeometry(id),
                Resource::Material(_) => Call::AcquireMaterial(id),
            };
            self.log.borrow_mut().push(call);
            Ok(id)
        }

        fn release(&mut self, id: ResourceId) {
            self.log.borrow_mut().push(Call::Release(id));
        }

        fn resize(&mut self, viewport: Viewport) {
            self.log.borrow_mut().push(Call::Resize(viewport));
        }

        fn draw_canvas(&mut self, list: &DrawList) -> Result<()> {
            self.log.borrow_mut().push(Call::Canvas(list.clone()));
            Ok(())
        }

        fn draw_scene(&mut self, frame: &SceneFrame<'_>) -> Result<()> {
            self.log.borrow_mut().push(Call::Scene {
                meshes: frame.meshes.len(),
                aspect: frame.camera.aspect,
            });
            Ok(())
        }

        fn shutdown(&mut self) {
            self.log.borrow_mut().push(Call::Shutdown);
        }
    }
}
