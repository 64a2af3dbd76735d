/*!
# WebGL 2 profile

WebGL has no `glMapBufferRange`. Mapping is emulated by [`MapContext`],
one per profile instance, which stages the mapped range in CPU memory.

Missing entry points are substituted:
  - `glDrawBuffer` is `glDrawBuffers` with a single entry.
  - 3D texture attachments are layered attachments.
  - 1D texture attachments do not exist and are ignored.
!*/

mod mapping;

use self::mapping::MapContext;
use crate::{Backend, BufferMapping, BufferTarget, MapAccess, Native};
use parking_lot::Mutex;

pub struct WebGl<N> {
    context: N,
    map_context: Mutex<MapContext>,
}

impl<N: Native> WebGl<N> {
    pub fn new(context: N) -> Self {
        Self {
            context,
            map_context: Mutex::new(MapContext::new()),
        }
    }

    /// Returns `true` if a buffer range is currently mapped.
    pub fn is_mapped(&self) -> bool {
        self.map_context.lock().is_active()
    }
}

impl<N: Native> crate::Profile for WebGl<N> {
    type Context = N;
    type Clamp = f32;

    fn backend() -> Backend {
        Backend::WebGl
    }
    fn module_name() -> &'static str {
        "WebGL"
    }
    fn renderer_name() -> &'static str {
        "WebGL"
    }
    fn api_name() -> &'static str {
        "WebGL"
    }
    fn shading_language_name() -> &'static str {
        "ESSL"
    }
    fn max_viewports() -> i32 {
        1
    }

    fn context(&self) -> &N {
        &self.context
    }

    unsafe fn depth_range(&self, near: f32, far: f32) {
        self.context.depth_range_f32(near, far);
    }
    unsafe fn clear_depth(&self, depth: f32) {
        self.context.clear_depth_f32(depth);
    }
    unsafe fn draw_buffer(&self, buffer: u32) {
        self.context.draw_buffers(&[buffer]);
    }

    unsafe fn get_buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &mut [u8]) {
        if data.is_empty() {
            return;
        }
        self.context.get_buffer_sub_data(target, offset, data);
    }

    unsafe fn map_buffer_range(
        &self,
        target: BufferTarget,
        offset: i32,
        length: i32,
        access: MapAccess,
    ) -> Option<BufferMapping> {
        self.map_context
            .lock()
            .map(&self.context, target, offset, length, access)
    }
    unsafe fn unmap_buffer(&self, target: BufferTarget) {
        self.map_context.lock().unmap(&self.context, target);
    }

    unsafe fn framebuffer_texture_1d(
        &self,
        _target: u32,
        _attachment: u32,
        _texture_target: u32,
        _texture: Option<N::Texture>,
        _level: i32,
    ) {
    }
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<N::Texture>,
        level: i32,
    ) {
        self.context
            .framebuffer_texture_2d(target, attachment, texture_target, texture, level);
    }
    unsafe fn framebuffer_texture_3d(
        &self,
        target: u32,
        attachment: u32,
        _texture_target: u32,
        texture: Option<N::Texture>,
        level: i32,
        layer: i32,
    ) {
        self.context
            .framebuffer_texture_layer(target, attachment, texture, level, layer);
    }
    unsafe fn framebuffer_texture_layer(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<N::Texture>,
        level: i32,
        layer: i32,
    ) {
        self.context
            .framebuffer_texture_layer(target, attachment, texture, level, layer);
    }
}
