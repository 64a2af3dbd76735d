/*!
# Desktop OpenGL core profile

Every uniform entry point exists natively. Depth values are `f64`.
1D texture attachments go through `glFramebufferTexture`, which attaches
level `level` of any non-layered texture.
!*/

use crate::{Backend, BufferMapping, BufferTarget, MapAccess, Native};
use std::ptr::NonNull;

/// Lower bound of `GL_MAX_VIEWPORTS` on GL 4.1 and later.
const MAX_VIEWPORTS: i32 = 16;

pub struct Gl<N> {
    context: N,
}

impl<N: Native> Gl<N> {
    pub fn new(context: N) -> Self {
        Self { context }
    }
}

impl<N: Native> crate::Profile for Gl<N> {
    type Context = N;
    type Clamp = f64;

    fn backend() -> Backend {
        Backend::Gl
    }
    fn module_name() -> &'static str {
        "OpenGL"
    }
    fn renderer_name() -> &'static str {
        "OpenGL"
    }
    fn api_name() -> &'static str {
        "OpenGL"
    }
    fn shading_language_name() -> &'static str {
        "GLSL"
    }
    fn max_viewports() -> i32 {
        MAX_VIEWPORTS
    }

    fn context(&self) -> &N {
        &self.context
    }

    unsafe fn depth_range(&self, near: f64, far: f64) {
        self.context.depth_range_f64(near, far);
    }
    unsafe fn clear_depth(&self, depth: f64) {
        self.context.clear_depth_f64(depth);
    }
    unsafe fn draw_buffer(&self, buffer: u32) {
        self.context.draw_buffer(buffer);
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
        if access.is_empty() || length <= 0 {
            return None;
        }
        let ptr = self
            .context
            .map_buffer_range(target, offset, length, access.bits());
        let mapping = NonNull::new(ptr).map(|ptr| BufferMapping {
            ptr,
            size: length as usize,
        });
        if mapping.is_none() {
            log::warn!(
                "Native mapping of {} bytes at offset {} with {:?} failed",
                length,
                offset,
                access
            );
        }
        mapping
    }
    unsafe fn unmap_buffer(&self, target: BufferTarget) {
        self.context.unmap_buffer(target);
    }

    unsafe fn framebuffer_texture_1d(
        &self,
        target: u32,
        attachment: u32,
        _texture_target: u32,
        texture: Option<N::Texture>,
        level: i32,
    ) {
        self.context
            .framebuffer_texture(target, attachment, texture, level);
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
        texture_target: u32,
        texture: Option<N::Texture>,
        level: i32,
        layer: i32,
    ) {
        self.context.framebuffer_texture_3d(
            target,
            attachment,
            texture_target,
            texture,
            level,
            layer,
        );
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
