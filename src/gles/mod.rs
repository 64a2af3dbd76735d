/*!
# OpenGL ES 3 profile

Buffers are mapped natively. GLES 3 has no `glGetBufferSubData`, so buffer
reads go through a temporary read mapping instead.

Depth values are `f32` (`glDepthRangef`, `glClearDepthf`). 3D texture
attachments are layered attachments, and 1D texture attachments are ignored.
!*/

use crate::{Backend, BufferMapping, BufferTarget, MapAccess, Native};
use std::ptr::{self, NonNull};

pub struct Gles<N> {
    context: N,
}

impl<N: Native> Gles<N> {
    pub fn new(context: N) -> Self {
        Self { context }
    }
}

impl<N: Native> crate::Profile for Gles<N> {
    type Context = N;
    type Clamp = f32;

    fn backend() -> Backend {
        Backend::Gles
    }
    fn module_name() -> &'static str {
        "OpenGLES3"
    }
    fn renderer_name() -> &'static str {
        "OpenGLES"
    }
    fn api_name() -> &'static str {
        "OpenGLES"
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

    /// Reads through a temporary read mapping. If the mapping fails,
    /// `data` is zero-filled.
    unsafe fn get_buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &mut [u8]) {
        if data.is_empty() {
            return;
        }
        let src = self
            .context
            .map_buffer_range(target, offset, data.len() as i32, glow::MAP_READ_BIT);
        if src.is_null() {
            log::warn!(
                "Unable to read {} bytes at offset {} of buffer target 0x{:X}",
                data.len(),
                offset,
                target
            );
            data.fill(0);
            return;
        }
        ptr::copy_nonoverlapping(src, data.as_mut_ptr(), data.len());
        self.context.unmap_buffer(target);
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
        match NonNull::new(ptr) {
            Some(ptr) => Some(BufferMapping {
                ptr,
                size: length as usize,
            }),
            None => {
                log::warn!(
                    "Native mapping of {} bytes at offset {} with {:?} failed",
                    length,
                    offset,
                    access
                );
                None
            }
        }
    }
    unsafe fn unmap_buffer(&self, target: BufferTarget) {
        self.context.unmap_buffer(target);
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
