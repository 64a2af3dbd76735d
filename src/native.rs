//! Native GL entry points consumed by the profiles.
//!
//! The method names and argument shapes follow [`glow::HasContext`], which is
//! the implementation used outside of tests.

use glow::HasContext;
use std::fmt;

pub trait Native {
    type Texture: Copy + fmt::Debug;

    unsafe fn get_parameter_i32(&self, parameter: u32) -> i32;
    unsafe fn get_buffer_parameter_i32(&self, target: u32, parameter: u32) -> i32;

    /// Copies buffer contents starting at `offset` into `dst_data`.
    unsafe fn get_buffer_sub_data(&self, target: u32, offset: i32, dst_data: &mut [u8]);
    /// Copies `src_data` into the buffer starting at `offset`.
    unsafe fn buffer_sub_data_u8_slice(&self, target: u32, offset: i32, src_data: &[u8]);
    unsafe fn map_buffer_range(&self, target: u32, offset: i32, length: i32, access: u32)
        -> *mut u8;
    unsafe fn unmap_buffer(&self, target: u32);

    unsafe fn depth_range_f64(&self, near: f64, far: f64);
    unsafe fn depth_range_f32(&self, near: f32, far: f32);
    unsafe fn clear_depth_f64(&self, depth: f64);
    unsafe fn clear_depth_f32(&self, depth: f32);
    unsafe fn draw_buffer(&self, buffer: u32);
    unsafe fn draw_buffers(&self, buffers: &[u32]);

    unsafe fn framebuffer_texture(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<Self::Texture>,
        level: i32,
    );
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
    );
    unsafe fn framebuffer_texture_3d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
        layer: i32,
    );
    unsafe fn framebuffer_texture_layer(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<Self::Texture>,
        level: i32,
        layer: i32,
    );
}

impl Native for glow::Context {
    type Texture = glow::Texture;

    unsafe fn get_parameter_i32(&self, parameter: u32) -> i32 {
        HasContext::get_parameter_i32(self, parameter)
    }
    unsafe fn get_buffer_parameter_i32(&self, target: u32, parameter: u32) -> i32 {
        HasContext::get_buffer_parameter_i32(self, target, parameter)
    }

    unsafe fn get_buffer_sub_data(&self, target: u32, offset: i32, dst_data: &mut [u8]) {
        HasContext::get_buffer_sub_data(self, target, offset, dst_data)
    }
    unsafe fn buffer_sub_data_u8_slice(&self, target: u32, offset: i32, src_data: &[u8]) {
        HasContext::buffer_sub_data_u8_slice(self, target, offset, src_data)
    }
    unsafe fn map_buffer_range(
        &self,
        target: u32,
        offset: i32,
        length: i32,
        access: u32,
    ) -> *mut u8 {
        HasContext::map_buffer_range(self, target, offset, length, access)
    }
    unsafe fn unmap_buffer(&self, target: u32) {
        HasContext::unmap_buffer(self, target)
    }

    unsafe fn depth_range_f64(&self, near: f64, far: f64) {
        HasContext::depth_range_f64(self, near, far)
    }
    unsafe fn depth_range_f32(&self, near: f32, far: f32) {
        HasContext::depth_range_f32(self, near, far)
    }
    unsafe fn clear_depth_f64(&self, depth: f64) {
        HasContext::clear_depth_f64(self, depth)
    }
    unsafe fn clear_depth_f32(&self, depth: f32) {
        HasContext::clear_depth_f32(self, depth)
    }
    unsafe fn draw_buffer(&self, buffer: u32) {
        HasContext::draw_buffer(self, buffer)
    }
    unsafe fn draw_buffers(&self, buffers: &[u32]) {
        HasContext::draw_buffers(self, buffers)
    }

    unsafe fn framebuffer_texture(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<Self::Texture>,
        level: i32,
    ) {
        HasContext::framebuffer_texture(self, target, attachment, texture, level)
    }
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
    ) {
        HasContext::framebuffer_texture_2d(self, target, attachment, texture_target, texture, level)
    }
    unsafe fn framebuffer_texture_3d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
        layer: i32,
    ) {
        HasContext::framebuffer_texture_3d(
            self,
            target,
            attachment,
            texture_target,
            texture,
            level,
            layer,
        )
    }
    unsafe fn framebuffer_texture_layer(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<Self::Texture>,
        level: i32,
        layer: i32,
    ) {
        HasContext::framebuffer_texture_layer(self, target, attachment, texture, level, layer)
    }
}
