//! Software GL used to drive the profiles without a real context.

use gl_profile::Native;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    ptr,
};

/// Native call recorded by [`SoftGl`]. Parameter queries are not recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GetBufferSubData {
        target: u32,
        offset: i32,
        size: usize,
    },
    BufferSubData {
        target: u32,
        offset: i32,
        size: usize,
    },
    MapBufferRange {
        target: u32,
        offset: i32,
        length: i32,
        access: u32,
    },
    UnmapBuffer(u32),
    DepthRangeF64(f64, f64),
    DepthRangeF32(f32, f32),
    ClearDepthF64(f64),
    ClearDepthF32(f32),
    DrawBuffer(u32),
    DrawBuffers(Vec<u32>),
    FramebufferTexture {
        target: u32,
        attachment: u32,
        texture: Option<u32>,
        level: i32,
    },
    FramebufferTexture2d {
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<u32>,
        level: i32,
    },
    FramebufferTexture3d {
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<u32>,
        level: i32,
        layer: i32,
    },
    FramebufferTextureLayer {
        target: u32,
        attachment: u32,
        texture: Option<u32>,
        level: i32,
        layer: i32,
    },
}

#[derive(Default)]
pub struct SoftGl {
    /// Buffer storage, buffer name `n` lives at index `n - 1`.
    buffers: RefCell<Vec<Vec<u8>>>,
    bindings: RefCell<HashMap<u32, u32>>,
    calls: RefCell<Vec<Call>>,
    fail_mappings: Cell<bool>,
}

impl SoftGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_buffer(&self, contents: &[u8]) -> u32 {
        let mut buffers = self.buffers.borrow_mut();
        buffers.push(contents.to_vec());
        buffers.len() as u32
    }

    pub fn bind_buffer(&self, target: u32, buffer: u32) {
        self.bindings.borrow_mut().insert(target, buffer);
    }

    /// Reads buffer storage directly, bypassing any profile.
    pub fn contents(&self, buffer: u32) -> Vec<u8> {
        self.buffers.borrow()[buffer as usize - 1].clone()
    }

    /// Makes every following `map_buffer_range` return null, as a driver
    /// out of address space would.
    pub fn fail_mappings(&self) {
        self.fail_mappings.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn bound(&self, target: u32) -> usize {
        let buffer = self.bindings.borrow().get(&target).copied().unwrap_or(0);
        assert_ne!(buffer, 0, "no buffer bound at 0x{:X}", target);
        buffer as usize - 1
    }
}

fn binding_target(parameter: u32) -> Option<u32> {
    Some(match parameter {
        glow::ARRAY_BUFFER_BINDING => glow::ARRAY_BUFFER,
        glow::ELEMENT_ARRAY_BUFFER_BINDING => glow::ELEMENT_ARRAY_BUFFER,
        glow::UNIFORM_BUFFER_BINDING => glow::UNIFORM_BUFFER,
        glow::COPY_READ_BUFFER_BINDING => glow::COPY_READ_BUFFER,
        glow::COPY_WRITE_BUFFER_BINDING => glow::COPY_WRITE_BUFFER,
        _ => return None,
    })
}

impl Native for SoftGl {
    type Texture = u32;

    unsafe fn get_parameter_i32(&self, parameter: u32) -> i32 {
        let target = binding_target(parameter).expect("unsupported parameter query");
        self.bindings.borrow().get(&target).copied().unwrap_or(0) as i32
    }
    unsafe fn get_buffer_parameter_i32(&self, target: u32, parameter: u32) -> i32 {
        assert_eq!(parameter, glow::BUFFER_SIZE);
        let index = self.bound(target);
        self.buffers.borrow()[index].len() as i32
    }

    unsafe fn get_buffer_sub_data(&self, target: u32, offset: i32, dst_data: &mut [u8]) {
        self.record(Call::GetBufferSubData {
            target,
            offset,
            size: dst_data.len(),
        });
        let index = self.bound(target);
        let start = offset as usize;
        dst_data.copy_from_slice(&self.buffers.borrow()[index][start..start + dst_data.len()]);
    }
    unsafe fn buffer_sub_data_u8_slice(&self, target: u32, offset: i32, src_data: &[u8]) {
        self.record(Call::BufferSubData {
            target,
            offset,
            size: src_data.len(),
        });
        let index = self.bound(target);
        let start = offset as usize;
        self.buffers.borrow_mut()[index][start..start + src_data.len()].copy_from_slice(src_data);
    }
    unsafe fn map_buffer_range(
        &self,
        target: u32,
        offset: i32,
        length: i32,
        access: u32,
    ) -> *mut u8 {
        self.record(Call::MapBufferRange {
            target,
            offset,
            length,
            access,
        });
        if access == 0 || length <= 0 || self.fail_mappings.get() {
            return ptr::null_mut();
        }
        let index = self.bound(target);
        let mut buffers = self.buffers.borrow_mut();
        let storage = &mut buffers[index];
        assert!(offset as usize + length as usize <= storage.len());
        storage.as_mut_ptr().add(offset as usize)
    }
    unsafe fn unmap_buffer(&self, target: u32) {
        self.record(Call::UnmapBuffer(target));
    }

    unsafe fn depth_range_f64(&self, near: f64, far: f64) {
        self.record(Call::DepthRangeF64(near, far));
    }
    unsafe fn depth_range_f32(&self, near: f32, far: f32) {
        self.record(Call::DepthRangeF32(near, far));
    }
    unsafe fn clear_depth_f64(&self, depth: f64) {
        self.record(Call::ClearDepthF64(depth));
    }
    unsafe fn clear_depth_f32(&self, depth: f32) {
        self.record(Call::ClearDepthF32(depth));
    }
    unsafe fn draw_buffer(&self, buffer: u32) {
        self.record(Call::DrawBuffer(buffer));
    }
    unsafe fn draw_buffers(&self, buffers: &[u32]) {
        self.record(Call::DrawBuffers(buffers.to_vec()));
    }

    unsafe fn framebuffer_texture(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<u32>,
        level: i32,
    ) {
        self.record(Call::FramebufferTexture {
            target,
            attachment,
            texture,
            level,
        });
    }
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<u32>,
        level: i32,
    ) {
        self.record(Call::FramebufferTexture2d {
            target,
            attachment,
            texture_target,
            texture,
            level,
        });
    }
    unsafe fn framebuffer_texture_3d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<u32>,
        level: i32,
        layer: i32,
    ) {
        self.record(Call::FramebufferTexture3d {
            target,
            attachment,
            texture_target,
            texture,
            level,
            layer,
        });
    }
    unsafe fn framebuffer_texture_layer(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<u32>,
        level: i32,
        layer: i32,
    ) {
        self.record(Call::FramebufferTextureLayer {
            target,
            attachment,
            texture,
            level,
            layer,
        });
    }
}

pub fn initialize_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
