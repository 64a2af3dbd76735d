use crate::{BufferMapping, BufferName, BufferTarget, MapAccess, Native};
use std::{mem, ptr::NonNull};

/// Emulates `glMapBufferRange` for WebGL, which can only copy whole ranges
/// in and out of buffers.
///
/// The mapped range is staged in `data`, filled with `glGetBufferSubData`
/// for read access and written back with `glBufferSubData` on unmap for
/// write access. Only one range can be mapped at a time.
#[derive(Debug)]
pub(super) struct MapContext {
    target: BufferTarget,
    buffer: BufferName,
    offset: i32,
    size: i32,
    access: MapAccess,
    data: Vec<u8>,
}

impl MapContext {
    pub(super) const fn new() -> Self {
        Self {
            target: 0,
            buffer: 0,
            offset: 0,
            size: 0,
            access: MapAccess::empty(),
            data: Vec::new(),
        }
    }

    pub(super) fn is_active(&self) -> bool {
        !self.access.is_empty()
    }

    pub(super) unsafe fn map<N: Native>(
        &mut self,
        gl: &N,
        target: BufferTarget,
        offset: i32,
        length: i32,
        access: MapAccess,
    ) -> Option<BufferMapping> {
        assert!(
            !self.is_active(),
            "Unable to map buffer 0x{:X}: buffer {} is still mapped, WebGL supports only one mapping at a time",
            target,
            self.buffer,
        );

        if access.is_empty() || length <= 0 {
            return None;
        }

        let binding = match crate::conv::buffer_binding_query(target) {
            Ok(binding) => binding,
            Err(e) => panic!("Unable to map buffer: {}", e),
        };
        let buffer = gl.get_parameter_i32(binding) as BufferName;

        log::trace!(
            "Mapping {} bytes at offset {} of buffer {} with {:?}",
            length,
            offset,
            buffer,
            access
        );

        self.target = target;
        self.buffer = buffer;
        self.offset = offset;
        self.size = length;
        self.access = access;
        self.data.resize(length as usize, 0);

        if access.contains(MapAccess::READ) {
            gl.get_buffer_sub_data(target, offset, &mut self.data);
        }

        Some(BufferMapping {
            ptr: NonNull::new(self.data.as_mut_ptr())?,
            size: self.data.len(),
        })
    }

    pub(super) unsafe fn unmap<N: Native>(&mut self, gl: &N, target: BufferTarget) {
        if !self.is_active() {
            return;
        }
        let access = mem::replace(&mut self.access, MapAccess::empty());

        assert_eq!(
            target, self.target,
            "Buffer {} was mapped through a different target",
            self.buffer
        );
        if let Ok(binding) = crate::conv::buffer_binding_query(target) {
            let bound = gl.get_parameter_i32(binding) as BufferName;
            assert_eq!(
                bound, self.buffer,
                "Buffer {} must stay bound to 0x{:X} until it is unmapped",
                self.buffer, target
            );
        }

        if access.contains(MapAccess::WRITE) {
            log::trace!(
                "Writing back {} bytes at offset {} of buffer {}",
                self.size,
                self.offset,
                self.buffer
            );
            gl.buffer_sub_data_u8_slice(self.target, self.offset, &self.data);
        }

        self.data.clear();
    }
}
