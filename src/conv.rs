use crate::{BufferAccess, BufferTarget, ConversionError};

/// Returns the `glGetIntegerv` query naming the buffer bound at `target`.
pub fn buffer_binding_query(target: BufferTarget) -> Result<u32, ConversionError> {
    Ok(match target {
        glow::ARRAY_BUFFER => glow::ARRAY_BUFFER_BINDING,
        glow::ELEMENT_ARRAY_BUFFER => glow::ELEMENT_ARRAY_BUFFER_BINDING,
        glow::UNIFORM_BUFFER => glow::UNIFORM_BUFFER_BINDING,
        glow::COPY_READ_BUFFER => glow::COPY_READ_BUFFER_BINDING,
        glow::COPY_WRITE_BUFFER => glow::COPY_WRITE_BUFFER_BINDING,
        glow::PIXEL_PACK_BUFFER => glow::PIXEL_PACK_BUFFER_BINDING,
        glow::PIXEL_UNPACK_BUFFER => glow::PIXEL_UNPACK_BUFFER_BINDING,
        glow::TRANSFORM_FEEDBACK_BUFFER => glow::TRANSFORM_FEEDBACK_BUFFER_BINDING,
        glow::SHADER_STORAGE_BUFFER => glow::SHADER_STORAGE_BUFFER_BINDING,
        glow::ATOMIC_COUNTER_BUFFER => glow::ATOMIC_COUNTER_BUFFER_BINDING,
        glow::DISPATCH_INDIRECT_BUFFER => glow::DISPATCH_INDIRECT_BUFFER_BINDING,
        glow::DRAW_INDIRECT_BUFFER => glow::DRAW_INDIRECT_BUFFER_BINDING,
        glow::QUERY_BUFFER => glow::QUERY_BUFFER_BINDING,
        glow::TEXTURE_BUFFER => glow::TEXTURE_BUFFER_BINDING,
        other => return Err(ConversionError::BufferTarget(other)),
    })
}

pub(super) fn map_buffer_access(raw: u32) -> Result<BufferAccess, ConversionError> {
    Ok(match raw {
        0 => BufferAccess::None,
        glow::READ_ONLY => BufferAccess::ReadOnly,
        glow::WRITE_ONLY => BufferAccess::WriteOnly,
        glow::READ_WRITE => BufferAccess::ReadWrite,
        other => return Err(ConversionError::BufferAccess(other)),
    })
}
