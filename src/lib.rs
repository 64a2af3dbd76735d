/*! This library presents one procedural GL API over the GL variants
 *  a renderer may find at runtime: desktop OpenGL, OpenGL ES and WebGL.
 *  It follows the native GL entry points for the most part,
 *  with the following deviations:
 *  - Fully unsafe: the native context must be current, no validation.
 *  - Compile-time profile selection via traits.
 *  - Depth values use the clamp type of the profile (`f64` or `f32`).
 *  - Buffer mapping is emulated with a staging copy where the variant
 *    has no native mapping, allowing a single outstanding mapping.
 */

#![allow(
    // Redundant matching is more explicit.
    clippy::redundant_pattern_matching,
    // Explicit lifetimes are often easier to reason about.
    clippy::needless_lifetimes,
    // No need for defaults in the internal types.
    clippy::new_without_default,
    // Matches the GL entry points we forward to.
    clippy::too_many_arguments,
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_qualifications,
)]

mod conv;
pub mod native;

#[cfg(feature = "gl")]
pub mod gl;
#[cfg(feature = "gles")]
pub mod gles;
#[cfg(feature = "webgl")]
pub mod webgl;

use std::{convert::TryFrom, fmt, ptr::NonNull};

use bitflags::bitflags;
use thiserror::Error;

pub use conv::buffer_binding_query;
pub use native::Native;

/// GL buffer target enum, e.g. `ARRAY_BUFFER`.
pub type BufferTarget = u32;
/// Raw GL buffer name.
pub type BufferName = u32;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown buffer access 0x{0:X}")]
    BufferAccess(u32),
    #[error("buffer target 0x{0:X} has no binding query")]
    BufferTarget(u32),
}

/// GL variant a profile speaks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    Gl,
    Gles,
    WebGl,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Gl => "OpenGL",
            Self::Gles => "OpenGL ES",
            Self::WebGl => "WebGL",
        })
    }
}

/// Access requested by a whole-buffer map, as in `glMapBuffer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferAccess {
    None,
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl BufferAccess {
    pub fn map_access(self) -> MapAccess {
        match self {
            Self::None => MapAccess::empty(),
            Self::ReadOnly => MapAccess::READ,
            Self::WriteOnly => MapAccess::WRITE,
            Self::ReadWrite => MapAccess::READ | MapAccess::WRITE,
        }
    }
}

impl From<BufferAccess> for MapAccess {
    fn from(access: BufferAccess) -> Self {
        access.map_access()
    }
}

impl TryFrom<u32> for BufferAccess {
    type Error = ConversionError;

    /// Converts the raw `READ_ONLY`/`WRITE_ONLY`/`READ_WRITE` enums.
    /// Zero stands for no access.
    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        conv::map_buffer_access(raw)
    }
}

bitflags! {
    /// Access bits of a ranged map, as in `glMapBufferRange`.
    ///
    /// An empty set means nothing is mapped.
    pub struct MapAccess: u32 {
        const READ = glow::MAP_READ_BIT;
        const WRITE = glow::MAP_WRITE_BIT;
    }
}

/// CPU-visible view of a mapped buffer range.
///
/// The pointer stays valid until the matching `unmap_buffer` call.
#[derive(Debug)]
pub struct BufferMapping {
    pub ptr: NonNull<u8>,
    pub size: usize,
}

impl BufferMapping {
    /// # Safety
    ///
    /// The mapping must not have been unmapped, and no other slice
    /// over the same mapping may be alive.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn as_slice_mut<'a>(&self) -> &'a mut [u8] {
        std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
    }
}

/// Uniform GL API implemented once per GL variant.
///
/// All methods except the capability queries call into the native context,
/// which must be current on the calling thread.
pub trait Profile: Sized {
    type Context: Native;
    /// Floating point type of depth values on this variant.
    type Clamp: Copy + From<f32>;

    fn backend() -> Backend;
    fn module_name() -> &'static str;
    fn renderer_name() -> &'static str;
    fn api_name() -> &'static str;
    fn shading_language_name() -> &'static str;
    fn max_viewports() -> i32;

    fn context(&self) -> &Self::Context;

    unsafe fn depth_range(&self, near: Self::Clamp, far: Self::Clamp);
    unsafe fn clear_depth(&self, depth: Self::Clamp);
    unsafe fn draw_buffer(&self, buffer: u32);

    unsafe fn get_buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &mut [u8]);

    /// Maps the whole buffer bound at `target`.
    unsafe fn map_buffer(
        &self,
        target: BufferTarget,
        access: BufferAccess,
    ) -> Option<BufferMapping> {
        let length = self
            .context()
            .get_buffer_parameter_i32(target, glow::BUFFER_SIZE);
        self.map_buffer_range(target, 0, length, access.map_access())
    }
    /// Maps `length` bytes starting at `offset` of the buffer bound at `target`.
    ///
    /// Returns `None` if nothing was mapped.
    unsafe fn map_buffer_range(
        &self,
        target: BufferTarget,
        offset: i32,
        length: i32,
        access: MapAccess,
    ) -> Option<BufferMapping>;
    unsafe fn unmap_buffer(&self, target: BufferTarget);

    unsafe fn framebuffer_texture_1d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<<Self::Context as Native>::Texture>,
        level: i32,
    );
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<<Self::Context as Native>::Texture>,
        level: i32,
    );
    unsafe fn framebuffer_texture_3d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<<Self::Context as Native>::Texture>,
        level: i32,
        layer: i32,
    );
    unsafe fn framebuffer_texture_layer(
        &self,
        target: u32,
        attachment: u32,
        texture: Option<<Self::Context as Native>::Texture>,
        level: i32,
        layer: i32,
    );
}
