//! Byte views of element slices for data upload.

/// Element types whose slices may be handed to the driver as raw bytes.
///
/// # Safety
///
/// Only implement on `Copy` types made of plain numeric data (`f32`, `u16`,
/// etc.) with no pointers, references, padding, or invalid bit patterns.
/// `#[repr(C)]` vertex structs of such fields qualify if they have no
/// padding.
///
/// # Example
///
/// ```rust
/// use oogles::Plain;
///
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct Vertex {
///     position: [f32; 3],
///     uv: [f32; 2],
/// }
///
/// unsafe impl Plain for Vertex {}
///
/// let vertices = [Vertex { position: [0.0; 3], uv: [0.0; 2] }];
/// assert_eq!(oogles::bytes::as_bytes(&vertices).len(), 20);
/// ```
pub unsafe trait Plain: Copy + 'static {}

unsafe impl Plain for u8 {}
unsafe impl Plain for i8 {}
unsafe impl Plain for u16 {}
unsafe impl Plain for i16 {}
unsafe impl Plain for u32 {}
unsafe impl Plain for i32 {}
unsafe impl Plain for f32 {}
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}

/// View `data` as bytes. The result has length `size_of_val(data)`.
pub fn as_bytes<T: Plain>(data: &[T]) -> &[u8] {
    // SAFETY: `Plain` types have no padding and no invalid bit patterns.
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_cover_every_element() {
        let data = [1u16, 2, 3];
        let bytes = as_bytes(&data);
        assert_eq!(bytes.len(), 6);
        assert_eq!(u16::from_ne_bytes([bytes[2], bytes[3]]), 2);
    }

    #[test]
    fn nested_arrays_are_contiguous() {
        let data = [[1.0f32, 2.0], [3.0, 4.0]];
        let bytes = as_bytes(&data);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..], 4.0f32.to_ne_bytes());
    }

    #[test]
    fn empty_slices_have_no_bytes() {
        let data: [f32; 0] = [];
        assert!(as_bytes(&data).is_empty());
    }
}
