//! Bounded reads of C strings coming from the script VM.

use std::ffi::{c_char, CString};

/// Bytes of the NUL-terminated string at `ptr`, scanning at most `max` bytes.
///
/// Returns `None` for a null pointer. If no terminator is found within `max`
/// bytes the returned slice is exactly `max` long and nothing past it is read.
///
/// # Safety
///
/// `ptr` must be null or readable for `max` bytes or up to and including its
/// terminator, whichever comes first, for the lifetime `'a`.
pub unsafe fn bounded_bytes<'a>(ptr: *const c_char, max: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    let bytes = ptr.cast::<u8>();
    let mut len = 0;
    while len < max && *bytes.add(len) != 0 {
        len += 1;
    }
    Some(std::slice::from_raw_parts(bytes, len))
}

/// Owned C string for a host call. Interior NULs are dropped rather than
/// truncating the message.
pub fn to_c_string(text: &str) -> CString {
    CString::new(text.replace('\0', "")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_none() {
        assert!(unsafe { bounded_bytes(std::ptr::null(), 16) }.is_none());
    }

    #[test]
    fn stops_at_terminator() {
        let s = c"example.com";
        let bytes = unsafe { bounded_bytes(s.as_ptr(), 2048) }.unwrap();
        assert_eq!(bytes, b"example.com");
    }

    #[test]
    fn empty_string() {
        let bytes = unsafe { bounded_bytes(c"".as_ptr(), 2048) }.unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn unterminated_buffer_stops_at_bound() {
        // No NUL anywhere in the buffer: the scan must stop at `max`.
        let buf = vec![b'a' as c_char; 8];
        let bytes = unsafe { bounded_bytes(buf.as_ptr(), buf.len()) }.unwrap();
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn interior_nul_dropped() {
        assert_eq!(to_c_string("a\0b").as_bytes(), b"ab");
    }
}
