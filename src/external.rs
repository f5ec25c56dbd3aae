//! A C API for hosts that load, save, format and validate names through FFI.
//!
//! Strings returned from this module are owned by the caller and must be
//! released with `full_name_free_string`; names with `full_name_free_name`.

extern crate libc;

use self::libc::{c_char, c_int};
use super::{Name, ReturnFormat, ValidationError};
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Interior NULs cannot cross the boundary; such strings come back as null.
macro_rules! str_to_char_star {
    ($str:expr) => {
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    };
}

unsafe fn to_str<'a>(input: *const c_char) -> std::borrow::Cow<'a, str> {
    if input.is_null() {
        std::borrow::Cow::Borrowed("")
    } else {
        CStr::from_ptr(input).to_string_lossy()
    }
}

/// Loads a stored value. A null pointer is treated as an absent value.
#[no_mangle]
pub unsafe extern "C" fn full_name_parse(stored: *const c_char) -> Box<Name> {
    Box::new(Name::parse(&to_str(stored)))
}

/// Builds a name from submitted form input.
#[no_mangle]
pub unsafe extern "C" fn full_name_new(
    prefix: *const c_char,
    first: *const c_char,
    last: *const c_char,
) -> Box<Name> {
    Box::new(Name::new(&to_str(prefix), &to_str(first), &to_str(last)))
}

#[no_mangle]
pub unsafe extern "C" fn full_name_free_name(name_ptr: *mut Name) {
    mem::drop(Box::from_raw(name_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn full_name_free_string(str_ptr: *mut c_char) {
    // Null is what the string functions return on failure
    if str_ptr.is_null() {
        return;
    }
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn full_name_serialize(name: &Name) -> *const c_char {
    str_to_char_star!(name.serialize())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_prefix(name: &Name) -> *const c_char {
    str_to_char_star!(name.prefix())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_first(name: &Name) -> *const c_char {
    str_to_char_star!(name.first())
}

#[no_mangle]
pub unsafe extern "C" fn full_name_last(name: &Name) -> *const c_char {
    str_to_char_star!(name.last())
}

/// Formats a name with the given selector. Returns null when the result is
/// the structured value itself (the `array` format, or an empty name), in
/// which case the caller reads the parts with the accessors above.
#[no_mangle]
pub unsafe extern "C" fn full_name_format(name: &Name, selector: *const c_char) -> *const c_char {
    let format = ReturnFormat::from_selector(&to_str(selector));
    match name.format(format).as_text() {
        Some(text) => str_to_char_star!(text),
        None => ptr::null(),
    }
}

/// 0 if valid, otherwise a `ValidationError` code (see `full_name_validation_message`).
#[no_mangle]
pub unsafe extern "C" fn full_name_validate(name: &Name, required: bool) -> c_int {
    match name.validate(required) {
        Ok(()) => 0,
        Err(ValidationError::IllegalCharacters) => 1,
        Err(ValidationError::MissingRequiredParts) => 2,
    }
}

/// The user-facing message for a code returned by `full_name_validate`, or
/// null for 0 and unknown codes.
#[no_mangle]
pub unsafe extern "C" fn full_name_validation_message(code: c_int) -> *const c_char {
    match code {
        1 => str_to_char_star!(ValidationError::IllegalCharacters.to_string()),
        2 => str_to_char_star!(ValidationError::MissingRequiredParts.to_string()),
        _ => ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(s: *const c_char) -> String {
        assert!(!s.is_null());
        let result = CStr::from_ptr(s).to_string_lossy().into_owned();
        full_name_free_string(s as *mut c_char);
        result
    }

    #[test]
    fn parse_and_format() {
        unsafe {
            let stored = CString::new("Doe|Jane|Mrs").unwrap();
            let name = full_name_parse(stored.as_ptr());
            let selector = CString::new("prefix_first_last").unwrap();
            assert_eq!("Mrs. Jane Doe", take(full_name_format(&name, selector.as_ptr())));
            let selector = CString::new("array").unwrap();
            assert!(full_name_format(&name, selector.as_ptr()).is_null());
            assert_eq!("Mrs", take(full_name_prefix(&name)));
            full_name_free_name(Box::into_raw(name));
        }
    }

    #[test]
    fn null_is_absent() {
        unsafe {
            let name = full_name_parse(ptr::null());
            assert!(name.is_empty());
        }
    }

    #[test]
    fn free_null_string() {
        unsafe {
            full_name_free_string(ptr::null_mut());
            full_name_free_string(full_name_validation_message(0) as *mut c_char);
        }
    }

    #[test]
    fn validate() {
        unsafe {
            let prefix = CString::new("Mr").unwrap();
            let first = CString::new("John").unwrap();
            let last = CString::new("").unwrap();
            let name = full_name_new(prefix.as_ptr(), first.as_ptr(), last.as_ptr());
            assert_eq!(0, full_name_validate(&name, false));
            assert_eq!(2, full_name_validate(&name, true));
            assert_eq!(
                "First and last names are required.",
                take(full_name_validation_message(2))
            );
            assert!(full_name_validation_message(0).is_null());
            assert_eq!("|John|Mr", take(full_name_serialize(&name)));
        }
    }
}
