// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// porter-ffi: C-compatible FFI layer for StemmerHandle.
//
// Memory management rules:
// - Opaque `StemmerHandle` pointer: created by `porter_new`, freed by `porter_free`.
// - Returned strings: caller must free with `porter_free_str`.
// - Returned string arrays: caller must free with `porter_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use porter_core::{DoubleConsonantRule, InputPolicy};
use porter_en::StemmerOptions;
use porter_en::handle::StemmerHandle;

/// `input_policy` value: reject anything but lowercase ASCII letters.
pub const PORTER_INPUT_STRICT: c_int = 0;
/// `input_policy` value: lowercase ASCII letters before validation.
pub const PORTER_INPUT_LOWERCASE: c_int = 1;

/// `double_consonant` value: the last two letters are both consonants.
pub const PORTER_DOUBLE_BY_CLASS: c_int = 0;
/// `double_consonant` value: the last two letters are the same consonant.
pub const PORTER_DOUBLE_SAME_LETTER: c_int = 1;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new stemmer handle.
///
/// Unknown option values fall back to the defaults (strict, by class).
#[unsafe(no_mangle)]
pub extern "C" fn porter_new(input_policy: c_int, double_consonant: c_int) -> *mut StemmerHandle {
    let options = StemmerOptions {
        input_policy: match input_policy {
            PORTER_INPUT_LOWERCASE => InputPolicy::Lowercase,
            _ => InputPolicy::Strict,
        },
        double_consonant: match double_consonant {
            PORTER_DOUBLE_SAME_LETTER => DoubleConsonantRule::SameLetter,
            _ => DoubleConsonantRule::ByClass,
        },
    };
    Box::into_raw(Box::new(StemmerHandle::new(options)))
}

/// Free a handle created by `porter_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free(handle: *mut StemmerHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Load a stop-word file (one word per line).
///
/// Returns 1 on success, 0 on failure. On failure, if `error_out` is non-NULL,
/// it receives an error string that the caller must free with `porter_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_load_stop_words(
    handle: *mut StemmerHandle,
    path: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return 0;
    };
    let Some(path) = cstr_to_str(path) else {
        set_error(error_out, "path is null or not UTF-8");
        return 0;
    };
    match handle.load_stop_words(path) {
        Ok(()) => 1,
        Err(e) => {
            set_error(error_out, &e.to_string());
            0
        }
    }
}

// ── Stemming ─────────────────────────────────────────────────────

/// Stem a single word.
///
/// Returns a heap-allocated string (free with `porter_free_str`), or NULL if
/// the word is rejected. On rejection, if `error_out` is non-NULL, it
/// receives the error message (free with `porter_free_str`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_stem(
    handle: *const StemmerHandle,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        set_error(error_out, "word is null or not UTF-8");
        return ptr::null_mut();
    };
    match handle.stem(word) {
        Ok(stem) => str_to_c(&stem),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Stem `count` words.
///
/// Returns a NULL-terminated array with exactly `count` stems in input order
/// (free with `porter_free_str_array`), or NULL if any word is rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_stem_all(
    handle: *const StemmerHandle,
    words: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    if words.is_null() && count > 0 {
        set_error(error_out, "words is null");
        return ptr::null_mut();
    }
    let ptrs: &[*const c_char] = if count == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(words, count) }
    };

    let mut input = Vec::with_capacity(count);
    for (i, &p) in ptrs.iter().enumerate() {
        let Some(word) = cstr_to_str(p) else {
            set_error(error_out, &format!("word {i} is null or not UTF-8"));
            return ptr::null_mut();
        };
        input.push(word);
    }

    match handle.stem_all(&input) {
        Ok(stems) => strings_to_c_array(&stems),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Tokenize text, drop stop words and stem every token.
///
/// Returns a NULL-terminated array (free with `porter_free_str_array`), or
/// NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_preprocess(
    handle: *const StemmerHandle,
    text: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.preprocess(text))
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn porter_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> = std::sync::LazyLock::new(|| {
        CString::new(StemmerHandle::get_version()).unwrap_or_default()
    });
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by porter functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    // Boxed so that free_null_terminated_array can rebuild it from the length.
    Box::into_raw(ptrs.into_boxed_slice()).cast()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
