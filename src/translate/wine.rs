//! Path translation through Wine's `wine_get_dos_file_name`.
//!
//! The function is not part of any import library, so it is looked up at
//! runtime from `KERNEL32`. It only exists when the process runs under Wine.

use crate::translate::PathTranslator;
use std::ffi::{CString, c_char, c_void};
use std::ptr;

/// Wine extension code page: the encoding of the host's file names.
const CP_UNIXCP: u32 = 65010;

type GetDosFileName = unsafe extern "C" fn(*const c_char) -> *mut u16;

#[link(name = "kernel32")]
unsafe extern "system" {
	fn GetModuleHandleA(module_name: *const c_char) -> *mut c_void;
	fn GetProcAddress(module: *mut c_void, proc_name: *const c_char) -> *mut c_void;
	fn GetProcessHeap() -> *mut c_void;
	fn HeapFree(heap: *mut c_void, flags: u32, mem: *mut c_void) -> i32;
	fn WideCharToMultiByte(
		code_page: u32,
		flags: u32,
		wide: *const u16,
		wide_len: i32,
		multi: *mut u8,
		multi_len: i32,
		default_char: *const c_char,
		used_default: *mut i32,
	) -> i32;
}

/// Translator backed by the Wine loader.
#[derive(Debug)]
pub struct WineTranslator {
	get_dos_file_name: GetDosFileName,
}

impl WineTranslator {
	/// Look up `wine_get_dos_file_name`. Returns `None` outside of Wine.
	pub fn load() -> Option<Self> {
		// SAFETY: both names are NUL-terminated literals, and a null module
		// handle is checked before it is used.
		let proc = unsafe {
			let kernel32 = GetModuleHandleA(c"KERNEL32".as_ptr());
			if kernel32.is_null() {
				return None;
			}
			GetProcAddress(kernel32, c"wine_get_dos_file_name".as_ptr())
		};
		if proc.is_null() {
			return None;
		}

		// SAFETY: Wine exports this symbol with exactly this signature.
		let get_dos_file_name = unsafe { std::mem::transmute::<*mut c_void, GetDosFileName>(proc) };
		Some(WineTranslator { get_dos_file_name })
	}
}

/// A wide string allocated by Wine on the process heap. Freed on drop.
struct HeapWideString(*mut u16);

impl Drop for HeapWideString {
	fn drop(&mut self) {
		// SAFETY: the pointer came from the process heap and is freed once.
		unsafe {
			HeapFree(GetProcessHeap(), 0, self.0.cast());
		}
	}
}

impl PathTranslator for WineTranslator {
	fn name(&self) -> &'static str {
		"wine_get_dos_file_name"
	}

	fn translate(&self, path: &[u8]) -> Option<Vec<u8>> {
		let path = CString::new(path).ok()?;

		// SAFETY: `path` is NUL-terminated and outlives the call.
		let wide = unsafe { (self.get_dos_file_name)(path.as_ptr()) };
		if wide.is_null() {
			return None;
		}
		let wide = HeapWideString(wide);

		// SAFETY: `wide.0` is a NUL-terminated wide string owned by `wide`.
		let needed = unsafe {
			WideCharToMultiByte(
				CP_UNIXCP,
				0,
				wide.0,
				-1,
				ptr::null_mut(),
				0,
				ptr::null(),
				ptr::null_mut(),
			)
		};
		if needed <= 0 {
			return None;
		}

		let mut out = vec![0u8; needed as usize];
		// SAFETY: `out` holds exactly `needed` bytes.
		let written = unsafe {
			WideCharToMultiByte(
				CP_UNIXCP,
				0,
				wide.0,
				-1,
				out.as_mut_ptr(),
				needed,
				ptr::null(),
				ptr::null_mut(),
			)
		};
		if written <= 0 {
			return None;
		}

		// Drop the terminating NUL.
		out.truncate(written as usize - 1);
		Some(out)
	}
}
