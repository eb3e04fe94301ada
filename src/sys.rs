use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use crate::Error;

extern "C" {
	fn inet_pton(af: c_int, src: *const c_char, dst: *mut c_void) -> c_int;
	fn inet_ntop(af: c_int, src: *const c_void, dst: *mut c_char, size: libc::socklen_t) -> *const c_char;
}

/// Maximum length of an IPv6 address in presentation format, including the terminating null byte.
///
/// This is `INET6_ADDRSTRLEN` from `<netinet/in.h>`.
pub const INET6_ADDRSTRLEN: usize = 46;

/// Parse an IPv6 address in presentation format with `inet_pton()`.
///
/// `inet_pton()` returns 0 without setting `errno` for malformed input,
/// so that case is reported as `EINVAL`.
pub fn inet6_pton(text: &str) -> Result<[u8; 16], Error> {
	let text = CString::new(text)
		.map_err(|_| Error::InvalidAddressFormat { code: libc::EINVAL })?;

	unsafe {
		let mut output = libc::in6_addr { s6_addr: [0; 16] };
		let ret = inet_pton(libc::AF_INET6, text.as_ptr(), &mut output as *mut _ as *mut c_void);
		match ret {
			1 => Ok(output.s6_addr),
			0 => Err(Error::InvalidAddressFormat { code: libc::EINVAL }),
			_ => Err(Error::InvalidAddressFormat { code: last_os_error_code() }),
		}
	}
}

/// Format an IPv6 address in presentation format with `inet_ntop()`.
pub fn inet6_ntop(bytes: &[u8; 16]) -> Result<String, Error> {
	let input = libc::in6_addr { s6_addr: *bytes };
	let mut buffer = [0 as c_char; INET6_ADDRSTRLEN];

	unsafe {
		let ret = inet_ntop(
			libc::AF_INET6,
			&input as *const _ as *const c_void,
			buffer.as_mut_ptr(),
			buffer.len() as libc::socklen_t,
		);
		if ret.is_null() {
			return Err(Error::FormatError { code: last_os_error_code() });
		}
		Ok(CStr::from_ptr(buffer.as_ptr()).to_string_lossy().into_owned())
	}
}

/// Get the current value of `errno`, falling back to `EINVAL` if there is none.
fn last_os_error_code() -> i32 {
	std::io::Error::last_os_error()
		.raw_os_error()
		.unwrap_or(libc::EINVAL)
}
