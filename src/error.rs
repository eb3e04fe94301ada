use std::os::raw::c_int;

/// Error raised by the address and endpoint types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The text is not a valid IPv6 address.
	#[error("invalid IPv6 address format (os error {code})")]
	InvalidAddressFormat {
		/// The error code reported by `inet_pton()`.
		code: c_int,
	},

	/// Converting an address to text failed.
	///
	/// This can not happen for any valid address and indicates a broken C library.
	#[error("failed to format IPv6 address (os error {code})")]
	FormatError {
		/// The error code reported by `inet_ntop()`.
		code: c_int,
	},

	/// A native socket address was given with the wrong size or address family.
	#[error("invalid argument: expected {expected}, got {actual}")]
	InvalidArgument {
		/// The only accepted value.
		expected: usize,

		/// The value that was given.
		actual: usize,
	},
}

impl Error {
	/// Get the OS error code carried by the error.
	///
	/// For [`Error::InvalidArgument`] this is `EINVAL`.
	pub fn raw_os_error(&self) -> c_int {
		match self {
			Self::InvalidAddressFormat { code } => *code,
			Self::FormatError { code } => *code,
			Self::InvalidArgument { .. } => libc::EINVAL,
		}
	}
}

impl From<Error> for std::io::Error {
	fn from(other: Error) -> Self {
		let kind = match other {
			Error::InvalidAddressFormat { .. } => std::io::ErrorKind::InvalidInput,
			Error::FormatError { .. } => std::io::ErrorKind::InvalidData,
			Error::InvalidArgument { .. } => std::io::ErrorKind::InvalidInput,
		};
		std::io::Error::new(kind, other)
	}
}
