use std::os::raw::c_int;

/// TCP over IPv6.
///
/// The values returned by the methods are the arguments to pass to `socket()`
/// to create a socket that can be used with an [`Inet6Endpoint`](crate::Inet6Endpoint).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Tcp;

impl Tcp {
	/// Get the socket type: `SOCK_STREAM`.
	pub fn kind(&self) -> c_int {
		libc::SOCK_STREAM
	}

	/// Get the protocol: `IPPROTO_TCP`.
	pub fn protocol(&self) -> c_int {
		libc::IPPROTO_TCP
	}

	/// Get the protocol family: `PF_INET6`.
	pub fn family(&self) -> c_int {
		libc::PF_INET6
	}
}
