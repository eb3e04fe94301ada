mod inet6_address;
mod inet6_endpoint;

pub use inet6_address::*;
pub use inet6_endpoint::*;

/// A type usable as socket address.
pub trait AsSocketAddress {
	/// Construct a new instance that is usable to copy an address into.
	///
	/// After construction, an address may be written into the memory pointed to by [`as_sockaddr_mut()`](AsSocketAddress::as_sockaddr_mut),
	/// limited by [`max_len()`](AsSocketAddress::max_len).
	/// Afterwards, [`set_len()`](AsSocketAddress::set_len) will be called with the actual address length.
	fn new_empty() -> Self;

	/// Get a pointer to the socket address.
	///
	/// In reality, this should point to a struct that is compatible with [`libc::sockaddr`],
	/// but is not [`libc::sockaddr`] itself.
	fn as_sockaddr(&self) -> *const libc::sockaddr;

	/// Get a mutable pointer to the socket address.
	///
	/// In reality, this should point to a struct that is compatible with [`libc::sockaddr`],
	/// but is not [`libc::sockaddr`] itself.
	fn as_sockaddr_mut(&mut self) -> *mut libc::sockaddr;

	/// Get the lengths of the socket address.
	///
	/// This is the length of the entire socket address, including the `sa_family` field.
	fn len(&self) -> libc::socklen_t;

	/// Get the address family of the socket address.
	fn family(&self) -> libc::sa_family_t {
		unsafe {
			(*self.as_sockaddr()).sa_family
		}
	}

	/// Update the lengths of the address.
	///
	/// This must be the length of the entire socket address, including the `sa_family` field.
	///
	/// It is called after the kernel wrote an address to the memory pointed at by [`as_sockaddr_mut()`](AsSocketAddress::as_sockaddr_mut).
	/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the length is invalid for the specific address type.
	fn set_len(&mut self, len: libc::socklen_t) -> Result<(), crate::Error>;

	/// Get the maximum size of for the socket address.
	///
	/// This is used to tell the kernel how much it is allowed to write to the memory
	/// pointed at by [`as_sockaddr_mut()`](AsSocketAddress::as_sockaddr_mut).
	fn max_len(&self) -> libc::socklen_t;
}
