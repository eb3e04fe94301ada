use crate::{Error, Inet6Address, Tcp};

/// Size in bytes of a native IPv6 socket address (`struct sockaddr_in6`).
const NATIVE_SIZE: usize = std::mem::size_of::<libc::sockaddr_in6>();

const PORT_OFFSET: usize = 2;
const FLOW_INFO_OFFSET: usize = 4;
const ADDRESS_OFFSET: usize = 8;
const SCOPE_ID_OFFSET: usize = 24;

const _: () = assert!(NATIVE_SIZE == SCOPE_ID_OFFSET + 4);

#[cfg(not(any(
	target_os = "macos",
	target_os = "ios",
	target_os = "freebsd",
	target_os = "dragonfly",
	target_os = "openbsd",
	target_os = "netbsd",
)))]
mod family {
	use super::NATIVE_SIZE;

	/// Write the address family tag.
	pub fn encode(native: &mut [u8; NATIVE_SIZE]) {
		let family = libc::AF_INET6 as libc::sa_family_t;
		native[..2].copy_from_slice(&family.to_ne_bytes());
	}

	/// Read the address family tag.
	pub fn decode(native: &[u8; NATIVE_SIZE]) -> libc::sa_family_t {
		libc::sa_family_t::from_ne_bytes([native[0], native[1]])
	}
}

// BSD derived systems start with a one byte `sin6_len` followed by a one byte family.
#[cfg(any(
	target_os = "macos",
	target_os = "ios",
	target_os = "freebsd",
	target_os = "dragonfly",
	target_os = "openbsd",
	target_os = "netbsd",
))]
mod family {
	use super::NATIVE_SIZE;

	/// Write the address length and family tag.
	pub fn encode(native: &mut [u8; NATIVE_SIZE]) {
		native[0] = NATIVE_SIZE as u8;
		native[1] = libc::AF_INET6 as u8;
	}

	/// Read the address family tag.
	pub fn decode(native: &[u8; NATIVE_SIZE]) -> libc::sa_family_t {
		native[1] as libc::sa_family_t
	}
}

/// IPv6 socket address.
///
/// This includes an IPv6 address and a 16-bit port number.
///
/// The endpoint is stored in the binary format of the native `struct sockaddr_in6`,
/// so it can be passed directly to socket functions such as `bind()` and `connect()`.
/// The flow label and scope ID are always zero when set through this API.
#[derive(Copy, Clone)]
#[repr(C, align(4))]
pub struct Inet6Endpoint {
	/// The native socket address, encoded field by field.
	inner: [u8; NATIVE_SIZE],
}

impl Inet6Endpoint {
	/// Size in bytes of the native socket address.
	pub const NATIVE_SIZE: usize = NATIVE_SIZE;

	/// Create an IPv6 socket address from a port number and an IP address.
	///
	/// The port number is given in host byte order.
	pub fn new(port: u16, address: Inet6Address) -> Self {
		let mut inner = [0; NATIVE_SIZE];
		family::encode(&mut inner);
		let mut output = Self { inner };
		output.set_port(port);
		output.set_address(address);
		output
	}

	/// Create an IPv6 socket address for the loopback address with the given port.
	pub fn with_port(port: u16) -> Self {
		Self::new(port, Inet6Address::LOOPBACK)
	}

	/// Create an IPv6 socket address for the unspecified address with the given port.
	///
	/// This is typically used to accept connections on all interfaces.
	pub fn any(port: u16) -> Self {
		Self::new(port, Inet6Address::ANY)
	}

	/// Create an IPv6 socket address from the binary form of a native `struct sockaddr_in6`.
	///
	/// The flow label and scope ID are cleared.
	/// Returns [`Error::InvalidArgument`] if the address family is not `AF_INET6`.
	pub fn from_native(native: [u8; NATIVE_SIZE]) -> Result<Self, Error> {
		let family = family::decode(&native);
		if i32::from(family) != libc::AF_INET6 {
			tracing::debug!("refusing socket address with address family {}", family);
			return Err(Error::InvalidArgument {
				expected: libc::AF_INET6 as usize,
				actual: family as usize,
			});
		}

		let mut output = Self { inner: native };
		family::encode(&mut output.inner);
		output.inner[FLOW_INFO_OFFSET..ADDRESS_OFFSET].fill(0);
		output.inner[SCOPE_ID_OFFSET..].fill(0);
		Ok(output)
	}

	/// Create an IPv6 socket address from a [`libc::sockaddr_in6`].
	///
	/// The flow label and scope ID are cleared.
	/// Returns [`Error::InvalidArgument`] if the address family is not `AF_INET6`.
	pub fn from_raw(inner: libc::sockaddr_in6) -> Result<Self, Error> {
		if i32::from(inner.sin6_family) != libc::AF_INET6 {
			tracing::debug!("refusing socket address with address family {}", inner.sin6_family);
			return Err(Error::InvalidArgument {
				expected: libc::AF_INET6 as usize,
				actual: inner.sin6_family as usize,
			});
		}
		let port = u16::from_be(inner.sin6_port);
		Ok(Self::new(port, Inet6Address::new(inner.sin6_addr.s6_addr)))
	}

	/// Convert the socket address into a [`libc::sockaddr_in6`].
	pub fn into_raw(self) -> libc::sockaddr_in6 {
		unsafe {
			#[allow(unused_mut)]
			let mut inner = libc::sockaddr_in6 {
				sin6_family: libc::AF_INET6 as libc::sa_family_t,
				sin6_port: self.port().to_be(),
				sin6_addr: libc::in6_addr { s6_addr: self.address().to_bytes() },
				..std::mem::zeroed()
			};

			#[cfg(any(
				target_os = "macos",
				target_os = "ios",
				target_os = "freebsd",
				target_os = "dragonfly",
				target_os = "openbsd",
				target_os = "netbsd",
			))]
			{
				inner.sin6_len = NATIVE_SIZE as u8;
			}

			inner
		}
	}

	/// Get the IP address of the socket address.
	pub fn address(&self) -> Inet6Address {
		let mut bytes = [0; 16];
		bytes.copy_from_slice(&self.inner[ADDRESS_OFFSET..SCOPE_ID_OFFSET]);
		Inet6Address::new(bytes)
	}

	/// Set the IP address of the socket address.
	pub fn set_address(&mut self, address: Inet6Address) {
		self.inner[ADDRESS_OFFSET..SCOPE_ID_OFFSET].copy_from_slice(address.as_bytes());
	}

	/// Get the port number in host byte order.
	pub fn port(&self) -> u16 {
		u16::from_be_bytes([self.inner[PORT_OFFSET], self.inner[PORT_OFFSET + 1]])
	}

	/// Set the port number, given in host byte order.
	pub fn set_port(&mut self, port: u16) {
		self.inner[PORT_OFFSET..FLOW_INFO_OFFSET].copy_from_slice(&port.to_be_bytes());
	}

	/// Get the protocol associated with the socket address.
	pub fn protocol(&self) -> Tcp {
		Tcp
	}

	/// Get the size of the native socket address.
	///
	/// This is always [`Self::NATIVE_SIZE`].
	pub fn native_size(&self) -> usize {
		NATIVE_SIZE
	}

	/// Validate the size of a native socket address.
	///
	/// The size of the socket address can not be changed.
	/// This only checks that a size reported by the kernel matches [`Self::NATIVE_SIZE`],
	/// and returns [`Error::InvalidArgument`] if it doesn't.
	pub fn set_native_size(&mut self, size: usize) -> Result<(), Error> {
		if size != NATIVE_SIZE {
			tracing::debug!("refusing IPv6 socket address size {}, expected {}", size, NATIVE_SIZE);
			return Err(Error::InvalidArgument {
				expected: NATIVE_SIZE,
				actual: size,
			});
		}
		Ok(())
	}

	/// Get the binary form of the native socket address.
	pub fn as_native(&self) -> &[u8; NATIVE_SIZE] {
		&self.inner
	}

	/// Get the binary form of the native socket address for writing.
	///
	/// Writing anything other than a valid `struct sockaddr_in6` into the buffer
	/// leaves the socket address with a meaningless address family.
	pub fn as_native_mut(&mut self) -> &mut [u8; NATIVE_SIZE] {
		&mut self.inner
	}

	/// The values that take part in comparisons.
	fn key(&self) -> (Inet6Address, u16) {
		(self.address(), self.port())
	}
}

impl Default for Inet6Endpoint {
	fn default() -> Self {
		Self::new(0, Inet6Address::LOOPBACK)
	}
}

impl PartialEq for Inet6Endpoint {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl Eq for Inet6Endpoint {}

impl PartialOrd for Inet6Endpoint {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Inet6Endpoint {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.key().cmp(&other.key())
	}
}

impl std::hash::Hash for Inet6Endpoint {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.key().hash(state)
	}
}

impl std::fmt::Display for Inet6Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "[{}]:{}", self.address(), self.port())
	}
}

impl std::fmt::Debug for Inet6Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("Inet6Endpoint")
			.field("address", &self.address())
			.field("port", &self.port())
			.finish()
	}
}

impl std::str::FromStr for Inet6Endpoint {
	type Err = Error;

	/// Parse a socket address in the form `[address]:port`.
	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let invalid = Error::InvalidAddressFormat { code: libc::EINVAL };
		let rest = text.strip_prefix('[').ok_or(invalid)?;
		let (address, port) = rest.split_once("]:").ok_or(invalid)?;
		let address = Inet6Address::from_text(address)?;
		let port = parse_port(port).ok_or_else(|| {
			tracing::debug!("rejected port number in socket address {:?}", text);
			invalid
		})?;
		Ok(Self::new(port, address))
	}
}

/// Parse a port number the way [`Display`](std::fmt::Display) writes it.
///
/// Only plain decimal digits without leading zeros are accepted.
fn parse_port(text: &str) -> Option<u16> {
	if text.is_empty() || !text.bytes().all(|x| x.is_ascii_digit()) {
		return None;
	}
	if text.len() > 1 && text.starts_with('0') {
		return None;
	}
	text.parse().ok()
}

impl From<std::net::SocketAddrV6> for Inet6Endpoint {
	/// Convert a [`std::net::SocketAddrV6`], dropping the flow label and scope ID.
	fn from(other: std::net::SocketAddrV6) -> Self {
		Self::new(other.port(), (*other.ip()).into())
	}
}

impl From<Inet6Endpoint> for std::net::SocketAddrV6 {
	fn from(other: Inet6Endpoint) -> Self {
		Self::new(other.address().into(), other.port(), 0, 0)
	}
}

impl crate::AsSocketAddress for Inet6Endpoint {
	fn new_empty() -> Self {
		Self::any(0)
	}

	fn as_sockaddr(&self) -> *const libc::sockaddr {
		&self.inner as *const _ as *const _
	}

	fn as_sockaddr_mut(&mut self) -> *mut libc::sockaddr {
		&mut self.inner as *mut _ as *mut _
	}

	fn len(&self) -> libc::socklen_t {
		NATIVE_SIZE as libc::socklen_t
	}

	fn set_len(&mut self, len: libc::socklen_t) -> Result<(), Error> {
		self.set_native_size(len as usize)
	}

	fn max_len(&self) -> libc::socklen_t {
		NATIVE_SIZE as libc::socklen_t
	}
}
