use crate::Error;

/// IPv6 address.
///
/// The address is stored as 16 bytes in network byte order.
/// Comparison and ordering is done byte-wise on that representation,
/// which makes the type usable as sort key or map key.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Inet6Address {
	/// The address bytes, most significant byte first.
	bytes: [u8; 16],
}

impl Inet6Address {
	/// The unspecified address: `::`.
	pub const ANY: Self = Self::new([0; 16]);

	/// The loopback address: `::1`.
	pub const LOOPBACK: Self = Self::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

	/// Create an address from raw bytes in network byte order.
	pub const fn new(bytes: [u8; 16]) -> Self {
		Self { bytes }
	}

	/// Get the unspecified address (`::`).
	///
	/// This is also the value of [`Inet6Address::default()`].
	pub const fn any() -> Self {
		Self::ANY
	}

	/// Get the loopback address (`::1`).
	pub const fn loopback() -> Self {
		Self::LOOPBACK
	}

	/// Parse an address from text with `inet_pton()`.
	///
	/// Accepts the standard IPv6 notation, including `::` compression
	/// and a trailing dotted IPv4 address.
	pub fn from_text(text: &str) -> Result<Self, Error> {
		match crate::sys::inet6_pton(text) {
			Ok(bytes) => Ok(Self::new(bytes)),
			Err(e) => {
				tracing::debug!("rejected IPv6 address {:?}: {}", text, e);
				Err(e)
			},
		}
	}

	/// Format the address as text with `inet_ntop()`.
	///
	/// The result uses lowercase hexadecimal digits and compresses the longest run of zero groups with `::`.
	pub fn to_text(&self) -> Result<String, Error> {
		crate::sys::inet6_ntop(&self.bytes).map_err(|e| {
			tracing::error!("inet_ntop() failed for {:02x?}: {}", self.bytes, e);
			e
		})
	}

	/// Get the address as bytes in network byte order.
	pub const fn to_bytes(&self) -> [u8; 16] {
		self.bytes
	}

	/// Get a reference to the address bytes in network byte order.
	pub const fn as_bytes(&self) -> &[u8; 16] {
		&self.bytes
	}

	/// Check if this is the unspecified address (`::`).
	pub fn is_unspecified(&self) -> bool {
		*self == Self::ANY
	}

	/// Check if this is the loopback address (`::1`).
	pub fn is_loopback(&self) -> bool {
		*self == Self::LOOPBACK
	}

	/// Check if the address is link local (`fe80::/10`).
	pub fn is_link_local(&self) -> bool {
		self.bytes[0] == 0xfe && self.bytes[1] & 0xc0 == 0x80
	}

	/// Check if the address is site local (`fec0::/10`).
	///
	/// Site local addresses are deprecated by RFC 3879.
	pub fn is_site_local(&self) -> bool {
		self.bytes[0] == 0xfe && self.bytes[1] & 0xc0 == 0xc0
	}

	/// Check if the address is an IPv4-mapped address (`::ffff:a.b.c.d`).
	pub fn is_ipv4_mapped(&self) -> bool {
		self.bytes[..10].iter().all(|&x| x == 0) && self.bytes[10] == 0xff && self.bytes[11] == 0xff
	}

	/// Check if the address is an IPv4-compatible address (`::a.b.c.d`).
	///
	/// The unspecified and loopback addresses are not IPv4-compatible.
	pub fn is_ipv4_compatible(&self) -> bool {
		let (prefix, ipv4) = self.bytes.split_at(12);
		let ipv4 = u32::from_be_bytes([ipv4[0], ipv4[1], ipv4[2], ipv4[3]]);
		prefix.iter().all(|&x| x == 0) && ipv4 > 1
	}

	/// Check if the address is a multicast address (`ff00::/8`).
	pub fn is_multicast(&self) -> bool {
		self.bytes[0] == 0xff
	}
}

impl From<[u8; 16]> for Inet6Address {
	fn from(other: [u8; 16]) -> Self {
		Self::new(other)
	}
}

impl From<Inet6Address> for [u8; 16] {
	fn from(other: Inet6Address) -> Self {
		other.to_bytes()
	}
}

impl From<std::net::Ipv6Addr> for Inet6Address {
	fn from(other: std::net::Ipv6Addr) -> Self {
		Self::new(other.octets())
	}
}

impl From<Inet6Address> for std::net::Ipv6Addr {
	fn from(other: Inet6Address) -> Self {
		other.to_bytes().into()
	}
}

impl std::str::FromStr for Inet6Address {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::from_text(text)
	}
}

impl std::fmt::Display for Inet6Address {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let text = self.to_text().map_err(|_| std::fmt::Error)?;
		f.write_str(&text)
	}
}

impl std::fmt::Debug for Inet6Address {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.to_text() {
			Ok(text) => f.write_str(&text),
			Err(_) => write!(f, "{:02x?}", self.bytes),
		}
	}
}
