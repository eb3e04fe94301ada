use assert2::assert;
use posix_inet6::{AsSocketAddress, Error, Inet6Address, Inet6Endpoint, Tcp};

fn parse(text: &str) -> Inet6Address {
	Inet6Address::from_text(text).unwrap()
}

#[test]
fn test_constructors() {
	let endpoint = Inet6Endpoint::default();
	assert!(endpoint.address() == Inet6Address::loopback());
	assert!(endpoint.port() == 0);

	let endpoint = Inet6Endpoint::with_port(80);
	assert!(endpoint.address() == Inet6Address::loopback());
	assert!(endpoint.port() == 80);

	let endpoint = Inet6Endpoint::any(80);
	assert!(endpoint.address() == Inet6Address::any());
	assert!(endpoint.port() == 80);

	let endpoint = Inet6Endpoint::new(443, parse("2001:db8::1"));
	assert!(endpoint.address() == parse("2001:db8::1"));
	assert!(endpoint.port() == 443);
}

#[test]
fn test_end_to_end() {
	let endpoint = Inet6Endpoint::new(8080, parse("2001:db8::1"));
	assert!(endpoint.address().to_text().unwrap() == "2001:db8::1");
	assert!(endpoint.port() == 8080);

	let native = endpoint.as_native();
	assert!(&native[2..4] == &[0x1f, 0x90]);
	assert!(&native[4..8] == &[0, 0, 0, 0]);
	assert!(&native[8..24] == &parse("2001:db8::1").to_bytes());
	assert!(&native[24..28] == &[0, 0, 0, 0]);
}

#[test]
fn test_setters() {
	let mut endpoint = Inet6Endpoint::default();
	endpoint.set_port(12345);
	endpoint.set_address(parse("fe80::1"));
	assert!(endpoint.port() == 12345);
	assert!(endpoint.address() == parse("fe80::1"));
	assert!(endpoint == Inet6Endpoint::new(12345, parse("fe80::1")));

	endpoint.set_port(0);
	assert!(endpoint.port() == 0);
	assert!(endpoint.address() == parse("fe80::1"));
}

#[test]
fn test_equality_across_constructors() {
	let mut a = Inet6Endpoint::with_port(80);
	let b = Inet6Endpoint::new(80, Inet6Address::loopback());
	assert!(a == b);

	a.set_address(Inet6Address::any());
	assert!(a == Inet6Endpoint::any(80));
	assert!(a != b);

	let mut c = Inet6Endpoint::default();
	c.set_port(80);
	assert!(c == b);
}

#[test]
fn test_equality_ignores_flow_info_and_scope_id() {
	let a = Inet6Endpoint::new(80, parse("fe80::1"));
	let mut b = a;
	b.as_native_mut()[4..8].copy_from_slice(&[0, 1, 2, 3]);
	b.as_native_mut()[24..28].copy_from_slice(&[4, 5, 6, 7]);
	assert!(a == b);
	assert!(a.cmp(&b) == std::cmp::Ordering::Equal);
}

#[test]
fn test_ordering() {
	let a = Inet6Endpoint::new(9000, parse("::1"));
	let b = Inet6Endpoint::new(80, parse("2001:db8::1"));
	let c = Inet6Endpoint::new(443, parse("2001:db8::1"));
	assert!(a < b);
	assert!(b < c);
	assert!(a < c);

	let mut sorted = vec![c, b, a];
	sorted.sort();
	assert!(sorted == [a, b, c]);
}

#[test]
fn test_native_size() {
	let mut endpoint = Inet6Endpoint::default();
	assert!(endpoint.native_size() == Inet6Endpoint::NATIVE_SIZE);
	assert!(endpoint.native_size() == std::mem::size_of::<libc::sockaddr_in6>());
	assert!(let Ok(()) = endpoint.set_native_size(Inet6Endpoint::NATIVE_SIZE));

	for size in &[0, 1, 16, Inet6Endpoint::NATIVE_SIZE - 1, Inet6Endpoint::NATIVE_SIZE + 1, 128] {
		assert!(let Err(Error::InvalidArgument { .. }) = endpoint.set_native_size(*size));
	}
	assert!(endpoint.set_native_size(0).unwrap_err().raw_os_error() == libc::EINVAL);
	assert!(endpoint == Inet6Endpoint::default());
}

#[test]
fn test_socket_address_trait() {
	let mut endpoint = Inet6Endpoint::new_empty();
	assert!(endpoint.len() as usize == Inet6Endpoint::NATIVE_SIZE);
	assert!(endpoint.max_len() as usize == Inet6Endpoint::NATIVE_SIZE);
	assert!(let Ok(()) = endpoint.set_len(endpoint.max_len()));
	assert!(let Err(Error::InvalidArgument { .. }) = endpoint.set_len(4));
	assert!(i32::from(endpoint.family()) == libc::AF_INET6);
}

#[test]
fn test_from_native() {
	let endpoint = Inet6Endpoint::new(8080, parse("2001:db8::1"));
	let mut native = *endpoint.as_native();
	native[4..8].copy_from_slice(&[1, 1, 1, 1]);
	native[24..28].copy_from_slice(&[2, 2, 2, 2]);

	let parsed = Inet6Endpoint::from_native(native).unwrap();
	assert!(parsed == endpoint);
	assert!(parsed.as_native() == endpoint.as_native());

	assert!(let Err(Error::InvalidArgument { .. }) = Inet6Endpoint::from_native([0; Inet6Endpoint::NATIVE_SIZE]));
}

#[test]
fn test_text() {
	let endpoint = Inet6Endpoint::new(8080, parse("2001:db8::1"));
	assert!(endpoint.to_string() == "[2001:db8::1]:8080");
	assert!("[2001:db8::1]:8080".parse::<Inet6Endpoint>().unwrap() == endpoint);
	assert!("[::]:0".parse::<Inet6Endpoint>().unwrap() == Inet6Endpoint::any(0));
	assert!("[::1]:65535".parse::<Inet6Endpoint>().unwrap() == Inet6Endpoint::with_port(65535));

	for text in &["2001:db8::1:8080", "[2001:db8::1]", "[2001:db8::1]:", "[2001:db8::1]:65536", "[nope]:80", "[::1]:+80", "[::1]:0080", "[::1]:-1", "[::1]: 80"] {
		assert!(let Err(Error::InvalidAddressFormat { .. }) = text.parse::<Inet6Endpoint>());
	}
}

#[test]
fn test_std_conversion() {
	let std_endpoint: std::net::SocketAddrV6 = "[2001:db8::1]:8080".parse().unwrap();
	let endpoint = Inet6Endpoint::from(std_endpoint);
	assert!(endpoint == Inet6Endpoint::new(8080, parse("2001:db8::1")));
	assert!(std::net::SocketAddrV6::from(endpoint) == std_endpoint);

	let scoped = std::net::SocketAddrV6::new("fe80::1".parse().unwrap(), 80, 7, 3);
	let endpoint = Inet6Endpoint::from(scoped);
	assert!(&endpoint.as_native()[4..8] == &[0, 0, 0, 0]);
	assert!(&endpoint.as_native()[24..28] == &[0, 0, 0, 0]);
}

#[test]
fn test_protocol() {
	let protocol = Inet6Endpoint::default().protocol();
	assert!(protocol == Tcp);
	assert!(protocol.kind() == libc::SOCK_STREAM);
	assert!(protocol.protocol() == libc::IPPROTO_TCP);
	assert!(protocol.family() == libc::PF_INET6);
}
