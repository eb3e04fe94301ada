//! IPv6 addresses and socket endpoints for POSIX sockets.
//!
//! The standard library has IPv6 address types, but they don't give you a socket address
//! that can be handed to the kernel as-is.
//! This library provides an IPv6 address value and an IPv6 endpoint whose binary form
//! is byte-for-byte compatible with the platform `sockaddr_in6`,
//! so it can be used directly with `connect()`, `bind()`, `accept()` and friends.
//!
//! Text conversions go through the platform `inet_pton()` and `inet_ntop()`,
//! so the accepted and produced notation is exactly what the C library uses.

mod address;
pub use address::*;

mod error;
pub use error::*;

mod protocol;
pub use protocol::*;

mod sys;
