use bytes::Bytes;
use std::ops::Deref;

/// The authoritative payload of a request body.
///
/// A `BodyBytes` is never patched in place: every edit produces a new value which
/// replaces the previous one wholesale. Cloning is cheap since the underlying
/// buffer is reference counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BodyBytes {
    inner: Bytes,
}

impl BodyBytes {
    /// Creates an empty body.
    pub const fn empty() -> Self {
        Self { inner: Bytes::new() }
    }

    /// Creates a body by copying `data`.
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self { inner: Bytes::copy_from_slice(data) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Returns the underlying shared buffer, e.g. to hand it over to a transport.
    pub fn into_bytes(self) -> Bytes {
        self.inner
    }
}

impl Deref for BodyBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for BodyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Bytes> for BodyBytes {
    fn from(inner: Bytes) -> Self {
        Self { inner }
    }
}

impl From<Vec<u8>> for BodyBytes {
    fn from(vec: Vec<u8>) -> Self {
        Self { inner: Bytes::from(vec) }
    }
}

impl From<String> for BodyBytes {
    fn from(string: String) -> Self {
        Self { inner: Bytes::from(string) }
    }
}

impl From<&'static [u8]> for BodyBytes {
    fn from(slice: &'static [u8]) -> Self {
        Self { inner: Bytes::from_static(slice) }
    }
}

impl From<&'static str> for BodyBytes {
    fn from(str: &'static str) -> Self {
        Self { inner: Bytes::from_static(str.as_bytes()) }
    }
}

impl From<BodyBytes> for Bytes {
    fn from(body: BodyBytes) -> Self {
        body.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let body = BodyBytes::default();
        assert!(body.is_empty());
        assert_eq!(body, BodyBytes::empty());
    }

    #[test]
    fn test_shares_buffer_on_clone() {
        let body = BodyBytes::from(vec![1_u8, 2, 3]);
        let cloned = body.clone();

        assert_eq!(body.as_bytes().as_ptr(), cloned.as_bytes().as_ptr());
        assert_eq!(&cloned[..], &[1, 2, 3]);
    }
}
