/// Streaming hash accumulator.
///
/// Consumes bytes in order and produces a fixed-length digest once. Boxed
/// finalization keeps the trait object-safe, so the registry can hand out
/// `Box<dyn Hasher>` for any algorithm.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter from any RustCrypto [`digest::Digest`] to [`Hasher`].
pub struct DigestHasher<D>(D);

impl<D: digest::Digest + Send + 'static> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }

    /// Fresh accumulator behind a trait object.
    pub fn boxed() -> Box<dyn Hasher> { Box::new(Self::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { D::digest(data).to_vec() }
}

impl<D: digest::Digest + Send + 'static> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: digest::Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { digest::Digest::update(&mut self.0, data); }
    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().to_vec() }
}

#[cfg(feature = "blake3")]
pub struct Blake3Hasher(blake3::Hasher);

#[cfg(feature = "blake3")]
impl Blake3Hasher {
    pub fn new() -> Self { Self(blake3::Hasher::new()) }

    pub fn boxed() -> Box<dyn Hasher> { Box::new(Self::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { blake3::hash(data).as_bytes().to_vec() }
}

#[cfg(feature = "blake3")]
impl Default for Blake3Hasher {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "blake3")]
impl Hasher for Blake3Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().as_bytes().to_vec() }
}
