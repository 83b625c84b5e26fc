// crates/infra/src/hashing.rs
use price_clean_ports::{HashValue, Hasher};
use price_clean_shared_kernel::Result;
use xxhash_rust::xxh3::xxh3_128;

/// Stable, cross-process content digest for stored artifacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Hasher;

impl Hasher for Xxh3Hasher {
    fn hash_bytes(&self, data: &[u8]) -> Result<HashValue> {
        Ok(HashValue(xxh3_128(data)))
    }
}
