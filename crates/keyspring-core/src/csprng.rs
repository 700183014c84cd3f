//! The CSPRNG primitive boundary.
//!
//! The generator treats its cryptographic core as an external black box:
//! something that accepts seed material of any length, then produces bytes on
//! demand, refusing when unseeded. [`ChaChaCsprng`] is the production
//! binding; tests substitute deterministic implementations of [`Csprng`].

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};

use crate::error::CsprngError;

/// A cryptographically secure pseudo-random byte generator.
///
/// `generate` must fail — never silently zero-fill — when the primitive is
/// unseeded or cannot satisfy the request.
pub trait Csprng: Sized {
    /// Allocate the primitive. Failure here is unrecoverable for whoever
    /// needed the generator.
    fn init() -> Result<Self, CsprngError>;

    /// Feed seed material of arbitrary length into the primitive, replacing
    /// any previous state.
    fn seed(&mut self, material: &[u8]) -> Result<(), CsprngError>;

    /// Fill `dest` with cryptographically strong bytes.
    fn generate(&mut self, dest: &mut [u8]) -> Result<(), CsprngError>;
}

/// ChaCha20 stream cipher as the production primitive.
///
/// Variable-length seed material is compressed to the cipher's 256-bit key
/// with SHA-256; the stream state itself lives in `rand_chacha`.
pub struct ChaChaCsprng {
    rng: Option<ChaCha20Rng>,
}

impl Csprng for ChaChaCsprng {
    fn init() -> Result<Self, CsprngError> {
        Ok(Self { rng: None })
    }

    fn seed(&mut self, material: &[u8]) -> Result<(), CsprngError> {
        if material.is_empty() {
            return Err(CsprngError::RejectedSeed("empty seed material".into()));
        }
        let digest: [u8; 32] = Sha256::digest(material).into();
        self.rng = Some(ChaCha20Rng::from_seed(digest));
        Ok(())
    }

    fn generate(&mut self, dest: &mut [u8]) -> Result<(), CsprngError> {
        match self.rng.as_mut() {
            Some(rng) => {
                rng.fill_bytes(dest);
                Ok(())
            }
            None => Err(CsprngError::NotSeeded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_generate_refuses() {
        let mut p = ChaChaCsprng::init().unwrap();
        let mut buf = [0u8; 16];
        assert!(matches!(p.generate(&mut buf), Err(CsprngError::NotSeeded)));
    }

    #[test]
    fn empty_seed_material_is_rejected() {
        let mut p = ChaChaCsprng::init().unwrap();
        assert!(matches!(p.seed(&[]), Err(CsprngError::RejectedSeed(_))));
    }

    #[test]
    fn seeded_generate_fills() {
        let mut p = ChaChaCsprng::init().unwrap();
        p.seed(b"material").unwrap();
        let mut buf = [0u8; 64];
        p.generate(&mut buf).unwrap();
        assert!(
            buf.iter().any(|&b| b != 0),
            "64 zero bytes from a seeded generator"
        );
    }

    #[test]
    fn same_material_same_stream() {
        let mut a = ChaChaCsprng::init().unwrap();
        let mut b = ChaChaCsprng::init().unwrap();
        a.seed(b"identical").unwrap();
        b.seed(b"identical").unwrap();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        a.generate(&mut x).unwrap();
        b.generate(&mut y).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn different_material_different_stream() {
        let mut a = ChaChaCsprng::init().unwrap();
        let mut b = ChaChaCsprng::init().unwrap();
        a.seed(b"material-a").unwrap();
        b.seed(b"material-b").unwrap();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        a.generate(&mut x).unwrap();
        b.generate(&mut y).unwrap();
        assert_ne!(x, y);
    }

    #[test]
    fn reseeding_restarts_the_stream() {
        let mut p = ChaChaCsprng::init().unwrap();
        p.seed(b"once").unwrap();
        let mut x = [0u8; 32];
        p.generate(&mut x).unwrap();
        p.seed(b"once").unwrap();
        let mut y = [0u8; 32];
        p.generate(&mut y).unwrap();
        assert_eq!(x, y, "same material must restart the same stream");
    }
}
