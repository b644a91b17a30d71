//! Bulk ECB and CBC chaining over the block primitives.
//!
//! These functions work on whole buffers whose length is already a multiple
//! of the block size. Padding is a concern of the layer above.

use crate::block::{xor_in_place, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_fixed, encrypt_fixed, expand_key};
use crate::error::{Error, Result};

fn check_aligned(data: &[u8]) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::UnalignedData(data.len()));
    }
    Ok(())
}

fn check_iv(iv: &[u8]) -> Result<Block> {
    iv.try_into().map_err(|_| Error::InvalidIvSize(iv.len()))
}

/// Encrypts an aligned buffer in ECB mode, one block at a time.
pub fn encrypt_ecb(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    check_aligned(data)?;
    let round_keys = expand_key(key)?;

    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        out.extend_from_slice(&encrypt_fixed(&block, &round_keys));
    }
    Ok(out)
}

/// Decrypts an aligned ECB buffer.
pub fn decrypt_ecb(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    check_aligned(data)?;
    let round_keys = expand_key(key)?;

    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        out.extend_from_slice(&decrypt_fixed(&block, &round_keys));
    }
    Ok(out)
}

/// Encrypts an aligned buffer in CBC mode, seeding the chain with `iv`.
pub fn encrypt_cbc(key: &[u8], data: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_aligned(data)?;
    let mut prev = check_iv(iv)?;
    let round_keys = expand_key(key)?;

    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = chunk.try_into().expect("chunk length is sixteen");
        xor_in_place(&mut block, &prev);
        prev = encrypt_fixed(&block, &round_keys);
        out.extend_from_slice(&prev);
    }
    Ok(out)
}

/// Decrypts an aligned CBC buffer chained from `iv`.
pub fn decrypt_cbc(key: &[u8], data: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_aligned(data)?;
    let mut prev = check_iv(iv)?;
    let round_keys = expand_key(key)?;

    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let cipher_block: Block = chunk.try_into().expect("chunk length is sixteen");
        let mut plain = decrypt_fixed(&cipher_block, &round_keys);
        xor_in_place(&mut plain, &prev);
        // Chain the ciphertext block, not the recovered plaintext.
        prev = cipher_block;
        out.extend_from_slice(&plain);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    // SP 800-38A appendix F: the shared four-block plaintext and the
    // AES-128 key used by the F.1/F.2 vectors.
    const NIST_KEY_128: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    const NIST_IV: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN_HEX: &str = "6bc1bee22e409f96e93d7e117393172a\
                                  ae2d8a571e03ac9c9eb76fac45af8e51\
                                  30c81c46a35ce411e5fbc1191a0a52ef\
                                  f69f2445df4f9b17ad2b417be66c3710";

    fn nist_plain() -> Vec<u8> {
        hex::decode(NIST_PLAIN_HEX).unwrap()
    }

    #[test]
    fn ecb_matches_sp800_38a_f1() {
        let plain = nist_plain();
        let expected = hex::decode(
            "3ad77bb40d7a3660a89ecaf32466ef97\
             f5d3d58503b9699de785895a96fdbaaf\
             43b1cd7f598ece23881b00e3ed030688\
             7b0c785e27e8ad3f8223207104725dd4",
        )
        .unwrap();

        assert_eq!(encrypt_ecb(&NIST_KEY_128, &plain).unwrap(), expected);
        assert_eq!(decrypt_ecb(&NIST_KEY_128, &expected).unwrap(), plain);
    }

    #[test]
    fn cbc_matches_sp800_38a_f2_1() {
        let plain = nist_plain();
        let expected = hex::decode(
            "7649abac8119b246cee98e9b12e9197d\
             5086cb9b507219ee95db113a917678b2\
             73bed6b8e3c1743b7116e69e22229516\
             3ff1caa1681fac09120eca307586e1a7",
        )
        .unwrap();

        assert_eq!(encrypt_cbc(&NIST_KEY_128, &plain, &NIST_IV).unwrap(), expected);
        assert_eq!(decrypt_cbc(&NIST_KEY_128, &expected, &NIST_IV).unwrap(), plain);
    }

    #[test]
    fn single_block_ecb_matches_fips_appendix_c3() {
        // The byte-counting AES-256 key over the appendix plaintext.
        let key: Vec<u8> = (0u8..32).collect();
        let plain = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let expected = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap();
        assert_eq!(encrypt_ecb(&key, &plain).unwrap(), expected);
    }

    #[test]
    fn cbc_matches_sp800_38a_f2_5() {
        let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
            .unwrap();
        let plain = nist_plain();
        let expected = hex::decode(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
             9cfc4e967edb808d679f777bc6702c7d\
             39f23369a9d9bacfa530e26304231461\
             b2eb05e2c39be9fcda6c19078c6a9d1b",
        )
        .unwrap();

        assert_eq!(encrypt_cbc(&key, &plain, &NIST_IV).unwrap(), expected);
        assert_eq!(decrypt_cbc(&key, &expected, &NIST_IV).unwrap(), plain);
    }

    #[test]
    fn ecb_repeats_identical_blocks_cbc_does_not() {
        let key = [0x42u8; 16];
        let data = [0xabu8; 32];

        let ecb = encrypt_ecb(&key, &data).unwrap();
        assert_eq!(ecb[..16], ecb[16..]);

        let iv = [0x01u8; 16];
        let cbc = encrypt_cbc(&key, &data, &iv).unwrap();
        assert_ne!(cbc[..16], cbc[16..]);
    }

    #[test]
    fn empty_aligned_input_yields_empty_output() {
        let key = [0u8; 16];
        assert!(encrypt_ecb(&key, &[]).unwrap().is_empty());
        assert!(encrypt_cbc(&key, &[], &NIST_IV).unwrap().is_empty());
    }

    #[test]
    fn rejects_unaligned_data_before_key_checks() {
        // A bad length reports as unaligned even when the key is bad too.
        let err = encrypt_ecb(&[0u8; 5], &[0u8; 17]).unwrap_err();
        assert_eq!(err, Error::UnalignedData(17));

        let err = decrypt_cbc(&[0u8; 5], &[0u8; 17], &[0u8; 3]).unwrap_err();
        assert_eq!(err, Error::UnalignedData(17));
    }

    #[test]
    fn rejects_bad_iv_before_bad_key() {
        let err = encrypt_cbc(&[0u8; 5], &[0u8; 16], &[0u8; 15]).unwrap_err();
        assert_eq!(err, Error::InvalidIvSize(15));

        let err = encrypt_cbc(&[0u8; 5], &[0u8; 16], &NIST_IV).unwrap_err();
        assert_eq!(err, Error::InvalidKeyLength(5));
    }

    #[test]
    fn bulk_round_trip_random_lengths() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let mut key = [0u8; 24];
        let mut iv = [0u8; 16];
        for blocks in [1usize, 2, 5, 32] {
            let mut data = vec![0u8; blocks * BLOCK_SIZE];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut iv);
            rng.fill_bytes(&mut data);

            let ct = encrypt_ecb(&key, &data).unwrap();
            assert_eq!(ct.len(), data.len());
            assert_ne!(ct, data);
            assert_eq!(decrypt_ecb(&key, &ct).unwrap(), data);

            let ct = encrypt_cbc(&key, &data, &iv).unwrap();
            assert_eq!(ct.len(), data.len());
            assert_ne!(ct, data);
            assert_eq!(decrypt_cbc(&key, &ct, &iv).unwrap(), data);
        }
    }
}
