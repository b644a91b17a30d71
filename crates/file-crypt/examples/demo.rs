//! Demonstrates sealing and opening a buffer in both chaining modes.

use file_crypt::{decrypt_buffer, encrypt_buffer, Mode};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key: Vec<u8> = (0u8..32).collect();
    let message = b"the quick brown fox jumps over the lazy dog".to_vec();

    for mode in [Mode::Ecb, Mode::Cbc] {
        let sealed = encrypt_buffer(&message, &key, mode, &mut rng).unwrap();
        let opened = decrypt_buffer(&sealed, &key, mode).unwrap();
        assert_eq!(opened, message);
        println!(
            "{}: {} plaintext bytes -> {} ciphertext bytes",
            mode,
            message.len(),
            sealed.len()
        );
        println!("  {}", hex::encode(&sealed));
    }

    println!("example succeeded; both modes round-trip");
}
