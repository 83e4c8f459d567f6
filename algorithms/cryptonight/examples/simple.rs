//! CryptoNight Basic Example
//!
//! Minimal usage: `let hash = cryptonight::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"This is a test";
    let hash = cryptonight::hash(data);

    println!("Backend: {}", cryptonight::active_backend());
    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(hash));
}
