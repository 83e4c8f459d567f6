use bolero::check;
use cryptonight::sponge::{self, Sponge};
use sha3::Digest;

#[test]
fn fuzz_sponge_chunking() {
    check!()
        .with_type::<(Vec<u8>, u8)>()
        .for_each(|(data, chunk)| {
            let expected = sponge::absorb(data);

            let mut s = Sponge::new();
            for piece in data.chunks(usize::from(*chunk).max(1)) {
                s.update(piece);
            }
            assert_eq!(sponge::squeeze(s), expected, "Chunk size {chunk} mismatch");
        });
}

// The squeezed state opens with the Keccak-256 digest of the same input.
#[test]
fn fuzz_sponge_keccak256_prefix() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let state = sponge::absorb(data).to_bytes();
        assert_eq!(&state[..32], sha3::Keccak256::digest(data).as_slice());
    });
}
