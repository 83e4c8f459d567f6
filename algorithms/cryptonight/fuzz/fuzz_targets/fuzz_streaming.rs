#![no_main]

use cryptonight::{hash_with, Config, Context, Hasher, Params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let Ok(params) = Params::new(1 << 14, 1 << 10) else {
        return;
    };
    let config = Config::new(params);

    // Chunk size is derived from the first byte (1 to 256)
    let chunk_size = usize::from(first) + 1;

    let reference_hash = hash_with(rest, &mut Context::new(&params), &config);

    let mut hasher = Hasher::with_config(config);
    for chunk in rest.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streaming_hash = hasher.finalize();

    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
});
