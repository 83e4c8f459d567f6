#![no_main]

use cryptonight::{hash_with, Backend, Config, Context, Params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(params) = Params::new(1 << 14, 1 << 10) else {
        return;
    };
    let Ok(hard) = Config::new(params).with_backend(Backend::AesNi) else {
        return;
    };
    let Ok(soft) = Config::new(params).with_backend(Backend::Portable) else {
        return;
    };

    let mut ctx = Context::new(&params);
    let a = hash_with(data, &mut ctx, &hard);
    let b = hash_with(data, &mut ctx, &soft);

    assert_eq!(a, b, "AES-NI and portable backends differ!");
});
