use bolero::check;
use cryptonight::{double_hash, double_hash_packed, hash_with, Config, Context, Params};

#[test]
fn fuzz_double_lane_consistency() {
    let Ok(params) = Params::new(1 << 14, 1 << 10) else {
        return;
    };
    let config = Config::new(params);

    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(a, b)| {
            let mut single = Context::new(&params);
            let (mut c0, mut c1) = (Context::new(&params), Context::new(&params));
            let out = double_hash(a, b, &mut c0, &mut c1, &config);
            assert_eq!(out[..32], hash_with(a, &mut single, &config), "Lane 0 mismatch");
            assert_eq!(out[32..], hash_with(b, &mut single, &config), "Lane 1 mismatch");
        });
}

#[test]
fn fuzz_packed_split() {
    let Ok(params) = Params::new(1 << 14, 1 << 10) else {
        return;
    };
    let config = Config::new(params);

    check!().with_type::<Vec<u8>>().for_each(|data| {
        let (mut c0, mut c1) = (Context::new(&params), Context::new(&params));
        let result = double_hash_packed(data, &mut c0, &mut c1, &config);
        if data.len() % 2 == 1 {
            assert!(result.is_err(), "Odd packed length must be rejected");
            return;
        }
        let (a, b) = data.split_at(data.len() / 2);
        assert_eq!(result.ok(), Some(double_hash(a, b, &mut c0, &mut c1, &config)));
    });
}
