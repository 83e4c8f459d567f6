use bolero::check;
use cryptonight::kernels::cell_offset;
use cryptonight::{hash_with, Backend, Config, Context, Params};

// Every power-of-two pad from one window upward must hash in bounds.
#[test]
fn fuzz_params_geometry() {
    check!()
        .with_type::<(u8, u16, Vec<u8>)>()
        .for_each(|(shift, iterations, data)| {
            let memory = 1usize << (7 + usize::from(*shift % 8));
            let Ok(params) = Params::new(memory, usize::from(*iterations % 512) + 1) else {
                panic!("Power-of-two size {memory} rejected");
            };
            let config = Config::new(params);
            let mut ctx = Context::new(&params);
            let first = hash_with(data, &mut ctx, &config);
            assert_eq!(ctx.scratchpad().size_bytes(), memory);
            assert_eq!(first, hash_with(data, &mut ctx, &config));

            // Safe indexing panics on any out-of-range cell.
            let Ok(portable) = config.with_backend(Backend::Portable) else {
                panic!("Portable backend refused");
            };
            assert_eq!(first, hash_with(data, &mut ctx, &portable));
        });
}

// Any address lands on an aligned cell inside the pad.
#[test]
fn fuzz_cell_offset_in_bounds() {
    check!()
        .with_type::<(u64, u8)>()
        .for_each(|(addr, shift)| {
            let memory = 1usize << (7 + usize::from(*shift % 15));
            let Ok(params) = Params::new(memory, 1) else {
                panic!("Power-of-two size {memory} rejected");
            };
            let offset = cell_offset(*addr, params.mask());
            assert!(offset <= params.memory() - 16, "{offset:#x} past {memory:#x}");
            assert_eq!(offset % 16, 0, "{offset:#x} unaligned");
        });
}

#[test]
fn fuzz_params_validation() {
    check!()
        .with_type::<(usize, usize)>()
        .for_each(|(memory, iterations)| {
            let valid = memory.is_power_of_two() && *memory >= 128 && *iterations > 0;
            assert_eq!(Params::new(*memory, *iterations).is_ok(), valid);
        });
}
