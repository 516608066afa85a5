/// Emits the C-ABI shim matching the libFuzzer custom-mutator contract the
/// reference prototype's `test-data/libfuzzer/generator.h` declares. This is
/// the one `unsafe` surface in the whole workspace; it exists purely to
/// translate raw pointer/length pairs into the slices the safe facade
/// expects, and to give drivers that can't hold a handle somewhere to keep
/// the process-wide PRNG the source contract's `seed_generator` implies.
pub fn emit_ffi_shim(engine_name: &str) -> String {
    format!(
        r#"#[cfg(feature = "ffi")]
pub mod ffi {{
    use super::{engine_name};

    #[unsafe(no_mangle)]
    pub unsafe extern "C" fn mutate_sequence(buf: *mut usize, len: usize, capacity: usize) -> usize {{
        if buf.is_null() || capacity == 0 {{
            return 0;
        }}
        let slice = unsafe {{ std::slice::from_raw_parts_mut(buf, capacity) }};
        gramforge_core::ffi::with_global_prng(|rng| {{
            gramforge_core::facade::mutate_sequence::<{engine_name}>(slice, len, rng)
        }})
    }}

    #[unsafe(no_mangle)]
    pub unsafe extern "C" fn serialize_sequence(
        seq: *const usize,
        seq_len: usize,
        out: *mut u8,
        out_len: usize,
    ) -> usize {{
        if seq.is_null() || out.is_null() || seq_len == 0 || out_len == 0 {{
            return 0;
        }}
        let seq = unsafe {{ std::slice::from_raw_parts(seq, seq_len) }};
        let out = unsafe {{ std::slice::from_raw_parts_mut(out, out_len) }};
        gramforge_core::facade::serialize_sequence::<{engine_name}>(seq, out).bytes_written
    }}

    #[unsafe(no_mangle)]
    pub unsafe extern "C" fn unparse_sequence(
        seq_buf: *mut usize,
        seq_capacity: usize,
        input: *const u8,
        input_len: usize,
    ) -> usize {{
        if seq_buf.is_null() || seq_capacity == 0 || input.is_null() || input_len == 0 {{
            return 0;
        }}
        let seq_buf = unsafe {{ std::slice::from_raw_parts_mut(seq_buf, seq_capacity) }};
        let input = unsafe {{ std::slice::from_raw_parts(input, input_len) }};
        gramforge_core::facade::unparse_sequence::<{engine_name}>(seq_buf, input)
    }}

    #[unsafe(no_mangle)]
    pub extern "C" fn seed_generator(new_seed: usize) {{
        gramforge_core::ffi::seed_generator(new_seed as u64);
    }}
}}
"#
    )
}
