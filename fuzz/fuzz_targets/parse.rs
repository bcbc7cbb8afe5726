#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(source) = std::str::from_utf8(data) {
        // Lexing and parsing must fail with an error, never a panic.
        if let Ok(unit) = jparse::parse_source(source) {
            let tree = jparse::SyntaxTree::new(unit);
            let _ = tree.to_string();
        }
    }
});
