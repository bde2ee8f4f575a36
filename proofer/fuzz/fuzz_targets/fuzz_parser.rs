#![no_main]

use libfuzzer_sys::fuzz_target;
use proofer::{parse, parse_with_limits, ResourceLimits};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(formula) = parse(s) {
            let rendered = formula.render();
            // Renderings add spaces and parentheses, depth is unchanged
            let limits = ResourceLimits {
                max_formula_bytes: rendered.len().max(ResourceLimits::default().max_formula_bytes),
                ..ResourceLimits::default()
            };
            let reparsed = parse_with_limits(&rendered, &limits).expect("canonical text must parse");
            assert_eq!(reparsed, formula);
        }
    }
});
