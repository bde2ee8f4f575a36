#![no_main]

use libfuzzer_sys::fuzz_target;
use proofer::parse;

fuzz_target!(|shape: (u16, u8)| {
    let (depth, kind) = shape;
    let depth = depth as usize % 1000;

    let text = match kind % 3 {
        0 => format!("{}p{}", "(".repeat(depth), ")".repeat(depth)),
        1 => format!("{}p", "~".repeat(depth)),
        _ => vec!["p"; depth + 1].join("->"),
    };

    let _ = parse(&text);
});
