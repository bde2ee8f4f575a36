#![no_main]

use libfuzzer_sys::fuzz_target;
use proofer::{parse, Rule};

fuzz_target!(|data: (&str, &str, u8)| {
    let (left, right, pick) = data;
    let (Ok(left), Ok(right)) = (parse(left), parse(right)) else {
        return;
    };

    let rule = Rule::ALL[pick as usize % Rule::ALL.len()];
    let first = [left];
    let second = [right];
    let _ = rule.apply(&first, Some(&second), true);
    let _ = rule.apply(&first, None, true);
    let _ = rule.apply_at(&first, &proofer::Coordinate::top(), true);
});
