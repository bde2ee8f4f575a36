#![no_main]

use libfuzzer_sys::fuzz_target;
use proofer::Session;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut session = Session::new();
        for line in s.lines() {
            if let Ok(reply) = session.handle(line) {
                if reply.is_exit() {
                    break;
                }
            }
        }
    }
});
