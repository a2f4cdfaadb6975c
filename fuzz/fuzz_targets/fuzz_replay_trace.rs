#![no_main]

use folio::config::FolioConfig;
use folio::replay::{ReplaySession, Trace};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any trace that parses must replay without panicking and keep the index in range
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(trace) = Trace::from_json(s) else {
        return;
    };
    if let Ok(session) = ReplaySession::play(&FolioConfig::default(), &trace) {
        let gallery = session.gallery();
        assert!(gallery.is_empty() || gallery.current_index() < gallery.len());
    }
});
