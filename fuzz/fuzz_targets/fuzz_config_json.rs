#![no_main]

use folio::config::FolioConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and validating arbitrary input must never panic
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = serde_json::from_str::<FolioConfig>(s)
    {
        let _ = config.validate();
    }
});
