#![no_main]
use getarg::OptionMap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary bytes into argument strings on NUL, the way argv is laid out.
    // Parsing and every lookup must complete without panicking.
    let text = String::from_utf8_lossy(data);
    let args: Vec<&str> = text.split('\0').collect();
    let map = OptionMap::parse(&args);

    for arg in &args {
        let name = arg.split('=').next().unwrap_or_default();
        let _ = map.get_bool(name, true);
        let _ = map.get_int(name, 7);
        let _ = map.get_string(name, "d");
    }

    // Explicit names and negated names never overlap.
    for (name, _) in map.negations() {
        assert!(!map.is_set(name));
    }
});
