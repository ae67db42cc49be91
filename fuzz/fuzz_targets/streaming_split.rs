#![no_main]
use libfuzzer_sys::fuzz_target;
use simdiag_log::LogParser;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let s = String::from_utf8_lossy(rest);

    let mut at = (split as usize * s.len()) / 255;
    while !s.is_char_boundary(at) {
        at -= 1;
    }

    let mut parser = LogParser::new();
    parser.update(&s[..at]);
    parser.update(&s[at..]);
    assert_eq!(parser.finish(), simdiag_log::parse(&s));
});
