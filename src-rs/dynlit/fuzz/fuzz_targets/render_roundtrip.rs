#![no_main]

use dynlit::Literal;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Debug, Clone, Copy, arbitrary::Arbitrary)]
enum FuzzData {
    Int(i64),
    Float(f64),
}

fuzz_target!(|data: FuzzData| {
    match data {
        FuzzData::Int(value) => {
            let literal = Literal::from(value);
            let rendered = literal.to_string();
            assert_eq!(rendered.parse::<i64>(), Ok(value));
            assert_eq!(literal.as_int(), Some(value));
        }
        FuzzData::Float(value) => {
            if value.is_nan() {
                return;
            }

            let literal = Literal::from(value);
            let rendered = literal.to_string();
            let reparsed = rendered
                .parse::<f64>()
                .expect("rendered floats should reparse");
            assert_eq!(reparsed.to_bits(), value.to_bits());
        }
    }
});
