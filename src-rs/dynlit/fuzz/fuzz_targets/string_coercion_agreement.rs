#![no_main]

use dynlit::Literal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    let literal = Literal::from(text.as_str());

    // Any text that passes the strict integer grammar is also valid float
    // text, and the two coercions must agree on the value.
    if let Some(int_value) = literal.as_int() {
        let float_value = literal.as_float();
        assert_eq!(
            float_value,
            Some(int_value as f64),
            "coercions disagree for {text:?}"
        );

        // probing again must return the memoized result unchanged
        assert_eq!(literal.as_int(), Some(int_value));
    }

    // rendering a string literal never alters the text
    assert_eq!(literal.to_string(), text);
});
