//! Shows the errors strict parsing reports for common mistakes, and what
//! lenient parsing keeps from the same input.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p typed-args-examples --example strict_errors
//! ```

use typed_args_core::{ArgsParser, OptionSchema, ParameterType};

fn main() {
    let schema = match OptionSchema::from_options([
        ("size", ParameterType::Number),
        ("window", ParameterType::Range),
        ("ids", ParameterType::NumberArray),
        ("tag", ParameterType::String),
    ]) {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let parser = ArgsParser::new(&schema);

    let cases: [&[&str]; 5] = [
        &["size", "3"],
        &["-size", "three"],
        &["-window", "0", "ten"],
        &["-ids", "1", "2", "x", "4"],
        &["-tag"],
    ];

    for args in cases {
        println!("{args:?}");
        match parser.parse(args) {
            Ok(options) => println!("  strict: ok ({} option(s))", options.len()),
            Err(err) => println!("  strict: {:?}: {err}", err.kind()),
        }
        let options = parser.parse_lenient(args);
        println!("  lenient: {:?}", options.snapshot_as_text());
    }
}
