//! Registers a handful of options through a help page and parses the
//! process arguments leniently.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p typed-args-examples --example person -- \
//!     -name hhhh -age 69 -arr okay then ecks dee "no u" -efficiency 21 40
//! ```

use typed_args_core::{ArgsParser, HelpPage, OptionSchema, ParameterType};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    for arg in &args {
        println!("Argument: {arg}");
    }

    let mut schema = OptionSchema::new();
    let mut help = HelpPage::new("Demo");
    let declared = [
        ("doit", ParameterType::Flag, "Do the thing"),
        ("dryrun", ParameterType::Flag, "Only print what would happen"),
        ("name", ParameterType::String, "The name of the person"),
        ("arr", ParameterType::StringArray, "Some words about the person"),
        ("age", ParameterType::Number, "The age of the person"),
        ("efficiency", ParameterType::Range, "The efficiency of the person"),
    ];
    for (name, parameter_type, description) in declared {
        if let Err(err) = help.register(name, parameter_type, description, &mut schema) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
    print!("{}", help.render());

    let options = ArgsParser::new(&schema).parse_lenient(&args);

    if !options.has_flag("doit") {
        println!("Doesn't have the doit flag");
    }
    if options.has_flag("dryrun") {
        println!("Dry run requested");
    }
    if let Some(name) = options.string("name") {
        println!("Name: {name}");
    }
    if let Some(age) = options.number("age") {
        println!("Age: {age}");
    }
    if let Some(range) = options.range("efficiency") {
        println!("Efficiency: {}, {}", range.start, range.end);
    }
    if let Some(words) = options.string_array("arr") {
        for word in words {
            println!("{word}");
        }
    }
}
