use full_name::{FieldSettings, Layout, Name, ReturnFormat};
use serde::Serialize;
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing_subscriber::EnvFilter;

#[cfg_attr(rustfmt, rustfmt_skip)]
const USAGE: &str = "
Usage:
    full_name parse [--legacy] <stored>
    full_name parse [--legacy] -
    full_name format [--legacy] <return_format> <stored>
    full_name format [--legacy] <return_format> -
    full_name serialize [--legacy] <prefix> <first> <last>
    full_name validate [--required] <prefix> <first> <last>
    full_name choices [--legacy]

With the `parse` command, full_name loads a stored value such as 'Doe|Jane|Mrs'
and prints it as JSON. With the `format` command, it loads the stored value and
prints it in the given return format (first_last, last_first, prefix_first_last
or array), as JSON. If `-` is the last argument, either command reads
newline-separated stored values from stdin and prints one line of output for
each.

With the `serialize` command, it prints the string that would be stored for
the given name parts. With the `validate` command, it checks the name parts as
a submitted form would, printing the error message and exiting with status 1
if they are rejected.

With the `choices` command, it prints the prefix and return format choices a
field offers, as JSON.

`--legacy` selects the two-segment 'last|first' storage layout; `--required`
marks the field as required. Set RUST_LOG=debug to see recovered input on
stderr.
";

const EX_USAGE: i32 = 64;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let field = FieldSettings {
        layout: if take_flag(&mut args, "--legacy") {
            Layout::Legacy
        } else {
            Layout::Prefixed
        },
        required: take_flag(&mut args, "--required"),
        ..FieldSettings::default()
    };

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let status = match args.as_slice() {
        ["parse", "-"] => each_line(|stored| print_json(&field.load_value(Some(stored)))),
        ["parse", stored @ ..] if !stored.is_empty() => {
            print_json(&field.load_value(Some(&stored.join(" "))))
        }
        ["format", selector, "-"] => {
            let field = with_format(field, selector);
            each_line(|stored| print_formatted(&field, stored))
        }
        ["format", selector, stored @ ..] if !stored.is_empty() => {
            print_formatted(&with_format(field, selector), &stored.join(" "))
        }
        ["serialize", prefix, first, last] => {
            println!("{}", field.update_value(&Name::new(prefix, first, last)));
            0
        }
        ["validate", prefix, first, last] => validate(&field, &Name::new(prefix, first, last)),
        ["choices"] => print_json(&Choices::for_field(&field)),
        _ => {
            eprintln!("{}", USAGE);
            EX_USAGE
        }
    };

    process::exit(status);
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

fn with_format(field: FieldSettings, selector: &str) -> FieldSettings {
    FieldSettings {
        return_format: ReturnFormat::from_selector(selector),
        ..field
    }
}

fn each_line<F: FnMut(&str) -> i32>(mut handle: F) -> i32 {
    let reader = BufReader::new(io::stdin());
    for line in reader.lines() {
        match line {
            Ok(input) => {
                let status = handle(&input);
                if status != 0 {
                    return status;
                }
            }
            Err(e) => {
                eprintln!("failed to read input: {}", e);
                return 1;
            }
        }
    }
    0
}

fn print_formatted(field: &FieldSettings, stored: &str) -> i32 {
    let name = field.load_value(Some(stored));
    print_json(&field.format_value(Some(&name)))
}

fn validate(field: &FieldSettings, name: &Name) -> i32 {
    match field.validate_value(name) {
        Ok(()) => {
            println!("valid");
            0
        }
        Err(e) => {
            println!("{}", e);
            1
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("failed to encode output: {}", e);
            return 1;
        }
    };

    // A closed pipe just ends the output
    match writeln!(&mut io::stdout(), "{}", json) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[derive(Serialize)]
struct Choices {
    prefixes: Vec<Choice>,
    return_formats: Vec<Choice>,
    default_return_format: ReturnFormat,
}

#[derive(Serialize)]
struct Choice {
    key: &'static str,
    label: &'static str,
}

impl Choices {
    fn for_field(field: &FieldSettings) -> Choices {
        let to_choice = |(key, label): (&'static str, &'static str)| Choice { key, label };
        let prefixes = if field.layout.supports_prefix() {
            full_name::prefixes().map(to_choice).collect()
        } else {
            Vec::new()
        };

        Choices {
            prefixes,
            return_formats: field.return_format_choices().map(to_choice).collect(),
            default_return_format: ReturnFormat::default(),
        }
    }
}
