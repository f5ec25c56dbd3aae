use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct Prefix {
    key: String,
    label: String,
}

#[derive(Deserialize)]
struct FieldData {
    prefixes: Vec<Prefix>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/field_data.json")?;
    let data: FieldData = serde_json::from_str(&json)?;

    match data.prefixes.first() {
        Some(first) if first.label.is_empty() => {}
        _ => return Err("the first prefix must be the default, with an empty label".into()),
    }

    write_ordered_map(
        &output.join("prefix_labels.rs"),
        data.prefixes.iter().map(|p| (&*p.key, &*p.label)),
        |v| format!("{:?}", v),
    )?;

    Ok(())
}

fn write_ordered_map<'a, I, F>(output: &Path, entries: I, transform: F) -> Result<()>
where
    I: Iterator<Item = (&'a str, &'a str)>,
    F: Fn(&'a str) -> String,
{
    let mut builder = phf_codegen::OrderedMap::new();
    for (k, v) in entries {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
