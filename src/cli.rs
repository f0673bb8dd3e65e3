//! Minimal CLI: demo | get
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;

use json_view::{format_iso8601, ArrayView, JsonError, ObjectView, Tag};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// read and write JSON documents through typed object/array views
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// build a small document, serialize it, parse it back and print its fields
    Demo(DemoOut),
    /// read one field from each input document with an expected type
    Get(GetOut),
}

#[derive(clap::Parser, Debug)]
struct DemoOut {
    /// also print the serialized document
    #[arg(long, default_value_t = false)]
    show_json: bool,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct GetOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// dotted path to the field; array positions are numbers (e.g. phoneNumbers.0)
    #[arg(long, short)]
    key: String,

    /// logical type the field must have (raw JSON if omitted)
    #[arg(long, value_enum)]
    expect: Option<Expect>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Expect {
    String,
    NString,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
    DateTime,
    NDateTime,
}

/// A view positioned somewhere inside a document.
enum Node {
    Object(ObjectView),
    Array(ArrayView),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_process(&self, mut apply: impl FnMut(&str, Node) -> Result<()>) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|error| anyhow!("failed to resolve input file paths: {error}"))?;
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            log::debug!("reading {source_path_str}");
            let source = std::fs::read(&source_path)
                .with_context(|| format!("failed to read source file ({source_path_str})"))?;
            let node = Node::parse(&source)
                .with_context(|| format!("failed to load JSON source file ({source_path_str})"))?;
            apply(&source_path_str, node)?;
        }
        Ok(())
    }
}

impl Node {
    fn parse(bytes: &[u8]) -> Result<Self, JsonError> {
        let value = serde_json::from_slice::<Value>(bytes)
            .map_err(|error| JsonError::Parse { message: error.to_string() })?;
        match Tag::of(&value) {
            Tag::Array => ArrayView::try_from(value).map(Node::Array),
            _ => ObjectView::try_from(value).map(Node::Object),
        }
    }

    fn raw(&self, seg: &str) -> Result<&Value> {
        match self {
            Node::Object(o) => o
                .get()
                .get(seg)
                .ok_or_else(|| anyhow!(JsonError::MissingKey { key: seg.to_owned() })),
            Node::Array(a) => {
                let i = index(seg)?;
                a.get().get(i).ok_or_else(|| {
                    anyhow!(JsonError::IndexOutOfRange { index: i, len: a.size() })
                })
            }
        }
    }

    fn descend(&self, seg: &str) -> Result<Node> {
        let into_array = Tag::of(self.raw(seg)?) == Tag::Array;
        let node = match (self, into_array) {
            (Node::Object(o), true) => Node::Array(o.array(seg)?),
            (Node::Object(o), false) => Node::Object(o.object(seg)?),
            (Node::Array(a), true) => Node::Array(a.array(index(seg)?)?),
            (Node::Array(a), false) => Node::Object(a.object(index(seg)?)?),
        };
        Ok(node)
    }

    fn read(&self, seg: &str, expect: Expect) -> Result<String> {
        match self {
            Node::Object(o) => Ok(read_object(o, seg, expect)?),
            Node::Array(a) => Ok(read_array(a, index(seg)?, expect)?),
        }
    }
}

fn show_date(d: Option<json_view::DateTime>) -> String {
    d.map(|d| format_iso8601(&d)).unwrap_or_else(|| "(invalid date)".to_string())
}

fn show_n_string(s: Option<String>) -> String {
    s.unwrap_or_else(|| "null".to_string())
}

fn read_object(o: &ObjectView, key: &str, expect: Expect) -> Result<String, JsonError> {
    Ok(match expect {
        Expect::String => o.string(key)?,
        Expect::NString => show_n_string(o.n_string(key)?),
        Expect::Number => o.number(key)?.to_string(),
        Expect::Integer => o.integer(key)?.to_string(),
        Expect::Boolean => o.boolean(key)?.to_string(),
        Expect::Object => o.object(key)?.to_string(),
        Expect::Array => o.array(key)?.to_string(),
        Expect::Null => o.is_null(key)?.to_string(),
        Expect::DateTime => show_date(o.date_time(key)?),
        Expect::NDateTime => show_date(o.n_date_time(key)?),
    })
}

fn read_array(a: &ArrayView, i: usize, expect: Expect) -> Result<String, JsonError> {
    Ok(match expect {
        Expect::String => a.string(i)?,
        Expect::NString => show_n_string(a.n_string(i)?),
        Expect::Number => a.number(i)?.to_string(),
        Expect::Integer => a.integer(i)?.to_string(),
        Expect::Boolean => a.boolean(i)?.to_string(),
        Expect::Object => a.object(i)?.to_string(),
        Expect::Array => a.array(i)?.to_string(),
        Expect::Null => a.is_null(i)?.to_string(),
        Expect::DateTime => show_date(a.date_time(i)?),
        Expect::NDateTime => show_date(a.n_date_time(i)?),
    })
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Demo(target) => {
                let bytes = create_object();
                if target.show_json {
                    print!("{}", String::from_utf8_lossy(&bytes));
                }
                if let Err(error) = parse_object(&bytes) {
                    println!("Error parsing JSON: {error}");
                }
                Ok(())
            }
            Command::Get(target) => {
                let mut failures = 0usize;
                target.input_settings.load_process(|source, root| {
                    match get_path(root, &target.key, target.expect) {
                        Ok(out) => println!("{out}"),
                        Err(error) => {
                            failures += 1;
                            eprintln!("{} {source}: {error:#}", "error:".red().bold());
                        }
                    }
                    Ok(())
                })?;
                if failures > 0 {
                    bail!("{failures} input(s) could not be read as expected");
                }
                Ok(())
            }
        }
    }
}

pub fn report(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "error:".red().bold());
}

// ————————————————————————————————————————————————————————————————————————————
// DEMO
// ————————————————————————————————————————————————————————————————————————————

fn create_object() -> Vec<u8> {
    let mut phone_numbers = ArrayView::new();
    phone_numbers.append_string("212 555-1234");
    phone_numbers.append_string("646 555-4567");
    let mut o = ObjectView::new();
    o.put_string("name", "John Smith");
    o.put_boolean("retired", false);
    o.put_integer("age", 25);
    o.put_array("phoneNumbers", &phone_numbers);
    o.to_bytes()
}

fn parse_object(bytes: &[u8]) -> Result<(), JsonError> {
    let o = ObjectView::parse(bytes)?;
    println!("Name: {}", o.string("name")?);
    println!("Age: {}", o.integer("age")?);
    println!("Retired: {}", if o.boolean("retired")? { "yes" } else { "no" });
    println!("Phone numbers:");
    let phone_numbers = o.array("phoneNumbers")?;
    for i in 0..phone_numbers.size() {
        println!("{}", phone_numbers.string(i)?);
    }
    Ok(())
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn get_path(root: Node, path: &str, expect: Option<Expect>) -> Result<String> {
    let segs: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segs.split_last() else {
        bail!("empty key path");
    };
    let mut node = root;
    for seg in parents {
        node = node.descend(seg)?;
    }
    match expect {
        Some(expect) => node.read(last, expect),
        None => Ok(serde_json::to_string_pretty(node.raw(last)?)?),
    }
}

fn index(seg: &str) -> Result<usize> {
    seg.parse::<usize>()
        .with_context(|| format!("`{seg}` is not an array position"))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                match entry {
                    Ok(p) => {
                        matched_any = true;
                        out.push(p);
                    }
                    Err(e) => return Err(Box::new(e)),
                }
            }
            if !matched_any {
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
