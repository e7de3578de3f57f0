//! propwire binary.
//!
//! Reads ISO-8859-1 property files written by a parent process and shows
//! what a child would decode from them.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use propwire_codec::{AnyClass, ClassRegistry, ClassResolver, TypeTag, decode_payload, encode};
use propwire_properties::format;
use propwire_store::TypedProperties;
use tracing::{debug, info};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "PROPWIRE_LOG";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "propwire")]
#[command(about = "Inspect typed property handoff files")]
struct Args {
	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the raw value stored under KEY
	Get {
		#[arg(value_name = "FILE")]
		file: PathBuf,
		key: String,
	},
	/// Type-decode the value stored under KEY
	Decode {
		#[arg(value_name = "FILE")]
		file: PathBuf,
		key: String,
		/// Only resolve these class names (default: any valid name)
		#[arg(long = "classes", value_name = "NAME", num_args = 1..)]
		classes: Vec<String>,
	},
	/// Print the indexed sequence under PREFIX, one item per line
	List {
		#[arg(value_name = "FILE")]
		file: PathBuf,
		prefix: String,
	},
	/// Print the wire form of PAYLOAD typed as TAG
	Encode {
		#[arg(value_parser = parse_tag)]
		tag: TypeTag,
		payload: String,
	},
	/// Re-serialize every entry as property-file text
	Export {
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
}

fn parse_tag(s: &str) -> std::result::Result<TypeTag, String> {
	s.parse().map_err(|e: propwire_codec::CodecError| {
		let known: Vec<_> = TypeTag::ALL.iter().map(|tag| tag.as_str()).collect();
		format!("{e} (expected one of: {})", known.join(", "))
	})
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_tracing(args.verbose);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	run(&args.command, &mut out)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("propwire=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(true)
		.init();
}

fn load(path: &Path) -> Result<TypedProperties> {
	let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
	let map = format::load_latin1(&bytes).with_context(|| format!("parsing {}", path.display()))?;
	info!(path = %path.display(), entries = map.len(), "loaded properties");
	Ok(TypedProperties::new(map))
}

fn run(command: &Command, out: &mut dyn Write) -> Result<()> {
	match command {
		Command::Get { file, key } => {
			let props = load(file)?;
			let Some(value) = props.property(key) else {
				bail!("no property '{key}' in {}", file.display());
			};
			writeln!(out, "{value}")?;
		}
		Command::Decode { file, key, classes } => {
			let props = load(file)?;
			if props.property(key).is_none() {
				bail!("no property '{key}' in {}", file.display());
			}
			let resolver: Box<dyn ClassResolver> = if classes.is_empty() {
				Box::new(AnyClass)
			} else {
				Box::new(classes.iter().map(String::as_str).collect::<ClassRegistry>())
			};
			let decoded = props
				.type_decoded(key, resolver.as_ref())
				.with_context(|| format!("decoding '{key}'"))?;
			match decoded {
				Some(value) => writeln!(out, "{}\t{value}", value.tag())?,
				None => writeln!(out, "<none>")?,
			}
		}
		Command::List { file, prefix } => {
			let props = load(file)?;
			let items = props.string_list(prefix);
			debug!(prefix = prefix.as_str(), items = items.len(), "read indexed sequence");
			for item in items {
				writeln!(out, "{item}")?;
			}
		}
		Command::Encode { tag, payload } => {
			let value = decode_payload(tag.as_str(), payload, &AnyClass)
				.with_context(|| format!("payload is not a valid {tag}"))?
				.context("tag decoded to no value")?;
			writeln!(out, "{}", encode(&value))?;
		}
		Command::Export { file } => {
			let props = load(file)?;
			out.write_all(format::store(props.properties(), None).as_bytes())?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tempfile::NamedTempFile;

	use super::*;

	fn fixture(contents: &[u8]) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents).unwrap();
		file
	}

	fn run_args(argv: &[&str]) -> Result<String> {
		let args = Args::try_parse_from(argv)?;
		let mut out = Vec::new();
		run(&args.command, &mut out)?;
		Ok(String::from_utf8(out)?)
	}

	#[test]
	fn get_prints_raw_value() {
		let file = fixture(b"name=caf\xe9\n");
		let path = file.path().to_str().unwrap();
		assert_eq!(run_args(&["propwire", "get", path, "name"]).unwrap(), "caf\u{e9}\n");
	}

	#[test]
	fn get_missing_key_fails() {
		let file = fixture(b"a=1\n");
		let path = file.path().to_str().unwrap();
		let err = run_args(&["propwire", "get", path, "b"]).unwrap_err();
		assert!(err.to_string().contains("no property 'b'"));
	}

	#[test]
	fn decode_prints_tag_and_value() {
		let file = fixture(b"n=java.lang.Integer|42\nl=java.util.ArrayList|a, b\nblank=|x\n");
		let path = file.path().to_str().unwrap();
		assert_eq!(run_args(&["propwire", "decode", path, "n"]).unwrap(), "java.lang.Integer\t42\n");
		assert_eq!(run_args(&["propwire", "decode", path, "l"]).unwrap(), "java.util.ArrayList\t[a, b]\n");
		assert_eq!(run_args(&["propwire", "decode", path, "blank"]).unwrap(), "<none>\n");
	}

	#[test]
	fn decode_with_restricted_classes() {
		let file = fixture(b"c=java.lang.Class|org.example.Foo\n");
		let path = file.path().to_str().unwrap();
		assert_eq!(
			run_args(&["propwire", "decode", path, "c", "--classes", "org.example.Foo"]).unwrap(),
			"java.lang.Class\torg.example.Foo\n"
		);
		assert!(run_args(&["propwire", "decode", path, "c", "--classes", "org.example.Bar"]).is_err());
	}

	#[test]
	fn decode_unknown_tag_fails() {
		let file = fixture(b"x=mystery|x\n");
		let path = file.path().to_str().unwrap();
		let err = run_args(&["propwire", "decode", path, "x"]).unwrap_err();
		assert!(format!("{err:#}").contains("unknown parameter type: mystery"));
	}

	#[test]
	fn list_prints_contiguous_items() {
		let file = fixture(b"cp0=a.jar\ncp1=b.jar\ncp3=orphan.jar\n");
		let path = file.path().to_str().unwrap();
		assert_eq!(run_args(&["propwire", "list", path, "cp"]).unwrap(), "a.jar\nb.jar\n");
	}

	#[test]
	fn encode_validates_payload() {
		assert_eq!(run_args(&["propwire", "encode", "java.lang.Boolean", "TRUE"]).unwrap(), "java.lang.Boolean|true\n");
		assert_eq!(run_args(&["propwire", "encode", "[Ljava.io.File;", "[a, b]"]).unwrap(), "[Ljava.io.File;|a,b\n");
		assert!(run_args(&["propwire", "encode", "java.lang.Integer", "nope"]).is_err());
	}

	#[test]
	fn encode_rejects_unknown_tag() {
		assert!(Args::try_parse_from(["propwire", "encode", "mystery", "x"]).is_err());
	}

	#[test]
	fn export_reserializes() {
		let file = fixture(b"# header\nb = 2\na:1\n");
		let path = file.path().to_str().unwrap();
		assert_eq!(run_args(&["propwire", "export", path]).unwrap(), "b=2\na=1\n");
	}

	#[test]
	fn verbose_is_global() {
		let args = Args::try_parse_from(["propwire", "list", "f", "p", "--verbose"]).unwrap();
		assert!(args.verbose);
	}
}
