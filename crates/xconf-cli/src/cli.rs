use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, miette};
use xconf_gen::{Generator, GeneratorConfig};
use xconf_xml::{Element, Node};

#[derive(Parser, Debug)]
#[command(name = "xconf")]
#[command(version = "0.1.0")]
#[command(after_help = "Examples:\n\n\
    To convert a file:\n\
    $ xconf --input catalog.xml --output catalog.conf\n\n\
    To type the document interactively:\n\
    $ xconf --output catalog.conf")]
#[command(
    about = "xconf converts XML documents into the xconf configuration language.",
    long_about = None
)]
pub struct Cli {
    #[clap(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Clone, Debug, clap::Args, Default)]
struct InputArgs {
    /// Read the source document from the file; stdin is read when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::Args)]
struct OutputArgs {
    /// Write the rendered configuration to the file, overwriting it
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output_file: PathBuf,

    /// Number of spaces per nesting level in the output
    #[arg(long, default_value_t = 4)]
    indent_width: usize,
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        let root = self.load_root()?;
        let node = Node::build(&root);
        log::debug!("node tree: {node:?}");

        let generator = Generator::new(Some(GeneratorConfig {
            indent_width: self.output.indent_width,
        }));
        let config = generator.generate(&node)?;
        log::debug!("rendered {} bytes", config.len());

        // The whole document is rendered before anything is written, so a
        // failed run never leaves a partial output file behind.
        fs::write(&self.output.output_file, config).into_diagnostic()
    }

    fn load_root(&self) -> miette::Result<Element> {
        match &self.input.input {
            Some(path) => {
                if !path.exists() {
                    return Err(miette!("File not found: {}", path.display()));
                }

                Ok(Element::from_path(path)?)
            }
            None => {
                print!("Enter the input xml: ");
                io::stdout().flush().into_diagnostic()?;

                let mut lines = Vec::new();
                for line in io::stdin().lock().lines() {
                    let line = line.into_diagnostic()?;
                    if line.is_empty() {
                        break;
                    }
                    lines.push(line);
                }

                Ok(lines.join("\n").parse()?)
            }
        }
    }
}
