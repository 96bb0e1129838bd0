use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use class_include::{ClassIncludeProcessor, GenerateOptions};

/// Scan header files and generate one forwarding include per exported class
#[derive(Parser, Debug)]
#[command(name = "make-classinclude")]
#[command(version)]
#[command(about = "Generate class-name include files for QWT_EXPORT types and templates")]
struct Cli {
    /// Directory of header files to scan
    #[arg(long, value_name = "DIR")]
    scan_dir: PathBuf,

    /// Directory to write the generated include files to
    #[arg(long, value_name = "DIR")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();
    let processor = ClassIncludeProcessor::new(GenerateOptions::new(&cli.scan_dir, &cli.output_dir));

    let stats = processor
        .run()
        .with_context(|| format!("Failed to generate includes into {}", cli.output_dir.display()))?;

    if stats.headers_processed > 0 {
        println!("\n{stats}");
    }
    Ok(())
}
