use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use redline::load_document;

#[derive(Parser)]
#[command(
    name = "redline",
    version,
    about = "Extract tracked changes from .docx files"
)]
struct Cli {
    /// Path to the .docx file to inspect
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let document = load_document(&cli.file)?;

    if document.changes.is_empty() {
        println!("No tracked changes found in {}", document.title);
        return Ok(());
    }

    for change in &document.changes {
        println!("Paragraph {}", change.index);
        println!("[before]");
        println!("{}", change.before);
        println!("[after]");
        println!("{}", change.after);
        println!("-------------------------------");
    }

    Ok(())
}
