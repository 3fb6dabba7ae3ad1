use anyhow::{Context, Result};
use clap::Parser;
use md_word_style::{json, Error, Session, SystemClipboard};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render Markdown as Word-ready HTML")]
struct Args {
    /// Markdown file to convert (reads stdin when omitted).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Style set as JSON (defaults when omitted).
    #[arg(long)]
    styles: Option<PathBuf>,

    /// Put the result on the system clipboard instead of printing it.
    #[arg(long)]
    copy: bool,

    /// Print the default style set as JSON and exit.
    #[arg(long)]
    print_default_styles: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.print_default_styles {
        let out = json::styles_to_json(&Default::default())?;
        println!("{out}");
        return Ok(());
    }

    let md = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading stdin")?;
            s
        }
    };

    let mut session = Session::new();
    if let Some(path) = &args.styles {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let styles = json::styles_from_json(&raw)
            .with_context(|| format!("invalid style set in {}", path.display()))?;
        session = Session::with_styles(styles);
    }
    session.set_input(md);

    if args.copy {
        match session.copy_to_word(&mut SystemClipboard::new()) {
            Ok(notice) => eprintln!("{}", notice.message()),
            Err(Error::Clipboard(e)) => {
                eprintln!("{}", e.user_message());
                return Err(e).context("copying to clipboard");
            }
            Err(e) => return Err(e.into()),
        }
        return Ok(());
    }

    let payload = session.render();
    println!("--- text/html ---\n{}", payload.html);
    println!("--- text/plain ---\n{}", payload.text);
    Ok(())
}
