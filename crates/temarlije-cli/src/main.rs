//! tmd - inspect and render temarlije markdown and generation output
//!
//! Usage:
//!   tmd <COMMAND> [OPTIONS] <FILE>
//!
//! Commands:
//!   parse     Parse and display document structure
//!   render    Render a document to HTML
//!   stats     Show document statistics
//!   response  Show one tab of a generation response
//!
//! FILE may be `-` to read from stdin. Set `RUST_LOG=debug` for diagnostics.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use temarlije_md::ast::{Delimiter, ListItem};
use temarlije_md::{html, parse, Block, Document, Inline};

#[derive(Debug, Parser)]
#[command(name = "tmd", version, about = "Temarlije markdown parser and renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse and display document structure
    Parse {
        /// Output the tree as JSON
        #[arg(short, long)]
        json: bool,
        /// Show every block with its spans and inline content
        #[arg(short, long)]
        verbose: bool,
        file: PathBuf,
    },
    /// Render a document to HTML
    Render { file: PathBuf },
    /// Show document statistics
    Stats { file: PathBuf },
    /// Show one tab of a generation response JSON file
    Response {
        /// Tab to show (defaults to the first tab for the learning style)
        #[arg(short, long, value_enum)]
        tab: Option<Tab>,
        /// Learning style the response was generated for
        #[arg(short, long, value_enum, default_value_t = Style::Visual)]
        style: Style,
        /// Render the elaboration as HTML instead of markdown source
        #[arg(long)]
        html: bool,
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    log::debug!("dispatching {:?}", command);

    match command {
        Command::Parse {
            json,
            verbose,
            file,
        } => {
            let input = read_input(&file)?;
            cmd_parse(&input, json, verbose)
        }
        Command::Render { file } => {
            let input = read_input(&file)?;
            print!("{}", html::render(&parse(&input)));
            Ok(())
        }
        Command::Stats { file } => {
            let input = read_input(&file)?;
            cmd_stats(&input);
            Ok(())
        }
        Command::Response {
            tab,
            style,
            html,
            file,
        } => {
            let input = read_input(&file)?;
            let response: GenerateResponse = serde_json::from_str(&input)
                .with_context(|| format!("invalid response JSON in '{}'", file.display()))?;
            let tab = tab.unwrap_or_else(|| style.default_tab());
            log::debug!("showing {:?} tab for {:?} style", tab, style);
            print!("{}", show_tab(&response, tab, html));
            Ok(())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        log::debug!("read {} bytes from stdin", input.len());
        return Ok(input);
    }

    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    log::debug!("read {} bytes from {}", input.len(), path.display());
    Ok(input)
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(input: &str, json: bool, verbose: bool) -> Result<()> {
    let doc = parse(input);

    if json {
        let json_doc = convert_document(&doc);
        println!(
            "{}",
            serde_json::to_string_pretty(&json_doc).context("failed to serialize document")?
        );
    } else if verbose {
        print_document_verbose(&doc);
    } else {
        print_document_summary(&doc);
    }

    Ok(())
}

fn print_document_summary(doc: &Document) {
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== Document ===");
    println!("Span: {}..{}", doc.span.start, doc.span.end);

    for (i, block) in doc.blocks.iter().enumerate() {
        let span = block.span();
        println!();
        println!("[{}] {} @ {}..{}", i + 1, describe_block(block), span.start, span.end);

        match block {
            Block::Heading(h) => println!("  Content: {}", format_inlines(&h.content)),
            Block::Paragraph(p) => println!("  Content: {}", format_inlines(&p.content)),
            Block::List(l) => {
                for (n, ListItem { content, span }) in l.items.iter().enumerate() {
                    println!(
                        "  Item {} @ {}..{}: {}",
                        n + 1,
                        span.start,
                        span.end,
                        format_inlines(content)
                    );
                }
            }
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::List(l) => format!("List ({} items)", l.items.len()),
        Block::Paragraph(p) => format!("Paragraph ({} spans)", p.content.len()),
    }
}

fn format_inlines(inlines: &[Inline]) -> String {
    inlines.iter().map(|i| i.source_text()).collect()
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentStats {
    total_blocks: usize,
    headings: [usize; 3],
    lists: usize,
    list_items: usize,
    paragraphs: usize,
    text_spans: usize,
    bold_spans: usize,
    italic_spans: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.blocks.len(),
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in &doc.blocks {
            match block {
                Block::Heading(h) => {
                    let slot = usize::from(h.level.clamp(1, 3)) - 1;
                    stats.headings[slot] += 1;
                    stats.count_inlines(&h.content);
                }
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                    for item in &l.items {
                        stats.count_inlines(&item.content);
                    }
                }
                Block::Paragraph(p) => {
                    stats.paragraphs += 1;
                    stats.count_inlines(&p.content);
                }
            }
        }

        stats
    }

    fn count_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            match inline {
                Inline::Text(_) => self.text_spans += 1,
                Inline::Bold(_) => self.bold_spans += 1,
                Inline::Italic(_) => self.italic_spans += 1,
            }
        }
    }
}

fn cmd_stats(input: &str) {
    let doc = parse(input);
    let stats = DocumentStats::from_document(&doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!(
        "  Headings:       {} (h1 {}, h2 {}, h3 {})",
        stats.headings.iter().sum::<usize>(),
        stats.headings[0],
        stats.headings[1],
        stats.headings[2]
    );
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!();
    println!("Inline:");
    println!("  Text spans:     {}", stats.text_spans);
    println!("  Bold spans:     {}", stats.bold_spans);
    println!("  Italic spans:   {}", stats.italic_spans);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

// =============================================================================
// Response Command
// =============================================================================

/// Output of the generation service.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    flashcards: Vec<Flashcard>,
    summary: Vec<String>,
    elaboration: String,
}

#[derive(Debug, Deserialize)]
struct Flashcard {
    q: String,
    a: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tab {
    Summary,
    Flashcards,
    Elaboration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    Visual,
    Reading,
    Kinesthetic,
    Audio,
}

impl Style {
    /// Tabs in display order for this learning style.
    fn tab_order(self) -> [Tab; 3] {
        match self {
            Style::Reading => [Tab::Elaboration, Tab::Summary, Tab::Flashcards],
            Style::Visual | Style::Kinesthetic | Style::Audio => {
                [Tab::Summary, Tab::Flashcards, Tab::Elaboration]
            }
        }
    }

    fn default_tab(self) -> Tab {
        self.tab_order()[0]
    }
}

fn show_tab(response: &GenerateResponse, tab: Tab, as_html: bool) -> String {
    match tab {
        Tab::Summary => summary_markdown(&response.summary),
        Tab::Flashcards => format_flashcards(&response.flashcards),
        Tab::Elaboration if as_html => html::render(&parse(&response.elaboration)),
        Tab::Elaboration => {
            let mut out = response.elaboration.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
    }
}

/// Bullets as a markdown list, one `- ` line per bullet.
fn summary_markdown(bullets: &[String]) -> String {
    bullets.iter().map(|b| format!("- {}\n", b)).collect()
}

fn format_flashcards(cards: &[Flashcard]) -> String {
    if cards.is_empty() {
        return "No flashcards.\n".to_string();
    }

    let total = cards.len();
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} / {}\n", i + 1, total));
        out.push_str(&format!("Q: {}\n", card.q));
        out.push_str(&format!("A: {}\n", card.a));
    }
    out
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    List {
        items: Vec<Vec<JsonInline<'a>>>,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text { content: &'a str },
    Bold { content: &'a str },
    Italic { content: &'a str, delimiter: &'static str },
}

fn convert_document<'a>(doc: &'a Document) -> JsonDocument<'a> {
    JsonDocument {
        blocks: doc.blocks.iter().map(convert_block).collect(),
    }
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            content: convert_inlines(&h.content),
        },
        Block::List(l) => JsonBlock::List {
            items: l
                .items
                .iter()
                .map(|item| convert_inlines(&item.content))
                .collect(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: convert_inlines(&p.content),
        },
    }
}

fn convert_inlines<'a>(inlines: &'a [Inline]) -> Vec<JsonInline<'a>> {
    inlines.iter().map(convert_inline).collect()
}

fn convert_inline<'a>(inline: &'a Inline) -> JsonInline<'a> {
    match inline {
        Inline::Text(t) => JsonInline::Text {
            content: &t.content,
        },
        Inline::Bold(b) => JsonInline::Bold {
            content: &b.content,
        },
        Inline::Italic(i) => JsonInline::Italic {
            content: &i.content,
            delimiter: match i.delimiter {
                Delimiter::Asterisk => "asterisk",
                Delimiter::Underscore => "underscore",
            },
        },
    }
}
