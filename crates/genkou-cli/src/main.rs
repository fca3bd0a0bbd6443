use anyhow::{Context, Result};
use genkou_config::Config;
use genkou_engine::{
    Block, ContentSnapshot, InlineToken, LinkIndexService, extract_internal_links, io,
    parse_manuscript,
};
use relative_path::RelativePath;
use std::{env, fs, path::Path, process};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => inspect_content_dir(),
        2 => {
            let service = LinkIndexService::new(snapshot_near(Path::new(&args[1])));
            let text = fs::read_to_string(&args[1])
                .with_context(|| format!("failed to read manuscript {}", args[1]))?;
            inspect_manuscript(&args[1], &text, &service);
            Ok(())
        }
        _ => {
            eprintln!("Usage: genkou-cli [MANUSCRIPT.md]");
            eprintln!("Without an argument, scans the configured content directory.");
            process::exit(2);
        }
    }
}

/// Scans the configured content directory and prints a summary per
/// manuscript.
fn inspect_content_dir() -> Result<()> {
    let config = Config::load()
        .context("failed to load config")?
        .with_context(|| {
            format!(
                "no config found; create {} with a content_path entry",
                Config::config_path().display()
            )
        })?;
    io::validate_content_dir(&config.content_path)?;

    let service = LinkIndexService::new(load_snapshot(&config.content_snapshot_path()));
    log::info!(
        "inspecting manuscripts under {}",
        config.content_path.display()
    );

    for path in io::scan_manuscripts(&config.content_path)? {
        let rel = path.strip_prefix(&config.content_path).unwrap_or(&path);
        let rel_str = rel.to_string_lossy().into_owned();
        let text = io::read_manuscript(RelativePath::new(&rel_str), &config.content_path)?;

        println!("━━━ {rel_str}");
        inspect_manuscript(&rel_str, &text, &service);
    }
    Ok(())
}

/// Parses one manuscript and prints its outline, blocks and link cards.
fn inspect_manuscript(name: &str, text: &str, service: &LinkIndexService) {
    let parsed = parse_manuscript(text);

    if !parsed.headings.is_empty() {
        println!("目次:");
        for heading in &parsed.headings {
            let indent = if heading.level == 3 { "    " } else { "  " };
            println!("{indent}{} [{}]", heading.text, heading.id);
        }
        println!();
    }

    let mut hrefs: Vec<String> = Vec::new();
    for block in &parsed.blocks {
        match block {
            Block::Heading(h) => {
                let marker = if h.level == 3 { "###" } else { "##" };
                println!("{marker} {}", h.text);
            }
            Block::Paragraph { text } => {
                let extracted = extract_internal_links(text);
                println!("{}", render_tokens(&genkou_engine::tokenize(&extracted.text)));
                collect_hrefs(&mut hrefs, extracted.internal_hrefs);
            }
            Block::List { items } => {
                for item in items {
                    let extracted = extract_internal_links(item);
                    println!(
                        "  ・{}",
                        render_tokens(&genkou_engine::tokenize(&extracted.text))
                    );
                    collect_hrefs(&mut hrefs, extracted.internal_hrefs);
                }
            }
        }
    }

    if hrefs.is_empty() {
        log::info!("{name}: no internal links");
    } else {
        println!();
        println!("関連リンクカード:");
        for href in &hrefs {
            println!("  {} → {}", href, service.card_title(href));
        }
    }
    println!();
}

fn collect_hrefs(into: &mut Vec<String>, found: Vec<String>) {
    for href in found {
        if !into.contains(&href) {
            into.push(href);
        }
    }
}

/// Plain-text preview of a token sequence.
fn render_tokens(tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            InlineToken::Text(value) => out.push_str(value),
            InlineToken::Bold(children) => {
                out.push('【');
                out.push_str(&render_tokens(children));
                out.push('】');
            }
            InlineToken::Link { label, href } if href.starts_with('/') => {
                // Internal links surface as cards, never inline anchors.
                out.push_str(label);
            }
            InlineToken::Link { label, href } => {
                out.push_str(label);
                out.push_str(" <");
                out.push_str(href);
                out.push('>');
            }
            InlineToken::Tooltip { term, tip } => {
                out.push_str(term);
                out.push('（');
                out.push_str(tip);
                out.push('）');
            }
        }
    }
    out
}

/// Loads the content snapshot next to a standalone manuscript, if any.
fn snapshot_near(manuscript: &Path) -> ContentSnapshot {
    match manuscript.parent() {
        Some(dir) => load_snapshot(&dir.join("content.toml")),
        None => ContentSnapshot::default(),
    }
}

/// Deserializes `content.toml` when present; a missing or broken snapshot
/// degrades to an empty one with generic card labels.
fn load_snapshot(path: &Path) -> ContentSnapshot {
    match fs::read_to_string(path) {
        Ok(text) => match toml::from_str(&text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("ignoring unparsable snapshot {}: {e}", path.display());
                ContentSnapshot::default()
            }
        },
        Err(_) => ContentSnapshot::default(),
    }
}
