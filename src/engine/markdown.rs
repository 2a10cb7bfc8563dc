//! Markdown link and heading extraction.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{Event, Options, Parser, Tag};

use super::{Link, MdType, Position};

/// Parser options for a dialect.
pub(crate) fn parser_options(md_type: MdType) -> Options {
    match md_type {
        MdType::Commonmark => Options::empty(),
        MdType::Gfm => {
            let mut options = Options::empty();
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
            options.insert(Options::ENABLE_FOOTNOTES);
            options
        }
    }
}

/// Extract all link and image destinations with their 1-based source lines.
pub(crate) fn extract_links(content: &str, md_type: MdType) -> Vec<Link> {
    let mut links = Vec::new();

    let parser = Parser::new_ext(content, parser_options(md_type));
    for (event, range) in parser.into_offset_iter() {
        let dest = match event {
            Event::Start(Tag::Link(_, dest, _)) => dest,
            Event::Start(Tag::Image(_, dest, _)) => dest,
            _ => continue,
        };

        links.push(Link {
            href: dest.to_string(),
            position: Some(Position {
                line: line_of_offset(content, range.start),
            }),
        });
    }

    links
}

/// Collect the anchor slugs of every heading in the document.
///
/// Duplicate headings get `-1`, `-2`, ... suffixes the way GitHub
/// disambiguates them.
pub(crate) fn heading_slugs(content: &str, md_type: MdType) -> HashSet<String> {
    let mut slugs = HashSet::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    let mut heading_text: Option<String> = None;
    for event in Parser::new_ext(content, parser_options(md_type)) {
        match event {
            Event::Start(Tag::Heading(_, fragment, _)) => {
                if let Some(id) = fragment {
                    slugs.insert(id.to_string());
                }
                heading_text = Some(String::new());
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buffer) = heading_text.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Event::End(Tag::Heading(..)) => {
                if let Some(buffer) = heading_text.take() {
                    let slug = slugify(&buffer);
                    if slug.is_empty() {
                        continue;
                    }
                    let count = seen.entry(slug.clone()).or_insert(0);
                    if *count == 0 {
                        slugs.insert(slug);
                    } else {
                        slugs.insert(format!("{}-{}", slug, count));
                    }
                    *count += 1;
                }
            }
            _ => {}
        }
    }

    slugs
}

/// GitHub-style heading slug: lowercased, spaces become hyphens, everything
/// but alphanumerics, hyphens and underscores is dropped.
pub(crate) fn slugify(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for c in heading.trim().to_lowercase().chars() {
        match c {
            ' ' => slug.push('-'),
            '-' | '_' => slug.push(c),
            c if c.is_alphanumeric() => slug.push(c),
            _ => {}
        }
    }
    slug
}

fn line_of_offset(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
