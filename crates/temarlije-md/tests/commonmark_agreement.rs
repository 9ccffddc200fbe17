//! Cross-checks against pulldown-cmark on inputs where the subset and
//! CommonMark agree, plus seeded mutations that must still parse cleanly.

use pulldown_cmark::{Event, Options, Parser as MdParser, Tag, TagEnd};
use temarlije_md::{parse, Block, Inline};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Counts {
    headings: u32,
    paragraphs: u32,
    lists: u32,
    list_items: u32,
    bold: u32,
    italic: u32,
}

fn count_inlines(inlines: &[Inline], counts: &mut Counts) {
    for inline in inlines {
        match inline {
            Inline::Text(_) => {}
            Inline::Bold(_) => counts.bold += 1,
            Inline::Italic(_) => counts.italic += 1,
        }
    }
}

fn count_subset(input: &str) -> Counts {
    let mut counts = Counts::default();
    for block in &parse(input).blocks {
        match block {
            Block::Heading(h) => {
                counts.headings += 1;
                count_inlines(&h.content, &mut counts);
            }
            Block::List(l) => {
                counts.lists += 1;
                counts.list_items += l.items.len() as u32;
                for item in &l.items {
                    count_inlines(&item.content, &mut counts);
                }
            }
            Block::Paragraph(p) => {
                counts.paragraphs += 1;
                count_inlines(&p.content, &mut counts);
            }
        }
    }
    counts
}

fn count_markdown(input: &str) -> Counts {
    let mut counts = Counts::default();
    let parser = MdParser::new_ext(input, Options::empty());
    let mut list_depth = 0u32;
    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => counts.headings += 1,
                Tag::Paragraph => {
                    if list_depth == 0 {
                        counts.paragraphs += 1;
                    }
                }
                Tag::List(_) => {
                    counts.lists += 1;
                    list_depth += 1;
                }
                Tag::Item => counts.list_items += 1,
                Tag::Strong => counts.bold += 1,
                Tag::Emphasis => counts.italic += 1,
                _ => {}
            },
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    counts
}

const SHARED_CASES: &[(&str, &str)] = &[
    (
        "study_notes",
        "# Cell Biology\n\nCells are the **basic unit** of life.\n\n- Nucleus\n- Mitochondria\n- Ribosomes\n\nEach part has a *specific* role.",
    ),
    (
        "levels",
        "# One\n## Two\n### Three\n\nBody text.",
    ),
    (
        "separate_lists",
        "- first\n- second\n\n* third\n* fourth",
    ),
    (
        "wrapped_paragraphs",
        "A paragraph that\nwraps over lines.\n\nAnother _short_ one.",
    ),
    (
        "emphasis_mix",
        "Mix **bold**, *italic* and _underscore_ in one line.",
    ),
    (
        "crlf",
        "## Recap\r\n\r\n- point one\r\n- point two\r\n",
    ),
];

#[test]
fn test_shared_subset_agrees_with_commonmark() {
    for (name, input) in SHARED_CASES {
        assert_eq!(
            count_subset(input),
            count_markdown(input),
            "case {} disagrees with CommonMark",
            name
        );
    }
}

#[test]
fn test_deep_heading_diverges_from_commonmark() {
    // Four hashes is a heading in CommonMark but plain text here.
    let input = "#### Deep";
    assert_eq!(count_markdown(input).headings, 1);
    assert_eq!(count_subset(input).headings, 0);
    assert_eq!(count_subset(input).paragraphs, 1);
}

// ============================================================================
// Seeded Mutations
// ============================================================================

struct Lcg {
    state: u64,
}

const SEED: u64 = 0x5eed;
const MAX_MUTATION_STEPS: usize = 4;
const VARIANT_COUNT: usize = 32;

const MUTATIONS: &[&str] = &[
    "drop_blank_line",
    "strip_list_dash",
    "truncate_tail",
    "drop_closing_star",
    "duplicate_marker",
    "to_crlf",
    "indent_line",
];

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn choose(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }
}

fn apply_mutations(mut input: String, rng: &mut Lcg) -> String {
    for _ in 0..MAX_MUTATION_STEPS {
        match MUTATIONS[rng.choose(MUTATIONS.len())] {
            "drop_blank_line" => {
                if let Some(pos) = input.find("\n\n") {
                    input.replace_range(pos..pos + 2, "\n");
                }
            }
            "strip_list_dash" => {
                if let Some(pos) = input.find("- ") {
                    input.replace_range(pos..pos + 2, "");
                }
            }
            "truncate_tail" => {
                let len = input.len();
                if len > 8 {
                    let mut cut = len - rng.choose(len / 4).max(1);
                    while !input.is_char_boundary(cut) {
                        cut -= 1;
                    }
                    input.truncate(cut);
                }
            }
            "drop_closing_star" => {
                if let Some(pos) = input.rfind('*') {
                    input.remove(pos);
                }
            }
            "duplicate_marker" => {
                if let Some(pos) = input.find(['*', '_']) {
                    let marker = input[pos..pos + 1].to_string();
                    input.insert_str(pos, &marker);
                }
            }
            "to_crlf" => {
                input = input.replace("\r\n", "\n").replace('\n', "\r\n");
            }
            "indent_line" => {
                let lines = input.matches('\n').count();
                let target = rng.choose(lines + 1);
                let at = if target == 0 {
                    0
                } else {
                    input
                        .match_indices('\n')
                        .nth(target - 1)
                        .map_or(0, |(i, _)| i + 1)
                };
                input.insert_str(at, "  ");
            }
            _ => {}
        }
    }
    input
}

#[test]
fn test_mutated_variants_parse() {
    let mut rng = Lcg::new(SEED);
    for (name, input) in SHARED_CASES {
        for _ in 0..VARIANT_COUNT {
            let variant = apply_mutations(input.to_string(), &mut rng);
            let doc = parse(&variant);
            for block in &doc.blocks {
                if let Block::List(l) = block {
                    assert!(!l.items.is_empty(), "empty list in {} variant {:?}", name, variant);
                }
                if let Block::Heading(h) = block {
                    assert!((1..=3).contains(&h.level));
                }
            }
            assert_eq!(doc, parse(&variant));
        }
    }
}

#[test]
fn test_crlf_variants_keep_block_counts() {
    for (name, input) in SHARED_CASES {
        let crlf = input.replace("\r\n", "\n").replace('\n', "\r\n");
        assert_eq!(count_subset(input), count_subset(&crlf), "case {}", name);
    }
}
