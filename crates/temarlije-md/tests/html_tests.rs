//! Tests for the HTML renderer

use temarlije_md::html::{render, render_inlines, HeadingWeight};
use temarlije_md::inline::parse_inlines;
use temarlije_md::parse;

#[test]
fn test_render_empty_document() {
    assert_eq!(render(&parse("")), "<div class=\"md\">\n</div>\n");
}

#[test]
fn test_heading_levels_one_and_two_share_weight() {
    assert_eq!(HeadingWeight::for_level(1), HeadingWeight::Major);
    assert_eq!(HeadingWeight::for_level(2), HeadingWeight::Major);
    assert_eq!(HeadingWeight::for_level(3), HeadingWeight::Minor);

    let html = render(&parse("# One\n## Two\n### Three"));
    assert_eq!(
        html,
        "<div class=\"md\">\n<h2>One</h2>\n<h2>Two</h2>\n<h3>Three</h3>\n</div>\n"
    );
}

#[test]
fn test_render_list_and_paragraph() {
    let html = render(&parse("- a\n- **b**\n\nSome *text*\nhere."));
    assert_eq!(
        html,
        concat!(
            "<div class=\"md\">\n",
            "<ul>\n",
            "<li>a</li>\n",
            "<li><strong>b</strong></li>\n",
            "</ul>\n",
            "<p>Some <em>text</em> here.</p>\n",
            "</div>\n"
        )
    );
}

#[test]
fn test_render_escapes_text() {
    let html = render(&parse("1 < 2 & <b>raw</b>"));
    assert!(html.contains("<p>1 &lt; 2 &amp; &lt;b&gt;raw&lt;/b&gt;</p>"));
}

#[test]
fn test_render_escapes_emphasis_interiors() {
    assert_eq!(
        render_inlines(&parse_inlines("**<x>** _a&b_")),
        "<strong>&lt;x&gt;</strong> <em>a&amp;b</em>"
    );
}

#[test]
fn test_render_unmatched_markers_verbatim() {
    assert_eq!(render_inlines(&parse_inlines("3 * 4")), "3 * 4");
    assert_eq!(render_inlines(&parse_inlines("a ** b")), "a ** b");
    assert_eq!(render_inlines(&parse_inlines("x_y")), "x_y");
}

#[test]
fn test_render_lone_star_pairs_with_first_star_of_double() {
    assert_eq!(
        render_inlines(&parse_inlines("3 * 4 ** 5")),
        "3 <em> 4 </em>* 5"
    );
}

#[test]
fn test_render_empty_heading() {
    let html = render(&parse("### "));
    assert!(html.contains("<h3></h3>"));
}
