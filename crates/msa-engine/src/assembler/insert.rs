//! Insertion-point discovery and client section injection
//!
//! The client/preparer block lands in the lower portion of page 1. The anchor
//! paragraph is discovered by a tiered strategy chain; template wording
//! drifts between revisions, so a plausible insertion beats aborting the
//! generation. Insertion itself is positional and therefore unaffected by the
//! later text-substitution passes.

use tracing::{debug, info};

use crate::document::{Block, Paragraph, TemplateDocument};
use crate::types::{ClientProfile, PreparerProfile};

/// Section heading that marks the preferred anchor.
const SECTION_HEADING: &str = "Our Core Values";
/// Introductory phrases for the secondary anchor, matched case-insensitively.
const INTRO_PHRASES: &[&str] = &["journey to it maturity", "it maturity"];
const HEADING_SCAN_LIMIT: usize = 50;
const INTRO_SCAN_LIMIT: usize = 20;
/// Last-resort anchor, past the main introduction content.
const FALLBACK_ANCHOR: usize = 7;

/// Paragraph spacing in twips.
const SPACING_NONE: u32 = 0;
const SPACING_AFTER_LABEL: u32 = 60;
const SPACING_AFTER_SECTION: u32 = 120;

/// Two-character line-break marker carried through from form input.
const ADDRESS_BREAK_MARKER: &str = "\\n";
/// Addresses longer than this with a comma get folded onto two lines.
const ADDRESS_COMMA_FOLD_LEN: usize = 50;

/// One tier of the anchor fallback chain.
pub(crate) struct AnchorStrategy {
    pub name: &'static str,
    pub locate: fn(&TemplateDocument) -> Option<usize>,
}

/// Tried in order; the fixed fallback applies when none match.
pub(crate) const ANCHOR_STRATEGIES: &[AnchorStrategy] = &[
    AnchorStrategy {
        name: "section heading",
        locate: anchor_by_section_heading,
    },
    AnchorStrategy {
        name: "introductory phrase",
        locate: anchor_by_intro_phrase,
    },
];

fn anchor_by_section_heading(document: &TemplateDocument) -> Option<usize> {
    document.find_paragraph_by_predicate(0..HEADING_SCAN_LIMIT, |paragraph| {
        paragraph.text().trim() == SECTION_HEADING
    })
}

/// Lands one past the matching paragraph so the block follows the intro.
fn anchor_by_intro_phrase(document: &TemplateDocument) -> Option<usize> {
    document
        .find_paragraph_by_predicate(0..INTRO_SCAN_LIMIT, |paragraph| {
            let text = paragraph.text().to_lowercase();
            INTRO_PHRASES.iter().any(|phrase| text.contains(phrase))
        })
        .map(|index| index + 1)
}

/// Paragraph index the client block is inserted after.
pub(crate) fn locate_anchor(document: &TemplateDocument) -> usize {
    for strategy in ANCHOR_STRATEGIES {
        if let Some(index) = (strategy.locate)(document) {
            debug!("insertion anchor via {}: paragraph {}", strategy.name, index);
            return index;
        }
    }
    debug!("insertion anchor via fixed fallback: paragraph {FALLBACK_ANCHOR}");
    FALLBACK_ANCHOR
}

/// Insert the Prepared For / Prepared By block after the located anchor.
pub(crate) fn insert_client_block(
    document: &mut TemplateDocument,
    client: &ClientProfile,
    preparer: &PreparerProfile,
) {
    let anchor = locate_anchor(document);
    info!("inserting client sections at paragraph index {anchor}");

    let blocks = client_block(client, preparer);
    let count = blocks.len();
    let mut cursor = document.cursor_after_paragraph(anchor);
    for block in blocks {
        cursor.insert(block);
    }
    info!("added {count} client information paragraphs");
}

/// The full inserted sequence: spacers, Prepared For section, Prepared By
/// section. Every paragraph is fully formed with explicit spacing and run
/// formatting; nothing reuses existing template styles.
pub(crate) fn client_block(client: &ClientProfile, preparer: &PreparerProfile) -> Vec<Block> {
    let mut paragraphs = vec![Paragraph::spacer(), Paragraph::spacer()];

    paragraphs.push(Paragraph::bold_label("Prepared For:").with_spacing_after(SPACING_AFTER_LABEL));
    paragraphs.push(Paragraph::plain(client.name.trim()).with_spacing_after(SPACING_NONE));
    paragraphs.push(Paragraph::plain(client.email.trim()).with_spacing_after(SPACING_NONE));
    for line in split_address_lines(&client.address) {
        paragraphs.push(Paragraph::plain(line).with_spacing_after(SPACING_NONE));
    }
    // Phone line closes the section even when blank.
    paragraphs.push(Paragraph::plain(client.phone.trim()).with_spacing_after(SPACING_AFTER_SECTION));

    paragraphs.push(Paragraph::bold_label("Prepared By:").with_spacing_after(SPACING_AFTER_LABEL));
    paragraphs.push(Paragraph::plain(preparer.name()).with_spacing_after(SPACING_NONE));
    paragraphs.push(Paragraph::plain(preparer.email()).with_spacing_after(SPACING_NONE));
    paragraphs.push(Paragraph::plain("").with_spacing_after(SPACING_AFTER_SECTION));

    paragraphs.into_iter().map(Block::Paragraph).collect()
}

/// Split an address into display lines.
///
/// Explicit line-break markers win (the literal two-character `\n` sequence
/// from form input, or a real newline). Otherwise a long address containing a
/// comma folds into the text before the first comma plus the joined
/// remainder. Anything else stays on one line. Blank segments are dropped.
pub(crate) fn split_address_lines(address: &str) -> Vec<String> {
    let address = address.trim();

    let segments: Vec<String> = if address.contains(ADDRESS_BREAK_MARKER) {
        address
            .split(ADDRESS_BREAK_MARKER)
            .map(str::to_string)
            .collect()
    } else if address.contains('\n') {
        address.lines().map(str::to_string).collect()
    } else if address.len() > ADDRESS_COMMA_FOLD_LEN && address.contains(',') {
        match address.split_once(',') {
            Some((street, remainder)) => vec![street.to_string(), remainder.to_string()],
            None => vec![address.to_string()],
        }
    } else {
        vec![address.to_string()]
    };

    segments
        .into_iter()
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}
