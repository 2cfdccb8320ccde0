//! One-page PDF rendering of a character sheet.
//!
//! The renderer is a pure function from character to bytes. The output
//! carries no timestamps, generated identifiers, or compression, so equal
//! input yields byte-for-byte equal documents.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

use herosheet_domain::{Ability, Character};

// US Letter page, measured in PDF points.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

// Text layout: left-aligned block starting near the top-left corner.
const MARGIN_LEFT: f32 = 72.0;
const FIRST_BASELINE: f32 = 720.0;
const FONT_SIZE: f32 = 14.0;
const LEADING: f32 = 22.0;

/// The six text lines of the sheet, in page order.
pub fn sheet_lines(character: &Character) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + Ability::ALL.len());
    lines.push(format!("Character Name: {}", character.name()));
    for ability in Ability::ALL {
        lines.push(format!(
            "{}: {}",
            ability.label(),
            character.scores().get(ability)
        ));
    }
    lines
}

/// Render the character as a single-page PDF document.
///
/// Total over its inputs: any name renders (characters the base font cannot
/// encode are shown as `?`), and the encoder itself cannot fail.
pub fn render_sheet(character: &Character) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);
    let info_id = Ref::new(6);
    let font_name = Name(b"F1");

    let mut pdf = Pdf::new();
    pdf.document_info(info_id).title(TextStr("Character Sheet"));
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);
    {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(font_name, font_id);
    }
    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    let mut content = Content::new();
    content.begin_text();
    content.set_font(font_name, FONT_SIZE);
    content.next_line(MARGIN_LEFT, FIRST_BASELINE);
    for (index, line) in sheet_lines(character).iter().enumerate() {
        if index > 0 {
            content.next_line(0.0, -LEADING);
        }
        content.show(Str(&encode_text(line)));
    }
    content.end_text();
    pdf.stream(content_id, &content.finish());

    pdf.finish()
}

/// Map a line to bytes the base font can show. Helvetica's standard encoding
/// covers printable ASCII; everything else becomes `?`.
fn encode_text(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use herosheet_domain::AbilityScore;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    /// Scores {15, 15, 14, 10, 8} cost {9, 9, 7, 2, 0} = 27: a balanced sheet.
    fn balanced_character() -> Character {
        let values = [15, 15, 14, 10, 8];
        Ability::ALL
            .into_iter()
            .zip(values)
            .fold(Character::default(), |character, (ability, value)| {
                character.with_score(ability, AbilityScore::new(value).unwrap())
            })
    }

    #[test]
    fn six_lines_in_sheet_order() {
        let lines = sheet_lines(&balanced_character());
        assert_eq!(
            lines,
            vec![
                "Character Name: Hero",
                "Strength: 15",
                "Dexterity: 15",
                "Intelligence: 14",
                "Wisdom: 10",
                "Charisma: 8",
            ]
        );
    }

    #[test]
    fn render_is_byte_deterministic() {
        let character = balanced_character();
        assert_eq!(render_sheet(&character), render_sheet(&character));
    }

    #[test]
    fn rendered_page_contains_every_line() {
        let character = balanced_character();
        let bytes = render_sheet(&character);
        for line in sheet_lines(&character) {
            assert!(
                contains(&bytes, line.as_bytes()),
                "missing line: {line}"
            );
        }
    }

    #[test]
    fn empty_name_renders() {
        let character = Character::new("");
        let bytes = render_sheet(&character);
        assert!(contains(&bytes, b"Character Name: "));
    }

    #[test]
    fn unencodable_characters_become_placeholders() {
        let character = Character::new("Zo\u{eb}");
        let bytes = render_sheet(&character);
        assert!(contains(&bytes, b"Character Name: Zo?"));
    }

    #[test]
    fn output_is_a_single_page_pdf() {
        let bytes = render_sheet(&balanced_character());
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Count 1"));
    }
}
