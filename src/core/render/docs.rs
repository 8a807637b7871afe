//! `TranslationDocs`: per-key documentation with a translation table.
//!
//! Each key gets a JSDoc block holding a one-line preview of all its
//! translations and a Markdown table (`lang` / `translation`), followed by a
//! call signature carrying the key's parameter shape:
//!
//! ```text
//!   /**
//!    * {{count}} items / {{count}} товаров
//!    *
//!    * | lang | translation       |
//!    * | ---- | ----------------- |
//!    * | en   | {{count}} items   |
//!    * | ru   | {{count}} товаров |
//!    */
//!   "cart.items": (params: { count: string | number | Date }) => string;
//! ```

use indexmap::{IndexMap, IndexSet};
use unicode_width::UnicodeWidthStr;

use super::{
    super::index::{KeyDescriptor, TranslationIndex},
    keys::quote,
    params::params_object,
};

const LANG_HEADER: &str = "lang";
const TRANSLATION_HEADER: &str = "translation";
const LANG_MIN_WIDTH: usize = 4;
const TRANSLATION_MIN_WIDTH: usize = 11;

const PREVIEW_SEPARATOR: &str = " / ";

pub(super) fn render_docs(index: &TranslationIndex, preferred_lang_order: &[String]) -> String {
    let mut out = String::from("export interface TranslationDocs {\n");
    for (key, descriptor) in index.iter() {
        out.push_str(&doc_block(key, descriptor, preferred_lang_order));
        out.push_str(&signature(key, descriptor));
    }
    out.push_str("}\n");
    out
}

fn doc_block(key: &str, descriptor: &KeyDescriptor, preferred_lang_order: &[String]) -> String {
    if !descriptor.has_translations() {
        return format!(
            "  /** {} has no discovered translations */\n",
            escape_doc_text(&quote(key))
        );
    }

    let rows: Vec<(String, String)> = ordered_languages(descriptor.texts(), preferred_lang_order)
        .into_iter()
        .map(|lang| {
            let text = descriptor.text(lang).unwrap_or_default();
            (escape_doc_text(lang), escape_doc_text(text))
        })
        .collect();

    let preview = rows
        .iter()
        .map(|(_, text)| text.as_str())
        .collect::<Vec<_>>()
        .join(PREVIEW_SEPARATOR);

    let mut out = String::from("  /**\n");
    out.push_str(&comment_line(&preview));
    out.push_str(&comment_line(""));
    for line in render_table(&rows) {
        out.push_str(&comment_line(&line));
    }
    out.push_str("   */\n");
    out
}

fn comment_line(content: &str) -> String {
    if content.is_empty() {
        "   *\n".to_string()
    } else {
        format!("   * {}\n", content)
    }
}

fn signature(key: &str, descriptor: &KeyDescriptor) -> String {
    match params_object(descriptor) {
        Some(params) => format!("  {}: (params: {}) => string;\n", quote(key), params),
        None => format!("  {}: () => string;\n", quote(key)),
    }
}

/// Order the languages of one key for display.
///
/// Preferred languages that have a translation come first, in preference
/// order, then every other language in the order it was merged. No language
/// is listed twice, even if the preference list repeats it.
pub(super) fn ordered_languages<'a>(
    texts: &'a IndexMap<String, String>,
    preferred_lang_order: &[String],
) -> Vec<&'a str> {
    let mut ordered: IndexSet<&'a str> = IndexSet::with_capacity(texts.len());

    for lang in preferred_lang_order {
        if let Some((known, _)) = texts.get_key_value(lang.as_str()) {
            ordered.insert(known.as_str());
        }
    }
    for lang in texts.keys() {
        ordered.insert(lang.as_str());
    }

    ordered.into_iter().collect()
}

/// Make translation text safe to place inside a JSDoc table.
///
/// Braces are doubled so placeholders are not read as doc directives.
/// Comment terminators, cell separators and line breaks are neutralised.
pub(super) fn escape_doc_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            '|' => out.push_str("\\|"),
            '*' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("*\\/");
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("<br>");
            }
            '\n' => out.push_str("<br>"),
            c => out.push(c),
        }
    }

    out
}

/// Lay out already-escaped `(lang, translation)` rows as an aligned table.
///
/// Column widths are measured in display columns, so wide characters still
/// line up in an editor.
pub(super) fn render_table(rows: &[(String, String)]) -> Vec<String> {
    let lang_width = column_width(
        LANG_HEADER,
        LANG_MIN_WIDTH,
        rows.iter().map(|(lang, _)| lang.as_str()),
    );
    let translation_width = column_width(
        TRANSLATION_HEADER,
        TRANSLATION_MIN_WIDTH,
        rows.iter().map(|(_, text)| text.as_str()),
    );

    let row = |lang: &str, text: &str| {
        format!(
            "| {} | {} |",
            pad(lang, lang_width),
            pad(text, translation_width)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(row(LANG_HEADER, TRANSLATION_HEADER));
    lines.push(row(&"-".repeat(lang_width), &"-".repeat(translation_width)));
    for (lang, text) in rows {
        lines.push(row(lang, text));
    }
    lines
}

fn column_width<'a>(header: &str, min: usize, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(UnicodeWidthStr::width)
        .chain([header.width(), min])
        .max()
        .unwrap_or(min)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
