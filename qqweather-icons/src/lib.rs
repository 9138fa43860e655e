//! Offline icon bundler.
//!
//! Turns a directory of SVG files into Rust source defining
//! `pub static ICONS: &[(&str, &str)]`, sorted by lowercase file stem, so the
//! icons can be compiled straight into a binary with `include!`.
//!
//! Minification only squeezes whitespace between elements. `<text>` elements
//! are copied verbatim, since whitespace inside them is rendered.

use anyhow::{Context, Result};
use regex::Regex;
use std::{
    collections::BTreeMap,
    fmt, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

static XML_PROLOG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").unwrap());
static XML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\b.*?</text\s*>").unwrap());
static BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotUtf8,
    /// Another file already claimed the same lowercase name.
    DuplicateName(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotUtf8 => f.write_str("not UTF-8"),
            SkipReason::DuplicateName(name) => write!(f, "icon name '{name}' already taken"),
        }
    }
}

/// Icons read from a directory, plus the files that could not be used.
#[derive(Debug, Default)]
pub struct IconBundle {
    pub icons: BTreeMap<String, String>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

impl IconBundle {
    /// Add `svg` under `name`; the first file to claim a name keeps it.
    pub fn insert(&mut self, path: PathBuf, name: String, svg: &str) {
        if self.icons.contains_key(&name) {
            self.skipped.push((path, SkipReason::DuplicateName(name)));
        } else {
            self.icons.insert(name, minify_svg(svg));
        }
    }
}

fn squeeze(markup: &str) -> String {
    let out = BETWEEN_TAGS.replace_all(markup, "><");
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Cheap SVG minification: drop the prolog and comments, squeeze whitespace
/// outside `<text>` elements.
pub fn minify_svg(svg: &str) -> String {
    let svg = XML_PROLOG.replace_all(svg, "");
    let svg = XML_COMMENT.replace_all(&svg, "");

    // Text elements are bounded by tags on both sides, so trimming each
    // squeezed chunk matches what `>\s+<` would have removed.
    let mut out = String::with_capacity(svg.len());
    let mut last = 0;
    for text in TEXT_ELEMENT.find_iter(&svg) {
        out.push_str(&squeeze(&svg[last..text.start()]));
        out.push_str(text.as_str());
        last = text.end();
    }
    out.push_str(&squeeze(&svg[last..]));
    out
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Read every top-level `.svg` file in `dir`, keyed by lowercase file stem.
///
/// Files are visited in path order, so on a name clash the first path wins.
pub fn collect_icons(dir: &Path) -> Result<IconBundle> {
    let mut bundle = IconBundle::default();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read icon directory: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_svg(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let raw = fs::read(&path)
            .with_context(|| format!("Failed to read icon: {}", path.display()))?;

        let name = path.file_stem().and_then(|s| s.to_str()).map(str::to_lowercase);
        match (name, String::from_utf8(raw)) {
            (Some(name), Ok(svg)) => bundle.insert(path, name, &svg),
            _ => bundle.skipped.push((path, SkipReason::NotUtf8)),
        }
    }

    Ok(bundle)
}

/// Render the bundle as Rust source.
pub fn render_table(bundle: &IconBundle) -> String {
    let mut out = String::from("// @generated by qqweather-icons. Do not edit.\n\n");
    out.push_str("pub static ICONS: &[(&str, &str)] = &[\n");
    for (name, svg) in &bundle.icons {
        out.push_str(&format!("    ({name:?}, {svg:?}),\n"));
    }
    out.push_str("];\n");
    out
}

/// Collect icons from `src_dir` and write the generated table to `out_file`.
///
/// A missing `src_dir` produces an empty table rather than an error.
pub fn bundle(src_dir: &Path, out_file: &Path) -> Result<IconBundle> {
    let bundle = if src_dir.is_dir() {
        collect_icons(src_dir)?
    } else {
        IconBundle::default()
    };

    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(out_file, render_table(&bundle))
        .with_context(|| format!("Failed to write icon table: {}", out_file.display()))?;

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CLOUDY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- cloud outline -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
    <path d="M20 44 h26 a10 10 0 0 0 0 -20"
          fill="none"/>
</svg>
"#;

    #[test]
    fn minify_strips_prolog_comments_and_whitespace() {
        assert_eq!(
            minify_svg(CLOUDY),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path d="M20 44 h26 a10 10 0 0 0 0 -20" fill="none"/></svg>"#
        );
    }

    #[test]
    fn collect_keys_by_lowercase_stem_and_skips_others() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cloudy-Day.SVG"), CLOUDY).unwrap();
        fs::write(dir.path().join("night.svg"), "<svg>\n  <circle/>\n</svg>").unwrap();
        fs::write(dir.path().join("README.md"), "not an icon").unwrap();
        fs::write(dir.path().join("broken.svg"), [0xff, 0xfe, 0x00]).unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let bundle = collect_icons(dir.path()).unwrap();

        assert_eq!(bundle.icons.keys().collect::<Vec<_>>(), vec!["cloudy-day", "night"]);
        assert_eq!(bundle.icons["night"], "<svg><circle/></svg>");
        assert_eq!(bundle.skipped, vec![(dir.path().join("broken.svg"), SkipReason::NotUtf8)]);
    }

    #[test]
    fn minify_keeps_text_content() {
        let svg = "<svg>\n  <text><tspan>雨</tspan> <tspan>夹雪</tspan></text>\n  \
                   <text xml:space=\"preserve\">a   b</text>\n</svg>";

        assert_eq!(
            minify_svg(svg),
            "<svg><text><tspan>雨</tspan> <tspan>夹雪</tspan></text>\
             <text xml:space=\"preserve\">a   b</text></svg>"
        );
    }

    #[test]
    fn clashing_names_keep_the_first_file() {
        let mut bundle = IconBundle::default();

        bundle.insert(PathBuf::from("icons/Day.svg"), "day".into(), "<svg id=\"first\"/>");
        bundle.insert(PathBuf::from("icons/day.svg"), "day".into(), "<svg id=\"second\"/>");

        assert_eq!(bundle.icons.len(), 1);
        assert_eq!(bundle.icons["day"], "<svg id=\"first\"/>");
        assert_eq!(
            bundle.skipped,
            vec![(PathBuf::from("icons/day.svg"), SkipReason::DuplicateName("day".into()))]
        );
        assert_eq!(bundle.skipped[0].1.to_string(), "icon name 'day' already taken");
    }

    #[test]
    fn rendered_table_is_sorted_and_escaped() {
        let mut bundle = IconBundle::default();
        bundle.icons.insert("night".into(), r#"<svg id="n"/>"#.into());
        bundle.icons.insert("day".into(), r#"<svg id="d"/>"#.into());

        let src = render_table(&bundle);

        let day = src.find("(\"day\"").unwrap();
        let night = src.find("(\"night\"").unwrap();
        assert!(day < night);
        assert!(src.contains(r#"("day", "<svg id=\"d\"/>"),"#));
        assert!(src.starts_with("// @generated"));
    }

    #[test]
    fn bundle_writes_empty_table_for_missing_dir() {
        let out_dir = TempDir::new().unwrap();
        let out = out_dir.path().join("gen").join("icons.rs");

        let bundle = bundle(&out_dir.path().join("missing"), &out).unwrap();

        assert!(bundle.icons.is_empty());
        let src = fs::read_to_string(&out).unwrap();
        assert!(src.contains("pub static ICONS: &[(&str, &str)] = &[\n];"));
    }
}
