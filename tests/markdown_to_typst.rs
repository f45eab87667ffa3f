//! Markdown to Typst conversion tests.

use marktypist::convert_markdown_to_typst;

fn convert(source: &str) -> String {
    convert_markdown_to_typst(source).unwrap()
}

#[test]
fn test_heading() {
    assert_eq!(convert("# 标题1"), "= 标题1");
    assert_eq!(convert("### Deep"), "=== Deep");
}

#[test]
fn test_bold() {
    assert_eq!(convert("这是 **粗体** 文字。"), "这是 *粗体* 文字。");
}

#[test]
fn test_italic_and_bold_italic() {
    assert_eq!(convert("*斜体* and ***both***"), "_斜体_ and *_both_*");
}

#[test]
fn test_inline_code() {
    assert_eq!(convert("Run `cargo doc` now"), "Run `cargo doc` now");
}

#[test]
fn test_unordered_list() {
    assert_eq!(convert("- item 1\n- item 2"), "- item 1\n- item 2");
}

#[test]
fn test_ordered_list() {
    assert_eq!(convert("1. 第一项\n2. 第二项"), "+ 第一项\n+ 第二项");
    assert_eq!(convert("3. c\n4. d"), "+ c\n+ d");
}

#[test]
fn test_nested_list() {
    assert_eq!(convert("- a\n  - b\n- c"), "- a\n  - b\n- c");
}

#[test]
fn test_nested_block_quote() {
    assert_eq!(
        convert("> 第一层引用。\n> > 第二层引用。"),
        "#quote[第一层引用。\n\n#quote[第二层引用。]]"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        convert("[Typst官网](https://typst.app)"),
        "#link(\"https://typst.app\")[Typst官网]"
    );
}

#[test]
fn test_image() {
    assert_eq!(
        convert("![Typst logo](logo.png)"),
        "#image(\"logo.png\", alt: \"Typst logo\")"
    );
}

#[test]
fn test_code_block() {
    assert_eq!(
        convert("```python\nprint('hi')\n```"),
        "```python\nprint('hi')\n```"
    );
}

#[test]
fn test_table() {
    let source = "| 命令 | 描述 |\n\
                  | :--- | :--- |\n\
                  | `git status` | 列出所有新的或修改的文件 |\n\
                  | `git diff` | 显示文件差异 |";
    let expected = "#table(\n  columns: (auto, auto),\n  [*命令*], [*描述*],\n  `git status`, \"列出所有新的或修改的文件\",\n  `git diff`, \"显示文件差异\",\n)";
    assert_eq!(convert(source), expected);
}

#[test]
fn test_table_escapes_string_cells() {
    let source = "| a |\n| - |\n| say \"hi\" |";
    assert_eq!(
        convert(source),
        "#table(\n  columns: (auto),\n  [*a*],\n  \"say \\\"hi\\\"\",\n)"
    );
}

#[test]
fn test_soft_break_is_kept() {
    assert_eq!(convert("line one\nline two"), "line one\nline two");
}

#[test]
fn test_blocks_separated_by_blank_line() {
    assert_eq!(
        convert("# Title\n\nBody text.\n\n- one"),
        "= Title\n\nBody text.\n\n- one"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n  \n"), "");
}

#[test]
fn test_fixture() {
    let source = include_str!("fixtures/basic.md");
    let expected = include_str!("fixtures/basic.typ");
    assert_eq!(convert(source), expected.trim_end());
}
