//! Benchmarks for marktypist conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic documents of growing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic Markdown document with the given number of sections.
fn create_markdown(sections: usize) -> String {
    let mut content = String::new();

    for i in 0..sections {
        content.push_str(&format!("## Section {}\n\n", i + 1));
        content.push_str("Some **bold** text, some *italic* text and `code`.\n");
        content.push_str("A [link](https://typst.app) on a second line.\n\n");
        content.push_str("- first item\n- second item\n  - nested item\n\n");
        content.push_str("> quoted text\n\n");
        content.push_str("| key | value |\n| :-- | --: |\n| a | 1 |\n| b | 2 |\n\n");
    }

    content
}

/// Creates a synthetic Typst document with the given number of sections.
fn create_typst(sections: usize) -> String {
    let mut content = String::new();

    for i in 0..sections {
        content.push_str(&format!("== Section {}\n\n", i + 1));
        content.push_str("Some *bold* text, some _italic_ text\n");
        content.push_str("and *_both_* on a second line.\n\n");
        content.push_str("- first item\n- second _item_\n\n");
    }

    content
}

/// Benchmark Markdown to Typst conversion at various sizes.
fn bench_markdown_to_typst(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_to_typst");

    for sections in [1, 10, 100].iter() {
        let source = create_markdown(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| marktypist::convert_markdown_to_typst(black_box(&source)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Typst to Markdown conversion at various sizes.
fn bench_typst_to_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("typst_to_markdown");

    for sections in [1, 10, 100].iter() {
        let source = create_typst(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| marktypist::convert_typst_to_markdown(black_box(&source)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark tokenization alone.
fn bench_tokenize(c: &mut Criterion) {
    let source = create_markdown(10);
    let options = marktypist::ParseOptions::default();

    c.bench_function("tokenize_10_sections", |b| {
        b.iter(|| marktypist::parser::tokenize(black_box(&source), &options));
    });
}

criterion_group!(
    benches,
    bench_markdown_to_typst,
    bench_typst_to_markdown,
    bench_tokenize,
);
criterion_main!(benches);
