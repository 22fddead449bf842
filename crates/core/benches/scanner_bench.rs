//! Benchmarks for PostScript text scanning.
//!
//! Benchmark groups:
//! - `ps_tokenize`: raw `PsLexer` throughput at various scales
//! - `ps_token_types`: isolated numbers, literal strings and hex strings
//! - `ps_extract`: full show-operator extraction on page-shaped programs

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pstext_core::pslexer::PsLexer;
use pstext_core::psshow::extract_text;

// =============================================================================
// Data Generation
// =============================================================================

/// Generate a PostScript program with N tokens typical of a text page.
fn generate_page_tokens(n: usize) -> String {
    let templates: &[&str] = &[
        "/Helvetica ",
        "findfont ",
        "12 ",
        "scalefont ",
        "setfont ",
        "72 ",
        "700 ",
        "moveto ",
        "(Hello World) ",
        "show ",
        "0 0 32 ",
        "(wide text) ",
        "widthshow ",
        "<48454C4C4F> ",
        "show ",
        "[1 0 0 1 0 0] ",
        "concat ",
        "% page comment\n",
    ];

    let mut data = String::with_capacity(n * 12);
    for i in 0..n {
        data.push_str(templates[i % templates.len()]);
    }
    data
}

/// Generate numeric tokens in every accepted notation.
fn generate_number_tokens(n: usize) -> String {
    let mut data = String::with_capacity(n * 8);
    for i in 0..n {
        let value = match i % 6 {
            0 => format!("{} ", i % 1000),
            1 => format!("-{}.{} ", i % 50, (i * 3) % 100),
            2 => format!(".{} ", (i % 99) + 1),
            3 => format!("{}e{} ", i % 10, i % 7),
            4 => format!("{}.5E-{} ", i % 10, i % 5 + 1),
            _ => format!("16#{:X} ", i % 4096),
        };
        data.push_str(&value);
    }
    data
}

/// Generate literal string tokens with escapes and nesting.
fn generate_string_tokens(n: usize) -> String {
    let strings: &[&str] = &[
        "(Hello) ",
        "(Line 1\\nLine 2) ",
        "(Nested (parens) here) ",
        "(Octal\\101\\102\\103) ",
        "(Escaped \\(paren\\)) ",
        "(Continued\\\nline) ",
        "() ",
    ];
    let mut data = String::with_capacity(n * 20);
    for i in 0..n {
        data.push_str(strings[i % strings.len()]);
    }
    data
}

/// Generate hex string tokens.
fn generate_hex_string_tokens(n: usize) -> String {
    let hex_strings: &[&str] = &[
        "<48454C4C4F> ",
        "<576F726C64> ",
        "<0123456789ABCDEF> ",
        "<4 8 4 5 4 C> ",
        "<41424> ",
        "<> ",
    ];
    let mut data = String::with_capacity(n * 16);
    for i in 0..n {
        data.push_str(hex_strings[i % hex_strings.len()]);
    }
    data
}

fn count_tokens(data: &str) -> usize {
    PsLexer::new(data).count()
}

// =============================================================================
// Benchmark Groups
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps_tokenize");

    for target_tokens in [10_000usize, 100_000, 1_000_000] {
        let data = generate_page_tokens(target_tokens);
        let actual_tokens = count_tokens(&data);

        group.bench_with_input(BenchmarkId::new("page", actual_tokens), &data, |b, data| {
            b.iter(|| {
                let mut count = 0usize;
                for token in PsLexer::new(black_box(data)) {
                    black_box(token);
                    count += 1;
                }
                count
            })
        });
    }

    group.finish();
}

fn bench_token_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps_token_types");
    let n = 100_000;

    let inputs = [
        ("numbers", generate_number_tokens(n)),
        ("strings", generate_string_tokens(n)),
        ("hex_strings", generate_hex_string_tokens(n)),
    ];

    for (name, data) in &inputs {
        let actual = count_tokens(data);
        group.bench_with_input(BenchmarkId::new(*name, actual), data, |b, data| {
            b.iter(|| {
                for token in PsLexer::new(black_box(data)) {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps_extract");

    for target_tokens in [10_000usize, 100_000] {
        let data = generate_page_tokens(target_tokens);
        group.bench_with_input(BenchmarkId::new("page", target_tokens), &data, |b, data| {
            b.iter(|| extract_text(black_box(data)).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_token_types, bench_extract);
criterion_main!(benches);
