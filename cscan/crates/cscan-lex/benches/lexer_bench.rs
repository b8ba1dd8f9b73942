//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package cscan-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cscan_lex::{tokenize, Lexer};
use cscan_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    lexer.count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int main() { int x = 10; float y = 20.5; return x; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_decl", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 10;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        /* Iterative fibonacci */
        static int fib(int n) {
            int a = 0;
            int b = 1;
            for (int i = 0; i < n; i = i + 1) {
                int t = a + b;
                a = b;
                b = t;
            }
            return a;
        }

        void report(double ratio) {
            // Print the ratio when it is in range
            if (ratio >= 1.5 && ratio != 2.0) {
                printf("ratio: %f\n", ratio);
            } else {
                printf("out of range");
            }
        }
    "#;
    let large = source.repeat(100);

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("program", |b| {
        b.iter(|| tokenize(black_box(source)))
    });

    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("program_x100", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_strings_and_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("char *s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source = "char *s = \"This is a longer string that contains some text for benchmarking purposes.\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("block_comment", |b| {
        let source = format!("/*{}*/ x", " lorem ipsum\n".repeat(50));
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 123456;")))
    });

    group.bench_function("decimal", |b| {
        b.iter(|| lexer_token_count(black_box("double x = 3.14159;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("int very_long_variable_name = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "int a = 1; int b = 2; int c = 3; int d = 4; int e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_strings_and_comments,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
