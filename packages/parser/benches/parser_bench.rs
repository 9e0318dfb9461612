use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindmap_parser::{build, build_forest};

fn generate_outline(breadth: usize, depth: usize) -> String {
    fn push(lines: &mut Vec<String>, prefix: &str, level: usize, breadth: usize, depth: usize) {
        if level == depth {
            return;
        }
        for i in 0..breadth {
            let label = format!("{}{}", prefix, i);
            lines.push(format!("{}{}", "\t".repeat(level + 1), label));
            push(lines, &format!("{}.", label), level + 1, breadth, depth);
        }
    }

    let mut lines = vec!["Root".to_string()];
    push(&mut lines, "Topic ", 0, breadth, depth);
    lines.join("\n")
}

fn parse_small_outline(c: &mut Criterion) {
    let source = "Mind map\n\tTopic 1\n\t\tTopic 1.1\n\t\tTopic 1.2\n\tTopic 2\n\t\tTopic 2.1\n\t\t\tTopic 2.1.1\n\tTopic 3";

    c.bench_function("parse_small_outline", |b| b.iter(|| build(black_box(source))));
}

fn parse_large_outline(c: &mut Criterion) {
    let source = generate_outline(6, 4);

    c.bench_function("parse_large_outline", |b| {
        b.iter(|| build_forest(black_box(&source)))
    });
}

criterion_group!(benches, parse_small_outline, parse_large_outline);
criterion_main!(benches);
