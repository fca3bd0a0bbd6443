use criterion::{Criterion, criterion_group, criterion_main};
use genkou_engine::{extract_internal_links, parse_manuscript, tokenize};

fn sample_manuscript() -> String {
    let section = "## 維持費の考え方\n\
輸入車の維持費は **車種と年式** で大きく変わる。詳しくは [保険GUIDE](/guide/insurance) を参照。\n\
{{DCT|デュアルクラッチトランスミッション}}の搭載車は cars/bmw-320i が代表例。\n\
\n\
- 自動車税と重量税\n\
- 任意保険 1)対人 2)対物 3)車両\n\
- 消耗品の交換費用\n\
\n";
    section.repeat(40)
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let manuscript = sample_manuscript();
    let extracted = extract_internal_links(&manuscript);

    group.bench_function("parse_manuscript", |b| {
        b.iter(|| {
            let parsed = parse_manuscript(std::hint::black_box(&manuscript));
            std::hint::black_box(parsed);
        });
    });

    group.bench_function("extract_internal_links", |b| {
        b.iter(|| {
            let extracted = extract_internal_links(std::hint::black_box(&manuscript));
            std::hint::black_box(extracted);
        });
    });

    group.bench_function("tokenize_cleaned_text", |b| {
        b.iter(|| {
            let tokens = tokenize(std::hint::black_box(&extracted.text));
            std::hint::black_box(tokens);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
