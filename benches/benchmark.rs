use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tfidf_similarity::{average, DefaultTFIDFEngine, TFIDFModel};

fn window_titles(n: usize) -> Vec<String> {
    let apps = ["Visual Studio Code", "Firefox", "Slack", "Excel", "Terminal"];
    let topics = [
        "compiler error in parser module",
        "quarterly budget forecast",
        "team standup notes",
        "pull request review for storage engine",
        "flight booking confirmation",
    ];
    (0..n)
        .map(|i| format!("{} - {} #{}", topics[i % topics.len()], apps[(i / 3) % apps.len()], i))
        .collect()
}

fn fit_and_transform_benchmark(c: &mut Criterion) {
    let titles = window_titles(2_000);

    c.bench_function("fit", |b| {
        b.iter(|| TFIDFModel::<DefaultTFIDFEngine>::fit(black_box(&titles)));
    });

    let model: TFIDFModel = TFIDFModel::fit(&titles);

    c.bench_function("transform", |b| {
        b.iter(|| model.transform(black_box("compiler error in storage engine")));
    });

    let maps = model.transform_list(&titles[..100]);
    c.bench_function("average", |b| {
        b.iter(|| average(black_box(&maps)));
    });

    c.bench_function("rank", |b| {
        b.iter(|| model.rank(black_box("budget forecast"), &titles[..500]));
    });
}

criterion_group!(benches, fit_and_transform_benchmark);
criterion_main!(benches);
