// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for capability-document assembly in blattwerk-ipp.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use blattwerk_core::formats::DocumentFormatSet;
use blattwerk_core::ppd::PpdDescription;
use blattwerk_core::table::{CapabilityTable, PwgMap, PwgSize};
use blattwerk_ipp::translate;

/// A description with marked defaults, the shape the translator sees after
/// loading.
fn description() -> PpdDescription {
    let mut ppd = PpdDescription::new("Example", "InkJoy 9", "Example InkJoy 9", true, 30);
    ppd.push_option("PageSize", "Letter")
        .push_option("InputSlot", "Tray1")
        .push_option("MediaType", "Plain");
    ppd.push_attr("DefaultResolution", "600x600");
    ppd.mark_defaults();
    ppd
}

/// A catalog with `n` synthetic sizes plus sources, types, and finishings.
fn catalog(n: usize) -> CapabilityTable {
    let sizes = (0..n)
        .map(|i| PwgSize {
            pwg: format!("custom_size-{i}_{i}x{i}mm"),
            ppd: if i == 0 { "Letter".into() } else { format!("Size{i}") },
            width: 21590 + i as i32,
            length: 27940 + i as i32,
            bottom: (i as i32 % 4) * 100,
            left: 635,
            right: 635,
            top: 635,
        })
        .collect();

    CapabilityTable {
        sizes,
        sources: vec![
            PwgMap {
                ppd: "Tray1".into(),
                pwg: "tray-1".into(),
            },
            PwgMap {
                ppd: "ManualFeed".into(),
                pwg: "manual".into(),
            },
        ],
        types: vec![PwgMap {
            ppd: "Plain".into(),
            pwg: "stationery".into(),
        }],
        bins: Vec::new(),
        finishings: vec![4, 5],
        templates: vec!["staple".into(), "punch".into()],
        two_sided_long_edge: true,
    }
}

fn bench_translate(c: &mut Criterion) {
    let ppd = description();

    for n in [8, 64] {
        let table = catalog(n);
        c.bench_function(&format!("translate ({n} sizes)"), |b| {
            b.iter(|| {
                let mut formats = DocumentFormatSet::new();
                let doc = translate(black_box(&ppd), black_box(&table), &mut formats)
                    .expect("catalog is never empty here");
                black_box(doc);
            })
        });
    }
}

fn bench_translate_with_urf(c: &mut Criterion) {
    let ppd = description();
    let table = catalog(64);

    c.bench_function("translate (64 sizes, raster + urf)", |b| {
        b.iter(|| {
            let mut formats = DocumentFormatSet::new();
            formats.push("image/pwg-raster");
            formats.push("image/urf");
            let doc = translate(black_box(&ppd), black_box(&table), &mut formats)
                .expect("catalog is never empty here");
            black_box(doc);
        })
    });
}

criterion_group!(benches, bench_translate, bench_translate_with_urf);
criterion_main!(benches);
