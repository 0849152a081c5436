//! Benchmarks for the dashboard render path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ebook::config::DisplayConfig;
use ebook::dashboard::{BusinessType, DashboardController, Filters};
use ebook::fixtures::{Booking, DemoStore};

fn create_store(count: usize) -> DemoStore {
    let staff = vec!["Aziz".to_string(), "Madina".to_string(), "Otabek".to_string()];
    let bookings = (0..count)
        .map(|i| {
            Booking::new(
                i as u32 + 1,
                format!("{:02}:{:02}", 9 + (i / 4) % 10, (i % 4) * 15),
                format!("Client {}", i),
                if i % 2 == 0 { "Male haircut" } else { "Beard trim" },
                staff[i % staff.len()].clone(),
                60000 + (i as u64 % 5) * 10000,
            )
            .status(if i % 7 == 0 { "cancelled" } else { "confirmed" })
            .source("Web")
        })
        .collect();

    DemoStore::new(staff, bookings, Vec::new())
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000] {
        let controller = DashboardController::new(create_store(size), DisplayConfig::default());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("unfiltered_{}", size), |b| {
            let filters = Filters::new();
            b.iter(|| controller.render(black_box(&filters)))
        });

        group.bench_function(format!("query_and_staff_{}", size), |b| {
            let filters = Filters::new().query("BEARD").secondary("Madina");
            b.iter(|| controller.list(black_box(&filters)))
        });
    }

    group.finish();
}

fn bench_switch(c: &mut Criterion) {
    c.bench_function("switch_business", |b| {
        let mut controller = DashboardController::default();
        let filters = Filters::new();
        b.iter(|| {
            controller.select(BusinessType::Restaurant);
            let restaurant = controller.render(black_box(&filters));
            controller.select(BusinessType::Barbershop);
            (restaurant, controller.render(black_box(&filters)))
        })
    });
}

criterion_group!(benches, bench_render, bench_switch);
criterion_main!(benches);
