use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use query_recipes::processing::{get_all_orders, get_order_summary_by_category};
use query_recipes::sample::generate_customers;
use query_recipes::types::Order;

fn bench_flatten(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut group = c.benchmark_group("flatten");
    for count in [100usize, 1_000, 10_000] {
        let customers = generate_customers(count, 123, now);

        group.bench_with_input(BenchmarkId::new("nested_loops", count), &customers, |b, customers| {
            b.iter(|| {
                let mut out: Vec<Order> = Vec::new();
                for customer in customers {
                    for order in &customer.orders {
                        out.push(order.clone());
                    }
                }
                black_box(out)
            })
        });

        group.bench_with_input(BenchmarkId::new("get_all_orders", count), &customers, |b, customers| {
            b.iter(|| black_box(get_all_orders(black_box(customers))))
        });
    }
    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let orders = get_all_orders(&generate_customers(10_000, 7, now));

    c.bench_function("summary_by_category/10000_customers", |b| {
        b.iter(|| black_box(get_order_summary_by_category(black_box(&orders))))
    });
}

criterion_group!(benches, bench_flatten, bench_group_by);
criterion_main!(benches);
