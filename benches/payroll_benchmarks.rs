//! Performance benchmarks for the payroll manager.
//!
//! Covers the single-employee salary calculation and bulk payroll
//! generation over rosters of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_manager::calculation::calculate_salary;
use payroll_manager::models::{Compensation, Employee};
use payroll_manager::payroll::PayrollService;
use payroll_manager::roster::Roster;

/// Builds a roster cycling through all four variants.
fn create_roster(size: usize) -> Roster {
    (0..size)
        .map(|i| {
            let compensation = match i % 4 {
                0 => Compensation::Permanent {
                    basic_pay: Decimal::new(500_000 + i as i64, 2),
                    bonus: Decimal::new(25_000, 2),
                },
                1 => Compensation::Contract {
                    hourly_rate: Decimal::new(4_250, 2),
                    hours_worked: 38,
                },
                2 => Compensation::Intern,
                _ => Compensation::Freelancer {
                    project_rate: Decimal::new(300_000, 2),
                },
            };
            Employee::new(
                format!("Employee {}", i),
                format!("emp{:05}", i),
                "bench",
                compensation,
            )
        })
        .collect()
}

fn bench_single_salary(c: &mut Criterion) {
    let compensation = Compensation::Permanent {
        basic_pay: Decimal::from(1_000_000),
        bonus: Decimal::from(30_000),
    };

    c.bench_function("calculate_salary_permanent", |b| {
        b.iter(|| calculate_salary(black_box(&compensation)))
    });
}

fn bench_generate_payroll(c: &mut Criterion) {
    let service = PayrollService::new();
    let mut group = c.benchmark_group("generate_payroll");

    for size in [10usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| service.generate_payroll(black_box(roster)))
        });
    }

    group.finish();
}

fn bench_authenticate(c: &mut Criterion) {
    let service = PayrollService::new();
    let roster = create_roster(1000);

    c.bench_function("authenticate_last_of_1000", |b| {
        b.iter(|| service.authenticate_and_show_salary(black_box("emp00999"), "bench", &roster))
    });
}

criterion_group!(
    benches,
    bench_single_salary,
    bench_generate_payroll,
    bench_authenticate
);
criterion_main!(benches);
