use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use priority_work_queue::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn filled_queue(size: usize) -> WorkQueue {
    let queue = WorkQueue::initialize(size).expect("Failed to create queue");
    for i in 0..size {
        queue
            .enqueue(WorkItem::new(i as i32, (i % 7) as i32, "/bench"))
            .expect("Failed to enqueue");
    }
    queue
}

fn benchmark_initialize(c: &mut Criterion) {
    c.bench_function("queue_initialize_1024", |b| {
        b.iter(|| {
            let queue = WorkQueue::initialize(black_box(1024)).expect("Failed to create queue");
            queue.shutdown();
        });
    });
}

fn benchmark_enqueue_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_dequeue");

    // Linear scan plus compaction: cost grows with occupancy
    for size in [16usize, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("drain", size), &size, |b, &size| {
            b.iter_batched(
                || filled_queue(size),
                |queue| {
                    while let Some(item) = queue.dequeue_nonblocking() {
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("enqueue_full_rejection", |b| {
        let queue = filled_queue(64);
        b.iter(|| {
            let rejected = queue
                .enqueue(WorkItem::new(-1, 99, "/overflow"))
                .expect_err("queue is full");
            black_box(rejected.into_item());
        });
    });

    group.finish();
}

fn benchmark_producer_consumer(c: &mut Criterion) {
    let mut group = c.benchmark_group("producer_consumer");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("4_producers_4_workers_4000_items", |b| {
        b.iter_batched(
            || Arc::new(WorkQueue::initialize(256).expect("Failed to create queue")),
            |queue| {
                let workers: Vec<_> = (0..4)
                    .map(|_| {
                        let queue = Arc::clone(&queue);
                        std::thread::spawn(move || {
                            let mut served = 0usize;
                            while queue.dequeue_blocking().is_ok() {
                                served += 1;
                            }
                            served
                        })
                    })
                    .collect();

                let producers: Vec<_> = (0..4)
                    .map(|p| {
                        let queue = Arc::clone(&queue);
                        std::thread::spawn(move || {
                            for i in 0..1000 {
                                let mut item = WorkItem::new(p * 1000 + i, i % 10, "/bench");
                                while let Err(rejected) = queue.enqueue(item) {
                                    item = rejected.into_item();
                                    std::thread::yield_now();
                                }
                            }
                        })
                    })
                    .collect();

                for producer in producers {
                    producer.join().expect("Producer panicked");
                }
                while !queue.is_empty() {
                    std::thread::yield_now();
                }
                queue.shutdown();

                let served: usize = workers
                    .into_iter()
                    .map(|w| w.join().expect("Worker panicked"))
                    .sum();
                assert_eq!(served, 4000, "Not all items were served");
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_initialize,
    benchmark_enqueue_dequeue,
    benchmark_producer_consumer
);
criterion_main!(benches);
