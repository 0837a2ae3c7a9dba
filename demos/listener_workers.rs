//! Listener and worker pool example
//!
//! A listener thread accepts simulated connections and enqueues them; a fixed
//! pool of workers serves them highest priority first. When the queue is full
//! the listener answers the connection itself, as a proxy would with a 503.
//!
//! Run with: RUST_LOG=debug cargo run --example listener_workers

use priority_work_queue::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const WORKERS: usize = 3;
const CONNECTIONS: i32 = 40;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Priority Work Queue - Listener/Workers Example ===\n");

    let config = QueueConfig::from_json(r#"{ "capacity": 8, "name": "proxy" }"#)?;
    let queue = Arc::new(WorkQueue::with_config(config)?);
    println!("1. Queue '{}' with {} slots", queue.name(), queue.capacity());

    let served = Arc::new(AtomicUsize::new(0));

    println!("\n2. Starting {} workers", WORKERS);
    let workers: Vec<_> = (0..WORKERS)
        .map(|id| {
            let queue = Arc::clone(&queue);
            let served = Arc::clone(&served);
            thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || {
                    while let Ok(item) = queue.dequeue_blocking() {
                        // The delay hint is ours to interpret, not the queue's
                        thread::sleep(Duration::from_millis(5 + item.delay as u64));
                        println!(
                            "  worker-{} served conn {} (priority {}) {}",
                            id, item.connection, item.priority, item.resource_path
                        );
                        served.fetch_add(1, Ordering::Relaxed);
                    }
                })
                .expect("Failed to spawn worker")
        })
        .collect();

    println!("\n3. Accepting {} connections", CONNECTIONS);
    let mut refused = 0;
    for connection in 0..CONNECTIONS {
        let priority = if connection % 10 == 0 { 9 } else { connection % 3 };
        let item = WorkItem::new(connection, priority, format!("/resource/{}", connection))
            .with_delay((connection % 4) as u32);

        match queue.enqueue(item) {
            Ok(()) => {}
            Err(rejected) if rejected.is_full() => {
                let item = rejected.into_item();
                println!("  conn {} refused: queue full (503)", item.connection);
                refused += 1;
            }
            Err(rejected) => return Err(rejected.into()),
        }
        thread::sleep(Duration::from_millis(2));
    }

    while !queue.is_empty() {
        thread::sleep(Duration::from_millis(10));
    }
    let released = queue.shutdown();

    for worker in workers {
        worker.join().expect("Worker panicked");
    }

    let stats = queue.stats();
    println!("\n4. Statistics:");
    println!("   Served:   {}", served.load(Ordering::Relaxed));
    println!("   Refused:  {}", refused);
    println!("   Released: {}", released);
    println!("   Peak:     {}/{}", stats.peak_size, queue.capacity());

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
