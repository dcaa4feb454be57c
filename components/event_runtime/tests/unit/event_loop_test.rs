//! Unit tests for the event loop

use event_runtime::{EventLoop, MicroTask, Task};
use fetch_types::WorkerError;
use std::sync::{Arc, Mutex};

#[test]
fn test_reaction_lands_between_dispatches() {
    let mut el = EventLoop::new();
    let order = Arc::new(Mutex::new(String::new()));

    // The reaction queued alongside the first dispatch must be delivered
    // before the second dispatch starts.
    let o = order.clone();
    el.enqueue_task(Task::new(move || {
        o.lock().unwrap().push('1');
        Ok(())
    }));
    let o = order.clone();
    el.enqueue_microtask(MicroTask::new(move || {
        o.lock().unwrap().push('m');
        Ok(())
    }));
    let o = order.clone();
    el.enqueue_task(Task::new(move || {
        o.lock().unwrap().push('2');
        Ok(())
    }));

    el.run_until_done().unwrap();
    assert_eq!(*order.lock().unwrap(), "1m2");
}

#[test]
fn test_one_cycle_delivers_one_dispatch() {
    let mut el = EventLoop::new();
    let count = Arc::new(Mutex::new(0));

    for _ in 0..3 {
        let c = count.clone();
        el.enqueue_task(Task::new(move || {
            *c.lock().unwrap() += 1;
            Ok(())
        }));
    }

    el.process_one_cycle().unwrap();
    assert_eq!(*count.lock().unwrap(), 1);
    assert_eq!(el.pending_tasks(), 2);
    assert!(!el.is_idle());
}

#[test]
fn test_error_from_reaction_propagates() {
    let mut el = EventLoop::new();
    el.enqueue_task(Task::new(|| Ok(())));
    el.enqueue_microtask(MicroTask::new(|| {
        Err(WorkerError::InvalidState {
            expected: "installing worker present".to_string(),
            actual: "none".to_string(),
        })
    }));

    assert!(el.run_until_done().is_err());
}
