use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use batchcalc::dispatch::{CalculatorService, IdScope, WorkerPool};

fn request(lines: &[&str]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

#[test]
fn single_request_gets_id_one() {
    let service = CalculatorService::new(IdScope::Service);
    let outcome = service.process_request(&request(&["x = 5", "y = x * 2", "z = x + y"]));

    assert_eq!(outcome.request_id, 1);
    assert!(!outcome.has_error());
    assert_eq!(outcome.result.unwrap(), "(x=5,y=10,z=15)");
}

#[test]
fn batch_outcomes_keep_submission_order() {
    let service = CalculatorService::new(IdScope::Service);
    let batch = vec![request(&["a = 10", "b = a * 2", "c = a + b"]),
                     request(&["x = 2 * 3", "y = x * 2"]),
                     request(&["p = 300"]),];

    let outcomes = service.process_batch(&batch);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].request_id, 1);
    assert_eq!(outcomes[0].result, Ok("(a=10,b=20,c=30)".to_string()));
    assert_eq!(outcomes[1].request_id, 2);
    assert_eq!(outcomes[1].result, Ok("(x=6,y=12)".to_string()));
    assert_eq!(outcomes[2].request_id, 3);
    assert_eq!(outcomes[2].result, Ok("(p=300)".to_string()));
}

#[test]
fn a_failing_request_does_not_affect_its_siblings() {
    let service = CalculatorService::new(IdScope::Service);
    let batch = vec![request(&["x = 10"]),
                     request(&["y = 1 / 0"]),
                     request(&["z = 20"]),];

    let outcomes = service.process_batch(&batch);

    assert_eq!(outcomes[0].result, Ok("(x=10)".to_string()));
    assert!(outcomes[1].has_error());
    assert!(outcomes[1].result.as_ref().unwrap_err().contains("Division by zero"));
    assert_eq!(outcomes[2].result, Ok("(z=20)".to_string()));
}

#[test]
fn requests_never_see_each_others_variables() {
    let service = CalculatorService::new(IdScope::Service);
    let batch = vec![request(&["x = 100", "result1 = x + 50"]),
                     request(&["x = 200", "result2 = x + 50"]),
                     request(&["result3 = x + 50"]),];

    let outcomes = service.process_batch(&batch);

    assert_eq!(outcomes[0].result, Ok("(result1=150,x=100)".to_string()));
    assert_eq!(outcomes[1].result, Ok("(result2=250,x=200)".to_string()));
    // The third request never assigned x, so it reads 0 there.
    assert_eq!(outcomes[2].result, Ok("(result3=50)".to_string()));
}

#[test]
fn large_batch_preserves_order_and_numbering() {
    let service = CalculatorService::new(IdScope::Service);
    let batch: Vec<Vec<String>> = (0..50).map(|n| vec![format!("v = {n} * 2")]).collect();

    let outcomes = service.process_batch(&batch);

    assert_eq!(outcomes.len(), 50);
    for (n, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.request_id, n + 1);
        assert_eq!(outcome.result, Ok(format!("(v={})", n * 2)));
    }
}

#[test]
fn service_scope_numbers_across_batches() {
    let service = CalculatorService::new(IdScope::Service);

    let first = service.process_batch(&[request(&["a = 1"]), request(&["b = 2"])]);
    let second = service.process_batch(&[request(&["c = 3"])]);

    assert_eq!(first[0].request_id, 1);
    assert_eq!(first[1].request_id, 2);
    assert_eq!(second[0].request_id, 3);
}

#[test]
fn batch_scope_restarts_numbering() {
    let service = CalculatorService::new(IdScope::Batch);

    let first = service.process_batch(&[request(&["a = 1"]), request(&["b = 2"])]);
    let second = service.process_batch(&[request(&["c = 3"])]);

    assert_eq!(first[0].request_id, 1);
    assert_eq!(first[1].request_id, 2);
    assert_eq!(second[0].request_id, 1);
}

#[test]
fn empty_batch_yields_no_outcomes() {
    let service = CalculatorService::new(IdScope::Service);
    assert!(service.process_batch(&[]).is_empty());
}

#[test]
fn outcome_rendering() {
    let service = CalculatorService::new(IdScope::Service);

    let ok = service.process_request(&request(&["x = 1"]));
    assert_eq!(ok.to_string(), "Request 1 Result: (x=1)");

    let err = service.process_request(&request(&["x = 1 / 0"]));
    assert_eq!(err.to_string(), "Request 2 Error: Division by zero");
}

#[test]
fn saturated_pool_runs_jobs_on_the_caller() {
    // Two workers, a single queue slot, and jobs that park the workers: the
    // overflow jobs must still all run, on the submitting thread.
    let pool = WorkerPool::new(2, 1);
    let executed = Arc::new(AtomicUsize::new(0));

    for _ in 0..20 {
        let executed = Arc::clone(&executed);
        pool.execute(move || {
                thread::sleep(Duration::from_millis(5));
                executed.fetch_add(1, Ordering::SeqCst);
            });
    }

    drop(pool); // joins the workers, draining the queue
    assert_eq!(executed.load(Ordering::SeqCst), 20);
}

#[test]
fn shutdown_drains_queued_work() {
    let mut pool = WorkerPool::new(2, 8);
    let executed = Arc::new(AtomicUsize::new(0));

    for _ in 0..8 {
        let executed = Arc::clone(&executed);
        pool.execute(move || {
                executed.fetch_add(1, Ordering::SeqCst);
            });
    }

    pool.shutdown();
    assert_eq!(executed.load(Ordering::SeqCst), 8);
}

#[test]
fn service_over_a_tiny_pool_still_orders_outcomes() {
    let service = CalculatorService::with_pool(WorkerPool::new(2, 1), IdScope::Service);
    let batch: Vec<Vec<String>> = (1..=30).map(|n| vec![format!("v = {n}")]).collect();

    let outcomes = service.process_batch(&batch);

    for (slot, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.result, Ok(format!("(v={})", slot + 1)));
    }
}
