use std::time::Duration;

use conduit::{Cancel, Error, from_iter, make, merge, prelude::*, work_fn};

#[tokio::main]
async fn main() {
    let token = Cancel::new();

    let numbers = from_iter(&token, 1..=20u64);
    let mut seed = 7u64;
    let noise = make(&token, move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(seed % 100)
    });

    let (evens, audit) = merge(&token, [numbers, noise])
        .filter(&token, |n| n % 2 == 0)
        .tee(&token);

    let results = evens.pool(
        &token,
        4,
        work_fn(|_token, n: u64| async move {
            tokio::time::sleep(Duration::from_millis(n)).await;
            if n % 10 == 0 {
                return Err(Error::new("round number").value("n", n.to_string()));
            }
            Ok(n * n)
        }),
    );

    let auditor = tokio::spawn(async move {
        let mut seen = 0;
        while audit.recv().await.is_some() {
            seen += 1;
        }
        seen
    });

    let mut received = 0;
    while let Some(ret) = results.recv().await {
        match ret {
            Ok(square) => println!("square {square}"),
            Err(err) => println!("failed: {err}"),
        }

        received += 1;
        if received == 25 {
            token.cancel();
        }
    }

    println!("audited {:?} items", auditor.await);
}
