//! Terminal chat surface.
//!
//! Renders session snapshots and forwards user lines into the
//! orchestrator. Rendering is read-only; `submit` is this surface's only
//! path into the session, and the busy check lives in the orchestrator
//! itself rather than in any input affordance here.

use std::io::Write as _;
use std::sync::Arc;

use karm_ai::{Role, SessionOrchestrator};
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(orchestrator: Arc<SessionOrchestrator>) -> karm_common::Result<()> {
    println!("Hi, I'm Karm, your AI assistant.");
    println!("Ask me anything about healthcare and I am here to help.");
    println!("Type /quit to exit.\n");

    // Render task: prints assistant turns and the typing indicator as
    // snapshots arrive.
    let mut rx = orchestrator.subscribe();
    let render = tokio::spawn(async move {
        let mut printed = 0usize;
        while rx.changed().await.is_ok() {
            let (turns, busy) = {
                let snapshot = rx.borrow_and_update();
                (snapshot.turns.clone(), snapshot.busy)
            };
            for turn in &turns[printed..] {
                if turn.role == Role::Assistant {
                    println!("karm> {}\n", turn.text);
                }
            }
            printed = turns.len();
            if busy {
                println!("karm is typing...");
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let line = line.trim().to_string();
        if line == "/quit" || line == "/exit" {
            break;
        }
        orchestrator.submit(&line).await;
        // Let the render task drain the settled snapshot before the
        // next prompt.
        tokio::task::yield_now().await;
    }

    render.abort();
    println!("Take care! Remember to consult a healthcare professional for medical advice.");
    Ok(())
}
