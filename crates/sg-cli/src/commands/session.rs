use std::io::{self, Write};

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use sg_session::{GameSession, Reply};
use sg_solver::{SolverClient, SolverOutcome, SolverResult};

/// A finished exchange, tagged with the number of the `solve` that started it.
type Arrival = (usize, SolverResult<SolverOutcome>);

pub fn run(preset: Option<&str>, url: Option<&str>, timeout: Option<u64>) -> Result<(), String> {
    let session = super::open_session(preset)?;
    let client = super::solver_client(url, timeout)?;
    let endpoint = client.endpoint().map_err(|e| e.to_string())?;

    println!("  {} Signaling Game Session", "Starting".bold());
    println!(
        "  {} vs {} | Solver: {endpoint}",
        session.fields().p1_name,
        session.fields().p2_name
    );
    println!("  Editing stays open while the solver works; type 'help' or 'quit'.\n");

    let runtime = super::runtime()?;
    let result = runtime.block_on(Repl::new(session, client).run());
    // The stdin reader thread cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}

/// Interactive loop. Each `solve` runs as its own task and reports back
/// over a channel, so input is read while requests are in flight and
/// results are recorded in the order they arrive.
struct Repl {
    session: GameSession,
    client: SolverClient,
    arrivals_tx: mpsc::UnboundedSender<Arrival>,
    arrivals: mpsc::UnboundedReceiver<Arrival>,
    submitted: usize,
    in_flight: usize,
}

impl Repl {
    fn new(session: GameSession, client: SolverClient) -> Self {
        let (arrivals_tx, arrivals) = mpsc::unbounded_channel();
        Self {
            session,
            client,
            arrivals_tx,
            arrivals,
            submitted: 0,
            in_flight: 0,
        }
    }

    async fn run(mut self) -> Result<(), String> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt()?;

        loop {
            tokio::select! {
                biased;
                Some(arrival) = self.arrivals.recv() => {
                    self.record(arrival);
                    prompt()?;
                }
                line = lines.next_line() => {
                    let Some(line) = line.map_err(|e| e.to_string())? else {
                        break;
                    };
                    if !self.handle(&line) {
                        break;
                    }
                    prompt()?;
                }
            }
        }

        // Requests already sent still get shown before exiting.
        if self.in_flight > 0 {
            println!("  Waiting for {} pending result(s)...", self.in_flight);
        }
        while self.in_flight > 0 {
            let Some(arrival) = self.arrivals.recv().await else {
                break;
            };
            self.record(arrival);
        }
        Ok(())
    }

    /// Process one input line. Returns false once the user quits.
    fn handle(&mut self, line: &str) -> bool {
        match self.session.process(line) {
            Ok(Reply::Text(output)) if output.is_empty() => {}
            Ok(Reply::Text(output)) => println!("{output}\n"),
            Ok(Reply::Submit(payload)) => {
                self.submitted += 1;
                self.in_flight += 1;
                let ticket = self.submitted;
                let client = self.client.clone();
                let tx = self.arrivals_tx.clone();
                tokio::spawn(async move {
                    let result = client.solve(&payload).await;
                    // Only fails once the loop has shut down.
                    let _ = tx.send((ticket, result));
                });
                println!(
                    "  {} request #{ticket} ({} in flight)\n",
                    "Solving".dimmed(),
                    self.in_flight
                );
            }
            Ok(Reply::Quit) => return false,
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
        true
    }

    fn record(&mut self, (ticket, result): Arrival) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let view = self.session.record_outcome(&result);
        println!("\n  {} for request #{ticket}:", "Result".bold());
        println!("{view}\n");
    }
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())
}
