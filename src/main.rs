use std::process::ExitCode;

use pokerhand::{run_battery, Hand};
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Each argument is a whole hand, e.g. "As Ks Qs Js 10s"
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        info!("Running showdown battery");
        let failed = run_battery().iter().filter(|o| !o.passed()).count();
        return if failed == 0 {
            ExitCode::SUCCESS
        } else {
            error!(failed, "Showdown battery failed");
            ExitCode::FAILURE
        };
    }

    let mut hands = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.parse::<Hand>() {
            Ok(hand) => hands.push(hand),
            Err(e) => {
                error!(input = %arg, error = %e, "Invalid hand");
                return ExitCode::FAILURE;
            }
        }
    }

    for hand in &hands {
        let evaluation = hand.evaluate();
        let report = json!({
            "hand": hand.to_string(),
            "category": evaluation.category().to_string(),
            "tiebreak": evaluation.tiebreak(),
        });
        println!("{report}");
    }

    if let Some(best) = hands.iter().max() {
        for hand in hands.iter().filter(|hand| *hand == best) {
            info!(%hand, category = %hand.category(), "Winning hand");
        }
    }

    ExitCode::SUCCESS
}
