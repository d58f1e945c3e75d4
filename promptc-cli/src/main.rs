//! Demo entry point: compiles one request against an in-memory artifact
//! host and prints the rendered prompt, lint report, and injection report.
//!
//! Usage: cargo run --bin promptc -- "<raw input>" [dial] [token_budget]

use promptc_compiler::CompilerSettings;
use promptc_core::CompileInput;
use promptc_test_utils::TestHost;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: promptc <raw input> [dial] [token_budget]");
        eprintln!();
        eprintln!("Example:");
        eprintln!(r#"  promptc "Write a report on @ai safety for a technical audience" 3 500"#);
        std::process::exit(1);
    }

    let settings = CompilerSettings::from_env();
    let raw_input = args[1].clone();
    let dial: i64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);
    let token_budget: i64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(settings.default_token_budget as i64);

    let input = CompileInput {
        raw_input,
        dial,
        token_budget,
        template_override: None,
        force_artifacts: vec![],
    };

    let host = TestHost::with_ai_fixture();

    match promptc_compiler::compile(&input, &host).await {
        Ok(output) => {
            println!("{}", output.rendered);
            println!("\n--- lint ---");
            println!("{}", serde_json::to_string_pretty(&output.lint).unwrap_or_default());
            println!("\n--- injection ---");
            println!("{}", serde_json::to_string_pretty(&output.injection).unwrap_or_default());
        }
        Err(err) => {
            eprintln!("compile failed: {err}");
            std::process::exit(1);
        }
    }
}
