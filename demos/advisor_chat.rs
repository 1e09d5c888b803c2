//! One-shot advisory question. The question comes from the command line;
//! endpoint and model come from OLLAMA_URL / OLLAMA_MODEL.
//!
//! ```sh
//! cargo run --example advisor_chat -- "CFOP 5.101 vs 5.102: diferenças práticas?"
//! ```

use fiscal_record_tracker::*;

fn main() {
    env_logger::init();

    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let question = if question.trim().is_empty() {
        "CFOP 5.101 vs 5.102 para venda interna: diferenças práticas?".to_string()
    } else {
        question
    };

    let config = AdvisorConfig::from_env();
    let client = AdvisoryClient::new();

    if !client.available(&config.endpoint) {
        eprintln!(
            "Ollama não detectado em {} (modelo {}). A consulta será tentada mesmo assim.",
            config.endpoint, config.model
        );
    }

    println!("Você: {question}");
    let reply = client.ask(&question, &config, DEFAULT_TEMPERATURE, DEFAULT_TOP_P);
    println!("I.A.: {reply}");
}
