use anyhow::Result;
use clap::Parser;
use log::info;

use limbic::{AppState, BuiltinLexicon, SentimentAnalyzer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    limbic::init_logger();
    let args = Args::parse();

    info!("Building sentiment analyzer...");
    let analyzer = SentimentAnalyzer::builder()
        .with_lexicon(BuiltinLexicon::English)?
        .build()?;
    let analyzer_info = analyzer.info();
    info!(
        "Analyzer ready ({} positive / {} negative words)",
        analyzer_info.positive_words, analyzer_info.negative_words
    );

    let router = limbic::router(AppState::new(analyzer));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
