//! Kuravoice - 旁白批量音频生成
//!
//! 运行模式:
//! - `kuravoice test` - 连通性检查：列出目标语言的可用语音并渲染一条样例台词
//! - `kuravoice`      - 批量渲染：确认后按台本顺序渲染全部旁白单元

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use kuravoice::application::batch::BatchRunner;
use kuravoice::application::ports::SpeechEnginePort;
use kuravoice::application::queries::voices_for_language;
use kuravoice::config::{load_config, print_config, AppConfig};
use kuravoice::domain::narration::{demo_catalog, NarrationCatalog, NarrationUnit};
use kuravoice::infrastructure::adapters::{
    ElevenLabsClient, ElevenLabsClientConfig, FileAudioSink, FixedIntervalGate,
};

/// 诊断模式使用的样例台词
const SAMPLE_TEXT: &str = "こんにちは。わたくしはクラバトラーです。テスト音声です。";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},kuravoice={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Kuravoice - 旁白批量音频生成");
    print_config(&config);

    if config.provider.api_key.is_empty() {
        anyhow::bail!(
            "provider.api_key is not set; configure it in config.toml or via KURAVOICE_PROVIDER__API_KEY"
        );
    }

    // 创建 ElevenLabs 客户端
    let engine_config = ElevenLabsClientConfig {
        base_url: config.provider.base_url.clone(),
        api_key: config.provider.api_key.clone(),
        voice_id: config.provider.voice_id.clone(),
        model_id: config.provider.model_id.clone(),
        timeout_secs: config.provider.timeout_secs,
    };
    let engine = Arc::new(ElevenLabsClient::new(engine_config)?);

    let sink = Arc::new(FileAudioSink::new(&config.output.dir));
    let gate = Arc::new(FixedIntervalGate::new(config.batch.interval()));
    let runner = BatchRunner::new(engine.clone(), sink, gate, config.voice.settings());

    match std::env::args().nth(1).as_deref() {
        Some("test") => run_diagnostics(engine.as_ref(), &runner, &config).await,
        _ => run_batch(&runner, &config).await,
    }
}

/// 连通性检查：列出语音并渲染一条样例台词
async fn run_diagnostics(
    engine: &dyn SpeechEnginePort,
    runner: &BatchRunner,
    config: &AppConfig,
) -> anyhow::Result<()> {
    tracing::info!("Running connectivity check");

    let voices = engine
        .list_voices()
        .await
        .map_err(|e| anyhow::anyhow!("Voice listing failed: {}", e))?;
    let matched = voices_for_language(voices, &config.batch.language);

    println!("Voices supporting '{}':", config.batch.language);
    println!("------------------------------");
    if matched.is_empty() {
        println!("(none)");
    }
    for voice in &matched {
        println!("ID:   {}", voice.voice_id);
        println!("Name: {}", voice.name);
        println!("Desc: {}", voice.description.as_deref().unwrap_or("N/A"));
        println!("------------------------------");
    }

    // 渲染一条样例确认合成链路
    let sample = NarrationUnit::new("test", SAMPLE_TEXT)?;
    let outcome = runner.render_unit(&sample).await;
    match &outcome.result {
        Ok(audio) => {
            println!("Sample rendered: {}", audio.path.display());
        }
        Err(detail) => {
            println!("Sample render failed: {}", detail);
        }
    }

    Ok(())
}

/// 批量渲染：交互确认后处理整个台本目录
async fn run_batch(runner: &BatchRunner, config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.batch.catalog_path).await?;

    // 真实调用会产生费用，确认后才开始
    print!(
        "About to render {} narration units via the provider API (charges apply). Continue? [y/N]: ",
        catalog.len()
    );
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return Ok(());
    }

    let report = runner.run(&catalog).await;

    println!(
        "Rendered {}/{} units, {} declared seconds of narration",
        report.succeeded(),
        report.total(),
        report.synthesized_duration_secs()
    );
    for outcome in report.outcomes().iter().filter(|o| !o.is_success()) {
        if let Err(detail) = &outcome.result {
            println!("  failed: {} ({})", outcome.unit_id, detail);
        }
    }

    Ok(())
}

/// 加载台本目录：配置了外部文件则读文件，否则使用内置演示台本
async fn load_catalog(path: &Option<PathBuf>) -> anyhow::Result<NarrationCatalog> {
    match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read catalog file {:?}", path))?;
            Ok(NarrationCatalog::from_toml_str(&raw)?)
        }
        None => Ok(demo_catalog()?),
    }
}
