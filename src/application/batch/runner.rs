//! Batch Runner - 批量渲染执行器
//!
//! 按目录顺序逐单元渲染：合成、落盘、节流等待。
//! 单元失败只记录不中断，整个目录总是处理到底。

use std::sync::Arc;

use crate::application::ports::{
    AudioSinkPort, RateGatePort, SpeechEnginePort, SynthesisRequest,
};
use crate::domain::narration::{NarrationCatalog, NarrationUnit};
use crate::domain::voice::VoiceSettings;

use super::report::{BatchReport, RenderedAudio, UnitOutcome};

/// 批量渲染执行器
///
/// 严格串行：一个单元完成网络往返和落盘之后才开始下一个
pub struct BatchRunner {
    engine: Arc<dyn SpeechEnginePort>,
    sink: Arc<dyn AudioSinkPort>,
    gate: Arc<dyn RateGatePort>,
    settings: VoiceSettings,
}

impl BatchRunner {
    pub fn new(
        engine: Arc<dyn SpeechEnginePort>,
        sink: Arc<dyn AudioSinkPort>,
        gate: Arc<dyn RateGatePort>,
        settings: VoiceSettings,
    ) -> Self {
        Self {
            engine,
            sink,
            gate,
            settings,
        }
    }

    /// 渲染单个旁白单元
    ///
    /// 合成或落盘的错误在此转化为结果记录，不向调用方传播。
    /// 只有完整收到成功响应后才写文件，不会留下半成品。
    pub async fn render_unit(&self, unit: &NarrationUnit) -> UnitOutcome {
        let request = SynthesisRequest {
            unit_id: unit.id().to_string(),
            text: unit.text().to_string(),
            settings: self.settings.clone(),
        };

        let result = match self.engine.synthesize(request).await {
            Ok(response) => match self.sink.save(unit.id(), &response.audio_data).await {
                Ok(path) => {
                    tracing::info!(
                        unit_id = %unit.id(),
                        path = %path.display(),
                        bytes = response.audio_data.len(),
                        "Narration unit rendered"
                    );
                    Ok(RenderedAudio {
                        byte_length: response.audio_data.len(),
                        path,
                    })
                }
                Err(e) => {
                    tracing::error!(unit_id = %unit.id(), error = %e, "Failed to save audio");
                    Err(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!(unit_id = %unit.id(), error = %e, "Synthesis failed");
                Err(e.to_string())
            }
        };

        UnitOutcome {
            unit_id: unit.id().to_string(),
            section: unit.section().map(str::to_string),
            duration_secs: unit.duration_secs(),
            result,
        }
    }

    /// 按目录顺序渲染全部单元，返回逐单元报告
    ///
    /// 每个单元之后（无论成败）都经过速率闸门等待
    pub async fn run(&self, catalog: &NarrationCatalog) -> BatchReport {
        tracing::info!(total = catalog.len(), "Batch rendering started");

        let mut outcomes = Vec::with_capacity(catalog.len());
        let mut current_section: Option<&str> = None;

        for unit in catalog.units() {
            if unit.section() != current_section {
                current_section = unit.section();
                if let Some(section) = current_section {
                    tracing::info!(section = %section, "Entering section");
                }
            }

            tracing::info!(unit_id = %unit.id(), "Rendering narration unit");
            outcomes.push(self.render_unit(unit).await);

            self.gate.wait().await;
        }

        let report = BatchReport::new(outcomes);
        tracing::info!(
            succeeded = report.succeeded(),
            total = report.total(),
            synthesized_secs = report.synthesized_duration_secs(),
            "Batch rendering finished"
        );
        report
    }
}
