use crate::core::constants::ANALYSER_FFT_SIZE;
use crate::core::{average_magnitude, LoudnessSource};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `<audio>` -> analyser -> speakers. A media element can only be wrapped
/// once, so the graph is built on the first activation and reused after.
#[derive(Clone)]
pub struct AudioGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
}

impl AudioGraph {
    pub fn new(media: &web::HtmlMediaElement) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        match Self::connect(&ctx, media) {
            Ok(analyser) => {
                log::info!(
                    "[audio] graph ready, {} bins",
                    analyser.frequency_bin_count()
                );
                Ok(Self { ctx, analyser })
            }
            Err(e) => {
                _ = ctx.close();
                Err(e)
            }
        }
    }

    // A wrapped media element cannot be wrapped again, so it goes last.
    fn connect(
        ctx: &web::AudioContext,
        media: &web::HtmlMediaElement,
    ) -> anyhow::Result<web::AnalyserNode> {
        let analyser = ctx
            .create_analyser()
            .map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect analyser: {:?}", e))?;
        let source = ctx
            .create_media_element_source(media)
            .map_err(|e| anyhow::anyhow!("media source: {:?}", e))?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("connect source: {:?}", e))?;
        Ok(analyser)
    }

    pub async fn resume_if_suspended(&self) {
        if self.ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        match self.ctx.resume() {
            Ok(promise) => {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {:?}", e);
                }
            }
            Err(e) => log::warn!("[audio] resume error: {:?}", e),
        }
    }

    pub fn feed(&self) -> AnalyserFeed {
        AnalyserFeed {
            analyser: self.analyser.clone(),
            bins: vec![0; self.analyser.frequency_bin_count() as usize],
        }
    }
}

/// Live loudness: mean of the analyser's byte frequency data.
pub struct AnalyserFeed {
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl LoudnessSource for AnalyserFeed {
    fn sample(&mut self) -> Option<f32> {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        Some(average_magnitude(&self.bins))
    }
}

pub async fn play(media: &web::HtmlMediaElement) -> anyhow::Result<()> {
    let promise = media
        .play()
        .map_err(|e| anyhow::anyhow!("play: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("play rejected: {:?}", e))?;
    Ok(())
}
