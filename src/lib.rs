//! Audio-reactive pseudo-3D tree on a 2D canvas.
//!
//! `core` holds the platform-independent scene and builds on every target.
//! The remaining modules wire it to the browser and only exist on wasm32.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use entry::start;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::audio::{self, AudioGraph};
    use crate::canvas::CanvasPainter;
    use crate::core::{LoudnessSource, Scene, SceneConfig, Silence};
    use crate::dom;
    use crate::frame::{self, FrameContext, SharedFeed};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    const CANVAS_ID: &str = "canvas";
    const AUDIO_ID: &str = "music";
    const MUSIC_BUTTON_ID: &str = "musicBtn";

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_to_window(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_to_window(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    /// First click builds the audio graph; every click tries to play. On
    /// success the button goes away and the live analyser replaces silence.
    fn wire_music_button(
        document: &web::Document,
        media: web::HtmlMediaElement,
        feed: SharedFeed,
    ) {
        let graph: Rc<RefCell<Option<AudioGraph>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(RefCell::new(false));
        dom::add_click_listener(document, MUSIC_BUTTON_ID, move || {
            if pending.replace(true) {
                log::warn!("[audio] activation already in progress; ignoring click");
                return;
            }
            let existing = graph.borrow().clone();
            let ready = match existing {
                Some(g) => g,
                None => match AudioGraph::new(&media) {
                    Ok(g) => {
                        *graph.borrow_mut() = Some(g.clone());
                        g
                    }
                    Err(e) => {
                        log::error!("[audio] init error: {:?}", e);
                        *pending.borrow_mut() = false;
                        return;
                    }
                },
            };
            let media = media.clone();
            let feed = feed.clone();
            let pending = pending.clone();
            spawn_local(async move {
                match audio::play(&media).await {
                    Ok(()) => {
                        ready.resume_if_suspended().await;
                        if let Some(doc) = dom::window_document() {
                            dom::hide(&doc, MUSIC_BUTTON_ID);
                        }
                        let live: Box<dyn LoudnessSource> = Box::new(ready.feed());
                        *feed.borrow_mut() = live;
                        log::info!("[audio] playing; loudness is live");
                    }
                    Err(e) => log::error!("[audio] play error: {:?}", e),
                }
                *pending.borrow_mut() = false;
            });
        });
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("tree-web starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
        wire_canvas_resize(&canvas);

        // Invalid configuration is fatal: no loop is started.
        let scene = Scene::new(&SceneConfig::default())?;
        let painter = CanvasPainter::new(&canvas)?;
        let feed: SharedFeed = Rc::new(RefCell::new(Box::new(Silence) as Box<dyn LoudnessSource>));

        match dom::element_by_id::<web::HtmlMediaElement>(&document, AUDIO_ID) {
            Ok(media) => wire_music_button(&document, media, feed.clone()),
            Err(e) => log::warn!("[audio] music disabled: {:?}", e),
        }

        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(scene, canvas, painter, feed)));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
