use crate::canvas::CanvasPainter;
use crate::core::{drive_tick, DrawCommand, LoudnessSource, Scene, Surface};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Loudness source shared between the frame loop and the music button.
pub type SharedFeed = Rc<RefCell<Box<dyn LoudnessSource>>>;

// Log the first paint failure, then one in every this many.
const PAINT_FAILURE_LOG_EVERY: u32 = 600;

pub struct FrameContext {
    pub scene: Scene,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub feed: SharedFeed,
    pub commands: Vec<DrawCommand>,
    pub started: Instant,
    pub paint_failures: u32,
}

impl FrameContext {
    pub fn new(
        scene: Scene,
        canvas: web::HtmlCanvasElement,
        painter: CanvasPainter,
        feed: SharedFeed,
    ) -> Self {
        Self {
            scene,
            canvas,
            painter,
            feed,
            commands: Vec::new(),
            started: Instant::now(),
            paint_failures: 0,
        }
    }

    pub fn frame(&mut self) {
        let time_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        // Read every frame so a resize re-centres the tree immediately.
        let surface = Surface::new(self.canvas.width() as f32, self.canvas.height() as f32);
        {
            let mut feed = self.feed.borrow_mut();
            self.scene
                .frame(time_ms, surface, &mut **feed, &mut self.commands);
        }
        if let Err(e) = self.painter.paint(&self.commands) {
            self.paint_failures += 1;
            if self.paint_failures == 1 || self.paint_failures % PAINT_FAILURE_LOG_EVERY == 0 {
                log::warn!(
                    "[frame] paint error ({} so far): {:?}",
                    self.paint_failures,
                    e
                );
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        drive_tick(&frame_ctx, || request_frame(&tick_clone), FrameContext::frame);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
