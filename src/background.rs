use crate::dom::{self, Listener};
use crate::frame::{Flow, FrameLoop};
use crate::render::ParticleRenderer;
use folio_core::{
    cloud_rotation, generate_particles, CameraRig, SiteConfig, PARTICLE_COUNT,
    PARTICLE_HALF_EXTENT,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything one frame of the background needs, created in a single place.
pub struct ParticleScene {
    canvas: web::HtmlCanvasElement,
    renderer: ParticleRenderer,
    rig: CameraRig,
}

impl ParticleScene {
    pub fn frame(&mut self) {
        self.rig.step();
        let rotation = cloud_rotation(js_sys::Date::now());
        match self.renderer.render(&self.rig.camera, rotation) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure()
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.rig.pointer_moved(x, y);
    }

    /// Keep camera aspect and canvas size in step with the viewport.
    pub fn resize(&mut self) {
        let (w, h) = dom::viewport_size();
        let (w_px, h_px) = dom::sync_canvas_size(&self.canvas, w, h);
        self.rig.resize(w as f32, h as f32);
        self.renderer.resize(w_px, h_px);
    }
}

/// The running particle background: scene, frame loop and its input listeners.
pub struct ParticleBackground {
    scene: Rc<RefCell<ParticleScene>>,
    frames: FrameLoop,
    listeners: Vec<Listener>,
}

impl ParticleBackground {
    pub async fn mount(document: &web::Document, config: &SiteConfig) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement =
            dom::require(document, &config.background_canvas, "HtmlCanvasElement")?;
        let (w, h) = dom::viewport_size();
        let (w_px, h_px) = dom::sync_canvas_size(&canvas, w, h);

        let particles = generate_particles(
            &mut rand::thread_rng(),
            PARTICLE_COUNT,
            PARTICLE_HALF_EXTENT,
        );
        let renderer = ParticleRenderer::new(&canvas, w_px, h_px, &particles).await?;
        let scene = Rc::new(RefCell::new(ParticleScene {
            canvas,
            renderer,
            rig: CameraRig::new(w as f32, h as f32),
        }));

        let weak = Rc::downgrade(&scene);
        let frames = FrameLoop::new(move |_| match weak.upgrade() {
            Some(scene) => {
                scene.borrow_mut().frame();
                Flow::Continue
            }
            None => Flow::Stop,
        });

        Ok(Self {
            scene,
            frames,
            listeners: Vec::new(),
        })
    }

    fn attach_listeners(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            return;
        };
        let on_move = self.scene.clone();
        self.listeners.push(Listener::new(
            document.as_ref(),
            "pointermove",
            move |ev: web::PointerEvent| {
                on_move
                    .borrow_mut()
                    .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
            },
        ));
        let on_resize = self.scene.clone();
        self.listeners.push(Listener::new(
            window.as_ref(),
            "resize",
            move |_: web::Event| on_resize.borrow_mut().resize(),
        ));
    }

    pub fn start(&mut self) {
        if self.frames.is_running() {
            return;
        }
        self.attach_listeners();
        self.frames.start();
        log::info!("[background] running");
    }

    /// Cancel the pending frame and detach the input listeners.
    pub fn stop(&mut self) {
        self.frames.stop();
        self.listeners.clear();
        log::info!("[background] stopped");
    }
}
