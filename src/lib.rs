use std::sync::mpsc::{self, Receiver};

use three_d::{
    AmbientLight, Attenuation, Camera, ClearState, Context, CpuTexture, Degrees, Event,
    FrameInput, FrameOutput, GUI, MouseButton, PointLight, Srgba, Vec3, Viewport,
    window::{Window, WindowSettings},
};
#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::*;

pub mod control;
pub mod gfx;
pub mod gui;
pub mod loader;
pub mod picker;
pub mod registry;
pub mod scene;
pub mod sim;

use control::{CameraControl, HOME_CAMERA_POSITION};
use loader::{TextureLatch, TextureMessage, TextureSlot};
use scene::SceneObjects;
use sim::SimState;

pub(crate) struct Program {
    window: Option<Window>,
    camera: Camera,
    control: CameraControl,
    gui: GUI,

    sun_light: PointLight,
    ambient_light: AmbientLight,

    scene: SceneObjects,
    state: SimState,

    latch: TextureLatch,
    texture_inbox: Receiver<TextureMessage>,
    /// Skybox faces held back until all six have resolved.
    pending_skybox: [Option<CpuTexture>; 6],
}

impl Program {
    fn new_window() -> Window {
        let res = Window::new(WindowSettings {
            title: "Solar System".into(),
            min_size: (64, 64),
            ..Default::default()
        });
        match res {
            Ok(w) => w,
            Err(e) => {
                if cfg!(target_family = "wasm") {
                    panic!("Error when creating window: {e}");
                } else {
                    println!("Error when creating window: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    fn new_camera(viewport: Viewport) -> Camera {
        Camera::new_perspective(
            viewport,
            HOME_CAMERA_POSITION,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Degrees { 0: 75.0 },
            0.1,
            1000.0,
        )
    }
    // The point light sits inside the sun mesh, which renders unlit.
    fn new_sun_light(context: &Context) -> PointLight {
        PointLight::new(
            context,
            2.0,
            Srgba::WHITE,
            Vec3::new(0.0, 0.0, 0.0),
            Attenuation {
                constant: 1.0,
                linear: 0.0,
                quadratic: 0.0,
            },
        )
    }
    fn new_ambient_light(context: &Context) -> AmbientLight {
        AmbientLight::new(context, 0.2, Srgba::WHITE)
    }

    pub(crate) fn new() -> Self {
        let window = Self::new_window();
        let context = window.gl();
        let camera = Self::new_camera(window.viewport());
        let control = CameraControl::new();
        let gui = gui::create(&context);

        let sun_light = Self::new_sun_light(&context);
        let ambient_light = Self::new_ambient_light(&context);

        let scene = SceneObjects::new(&context);
        let state = SimState::new();

        let (sender, texture_inbox) = mpsc::channel();
        let latch = loader::start_loading(sender);

        Self {
            window: Some(window),
            camera,
            control,
            gui,
            sun_light,
            ambient_light,
            scene,
            state,
            latch,
            texture_inbox,
            pending_skybox: Default::default(),
        }
    }

    pub(crate) fn run(mut self) {
        if let Some(window) = self.window.take() {
            window.render_loop(move |frame_input| self.tick(frame_input));
        }
    }

    fn tick(&mut self, mut frame_input: FrameInput) -> FrameOutput {
        self.drain_texture_inbox();

        self.state.advance_frame(frame_input.accumulated_time);

        gui::update(
            &mut self.gui,
            &mut self.state,
            &mut self.control,
            &mut self.camera,
            &self.latch,
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
        );

        self.camera.set_viewport(frame_input.viewport);
        self.handle_picking(&frame_input.events);
        self.control
            .handle_events(&mut self.camera, &mut frame_input.events, frame_input.elapsed_time);

        self.scene.apply(&self.state);

        let clear_state = if self.state.light_theme {
            ClearState::color_and_depth(0.88, 0.92, 0.97, 1.0, 1.0)
        } else {
            ClearState::color_and_depth(0.0, 0.0, 0.0, 1.0, 1.0)
        };

        frame_input
            .screen()
            .clear(clear_state)
            .render(
                &self.camera,
                self.scene.objects(),
                &[&self.sun_light, &self.ambient_light],
            )
            .write(|| self.gui.render())
            .unwrap();

        FrameOutput::default()
    }

    fn drain_texture_inbox(&mut self) {
        while let Ok(message) = self.texture_inbox.try_recv() {
            self.latch.complete_one();
            match (message.slot, message.texture) {
                (TextureSlot::Body(id), Some(texture)) => {
                    self.scene.set_body_texture(id, &texture);
                }
                (TextureSlot::SkyboxFace(face), Some(texture)) => {
                    self.pending_skybox[face] = Some(texture);
                    self.try_build_skybox();
                }
                // Failure was already logged; the fallback color stays.
                (_, None) => {}
            }
        }
    }

    fn try_build_skybox(&mut self) {
        if !self.pending_skybox.iter().all(|face| face.is_some()) {
            return;
        }
        let mut resolved = Vec::with_capacity(self.pending_skybox.len());
        for face in &mut self.pending_skybox {
            match face.take() {
                Some(texture) => resolved.push(texture),
                None => return,
            }
        }
        if let Ok(faces) = <[CpuTexture; 6]>::try_from(resolved) {
            self.scene.set_skybox(&faces);
        }
    }

    fn handle_picking(&mut self, events: &[Event]) {
        for event in events {
            let Event::MousePress {
                button: MouseButton::Left,
                position,
                handled,
                ..
            } = event
            else {
                continue;
            };
            if *handled {
                continue;
            }

            let ndc = picker::normalized_cursor((position.x, position.y), self.camera.viewport());
            let hit = picker::pick_body(&self.camera, ndc, &self.state);
            self.state.apply_pick(hit);
        }
    }
}

pub fn run() {
    Program::new().run();
}

#[cfg(target_family = "wasm")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    run();
}
