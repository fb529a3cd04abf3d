use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::info;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::shader::program::ShaderProgram;
use crate::core::shader::uniforms::FrameUniforms;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::gpu::pipeline::FractalPipeline;

/// Draws the fractal program straight into the surface texture. The pixels
/// framebuffer itself is never shown; pixels only provides the device,
/// queue and swap chain.
pub struct ShaderPresenter {
    pixels: Pixels<'static>,
    pipeline: FractalPipeline,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl ShaderPresenter {
    pub fn new(window: &'static Window, program: &ShaderProgram) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(1, 1, surface_texture)?;
        let format = pixels.render_texture_format();

        info!("surface format {:?}", format);

        let pipeline = FractalPipeline::new(pixels.device(), format, program)?;
        let egui_renderer = EguiRenderer::new(pixels.device(), format, None, 1);

        Ok(Self {
            pixels,
            pipeline,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for ShaderPresenter {
    fn render(
        &mut self,
        uniforms: &FrameUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pipeline.write_uniforms(self.pixels.queue(), uniforms);

        let pipeline = &self.pipeline;
        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.width, self.height];

        self.pixels.render_with(|encoder, render_target, context| {
            pipeline.draw(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }
}
