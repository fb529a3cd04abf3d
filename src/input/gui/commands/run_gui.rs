use std::marker::PhantomData;

use log::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::interaction::controller::InteractionController;
use crate::core::interaction::limits::InteractionLimits;
use crate::core::shader::program::MANDELBROT_PROGRAM;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::run;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::window_config::WindowConfig;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    window_config: WindowConfig,
    mandelbrot_config: MandelbrotConfig,
    limits: InteractionLimits,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            window_config: WindowConfig::default(),
            mandelbrot_config: MandelbrotConfig::default(),
            limits: InteractionLimits::default(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn with_window_config(mut self, window_config: WindowConfig) -> Self {
        self.window_config = window_config;
        self
    }

    #[must_use]
    pub fn with_mandelbrot_config(mut self, mandelbrot_config: MandelbrotConfig) -> Self {
        self.mandelbrot_config = mandelbrot_config;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: InteractionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Opens the window and blocks until the explorer quits.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.mandelbrot_config.validate()?;
        self.limits.validate()?;
        MANDELBROT_PROGRAM.validate()?;

        let event_loop = EventLoop::new()?;

        // pixels needs the window for the lifetime of the surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.window_config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.window_config.width,
                    self.window_config.height,
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let screen = ScreenSize::new(size.width, size.height).or_else(|_| {
            ScreenSize::new(self.window_config.width, self.window_config.height)
        })?;
        let extent = self.mandelbrot_config.view_extent(screen)?;

        info!(
            "window {}x{} px, plane {:.4} x {:.4}, {} iterations",
            screen.width(),
            screen.height(),
            extent.plane_width(),
            extent.plane_height(),
            self.mandelbrot_config.max_iterations
        );

        let presenter: P = self.presenter_factory.build(window, &MANDELBROT_PROGRAM)?;
        let home = self.mandelbrot_config.home;
        let controller = InteractionController::new(self.limits, extent, screen, home);
        let app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            controller,
            home,
            self.mandelbrot_config.max_iterations,
        );

        run(app, window, event_loop)
    }
}
