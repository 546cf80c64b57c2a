// File: crates/window-demo/src/main.rs
// Summary: Windowed scatter plot with a "Randomize Data" button, rendered via RGBA blit (CPU) using winit + softbuffer.

use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use scatter_core::{ChartConfig, ChartVisual, StateController};
use scatter_render_skia::{randomize_button, read_rgba8, Button, SkiaRenderer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Space under the button, in pixels.
const FOOTER: f32 = 12.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut controller = StateController::new(ChartConfig::default()).context("building chart state")?;
    let button = randomize_button(controller.visual());
    let (frame_w, frame_h) = frame_size(controller.visual(), &button);

    // Any change to the chart schedules a repaint.
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    controller.subscribe(move |_| flag.set(true));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Playing With Scatter Plots")
        .with_inner_size(winit::dpi::PhysicalSize::new(frame_w, frame_h))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let renderer = SkiaRenderer::new();
    let mut cursor: Option<(f64, f64)> = None;
    info!("press R or click \"{}\" to regenerate the data", button.label);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => cursor = Some((position.x, position.y)),
                WindowEvent::CursorLeft { .. } => cursor = None,
                WindowEvent::MouseInput { state: ElementState::Released, button: MouseButton::Left, .. } => {
                    if cursor.is_some_and(|(x, y)| button.contains(x, y)) {
                        randomize(&mut controller);
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::R), .. },
                    ..
                } => randomize(&mut controller),
                _ => {}
            },
            Event::MainEventsCleared => {
                if dirty.get() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                dirty.set(false);
                if let Err(e) = draw(&mut surface, &renderer, controller.visual(), &button, frame_w, frame_h) {
                    error!(error = %e, "frame failed");
                }
            }
            _ => {}
        }
    })
}

fn randomize(controller: &mut StateController) {
    if let Err(e) = controller.randomize() {
        error!(error = %e, "randomize failed");
    }
}

fn frame_size(chart: &ChartVisual, button: &Button) -> (u32, u32) {
    let w = chart.width.ceil() as u32;
    let h = (button.top + button.height + FOOTER).ceil() as u32;
    (w.max(1), h.max(1))
}

fn draw(
    surface: &mut softbuffer::Surface,
    renderer: &SkiaRenderer,
    chart: &ChartVisual,
    button: &Button,
    w: u32,
    h: u32,
) -> Result<()> {
    let (nw, nh) = NonZeroU32::new(w).zip(NonZeroU32::new(h)).ok_or_else(|| anyhow!("empty frame"))?;
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e:?}"))?;

    let mut sk = renderer.render_surface(chart, Some(button), w as i32, h as i32)?;
    let rgba = read_rgba8(&mut sk, w as i32, h as i32)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB in a u32
        *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
    }
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatter_core::{compose, DataSet};

    #[test]
    fn frame_fits_chart_and_button() {
        let chart = compose(&DataSet::empty(), &ChartConfig::default());
        let button = randomize_button(&chart);
        let (w, h) = frame_size(&chart, &button);
        assert_eq!(w, 500);
        assert!(h as f32 >= button.top + button.height);
    }
}
