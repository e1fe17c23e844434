mod font;

use crate::{
    app::{App, AppEvent, Display, LocalTime, TimeSource, CLOCK_INTERVAL, QUANTUM},
    util::Ticker,
};

use eframe::{
    egui::{
        self, Button, CentralPanel, Color32, FontFamily, FontId, RichText, Stroke, Ui,
        ViewportBuilder,
    },
    CreationContext,
};
use log::debug;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

const LIME: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
const DECORATIVE_BUTTON_SIZE: f32 = 50.0;
const DEFAULT_FONT_PATH: &str = "./fonts/Let_s_go_Digital_Regular.ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Clock with a static stopwatch readout and decorative buttons
    Clock,
    /// Clock with a working stopwatch
    Stopwatch,
}

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub position: [f32; 2],
    pub background: Color32,
    pub foreground: Color32,
    pub clock_font_size: f32,
    pub stopwatch_font_size: f32,
    pub font_path: PathBuf,
    pub variant: Variant,
}

impl GuiConfig {
    pub fn clock() -> GuiConfig {
        GuiConfig {
            title: "デジタル時計".to_string(),
            inner_size: [400.0, 150.0],
            position: [100.0, 100.0],
            background: Color32::BLACK,
            foreground: LIME,
            clock_font_size: 40.0,
            stopwatch_font_size: 30.0,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            variant: Variant::Clock,
        }
    }

    pub fn stopwatch() -> GuiConfig {
        GuiConfig {
            inner_size: [520.0, 180.0],
            variant: Variant::Stopwatch,
            ..GuiConfig::clock()
        }
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.inner_size)
                .with_position(self.position),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopwatchAction {
    Toggle,
    Reset,
    None,
}

/// Space toggles and R resets, unless a button already acted this frame or a widget holds keyboard
/// focus. A focused button treats Space as a click of its own.
fn shortcut_action(
    clicked: StopwatchAction,
    widget_focused: bool,
    toggle_pressed: bool,
    reset_pressed: bool,
) -> StopwatchAction {
    if clicked != StopwatchAction::None || widget_focused {
        return clicked;
    }

    if toggle_pressed {
        StopwatchAction::Toggle
    } else if reset_pressed {
        StopwatchAction::Reset
    } else {
        StopwatchAction::None
    }
}

pub struct ClockGui {
    config: GuiConfig,
    app: App,
    time_source: Box<dyn TimeSource>,
    clock_ticker: Ticker,
    stopwatch_ticker: Ticker,
    font_family: FontFamily,
}

impl ClockGui {
    pub fn new(cc: &CreationContext<'_>, config: GuiConfig) -> ClockGui {
        let font_family = font::install_display_font(&cc.egui_ctx, &config.font_path);
        Self::with_time_source(config, Box::new(LocalTime), font_family, Instant::now())
    }

    fn with_time_source(
        config: GuiConfig,
        time_source: Box<dyn TimeSource>,
        font_family: FontFamily,
        now: Instant,
    ) -> ClockGui {
        let app = App::new(time_source.now());

        let mut clock_ticker = Ticker::new(CLOCK_INTERVAL);
        clock_ticker.start(now);

        ClockGui {
            config,
            app,
            time_source,
            clock_ticker,
            stopwatch_ticker: Ticker::new(QUANTUM),
            font_family,
        }
    }

    fn poll_timers(&mut self, now: Instant) {
        if self.clock_ticker.poll(now) > 0 {
            self.app
                .handle_event(AppEvent::ClockTick(self.time_source.now()));
        }

        let fired = self.stopwatch_ticker.poll(now);
        if fired > 0 {
            self.app.handle_event(AppEvent::StopwatchTick(QUANTUM * fired));
        }
    }

    fn handle_stopwatch_action(&mut self, action: StopwatchAction, now: Instant) {
        match action {
            StopwatchAction::Toggle => self.app.handle_event(AppEvent::ToggleRequested),
            StopwatchAction::Reset => self.app.handle_event(AppEvent::ResetRequested),
            StopwatchAction::None => (),
        }

        // The 10ms timer runs exactly when the stopwatch does
        if self.app.is_running() {
            if !self.stopwatch_ticker.is_active() {
                debug!("Starting stopwatch timer");
                self.stopwatch_ticker.start(now);
            }
        } else if self.stopwatch_ticker.is_active() {
            debug!("Stopping stopwatch timer");
            self.stopwatch_ticker.stop();
        }
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        [
            self.clock_ticker.time_until_next(now),
            self.stopwatch_ticker.time_until_next(now),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(CLOCK_INTERVAL)
    }

    fn font(&self, size: f32) -> FontId {
        FontId::new(size, self.font_family.clone())
    }

    fn readout(&self, text: impl Into<String>, size: f32) -> RichText {
        RichText::new(text)
            .font(self.font(size))
            .color(self.config.foreground)
    }
}

impl eframe::App for ClockGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_timers(now);

        let display = self.app.display();

        let frame = egui::Frame::none().fill(self.config.background);
        let mut action = CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| match self.config.variant {
                    Variant::Clock => {
                        render_static_stopwatch(ui, self, &display);
                        StopwatchAction::None
                    }
                    Variant::Stopwatch => render_stopwatch(ui, self, &display),
                })
                .inner
            })
            .inner;

        if self.config.variant == Variant::Stopwatch {
            let widget_focused = ctx.memory(|m| m.focus().is_some());
            action = ctx.input(|i| {
                shortcut_action(
                    action,
                    widget_focused,
                    i.key_pressed(egui::Key::Space),
                    i.key_pressed(egui::Key::R),
                )
            });
        }

        self.handle_stopwatch_action(action, now);

        ctx.request_repaint_after(self.next_repaint(now));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.config.background.to_normalized_gamma_f32()
    }
}

fn render_static_stopwatch(ui: &mut Ui, gui: &ClockGui, display: &Display) {
    ui.vertical(|ui| {
        ui.label(gui.readout("00:00:00", gui.config.stopwatch_font_size));
    });

    ui.vertical(|ui| {
        for _ in 0..3 {
            let button = Button::new(" ")
                .min_size(egui::vec2(DECORATIVE_BUTTON_SIZE, DECORATIVE_BUTTON_SIZE))
                .rounding(DECORATIVE_BUTTON_SIZE / 2.0)
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(2.0, Color32::BLACK));
            ui.add(button);
        }
    });

    render_clock(ui, gui, display);
}

fn render_stopwatch(ui: &mut Ui, gui: &ClockGui, display: &Display) -> StopwatchAction {
    let action = ui
        .vertical(|ui| {
            ui.label(gui.readout(display.stopwatch.as_str(), gui.config.stopwatch_font_size));

            ui.horizontal(|ui| {
                let toggle = ui.button(display.toggle_label);
                let reset = ui.button("Reset");
                if toggle.clicked() {
                    StopwatchAction::Toggle
                } else if reset.clicked() {
                    StopwatchAction::Reset
                } else {
                    StopwatchAction::None
                }
            })
            .inner
        })
        .inner;

    render_clock(ui, gui, display);
    action
}

fn render_clock(ui: &mut Ui, gui: &ClockGui, display: &Display) {
    ui.vertical(|ui| {
        ui.label(gui.readout(display.date.as_str(), gui.config.clock_font_size));
        ui.label(gui.readout(display.time.as_str(), gui.config.clock_font_size));
    });
}
