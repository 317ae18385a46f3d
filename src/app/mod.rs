use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chat::{CannedResponder, ChatSession};
use crate::constellation::{Constellation, ConstellationConfig};
use crate::portfolio::{PortfolioData, load_portfolio};

mod canvas;
mod render_utils;
mod ui;

#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub portfolio_path: PathBuf,
    pub max_skills: usize,
    pub seed: Option<u64>,
}

pub struct PortfolioApp {
    options: LaunchOptions,
    state: AppState,
    reload_rx: Option<Receiver<Result<PortfolioData, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<PortfolioData, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    portfolio: PortfolioData,
    max_skills: usize,
    rng: StdRng,
    constellation: Constellation,
    config: ConstellationConfig,
    paused: bool,
    step_once: bool,
    search: String,
    chat: ChatSession,
    chat_input: String,
    show_chat: bool,
    dark_mode: bool,
    opened_at: Option<f64>,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
    link_count: usize,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: LaunchOptions) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let state = Self::start_load(options.portfolio_path.clone());
        Self {
            options,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(path: PathBuf) -> Receiver<Result<PortfolioData, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_portfolio(&path).map_err(|error| format!("{error:#}"));
            match &result {
                Ok(data) => log::info!(
                    "loaded portfolio for {} from {}",
                    data.display_name(),
                    path.display()
                ),
                Err(error) => log::error!("{error}"),
            }
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(path: PathBuf) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(path),
        }
    }

    fn ready(&self, portfolio: PortfolioData) -> AppState {
        let rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AppState::Ready(Box::new(ViewModel::new(
            portfolio,
            self.options.max_skills,
            rng,
        )))
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;
        let mut retry = false;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(portfolio)) => transition = Some(Ok(portfolio)),
                    Ok(Err(error)) => transition = Some(Err(error)),
                    Err(TryRecvError::Empty) => ctx.request_repaint(),
                    Err(TryRecvError::Disconnected) => {
                        transition = Some(Err("Background load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading portfolio...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Could not load portfolio data");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(6.0);
                    ui.label(format!(
                        "Make sure {} exists, is not empty and is valid JSON.",
                        self.options.portfolio_path.display()
                    ));
                    ui.add_space(10.0);
                    retry = ui.button("Retry").clicked();
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.options, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.options.portfolio_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if retry {
            self.state = Self::start_load(self.options.portfolio_path.clone());
            return;
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            self.state = match result {
                Ok(portfolio) => self.ready(portfolio),
                Err(error) => AppState::Error(error),
            };
        }
    }
}

impl ViewModel {
    fn new(portfolio: PortfolioData, max_skills: usize, rng: StdRng) -> Self {
        let constellation = Constellation::new(portfolio.constellation_skills(max_skills));
        let config = constellation.config();
        let chat = ChatSession::new(
            Box::new(CannedResponder::new(&portfolio)),
            portfolio.display_name(),
        );

        Self {
            portfolio,
            max_skills,
            rng,
            constellation,
            config,
            paused: false,
            step_once: false,
            search: String::new(),
            chat,
            chat_input: String::new(),
            show_chat: false,
            dark_mode: true,
            opened_at: None,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
            link_count: 0,
        }
    }

    /// Throws the current layout away; the next frame lays out a fresh one.
    fn scatter(&mut self) {
        let skills = self.constellation.skills().to_vec();
        self.constellation = Constellation::with_config(skills, self.config);
    }
}
